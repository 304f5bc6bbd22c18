//! Integration tests for command-level plumbing: record validation and
//! leaderboard ranking over the public API

use nfl_stats::{
    commands::{
        record_filters::{filter_and_convert_records, season_label},
        season_leaders::rank_leaders,
    },
    storage::Player,
    GameRecord, LeaderStat, PlayerId, Season, StatLine, Week,
};
use serde_json::json;

fn raw_records(payload: serde_json::Value) -> Vec<nfl_stats::feed::types::RawGameRecord> {
    serde_json::from_value(payload).unwrap()
}

#[test]
fn test_feed_payload_to_aggregates_end_to_end() {
    // Payload shaped like the real feed: mixed naming, nullable stats,
    // one rollup row, one weekly row, one poisoned row
    let raw = raw_records(json!([
        {
            "season": 2024, "week": 1,
            "passingYds": 287, "passing_attempts": 34, "passing_completions": 25,
            "passing_tds": 2
        },
        {
            "season": "2023", "week": null, "games": 17,
            "passingYds": 3858, "passing_attempts": 538, "passing_completions": 352
        },
        {
            "season": "__proto__", "week": 2,
            "passingYds": 9999
        }
    ]));

    let records = filter_and_convert_records(raw);
    assert_eq!(records.len(), 2);

    let seasons = nfl_stats::aggregate_seasons(&records);
    assert_eq!(seasons.len(), 2);
    assert_eq!(seasons[0].season.as_u16(), 2024);
    assert_eq!(seasons[0].passing.yards, 287);
    assert_eq!(seasons[0].game_count, 1);
    assert_eq!(seasons[1].season.as_u16(), 2023);
    assert_eq!(seasons[1].passing.yards, 3858);
    assert_eq!(seasons[1].game_count, 17);

    // The poisoned row's 9999 yards appear nowhere
    assert!(seasons.iter().all(|s| s.passing.yards != 9999));
}

#[test]
fn test_season_label_accepts_numbers_and_numeric_strings() {
    assert_eq!(season_label(&json!(2016)), Some(2016));
    assert_eq!(season_label(&json!("2025")), Some(2025));
    assert_eq!(season_label(&json!("prototype")), None);
    assert_eq!(season_label(&json!(null)), None);
    assert_eq!(season_label(&json!([2024])), None);
}

fn candidate(id: u64, name: &str, position: &str, season: u16, rec_yards: i64) -> (Player, Vec<GameRecord>) {
    let player = Player {
        player_id: PlayerId::new(id),
        pfr_id: None,
        name: name.to_string(),
        position: position.to_string(),
        team: None,
    };
    let records = vec![GameRecord {
        season: Season::new(season),
        week: Some(Week::new(1)),
        stats: StatLine {
            targets: Some(10),
            receptions: Some(7),
            receiving_yards: Some(rec_yards),
            ..StatLine::default()
        },
    }];
    (player, records)
}

#[test]
fn test_leaderboard_ranks_receiving_yards() {
    let candidates = vec![
        candidate(1, "WR One", "WR", 2024, 110),
        candidate(2, "WR Two", "WR", 2024, 145),
        candidate(3, "TE One", "TE", 2024, 90),
        candidate(4, "Old WR", "WR", 2022, 200),
    ];

    let rows = rank_leaders(
        candidates,
        Season::new(2024),
        LeaderStat::ReceivingYards,
        10,
    );

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].name, "WR Two");
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[0].value, 145);
    assert_eq!(rows[1].name, "WR One");
    assert_eq!(rows[2].name, "TE One");
}

#[test]
fn test_leaderboard_serializes_to_json() {
    let rows = rank_leaders(
        vec![candidate(1, "WR One", "WR", 2024, 110)],
        Season::new(2024),
        LeaderStat::Receptions,
        5,
    );

    let value = serde_json::to_value(&rows).unwrap();
    assert_eq!(value[0]["name"], json!("WR One"));
    assert_eq!(value[0]["value"], json!(7));
    assert_eq!(value[0]["rank"], json!(1));
}
