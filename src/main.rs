//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nfl_stats::{
    cli::{Commands, GetCmd, NflStats},
    commands::{
        db_health::handle_health,
        player_stats::{handle_player_stats, PlayerStatsParams},
        season_leaders::{handle_season_leaders, SeasonLeadersParams},
        sync_data::{handle_sync_data, SyncDataParams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NflStats::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::PlayerStats {
                api,
                player_name,
                season,
                json,
                refresh,
                clear_db,
            } => {
                handle_player_stats(PlayerStatsParams {
                    debug: api.debug,
                    as_json: json,
                    api_url: api.api_url,
                    player_name,
                    season,
                    refresh,
                    clear_db,
                })
                .await?
            }

            GetCmd::SeasonLeaders {
                season,
                stat,
                positions,
                limit,
                json,
            } => handle_season_leaders(SeasonLeadersParams {
                as_json: json,
                season,
                stat,
                positions,
                limit,
            })?,
        },

        Commands::Sync {
            api,
            player_name,
            all,
            refresh,
            verbose,
        } => {
            handle_sync_data(SyncDataParams {
                debug: api.debug,
                api_url: api.api_url,
                player_names: player_name,
                all,
                refresh,
                verbose,
            })
            .await?
        }

        Commands::Health { json } => handle_health(json)?,
    }

    Ok(())
}
