//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod stats_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        // Create a JSON error by trying to parse invalid JSON
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let stats_error = StatsError::from(json_error);

        match stats_error {
            StatsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stats_error = StatsError::from(io_error);

        match stats_error {
            StatsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let stats_error = StatsError::from(parse_error);

        match stats_error {
            StatsError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_missing_api_url_error() {
        let error = StatsError::MissingApiUrl {
            env_var: "NFL_STATS_API_URL".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Stats API URL not provided"));
        assert!(error_string.contains("NFL_STATS_API_URL"));
    }

    #[test]
    fn test_cache_error() {
        let error = StatsError::Cache {
            message: "Failed to write cache".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Cache error"));
        assert!(error_string.contains("Failed to write cache"));
    }

    #[test]
    fn test_no_data_error() {
        let error = StatsError::NoData;
        let error_string = error.to_string();
        assert_eq!(error_string, "Stats API returned no data");
    }

    #[test]
    fn test_invalid_position_error() {
        let error = StatsError::InvalidPosition {
            position: "INVALID_POS".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid position"));
        assert!(error_string.contains("INVALID_POS"));
    }

    #[test]
    fn test_player_not_found_error() {
        let error = StatsError::PlayerNotFound {
            name: "John Doe".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Player not found"));
        assert!(error_string.contains("John Doe"));
    }

    #[test]
    fn test_box_error_conversion() {
        let box_error: Box<dyn std::error::Error + Send + Sync> = Box::new(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "Access denied",
        ));
        let stats_error = StatsError::from(box_error);

        match stats_error {
            StatsError::Cache { message } => {
                assert!(message.contains("Access denied"));
            }
            _ => panic!("Expected Cache error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        // Storage-layer results bubble up through the Storage variant
        let anyhow_error = anyhow::anyhow!("Test storage error message");
        let stats_error = StatsError::from(anyhow_error);

        match stats_error {
            StatsError::Storage(e) => {
                assert!(e.to_string().contains("Test storage error message"));
            }
            _ => panic!("Expected Storage error variant"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stats_error = StatsError::from(io_error);

        // Test that the error implements std::error::Error properly
        let error_trait: &dyn std::error::Error = &stats_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = StatsError::NoData;
        let debug_string = format!("{:?}", error);
        assert_eq!(debug_string, "NoData");
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function() -> Result<String> {
            Ok("success".to_string())
        }

        let result = test_function();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "success");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(StatsError::NoData)
        }

        let result = test_function();
        assert!(result.is_err());
        match result.unwrap_err() {
            StatsError::NoData => (),
            _ => panic!("Expected NoData error"),
        }
    }
}
