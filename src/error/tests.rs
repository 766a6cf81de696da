//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod sleepr_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = SleeprError::from(json_error);

        match error {
            SleeprError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SleeprError::from(io_error);

        match error {
            SleeprError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let error = SleeprError::from(header_error);

        match error {
            SleeprError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u64>().unwrap_err();
        let error = SleeprError::from(parse_error);

        match error {
            SleeprError::InvalidLeagueId(_) => (),
            _ => panic!("Expected InvalidLeagueId error variant"),
        }
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = SleeprError::MissingLeagueId {
            env_var: "SLEEPR_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("SLEEPR_LEAGUE_ID"));
    }

    #[test]
    fn test_date_parse_error_keeps_input() {
        let error = SleeprError::DateParse {
            input: "13/45/2025".to_string(),
        };

        assert_eq!(error.to_string(), "Unrecognized date format: 13/45/2025");
    }

    #[test]
    fn test_missing_result_set_error() {
        let error = SleeprError::MissingResultSet {
            name: "PlayerGameLog".to_string(),
        };

        assert!(error.to_string().contains("PlayerGameLog"));
    }
}
