//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod nufl_error_tests {
    use super::*;

    #[test]
    fn test_http_error_conversion() {
        // A malformed URL fails while building the request, without touching the network
        let reqwest_error = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let nufl_error = NuflError::from(reqwest_error);

        match nufl_error {
            NuflError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let nufl_error = NuflError::from(json_error);

        match nufl_error {
            NuflError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let nufl_error = NuflError::from(io_error);

        match nufl_error {
            NuflError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_prompt_error_conversion() {
        let nufl_error = NuflError::from(inquire::InquireError::OperationCanceled);

        match nufl_error {
            NuflError::Prompt(_) => (),
            _ => panic!("Expected Prompt error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u64>().unwrap_err();
        let nufl_error = NuflError::from(parse_error);

        match nufl_error {
            NuflError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_unauthorized_is_auth_failure() {
        let error = NuflError::Unauthorized {
            endpoint: "/teams".to_string(),
        };
        assert!(error.is_auth_failure());
        assert!(!error.is_client_side());
        assert!(error.to_string().contains("/teams"));

        let error = NuflError::LoginRequired {
            path: "/admin/news".to_string(),
        };
        assert!(error.is_auth_failure());
        assert_eq!(error.to_string(), "Login required to open /admin/news");
    }

    #[test]
    fn test_validation_and_server_errors_are_not_auth_failures() {
        let validation = NuflError::Validation {
            status: 400,
            message: "Missing required fields".to_string(),
        };
        let server = NuflError::Server {
            status: 500,
            message: "boom".to_string(),
        };

        assert!(!validation.is_auth_failure());
        assert!(!server.is_auth_failure());
        assert_eq!(
            validation.to_string(),
            "Request rejected (400): Missing required fields"
        );
        assert_eq!(server.to_string(), "Server error (500): boom");
    }

    #[test]
    fn test_client_side_rejections() {
        assert!(NuflError::SameTeams.is_client_side());
        assert!(NuflError::MissingField { field: "name" }.is_client_side());
        assert!(NuflError::InvalidDate {
            value: "31/12/2025".to_string()
        }
        .is_client_side());
        assert!(!NuflError::NotFound {
            resource: "team",
            id: 4
        }
        .is_client_side());
    }

    #[test]
    fn test_same_teams_message() {
        assert_eq!(
            NuflError::SameTeams.to_string(),
            "Home team and away team cannot be the same"
        );
    }

    #[test]
    fn test_not_found_message() {
        let error = NuflError::NotFound {
            resource: "fixture",
            id: 12,
        };
        assert_eq!(error.to_string(), "fixture 12 not found");
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let nufl_error = NuflError::from(io_error);

        let error_trait: &dyn std::error::Error = &nufl_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = NuflError::SameTeams;
        let debug_string = format!("{:?}", error);
        assert_eq!(debug_string, "SameTeams");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(NuflError::MissingField { field: "title" })
        }

        match test_function().unwrap_err() {
            NuflError::MissingField { field } => assert_eq!(field, "title"),
            _ => panic!("Expected MissingField error"),
        }
    }
}
