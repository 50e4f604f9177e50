//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod ffl_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let ffl_error = FflError::from(json_error);

        match ffl_error {
            FflError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let ffl_error = FflError::from(io_error);

        match ffl_error {
            FflError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_csv_error_conversion() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Row {
            week: u16,
        }

        let mut reader = csv::Reader::from_reader("week\nnot_a_week\n".as_bytes());
        let csv_error = reader.deserialize::<Row>().next().unwrap().unwrap_err();
        let ffl_error = FflError::from(csv_error);

        match ffl_error {
            FflError::Csv(_) => (),
            _ => panic!("Expected Csv error variant"),
        }
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("scoring = ").unwrap_err();
        let ffl_error = FflError::from(toml_error);

        match ffl_error {
            FflError::Toml(_) => (),
            _ => panic!("Expected Toml error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u16>().unwrap_err();
        let ffl_error = FflError::from(parse_error);

        match ffl_error {
            FflError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_data_source_error() {
        let error = FflError::data_source("/tmp/weekly_stats.csv", "No such file");

        let error_string = error.to_string();
        assert!(error_string.contains("/tmp/weekly_stats.csv"));
        assert!(error_string.contains("No such file"));
    }

    #[test]
    fn test_missing_column_error() {
        let error = FflError::MissingColumn {
            column: "week".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Required column `week` missing from data source"
        );
    }

    #[test]
    fn test_invalid_scoring_error() {
        let error = FflError::InvalidScoring {
            value: "quarter_ppr".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid scoring format: quarter_ppr");
    }

    #[test]
    fn test_config_error() {
        let error = FflError::Config {
            message: "Could not determine data directory".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Configuration error"));
        assert!(error_string.contains("Could not determine data directory"));
    }

    #[test]
    fn test_tool_error_conversion() {
        let tool_error = crate::tools::ToolError::UnknownTool {
            name: "get_weather".to_string(),
        };
        let ffl_error = FflError::from(tool_error);

        assert!(matches!(ffl_error, FflError::Tool(_)));
        assert_eq!(ffl_error.to_string(), "Function get_weather not found");
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let ffl_error = FflError::from(io_error);

        let error_trait: &dyn std::error::Error = &ffl_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(FflError::InvalidScoring {
                value: "x".to_string(),
            })
        }

        match test_function().unwrap_err() {
            FflError::InvalidScoring { value } => assert_eq!(value, "x"),
            _ => panic!("Expected InvalidScoring error"),
        }
    }
}
