//! Error types for the fantasy football tools

use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FflError>;

/// Failures raised while loading data or configuration.
///
/// Lookups never produce these: a player that cannot be found is reported
/// back as a plain "not found" string so an LLM consumer can react to it.
#[derive(Error, Debug)]
pub enum FflError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parsing failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Data source {} unavailable: {message}", path.display())]
    DataSource { path: PathBuf, message: String },

    #[error("Required column `{column}` missing from data source")]
    MissingColumn { column: String },

    #[error("Invalid scoring format: {value}")]
    InvalidScoring { value: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Tool(#[from] crate::tools::ToolError),
}

impl FflError {
    /// Wrap a loader failure with the path of the file being read.
    pub fn data_source(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        FflError::DataSource {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
