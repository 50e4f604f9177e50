//! Fantasy Football LLM Tools Library
//!
//! Lookup and aggregation helpers exposed as callable tools to a chat-based
//! fantasy football assistant, backed by locally exported data files.
//!
//! ## Features
//!
//! - **Name Resolution**: Fuzzy matching of free-form player names to canonical names
//! - **Recent Stats**: Weekly box scores pruned to what matters for the player's position
//! - **Player Value**: Static trade value and overall rank lookup
//! - **Projections**: Single-week and rest-of-season projected points by scoring format
//! - **Tool Registry**: OpenAI-style tool definitions with argument validation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ffl_tools::{config::Config, tools::{ToolContext, ToolRegistry}, DataSnapshot};
//! use serde_json::json;
//!
//! # fn example() -> ffl_tools::Result<()> {
//! let config = Config::load(None)?;
//! let snapshot = DataSnapshot::load(&config.data_paths(), &config.season_type)?;
//!
//! let ctx = ToolContext::new(&snapshot)
//!     .with_scoring(config.scoring)
//!     .with_season(config.season);
//! let registry = ToolRegistry::with_defaults();
//! let answer = registry.invoke("get_value", &json!({"player_name": "Patrick Mahomes"}), &ctx);
//! println!("{:?}", answer);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the tools at your data exports instead of passing `--data-dir` every time:
//! ```bash
//! export FFL_TOOLS_DATA_DIR=~/fantasy/data
//! export FFL_TOOLS_SCORING=half_ppr
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod resolver;
pub mod tools;

// Re-export commonly used types
pub use cli::types::{ExternalId, Position, ScoringMode, Season, StatField, Week};
pub use data::DataSnapshot;
pub use error::{FflError, Result};

pub const CONFIG_ENV_VAR: &str = "FFL_TOOLS_CONFIG";
pub const DATA_DIR_ENV_VAR: &str = "FFL_TOOLS_DATA_DIR";
pub const SCORING_ENV_VAR: &str = "FFL_TOOLS_SCORING";
pub const SEASON_ENV_VAR: &str = "FFL_TOOLS_SEASON";
