//! CLI argument definitions and parsing.

pub mod types;

use crate::tools::DEFAULT_NUM_GAMES;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{ScoringMode, Season, Week};

/// Data and configuration arguments shared by every command that reads player data
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Config file (or set `FFL_TOOLS_CONFIG`). Defaults to the platform config dir.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the data exports (or set `FFL_TOOLS_DATA_DIR`).
    #[clap(long, short = 'd')]
    pub data_dir: Option<PathBuf>,

    /// Scoring format: standard, half_ppr or ppr (or set `FFL_TOOLS_SCORING`).
    #[clap(long)]
    pub scoring: Option<ScoringMode>,

    /// Season year (or set `FFL_TOOLS_SEASON`).
    #[clap(long, short)]
    pub season: Option<Season>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Recent weekly stats for a player, most recent game first
    Stats {
        /// Player name; close misspellings are resolved.
        player_name: String,

        /// Number of most recent games to show.
        #[clap(long, short = 'n', default_value_t = DEFAULT_NUM_GAMES)]
        num_games: usize,

        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Trade value and overall rank for a player
    Value {
        /// Player name; close misspellings are resolved.
        player_name: String,

        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Projected points for a player in a single week
    Projection {
        /// Player name; close misspellings are resolved.
        player_name: String,

        /// Week to look up.
        #[clap(long, short)]
        week: Week,

        #[clap(flatten)]
        common: CommonArgs,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Projected points summed over a range of weeks
    TotalProjection {
        /// Player name; close misspellings are resolved.
        player_name: String,

        /// First week of the range (the current week).
        #[clap(long = "from")]
        start_week: Week,

        /// Last week of the range, inclusive.
        #[clap(long = "through", default_value_t = Week::FINAL)]
        end_week: Week,

        #[clap(flatten)]
        common: CommonArgs,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Show how a name resolves against the player directory
    Resolve {
        /// Free-form player name.
        player_name: String,

        #[clap(flatten)]
        common: CommonArgs,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Print the tool definitions to send to the model
    Tools,

    /// Print the assistant system prompt
    Prompt,

    /// Run tool calls as a model would issue them.
    ///
    /// With a tool name, calls that tool with `--arguments`. Without one,
    /// reads a JSON tool call (or an array of them) from stdin.
    Call {
        /// Tool to call, e.g. `get_value`.
        name: Option<String>,

        /// JSON object of arguments for the named tool.
        #[clap(long, short)]
        arguments: Option<String>,

        #[clap(flatten)]
        common: CommonArgs,

        /// Print tool messages as JSON instead of their content.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "ffl-tools",
    about = "Fantasy football lookup tools for LLM assistants"
)]
pub struct FflTools {
    /// Log debug output to stderr (`RUST_LOG` takes precedence).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
