//! Common utilities shared across commands.

use crate::{
    cli::CommonArgs,
    config::Config,
    data::DataSnapshot,
    tools::ToolContext,
    Result,
};
use tracing::debug;

/// Resolved configuration plus the data snapshot every lookup reads from
pub struct CommandContext {
    pub config: Config,
    pub snapshot: DataSnapshot,
}

impl CommandContext {
    /// Layer CLI flags over the loaded configuration and read the data exports.
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let config = resolve_config(common)?;
        let paths = config.data_paths();
        debug!(?paths, season_type = %config.season_type, "loading data snapshot");
        let snapshot = DataSnapshot::load(&paths, &config.season_type)?;
        Ok(Self { config, snapshot })
    }

    pub fn tool_context(&self) -> ToolContext<'_> {
        ToolContext::new(&self.snapshot)
            .with_scoring(self.config.scoring)
            .with_season(self.config.season)
    }
}

/// Configuration with command-line overrides applied.
pub fn resolve_config(common: &CommonArgs) -> Result<Config> {
    Ok(Config::load(common.config.as_deref())?.with_overrides(
        common.data_dir.clone(),
        common.scoring,
        common.season,
    ))
}
