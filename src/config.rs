//! Configuration loading: built-in defaults, an optional `config.toml`,
//! environment variables, then command-line overrides.

use crate::{
    cli::types::{ScoringMode, Season},
    error::{FflError, Result},
    CONFIG_ENV_VAR, DATA_DIR_ENV_VAR, SCORING_ENV_VAR, SEASON_ENV_VAR,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_SEASON_TYPE: &str = "regular";

const APP_DIR: &str = "ffl-tools";
const CONFIG_FILE: &str = "config.toml";

/// Resolved locations of every data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub weekly_stats: PathBuf,
    pub player_ids: PathBuf,
    pub valuations: PathBuf,
    pub projections_dir: PathBuf,
}

impl DataPaths {
    /// Standard file names inside a data directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            weekly_stats: dir.join("weekly_stats.csv"),
            player_ids: dir.join("player_ids.csv"),
            valuations: dir.join("fantasycalc_redraft_rankings.csv"),
            projections_dir: dir.join("projections"),
        }
    }
}

/// Per-file overrides. Relative paths are resolved against the data directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DataFiles {
    pub weekly_stats: Option<PathBuf>,
    pub player_ids: Option<PathBuf>,
    pub valuations: Option<PathBuf>,
    pub projections_dir: Option<PathBuf>,
}

/// Raw deserialization target for config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    scoring: Option<ScoringMode>,
    season: Option<Season>,
    season_type: Option<String>,
    #[serde(default)]
    files: DataFiles,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub files: DataFiles,
    /// Scoring mode used by stat summaries when the caller doesn't pick one.
    pub scoring: ScoringMode,
    pub season: Season,
    pub season_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            files: DataFiles::default(),
            scoring: ScoringMode::default(),
            season: Season::default(),
            season_type: DEFAULT_SEASON_TYPE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from defaults, the config file and the process environment.
    ///
    /// An explicitly named config file must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with_env(explicit, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with an injectable environment lookup.
    pub fn load_with_env<F>(explicit: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| env(CONFIG_ENV_VAR).map(PathBuf::from));

        match explicit {
            Some(path) => {
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| FflError::data_source(&path, e))?;
                config.apply_file(toml::from_str(&contents)?)?;
                debug!(path = %path.display(), "loaded config file");
            }
            None => {
                if let Some(path) = default_config_path().filter(|p| p.exists()) {
                    let contents = std::fs::read_to_string(&path)?;
                    config.apply_file(toml::from_str(&contents)?)?;
                    debug!(path = %path.display(), "loaded config file");
                }
            }
        }

        config.apply_env(env)?;
        Ok(config)
    }

    fn apply_file(&mut self, file: ConfigFile) -> Result<()> {
        if let Some(dir) = file.data_dir {
            self.data_dir = dir;
        }
        if let Some(scoring) = file.scoring {
            self.scoring = scoring;
        }
        if let Some(season) = file.season {
            self.season = season;
        }
        if let Some(season_type) = file.season_type {
            // becomes a directory name under the projections dir
            let trimmed = season_type.trim();
            if trimmed.is_empty() || trimmed.contains(['/', '\\']) || trimmed == ".." {
                return Err(FflError::Config {
                    message: format!("invalid season_type `{season_type}`"),
                });
            }
            self.season_type = trimmed.to_string();
        }
        self.files = file.files;
        Ok(())
    }

    fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = env(DATA_DIR_ENV_VAR) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(scoring) = env(SCORING_ENV_VAR) {
            self.scoring = scoring.parse()?;
        }
        if let Some(season) = env(SEASON_ENV_VAR) {
            self.season = season.parse()?;
        }
        Ok(())
    }

    /// Apply command-line overrides, which take precedence over everything else.
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        scoring: Option<ScoringMode>,
        season: Option<Season>,
    ) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(scoring) = scoring {
            self.scoring = scoring;
        }
        if let Some(season) = season {
            self.season = season;
        }
        self
    }

    /// Final data source locations, with per-file overrides applied.
    pub fn data_paths(&self) -> DataPaths {
        let mut paths = DataPaths::in_dir(&self.data_dir);
        let resolve = |p: &PathBuf| self.data_dir.join(p);

        if let Some(p) = &self.files.weekly_stats {
            paths.weekly_stats = resolve(p);
        }
        if let Some(p) = &self.files.player_ids {
            paths.player_ids = resolve(p);
        }
        if let Some(p) = &self.files.valuations {
            paths.valuations = resolve(p);
        }
        if let Some(p) = &self.files.projections_dir {
            paths.projections_dir = resolve(p);
        }
        paths
    }
}

/// ~/.local/share/ffl-tools (or the platform equivalent), falling back to ./data
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// ~/.config/ffl-tools/config.toml (or the platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
}
