//! Scoring format selection.

use crate::error::FflError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// League scoring format.
///
/// Used both as the global stat-summary mode and as the key into weekly
/// projection tables. Parsing accepts the names used by the projection
/// source as well as the numeric points-per-reception value.
///
/// # Examples
///
/// ```rust
/// use ffl_tools::ScoringMode;
///
/// assert_eq!("half".parse::<ScoringMode>().unwrap(), ScoringMode::HalfPpr);
/// assert_eq!("0".parse::<ScoringMode>().unwrap(), ScoringMode::Standard);
/// assert_eq!(ScoringMode::Ppr.projection_key(), "pts_ppr");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScoringMode {
    Standard,
    HalfPpr,
    #[default]
    Ppr,
}

impl ScoringMode {
    pub const ALL: [ScoringMode; 3] = [ScoringMode::Standard, ScoringMode::HalfPpr, ScoringMode::Ppr];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMode::Standard => "standard",
            ScoringMode::HalfPpr => "half_ppr",
            ScoringMode::Ppr => "ppr",
        }
    }

    /// Key of this format in a weekly projection entry.
    pub fn projection_key(&self) -> &'static str {
        match self {
            ScoringMode::Standard => "pts_std",
            ScoringMode::HalfPpr => "pts_half_ppr",
            ScoringMode::Ppr => "pts_ppr",
        }
    }

    /// Map a projection entry key back to its format.
    pub fn from_projection_key(key: &str) -> Option<Self> {
        match key {
            "pts_std" | "pts_standard" => Some(ScoringMode::Standard),
            "pts_half_ppr" => Some(ScoringMode::HalfPpr),
            "pts_ppr" => Some(ScoringMode::Ppr),
            _ => None,
        }
    }

    /// Whether stat summaries report `fantasy_points_ppr` instead of `fantasy_points`.
    pub fn uses_ppr_points(&self) -> bool {
        matches!(self, ScoringMode::Ppr | ScoringMode::HalfPpr)
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringMode {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "std" | "0" | "0.0" => Ok(ScoringMode::Standard),
            "half_ppr" | "half-ppr" | "half" | "0.5" => Ok(ScoringMode::HalfPpr),
            "ppr" | "full_ppr" | "1" | "1.0" => Ok(ScoringMode::Ppr),
            _ => Err(FflError::InvalidScoring {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ScoringMode {
    type Error = FflError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScoringMode> for String {
    fn from(mode: ScoringMode) -> String {
        mode.as_str().to_string()
    }
}
