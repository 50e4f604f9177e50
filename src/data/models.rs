//! Data models for the loaded player sources

use crate::cli::types::{ExternalId, Position, ScoringMode, Season, Week};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Accept counting stats written either as integers or as floats (`3.0`).
fn de_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<f64> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.round() as u32))
}

/// Drop non-finite floats so `NaN` cells behave like empty ones.
fn de_finite<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<f64> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|v| v.is_finite()))
}

/// Canonical player entry in the directory
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub display_name: String,
    pub external_id: Option<ExternalId>,
    pub position: Position,
}

/// One player's box score line for a single week.
///
/// Column names follow the nflverse weekly player stats export; any extra
/// columns in the source are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WeeklyStatRecord {
    pub player_display_name: String,
    /// Absent in single-season exports.
    #[serde(default)]
    pub season: Option<Season>,
    pub week: Week,
    #[serde(default)]
    pub recent_team: String,
    #[serde(default)]
    pub opponent_team: String,
    #[serde(default)]
    pub position: String,
    #[serde(default, deserialize_with = "de_finite")]
    pub fantasy_points: Option<f64>,
    #[serde(default, deserialize_with = "de_finite")]
    pub fantasy_points_ppr: Option<f64>,
    #[serde(default, deserialize_with = "de_finite")]
    pub passing_yards: Option<f64>,
    #[serde(default, deserialize_with = "de_count")]
    pub passing_tds: Option<u32>,
    #[serde(default, deserialize_with = "de_count")]
    pub interceptions: Option<u32>,
    #[serde(default, deserialize_with = "de_finite")]
    pub rushing_yards: Option<f64>,
    #[serde(default, deserialize_with = "de_count")]
    pub rushing_tds: Option<u32>,
    #[serde(default, deserialize_with = "de_count")]
    pub receptions: Option<u32>,
    #[serde(default, deserialize_with = "de_finite")]
    pub receiving_yards: Option<f64>,
    #[serde(default, deserialize_with = "de_count")]
    pub receiving_tds: Option<u32>,
}

impl WeeklyStatRecord {
    /// Blank record for a player and week; used as a base by tests and fixtures.
    pub fn new(player_display_name: impl Into<String>, week: Week, position: &str) -> Self {
        Self {
            player_display_name: player_display_name.into(),
            season: None,
            week,
            recent_team: String::new(),
            opponent_team: String::new(),
            position: position.to_string(),
            fantasy_points: None,
            fantasy_points_ppr: None,
            passing_yards: None,
            passing_tds: None,
            interceptions: None,
            rushing_yards: None,
            rushing_tds: None,
            receptions: None,
            receiving_yards: None,
            receiving_tds: None,
        }
    }

    pub fn in_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn position_group(&self) -> Position {
        Position::from_label(&self.position)
    }
}

/// Row of the player id cross-reference table
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerIdEntry {
    pub name: String,
    pub external_id: Option<ExternalId>,
}

/// Static trade/redraft value of a player
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationRecord {
    pub external_id: ExternalId,
    pub value: u32,
    pub overall_rank: u32,
}

/// Projected points for one player in one week, by scoring format
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionRecord {
    pub external_id: ExternalId,
    pub week: Week,
    pub points_by_scoring_format: HashMap<ScoringMode, f64>,
}

impl ProjectionRecord {
    pub fn new(external_id: ExternalId, week: Week) -> Self {
        Self {
            external_id,
            week,
            points_by_scoring_format: HashMap::new(),
        }
    }

    pub fn with_points(mut self, mode: ScoringMode, points: f64) -> Self {
        self.points_by_scoring_format.insert(mode, points);
        self
    }

    /// Projected points for `mode`, zero when the format is missing.
    pub fn points(&self, mode: ScoringMode) -> f64 {
        self.points_by_scoring_format
            .get(&mode)
            .copied()
            .unwrap_or(0.0)
    }
}
