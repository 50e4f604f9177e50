//! Recent-stat summaries for a single player.
//!
//! Each weekly record is pruned down to the fields worth reporting: anything
//! zero or missing is dropped unless the player's position makes it
//! meaningful (a QB with 0 passing yards is still news).

use crate::{
    cli::types::{Position, ScoringMode, StatField, Week},
    data::{DataSnapshot, WeeklyStatRecord},
    error::Result,
};
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_NUM_GAMES: usize = 4;

const FOOTER: &str = "-----------------------------------------------";

/// `None` drops the field, `Some(None)` renders an explicit `null`.
type Kept<T> = Option<Option<T>>;

/// A weekly record after pruning, serialized as one JSON line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_team: Option<String>,
    pub position: String,
    pub week: Week,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent_team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fantasy_points: Kept<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passing_yards: Kept<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passing_tds: Kept<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interceptions: Kept<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rushing_yards: Kept<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rushing_tds: Kept<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receptions: Kept<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiving_yards: Kept<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiving_tds: Kept<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fantasy_points_ppr: Kept<f64>,
}

impl StatLine {
    /// Prune `record` for display under `scoring`.
    pub fn from_record(record: &WeeklyStatRecord, scoring: ScoringMode) -> Self {
        let position = record.position_group();
        let keep_f = |value: Option<f64>, field| keep(value, field, position);
        let keep_n = |value: Option<u32>, field| keep(value, field, position);

        let (fantasy_points, fantasy_points_ppr) = if scoring.uses_ppr_points() {
            (None, keep_f(record.fantasy_points_ppr, StatField::FantasyPointsPpr))
        } else {
            (keep_f(record.fantasy_points, StatField::FantasyPoints), None)
        };

        Self {
            recent_team: keep_text(&record.recent_team),
            position: record.position.clone(),
            week: record.week,
            opponent_team: keep_text(&record.opponent_team),
            fantasy_points,
            passing_yards: keep_f(record.passing_yards, StatField::PassingYards),
            passing_tds: keep_n(record.passing_tds, StatField::PassingTds),
            interceptions: keep_n(record.interceptions, StatField::Interceptions),
            rushing_yards: keep_f(record.rushing_yards, StatField::RushingYards),
            rushing_tds: keep_n(record.rushing_tds, StatField::RushingTds),
            receptions: keep_n(record.receptions, StatField::Receptions),
            receiving_yards: keep_f(record.receiving_yards, StatField::ReceivingYards),
            receiving_tds: keep_n(record.receiving_tds, StatField::ReceivingTds),
            fantasy_points_ppr,
        }
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn keep<T: Copy + PartialEq + Default>(value: Option<T>, field: StatField, position: Position) -> Kept<T> {
    match value {
        Some(v) if v != T::default() => Some(Some(v)),
        _ if position.retains(field) => Some(value),
        _ => None,
    }
}

fn keep_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Renders the last N games of a player as a text block for an LLM prompt.
#[derive(Debug, Clone, Copy)]
pub struct StatRecordFormatter<'a> {
    snapshot: &'a DataSnapshot,
}

impl<'a> StatRecordFormatter<'a> {
    pub fn new(snapshot: &'a DataSnapshot) -> Self {
        Self { snapshot }
    }

    /// Summarize the `num_games` most recent weeks for `player_name`.
    ///
    /// Returns `"<name> not found"` when the resolved name has no weekly
    /// stats. A name the resolver couldn't match ends up in the same place.
    pub fn format_stats(
        &self,
        player_name: &str,
        num_games: usize,
        scoring: ScoringMode,
    ) -> Result<String> {
        let name = self.snapshot.directory().resolve(player_name);
        let records = self.snapshot.weekly_stats(&name);

        if records.is_empty() {
            debug!(player = %name, "no weekly stats");
            return Ok(format!("{} not found", name));
        }

        let mut out = String::from("\n");
        out.push_str(&format!("---------- Recent Stats for {} ----------\n", name));
        for record in records.iter().rev().take(num_games) {
            out.push_str(&StatLine::from_record(record, scoring).to_json_line()?);
            out.push('\n');
        }
        out.push_str(FOOTER);
        out.push('\n');
        Ok(out)
    }
}
