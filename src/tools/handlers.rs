//! The tools exposed to the assistant.

use super::{
    projections::ProjectionAggregator,
    registry::{optional_int, optional_str, required_int, required_str, ToolContext, ToolError, ToolSpec},
    stats::{StatRecordFormatter, DEFAULT_NUM_GAMES},
    value::ValueLookup,
};
use crate::cli::types::{ScoringMode, Season, Week};
use serde_json::{json, Value};

fn scoring_arg(input: &Value, tool: &str, fallback: ScoringMode) -> Result<ScoringMode, ToolError> {
    match optional_str(input, "scoring_format") {
        Some(raw) => raw
            .parse()
            .map_err(|e: crate::error::FflError| ToolError::invalid(tool, e.to_string())),
        None => Ok(fallback),
    }
}

fn u16_arg(value: i64, tool: &str, key: &str) -> Result<u16, ToolError> {
    u16::try_from(value)
        .map_err(|_| ToolError::invalid(tool, format!("parameter `{key}` is out of range: {value}")))
}

fn season_arg(input: &Value, tool: &str, ctx: &ToolContext<'_>) -> Result<Season, ToolError> {
    match optional_int(input, "season") {
        Some(year) => Ok(Season::new(u16_arg(year, tool, "season")?)),
        None => Ok(ctx.season),
    }
}

/// `get_nfl_stats`: recent weekly stats.
pub struct GetNflStatsTool;

impl ToolSpec for GetNflStatsTool {
    fn name(&self) -> &'static str {
        "get_nfl_stats"
    }

    fn description(&self) -> &'static str {
        "Get the stats for a player"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "player_name": { "type": "string", "description": "The name of the player" },
                "num_games": { "type": "integer", "description": "The number of games to get stats for" },
                "scoring_format": { "type": "string", "description": "The scoring format: standard, half_ppr or ppr" }
            },
            "required": ["player_name"]
        })
    }

    fn execute(&self, input: &Value, ctx: &ToolContext<'_>) -> Result<String, ToolError> {
        let player_name = required_str(input, self.name(), "player_name")?;
        let num_games = match optional_int(input, "num_games") {
            Some(n) => usize::try_from(n).map_err(|_| {
                ToolError::invalid(self.name(), "parameter `num_games` must not be negative")
            })?,
            None => DEFAULT_NUM_GAMES,
        };
        let scoring = scoring_arg(input, self.name(), ctx.scoring)?;

        StatRecordFormatter::new(ctx.snapshot)
            .format_stats(player_name, num_games, scoring)
            .map_err(|e| ToolError::failed(self.name(), e.to_string()))
    }
}

/// `get_value`: trade value and rank.
pub struct GetValueTool;

impl ToolSpec for GetValueTool {
    fn name(&self) -> &'static str {
        "get_value"
    }

    fn description(&self) -> &'static str {
        "Get the value of a player"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "player_name": { "type": "string", "description": "The name of the player" }
            },
            "required": ["player_name"]
        })
    }

    fn execute(&self, input: &Value, ctx: &ToolContext<'_>) -> Result<String, ToolError> {
        let player_name = required_str(input, self.name(), "player_name")?;
        Ok(ValueLookup::new(ctx.snapshot).get_value(player_name))
    }
}

/// `get_player_projected_points`: one week of projected points.
pub struct GetPlayerProjectedPointsTool;

impl ToolSpec for GetPlayerProjectedPointsTool {
    fn name(&self) -> &'static str {
        "get_player_projected_points"
    }

    fn description(&self) -> &'static str {
        "Get the projected points for a player"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "player_name": { "type": "string", "description": "The name of the player" },
                "season": { "type": "integer", "description": "The season year" },
                "week": { "type": "integer", "description": "The week number" },
                "scoring_format": { "type": "string", "description": "The scoring format: standard, half_ppr or ppr" }
            },
            "required": ["player_name", "week"]
        })
    }

    fn execute(&self, input: &Value, ctx: &ToolContext<'_>) -> Result<String, ToolError> {
        let tool = self.name();
        let player_name = required_str(input, tool, "player_name")?;
        let season = season_arg(input, tool, ctx)?;
        let week = Week::new(u16_arg(required_int(input, tool, "week")?, tool, "week")?);
        let format = scoring_arg(input, tool, ScoringMode::Ppr)?;

        let outcome =
            ProjectionAggregator::new(ctx.snapshot).projected_points(player_name, season, week, format);
        Ok(outcome.to_string())
    }
}

/// `get_player_total_projected_points`: projected points summed from the
/// current week through the end of the season.
pub struct GetPlayerTotalProjectedPointsTool;

impl ToolSpec for GetPlayerTotalProjectedPointsTool {
    fn name(&self) -> &'static str {
        "get_player_total_projected_points"
    }

    fn description(&self) -> &'static str {
        "Get the total projected points for a player"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "player_name": { "type": "string", "description": "The name of the player" },
                "season": { "type": "integer", "description": "The season year" },
                "current_week": { "type": "integer", "description": "The current week" },
                "total_weeks": { "type": "integer", "description": "The total number of weeks" },
                "scoring_format": { "type": "string", "description": "The scoring format: standard, half_ppr or ppr" }
            },
            "required": ["player_name", "current_week"]
        })
    }

    fn execute(&self, input: &Value, ctx: &ToolContext<'_>) -> Result<String, ToolError> {
        let tool = self.name();
        let player_name = required_str(input, tool, "player_name")?;
        let season = season_arg(input, tool, ctx)?;
        let start = Week::new(u16_arg(required_int(input, tool, "current_week")?, tool, "current_week")?);
        let end = match optional_int(input, "total_weeks") {
            Some(n) => Week::new(u16_arg(n, tool, "total_weeks")?),
            None => Week::FINAL,
        };
        let format = scoring_arg(input, tool, ScoringMode::Ppr)?;

        let outcome = ProjectionAggregator::new(ctx.snapshot)
            .total_projected_points(player_name, season, start, end, format);
        Ok(outcome.to_string())
    }
}
