//! Stats, value and projection commands

use super::common::CommandContext;
use crate::{
    cli::{types::Week, CommonArgs},
    tools::{ProjectionAggregator, ProjectionOutcome, StatRecordFormatter, ValueLookup},
    Result, ScoringMode, Season,
};
use serde_json::json;

/// Handle the stats command
pub fn handle_stats(common: &CommonArgs, player_name: &str, num_games: usize) -> Result<()> {
    let ctx = CommandContext::load(common)?;
    let output = StatRecordFormatter::new(&ctx.snapshot).format_stats(
        player_name,
        num_games,
        ctx.config.scoring,
    )?;
    println!("{}", output.trim_end());
    Ok(())
}

/// Handle the value command
pub fn handle_value(common: &CommonArgs, player_name: &str) -> Result<()> {
    let ctx = CommandContext::load(common)?;
    println!("{}", ValueLookup::new(&ctx.snapshot).get_value(player_name));
    Ok(())
}

/// Handle the single-week projection command
pub fn handle_projection(
    common: &CommonArgs,
    player_name: &str,
    week: Week,
    as_json: bool,
) -> Result<()> {
    let ctx = CommandContext::load(common)?;
    let (season, format) = (ctx.config.season, ctx.config.scoring);
    let outcome =
        ProjectionAggregator::new(&ctx.snapshot).projected_points(player_name, season, week, format);
    println!(
        "{}",
        render_projection(&outcome, player_name, season, week, week, format, as_json)
    );
    Ok(())
}

/// Handle the projection range command
pub fn handle_total_projection(
    common: &CommonArgs,
    player_name: &str,
    start_week: Week,
    end_week: Week,
    as_json: bool,
) -> Result<()> {
    let ctx = CommandContext::load(common)?;
    let (season, format) = (ctx.config.season, ctx.config.scoring);
    let outcome = ProjectionAggregator::new(&ctx.snapshot)
        .total_projected_points(player_name, season, start_week, end_week, format);
    println!(
        "{}",
        render_projection(&outcome, player_name, season, start_week, end_week, format, as_json)
    );
    Ok(())
}

/// Text is the bare outcome; JSON adds the query so the line stands alone.
pub fn render_projection(
    outcome: &ProjectionOutcome,
    player_name: &str,
    season: Season,
    start_week: Week,
    end_week: Week,
    format: ScoringMode,
    as_json: bool,
) -> String {
    if !as_json {
        return outcome.to_string();
    }
    let value = match outcome {
        ProjectionOutcome::Points(points) => json!({
            "player_name": player_name,
            "season": season,
            "start_week": start_week,
            "end_week": end_week,
            "scoring_format": format,
            "points": points,
        }),
        ProjectionOutcome::NotFound(_) => json!({
            "player_name": player_name,
            "error": outcome.to_string(),
        }),
    };
    value.to_string()
}
