//! Name resolution command

use super::common::CommandContext;
use crate::{cli::CommonArgs, data::PlayerDirectory, resolver::MATCH_THRESHOLD, Result};
use serde_json::json;

/// Handle the resolve command
pub fn handle_resolve(common: &CommonArgs, player_name: &str, as_json: bool) -> Result<()> {
    let ctx = CommandContext::load(common)?;
    println!(
        "{}",
        render_resolution(ctx.snapshot.directory(), player_name, as_json)
    );
    Ok(())
}

/// Describe the closest directory name and whether it clears the threshold.
pub fn render_resolution(directory: &PlayerDirectory, player_name: &str, as_json: bool) -> String {
    let best = directory.best_match(player_name);
    let resolved = directory.resolve(player_name);

    if as_json {
        return json!({
            "input": player_name,
            "resolved": resolved,
            "candidate": best.map(|m| m.candidate),
            "score": best.map(|m| m.score),
            "position": best.map(|m| directory.position(m.candidate).to_string()),
            "threshold": MATCH_THRESHOLD,
            "matched": best.is_some_and(|m| m.is_confident()),
        })
        .to_string();
    }

    match best {
        Some(m) if m.is_confident() => format!(
            "{} -> {} ({}, score {})",
            player_name,
            m.candidate,
            directory.position(m.candidate),
            m.score
        ),
        Some(m) => format!(
            "{} -> no match (closest: {}, score {} <= {})",
            player_name, m.candidate, m.score, MATCH_THRESHOLD
        ),
        None => format!("{} -> no match (player directory is empty)", player_name),
    }
}
