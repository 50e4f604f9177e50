//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use ffl_tools::{
    cli::{Commands, FflTools},
    commands::{
        player_tools::{handle_projection, handle_stats, handle_total_projection, handle_value},
        resolve::handle_resolve,
        tool_calls::{handle_call, handle_prompt, handle_tools},
    },
};
use tracing_subscriber::EnvFilter;

/// Log to stderr; stdout carries tool output.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "ffl_tools=debug"
    } else {
        "ffl_tools=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = FflTools::parse();
    init_tracing(app.verbose);

    match app.command {
        Commands::Stats {
            player_name,
            num_games,
            common,
        } => handle_stats(&common, &player_name, num_games).context("stats lookup failed")?,

        Commands::Value {
            player_name,
            common,
        } => handle_value(&common, &player_name).context("value lookup failed")?,

        Commands::Projection {
            player_name,
            week,
            common,
            json,
        } => handle_projection(&common, &player_name, week, json)
            .context("projection lookup failed")?,

        Commands::TotalProjection {
            player_name,
            start_week,
            end_week,
            common,
            json,
        } => handle_total_projection(&common, &player_name, start_week, end_week, json)
            .context("projection lookup failed")?,

        Commands::Resolve {
            player_name,
            common,
            json,
        } => handle_resolve(&common, &player_name, json).context("name resolution failed")?,

        Commands::Tools => handle_tools().context("failed to render tool definitions")?,

        Commands::Prompt => handle_prompt(),

        Commands::Call {
            name,
            arguments,
            common,
            json,
        } => handle_call(&common, name.as_deref(), arguments.as_deref(), json)
            .context("tool call failed")?,
    }

    Ok(())
}
