//! Commands that speak the model's side of the tool protocol

use super::common::CommandContext;
use crate::{
    cli::CommonArgs,
    tools::{ToolCall, ToolMessage, ToolRegistry, SYSTEM_PROMPT},
    Result,
};
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use tracing::info;

/// One call or a batch, as read from stdin.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CallBatch {
    Many(Vec<ToolCall>),
    One(ToolCall),
}

/// Parse tool calls from JSON: a single call object or an array of them.
pub fn parse_calls(input: &str) -> Result<Vec<ToolCall>> {
    Ok(match serde_json::from_str(input)? {
        CallBatch::Many(calls) => calls,
        CallBatch::One(call) => vec![call],
    })
}

/// Handle the tools command
pub fn handle_tools() -> Result<()> {
    let definitions = ToolRegistry::with_defaults().definitions();
    println!("{}", serde_json::to_string_pretty(&definitions)?);
    Ok(())
}

/// Handle the prompt command
pub fn handle_prompt() {
    print!("{}", SYSTEM_PROMPT);
}

/// Handle the call command
pub fn handle_call(
    common: &CommonArgs,
    name: Option<&str>,
    arguments: Option<&str>,
    as_json: bool,
) -> Result<()> {
    let ctx = CommandContext::load(common)?;
    let registry = ToolRegistry::with_defaults();

    // a single named call surfaces its error instead of a tool message
    if let Some(name) = name {
        let args: Value = match arguments {
            Some(raw) => serde_json::from_str(raw)?,
            None => Value::Null,
        };
        let content = registry.invoke(name, &args, &ctx.tool_context())?;
        println!("{}", render_messages(&[ToolMessage::new(name, content)], as_json)?);
        return Ok(());
    }

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let calls = parse_calls(&input)?;

    let messages = registry.dispatch(&calls, &ctx.tool_context());
    info!(calls = calls.len(), answered = messages.len(), "dispatched tool calls");
    println!("{}", render_messages(&messages, as_json)?);
    Ok(())
}

/// Tool contents separated by blank lines, or the messages as a JSON array.
pub fn render_messages(messages: &[ToolMessage], as_json: bool) -> Result<String> {
    if as_json {
        return Ok(serde_json::to_string_pretty(messages)?);
    }
    Ok(messages
        .iter()
        .map(|m| m.content.trim_end())
        .collect::<Vec<_>>()
        .join("\n\n"))
}
