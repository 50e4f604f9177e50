//! Player lookup tools and the registry that exposes them to an LLM.

pub mod handlers;
pub mod projections;
pub mod registry;
pub mod stats;
pub mod value;

pub use handlers::{
    GetNflStatsTool, GetPlayerProjectedPointsTool, GetPlayerTotalProjectedPointsTool, GetValueTool,
};
pub use projections::{ProjectionAggregator, ProjectionOutcome};
pub use registry::{ToolCall, ToolContext, ToolError, ToolMessage, ToolRegistry, ToolSpec};
pub use stats::{StatLine, StatRecordFormatter, DEFAULT_NUM_GAMES};
pub use value::ValueLookup;

/// System prompt for the assistant that drives these tools.
pub const SYSTEM_PROMPT: &str = "\
You are a fantasy football assistant. When making decisions, do not use outside data, instead use the tools provided.
Try to provide specific information about the players such as their value, stats, etc.
For players a user asks about, you should call both the get_value and get_nfl_stats tools.

If you can't find a player or are unsure of who they mean, ask the user for clarification on the name of the player.
";

impl ToolRegistry {
    /// Registry holding every player tool.
    pub fn with_defaults() -> Self {
        ToolRegistry::new()
            .with_tool(GetNflStatsTool)
            .with_tool(GetValueTool)
            .with_tool(GetPlayerProjectedPointsTool)
            .with_tool(GetPlayerTotalProjectedPointsTool)
    }
}
