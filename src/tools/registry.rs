//! Tool registry: name -> handler, with argument validation against each
//! tool's declared input schema.

use crate::{
    cli::types::{ScoringMode, Season},
    data::DataSnapshot,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

/// Everything a tool handler may read.
#[derive(Debug, Clone, Copy)]
pub struct ToolContext<'a> {
    pub snapshot: &'a DataSnapshot,
    /// Scoring mode used when a call doesn't name one.
    pub scoring: ScoringMode,
    /// Season used when a call doesn't name one.
    pub season: Season,
}

impl<'a> ToolContext<'a> {
    pub fn new(snapshot: &'a DataSnapshot) -> Self {
        Self {
            snapshot,
            scoring: ScoringMode::default(),
            season: Season::default(),
        }
    }

    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = season;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    #[error("Function {name} not found")]
    UnknownTool { name: String },

    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    #[error("{tool} failed: {message}")]
    Failed { tool: String, message: String },
}

impl ToolError {
    pub fn invalid(tool: &str, message: impl Into<String>) -> Self {
        ToolError::InvalidArguments {
            tool: tool.to_string(),
            message: message.into(),
        }
    }

    pub fn failed(tool: &str, message: impl Into<String>) -> Self {
        ToolError::Failed {
            tool: tool.to_string(),
            message: message.into(),
        }
    }
}

/// A callable tool exposed to the model.
pub trait ToolSpec {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// JSON schema of the arguments object: `type`, `properties`, `required`.
    fn input_schema(&self) -> Value;

    /// Run the tool. `input` has already been validated against
    /// [`ToolSpec::input_schema`].
    fn execute(&self, input: &Value, ctx: &ToolContext<'_>) -> Result<String, ToolError>;
}

pub fn required_str<'v>(input: &'v Value, tool: &str, key: &str) -> Result<&'v str, ToolError> {
    optional_str(input, key)
        .ok_or_else(|| ToolError::invalid(tool, format!("missing required parameter `{key}`")))
}

pub fn optional_str<'v>(input: &'v Value, key: &str) -> Option<&'v str> {
    input.get(key).and_then(Value::as_str)
}

pub fn required_int(input: &Value, tool: &str, key: &str) -> Result<i64, ToolError> {
    optional_int(input, key)
        .ok_or_else(|| ToolError::invalid(tool, format!("missing required parameter `{key}`")))
}

pub fn optional_int(input: &Value, key: &str) -> Option<i64> {
    input.get(key).and_then(Value::as_i64)
}

/// Whole numbers also arrive as floats (`4.0`) or quoted strings (`"4"`).
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Check `args` against `schema` and return a normalized copy: integer
/// parameters are converted to JSON integers and nulls are dropped.
pub fn validate_arguments(tool: &str, schema: &Value, args: &Value) -> Result<Value, ToolError> {
    let empty = Map::new();
    let provided = match args {
        Value::Object(map) => map,
        Value::Null => &empty,
        _ => return Err(ToolError::invalid(tool, "arguments must be a JSON object")),
    };

    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|keys| keys.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    for key in &required {
        if provided.get(*key).map_or(true, Value::is_null) {
            return Err(ToolError::invalid(
                tool,
                format!("missing required parameter `{key}`"),
            ));
        }
    }

    let mut normalized = Map::new();
    for (key, value) in provided {
        if value.is_null() {
            continue;
        }
        let Some(declared) = properties.get(key) else {
            debug!(tool, key = %key, "ignoring undeclared argument");
            continue;
        };
        let value = match declared.get("type").and_then(Value::as_str) {
            Some("integer") => coerce_int(value).map(Value::from).ok_or_else(|| {
                ToolError::invalid(tool, format!("parameter `{key}` must be an integer"))
            })?,
            Some("string") => match value {
                Value::String(_) => value.clone(),
                _ => {
                    return Err(ToolError::invalid(
                        tool,
                        format!("parameter `{key}` must be a string"),
                    ))
                }
            },
            _ => value.clone(),
        };
        normalized.insert(key.clone(), value);
    }

    Ok(Value::Object(normalized))
}

/// Arguments as sent by a model: either a JSON object or a JSON-encoded string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ToolArguments {
    Encoded(String),
    Object(Value),
}

impl Default for ToolArguments {
    fn default() -> Self {
        ToolArguments::Object(Value::Object(Map::new()))
    }
}

impl ToolArguments {
    fn decode(&self, tool: &str) -> Result<Value, ToolError> {
        match self {
            ToolArguments::Object(value) => Ok(value.clone()),
            ToolArguments::Encoded(raw) if raw.trim().is_empty() => Ok(Value::Null),
            ToolArguments::Encoded(raw) => serde_json::from_str(raw)
                .map_err(|e| ToolError::invalid(tool, format!("arguments are not valid JSON: {e}"))),
        }
    }
}

/// One requested tool invocation.
///
/// Accepts both the flat `{name, arguments}` shape and the OpenAI
/// `{"type": "function", "function": {name, arguments}}` wrapper.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "RawToolCall")]
pub struct ToolCall {
    pub name: String,
    pub arguments: ToolArguments,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments: ToolArguments::Object(arguments),
        }
    }
}

#[derive(Deserialize)]
struct FlatToolCall {
    name: String,
    #[serde(default)]
    arguments: ToolArguments,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawToolCall {
    Wrapped { function: FlatToolCall },
    Flat(FlatToolCall),
}

impl From<RawToolCall> for ToolCall {
    fn from(raw: RawToolCall) -> Self {
        let (RawToolCall::Wrapped { function: flat } | RawToolCall::Flat(flat)) = raw;
        ToolCall {
            name: flat.name,
            arguments: flat.arguments,
        }
    }
}

/// Tool output to append to the conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolMessage {
    pub role: &'static str,
    pub name: String,
    pub content: String,
}

impl ToolMessage {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: "tool",
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Registered tools in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn ToolSpec>>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool, replacing any tool already registered under its name.
    pub fn register(&mut self, tool: Box<dyn ToolSpec>) {
        if let Some(slot) = self.tools.iter_mut().find(|t| t.name() == tool.name()) {
            *slot = tool;
        } else {
            self.tools.push(tool);
        }
    }

    pub fn with_tool(mut self, tool: impl ToolSpec + 'static) -> Self {
        self.register(Box::new(tool));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn ToolSpec> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// OpenAI function-tool definitions for every registered tool.
    pub fn definitions(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|tool| {
                json!({
                    "type": "function",
                    "function": {
                        "name": tool.name(),
                        "description": tool.description(),
                        "parameters": tool.input_schema(),
                    }
                })
            })
            .collect()
    }

    /// Validate `args` and run the named tool.
    pub fn invoke(&self, name: &str, args: &Value, ctx: &ToolContext<'_>) -> Result<String, ToolError> {
        let tool = self.get(name).ok_or_else(|| ToolError::UnknownTool {
            name: name.to_string(),
        })?;
        let input = validate_arguments(name, &tool.input_schema(), args)?;
        debug!(tool = name, arguments = %input, "invoking tool");
        tool.execute(&input, ctx)
    }

    /// Run a batch of model tool calls in order.
    ///
    /// Unknown tools are skipped with a warning. Argument errors are reported
    /// back to the model as the tool's content so it can retry.
    pub fn dispatch(&self, calls: &[ToolCall], ctx: &ToolContext<'_>) -> Vec<ToolMessage> {
        let mut messages = Vec::with_capacity(calls.len());
        for call in calls {
            if self.get(&call.name).is_none() {
                warn!(tool = %call.name, "Function {} not found", call.name);
                continue;
            }
            let result = call
                .arguments
                .decode(&call.name)
                .and_then(|args| self.invoke(&call.name, &args, ctx));
            let content = match result {
                Ok(content) => content,
                Err(e) => {
                    warn!(tool = %call.name, error = %e, "tool call failed");
                    e.to_string()
                }
            };
            messages.push(ToolMessage::new(call.name.clone(), content));
        }
        messages
    }
}
