//! Command implementations for the ffl-tools CLI

pub mod common;
pub mod player_tools;
pub mod resolve;
pub mod tool_calls;

#[cfg(test)]
mod tests;
