//! Data layer for the fantasy football tools
//!
//! The external sources are read once into an immutable snapshot:
//! - `models`: Record types
//! - `loader`: CSV/JSON readers for each export
//! - `snapshot`: Player directory and the loaded snapshot

pub mod loader;
pub mod models;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use models::*;
pub use snapshot::{DataSnapshot, PlayerDirectory, SnapshotBuilder};
