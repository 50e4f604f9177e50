//! Type-safe wrappers and enums for fantasy football data.

pub mod ids;
pub mod position;
pub mod scoring;
pub mod time;

pub use ids::ExternalId;
pub use position::{Position, StatField};
pub use scoring::ScoringMode;
pub use time::{Season, Week};
