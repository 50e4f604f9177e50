//! ID types shared across the player data sources.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier joining a player across the directory, valuation and
/// projection sources (a Sleeper player id).
///
/// # Examples
///
/// ```rust
/// use ffl_tools::ExternalId;
///
/// let id = ExternalId::new("4046");
/// assert_eq!(id.as_str(), "4046");
/// assert_eq!(id.to_string(), "4046");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalId(String);

impl ExternalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id from a raw table cell, treating blank cells as missing.
    ///
    /// Numeric exports sometimes carry a trailing `.0` (e.g. `4046.0`), which
    /// is stripped so the id joins against string-keyed sources.
    pub fn from_cell(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
            return None;
        }
        let id = trimmed.strip_suffix(".0").unwrap_or(trimmed);
        Some(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cell_blank_is_none() {
        assert_eq!(ExternalId::from_cell(""), None);
        assert_eq!(ExternalId::from_cell("   "), None);
        assert_eq!(ExternalId::from_cell("NaN"), None);
    }

    #[test]
    fn test_from_cell_strips_float_suffix() {
        assert_eq!(ExternalId::from_cell("4046.0"), Some(ExternalId::new("4046")));
        assert_eq!(ExternalId::from_cell(" 4046 "), Some(ExternalId::new("4046")));
    }
}
