//! Fantasy football position types and the stat fields each one cares about.

use std::fmt;

/// Stat columns that may be pruned from a rendered weekly record.
///
/// `position` and `week` are structural and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    RecentTeam,
    OpponentTeam,
    FantasyPoints,
    PassingYards,
    PassingTds,
    Interceptions,
    RushingYards,
    RushingTds,
    Receptions,
    ReceivingYards,
    ReceivingTds,
    FantasyPointsPpr,
}

impl StatField {
    /// Column name as it appears in the weekly stats table and rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatField::RecentTeam => "recent_team",
            StatField::OpponentTeam => "opponent_team",
            StatField::FantasyPoints => "fantasy_points",
            StatField::PassingYards => "passing_yards",
            StatField::PassingTds => "passing_tds",
            StatField::Interceptions => "interceptions",
            StatField::RushingYards => "rushing_yards",
            StatField::RushingTds => "rushing_tds",
            StatField::Receptions => "receptions",
            StatField::ReceivingYards => "receiving_yards",
            StatField::ReceivingTds => "receiving_tds",
            StatField::FantasyPointsPpr => "fantasy_points_ppr",
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player position group used to decide which stats stay in a summary.
///
/// Only the four skill positions carry retained fields; everything else
/// (K, FB, defensive players, blank labels) collapses into `Other`.
///
/// # Examples
///
/// ```rust
/// use ffl_tools::{Position, StatField};
///
/// let qb = Position::from_label("qb");
/// assert_eq!(qb, Position::QB);
/// assert!(qb.retains(StatField::PassingYards));
/// assert!(!Position::from_label("K").retains(StatField::PassingYards));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    Other,
}

impl Position {
    /// Map a raw position label from a data source to its group.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "QB" => Position::QB,
            "RB" => Position::RB,
            "WR" => Position::WR,
            "TE" => Position::TE,
            _ => Position::Other,
        }
    }

    /// Fields kept in a summary even when their value is zero or missing.
    pub fn retained_fields(&self) -> &'static [StatField] {
        match self {
            Position::QB => &[
                StatField::PassingYards,
                StatField::PassingTds,
                StatField::Interceptions,
            ],
            Position::RB => &[StatField::RushingYards, StatField::RushingTds],
            Position::WR | Position::TE => &[StatField::ReceivingYards, StatField::ReceivingTds],
            Position::Other => &[],
        }
    }

    pub fn retains(&self, field: StatField) -> bool {
        self.retained_fields().contains(&field)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::Other => "OTHER",
        };
        write!(f, "{}", s)
    }
}
