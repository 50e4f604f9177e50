//! Projected points, for one week or summed over a range of weeks.

use crate::{
    cli::types::{ExternalId, ScoringMode, Season, Week},
    data::DataSnapshot,
};
use std::fmt;
use tracing::debug;

/// Result of a projection query.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionOutcome {
    Points(f64),
    /// Carries the player name that could not be mapped to an id.
    NotFound(String),
}

impl ProjectionOutcome {
    pub fn points(&self) -> Option<f64> {
        match self {
            ProjectionOutcome::Points(p) => Some(*p),
            ProjectionOutcome::NotFound(_) => None,
        }
    }
}

impl fmt::Display for ProjectionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // rounded to cents to hide float noise from summing many weeks;
            // Debug keeps the trailing `.0` on whole numbers
            ProjectionOutcome::Points(p) => write!(f, "{:?}", (p * 100.0).round() / 100.0),
            ProjectionOutcome::NotFound(name) => write!(f, "Player '{}' not found.", name),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectionAggregator<'a> {
    snapshot: &'a DataSnapshot,
}

impl<'a> ProjectionAggregator<'a> {
    pub fn new(snapshot: &'a DataSnapshot) -> Self {
        Self { snapshot }
    }

    fn player_id(&self, player_name: &str) -> Result<&'a ExternalId, String> {
        let directory = self.snapshot.directory();
        let name = directory.resolve(player_name);
        directory.external_id(&name).ok_or(name)
    }

    fn week_points(&self, id: &ExternalId, season: Season, week: Week, format: ScoringMode) -> f64 {
        match self.snapshot.projection(season, week, id) {
            Some(record) => record.points(format),
            None => {
                debug!(%id, %season, %week, "no projection, counting as 0");
                0.0
            }
        }
    }

    /// Projected points for a single week; 0 when the week has no data.
    pub fn projected_points(
        &self,
        player_name: &str,
        season: Season,
        week: Week,
        format: ScoringMode,
    ) -> ProjectionOutcome {
        match self.player_id(player_name) {
            Ok(id) => ProjectionOutcome::Points(self.week_points(id, season, week, format)),
            Err(name) => ProjectionOutcome::NotFound(name),
        }
    }

    /// Sum of projected points over `start_week..=end_week`.
    ///
    /// Missing weeks count as 0 and a reversed range sums to 0.
    pub fn total_projected_points(
        &self,
        player_name: &str,
        season: Season,
        start_week: Week,
        end_week: Week,
        format: ScoringMode,
    ) -> ProjectionOutcome {
        let id = match self.player_id(player_name) {
            Ok(id) => id,
            Err(name) => return ProjectionOutcome::NotFound(name),
        };

        let total: f64 = start_week
            .through(end_week)
            .map(|week| self.week_points(id, season, week, format))
            .sum();
        ProjectionOutcome::Points(total)
    }
}
