//! Immutable, in-memory view over every loaded data source.

use super::{
    loader,
    models::{PlayerIdEntry, PlayerRecord, ProjectionRecord, ValuationRecord, WeeklyStatRecord},
};
use crate::{
    cli::types::{ExternalId, Position, Season, Week},
    config::DataPaths,
    error::Result,
    resolver::{self, NameMatch},
};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

/// Canonical player names, in the order they first appear in the weekly
/// stats source, joined with their external ids.
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: Vec<PlayerRecord>,
    index: HashMap<String, usize>,
    /// Lowercased id-table name -> id, for players without weekly stats.
    ids_by_name: HashMap<String, ExternalId>,
}

impl PlayerDirectory {
    pub fn build(stats: &[WeeklyStatRecord], ids: &[PlayerIdEntry]) -> Self {
        let mut ids_by_name: HashMap<String, ExternalId> = HashMap::new();
        for entry in ids {
            if let Some(id) = &entry.external_id {
                // first row carrying an id wins for duplicated names
                ids_by_name
                    .entry(entry.name.to_lowercase())
                    .or_insert_with(|| id.clone());
            }
        }

        let mut players = Vec::new();
        let mut index = HashMap::new();
        for record in stats {
            if index.contains_key(&record.player_display_name) {
                continue;
            }
            let display_name = record.player_display_name.clone();
            let external_id = ids_by_name.get(&display_name.to_lowercase()).cloned();
            index.insert(display_name.clone(), players.len());
            players.push(PlayerRecord {
                display_name,
                external_id,
                position: record.position_group(),
            });
        }

        Self {
            players,
            index,
            ids_by_name,
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Canonical display names in directory order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.display_name.as_str())
    }

    pub fn get(&self, display_name: &str) -> Option<&PlayerRecord> {
        self.index.get(display_name).map(|&i| &self.players[i])
    }

    pub fn position(&self, display_name: &str) -> Position {
        self.get(display_name)
            .map(|p| p.position)
            .unwrap_or(Position::Other)
    }

    /// Closest canonical name and its score, if the directory isn't empty.
    pub fn best_match(&self, input: &str) -> Option<NameMatch<'_>> {
        resolver::best_match(input, self.names())
    }

    /// Resolve a free-form name, echoing it back when there is no confident match.
    pub fn resolve(&self, input: &str) -> String {
        debug!(player_name = input, "resolving player name");
        let resolved = resolver::resolve(input, self.names());
        if resolved != input {
            debug!(from = input, to = %resolved, "resolved player name");
        }
        resolved
    }

    /// External id for a name: directory entry first, then a
    /// case-insensitive lookup in the id table.
    pub fn external_id(&self, name: &str) -> Option<&ExternalId> {
        self.get(name)
            .and_then(|p| p.external_id.as_ref())
            .or_else(|| self.ids_by_name.get(&name.to_lowercase()))
    }
}

/// Everything the tools read, loaded once and never mutated.
///
/// A refresh builds a new snapshot with [`DataSnapshot::load`].
#[derive(Debug, Clone, Default)]
pub struct DataSnapshot {
    directory: PlayerDirectory,
    /// Display name -> records in ascending (season, week) order.
    weekly_stats: HashMap<String, Vec<WeeklyStatRecord>>,
    valuations: HashMap<ExternalId, ValuationRecord>,
    projections: BTreeMap<(Season, Week), HashMap<ExternalId, ProjectionRecord>>,
}

impl DataSnapshot {
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::default()
    }

    /// Read every configured data source from disk.
    ///
    /// The weekly stats, id and valuation tables are required; projections
    /// are optional.
    pub fn load(paths: &DataPaths, season_type: &str) -> Result<Self> {
        let mut builder = Self::builder()
            .weekly_stats(loader::load_weekly_stats(&paths.weekly_stats)?)
            .player_ids(loader::load_player_ids(&paths.player_ids)?)
            .valuations(loader::load_valuations(&paths.valuations)?);

        for (season, records) in loader::load_projections(&paths.projections_dir, season_type)? {
            builder = builder.projections(season, records);
        }

        let snapshot = builder.build();
        info!(
            players = snapshot.directory.len(),
            valuations = snapshot.valuations.len(),
            projection_weeks = snapshot.projections.len(),
            "data snapshot loaded"
        );
        Ok(snapshot)
    }

    pub fn directory(&self) -> &PlayerDirectory {
        &self.directory
    }

    /// Weekly stats for an exact display name, oldest game first.
    pub fn weekly_stats(&self, display_name: &str) -> &[WeeklyStatRecord] {
        self.weekly_stats
            .get(display_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn valuation(&self, id: &ExternalId) -> Option<&ValuationRecord> {
        self.valuations.get(id)
    }

    pub fn projection(&self, season: Season, week: Week, id: &ExternalId) -> Option<&ProjectionRecord> {
        self.projections.get(&(season, week))?.get(id)
    }
}

/// Assembles a [`DataSnapshot`] from already-parsed records.
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    weekly_stats: Vec<WeeklyStatRecord>,
    player_ids: Vec<PlayerIdEntry>,
    valuations: Vec<ValuationRecord>,
    projections: Vec<(Season, ProjectionRecord)>,
}

impl SnapshotBuilder {
    pub fn weekly_stats(mut self, records: Vec<WeeklyStatRecord>) -> Self {
        self.weekly_stats.extend(records);
        self
    }

    pub fn player_ids(mut self, entries: Vec<PlayerIdEntry>) -> Self {
        self.player_ids.extend(entries);
        self
    }

    pub fn valuations(mut self, records: Vec<ValuationRecord>) -> Self {
        self.valuations.extend(records);
        self
    }

    pub fn projections(mut self, season: Season, records: Vec<ProjectionRecord>) -> Self {
        self.projections
            .extend(records.into_iter().map(|r| (season, r)));
        self
    }

    pub fn build(self) -> DataSnapshot {
        let directory = PlayerDirectory::build(&self.weekly_stats, &self.player_ids);

        let mut weekly_stats: HashMap<String, Vec<WeeklyStatRecord>> = HashMap::new();
        for record in self.weekly_stats {
            weekly_stats
                .entry(record.player_display_name.clone())
                .or_default()
                .push(record);
        }
        for records in weekly_stats.values_mut() {
            // stable, so same-week rows keep their source order; rows
            // without a season sort ahead of dated ones
            records.sort_by_key(|r| (r.season, r.week));
        }

        let mut valuations = HashMap::new();
        for record in self.valuations {
            valuations.entry(record.external_id.clone()).or_insert(record);
        }

        let mut projections: BTreeMap<(Season, Week), HashMap<ExternalId, ProjectionRecord>> =
            BTreeMap::new();
        for (season, record) in self.projections {
            projections
                .entry((season, record.week))
                .or_default()
                .insert(record.external_id.clone(), record);
        }

        DataSnapshot {
            directory,
            weekly_stats,
            valuations,
            projections,
        }
    }
}
