//! Readers for the external data exports.
//!
//! - weekly player stats: nflverse CSV, one row per player per week
//! - player ids: nflverse id cross-reference CSV (`name`, `sleeper_id`)
//! - valuations: fantasycalc rankings, `;`-separated
//! - projections: Sleeper weekly projection JSON, one file per week

use super::models::{PlayerIdEntry, ProjectionRecord, ValuationRecord, WeeklyStatRecord};
use crate::{
    cli::types::{ExternalId, ScoringMode, Season, Week},
    error::{FflError, Result},
};
use serde::Deserialize;
use serde_json::Value;
use std::{
    collections::HashMap,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct RawPlayerId {
    name: String,
    #[serde(default)]
    sleeper_id: String,
}

#[derive(Debug, Deserialize)]
struct RawValuation {
    #[serde(rename = "sleeperId", default)]
    sleeper_id: String,
    value: f64,
    #[serde(rename = "overallRank")]
    overall_rank: f64,
}

/// Sleeper serves weekly projections either keyed by player id or as a list
/// of entries carrying the id.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawWeekProjections {
    Keyed(HashMap<String, Value>),
    Listed(Vec<ListedProjection>),
}

#[derive(Debug, Deserialize)]
struct ListedProjection {
    player_id: String,
    #[serde(default)]
    stats: Value,
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| FflError::data_source(path, e))
}

fn require_columns<R: Read>(reader: &mut csv::Reader<R>, columns: &[&str]) -> Result<()> {
    let headers = reader.headers()?;
    for column in columns {
        if !headers.iter().any(|h| h.trim() == *column) {
            return Err(FflError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Parse weekly stats; malformed rows are skipped with a warning.
pub fn load_weekly_stats_from_reader<R: Read>(rdr: R) -> Result<Vec<WeeklyStatRecord>> {
    let mut reader = csv::Reader::from_reader(rdr);
    require_columns(&mut reader, &["player_display_name", "week"])?;
    let mut records = Vec::new();
    for (line, row) in reader.deserialize::<WeeklyStatRecord>().enumerate() {
        match row {
            Ok(record) if !record.player_display_name.trim().is_empty() => records.push(record),
            Ok(_) => warn!(line = line + 2, "skipping weekly stat row without a player name"),
            Err(e) => warn!(line = line + 2, error = %e, "skipping malformed weekly stat row"),
        }
    }
    Ok(records)
}

pub fn load_weekly_stats(path: &Path) -> Result<Vec<WeeklyStatRecord>> {
    let records = load_weekly_stats_from_reader(open(path)?)
        .map_err(|e| FflError::data_source(path, e))?;
    debug!(path = %path.display(), rows = records.len(), "loaded weekly stats");
    Ok(records)
}

pub fn load_player_ids_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerIdEntry>> {
    let mut reader = csv::Reader::from_reader(rdr);
    require_columns(&mut reader, &["name", "sleeper_id"])?;
    let mut entries = Vec::new();
    for row in reader.deserialize::<RawPlayerId>() {
        match row {
            Ok(raw) => entries.push(PlayerIdEntry {
                name: raw.name.trim().to_string(),
                external_id: ExternalId::from_cell(&raw.sleeper_id),
            }),
            Err(e) => warn!(error = %e, "skipping malformed player id row"),
        }
    }
    Ok(entries)
}

pub fn load_player_ids(path: &Path) -> Result<Vec<PlayerIdEntry>> {
    let entries =
        load_player_ids_from_reader(open(path)?).map_err(|e| FflError::data_source(path, e))?;
    debug!(path = %path.display(), rows = entries.len(), "loaded player ids");
    Ok(entries)
}

/// Parse the `;`-separated valuation table. Rows without a Sleeper id are dropped.
pub fn load_valuations_from_reader<R: Read>(rdr: R) -> Result<Vec<ValuationRecord>> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b';').from_reader(rdr);
    require_columns(&mut reader, &["sleeperId", "value", "overallRank"])?;
    let mut records = Vec::new();
    for row in reader.deserialize::<RawValuation>() {
        let raw = match row {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "skipping malformed valuation row");
                continue;
            }
        };
        let Some(external_id) = ExternalId::from_cell(&raw.sleeper_id) else {
            continue;
        };
        if !raw.value.is_finite() || !raw.overall_rank.is_finite() {
            continue;
        }
        records.push(ValuationRecord {
            external_id,
            value: raw.value.round().clamp(0.0, 10_000.0) as u32,
            overall_rank: raw.overall_rank.round().max(0.0) as u32,
        });
    }
    Ok(records)
}

pub fn load_valuations(path: &Path) -> Result<Vec<ValuationRecord>> {
    let records =
        load_valuations_from_reader(open(path)?).map_err(|e| FflError::data_source(path, e))?;
    debug!(path = %path.display(), rows = records.len(), "loaded valuations");
    Ok(records)
}

fn projection_from_stats(external_id: ExternalId, week: Week, stats: &Value) -> ProjectionRecord {
    let mut record = ProjectionRecord::new(external_id, week);
    if let Some(map) = stats.as_object() {
        for (key, value) in map {
            if let (Some(mode), Some(points)) =
                (ScoringMode::from_projection_key(key), value.as_f64())
            {
                record.points_by_scoring_format.insert(mode, points);
            }
        }
    }
    record
}

/// Parse one week of Sleeper projections.
pub fn parse_week_projections(json: &str, week: Week) -> Result<Vec<ProjectionRecord>> {
    let raw: RawWeekProjections = serde_json::from_str(json)?;
    let records = match raw {
        RawWeekProjections::Keyed(map) => map
            .into_iter()
            .filter_map(|(id, stats)| {
                ExternalId::from_cell(&id).map(|id| projection_from_stats(id, week, &stats))
            })
            .collect(),
        RawWeekProjections::Listed(entries) => entries
            .into_iter()
            .filter_map(|entry| {
                ExternalId::from_cell(&entry.player_id)
                    .map(|id| projection_from_stats(id, week, &entry.stats))
            })
            .collect(),
    };
    Ok(records)
}

/// `<dir>/<season>/<season_type>/week_<n>.json`
pub fn week_projection_path(dir: &Path, season: Season, season_type: &str, week: Week) -> PathBuf {
    dir.join(season.to_string())
        .join(season_type)
        .join(format!("week_{}.json", week))
}

fn week_from_file_name(path: &Path) -> Option<Week> {
    let stem = path.file_stem()?.to_str()?;
    if path.extension()?.to_str()? != "json" {
        return None;
    }
    stem.strip_prefix("week_")?.parse().ok()
}

/// Load every season's weekly projection files for `season_type`.
///
/// A missing projections directory yields no data rather than an error.
pub fn load_projections(
    dir: &Path,
    season_type: &str,
) -> Result<Vec<(Season, Vec<ProjectionRecord>)>> {
    let mut seasons = Vec::new();
    if !dir.is_dir() {
        debug!(path = %dir.display(), "no projections directory");
        return Ok(seasons);
    }

    for season_entry in std::fs::read_dir(dir)? {
        let season_dir = season_entry?.path();
        let Some(season) = season_dir
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.parse::<Season>().ok())
        else {
            continue;
        };

        let type_dir = season_dir.join(season_type);
        if !type_dir.is_dir() {
            continue;
        }

        let mut records = Vec::new();
        for week_entry in std::fs::read_dir(&type_dir)? {
            let path = week_entry?.path();
            let Some(week) = week_from_file_name(&path) else {
                continue;
            };
            let json = std::fs::read_to_string(&path)
                .map_err(|e| FflError::data_source(&path, e))?;
            let week_records =
                parse_week_projections(&json, week).map_err(|e| FflError::data_source(&path, e))?;
            debug!(%season, %week, players = week_records.len(), "loaded projections");
            records.extend(week_records);
        }
        seasons.push((season, records));
    }
    Ok(seasons)
}
