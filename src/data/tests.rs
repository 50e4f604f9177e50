//! Unit tests for the data layer

use super::loader::*;
use super::*;
use crate::cli::types::{ExternalId, Position, ScoringMode, Season, Week};
use crate::error::FflError;

const WEEKLY_CSV: &str = "\
player_id,player_name,player_display_name,position,position_group,recent_team,season,week,opponent_team,passing_yards,passing_tds,interceptions,rushing_yards,rushing_tds,receptions,receiving_yards,receiving_tds,fantasy_points,fantasy_points_ppr
00-0033873,P.Mahomes,Patrick Mahomes,QB,QB,KC,2024,1,BAL,291.0,1,2.0,2.0,0,0,0.0,0,16.94,16.94
00-0033873,P.Mahomes,Patrick Mahomes,QB,QB,KC,2024,2,CIN,151.0,1,1.0,,,0,0.0,0,8.04,8.04
00-0039337,B.Thomas,Brian Thomas,WR,WR,JAX,2024,1,MIA,,,,,,5,47.0,0,4.7,9.7
";

fn weekly_records() -> Vec<WeeklyStatRecord> {
    load_weekly_stats_from_reader(WEEKLY_CSV.as_bytes()).unwrap()
}

fn id_entry(name: &str, id: Option<&str>) -> PlayerIdEntry {
    PlayerIdEntry {
        name: name.to_string(),
        external_id: id.map(ExternalId::new),
    }
}

#[test]
fn test_weekly_stats_parse() {
    let records = weekly_records();
    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first.player_display_name, "Patrick Mahomes");
    assert_eq!(first.week, Week::new(1));
    assert_eq!(first.recent_team, "KC");
    assert_eq!(first.opponent_team, "BAL");
    assert_eq!(first.passing_yards, Some(291.0));
    assert_eq!(first.passing_tds, Some(1));
    assert_eq!(first.interceptions, Some(2));
    assert_eq!(first.fantasy_points, Some(16.94));
    assert_eq!(first.position_group(), Position::QB);
}

#[test]
fn test_weekly_stats_empty_cells_are_absent() {
    let records = weekly_records();
    assert_eq!(records[1].rushing_yards, None);
    assert_eq!(records[1].rushing_tds, None);
    assert_eq!(records[2].passing_yards, None);
    assert_eq!(records[2].receptions, Some(5));
}

#[test]
fn test_weekly_stats_malformed_rows_skipped() {
    let csv = "player_display_name,week,position\nJosh Allen,1,QB\nJosh Allen,not_a_week,QB\n,3,QB\nJosh Allen,2,QB\n";
    let records = load_weekly_stats_from_reader(csv.as_bytes()).unwrap();
    let weeks: Vec<u16> = records.iter().map(|r| r.week.as_u16()).collect();
    assert_eq!(weeks, vec![1, 2]);
}

#[test]
fn test_weekly_stats_missing_column() {
    let csv = "player_name,week\nJ.Allen,1\n";
    match load_weekly_stats_from_reader(csv.as_bytes()).unwrap_err() {
        FflError::MissingColumn { column } => assert_eq!(column, "player_display_name"),
        other => panic!("Expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn test_weekly_stats_nan_is_absent() {
    let csv = "player_display_name,week,position,passing_yards,passing_tds\nJosh Allen,1,QB,NaN,NaN\n";
    let records = load_weekly_stats_from_reader(csv.as_bytes()).unwrap();
    assert_eq!(records[0].passing_yards, None);
    assert_eq!(records[0].passing_tds, None);
}

#[test]
fn test_player_ids_parse() {
    let csv = "name,sleeper_id,position,espn_id\nPatrick Mahomes,4046.0,QB,3139477\nOld Timer,,QB,\n";
    let entries = load_player_ids_from_reader(csv.as_bytes()).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].external_id, Some(ExternalId::new("4046")));
    assert_eq!(entries[1].external_id, None);
}

#[test]
fn test_valuations_parse() {
    let csv = "name;sleeperId;value;overallRank;positionRank\nPatrick Mahomes;4046;5821;31;4\nNo Id;;100;300;80\n";
    let records = load_valuations_from_reader(csv.as_bytes()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].external_id, ExternalId::new("4046"));
    assert_eq!(records[0].value, 5821);
    assert_eq!(records[0].overall_rank, 31);
}

#[test]
fn test_valuations_require_semicolon_columns() {
    let csv = "name,sleeperId,value,overallRank\nPatrick Mahomes,4046,5821,31\n";
    assert!(matches!(
        load_valuations_from_reader(csv.as_bytes()),
        Err(FflError::MissingColumn { .. })
    ));
}

#[test]
fn test_projections_keyed_format() {
    let json = r#"{
        "4046": {"pts_ppr": 20.5, "pts_half_ppr": 20.5, "pts_std": 20.5, "pass_yd": 270.0},
        "6794": {"pts_ppr": 18.25, "pts_half_ppr": 15.75, "pts_std": 13.25}
    }"#;
    let records = parse_week_projections(json, Week::new(8)).unwrap();
    assert_eq!(records.len(), 2);

    let jefferson = records
        .iter()
        .find(|r| r.external_id == ExternalId::new("6794"))
        .unwrap();
    assert_eq!(jefferson.week, Week::new(8));
    assert_eq!(jefferson.points(ScoringMode::Ppr), 18.25);
    assert_eq!(jefferson.points(ScoringMode::HalfPpr), 15.75);
    assert_eq!(jefferson.points(ScoringMode::Standard), 13.25);
}

#[test]
fn test_projections_listed_format() {
    let json = r#"[
        {"player_id": "4046", "stats": {"pts_ppr": 21.0, "pts_standard": 19.0}},
        {"player_id": "9999"}
    ]"#;
    let records = parse_week_projections(json, Week::new(3)).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].points(ScoringMode::Ppr), 21.0);
    assert_eq!(records[0].points(ScoringMode::Standard), 19.0);
    assert_eq!(records[0].points(ScoringMode::HalfPpr), 0.0);
    assert_eq!(records[1].points(ScoringMode::Ppr), 0.0);
}

#[test]
fn test_projections_invalid_json() {
    assert!(matches!(
        parse_week_projections("\"nope\"", Week::new(1)),
        Err(FflError::Json(_))
    ));
}

#[test]
fn test_week_projection_path() {
    let path = week_projection_path(
        std::path::Path::new("/data/projections"),
        Season::new(2024),
        "regular",
        Week::new(8),
    );
    assert_eq!(
        path,
        std::path::PathBuf::from("/data/projections/2024/regular/week_8.json")
    );
}

#[test]
fn test_directory_order_and_ids() {
    let ids = vec![
        id_entry("Patrick Mahomes", Some("4046")),
        id_entry("Justin Jefferson", Some("6794")),
    ];
    let directory = PlayerDirectory::build(&weekly_records(), &ids);

    let names: Vec<&str> = directory.names().collect();
    assert_eq!(names, vec!["Patrick Mahomes", "Brian Thomas"]);
    assert_eq!(
        directory.external_id("Patrick Mahomes"),
        Some(&ExternalId::new("4046"))
    );
    assert_eq!(directory.external_id("Brian Thomas"), None);
    // id-table players without weekly stats are still reachable
    assert_eq!(
        directory.external_id("justin jefferson"),
        Some(&ExternalId::new("6794"))
    );
    assert_eq!(directory.position("Brian Thomas"), Position::WR);
    assert_eq!(directory.position("Nobody"), Position::Other);
}

#[test]
fn test_directory_duplicate_names_first_id_wins() {
    let ids = vec![
        id_entry("Mike Williams", None),
        id_entry("Mike Williams", Some("4068")),
        id_entry("Mike Williams", Some("9999")),
    ];
    let stats = vec![WeeklyStatRecord::new("Mike Williams", Week::new(1), "WR")];
    let directory = PlayerDirectory::build(&stats, &ids);
    assert_eq!(
        directory.external_id("Mike Williams"),
        Some(&ExternalId::new("4068"))
    );
}

#[test]
fn test_directory_resolve() {
    let directory = PlayerDirectory::build(&weekly_records(), &[]);
    assert_eq!(directory.resolve("Patrick Mahomed"), "Patrick Mahomes");
    assert_eq!(directory.resolve("Nonexistant Guy"), "Nonexistant Guy");
    let m = directory.best_match("Brian Tomas").unwrap();
    assert_eq!(m.candidate, "Brian Thomas");
    assert!(m.is_confident());
}

#[test]
fn test_snapshot_sorts_weeks_ascending() {
    let snapshot = DataSnapshot::builder()
        .weekly_stats(vec![
            WeeklyStatRecord::new("Josh Allen", Week::new(3), "QB"),
            WeeklyStatRecord::new("Josh Allen", Week::new(1), "QB"),
            WeeklyStatRecord::new("Josh Allen", Week::new(2), "QB"),
        ])
        .build();

    let weeks: Vec<u16> = snapshot
        .weekly_stats("Josh Allen")
        .iter()
        .map(|r| r.week.as_u16())
        .collect();
    assert_eq!(weeks, vec![1, 2, 3]);
    assert!(snapshot.weekly_stats("Nobody").is_empty());
}

#[test]
fn test_snapshot_sorts_by_season_then_week() {
    let snapshot = DataSnapshot::builder()
        .weekly_stats(vec![
            WeeklyStatRecord::new("Josh Allen", Week::new(17), "QB").in_season(Season::new(2023)),
            WeeklyStatRecord::new("Josh Allen", Week::new(2), "QB").in_season(Season::new(2024)),
            WeeklyStatRecord::new("Josh Allen", Week::new(1), "QB").in_season(Season::new(2024)),
        ])
        .build();

    let games: Vec<(u16, u16)> = snapshot
        .weekly_stats("Josh Allen")
        .iter()
        .map(|r| (r.season.map_or(0, |s| s.0), r.week.as_u16()))
        .collect();
    assert_eq!(games, vec![(2023, 17), (2024, 1), (2024, 2)]);
}

#[test]
fn test_weekly_stats_season_column() {
    let records = weekly_records();
    assert_eq!(records[0].season, Some(Season::new(2024)));

    let csv = "player_display_name,week,position\nJosh Allen,1,QB\n";
    let records = load_weekly_stats_from_reader(csv.as_bytes()).unwrap();
    assert_eq!(records[0].season, None);
}

#[test]
fn test_snapshot_projection_lookup() {
    let id = ExternalId::new("4046");
    let snapshot = DataSnapshot::builder()
        .projections(
            Season::new(2024),
            vec![ProjectionRecord::new(id.clone(), Week::new(8)).with_points(ScoringMode::Ppr, 20.0)],
        )
        .build();

    let record = snapshot.projection(Season::new(2024), Week::new(8), &id).unwrap();
    assert_eq!(record.points(ScoringMode::Ppr), 20.0);
    assert!(snapshot.projection(Season::new(2023), Week::new(8), &id).is_none());
    assert!(snapshot.projection(Season::new(2024), Week::new(9), &id).is_none());
}
