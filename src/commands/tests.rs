//! Tests for command rendering helpers

use super::*;
use crate::{
    cli::types::{ExternalId, ScoringMode, Season, Week},
    data::{DataSnapshot, PlayerIdEntry, WeeklyStatRecord},
    tools::{ProjectionOutcome, ToolMessage},
};

#[cfg(test)]
mod render_tests {
    use super::*;
    use serde_json::Value;

    fn snapshot() -> DataSnapshot {
        DataSnapshot::builder()
            .weekly_stats(vec![
                WeeklyStatRecord::new("Patrick Mahomes", Week::new(1), "QB"),
                WeeklyStatRecord::new("Brian Thomas", Week::new(1), "WR"),
            ])
            .player_ids(vec![PlayerIdEntry {
                name: "Patrick Mahomes".to_string(),
                external_id: Some(ExternalId::new("4046")),
            }])
            .build()
    }

    #[test]
    fn test_resolution_text() {
        let snapshot = snapshot();
        let directory = snapshot.directory();

        assert_eq!(
            resolve::render_resolution(directory, "Patrick Mahomed", false),
            "Patrick Mahomed -> Patrick Mahomes (QB, score 93)"
        );
        let miss = resolve::render_resolution(directory, "Tyrone Tracy", false);
        assert!(miss.starts_with("Tyrone Tracy -> no match (closest: "));

        let empty = DataSnapshot::default();
        assert_eq!(
            resolve::render_resolution(empty.directory(), "Anyone", false),
            "Anyone -> no match (player directory is empty)"
        );
    }

    #[test]
    fn test_resolution_json() {
        let snapshot = snapshot();
        let rendered = resolve::render_resolution(snapshot.directory(), "Patrick Mahomed", true);
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["resolved"], "Patrick Mahomes");
        assert_eq!(value["score"], 93);
        assert_eq!(value["position"], "QB");
        assert_eq!(value["matched"], true);
        assert_eq!(value["threshold"], 80);
    }

    #[test]
    fn test_projection_rendering() {
        let points = ProjectionOutcome::Points(35.5);
        let season = Season::new(2024);

        assert_eq!(
            player_tools::render_projection(
                &points,
                "Patrick Mahomes",
                season,
                Week::new(8),
                Week::new(10),
                ScoringMode::Ppr,
                false
            ),
            "35.5"
        );

        let rendered = player_tools::render_projection(
            &points,
            "Patrick Mahomes",
            season,
            Week::new(8),
            Week::new(10),
            ScoringMode::HalfPpr,
            true,
        );
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["points"], 35.5);
        assert_eq!(value["season"], 2024);
        assert_eq!(value["end_week"], 10);
        assert_eq!(value["scoring_format"], "half_ppr");

        let missing = ProjectionOutcome::NotFound("Nobody".to_string());
        let rendered = player_tools::render_projection(
            &missing,
            "Nobody",
            season,
            Week::new(8),
            Week::new(8),
            ScoringMode::Ppr,
            true,
        );
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["error"], "Player 'Nobody' not found.");
    }

    #[test]
    fn test_parse_calls_single_and_batch() {
        let single = tool_calls::parse_calls(
            r#"{"name": "get_value", "arguments": {"player_name": "Patrick Mahomes"}}"#,
        )
        .unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].name, "get_value");

        let batch = tool_calls::parse_calls(
            r#"[
                {"name": "get_value", "arguments": "{\"player_name\": \"Brian Thomas\"}"},
                {"type": "function", "function": {"name": "get_nfl_stats", "arguments": {"player_name": "Brian Thomas"}}}
            ]"#,
        )
        .unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[1].name, "get_nfl_stats");

        assert!(tool_calls::parse_calls("not json").is_err());
    }

    #[test]
    fn test_render_messages() {
        let messages = vec![
            ToolMessage::new("get_value", "Brian Thomas not found"),
            ToolMessage::new("get_nfl_stats", "\n---------- Recent Stats for X ----------\n"),
        ];

        let text = tool_calls::render_messages(&messages, false).unwrap();
        assert_eq!(
            text,
            "Brian Thomas not found\n\n\n---------- Recent Stats for X ----------"
        );

        let json = tool_calls::render_messages(&messages, true).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["role"], "tool");
        assert_eq!(value[1]["name"], "get_nfl_stats");
    }
}
