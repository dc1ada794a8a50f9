use serde::Serialize;
use std::path::Path;

use crate::format::format_tick_clock;
use crate::highlights::{resolve_decoded, sort_highlight_events, RenderedHighlight};
use crate::settings::TimestampMode;
use crate::summary::{read_game_summary, GameSummary, PlayerLookup};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightRow {
    pub tick: u32,
    pub time_label: String,
    pub rendered: RenderedHighlight,
}

/// One loaded demo. The player lookup is built here and never changes;
/// loading another demo means building another session.
#[derive(Debug, Clone)]
pub struct Session {
    summary: GameSummary,
    players: PlayerLookup,
}

impl Session {
    pub fn new(mut summary: GameSummary) -> Self {
        sort_highlight_events(&mut summary.highlights);
        let players = PlayerLookup::from_players(summary.players.iter().cloned());

        tracing::debug!(
            highlights = summary.highlights.len(),
            players = players.len(),
            "Loaded demo session"
        );

        Self { summary, players }
    }

    pub fn load(summary_path: &Path) -> Result<Self, String> {
        read_game_summary(summary_path).map(Self::new)
    }

    pub fn summary(&self) -> &GameSummary {
        &self.summary
    }

    pub fn players(&self) -> &PlayerLookup {
        &self.players
    }

    pub fn scoreline(&self) -> String {
        format!(
            "RED {} : {} BLU",
            self.summary.red_team_score, self.summary.blue_team_score
        )
    }

    pub fn time_label(&self, tick: u32, mode: TimestampMode) -> String {
        match mode {
            TimestampMode::Tick => tick.to_string(),
            TimestampMode::Clock => format_tick_clock(tick, self.summary.interval_per_tick),
        }
    }

    /// Rendered rows in tick order. Events that render nothing are skipped.
    pub fn rows(&self, mode: TimestampMode) -> impl Iterator<Item = HighlightRow> + '_ {
        self.summary.highlights.iter().filter_map(move |event| {
            let rendered = resolve_decoded(&event.event, &self.players);
            if rendered.is_empty() {
                return None;
            }

            Some(HighlightRow {
                tick: event.tick,
                time_label: self.time_label(event.tick, mode),
                rendered,
            })
        })
    }
}

/// Loads the summary at `summary_path` and returns its rendered timeline.
pub fn get_highlight_rows(
    summary_path: String,
    timestamp_mode: TimestampMode,
) -> Result<Vec<HighlightRow>, String> {
    let session = Session::load(Path::new(&summary_path))?;
    Ok(session.rows(timestamp_mode).collect())
}

#[cfg(test)]
mod tests {
    use super::{get_highlight_rows, Session};
    use crate::settings::TimestampMode;
    use crate::summary::GameSummary;
    use serde_json::json;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn summary_json() -> serde_json::Value {
        json!({
            "local_user_id": 5,
            "red_team_score": 3,
            "blue_team_score": 1,
            "interval_per_tick": 0.015625,
            "players": [
                { "name": "Scout Main", "steam_id": 76561198000000005_u64, "user_id": 5, "team": "red",
                  "classes": [0, 1200], "damage": 8000, "kills": 20, "deaths": 9, "assists": 4,
                  "healing": 0, "invulns": 0, "captures": 3 },
                { "name": "Sniper", "steam_id": 76561198000000008_u64, "user_id": 8, "team": "blue",
                  "classes": [0, 0, 1100], "damage": 6000, "kills": 14, "deaths": 12, "assists": 1,
                  "healing": 0, "invulns": 0, "captures": 0 }
            ],
            "highlights": [
                { "tick": 4000, "event": { "t": "RoundWin", "c": { "winner": 2 } } },
                { "tick": 100, "event": { "t": "RoundStart" } },
                { "tick": 2000, "event": { "t": "Taunt", "c": { "user_id": 5 } } },
                { "tick": 2000, "event": { "t": "PointCaptured",
                    "c": { "point_name": "Last", "capturing_team": 2, "cappers": [5, 999] } } },
                { "tick": 2000, "event": { "t": "PlayerDisconnected",
                    "c": { "user_id": 8, "reason": "#TF_Idle_kicked" } } }
            ]
        })
    }

    fn summary() -> GameSummary {
        serde_json::from_value(summary_json()).expect("Expected game summary to decode")
    }

    #[test]
    fn renders_rows_in_tick_order_skipping_unknown_events() {
        let session = Session::new(summary());
        let rows = session.rows(TimestampMode::Tick).collect::<Vec<_>>();

        let texts = rows
            .iter()
            .map(|row| (row.tick, row.rendered.plain_text()))
            .collect::<Vec<_>>();
        assert_eq!(
            texts,
            vec![
                (100, "New round started".to_string()),
                (2000, "Scout Main [redcapture] captured Last".to_string()),
                (
                    2000,
                    "Sniper left the game (Kicked due to inactivity)".to_string()
                ),
                (4000, "RED won the round".to_string()),
            ]
        );
        assert_eq!(rows[0].time_label, "100");
    }

    #[test]
    fn labels_rows_with_clock_time() {
        let session = Session::new(summary());
        let labels = session
            .rows(TimestampMode::Clock)
            .map(|row| row.time_label)
            .collect::<Vec<_>>();

        assert_eq!(labels, vec!["00:00:01", "00:00:31", "00:00:31", "00:01:02"]);
    }

    #[test]
    fn exposes_scoreline_and_players() {
        let session = Session::new(summary());
        assert_eq!(session.scoreline(), "RED 3 : 1 BLU");
        assert_eq!(session.players().len(), 2);
        assert_eq!(session.summary().local_user_id, 5);
    }

    #[test]
    fn reads_highlight_rows_from_a_summary_file() {
        let timestamp_nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_nanos())
            .unwrap_or(0);
        let temp_directory = std::env::temp_dir().join(format!(
            "demoscope_session_test_{}_{timestamp_nanos}",
            std::process::id()
        ));
        std::fs::create_dir_all(&temp_directory)
            .expect("Failed to create temporary session test directory");

        let summary_path = temp_directory.join("summary.json");
        std::fs::write(&summary_path, summary_json().to_string())
            .expect("Failed to write summary file");

        let rows = get_highlight_rows(
            summary_path.to_string_lossy().to_string(),
            TimestampMode::Clock,
        )
        .expect("Expected highlight rows to load");
        let rows = rows
            .iter()
            .map(|row| (row.time_label.as_str(), row.rendered.plain_text()))
            .collect::<Vec<_>>();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], ("00:00:01", "New round started".to_string()));
        assert_eq!(rows[3], ("00:01:02", "RED won the round".to_string()));

        let missing = get_highlight_rows(
            temp_directory.join("missing.json").to_string_lossy().to_string(),
            TimestampMode::Tick,
        );
        assert!(missing.is_err());

        let _ = std::fs::remove_dir_all(&temp_directory);
    }
}
