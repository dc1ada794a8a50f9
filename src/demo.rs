use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::format::{format_birthtime, format_file_size, format_playback_time};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemoEventKind {
    Killstreak,
    Bookmark,
}

/// A bookmark or killstreak marker written alongside a demo file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoEvent {
    pub name: DemoEventKind,
    pub value: String,
    pub tick: u32,
}

/// Header and file metadata for one demo, as produced by the directory scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demo {
    pub name: String,
    pub path: String,
    /// Unix timestamp in milliseconds.
    pub birthtime: i64,
    pub filesize: u64,
    #[serde(default)]
    pub events: Vec<DemoEvent>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub server_name: String,
    pub client_name: String,
    pub map_name: String,
    pub playback_time: f64,
    pub num_ticks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoListEntry {
    pub name: String,
    pub map_name: String,
    pub playback_time: String,
    pub client_name: String,
    pub server_name: String,
    pub num_events: usize,
    pub num_ticks: u32,
    pub created_date: String,
    pub created_time: String,
    pub filesize: String,
}

impl Demo {
    /// SourceTV recordings carry no server name.
    pub fn is_stv_demo(&self) -> bool {
        self.server_name.is_empty()
    }

    pub fn list_entry<Tz>(&self, time_zone: &Tz) -> DemoListEntry
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let (created_date, created_time) =
            format_birthtime(self.birthtime, time_zone).unwrap_or_default();

        DemoListEntry {
            name: self.name.clone(),
            map_name: self.map_name.clone(),
            playback_time: format_playback_time(self.playback_time),
            client_name: self.client_name.clone(),
            server_name: self.server_name.clone(),
            num_events: self.events.len(),
            num_ticks: self.num_ticks,
            created_date,
            created_time,
            filesize: format_file_size(self.filesize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Demo, DemoEventKind};
    use chrono::Utc;
    use serde_json::json;

    fn demo_json(server_name: &str) -> serde_json::Value {
        json!({
            "name": "2023-11-14_22-13-20",
            "path": "/demos/2023-11-14_22-13-20.dem",
            "birthtime": 1_700_000_000_000_i64,
            "filesize": 48_200_000,
            "events": [
                { "name": "Bookmark", "value": "General", "tick": 1500 },
                { "name": "Killstreak", "value": "5", "tick": 3000 }
            ],
            "tags": ["scrim"],
            "serverName": server_name,
            "clientName": "Scout Main",
            "mapName": "cp_process_f12",
            "playbackTime": 1_865.4,
            "numTicks": 124_360
        })
    }

    #[test]
    fn decodes_camel_case_demo_metadata() {
        let demo: Demo =
            serde_json::from_value(demo_json("Community #1")).expect("Expected demo to decode");

        assert_eq!(demo.map_name, "cp_process_f12");
        assert_eq!(demo.events[1].name, DemoEventKind::Killstreak);
        assert!(!demo.is_stv_demo());
    }

    #[test]
    fn detects_sourcetv_demos_by_empty_server_name() {
        let demo: Demo = serde_json::from_value(demo_json("")).expect("Expected demo to decode");
        assert!(demo.is_stv_demo());
    }

    #[test]
    fn builds_formatted_list_entry() {
        let demo: Demo =
            serde_json::from_value(demo_json("Community #1")).expect("Expected demo to decode");
        let entry = demo.list_entry(&Utc);

        assert_eq!(entry.playback_time, "00:31:05");
        assert_eq!(entry.filesize, "48.2 MB");
        assert_eq!(entry.num_events, 2);
        assert_eq!(entry.created_date, "2023-11-14");
        assert_eq!(entry.created_time, "22:13:20");
    }
}
