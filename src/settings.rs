use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

use crate::theme::TeamPalette;

pub(crate) const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampMode {
    #[default]
    Tick,
    Clock,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoDirectory {
    pub label: String,
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerSettings {
    pub palette: TeamPalette,
    pub timestamp_mode: TimestampMode,
    pub log_filter: String,
    pub demo_dirs: Vec<DemoDirectory>,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            palette: TeamPalette::default(),
            timestamp_mode: TimestampMode::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            demo_dirs: Vec::new(),
        }
    }
}

/// A missing settings file yields the defaults.
pub fn load_viewer_settings(path: &Path) -> Result<ViewerSettings, String> {
    let raw_json = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(ViewerSettings::default()),
        Err(error) => {
            return Err(format!(
                "Failed to read viewer settings '{}': {error}",
                path.display()
            ));
        }
    };

    serde_json::from_str::<ViewerSettings>(&raw_json).map_err(|error| {
        format!(
            "Failed to parse viewer settings '{}': {error}",
            path.display()
        )
    })
}
