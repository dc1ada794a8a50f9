pub mod demo;
pub mod format;
pub mod highlights;
pub mod logging;
pub mod session;
pub mod settings;
pub mod summary;
pub mod theme;

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use crate::highlights::Alignment;
use crate::session::{get_highlight_rows, Session};
use crate::settings::load_viewer_settings;
use crate::theme::StyledSpan;

#[derive(Debug, Parser)]
#[command(name = "demoscope", about = "Print the highlight timeline of a decoded demo")]
pub struct Cli {
    /// Game summary JSON produced by the demo parser
    pub summary: PathBuf,

    /// Viewer settings file; defaults are used when it does not exist
    #[arg(long, default_value = "demoscope.json")]
    pub settings: PathBuf,

    /// Print styled rows as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StyledRow {
    tick: u32,
    time_label: String,
    alignment: Alignment,
    spans: Vec<StyledSpan>,
}

pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let settings = load_viewer_settings(&cli.settings)?;
    logging::init_logging(&settings.log_filter)?;

    tracing::info!(summary = %cli.summary.display(), "Rendering highlight timeline");

    if cli.json {
        let rows = get_highlight_rows(
            cli.summary.to_string_lossy().to_string(),
            settings.timestamp_mode,
        )?;
        let styled_rows = rows
            .iter()
            .map(|row| StyledRow {
                tick: row.tick,
                time_label: row.time_label.clone(),
                alignment: row.rendered.alignment,
                spans: settings.palette.style(&row.rendered),
            })
            .collect::<Vec<StyledRow>>();
        let serialized = serde_json::to_string_pretty(&styled_rows)
            .map_err(|error| format!("Failed to serialize highlight rows: {error}"))?;
        println!("{serialized}");
        return Ok(());
    }

    let session = Session::load(&cli.summary)?;
    println!("{}", session.scoreline());
    for row in session.rows(settings.timestamp_mode) {
        println!("{:>8}  {}", row.time_label, row.rendered.plain_text());
    }

    Ok(())
}
