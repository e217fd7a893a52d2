//! Human-readable console rendering of progress events

use crate::error::Result;
use crate::types::{Event, Stage};
use std::path::Path;

/// Separator printed around the per-target section
pub const SEPARATOR: &str = "--------------------------------------------------";

/// How events are printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Progress lines for a human operator
    #[default]
    Human,
    /// One JSON object per event
    Json,
}

/// Render an event in the requested format (may span several lines, no trailing newline)
pub fn format_event(event: &Event, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(render_human(event)),
        OutputFormat::Json => Ok(serde_json::to_string(event)?),
    }
}

/// Render an event as console text
pub fn render_human(event: &Event) -> String {
    match event {
        Event::Started { source, .. } => {
            format!("🔄 Starting proxy list update...\nSource: {source}\n{SEPARATOR}")
        }
        Event::Fetching { filename, .. } => format!("Downloading {filename}..."),
        Event::Updated { filename, entries } => {
            format!("✓ {filename} updated successfully ({entries} proxies)")
        }
        Event::Failed {
            filename,
            stage: Stage::Fetch,
            error,
        } => format!("✗ Failed to download {filename}: {error}"),
        Event::Failed {
            filename,
            stage: Stage::Persist,
            error,
        } => format!("✗ Error saving {filename}: {error}"),
        Event::Tallied { succeeded, total } => {
            format!("{SEPARATOR}\n📊 Results: {succeeded}/{total} files updated successfully")
        }
        Event::ReportWritten { path } => format!("✓ {} updated", display_name(path)),
        Event::ReportFailed { path, error } => {
            format!("✗ Failed to create {}: {error}", display_name(path))
        }
        Event::Finished { all_succeeded: true } => {
            "✅ All proxy lists updated successfully!".to_string()
        }
        Event::Finished {
            all_succeeded: false,
        } => "⚠️ Some files failed to update".to_string(),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
