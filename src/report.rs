//! Report document generation
//!
//! The report is rebuilt from scratch on every run from whatever list files exist on
//! disk at that moment. Files that are missing are left out of the stats section entirely.

use crate::config::Config;
use crate::error::{PersistError, Result};
use crate::persist;
use crate::types::Target;
use chrono::{DateTime, Local};
use std::path::PathBuf;
use tracing::debug;

/// Timestamp format of the "Last Updated" section (local wall-clock, second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DISCLAIMER: &str = "These proxies are collected from public sources. \
Use responsibly and verify their reliability before use.";

/// Number of lines with non-whitespace content
pub fn count_entries(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Entry count of one list file present on disk
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileStat {
    /// Target filename
    pub filename: String,
    /// Non-blank line count
    pub entries: usize,
}

/// Count entries of every target file that currently exists, in target order
pub async fn collect_stats(
    config: &Config,
    targets: &[Target],
) -> std::result::Result<Vec<FileStat>, PersistError> {
    let mut stats = Vec::with_capacity(targets.len());
    for target in targets {
        let path = config.target_path(&target.filename);
        match persist::read_text(&path).await? {
            Some(text) => stats.push(FileStat {
                filename: target.filename.clone(),
                entries: count_entries(&text),
            }),
            None => debug!(filename = %target.filename, "list file missing, omitted from report"),
        }
    }
    Ok(stats)
}

/// Compose the full report document
pub fn render(
    config: &Config,
    targets: &[Target],
    stats: &[FileStat],
    generated_at: DateTime<Local>,
) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("# {}\n\n", config.report.title));
    doc.push_str(&format!(
        "Auto-updated proxy lists fetched from [{}]({})\n\n",
        config.source.name, config.source.homepage
    ));

    doc.push_str("## Files\n\n");
    for target in targets {
        doc.push_str(&format!("- `{}` - {}\n", target.filename, target.description));
    }

    doc.push_str("\n## Stats\n\n");
    for stat in stats {
        doc.push_str(&format!("- **{}**: {} proxies\n", stat.filename, stat.entries));
    }

    doc.push_str("\n## Last Updated\n\n");
    doc.push_str(&format!("{}\n", generated_at.format(TIMESTAMP_FORMAT)));

    doc.push_str("\n## Usage\n\n");
    doc.push_str("Each file contains one proxy per line in the format:\n");
    for target in targets {
        doc.push_str(&format!("- {}: `ip:port`\n", target.label));
    }

    doc.push_str("\n## Disclaimer\n\n");
    doc.push_str(DISCLAIMER);
    doc.push('\n');

    doc
}

/// Regenerate the report from current local files, overwriting any previous report
///
/// Returns the path that was written.
pub async fn generate(
    config: &Config,
    targets: &[Target],
    generated_at: DateTime<Local>,
) -> Result<PathBuf> {
    let stats = collect_stats(config, targets).await?;
    let doc = render(config, targets, &stats, generated_at);

    let path = config.report_path();
    persist::write_text(&path, &doc).await?;
    debug!(path = %path.display(), files = stats.len(), "report written");
    Ok(path)
}
