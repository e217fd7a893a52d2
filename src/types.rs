//! Core types and events for proxy-list-updater

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// A remote list to synchronize: a local filename paired with the URL it is fetched from.
///
/// Targets are resolved from [`TargetConfig`](crate::config::TargetConfig) once at startup
/// and never change for the lifetime of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Local filename (relative to the output directory)
    pub filename: String,
    /// Remote URL of the list
    pub url: Url,
    /// Short protocol label used in the report's usage section (e.g. "HTTP")
    pub label: String,
    /// One-line description used in the report's file list
    pub description: String,
}

/// Step of a target update
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// HTTP retrieval
    Fetch,
    /// Writing the body to disk
    Persist,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Fetch => write!(f, "fetch"),
            Stage::Persist => write!(f, "persist"),
        }
    }
}

/// Result of updating one target
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// Fetched and written to disk
    Updated {
        /// Number of non-blank lines in the body
        entries: usize,
        /// Size of the body in bytes
        bytes: usize,
    },
    /// Fetch or persist failed; the local file was left as it was before the failing step
    Failed {
        /// Which step failed
        stage: Stage,
        /// Human-readable cause
        message: String,
    },
}

/// Outcome of a target, keyed by its filename
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetOutcome {
    /// Local filename of the target
    pub filename: String,
    /// What happened
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl TargetOutcome {
    /// Whether the target was fetched and persisted
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Updated { .. })
    }
}

/// Aggregate result of a full run
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Per-target outcomes in configuration order
    pub outcomes: Vec<TargetOutcome>,
    /// Path of the report if it was written
    pub report: Option<PathBuf>,
    /// Error message if report generation failed
    pub report_error: Option<String>,
}

impl RunSummary {
    /// Number of targets that were fetched and persisted
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of targets attempted
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// True when every target succeeded. Report generation does not count.
    pub fn all_succeeded(&self) -> bool {
        self.succeeded() == self.total()
    }

    /// Process exit status: 0 when all targets succeeded, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.all_succeeded() { 0 } else { 1 }
    }
}

/// Event emitted while a run progresses
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Run started
    Started {
        /// Base URL of the source repository
        source: String,
        /// Number of targets to process
        total: usize,
    },

    /// Fetch of a target is starting
    Fetching {
        /// Target filename
        filename: String,
        /// URL being requested
        url: String,
    },

    /// Target fetched and written
    Updated {
        /// Target filename
        filename: String,
        /// Number of non-blank lines written
        entries: usize,
    },

    /// Target failed
    Failed {
        /// Target filename
        filename: String,
        /// Step that failed
        stage: Stage,
        /// Error message
        error: String,
    },

    /// All targets attempted
    Tallied {
        /// Targets that succeeded
        succeeded: usize,
        /// Targets attempted
        total: usize,
    },

    /// Report regenerated
    ReportWritten {
        /// Report path
        path: PathBuf,
    },

    /// Report could not be regenerated
    ReportFailed {
        /// Report path
        path: PathBuf,
        /// Error message
        error: String,
    },

    /// Run finished
    Finished {
        /// Whether every target succeeded
        all_succeeded: bool,
    },
}
