//! # proxy-list-updater
//!
//! Keeps local copies of public proxy lists in sync with their upstream source and
//! regenerates a `README.md` summarizing what is on disk.
//!
//! A run is strictly sequential:
//! 1. Each target is fetched with a single bounded HTTP GET and, on success, written
//!    verbatim over its local file. A failed fetch leaves the local file as it was.
//! 2. The report is rebuilt from the files that exist, whatever happened in step 1.
//! 3. The caller maps the [`RunSummary`] to an exit status: `0` only when every target
//!    succeeded.
//!
//! ## Quick Start
//!
//! ```no_run
//! use proxy_list_updater::{Config, ProxyListUpdater};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let updater = ProxyListUpdater::new(Config::default())?;
//!
//!     let mut events = updater.subscribe();
//!     tokio::spawn(async move {
//!         while let Ok(event) = events.recv().await {
//!             println!("{}", proxy_list_updater::console::render_human(&event));
//!         }
//!     });
//!
//!     let summary = updater.run().await;
//!     std::process::exit(i32::from(summary.exit_code()));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Console rendering of progress events
pub mod console;
/// Error types
pub mod error;
/// HTTP retrieval
pub mod fetcher;
/// Local file writes and reads
pub mod persist;
/// Report document generation
pub mod report;
/// Core types and events
pub mod types;
/// Run orchestration
pub mod updater;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, FetchError, PersistError, Result};
pub use types::{Event, Outcome, RunSummary, Stage, Target, TargetOutcome};
pub use updater::ProxyListUpdater;
