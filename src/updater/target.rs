//! Fetch and persist of a single target.

use crate::error::{Error, Result};
use crate::persist;
use crate::report::count_entries;
use crate::types::{Event, Outcome, Stage, Target, TargetOutcome};
use tracing::{info, warn};

use super::ProxyListUpdater;

impl ProxyListUpdater {
    /// Fetch one target and overwrite its local file
    ///
    /// Never fails as a whole: transport and filesystem errors are folded into
    /// [`Outcome::Failed`]. On a fetch failure the local file is not touched.
    pub async fn update_target(&self, target: &Target) -> TargetOutcome {
        self.emit_event(Event::Fetching {
            filename: target.filename.clone(),
            url: target.url.to_string(),
        });

        let outcome = match self.fetch_and_persist(target).await {
            Ok((entries, bytes)) => {
                info!(filename = %target.filename, entries, bytes, "list updated");
                self.emit_event(Event::Updated {
                    filename: target.filename.clone(),
                    entries,
                });
                Outcome::Updated { entries, bytes }
            }
            Err(e) => {
                // Every error from fetch_and_persist carries a stage
                let stage = e.stage().unwrap_or(Stage::Fetch);
                warn!(filename = %target.filename, url = %target.url, stage = %stage, error = %e, "list update failed");
                self.emit_event(Event::Failed {
                    filename: target.filename.clone(),
                    stage,
                    error: e.to_string(),
                });
                Outcome::Failed {
                    stage,
                    message: e.to_string(),
                }
            }
        };

        TargetOutcome {
            filename: target.filename.clone(),
            outcome,
        }
    }

    async fn fetch_and_persist(&self, target: &Target) -> Result<(usize, usize)> {
        let body = self.fetcher.fetch(&target.url).await.map_err(Error::Fetch)?;

        let path = self.config.target_path(&target.filename);
        persist::write_bytes(&path, &body).await?;

        Ok((count_entries(&String::from_utf8_lossy(&body)), body.len()))
    }
}
