//! Full run: every target in order, then the report.

use crate::error::Result;
use crate::report;
use crate::types::{Event, RunSummary};
use chrono::Local;
use std::path::PathBuf;
use tracing::{info, warn};

use super::ProxyListUpdater;

impl ProxyListUpdater {
    /// Run the whole pipeline once
    ///
    /// Targets are processed sequentially; each is fetched and written before the next
    /// request is sent. The report is regenerated afterwards no matter how many targets
    /// failed, and its own failure is recorded in the summary without affecting
    /// [`RunSummary::exit_code`].
    pub async fn run(&self) -> RunSummary {
        info!(
            source = %self.config.source.base_url,
            targets = self.targets.len(),
            "starting update"
        );
        self.emit_event(Event::Started {
            source: self.config.source.base_url.clone(),
            total: self.targets.len(),
        });

        let mut summary = RunSummary::default();
        for target in self.targets.iter() {
            summary.outcomes.push(self.update_target(target).await);
        }

        self.emit_event(Event::Tallied {
            succeeded: summary.succeeded(),
            total: summary.total(),
        });

        match self.generate_report().await {
            Ok(path) => summary.report = Some(path),
            Err(e) => summary.report_error = Some(e.to_string()),
        }

        info!(
            succeeded = summary.succeeded(),
            total = summary.total(),
            "update finished"
        );
        self.emit_event(Event::Finished {
            all_succeeded: summary.all_succeeded(),
        });

        summary
    }

    /// Regenerate the report from the files currently on disk
    ///
    /// Emits [`Event::ReportWritten`] or [`Event::ReportFailed`] in addition to returning
    /// the result.
    pub async fn generate_report(&self) -> Result<PathBuf> {
        match report::generate(&self.config, &self.targets, Local::now()).await {
            Ok(path) => {
                self.emit_event(Event::ReportWritten { path: path.clone() });
                Ok(path)
            }
            Err(e) => {
                let path = self.config.report_path();
                warn!(path = %path.display(), error = %e, "report generation failed");
                self.emit_event(Event::ReportFailed {
                    path,
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }
}
