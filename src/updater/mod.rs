//! Run orchestration split into focused submodules.
//!
//! The `ProxyListUpdater` struct and its methods are organized by step:
//! - [`target`] - Fetch and persist of a single target
//! - [`run`] - Full run: every target in order, then the report

mod run;
mod target;


use crate::config::Config;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::types::{Event, Target};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Capacity of the event channel; a run emits a handful of events per target
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Fetches every configured list, persists it and regenerates the report
///
/// Targets are resolved and validated once in [`new`](Self::new); the list is immutable
/// afterwards. Progress is published as [`Event`]s on a broadcast channel.
pub struct ProxyListUpdater {
    /// Validated configuration
    pub(crate) config: Arc<Config>,
    /// Resolved targets, in configuration order
    pub(crate) targets: Arc<[Target]>,
    /// HTTP client wrapper
    pub(crate) fetcher: Fetcher,
    /// Progress event sender
    pub(crate) event_tx: broadcast::Sender<Event>,
}

impl ProxyListUpdater {
    /// Create an updater from a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let targets = config.resolve_targets()?;
        let fetcher = Fetcher::new(&config.source)?;
        let (event_tx, _rx) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            config: Arc::new(config),
            targets: targets.into(),
            fetcher,
            event_tx,
        })
    }

    /// Subscribe to progress events
    ///
    /// Only events sent after subscribing are received. The channel closes when the
    /// updater is dropped.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.event_tx.subscribe()
    }

    /// The configuration this updater runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The resolved targets, in processing order
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub(crate) fn emit_event(&self, event: Event) {
        // send() returns Err if there are no receivers, which is fine - we just drop the event
        self.event_tx.send(event).ok();
    }
}
