//! Owns the lookup state and runs fetches.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::{LookupError, Record, RecordSource};
use crate::config::LookupConfig;
use crate::mvi::Reducer;

use super::intent::LookupIntent;
use super::reducer::LookupReducer;
use super::state::{LookupSnapshot, LookupState};

/// A finished fetch, sent back from the spawned task.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub request_id: u64,
    pub query: String,
    pub result: Result<Record, LookupError>,
}

pub type ResolutionReceiver = mpsc::UnboundedReceiver<Resolution>;

/// Drives the lookup cycle.
///
/// Every query change spawns exactly one fetch on the tokio runtime. The
/// fetch task never touches the state: it sends a [`Resolution`] back and
/// the owner of the receiver feeds it to [`LookupController::apply`].
pub struct LookupController {
    state: LookupState,
    source: Arc<dyn RecordSource>,
    next_request_id: u64,
    resolutions: mpsc::UnboundedSender<Resolution>,
}

impl LookupController {
    pub fn new(
        source: Arc<dyn RecordSource>,
        config: &LookupConfig,
    ) -> (Self, ResolutionReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            state: LookupState::new(&config.initial_query, config.stale_responses),
            source,
            next_request_id: 0,
            resolutions: tx,
        };
        (controller, rx)
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn snapshot(&self) -> LookupSnapshot {
        self.state.snapshot()
    }

    /// Fetch the initial query. Returns the request id.
    pub fn mount(&mut self) -> u64 {
        self.start_fetch()
    }

    /// Replace the query and fetch it. Returns the request id.
    ///
    /// Setting the same value again still fetches.
    pub fn set_query(&mut self, value: impl Into<String>) -> u64 {
        self.dispatch(LookupIntent::QueryChanged {
            query: value.into(),
        });
        self.start_fetch()
    }

    /// Apply a finished fetch to the state.
    pub fn apply(&mut self, resolution: Resolution) {
        let stale = resolution.request_id < self.state.latest_request;
        tracing::debug!(
            request_id = resolution.request_id,
            query = %resolution.query,
            ok = resolution.result.is_ok(),
            stale,
            "Applying lookup resolution"
        );
        self.dispatch(LookupIntent::FetchResolved {
            request_id: resolution.request_id,
            result: resolution.result,
        });
    }

    fn dispatch(&mut self, intent: LookupIntent) {
        self.state = LookupReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    fn start_fetch(&mut self) -> u64 {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.dispatch(LookupIntent::FetchStarted { request_id });

        let query = self.state.query.clone();
        let source = Arc::clone(&self.source);
        let tx = self.resolutions.clone();
        tracing::debug!(request_id, query = %query, "Starting lookup");

        tokio::spawn(async move {
            let result = source.fetch(&query).await;
            // Receiver gone means the UI shut down; nothing left to update.
            let _ = tx.send(Resolution {
                request_id,
                query,
                result,
            });
        });

        request_id
    }
}
