//! State of the lookup form.

use crate::api::{LookupError, Record};
use crate::config::StalePolicy;
use crate::mvi::UiState;

/// Query used when nothing else is configured.
pub const DEFAULT_QUERY: &str = "1";

/// Result of the most recent fetch.
///
/// At most one of error or record exists at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchOutcome {
    /// Nothing resolved since the last fetch started.
    #[default]
    Idle,
    Failed(LookupError),
    Loaded(Record),
}

/// Everything the lookup form knows.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupState {
    /// Current query, always lower-case.
    pub query: String,
    /// True from request issuance until a resolution is applied.
    pub is_loading: bool,
    pub outcome: FetchOutcome,
    /// Id of the most recently issued request; 0 before the first one.
    pub latest_request: u64,
    pub stale_policy: StalePolicy,
}

impl Default for LookupState {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            is_loading: false,
            outcome: FetchOutcome::Idle,
            latest_request: 0,
            stale_policy: StalePolicy::default(),
        }
    }
}

impl UiState for LookupState {}

impl LookupState {
    pub fn new(initial_query: &str, stale_policy: StalePolicy) -> Self {
        Self {
            query: initial_query.to_lowercase(),
            stale_policy,
            ..Self::default()
        }
    }

    pub fn record(&self) -> Option<&Record> {
        match &self.outcome {
            FetchOutcome::Loaded(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match &self.outcome {
            FetchOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Read-only view handed to the rendering layer.
    pub fn snapshot(&self) -> LookupSnapshot {
        LookupSnapshot {
            query: self.query.clone(),
            is_loading: self.is_loading,
            error: self.error().map(|err| err.user_message().to_string()),
            record: self.record().cloned(),
        }
    }
}

/// What the rendering layer gets to see.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupSnapshot {
    pub query: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub record: Option<Record>,
}
