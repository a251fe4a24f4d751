//! Intents for the lookup form.

use crate::api::{LookupError, Record};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LookupIntent {
    /// The user edited the query. The value is stored lower-cased.
    QueryChanged { query: String },

    /// A request for the current query was issued.
    FetchStarted { request_id: u64 },

    /// A request finished, successfully or not.
    FetchResolved {
        request_id: u64,
        result: Result<Record, LookupError>,
    },
}

impl Intent for LookupIntent {}
