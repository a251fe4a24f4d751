//! Reducer for the lookup form.

use crate::config::StalePolicy;
use crate::mvi::Reducer;

use super::intent::LookupIntent;
use super::state::{FetchOutcome, LookupState};

/// Reducer for lookup state transitions.
///
/// Per fetch: `Idle → Loading → {Loaded, Failed}`. A new `FetchStarted`
/// restarts at loading from any state; nothing is ever cancelled.
pub struct LookupReducer;

impl Reducer for LookupReducer {
    type State = LookupState;
    type Intent = LookupIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LookupIntent::QueryChanged { query } => LookupState {
                query: query.to_lowercase(),
                ..state
            },

            LookupIntent::FetchStarted { request_id } => LookupState {
                is_loading: true,
                outcome: FetchOutcome::Idle,
                latest_request: request_id.max(state.latest_request),
                ..state
            },

            LookupIntent::FetchResolved { request_id, result } => {
                if state.stale_policy == StalePolicy::Discard
                    && request_id < state.latest_request
                {
                    return state;
                }

                let outcome = match result {
                    Ok(record) => FetchOutcome::Loaded(record),
                    Err(err) => FetchOutcome::Failed(err),
                };
                LookupState {
                    is_loading: false,
                    outcome,
                    ..state
                }
            }
        }
    }
}
