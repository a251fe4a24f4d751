//! The lookup cycle: query in, record or error out.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - query, loading flag and outcome
//! - `intent.rs` - query edits and fetch lifecycle events
//! - `reducer.rs` - state transitions
//! - `controller.rs` - dispatches intents and runs fetches
//! - `presentation.rs` - pure display helpers (type colors, stat bars)

mod controller;
mod intent;
mod presentation;
mod reducer;
mod state;

pub use controller::{LookupController, Resolution, ResolutionReceiver};
pub use intent::LookupIntent;
pub use presentation::{
    display_name, stat_bar, stat_bar_percent, stat_label, type_color, TypeColor,
};
pub use reducer::LookupReducer;
pub use state::{FetchOutcome, LookupSnapshot, LookupState, DEFAULT_QUERY};
