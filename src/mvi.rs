//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! State transitions happen only in reducers. Side effects (network calls,
//! terminal I/O) live in whoever dispatches the intents.

/// Marker trait for state objects.
///
/// States are cloned to produce snapshots and compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions or completed side effects.
pub trait Intent: Send + 'static {}

/// Pure state transition: (State, Intent) -> State.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
