//! Lookup failures as seen by the user.

use thiserror::Error;

/// Message shown when the API has no record for the query.
pub const NOT_FOUND_MESSAGE: &str = "Pokemon not found";

/// Message shown for any network or decoding failure.
pub const TRANSPORT_MESSAGE: &str = "Failed to fetch Pokémon";

/// The two ways a lookup can fail.
///
/// Both are terminal for the fetch that produced them. Status codes and
/// underlying errors are kept only in `detail` for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The payload was error-shaped or did not look like a record.
    #[error("No record for query '{query}'")]
    NotFound { query: String },

    /// Connection failure, unreadable body, or a body that is not JSON.
    #[error("Transport failure: {detail}")]
    Transport { detail: String },
}

impl LookupError {
    pub fn not_found(query: impl Into<String>) -> Self {
        LookupError::NotFound {
            query: query.into(),
        }
    }

    pub fn transport(detail: impl ToString) -> Self {
        LookupError::Transport {
            detail: detail.to_string(),
        }
    }

    /// User-facing message, fixed per kind.
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::NotFound { .. } => NOT_FOUND_MESSAGE,
            LookupError::Transport { .. } => TRANSPORT_MESSAGE,
        }
    }

    /// Technical details for diagnostics.
    pub fn details(&self) -> String {
        self.to_string()
    }
}
