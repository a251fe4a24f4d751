//! Record retrieval from the Pokémon REST API.
//!
//! ```text
//! query ──→ RecordSource::fetch ──→ GET {base_url}/pokemon/{query}
//!                                         │
//!                     classify_response ←─┘
//!                            │
//!              Ok(Record) | Err(LookupError)
//! ```

mod client;
mod error;
mod model;
mod source;

pub use client::{classify_response, PokeApiClient};
pub use error::LookupError;
pub use model::{Record, Stat};
pub use source::RecordSource;
