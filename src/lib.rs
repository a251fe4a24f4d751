//! Pokédex lookup: type a Pokémon name or number, get its record.
//!
//! - [`api`] fetches and classifies records from the REST API.
//! - [`lookup`] owns the query/loading/result state and runs fetches.
//! - [`ui`] is the terminal front end; [`print`] is the one-shot mode.

pub mod api;
pub mod config;
pub mod logging;
pub mod lookup;
pub mod mvi;
pub mod print;
pub mod ui;
