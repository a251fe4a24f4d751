//! Configuration loading and shared access.
//!
//! The config file lives at `~/.config/pokedex/config.toml` (or the platform
//! equivalent). A missing file is not an error: every field has a default.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, Config, LogConfig, LookupConfig, StalePolicy, UiConfig};
