use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Settings for the record API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, without the `/pokemon` segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// TCP connect timeout in seconds. The request itself has no deadline.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// User-Agent header sent with every lookup.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Settings for the lookup controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Query issued on startup when none is given on the command line.
    #[serde(default = "default_initial_query")]
    pub initial_query: String,
    /// What to do with a response that arrives after a newer request was issued.
    #[serde(default)]
    pub stale_responses: StalePolicy,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval for the loading spinner, in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// File logging. Off unless a path is set here or in `POKEDEX_LOG`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Base path of the log file; a `.{timestamp}.{pid}` suffix is added.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Handling of out-of-order fetch resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StalePolicy {
    /// Every resolution is applied; whichever resolves last wins.
    #[default]
    Apply,
    /// Resolutions for superseded requests are dropped.
    Discard,
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_connect_timeout() -> u32 {
    10
}

fn default_user_agent() -> String {
    format!("pokedex/{}", env!("CARGO_PKG_VERSION"))
}

fn default_initial_query() -> String {
    "1".to_string()
}

fn default_tick_rate_ms() -> u64 {
    120
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            initial_query: default_initial_query(),
            stale_responses: StalePolicy::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            level: default_log_level(),
        }
    }
}
