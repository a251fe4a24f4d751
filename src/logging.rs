//! File logging.
//!
//! Nothing is logged unless a log file is configured, since the TUI owns the
//! terminal. The file comes from `POKEDEX_LOG` or `[log] path` in the config,
//! in that order; `RUST_LOG` overrides `[log] level`.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Environment variable holding the log file path.
pub const LOG_ENV_VAR: &str = "POKEDEX_LOG";

/// Pick the log file base path. An empty env value counts as unset.
pub fn resolve_log_path(env_value: Option<String>, config: &LogConfig) -> Option<PathBuf> {
    env_value
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| config.path.clone())
}

/// `{base}.{timestamp}.{pid}`, so two running instances never share a file.
pub fn unique_log_path(base: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{timestamp}.{pid}"));
    PathBuf::from(name)
}

/// Install the file subscriber if a log path is configured.
///
/// Returns the file being written, if any.
pub fn init_tracing(config: &LogConfig) -> Option<PathBuf> {
    let base = resolve_log_path(std::env::var(LOG_ENV_VAR).ok(), config)?;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = unique_log_path(&base, timestamp, std::process::id());

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(path)
}
