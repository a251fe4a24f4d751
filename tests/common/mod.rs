//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use pokedex::api::{PokeApiClient, RecordSource};
use pokedex::config::{ApiConfig, LookupConfig, StalePolicy};
use pokedex::lookup::{LookupController, ResolutionReceiver};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// HTTP client pointed at `base_url`.
pub fn api_client(base_url: &str) -> Arc<dyn RecordSource> {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    };
    Arc::new(PokeApiClient::new(&config).expect("Failed to build client"))
}

/// Controller over the HTTP client, starting from `initial_query`.
pub fn controller(
    base_url: &str,
    initial_query: &str,
    policy: StalePolicy,
) -> (LookupController, ResolutionReceiver) {
    let config = LookupConfig {
        initial_query: initial_query.to_string(),
        stale_responses: policy,
    };
    LookupController::new(api_client(base_url), &config)
}

/// Wait for the next resolution and apply it.
pub async fn resolve_next(controller: &mut LookupController, rx: &mut ResolutionReceiver) -> u64 {
    let resolution = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
        .await
        .expect("lookup did not resolve in time")
        .expect("resolution channel closed");
    let request_id = resolution.request_id;
    controller.apply(resolution);
    request_id
}
