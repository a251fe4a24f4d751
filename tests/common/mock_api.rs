//! In-process mock of the record API.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// API prefix the mock serves, matching the real base URL layout.
pub const API_PREFIX: &str = "/api/v2";

/// A mock response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl Default for MockResponse {
    /// What the real API answers for unknown names.
    fn default() -> Self {
        Self::text(404, "Not Found")
    }
}

impl MockResponse {
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.to_string().into_bytes(),
            delay_ms: 0,
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    /// A record body in the API's shape.
    pub fn record(name: &str, types: &[&str], stats: &[(&str, u32)]) -> Self {
        let types: Vec<_> = types
            .iter()
            .enumerate()
            .map(|(i, t)| {
                json!({
                    "slot": i + 1,
                    "type": {"name": t, "url": "https://pokeapi.co/api/v2/type/0/"},
                })
            })
            .collect();
        let stats: Vec<_> = stats
            .iter()
            .map(|(s, v)| {
                json!({
                    "base_stat": v,
                    "effort": 0,
                    "stat": {"name": s, "url": "https://pokeapi.co/api/v2/stat/0/"},
                })
            })
            .collect();
        Self::json(json!({
            "id": 1,
            "name": name,
            "sprites": {
                "front_default": format!("https://img.example/{name}.png"),
                "back_default": null,
            },
            "types": types,
            "stats": stats,
        }))
    }

    pub fn bulbasaur() -> Self {
        Self::record(
            "bulbasaur",
            &["grass", "poison"],
            &[
                ("hp", 45),
                ("attack", 49),
                ("defense", 49),
                ("special-attack", 65),
                ("special-defense", 65),
                ("speed", 45),
            ],
        )
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<String>>>,
    routes: Arc<Mutex<HashMap<String, MockResponse>>>,
}

/// Mock API server. Paths without a configured response get a 404.
pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            routes: Arc::new(Mutex::new(HashMap::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .fallback(handle_request)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Serve `resp` for `GET {API_PREFIX}/pokemon/{query}`.
    pub async fn set_pokemon(&self, query: &str, resp: MockResponse) {
        self.state
            .routes
            .lock()
            .await
            .insert(format!("{API_PREFIX}/pokemon/{query}"), resp);
    }

    /// Paths of all requests received so far.
    pub async fn requested_paths(&self) -> Vec<String> {
        self.state.requests.lock().await.clone()
    }

    /// Base URL to configure the client with.
    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, API_PREFIX)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let path = req.uri().path().to_string();
    state.requests.lock().await.push(path.clone());

    let mock_resp = state
        .routes
        .lock()
        .await
        .get(&path)
        .cloned()
        .unwrap_or_default();

    if mock_resp.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(mock_resp.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(mock_resp.status).unwrap())
        .header("content-type", mock_resp.content_type)
        .body(Body::from(mock_resp.body))
        .unwrap()
}
