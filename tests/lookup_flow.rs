//! End-to-end lookup cycle: controller + HTTP client against a mock API.

mod common;

use common::mock_api::{MockApi, MockResponse};
use common::{controller, free_port, resolve_next};
use pokedex::config::StalePolicy;
use serde_json::json;

#[tokio::test]
async fn initial_query_loads_a_record() {
    let mock = MockApi::start().await;
    mock.set_pokemon("1", MockResponse::bulbasaur()).await;

    let (mut controller, mut rx) = controller(&mock.base_url(), "1", StalePolicy::Apply);
    controller.mount();
    resolve_next(&mut controller, &mut rx).await;

    let snapshot = controller.snapshot();
    assert!(!snapshot.is_loading);
    assert!(snapshot.error.is_none());
    let record = snapshot.record.expect("record");
    assert_eq!(record.name, "bulbasaur");
    assert!(!record.image_url.is_empty());
    assert_eq!(record.types, vec!["grass", "poison"]);
    assert_eq!(record.stats.len(), 6);
    assert_eq!(record.stats[3].name, "special-attack");
    assert_eq!(record.stats[3].base_value, 65);
}

#[tokio::test]
async fn unknown_name_is_not_found() {
    let mock = MockApi::start().await;

    let (mut controller, mut rx) = controller(&mock.base_url(), "1", StalePolicy::Apply);
    controller.set_query("doesnotexist123");
    resolve_next(&mut controller, &mut rx).await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.error.as_deref(), Some("Pokemon not found"));
    assert!(snapshot.record.is_none());
    assert!(!snapshot.is_loading);
}

#[tokio::test]
async fn error_shaped_payload_is_not_found() {
    let mock = MockApi::start().await;
    mock.set_pokemon("glitch", MockResponse::json(json!({"error": "no such pokemon"})))
        .await;

    let (mut controller, mut rx) = controller(&mock.base_url(), "1", StalePolicy::Apply);
    controller.set_query("glitch");
    resolve_next(&mut controller, &mut rx).await;

    assert_eq!(controller.snapshot().error.as_deref(), Some("Pokemon not found"));
}

#[tokio::test]
async fn connection_refused_is_transport_failure() {
    let base_url = format!("http://127.0.0.1:{}/api/v2", free_port());

    let (mut controller, mut rx) = controller(&base_url, "1", StalePolicy::Apply);
    controller.mount();
    resolve_next(&mut controller, &mut rx).await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.error.as_deref(), Some("Failed to fetch Pokémon"));
    assert!(snapshot.record.is_none());
    assert!(!snapshot.is_loading);
}

#[tokio::test]
async fn html_error_page_is_transport_failure() {
    let mock = MockApi::start().await;
    mock.set_pokemon("25", MockResponse::text(502, "<html>Bad Gateway</html>"))
        .await;

    let (mut controller, mut rx) = controller(&mock.base_url(), "25", StalePolicy::Apply);
    controller.mount();
    resolve_next(&mut controller, &mut rx).await;

    assert_eq!(
        controller.snapshot().error.as_deref(),
        Some("Failed to fetch Pokémon")
    );
}

/// An empty query is sent as-is. The endpoint answers `/pokemon/` with the
/// list resource, which is not record-shaped, so it reads as NotFound.
#[tokio::test]
async fn empty_query_is_forwarded_and_not_found() {
    let mock = MockApi::start().await;
    mock.set_pokemon(
        "",
        MockResponse::json(json!({"count": 1302, "next": null, "previous": null, "results": []})),
    )
    .await;

    let (mut controller, mut rx) = controller(&mock.base_url(), "1", StalePolicy::Apply);
    controller.set_query("");
    resolve_next(&mut controller, &mut rx).await;

    assert_eq!(mock.requested_paths().await, vec!["/api/v2/pokemon/"]);
    assert_eq!(controller.snapshot().error.as_deref(), Some("Pokemon not found"));
}

#[tokio::test]
async fn query_is_lowercased_on_the_wire() {
    let mock = MockApi::start().await;
    mock.set_pokemon("pikachu", MockResponse::record("pikachu", &["electric"], &[("hp", 35)]))
        .await;

    let (mut controller, mut rx) = controller(&mock.base_url(), "1", StalePolicy::Apply);
    controller.set_query("PiKaChU");
    resolve_next(&mut controller, &mut rx).await;

    assert_eq!(mock.requested_paths().await, vec!["/api/v2/pokemon/pikachu"]);
    assert_eq!(controller.snapshot().record.unwrap().name, "pikachu");
}

#[tokio::test]
async fn loading_spans_issuance_to_resolution() {
    let mock = MockApi::start().await;
    mock.set_pokemon("1", MockResponse::bulbasaur().with_delay(100)).await;

    let (mut controller, mut rx) = controller(&mock.base_url(), "1", StalePolicy::Apply);
    assert!(!controller.snapshot().is_loading);

    controller.mount();
    assert!(controller.snapshot().is_loading);
    assert!(controller.snapshot().record.is_none());

    resolve_next(&mut controller, &mut rx).await;
    assert!(!controller.snapshot().is_loading);
}

#[tokio::test]
async fn new_query_clears_previous_result_while_loading() {
    let mock = MockApi::start().await;
    mock.set_pokemon("1", MockResponse::bulbasaur()).await;

    let (mut controller, mut rx) = controller(&mock.base_url(), "1", StalePolicy::Apply);
    controller.mount();
    resolve_next(&mut controller, &mut rx).await;
    assert!(controller.snapshot().record.is_some());

    controller.set_query("nothing-here");
    let snapshot = controller.snapshot();
    assert!(snapshot.is_loading);
    assert!(snapshot.record.is_none());
    assert!(snapshot.error.is_none());

    resolve_next(&mut controller, &mut rx).await;
    assert_eq!(controller.snapshot().error.as_deref(), Some("Pokemon not found"));
}

#[tokio::test]
async fn repeating_a_query_fetches_again() {
    let mock = MockApi::start().await;
    mock.set_pokemon("1", MockResponse::bulbasaur()).await;

    let (mut controller, mut rx) = controller(&mock.base_url(), "1", StalePolicy::Apply);
    controller.set_query("1");
    resolve_next(&mut controller, &mut rx).await;
    let first = controller.snapshot();

    controller.set_query("1");
    resolve_next(&mut controller, &mut rx).await;

    assert_eq!(mock.requested_paths().await.len(), 2);
    assert_eq!(controller.snapshot(), first);
}

/// Default behavior: responses are applied in completion order, so a slow
/// response for an older query overwrites the newer one.
#[tokio::test]
async fn stale_response_wins_under_apply_policy() {
    let mock = MockApi::start().await;
    mock.set_pokemon("1", MockResponse::bulbasaur().with_delay(300)).await;
    mock.set_pokemon("4", MockResponse::record("charmander", &["fire"], &[("hp", 39)]))
        .await;

    let (mut controller, mut rx) = controller(&mock.base_url(), "1", StalePolicy::Apply);
    let slow = controller.set_query("1");
    let fast = controller.set_query("4");

    assert_eq!(resolve_next(&mut controller, &mut rx).await, fast);
    assert_eq!(controller.snapshot().record.unwrap().name, "charmander");

    assert_eq!(resolve_next(&mut controller, &mut rx).await, slow);
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.query, "4");
    assert_eq!(snapshot.record.unwrap().name, "bulbasaur");
}

#[tokio::test]
async fn stale_response_is_dropped_under_discard_policy() {
    let mock = MockApi::start().await;
    mock.set_pokemon("1", MockResponse::bulbasaur().with_delay(300)).await;
    mock.set_pokemon("4", MockResponse::record("charmander", &["fire"], &[("hp", 39)]))
        .await;

    let (mut controller, mut rx) = controller(&mock.base_url(), "1", StalePolicy::Discard);
    controller.set_query("1");
    controller.set_query("4");

    resolve_next(&mut controller, &mut rx).await;
    resolve_next(&mut controller, &mut rx).await;

    let snapshot = controller.snapshot();
    assert!(!snapshot.is_loading);
    assert_eq!(snapshot.record.unwrap().name, "charmander");
}

#[tokio::test]
async fn discard_policy_keeps_loading_until_latest_resolves() {
    let mock = MockApi::start().await;
    mock.set_pokemon("1", MockResponse::bulbasaur()).await;
    mock.set_pokemon(
        "4",
        MockResponse::record("charmander", &["fire"], &[("hp", 39)]).with_delay(300),
    )
    .await;

    let (mut controller, mut rx) = controller(&mock.base_url(), "1", StalePolicy::Discard);
    controller.set_query("1");
    controller.set_query("4");

    resolve_next(&mut controller, &mut rx).await;
    assert!(controller.snapshot().is_loading);
    assert!(controller.snapshot().record.is_none());

    resolve_next(&mut controller, &mut rx).await;
    assert!(!controller.snapshot().is_loading);
    assert_eq!(controller.snapshot().record.unwrap().name, "charmander");
}
