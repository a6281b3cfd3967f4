//! API tests driving the router in-process

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use clarp_terminal::api::{create_router, AppState};
use clarp_terminal::{InMemoryCatalog, TelemetryCollector};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState::new(
        Arc::new(InMemoryCatalog::seeded()),
        Arc::new(TelemetryCollector::new()),
        300,
    );
    create_router(Arc::new(state))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

#[tokio::test]
async fn test_health_on_root_and_v1() {
    let app = app();
    for uri in ["/health", "/v1/health"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "healthy");
        assert!(body.get("error").is_none());
    }
}

#[tokio::test]
async fn test_request_id_header() {
    let app = app();

    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));

    let response = app
        .oneshot(
            Request::get("/health")
                .header("x-request-id", "scan-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "scan-42");
}

#[tokio::test]
async fn test_resolve_ticker() {
    let app = app();
    let (status, body) = get(&app, "/v1/resolve?q=%24clarp").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["entity"]["type"], "ticker");
    assert_eq!(body["data"]["entity"]["normalized"], "CLARP");
    assert_eq!(body["data"]["display"], "$CLARP");
}

#[tokio::test]
async fn test_resolve_unresolvable_is_not_an_error() {
    let app = app();
    let (status, body) = get(&app, "/v1/resolve?q=not%20a%20thing%21").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["data"]["entity"].is_null());
}

#[tokio::test]
async fn test_blank_query_is_bad_request() {
    let app = app();
    for uri in ["/v1/resolve", "/v1/resolve?q=%20%20", "/v1/search?q="] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "API_BAD_REQUEST");
    }
}

#[tokio::test]
async fn test_search_project_by_ticker() {
    let app = app();
    let (status, body) = get(&app, "/v1/search?q=%24MOONRUG").await;
    assert_eq!(status, StatusCode::OK);

    let project = &body["data"]["project"];
    assert_eq!(project["id"], "moonrug");
    assert_eq!(project["larpScore"]["riskLevel"], "critical");
    assert!(project["larpScore"]["topTags"].as_array().unwrap().len() <= 6);
    assert!(project["larpScore"]["color"].as_str().unwrap().starts_with('#'));
    assert!(body["data"]["profile"].is_null());
}

#[tokio::test]
async fn test_search_profile_by_handle() {
    let app = app();
    let (status, body) = get(&app, "/v1/search?q=%40ShillMaxi").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["entity"]["type"], "x_handle");
    assert_eq!(body["data"]["profile"]["handle"], "shillmaxi");
    assert_eq!(body["data"]["profile"]["followers"], 88_000);
    assert!(body["data"]["project"].is_null());
}

#[tokio::test]
async fn test_search_without_matches_succeeds() {
    let app = app();
    let (status, body) = get(&app, "/v1/search?q=%24NOPE").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["data"]["project"].is_null());
    assert!(body["data"]["profile"].is_null());
}

#[tokio::test]
async fn test_list_and_get_projects() {
    let app = app();

    let (status, body) = get(&app, "/v1/projects").await;
    assert_eq!(status, StatusCode::OK);
    let projects = body["data"].as_array().unwrap();
    assert_eq!(projects.len(), 4);
    assert!(projects.iter().all(|p| p["score"].as_u64().unwrap() <= 100));

    let (status, body) = get(&app, "/v1/projects/clarp").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["ticker"], "CLARP");
    assert_eq!(body["data"]["larpScore"]["riskLevel"], "low");
    assert_eq!(body["data"]["larpScore"]["label"], "Appears Legitimate");
}

#[tokio::test]
async fn test_unknown_project_is_not_found() {
    let app = app();
    let (status, body) = get(&app, "/v1/projects/ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "API_NOT_FOUND");
}

#[tokio::test]
async fn test_score_partial_signals() {
    let app = app();
    let signals = json!({
        "wallet": { "cexDepositsDetected": true, "knownRugWalletConnection": true },
        "liquidity": { "lpLocked": false }
    });
    let (status, body) = post_json(&app, "/v1/score", signals.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["breakdown"]["wallet"]["score"], 75);
    assert_eq!(data["breakdown"]["liquidity"]["score"], 35);
    assert_eq!(data["confidence"], "low");
    assert_eq!(data["confidenceLabel"], "Low Confidence");
    assert_eq!(data["topTags"][0], "Rug Wallet Link");
}

#[tokio::test]
async fn test_score_rejects_malformed_body() {
    let app = app();
    let (status, body) = post_json(&app, "/v1/score", "{not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "API_BAD_REQUEST");
}

#[tokio::test]
async fn test_stats_track_searches_and_cache() {
    let app = app();
    get(&app, "/v1/search?q=%24clarp").await;
    get(&app, "/v1/search?q=%24clarp").await;
    get(&app, "/v1/resolve?q=not%20a%20thing%21").await;

    let (status, body) = get(&app, "/v1/stats").await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["telemetry"]["totalSearches"], 3);
    assert_eq!(data["telemetry"]["unresolvedSearches"], 1);
    assert_eq!(data["telemetry"]["resolutionsByType"]["ticker"], 2);
    assert_eq!(data["cache"]["hits"], 1);
    assert_eq!(data["cache"]["entries"], 1);
}

#[tokio::test]
async fn test_stats_count_each_score_once() {
    let app = app();
    get(&app, "/v1/search?q=%24MOONRUG").await;
    get(&app, "/v1/search?q=%24MOONRUG").await;

    let (_, body) = get(&app, "/v1/stats").await;
    assert_eq!(body["data"]["telemetry"]["totalScored"], 1);
    assert_eq!(body["data"]["telemetry"]["scoresByRisk"]["critical"], 1);

    get(&app, "/v1/projects").await;
    let (_, body) = get(&app, "/v1/stats").await;
    assert_eq!(body["data"]["telemetry"]["totalScored"], 4);

    get(&app, "/v1/projects").await;
    get(&app, "/v1/projects/moonrug").await;
    let (_, body) = get(&app, "/v1/stats").await;
    assert_eq!(body["data"]["telemetry"]["totalScored"], 4);
}
