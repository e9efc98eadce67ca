//! End-to-end HTTP tests using reqwest
//!
//! Each test starts the real router on an ephemeral port and talks to it over TCP.
//!
//! Run with: cargo test --test http_tests
use std::net::SocketAddr;

use beacon::config::AppConfig;
use beacon::routes::health::HealthResponse;
use beacon::{create_router, AppState};
use chrono::DateTime;
use tokio::net::TcpListener;

/// Start a server with the given config and return its base URL
async fn spawn_server(config: AppConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("No local address");

    let app = create_router(AppState::new(&config));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn health_returns_ok_json() {
    let base = spawn_server(AppConfig::default()).await;

    let response = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json")));

    let body = response.text().await.unwrap();
    assert!(body.contains(r#""status":"ok""#), "unexpected body: {}", body);

    let health: HealthResponse = serde_json::from_str(&body).unwrap();
    assert!(health.uptime >= 0.0);
    assert!(DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
}

#[tokio::test]
async fn info_returns_plain_greeting() {
    let base = spawn_server(AppConfig::default()).await;

    let response = reqwest::get(format!("{}/info", base)).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/plain")));

    let body = response.text().await.unwrap();
    assert!(body.contains("Danila"), "unexpected body: {}", body);
}

#[tokio::test]
async fn info_uses_configured_greeting() {
    let config = AppConfig::from_toml(
        r#"
        [service]
        owner = "Ferris"
        greeting = "Crab service run by {owner}"
        "#,
    )
    .unwrap();
    let base = spawn_server(config).await;

    let body = reqwest::get(format!("{}/info", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "Crab service run by Ferris");
}

#[tokio::test]
async fn responses_carry_request_id_and_no_store() {
    let base = spawn_server(AppConfig::default()).await;
    let client = reqwest::Client::new();

    let mut seen = Vec::new();
    for path in ["/health", "/info"] {
        let response = client.get(format!("{}{}", base, path)).send().await.unwrap();
        let headers = response.headers();

        assert_eq!(
            headers.get("cache-control").and_then(|v| v.to_str().ok()),
            Some("no-store")
        );

        let request_id = headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .expect("missing x-request-id")
            .to_string();
        assert!(uuid::Uuid::parse_str(&request_id).is_ok());
        seen.push(request_id);
    }

    assert_ne!(seen[0], seen[1]);
}

#[tokio::test]
async fn unknown_path_returns_json_404() {
    let base = spawn_server(AppConfig::default()).await;

    let response = reqwest::get(format!("{}/nope", base)).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(
        response
            .headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok()),
        Some("no-store")
    );
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], 404);
    assert!(body["error"].as_str().unwrap().contains("/nope"));
}

#[tokio::test]
async fn repeated_health_checks_succeed() {
    let base = spawn_server(AppConfig::default()).await;
    let client = reqwest::Client::new();

    let mut last_uptime = 0.0;
    for _ in 0..20 {
        let health: HealthResponse = client
            .get(format!("{}/health", base))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health.status, "ok");
        assert!(health.uptime >= last_uptime);
        last_uptime = health.uptime;
    }
}
