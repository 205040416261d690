// Shared test helpers for building configs, fake upstream pages and API requests.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use reexpedicion_relay::{router, Config, LogFormat, LogLevel, LookupService, UpstreamClient};
use tower::ServiceExt;
use url::Url;

/// User-Agent sent by test clients (no commas, so header matchers compare it whole).
#[allow(dead_code)]
pub const TEST_USER_AGENT: &str = "reexpedicion_relay_test/1.0";

/// Builds a Config that points at `upstream_uri` with short timeouts.
#[allow(dead_code)]
pub fn test_config(upstream_uri: &str) -> Config {
    Config {
        port: 0,
        bind_address: "127.0.0.1".parse().expect("valid loopback address"),
        upstream_url: Url::parse(upstream_uri).expect("mock server URI should parse"),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
        user_agent: TEST_USER_AGENT.to_string(),
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
    }
}

/// Builds the API router backed by a real upstream client.
#[allow(dead_code)]
pub fn test_router(config: &Config) -> Router {
    let upstream = UpstreamClient::from_config(config).expect("Failed to build upstream client");
    router(Arc::new(LookupService::new(upstream)))
}

/// Wraps `body` in a page shaped like the upstream's responses.
#[allow(dead_code)]
pub fn upstream_page(body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"es\"><head><meta charset=\"utf-8\"><title>Frecuencia de entregas</title></head>\
         <body><div class=\"container\">{body}</div></body></html>"
    )
}

/// Upstream page asking for a colonia.
#[allow(dead_code)]
pub fn colonia_page(colonias: &[&str]) -> String {
    let options: String = colonias
        .iter()
        .map(|c| format!("<option value=\"{c}\">{c}</option>"))
        .collect();
    upstream_page(&format!(
        "<h2>Selecciona la colonia</h2><form method=\"post\">\
         <select name=\"colonia\"><option value=\"\"></option>{options}</select></form>"
    ))
}

/// Sends a GET to the router and returns status plus JSON body.
#[allow(dead_code)]
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let json = serde_json::from_slice(&bytes).expect("response body should be JSON");
    (status, json)
}
