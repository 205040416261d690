//! End-to-end tests for the HTTP API.
//!
//! Requests go through the real router, lookup service and upstream client;
//! only the upstream form is replaced by a mock server.

mod helpers;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;
use wiremock::matchers::{body_string, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{colonia_page, get_json, test_config, test_router, upstream_page};

const UPSTREAM_ERROR: &str = "No se pudo conectar con el servicio de Estafeta.";
const INVALID_POSTAL_CODE: &str = "Se requiere un código postal válido de 5 dígitos.";
const INVALID_COLONIA: &str = "Se requiere una colonia válida.";

fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8")
}

#[tokio::test]
async fn test_check_postal_code_result_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string("cp=01000&colonia=&estado=&municipio="))
        .respond_with(html_response(upstream_page("<h2> CON REEXPEDICIÓN </h2>")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test_router(&test_config(&mock_server.uri()));
    let (status, body) = get_json(app, "/api/check-postal-code?postalCode=01000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "RESULT_FOUND",
            "data": { "result": "CON REEXPEDICIÓN", "hasReexpedition": true }
        })
    );
}

#[tokio::test]
async fn test_two_step_colonia_flow() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string("cp=44100&colonia=&estado=&municipio="))
        .respond_with(html_response(colonia_page(&["Centro", "Americana"])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(body_string("cp=44100&colonia=Americana&estado=&municipio="))
        .respond_with(html_response(upstream_page("<h2>SIN REEXPEDICIÓN</h2>")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());

    let (status, body) = get_json(
        test_router(&config),
        "/api/check-postal-code?postalCode=44100",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "COLONIA_REQUIRED",
            "data": { "colonias": ["Centro", "Americana"] }
        })
    );

    // Second step with a colonia taken from the first answer
    let chosen = body["data"]["colonias"][1]
        .as_str()
        .expect("colonia names are strings");
    let uri = format!("/api/check-with-colonia?postalCode=44100&colonia={chosen}");
    let (status, body) = get_json(test_router(&config), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "RESULT_FOUND",
            "data": { "result": "SIN REEXPEDICIÓN", "hasReexpedition": false }
        })
    );
}

#[tokio::test]
async fn test_check_with_colonia_percent_encoded_name() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string(
            "cp=01000&colonia=San+%C3%81ngel&estado=&municipio=",
        ))
        .respond_with(html_response(upstream_page("<h2>CON REEXPEDICIÓN</h2>")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test_router(&test_config(&mock_server.uri()));
    let (status, body) = get_json(
        app,
        "/api/check-with-colonia?postalCode=01000&colonia=San%20%C3%81ngel",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "RESULT_FOUND");
    assert_eq!(body["data"]["hasReexpedition"], true);
}

#[tokio::test]
async fn test_unrecognized_page_is_unknown_result() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(html_response(upstream_page(
            "<h2>Consulta no disponible</h2><select name=\"colonia\"><option></option></select>",
        )))
        .mount(&mock_server)
        .await;

    let app = test_router(&test_config(&mock_server.uri()));
    let (status, body) = get_json(app, "/api/check-postal-code?postalCode=99999").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "UNKNOWN_RESULT", "data": {} }));
}

#[tokio::test]
async fn test_invalid_postal_code_rejected_without_upstream_call() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(html_response(upstream_page("<h2>CON REEXPEDICIÓN</h2>")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    for uri in [
        "/api/check-postal-code",
        "/api/check-postal-code?postalCode=",
        "/api/check-postal-code?postalCode=1234",
        "/api/check-postal-code?postalCode=123456",
        "/api/check-postal-code?postalCode=abcde",
        "/api/check-postal-code?postalCode=%2001000",
        "/api/check-postal-code?postalcode=01000",
        "/api/check-with-colonia?colonia=Centro",
        "/api/check-with-colonia?postalCode=0100&colonia=Centro",
    ] {
        let (status, body) = get_json(test_router(&config), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "error": INVALID_POSTAL_CODE }), "{uri}");
    }
}

#[tokio::test]
async fn test_missing_colonia_rejected_without_upstream_call() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(html_response(upstream_page("<h2>CON REEXPEDICIÓN</h2>")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    for uri in [
        "/api/check-with-colonia?postalCode=01000",
        "/api/check-with-colonia?postalCode=01000&colonia=",
        "/api/check-with-colonia?postalCode=01000&colonia=%20%20",
    ] {
        let (status, body) = get_json(test_router(&config), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "error": INVALID_COLONIA }), "{uri}");
    }
}

#[tokio::test]
async fn test_upstream_failure_is_generic_500() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway from azure"))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    for uri in [
        "/api/check-postal-code?postalCode=01000",
        "/api/check-with-colonia?postalCode=01000&colonia=Centro",
    ] {
        let (status, body) = get_json(test_router(&config), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        // The upstream's own error text never reaches the caller
        assert_eq!(body, json!({ "error": UPSTREAM_ERROR }), "{uri}");
    }
}

#[tokio::test]
async fn test_unreachable_upstream_is_generic_500() {
    let app = test_router(&test_config("http://127.0.0.1:1/"));
    let (status, body) = get_json(app, "/api/check-postal-code?postalCode=01000").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": UPSTREAM_ERROR }));
}

#[tokio::test]
async fn test_health() {
    let app = test_router(&test_config("http://127.0.0.1:1/"));
    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let app = test_router(&test_config("http://127.0.0.1:1/"));
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/check-postal-code?postalCode=01000")
        .header("origin", "https://frontend.example.com")
        .header("access-control-request-method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_cors_header_on_simple_get() {
    let app = test_router(&test_config("http://127.0.0.1:1/"));
    let request = Request::builder()
        .uri("/health")
        .header("origin", "https://frontend.example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_serve_over_tcp_and_shut_down() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(html_response(upstream_page("<h2>SIN REEXPEDICIÓN</h2>")))
        .mount(&mock_server)
        .await;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    let shutdown = CancellationToken::new();
    let server = tokio::spawn(reexpedicion_relay::serve(
        listener,
        test_config(&mock_server.uri()),
        shutdown.clone(),
    ));

    let response = reqwest::get(format!(
        "http://{addr}/api/check-postal-code?postalCode=01000"
    ))
    .await
    .expect("server should answer");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(body["data"]["result"], "SIN REEXPEDICIÓN");

    shutdown.cancel();
    let result = tokio::time::timeout(std::time::Duration::from_secs(5), server)
        .await
        .expect("server should stop after cancellation")
        .expect("server task should not panic");
    assert!(result.is_ok());
}
