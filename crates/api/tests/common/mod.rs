#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use camerapedia_api::config::ServerConfig;
use camerapedia_api::router::build_app_router;
use camerapedia_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_max_connections: 5,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// POST a JSON body, assert 201, and return the created resource.
pub async fn create(pool: &PgPool, uri: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(build_test_app(pool.clone()), uri, body).await;
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, axum::http::StatusCode::CREATED, "POST {uri} failed: {json}");
    json
}

pub async fn create_brand(pool: &PgPool, name: &str) -> i64 {
    let brand = create(pool, "/api/brands", serde_json::json!({ "name": name })).await;
    brand["id"].as_i64().unwrap()
}

pub async fn create_equipment(
    pool: &PgPool,
    brand_id: i64,
    name: &str,
    equipment_type: &str,
) -> i64 {
    let equipment = create(
        pool,
        "/api/equipment",
        serde_json::json!({
            "brandId": brand_id,
            "baseModelName": name,
            "equipmentType": equipment_type,
        }),
    )
    .await;
    equipment["id"].as_i64().unwrap()
}

pub async fn create_definition(
    pool: &PgPool,
    spec_key: &str,
    value_type: &str,
    applicable_to: &[&str],
) -> i64 {
    let definition = create(
        pool,
        "/api/specification-definitions",
        serde_json::json!({
            "specKey": spec_key,
            "displayName": spec_key,
            "valueType": value_type,
            "applicableTo": applicable_to,
        }),
    )
    .await;
    definition["id"].as_i64().unwrap()
}
