//! End-to-end smoke tests for the full spatialhubd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`. No TCP port is bound.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use spatialhub_adapter_http_axum::router;
use spatialhub_adapter_http_axum::state::AppState;
use spatialhub_adapter_storage_sqlite_sqlx::{Config, SqliteRecordRepository};
use spatialhub_app::services::record_service::RecordService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let repo = SqliteRecordRepository::new(db.pool().clone());
    router::build(AppState::new(RecordService::new(repo)))
}

async fn call(app: &axum::Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Spatial data lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_run_full_crud_lifecycle() {
    let app = app().await;

    let (status, created) = call(
        &app,
        Method::POST,
        "/spatial-data/",
        Some(r#"{"name": "Monas", "description": "National monument", "lng": 106.8271, "lat": -6.1754}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{created}");
    assert_eq!(created["success"], true);
    let id = created["data"]["id"].as_i64().unwrap();
    let created_at = created["data"]["created_at"].clone();
    assert!(created_at.is_string());

    let (status, list) = call(&app, Method::GET, "/spatial-data/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
    assert_eq!(list["data"][0], created["data"]);

    let uri = format!("/spatial-data/{id}/");
    let (status, detail) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["data"], created["data"]);

    let (status, updated) = call(&app, Method::PUT, &uri, Some(r#"{"description": "Tugu Monas"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["name"], "Monas");
    assert_eq!(updated["data"]["description"], "Tugu Monas");
    assert_eq!(updated["data"]["location"], json!({"lat": -6.1754, "lng": 106.8271}));
    assert_eq!(updated["data"]["created_at"], created_at);

    let (status, deleted) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["success"], true);

    for method in [Method::GET, Method::DELETE] {
        let (status, _) = call(&app, method, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    let (status, _) = call(&app, Method::PUT, &uri, Some(r#"{"name": "again"}"#)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_store_nested_and_flat_shapes_identically() {
    let app = app().await;

    let (_, flat) = call(
        &app,
        Method::POST,
        "/spatial-data/",
        Some(r#"{"name": "Jakarta", "lng": 106.8451, "lat": -6.2088}"#),
    )
    .await;
    let (_, nested) = call(
        &app,
        Method::POST,
        "/api/spatial-data/create/",
        Some(r#"{"name": "Jakarta", "location": {"lng": 106.8451, "lat": -6.2088}}"#),
    )
    .await;

    assert_eq!(flat["data"]["location"], nested["data"]["location"]);
    assert_eq!(flat["data"]["name"], nested["data"]["name"]);
    assert_eq!(flat["data"]["description"], nested["data"]["description"]);
    assert_ne!(flat["data"]["id"], nested["data"]["id"]);
}

#[tokio::test]
async fn should_reject_invalid_payloads_with_400() {
    let app = app().await;

    let cases = [
        (r#"{"name": "N", "lng": 0, "lat": 91}"#, "-90 to 90"),
        (r#"{"name": "W", "lng": -200, "lat": 0}"#, "-180 to 180"),
        (r#"{"name": "S", "lng": "east", "lat": 0}"#, "lng"),
        (r#"{"lng": 0, "lat": 0}"#, "name"),
        ("{oops", "Invalid JSON format"),
    ];
    for (body, expected) in cases {
        let (status, resp) = call(&app, Method::POST, "/spatial-data/", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(resp["success"], false);
        let message = resp["error"].as_str().unwrap();
        assert!(message.contains(expected), "{message} should mention {expected}");
    }

    let (_, list) = call(&app, Method::GET, "/spatial-data/", None).await;
    assert!(list["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn should_ignore_lone_coordinate_on_update() {
    let app = app().await;
    let (_, created) = call(
        &app,
        Method::POST,
        "/spatial-data/",
        Some(r#"{"name": "Bandung", "lng": 107.6191, "lat": -6.9175}"#),
    )
    .await;
    let uri = format!("/spatial-data/{}/", created["data"]["id"]);

    let (status, updated) = call(&app, Method::PUT, &uri, Some(r#"{"lng": 0}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["location"], created["data"]["location"]);

    let (status, updated) = call(&app, Method::PUT, &uri, Some(r#"{"lng": 0, "lat": 0}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["location"], json!({"lat": 0.0, "lng": 0.0}));
    assert_eq!(updated["data"]["name"], "Bandung");
}

#[tokio::test]
async fn should_answer_unsupported_verbs_with_405() {
    let app = app().await;
    for (method, uri) in [
        (Method::PATCH, "/spatial-data/"),
        (Method::PATCH, "/spatial-data/1/"),
        (Method::PUT, "/api/spatial-data/"),
    ] {
        let (status, body) = call(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({"error": "Method not allowed"}));
    }
}

#[tokio::test]
async fn should_search_by_name_or_description() {
    let app = app().await;
    for body in [
        r#"{"name": "Monas", "description": "National monument", "lng": 106.8271, "lat": -6.1754}"#,
        r#"{"name": "Borobudur", "description": "Buddhist temple", "lng": 110.2038, "lat": -7.6079}"#,
    ] {
        call(&app, Method::POST, "/spatial-data/", Some(body)).await;
    }

    let (status, found) = call(&app, Method::GET, "/spatial-data/?search=TEMPLE", None).await;
    assert_eq!(status, StatusCode::OK);
    let data = found["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Borobudur");
}
