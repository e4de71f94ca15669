// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use fittrack::config::Config;
use fittrack::db::Db;
use fittrack::routes::create_router;
use fittrack::AppState;
use std::sync::Arc;

/// Check if a test database is available via environment variable.
#[allow(dead_code)]
pub fn database_available() -> bool {
    std::env::var("TEST_DATABASE_URL").is_ok()
}

/// Skip test with message if no test database is available.
#[macro_export]
macro_rules! require_database {
    () => {
        if !crate::common::database_available() {
            eprintln!("⚠️  Skipping: TEST_DATABASE_URL not set");
            return;
        }
    };
}

/// Create a test app with a lazy (unconnected) pool.
///
/// Paths that never reach storage (auth rejection, validation, cookies)
/// behave normally; anything that touches the database errors.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_frontend_url("http://localhost:5173")
}

/// Same as [`create_test_app`] but with a specific frontend URL, for
/// asserting cookie security attributes.
#[allow(dead_code)]
pub fn create_test_app_with_frontend_url(frontend_url: &str) -> (axum::Router, Arc<AppState>) {
    let config = Config {
        frontend_url: frontend_url.to_string(),
        ..Config::default()
    };
    let db = Db::connect_lazy(&config.database_url).expect("lazy pool");

    let state = Arc::new(AppState { config, db });
    (create_router(state.clone()), state)
}

/// Create a test app backed by the database at `TEST_DATABASE_URL`.
/// Migrations are applied on connect.
#[allow(dead_code)]
pub async fn create_db_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config {
        database_url: std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL"),
        ..Config::default()
    };
    let db = Db::connect(&config.database_url)
        .await
        .expect("Failed to connect to test database");

    let state = Arc::new(AppState { config, db });
    (create_router(state.clone()), state)
}

/// Mint a session token directly, bypassing the login flow.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: i64, is_admin: bool, signing_key: &[u8]) -> String {
    fittrack::middleware::auth::create_jwt(user_id, "Test", "User", is_admin, signing_key)
        .expect("Failed to create JWT")
}

/// An email address no other test run will have used, so tests can share a
/// database without cleanup.
#[allow(dead_code)]
pub fn unique_email(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();

    format!("{prefix}-{}-{nanos}-{n}@example.com", std::process::id())
}

/// Read a JSON response body.
#[allow(dead_code)]
pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Send one JSON request through the app. `token` is attached as a Bearer
/// header when present.
#[allow(dead_code)]
pub async fn json_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> axum::response::Response {
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    app.clone().oneshot(request).await.expect("response")
}

/// Register a user through the API and return the generated id.
#[allow(dead_code)]
pub async fn register_user(app: &axum::Router, email: &str, password: &str) -> i64 {
    let response = json_request(
        app,
        "POST",
        "/api/user",
        None,
        Some(serde_json::json!({
            "email": email,
            "password": password,
            "firstName": "Test",
            "lastName": "User",
        })),
    )
    .await;

    assert_eq!(
        response.status(),
        axum::http::StatusCode::CREATED,
        "registration should succeed"
    );

    let body = read_json(response).await;
    body["data"]["id"].as_i64().expect("created user id")
}
