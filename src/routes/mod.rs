// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers.

pub mod admin;
pub mod auth;
pub mod meal_plan;
pub mod nutrition;
pub mod schedule;
pub mod tickets;
pub mod users;
pub mod workouts;

use crate::middleware::auth::{require_admin, require_auth};
use crate::AppState;
use axum::http::{header, Method};
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Response envelope used by every endpoint: `{message, data?}`.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Envelope carrying a payload.
    pub fn new(message: impl Into<String>, data: T) -> Json<Self> {
        Json(Self {
            message: message.into(),
            data: Some(data),
        })
    }
}

impl Envelope<()> {
    /// Message-only envelope.
    pub fn message(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
            data: None,
        })
    }
}

/// Required string field, preserving the falsy-field rule the API has
/// always had: absent and empty both count as missing.
pub(crate) fn require_str(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Required numeric field. Zero counts as missing (same falsy rule), and
/// nonpositive values are never valid where this is used.
pub(crate) fn require_positive(value: Option<i64>) -> Option<i64> {
    value.filter(|n| *n > 0)
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub build_id: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    let build_id = option_env!("BUILD_ID").unwrap_or("unknown").to_string();
    Json(HealthResponse {
        status: "ok".to_string(),
        build_id,
    })
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS layer - allow requests from frontend URL and localhost (for dev)
    let frontend_url = state.config.frontend_url.clone();
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::AllowOrigin::predicate(
            move |origin: &axum::http::HeaderValue, _request_parts: &axum::http::request::Parts| {
                let origin_str = origin.to_str().unwrap_or("");
                origin_str == frontend_url
                    || origin_str.starts_with("http://localhost")
                    || origin_str.starts_with("http://127.0.0.1")
            },
        ))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .merge(auth::routes())
        .merge(users::routes())
        .merge(nutrition::routes());

    // Admin routes: session required plus the admin flag
    let admin_routes = admin::routes().route_layer(middleware::from_fn(require_admin));

    // Protected routes (auth required). require_auth is layered after the
    // admin gate, so it runs first and require_admin sees the AuthUser
    // extension it injects.
    let protected_routes = Router::new()
        .merge(auth::protected_routes())
        .merge(workouts::routes())
        .merge(schedule::routes())
        .merge(meal_plan::routes())
        .merge(tickets::routes())
        .merge(admin_routes)
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn(
            crate::middleware::security::add_security_headers,
        ))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
