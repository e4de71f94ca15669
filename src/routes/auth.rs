// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Credential authentication routes: sign-in, sign-out, current session.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, removal_cookie, session_cookie, AuthUser};
use crate::routes::Envelope;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

/// Routes that require an authenticated session (layered in routes/mod.rs).
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/me", get(get_me))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

/// Identity claims returned to the client after sign-in.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

/// Sign in with email and password; issues the session cookie.
///
/// Fails closed: an unknown email and a wrong password produce the same
/// generic 401, so the response never reveals which part of the credential
/// was wrong. The email lookup is case-insensitive.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Envelope<SessionUser>>)> {
    let (email, password) = match (payload.email.as_deref(), payload.password.as_deref()) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => return Err(AppError::InvalidCredentials),
    };

    let user = state
        .db
        .find_user_by_email(email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let password_matches = bcrypt::verify(password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.into()))?;
    if !password_matches {
        return Err(AppError::InvalidCredentials);
    }

    let token = create_jwt(
        user.id,
        &user.first_name,
        &user.last_name,
        user.is_admin,
        &state.config.jwt_signing_key,
    )
    .map_err(AppError::Internal)?;

    tracing::info!(user_id = user.id, "User signed in");

    let jar = jar.add(session_cookie(token, &state.config.frontend_url));
    Ok((
        jar,
        Envelope::new(
            "Signed in",
            SessionUser {
                id: user.id,
                first_name: user.first_name,
                last_name: user.last_name,
                email: user.email,
                is_admin: user.is_admin,
            },
        ),
    ))
}

/// Sign out by clearing the session cookie.
async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> (CookieJar, StatusCode) {
    (
        jar.add(removal_cookie(&state.config.frontend_url)),
        StatusCode::NO_CONTENT,
    )
}

/// Claims carried by the current session.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
}

/// Current session claims, exactly as embedded at sign-in.
async fn get_me(Extension(user): Extension<AuthUser>) -> Json<Envelope<MeResponse>> {
    Envelope::new(
        "Success",
        MeResponse {
            id: user.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            is_admin: user.is_admin,
        },
    )
}
