// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account registration.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::User;
use crate::routes::{require_str, Envelope};
use crate::AppState;

/// bcrypt work factor applied at account creation.
const BCRYPT_COST: u32 = 10;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/user", post(register))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    email: Option<String>,
    password: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

/// Create an account.
///
/// The duplicate check is case-insensitive (one account per email regardless
/// of case, matching the login lookup); the email is stored as presented.
/// The response strips the password via the `User` serializer.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Envelope<User>>)> {
    let (Some(email), Some(password), Some(first_name), Some(last_name)) = (
        require_str(payload.email),
        require_str(payload.password),
        require_str(payload.first_name),
        require_str(payload.last_name),
    ) else {
        return Err(AppError::MissingFields(
            "email, password, firstName, lastName".to_string(),
        ));
    };

    if state.db.email_taken(&email).await? {
        return Err(AppError::Conflict("User Already Exists".to_string()));
    }

    let password_hash =
        bcrypt::hash(&password, BCRYPT_COST).map_err(|e| AppError::Internal(e.into()))?;

    let user = state
        .db
        .create_user(&email, &password_hash, &first_name, &last_name)
        .await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((StatusCode::CREATED, Envelope::new("User Created", user)))
}
