// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public nutrition catalog.

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::error::Result;
use crate::models::Nutrition;
use crate::routes::Envelope;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/nutrition", get(list_nutrition))
}

/// The full nutrition catalog. Read-only; rows only change by migration.
async fn list_nutrition(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<Nutrition>>>> {
    let catalog = state.db.list_nutrition().await?;
    Ok(Envelope::new("Success", catalog))
}
