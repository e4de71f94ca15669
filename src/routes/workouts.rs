// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout routes: list, create, delete, all scoped to the session user.

use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::tables;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::Workout;
use crate::routes::{require_positive, require_str, Envelope};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/workouts",
        get(list_workouts)
            .post(create_workout)
            .delete(delete_workout),
    )
}

/// List the session user's workouts.
async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Envelope<Vec<Workout>>>> {
    let workouts = state
        .db
        .list_owned::<Workout>(tables::WORKOUTS, user.user_id)
        .await?;

    Ok(Envelope::new("Workouts fetched successfully", workouts))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    exercise: Option<String>,
    description: Option<String>,
    reps: Option<i64>,
    sets: Option<i64>,
}

/// Create a workout owned by the session user.
///
/// The owner comes from the session claims; any owner field in the payload
/// is simply not part of the schema and gets ignored.
async fn create_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateWorkoutRequest>,
) -> Result<Json<Envelope<Workout>>> {
    let (Some(exercise), Some(reps), Some(sets)) = (
        require_str(payload.exercise),
        require_positive(payload.reps),
        require_positive(payload.sets),
    ) else {
        return Err(AppError::MissingFields("exercise, reps, sets".to_string()));
    };

    let workout = state
        .db
        .insert_workout(
            user.user_id,
            &exercise,
            payload.description.as_deref().filter(|d| !d.is_empty()),
            reps as i32,
            sets as i32,
        )
        .await?;

    Ok(Envelope::new("Workout created successfully", workout))
}

#[derive(Deserialize)]
pub struct DeleteParams {
    id: Option<i64>,
}

/// Delete one of the session user's workouts.
///
/// A miss (nonexistent id or somebody else's row) is a single
/// indistinguishable 404.
async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<Envelope<()>>> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Workout ID is required".to_string()))?;

    let deleted = state
        .db
        .delete_owned(tables::WORKOUTS, id, user.user_id)
        .await?;
    if !deleted {
        return Err(AppError::NotFound(
            "Workout not found or not authorized to delete".to_string(),
        ));
    }

    Ok(Envelope::message("Workout deleted successfully"))
}
