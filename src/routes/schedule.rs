// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly schedule routes, plus the per-weekday workout count view.

use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::tables;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::stats::{workouts_per_weekday, WeekdayWorkoutCount};
use crate::models::{ScheduleEntry, ScheduleEntryWithWorkout, Weekday, Workout};
use crate::routes::{require_positive, Envelope};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/schedule",
            get(list_schedule)
                .post(create_schedule_entry)
                .delete(delete_schedule_entry),
        )
        .route("/api/schedule/stats", get(get_schedule_stats))
}

/// Schedule entry with its workout embedded, as the API returns it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub id: i64,
    pub user_id: i64,
    pub workout_id: i64,
    pub day_of_week: Weekday,
    pub workout: Workout,
}

impl From<ScheduleEntryWithWorkout> for ScheduleResponse {
    fn from(row: ScheduleEntryWithWorkout) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            workout_id: row.workout_id,
            day_of_week: row.day_of_week,
            workout: Workout {
                id: row.workout_id,
                user_id: row.user_id,
                exercise: row.exercise,
                description: row.description,
                reps: row.reps,
                sets: row.sets,
            },
        }
    }
}

/// List the session user's schedule, each entry with its workout.
async fn list_schedule(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Envelope<Vec<ScheduleResponse>>>> {
    let entries = state
        .db
        .list_schedule_with_workouts(user.user_id)
        .await?
        .into_iter()
        .map(ScheduleResponse::from)
        .collect();

    Ok(Envelope::new("Schedules fetched successfully", entries))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    workout_id: Option<i64>,
    day_of_week: Option<Weekday>,
}

/// Pin one of the session user's workouts to a weekday.
///
/// The referenced workout must belong to the session user; referencing
/// somebody else's workout is rejected without revealing whether the id
/// exists.
async fn create_schedule_entry(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateScheduleRequest>,
) -> Result<Json<Envelope<ScheduleEntry>>> {
    let (Some(workout_id), Some(day_of_week)) =
        (require_positive(payload.workout_id), payload.day_of_week)
    else {
        return Err(AppError::MissingFields("workoutId, dayOfWeek".to_string()));
    };

    if !state.db.workout_owned_by(workout_id, user.user_id).await? {
        return Err(AppError::Forbidden(
            "Workout does not belong to this user".to_string(),
        ));
    }

    let entry = state
        .db
        .insert_schedule_entry(user.user_id, workout_id, day_of_week)
        .await?;

    Ok(Envelope::new("Schedule created successfully", entry))
}

#[derive(Deserialize)]
pub struct DeleteParams {
    id: Option<i64>,
}

/// Delete one of the session user's schedule entries.
async fn delete_schedule_entry(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<Envelope<()>>> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Schedule ID is required".to_string()))?;

    let deleted = state
        .db
        .delete_owned(tables::SCHEDULE_ENTRIES, id, user.user_id)
        .await?;
    if !deleted {
        return Err(AppError::NotFound(
            "Schedule not found or not authorized to delete".to_string(),
        ));
    }

    Ok(Envelope::message("Schedule deleted successfully"))
}

/// Scheduled-workout count per weekday; every weekday appears even with a
/// zero count.
async fn get_schedule_stats(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Envelope<Vec<WeekdayWorkoutCount>>>> {
    let entries = state.db.list_schedule_with_workouts(user.user_id).await?;
    Ok(Envelope::new("Success", workouts_per_weekday(&entries)))
}
