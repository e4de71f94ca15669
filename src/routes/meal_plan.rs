// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meal-plan routes, plus the calories-per-meal-slot view.

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
use crate::models::stats::{calories_per_meal_slot, MealSlotCalories};
use crate::models::{MealPlanEntry, MealPlanEntryWithNutrition, MealTime, Nutrition, Weekday};
use crate::routes::{require_positive, Envelope};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/mealPlan",
            get(list_meal_plans)
                .post(create_meal_plan_entry)
                .delete(delete_meal_plan_entry),
        )
        .route("/api/mealPlan/stats", get(get_meal_plan_stats))
}

/// Meal-plan entry with its catalog row embedded, as the API returns it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanResponse {
    pub id: i64,
    pub user_id: i64,
    pub nutrition_id: i64,
    pub meal_time: MealTime,
    pub day_of_week: Weekday,
    pub nutrition: Nutrition,
}

impl From<MealPlanEntryWithNutrition> for MealPlanResponse {
    fn from(row: MealPlanEntryWithNutrition) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            nutrition_id: row.nutrition_id,
            meal_time: row.meal_time,
            day_of_week: row.day_of_week,
            nutrition: Nutrition {
                id: row.nutrition_id,
                food_name: row.food_name,
                calories: row.calories,
                proteins: row.proteins,
            },
        }
    }
}

/// List the session user's meal plan, each entry with its catalog row.
async fn list_meal_plans(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Envelope<Vec<MealPlanResponse>>>> {
    let entries = state
        .db
        .list_meal_plans_with_nutrition(user.user_id)
        .await?
        .into_iter()
        .map(MealPlanResponse::from)
        .collect();

    Ok(Envelope::new("Meal plans fetched successfully!", entries))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealPlanRequest {
    nutrition_id: Option<i64>,
    meal_time: Option<MealTime>,
    day_of_week: Option<Weekday>,
}

/// Add a catalog item to the session user's plan for a meal slot and day.
///
/// The referenced catalog row must exist; the catalog itself is ownerless.
async fn create_meal_plan_entry(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateMealPlanRequest>,
) -> Result<Json<Envelope<MealPlanEntry>>> {
    let (Some(nutrition_id), Some(meal_time), Some(day_of_week)) = (
        require_positive(payload.nutrition_id),
        payload.meal_time,
        payload.day_of_week,
    ) else {
        return Err(AppError::MissingFields(
            "nutritionId, mealTime, dayOfWeek".to_string(),
        ));
    };

    if !state.db.nutrition_exists(nutrition_id).await? {
        return Err(AppError::Forbidden(
            "Nutrition item does not exist".to_string(),
        ));
    }

    let entry = state
        .db
        .insert_meal_plan_entry(user.user_id, nutrition_id, meal_time, day_of_week)
        .await?;

    Ok(Envelope::new("Meal plan added successfully!", entry))
}

#[derive(Deserialize)]
pub struct DeleteParams {
    id: Option<i64>,
}

/// Delete one of the session user's meal-plan entries.
async fn delete_meal_plan_entry(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<Envelope<()>>> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Meal plan ID is required".to_string()))?;

    let deleted = state
        .db
        .delete_owned(tables::MEAL_PLAN_ENTRIES, id, user.user_id)
        .await?;
    if !deleted {
        return Err(AppError::NotFound(
            "Meal plan not found or not authorized to delete".to_string(),
        ));
    }

    Ok(Envelope::message("Meal plan deleted successfully!"))
}

/// Planned calories per meal slot; all three slots appear even with zero
/// entries.
async fn get_meal_plan_stats(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Envelope<Vec<MealSlotCalories>>>> {
    let entries = state.db.list_meal_plans_with_nutrition(user.user_id).await?;
    Ok(Envelope::new("Success", calories_per_meal_slot(&entries)))
}
