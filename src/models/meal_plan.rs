// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meal plan and nutrition catalog models.

use serde::{Deserialize, Serialize};

use crate::models::schedule::Weekday;

/// Meal slot a plan entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "meal_time")]
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealTime {
    /// Every meal slot, in day order. Aggregations iterate this so their
    /// bucket sets are total.
    pub const ALL: [MealTime; 3] = [MealTime::Breakfast, MealTime::Lunch, MealTime::Dinner];
}

/// A nutrition catalog row. The catalog is shared and read-only to clients.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    pub id: i64,
    pub food_name: String,
    pub calories: i32,
    pub proteins: i32,
}

/// A meal-plan entry referencing a catalog row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntry {
    pub id: i64,
    pub user_id: i64,
    pub nutrition_id: i64,
    pub meal_time: MealTime,
    pub day_of_week: Weekday,
}

/// Meal-plan entry joined with its catalog row, as returned by the list
/// query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealPlanEntryWithNutrition {
    pub id: i64,
    pub user_id: i64,
    pub nutrition_id: i64,
    pub meal_time: MealTime,
    pub day_of_week: Weekday,
    pub food_name: String,
    pub calories: i32,
    pub proteins: i32,
}
