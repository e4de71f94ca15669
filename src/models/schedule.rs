// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly schedule model.

use serde::{Deserialize, Serialize};

/// Day of the week a schedule or meal-plan entry is pinned to.
///
/// Stored as a PostgreSQL enum and serialized with the capitalized names the
/// API has always used (`"Monday"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "weekday")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Every weekday, in calendar order. Aggregations iterate this so their
    /// bucket sets are total.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

/// A schedule entry pinning one of the user's workouts to a weekday.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: i64,
    pub user_id: i64,
    pub workout_id: i64,
    pub day_of_week: Weekday,
}

/// Schedule entry joined with its workout, as returned by the list query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ScheduleEntryWithWorkout {
    pub id: i64,
    pub user_id: i64,
    pub workout_id: i64,
    pub day_of_week: Weekday,
    pub exercise: String,
    pub description: Option<String>,
    pub reps: i32,
    pub sets: i32,
}
