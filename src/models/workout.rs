//! Workout model.

use serde::Serialize;

/// A workout owned by a single user.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: i64,
    pub user_id: i64,
    pub exercise: String,
    pub description: Option<String>,
    pub reps: i32,
    pub sets: i32,
}
