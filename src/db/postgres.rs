// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! PostgreSQL client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (accounts, admin listing)
//! - Workouts, schedule entries, meal-plan entries, tickets (user-owned)
//! - Nutrition (shared read-only catalog)
//!
//! The four user-owned tables share one generic list/delete implementation;
//! only creation (and list queries that join in context) is per-table.

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{FromRow, PgPool};

use crate::error::AppError;
use crate::models::meal_plan::{MealPlanEntry, MealPlanEntryWithNutrition, MealTime, Nutrition};
use crate::models::schedule::{ScheduleEntry, ScheduleEntryWithWorkout, Weekday};
use crate::models::ticket::{Ticket, TicketWithOwner};
use crate::models::user::{User, UserWithTicketCount};
use crate::models::workout::Workout;

const MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL database client.
#[derive(Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    /// Connect to PostgreSQL and run pending migrations.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::Internal(e.into()))?;

        tracing::info!("Connected to PostgreSQL");

        Ok(Self { pool })
    }

    /// Create a client without establishing a connection.
    ///
    /// Operations fail at call time if the server is unreachable. Used by
    /// tests that exercise paths which never touch storage.
    pub fn connect_lazy(database_url: &str) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new().connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    // ─── Ownership-Scoped Operations (generic) ───────────────────

    /// List every row of `table` owned by `owner_id`, in insertion order.
    ///
    /// `table` must be one of the [`crate::db::tables`] constants.
    pub async fn list_owned<T>(&self, table: &'static str, owner_id: i64) -> Result<Vec<T>, AppError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = format!("SELECT * FROM {table} WHERE user_id = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, T>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Delete at most one row of `table` matching both `id` and `owner_id`.
    ///
    /// Returns whether a row matched. A miss does not distinguish between a
    /// nonexistent row and one owned by somebody else; callers surface both
    /// as the same not-found outcome.
    pub async fn delete_owned(
        &self,
        table: &'static str,
        id: i64,
        owner_id: i64,
    ) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {table} WHERE id = $1 AND user_id = $2");
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete at most one row of `table` by id alone, ignoring ownership.
    ///
    /// Only reachable through admin-gated routes.
    pub async fn delete_any(&self, table: &'static str, id: i64) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {table} WHERE id = $1");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    // ─── Users ───────────────────────────────────────────────────

    /// Look up a user by email, case-insensitively.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Whether an account already exists for this email, ignoring case.
    pub async fn email_taken(&self, email: &str) -> Result<bool, AppError> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(taken)
    }

    /// Create a user account. `password_hash` must already be hashed.
    pub async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash, first_name, last_name) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(email)
        .bind(password_hash)
        .bind(first_name)
        .bind(last_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    /// All users with how many tickets each has filed, for the admin page.
    pub async fn list_users_with_ticket_counts(&self) -> Result<Vec<UserWithTicketCount>, AppError> {
        let users = sqlx::query_as::<_, UserWithTicketCount>(
            "SELECT u.id, u.email, u.first_name, u.last_name, u.is_admin, u.created_at, \
                    COUNT(t.id) AS ticket_count \
             FROM users u \
             LEFT JOIN tickets t ON t.user_id = u.id \
             GROUP BY u.id \
             ORDER BY u.id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    // ─── Workouts ────────────────────────────────────────────────

    pub async fn insert_workout(
        &self,
        owner_id: i64,
        exercise: &str,
        description: Option<&str>,
        reps: i32,
        sets: i32,
    ) -> Result<Workout, AppError> {
        let workout = sqlx::query_as::<_, Workout>(
            "INSERT INTO workouts (user_id, exercise, description, reps, sets) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(owner_id)
        .bind(exercise)
        .bind(description)
        .bind(reps)
        .bind(sets)
        .fetch_one(&self.pool)
        .await?;
        Ok(workout)
    }

    /// Whether `workout_id` exists and belongs to `owner_id`.
    pub async fn workout_owned_by(&self, workout_id: i64, owner_id: i64) -> Result<bool, AppError> {
        let owned = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM workouts WHERE id = $1 AND user_id = $2)",
        )
        .bind(workout_id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(owned)
    }

    // ─── Schedule ────────────────────────────────────────────────

    pub async fn insert_schedule_entry(
        &self,
        owner_id: i64,
        workout_id: i64,
        day_of_week: Weekday,
    ) -> Result<ScheduleEntry, AppError> {
        let entry = sqlx::query_as::<_, ScheduleEntry>(
            "INSERT INTO schedule_entries (user_id, workout_id, day_of_week) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(owner_id)
        .bind(workout_id)
        .bind(day_of_week)
        .fetch_one(&self.pool)
        .await?;
        Ok(entry)
    }

    /// The user's schedule entries joined with the workout each references.
    pub async fn list_schedule_with_workouts(
        &self,
        owner_id: i64,
    ) -> Result<Vec<ScheduleEntryWithWorkout>, AppError> {
        let entries = sqlx::query_as::<_, ScheduleEntryWithWorkout>(
            "SELECT s.id, s.user_id, s.workout_id, s.day_of_week, \
                    w.exercise, w.description, w.reps, w.sets \
             FROM schedule_entries s \
             JOIN workouts w ON w.id = s.workout_id \
             WHERE s.user_id = $1 \
             ORDER BY s.id",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    // ─── Meal Plans ──────────────────────────────────────────────

    /// Whether a catalog row exists for `nutrition_id`.
    pub async fn nutrition_exists(&self, nutrition_id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM nutrition WHERE id = $1)",
        )
        .bind(nutrition_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    pub async fn insert_meal_plan_entry(
        &self,
        owner_id: i64,
        nutrition_id: i64,
        meal_time: MealTime,
        day_of_week: Weekday,
    ) -> Result<MealPlanEntry, AppError> {
        let entry = sqlx::query_as::<_, MealPlanEntry>(
            "INSERT INTO meal_plan_entries (user_id, nutrition_id, meal_time, day_of_week) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(owner_id)
        .bind(nutrition_id)
        .bind(meal_time)
        .bind(day_of_week)
        .fetch_one(&self.pool)
        .await?;
        Ok(entry)
    }

    /// The user's meal-plan entries joined with their catalog rows.
    pub async fn list_meal_plans_with_nutrition(
        &self,
        owner_id: i64,
    ) -> Result<Vec<MealPlanEntryWithNutrition>, AppError> {
        let entries = sqlx::query_as::<_, MealPlanEntryWithNutrition>(
            "SELECT m.id, m.user_id, m.nutrition_id, m.meal_time, m.day_of_week, \
                    n.food_name, n.calories, n.proteins \
             FROM meal_plan_entries m \
             JOIN nutrition n ON n.id = m.nutrition_id \
             WHERE m.user_id = $1 \
             ORDER BY m.id",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    // ─── Nutrition Catalog ───────────────────────────────────────

    pub async fn list_nutrition(&self) -> Result<Vec<Nutrition>, AppError> {
        let rows = sqlx::query_as::<_, Nutrition>("SELECT * FROM nutrition ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    // ─── Tickets ─────────────────────────────────────────────────

    pub async fn insert_ticket(
        &self,
        owner_id: i64,
        title: &str,
        description: &str,
    ) -> Result<Ticket, AppError> {
        let ticket = sqlx::query_as::<_, Ticket>(
            "INSERT INTO tickets (user_id, title, description) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(owner_id)
        .bind(title)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        Ok(ticket)
    }

    /// Every ticket joined with its owner's display fields, for triage.
    pub async fn list_tickets_with_owners(&self) -> Result<Vec<TicketWithOwner>, AppError> {
        let tickets = sqlx::query_as::<_, TicketWithOwner>(
            "SELECT t.id, t.user_id, t.title, t.description, t.created_at, \
                    u.first_name, u.last_name, u.email \
             FROM tickets t \
             JOIN users u ON u.id = t.user_id \
             ORDER BY t.id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(tickets)
    }
}
