//! Database layer (PostgreSQL).

pub mod postgres;

pub use postgres::Db;

/// Names of the user-owned tables, as accepted by the generic
/// ownership-scoped operations on [`Db`].
///
/// These are interpolated into SQL, so they must never come from request
/// input.
pub mod tables {
    pub const WORKOUTS: &str = "workouts";
    pub const SCHEDULE_ENTRIES: &str = "schedule_entries";
    pub const MEAL_PLAN_ENTRIES: &str = "meal_plan_entries";
    pub const TICKETS: &str = "tickets";
}
