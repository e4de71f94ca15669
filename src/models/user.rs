//! User model for storage and API.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// User account row.
///
/// The password hash is never serialized; every response that carries a user
/// goes through this type's `Serialize` impl, so the skip is the single
/// enforcement point.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// User row joined with the number of tickets they have filed, for the
/// admin user listing.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserWithTicketCount {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub ticket_count: i64,
}
