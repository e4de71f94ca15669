//! Support ticket model.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A support ticket filed by a user.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Ticket joined with its owner's display fields, for the admin triage
/// listing.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TicketWithOwner {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
