// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Administrator routes: ticket triage across all users.
//!
//! Layered behind both the session and admin-flag middleware in
//! routes/mod.rs. Deletion here intentionally ignores ownership: that is
//! the admin privilege, visible in the interface rather than implied by the
//! calling route.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::tables;
use crate::error::{AppError, Result};
use crate::models::{TicketWithOwner, UserWithTicketCount};
use crate::routes::Envelope;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/admin", get(list_all_tickets).delete(delete_any_ticket))
        .route("/api/userFetch", get(list_users))
}

/// Owner display fields embedded in the triage listing.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketOwner {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Ticket with its owner, as the triage listing returns it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminTicketResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub user: TicketOwner,
}

impl From<TicketWithOwner> for AdminTicketResponse {
    fn from(row: TicketWithOwner) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            description: row.description,
            created_at: row.created_at,
            user: TicketOwner {
                first_name: row.first_name,
                last_name: row.last_name,
                email: row.email,
            },
        }
    }
}

/// Every ticket in the system, joined with its owner's display name.
async fn list_all_tickets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<AdminTicketResponse>>>> {
    let tickets = state
        .db
        .list_tickets_with_owners()
        .await?
        .into_iter()
        .map(AdminTicketResponse::from)
        .collect();

    Ok(Envelope::new("Tickets Fetched", tickets))
}

#[derive(Deserialize)]
pub struct DeleteParams {
    id: Option<i64>,
}

/// Delete any user's ticket by id.
async fn delete_any_ticket(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<Envelope<()>>> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Ticket ID is required".to_string()))?;

    let deleted = state.db.delete_any(tables::TICKETS, id).await?;
    if !deleted {
        return Err(AppError::NotFound("Ticket not found".to_string()));
    }

    Ok(Envelope::message("Ticket deleted!"))
}

/// Every user with their ticket count, for the admin dashboard.
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<UserWithTicketCount>>>> {
    let users = state.db.list_users_with_ticket_counts().await?;
    Ok(Envelope::new("Success", users))
}
