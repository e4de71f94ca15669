// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Support ticket routes for the ticket owner.
//!
//! Administrators triage tickets through the admin routes; the delete here
//! is owner-scoped while the admin surface deletes by id alone.

use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::tables;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::Ticket;
use crate::routes::{require_str, Envelope};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/tickets",
        get(list_tickets).post(create_ticket).delete(delete_ticket),
    )
}

/// List the session user's tickets.
async fn list_tickets(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Envelope<Vec<Ticket>>>> {
    let tickets = state
        .db
        .list_owned::<Ticket>(tables::TICKETS, user.user_id)
        .await?;

    Ok(Envelope::new("Tickets Fetched", tickets))
}

#[derive(Deserialize)]
pub struct CreateTicketRequest {
    title: Option<String>,
    description: Option<String>,
}

/// File a support ticket as the session user.
async fn create_ticket(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateTicketRequest>,
) -> Result<Json<Envelope<Ticket>>> {
    let (Some(title), Some(description)) = (
        require_str(payload.title),
        require_str(payload.description),
    ) else {
        return Err(AppError::MissingFields("title, description".to_string()));
    };

    let ticket = state
        .db
        .insert_ticket(user.user_id, &title, &description)
        .await?;

    Ok(Envelope::new("Ticket Submitted!", ticket))
}

#[derive(Deserialize)]
pub struct DeleteParams {
    id: Option<i64>,
}

/// Delete one of the session user's own tickets.
async fn delete_ticket(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<Envelope<()>>> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Ticket ID is required".to_string()))?;

    let deleted = state
        .db
        .delete_owned(tables::TICKETS, id, user.user_id)
        .await?;
    if !deleted {
        return Err(AppError::NotFound(
            "Ticket not found or not authorized to delete".to_string(),
        ));
    }

    Ok(Envelope::message("Ticket deleted!"))
}
