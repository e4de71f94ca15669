// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fittrack: personal fitness tracking backend.
//!
//! This crate provides the API for recording workouts, weekly schedules,
//! meal plans against a shared nutrition catalog, and support tickets, all
//! scoped to the authenticated user.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;

use config::Config;
use db::Db;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Db,
}
