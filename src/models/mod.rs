// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod meal_plan;
pub mod schedule;
pub mod stats;
pub mod ticket;
pub mod user;
pub mod workout;

pub use meal_plan::{MealPlanEntry, MealPlanEntryWithNutrition, MealTime, Nutrition};
pub use schedule::{ScheduleEntry, ScheduleEntryWithWorkout, Weekday};
pub use ticket::{Ticket, TicketWithOwner};
pub use user::{User, UserWithTicketCount};
pub use workout::Workout;
