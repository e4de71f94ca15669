// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Input validation tests.
//!
//! Validation failures are produced before any storage call, so all of
//! these run against an unconnected pool; a test that accidentally reached
//! the database would fail with a 500 instead of the asserted status.

use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_create_workout_missing_fields() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt(1, false, &state.config.jwt_signing_key);

    let response = common::json_request(
        &app,
        "POST",
        "/api/workouts",
        Some(&token),
        Some(json!({ "exercise": "Squat" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::read_json(response).await;
    assert_eq!(body["message"], "Missing required fields (exercise, reps, sets)");
}

#[tokio::test]
async fn test_create_workout_zero_reps_rejected_as_missing() {
    // The falsy-field rule: 0 counts as absent, as it always has.
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt(1, false, &state.config.jwt_signing_key);

    let response = common::json_request(
        &app,
        "POST",
        "/api/workouts",
        Some(&token),
        Some(json!({ "exercise": "Squat", "reps": 0, "sets": 3 })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_workout_empty_exercise_rejected() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt(1, false, &state.config.jwt_signing_key);

    let response = common::json_request(
        &app,
        "POST",
        "/api/workouts",
        Some(&token),
        Some(json!({ "exercise": "", "reps": 5, "sets": 3 })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_workout_requires_id_param() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt(1, false, &state.config.jwt_signing_key);

    let response =
        common::json_request(&app, "DELETE", "/api/workouts", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_ticket_missing_description() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt(1, false, &state.config.jwt_signing_key);

    let response = common::json_request(
        &app,
        "POST",
        "/api/tickets",
        Some(&token),
        Some(json!({ "title": "Broken page" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_schedule_missing_day() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt(1, false, &state.config.jwt_signing_key);

    let response = common::json_request(
        &app,
        "POST",
        "/api/schedule",
        Some(&token),
        Some(json!({ "workoutId": 4 })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let (app, _) = common::create_test_app();

    let response = common::json_request(
        &app,
        "POST",
        "/api/user",
        None,
        Some(json!({ "email": "a@example.com", "password": "" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_missing_credentials_fails_closed() {
    // Missing credentials and bad credentials are indistinguishable.
    let (app, _) = common::create_test_app();

    let response = common::json_request(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": "a@example.com" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = common::read_json(response).await;
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_create_workout_unauthenticated() {
    let (app, _) = common::create_test_app();

    let response = common::json_request(
        &app,
        "POST",
        "/api/workouts",
        None,
        Some(json!({ "exercise": "Squat", "reps": 5, "sets": 3 })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
