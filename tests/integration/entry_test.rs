//! Integration tests for the entry flow.

use axum::http::StatusCode;
use serde_json::json;

use parkhub_entity::user::PriorityClass;
use parkhub_entity::vehicle::VehicleClass;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_entry_with_gate_pass_end_to_end() {
    let app = TestApp::new().await;
    let pass = app.issue_pass("entry").await;

    let response = app
        .request(
            "POST",
            "/api/entry/request",
            Some(json!({ "vehicle_id": "CAR-1", "pass": pass })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["outcome"], "assigned");
    assert_eq!(data["confirm_within_seconds"], 300);
    let slot_id = data["slot_id"].as_str().expect("slot").to_string();
    let code = data["code"].as_str().expect("code").to_string();
    assert_eq!(code.len(), 6);

    let confirm = app.confirm_entry("CAR-1", &slot_id, &code).await;
    assert_eq!(confirm.status, StatusCode::OK);

    let status = app.request("GET", "/api/status/CAR-1", None).await;
    assert_eq!(status.status, StatusCode::OK);
    let session = &status.data()["session"];
    assert_eq!(session["status"], "entered");
    assert_eq!(session["entry_method"], "qr");
    assert_eq!(session["gate_id"], "GATE_01");
}

#[tokio::test]
async fn test_manual_entry_prefers_home_building() {
    let app = TestApp::new().await;
    // CAR-1 is registered in building A; both A slots precede B1-01.
    let (slot_id, _) = app.enter_assigned("CAR-1").await;
    assert_eq!(slot_id, "A1-01");
}

#[tokio::test]
async fn test_accessibility_requester_gets_accessible_slot() {
    let app = TestApp::new().await;
    let (slot_id, _) = app.enter_assigned("CAR-ACC").await;
    assert_eq!(slot_id, "A1-02");
}

#[tokio::test]
async fn test_unregistered_vehicle_is_404() {
    let app = TestApp::new().await;
    let response = app.request_entry("GHOST-1").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_duplicate_entry_request_is_409() {
    let app = TestApp::new().await;
    app.enter_assigned("CAR-1").await;
    let response = app.request_entry("CAR-1").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_malformed_pass_is_400() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/entry/request",
            Some(json!({ "vehicle_id": "CAR-1", "pass": "not-a-pass" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_exit_pass_cannot_enter() {
    let app = TestApp::new().await;
    let pass = app.issue_pass("exit").await;
    let response = app
        .request(
            "POST",
            "/api/entry/request",
            Some(json!({ "vehicle_id": "CAR-1", "pass": pass })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wrong_confirmation_code_is_400() {
    let app = TestApp::new().await;
    let (slot_id, code) = app.enter_assigned("CAR-1").await;

    let wrong = app.confirm_entry("CAR-1", &slot_id, "000000").await;
    assert_eq!(wrong.status, StatusCode::BAD_REQUEST);

    // The reservation survives a bad code.
    let right = app.confirm_entry("CAR-1", &slot_id, &code).await;
    assert_eq!(right.status, StatusCode::OK);
}

#[tokio::test]
async fn test_single_slot_second_request_queues() {
    let app = TestApp::with(
        vec![helpers::slot(
            "A1-01",
            VehicleClass::FourWheeler,
            "A",
            false,
        )],
        vec![
            helpers::user("CAR-1", VehicleClass::FourWheeler, PriorityClass::Normal),
            helpers::user("CAR-2", VehicleClass::FourWheeler, PriorityClass::Normal),
        ],
    )
    .await;

    app.enter_assigned("CAR-1").await;

    let response = app.request_entry("CAR-2").await;
    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["outcome"], "queued");
    assert_eq!(data["position"], 1);
    assert_eq!(data["estimated_wait_minutes"], 5);

    let queue = app.request("GET", "/api/queue", None).await;
    let entries = queue.data().as_array().expect("array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["vehicle_id"], "CAR-2");
    assert_eq!(entries[0]["position"], 1);
}
