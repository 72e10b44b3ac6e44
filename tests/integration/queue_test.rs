//! Integration tests for queue ordering and slot redistribution.

use axum::http::StatusCode;

use parkhub_entity::user::PriorityClass;
use parkhub_entity::vehicle::VehicleClass;

use crate::helpers::{self, TestApp};

async fn single_slot_app() -> TestApp {
    TestApp::with(
        vec![helpers::slot(
            "A1-01",
            VehicleClass::FourWheeler,
            "A",
            false,
        )],
        vec![
            helpers::user("CAR-1", VehicleClass::FourWheeler, PriorityClass::Normal),
            helpers::user("CAR-NORM", VehicleClass::FourWheeler, PriorityClass::Normal),
            helpers::user("CAR-EMG", VehicleClass::FourWheeler, PriorityClass::Emergency),
            helpers::user("CAR-VIP", VehicleClass::FourWheeler, PriorityClass::Vip),
        ],
    )
    .await
}

async fn active_session_id(app: &TestApp, vehicle: &str) -> String {
    let status = app
        .request("GET", &format!("/api/status/{vehicle}"), None)
        .await;
    status.data()["session"]["id"]
        .as_str()
        .expect("session id")
        .to_string()
}

#[tokio::test]
async fn test_emergency_outranks_earlier_normal() {
    let app = single_slot_app().await;
    app.enter_assigned("CAR-1").await;

    // Normal arrives first, emergency second.
    app.request_entry("CAR-NORM").await;
    app.request_entry("CAR-EMG").await;

    let queue = app.request("GET", "/api/queue", None).await;
    let order: Vec<&str> = queue
        .data()
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|e| e["vehicle_id"].as_str())
        .collect();
    assert_eq!(order, vec!["CAR-EMG", "CAR-NORM"]);

    // Free the slot: the emergency vehicle is served first.
    let session_id = active_session_id(&app, "CAR-1").await;
    let forced = app
        .request(
            "POST",
            &format!("/api/sessions/{session_id}/force-complete"),
            None,
        )
        .await;
    assert_eq!(forced.status, StatusCode::OK);

    let emergency = app.request("GET", "/api/status/CAR-EMG", None).await;
    assert_eq!(emergency.data()["session"]["status"], "pending_entry");
    assert_eq!(emergency.data()["session"]["entry_method"], "queue");

    let queue = app.request("GET", "/api/queue", None).await;
    let entries = queue.data().as_array().expect("array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["vehicle_id"], "CAR-NORM");
    assert_eq!(entries[0]["position"], 1);
}

#[tokio::test]
async fn test_positions_remain_contiguous_after_offer() {
    let app = single_slot_app().await;
    app.enter_assigned("CAR-1").await;
    app.request_entry("CAR-NORM").await;
    app.request_entry("CAR-VIP").await;
    app.request_entry("CAR-EMG").await;

    let session_id = active_session_id(&app, "CAR-1").await;
    app.request(
        "POST",
        &format!("/api/sessions/{session_id}/force-complete"),
        None,
    )
    .await;

    let queue = app.request("GET", "/api/queue", None).await;
    let positions: Vec<u64> = queue
        .data()
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|e| e["position"].as_u64())
        .collect();
    assert_eq!(positions, vec![1, 2]);
}

#[tokio::test]
async fn test_wait_estimate_grows_with_queue_length() {
    let app = single_slot_app().await;
    app.enter_assigned("CAR-1").await;

    let first = app.request_entry("CAR-NORM").await;
    assert_eq!(first.data()["estimated_wait_minutes"], 5);

    let second = app.request_entry("CAR-VIP").await;
    assert_eq!(second.data()["estimated_wait_minutes"], 15);

    let third = app.request_entry("CAR-EMG").await;
    assert_eq!(third.data()["estimated_wait_minutes"], 30);
}
