//! Integration tests for the exit flow and timer-driven transitions.

use std::time::Duration;

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_exit_before_minimum_dwell_is_rejected() {
    let app = TestApp::new().await;
    let (slot_id, code) = app.park("CAR-1").await;

    let response = app.request_exit("CAR-1", &code).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // No mutation happened: still entered, slot still occupied.
    let status = app.request("GET", "/api/status/CAR-1", None).await;
    assert_eq!(status.data()["session"]["status"], "entered");
    assert_eq!(status.data()["session"]["slot_id"], slot_id);
}

#[tokio::test]
async fn test_exit_with_wrong_code_is_rejected() {
    let app = TestApp::new().await;
    app.park("CAR-1").await;
    app.backdate_entry("CAR-1", 60).await;

    let response = app.request_exit("CAR-1", "000000").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test(start_paused = true)]
async fn test_exit_settles_after_delay() {
    let app = TestApp::new().await;
    let (slot_id, code) = app.park("CAR-1").await;
    app.backdate_entry("CAR-1", 61 * 60).await;

    let response = app.request_exit("CAR-1", &code).await;
    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["duration_minutes"], 61);
    assert_eq!(data["duration_formatted"], "1h 1m");
    assert_eq!(data["charge"], 40);
    assert_eq!(data["currency"], "INR");
    assert_eq!(data["settlement_seconds"], 10);
    let session_id = data["session_id"].as_str().expect("session id").to_string();

    // Before the settlement delay the session is still pending.
    let pending = app
        .request("GET", &format!("/api/sessions/{session_id}"), None)
        .await;
    assert_eq!(pending.data()["status"], "pending_exit");

    tokio::time::sleep(Duration::from_secs(11)).await;

    let settled = app
        .request("GET", &format!("/api/sessions/{session_id}"), None)
        .await;
    assert_eq!(settled.data()["status"], "exited");

    let slots = app
        .request("GET", "/api/slots?status=free&class=4W", None)
        .await;
    let free: Vec<&str> = slots
        .data()
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|s| s["id"].as_str())
        .collect();
    assert!(free.contains(&slot_id.as_str()), "slot not freed: {free:?}");
}

#[tokio::test(start_paused = true)]
async fn test_unconfirmed_entry_times_out() {
    let app = TestApp::new().await;
    let (slot_id, code) = app.enter_assigned("CAR-1").await;

    let status = app.request("GET", "/api/status/CAR-1", None).await;
    let session_id = status.data()["session"]["id"]
        .as_str()
        .expect("session id")
        .to_string();

    tokio::time::sleep(Duration::from_secs(301)).await;

    let session = app
        .request("GET", &format!("/api/sessions/{session_id}"), None)
        .await;
    assert_eq!(session.data()["status"], "timeout");

    // A late confirmation finds no active session.
    let late = app.confirm_entry("CAR-1", &slot_id, &code).await;
    assert_eq!(late.status, StatusCode::NOT_FOUND);

    // The slot returned to the pool and can be assigned again.
    let (reassigned, _) = app.enter_assigned("CAR-2").await;
    assert_eq!(reassigned, slot_id);
}

#[tokio::test]
async fn test_force_complete_settles_pending_exit() {
    let app = TestApp::new().await;
    let (_, code) = app.park("CAR-1").await;
    app.backdate_entry("CAR-1", 120).await;

    let response = app.request_exit("CAR-1", &code).await;
    assert_eq!(response.status, StatusCode::OK);
    let session_id = response.data()["session_id"]
        .as_str()
        .expect("session id")
        .to_string();

    let forced = app
        .request(
            "POST",
            &format!("/api/sessions/{session_id}/force-complete"),
            None,
        )
        .await;
    assert_eq!(forced.status, StatusCode::OK);
    assert_eq!(forced.data()["status"], "exited");

    // Idempotence check: forcing a settled session conflicts.
    let again = app
        .request(
            "POST",
            &format!("/api/sessions/{session_id}/force-complete"),
            None,
        )
        .await;
    assert_eq!(again.status, StatusCode::CONFLICT);
}
