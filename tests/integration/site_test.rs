//! Integration tests for site-wide listings, statistics, and health.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
}

#[tokio::test]
async fn test_slot_listing_filters() {
    let app = TestApp::new().await;

    let all = app.request("GET", "/api/slots", None).await;
    assert_eq!(all.data().as_array().expect("array").len(), 4);

    let four_wheeler_a = app
        .request("GET", "/api/slots?class=4W&building=A", None)
        .await;
    let ids: Vec<&str> = four_wheeler_a
        .data()
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|s| s["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["A1-01", "A1-02"]);

    let accessible = app.request("GET", "/api/slots?accessible=true", None).await;
    let ids: Vec<&str> = accessible
        .data()
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|s| s["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["A1-02"]);
}

#[tokio::test]
async fn test_statistics_track_occupancy() {
    let app = TestApp::new().await;

    let before = app.request("GET", "/api/stats", None).await;
    assert_eq!(before.status, StatusCode::OK);
    assert_eq!(before.data()["total_slots"], 4);
    assert_eq!(before.data()["occupied_slots"], 0);
    assert_eq!(before.data()["available_slots"], 4);
    assert_eq!(before.data()["active_sessions"], 0);

    app.park("CAR-1").await;

    let after = app.request("GET", "/api/stats", None).await;
    assert_eq!(after.data()["occupied_slots"], 1);
    assert_eq!(after.data()["available_slots"], 3);
    assert_eq!(after.data()["active_sessions"], 1);
    assert_eq!(after.data()["today_entries"], 1);
    assert_eq!(after.data()["occupancy_rate"], 25.0);
}

#[tokio::test]
async fn test_vehicle_status_for_idle_vehicle() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/status/CAR-1", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data()["session"].is_null());
    assert!(response.data()["queue_entry"].is_null());
}

#[tokio::test]
async fn test_unknown_session_is_404() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "GET",
            "/api/sessions/00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
