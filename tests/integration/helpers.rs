//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use parkhub_api::{AppState, build_app};
use parkhub_core::config::AppConfig;
use parkhub_core::traits::Repository;
use parkhub_core::types::id::{SlotId, UserId, VehicleId};
use parkhub_entity::slot::{Location, MaintenanceCondition, Slot, SlotStatus};
use parkhub_entity::user::{PriorityClass, User};
use parkhub_entity::vehicle::VehicleClass;
use parkhub_service::{SessionManager, TracingNotifier};
use parkhub_store::{SessionStore, SlotStore, UserStore};

/// Test application over fully in-memory stores.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Slot store for direct state assertions.
    pub slots: Arc<SlotStore>,
    /// Session store for direct state manipulation.
    pub sessions: Arc<SessionStore>,
    /// The session manager, for direct calls where useful.
    pub manager: Arc<SessionManager>,
}

/// A decoded test response.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when empty).
    pub body: Value,
}

impl TestResponse {
    /// The `data` field of the standard success envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }
}

/// Build a test slot. Accessible and covered default to off.
pub fn slot(id: &str, class: VehicleClass, building: &str, accessible: bool) -> Slot {
    Slot {
        id: SlotId::new(id),
        class,
        status: SlotStatus::Free,
        locked: false,
        location: Location {
            building: building.to_string(),
            floor: 1,
            zone: "North".to_string(),
            section: "A".to_string(),
        },
        covered: false,
        accessible,
        holder: None,
        reserved_until: None,
        occupied_at: None,
        last_used: None,
        usage_count: 0,
        condition: MaintenanceCondition::Good,
    }
}

/// Build a registered test user for one vehicle.
pub fn user(vehicle: &str, class: VehicleClass, priority: PriorityClass) -> User {
    User {
        id: UserId::new(),
        name: format!("Owner of {vehicle}"),
        employee_id: format!("EMP-{vehicle}"),
        vehicle_id: VehicleId::new(vehicle),
        vehicle_class: class,
        building: "A".to_string(),
        floor: 1,
        priority,
        active: true,
        accessibility_needs: false,
        preferred_slots: Vec::new(),
        last_parked: None,
        total_parking_minutes: 0,
        violation_count: 0,
    }
}

impl TestApp {
    /// Create a test application with the default small inventory: three
    /// four-wheeler slots (one accessible) and one two-wheeler slot, with
    /// a registered vehicle per class.
    pub async fn new() -> Self {
        let mut accessible_user = user("CAR-ACC", VehicleClass::FourWheeler, PriorityClass::Normal);
        accessible_user.accessibility_needs = true;
        Self::with(
            vec![
                slot("A1-01", VehicleClass::FourWheeler, "A", false),
                slot("A1-02", VehicleClass::FourWheeler, "A", true),
                slot("B1-01", VehicleClass::FourWheeler, "B", false),
                slot("2W-A01", VehicleClass::TwoWheeler, "A", false),
            ],
            vec![
                user("CAR-1", VehicleClass::FourWheeler, PriorityClass::Normal),
                user("CAR-2", VehicleClass::FourWheeler, PriorityClass::Normal),
                user("CAR-3", VehicleClass::FourWheeler, PriorityClass::Emergency),
                accessible_user,
                user("BIKE-1", VehicleClass::TwoWheeler, PriorityClass::Vip),
            ],
        )
        .await
    }

    /// Create a test application over a custom inventory.
    pub async fn with(slot_list: Vec<Slot>, user_list: Vec<User>) -> Self {
        let slots = Arc::new(SlotStore::new());
        for s in &slot_list {
            slots.create(s).await.expect("create slot");
        }
        let users = Arc::new(UserStore::new());
        for u in &user_list {
            users.create(u).await.expect("create user");
        }
        let sessions = Arc::new(SessionStore::new());

        let config = AppConfig::default();
        let manager = SessionManager::new(
            &config,
            Arc::clone(&slots),
            Arc::clone(&sessions),
            users,
            Arc::new(TracingNotifier::new()),
        );

        let state = AppState {
            config: Arc::new(config),
            manager: Arc::clone(&manager),
        };

        Self {
            router: build_app(state),
            slots,
            sessions,
            manager,
        }
    }

    /// Rewind a vehicle's entry time so dwell and charge computations,
    /// which read the wall clock, see an elapsed occupancy.
    pub async fn backdate_entry(&self, vehicle: &str, secs: i64) {
        let mut session = self
            .sessions
            .find_active_by_vehicle(&VehicleId::new(vehicle))
            .expect("active session");
        session.entered_at = session
            .entered_at
            .map(|t| t - chrono::Duration::seconds(secs));
        self.sessions.update(&session).await.expect("update");
    }

    /// Send a request and decode the JSON response.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("send request");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("parse body")
        };
        TestResponse { status, body }
    }

    /// Issue and encode a gate pass.
    pub async fn issue_pass(&self, action: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/passes",
                Some(json!({ "action": action, "gate_id": "GATE_01" })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response.data()["pass"]
            .as_str()
            .expect("encoded pass")
            .to_string()
    }

    /// Request entry without a pass (manual entry).
    pub async fn request_entry(&self, vehicle: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/entry/request",
            Some(json!({ "vehicle_id": vehicle })),
        )
        .await
    }

    /// Confirm a pending entry.
    pub async fn confirm_entry(&self, vehicle: &str, slot: &str, code: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/entry/confirm",
            Some(json!({ "vehicle_id": vehicle, "slot_id": slot, "code": code })),
        )
        .await
    }

    /// Request exit for a parked vehicle.
    pub async fn request_exit(&self, vehicle: &str, code: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/exit/request",
            Some(json!({ "vehicle_id": vehicle, "code": code })),
        )
        .await
    }

    /// Request entry and assert it was assigned; returns `(slot_id, code)`.
    pub async fn enter_assigned(&self, vehicle: &str) -> (String, String) {
        let response = self.request_entry(vehicle).await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        let data = response.data();
        assert_eq!(data["outcome"], "assigned", "{data}");
        (
            data["slot_id"].as_str().expect("slot id").to_string(),
            data["code"].as_str().expect("code").to_string(),
        )
    }

    /// Request entry, confirm it, and return `(slot_id, code)`.
    pub async fn park(&self, vehicle: &str) -> (String, String) {
        let (slot_id, code) = self.enter_assigned(vehicle).await;
        let response = self.confirm_entry(vehicle, &slot_id, &code).await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        (slot_id, code)
    }
}
