//! In-memory repositories backed by dashmap.
//!
//! Each store applies mutations as atomic replace-by-key operations.
//! Cross-entity atomicity (reserve a slot *and* create a session) is the
//! session manager's job: it serializes every check-then-mutate sequence
//! under the site lock before touching these stores.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use parkhub_core::AppResult;
use parkhub_core::error::AppError;
use parkhub_core::traits::Repository;
use parkhub_core::types::id::{SessionId, SlotId, UserId, VehicleId};

use parkhub_entity::session::Session;
use parkhub_entity::slot::{Slot, SlotFilter};
use parkhub_entity::user::User;
use parkhub_entity::vehicle::VehicleClass;

/// In-memory slot inventory.
#[derive(Debug, Default)]
pub struct SlotStore {
    slots: DashMap<SlotId, Slot>,
}

impl SlotStore {
    /// Create an empty slot store.
    pub fn new() -> Self {
        Self::default()
    }

    /// List slots matching a filter, in stable id order.
    pub fn find_filtered(&self, filter: &SlotFilter) -> Vec<Slot> {
        let mut slots: Vec<Slot> = self
            .slots
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        slots.sort_by(|a, b| a.id.cmp(&b.id));
        slots
    }

    /// List slots that can be offered to a requester of the given class,
    /// in stable id order.
    pub fn available_for(&self, class: VehicleClass) -> Vec<Slot> {
        let mut slots: Vec<Slot> = self
            .slots
            .iter()
            .filter(|entry| entry.class == class && entry.is_available())
            .map(|entry| entry.value().clone())
            .collect();
        slots.sort_by(|a, b| a.id.cmp(&b.id));
        slots
    }
}

#[async_trait]
impl Repository<Slot, SlotId> for SlotStore {
    async fn find_by_id(&self, id: &SlotId) -> AppResult<Option<Slot>> {
        Ok(self.slots.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Slot>> {
        let mut slots: Vec<Slot> = self.slots.iter().map(|e| e.value().clone()).collect();
        slots.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(slots)
    }

    async fn create(&self, entity: &Slot) -> AppResult<Slot> {
        if self.slots.contains_key(&entity.id) {
            return Err(AppError::conflict(format!(
                "Slot {} already exists",
                entity.id
            )));
        }
        self.slots.insert(entity.id.clone(), entity.clone());
        Ok(entity.clone())
    }

    async fn update(&self, entity: &Slot) -> AppResult<Slot> {
        match self.slots.get_mut(&entity.id) {
            Some(mut existing) => {
                *existing = entity.clone();
                Ok(entity.clone())
            }
            None => Err(AppError::not_found(format!("Slot {} not found", entity.id))),
        }
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.slots.len() as u64)
    }
}

/// In-memory session history (append-only: sessions are never deleted).
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<SessionId, Session>,
}

impl SessionStore {
    /// Create an empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the vehicle's non-terminal session, if one exists.
    ///
    /// The per-vehicle exclusivity invariant guarantees at most one.
    pub fn find_active_by_vehicle(&self, vehicle_id: &VehicleId) -> Option<Session> {
        self.sessions
            .iter()
            .find(|entry| &entry.vehicle_id == vehicle_id && entry.is_active())
            .map(|entry| entry.value().clone())
    }

    /// Count sessions currently in the given predicate set.
    pub fn count_where(&self, pred: impl Fn(&Session) -> bool) -> u64 {
        self.sessions.iter().filter(|e| pred(e.value())).count() as u64
    }

    /// Count sessions whose entry was confirmed today (UTC).
    pub fn count_entries_today(&self) -> u64 {
        let today = Utc::now().date_naive();
        self.count_where(|s| {
            s.entered_at
                .is_some_and(|t| t.date_naive() == today)
        })
    }
}

#[async_trait]
impl Repository<Session, SessionId> for SessionStore {
    async fn find_by_id(&self, id: &SessionId) -> AppResult<Option<Session>> {
        Ok(self.sessions.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Session>> {
        let mut sessions: Vec<Session> = self.sessions.iter().map(|e| e.value().clone()).collect();
        sessions.sort_by_key(|s| s.requested_at);
        Ok(sessions)
    }

    async fn create(&self, entity: &Session) -> AppResult<Session> {
        if self.sessions.contains_key(&entity.id) {
            return Err(AppError::conflict(format!(
                "Session {} already exists",
                entity.id
            )));
        }
        self.sessions.insert(entity.id, entity.clone());
        Ok(entity.clone())
    }

    async fn update(&self, entity: &Session) -> AppResult<Session> {
        match self.sessions.get_mut(&entity.id) {
            Some(mut existing) => {
                *existing = entity.clone();
                Ok(entity.clone())
            }
            None => Err(AppError::not_found(format!(
                "Session {} not found",
                entity.id
            ))),
        }
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.sessions.len() as u64)
    }
}

/// In-memory registered-user collection.
#[derive(Debug, Default)]
pub struct UserStore {
    users: DashMap<UserId, User>,
}

impl UserStore {
    /// Create an empty user store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a vehicle to its registered owner.
    pub fn find_by_vehicle(&self, vehicle_id: &VehicleId) -> Option<User> {
        self.users
            .iter()
            .find(|entry| &entry.vehicle_id == vehicle_id)
            .map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl Repository<User, UserId> for UserStore {
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        Ok(users)
    }

    async fn create(&self, entity: &User) -> AppResult<User> {
        if self.users.contains_key(&entity.id) {
            return Err(AppError::conflict(format!(
                "User {} already exists",
                entity.id
            )));
        }
        self.users.insert(entity.id, entity.clone());
        Ok(entity.clone())
    }

    async fn update(&self, entity: &User) -> AppResult<User> {
        match self.users.get_mut(&entity.id) {
            Some(mut existing) => {
                *existing = entity.clone();
                Ok(entity.clone())
            }
            None => Err(AppError::not_found(format!("User {} not found", entity.id))),
        }
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.len() as u64)
    }
}
