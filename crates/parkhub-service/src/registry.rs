//! Slot registry: availability queries and status transitions.
//!
//! The registry enforces the slot-level invariants (Reserved/Occupied
//! imply a holder; Free implies no holder and no lock). Callers must
//! serialize mutations — the session manager invokes these operations
//! under the site lock.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use parkhub_core::AppResult;
use parkhub_core::error::AppError;
use parkhub_core::traits::Repository;
use parkhub_core::types::id::{SlotId, VehicleId};

use parkhub_entity::slot::{Slot, SlotFilter, SlotStatus};
use parkhub_entity::vehicle::VehicleClass;

use parkhub_store::SlotStore;

/// Owns the slot inventory and applies status transitions.
#[derive(Debug, Clone)]
pub struct SlotRegistry {
    slots: Arc<SlotStore>,
}

impl SlotRegistry {
    /// Create a new registry over the given store.
    pub fn new(slots: Arc<SlotStore>) -> Self {
        Self { slots }
    }

    /// Load a slot or fail with NotFound.
    pub async fn get(&self, id: &SlotId) -> AppResult<Slot> {
        self.slots
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Slot {id} not found")))
    }

    /// Slots that can be offered to a requester of the given class, in
    /// stable id order.
    pub fn available_for(&self, class: VehicleClass) -> Vec<Slot> {
        self.slots.available_for(class)
    }

    /// Slots matching a listing filter.
    pub fn find_filtered(&self, filter: &SlotFilter) -> Vec<Slot> {
        self.slots.find_filtered(filter)
    }

    /// Reserve a free slot for a vehicle pending entry confirmation.
    ///
    /// Fails with Conflict when the slot is no longer available — the
    /// caller treats that as the slot having raced away.
    pub async fn reserve(
        &self,
        id: &SlotId,
        vehicle: &VehicleId,
        until: DateTime<Utc>,
    ) -> AppResult<Slot> {
        let mut slot = self.get(id).await?;
        if !slot.is_available() {
            return Err(AppError::conflict(format!(
                "Slot {id} is no longer available"
            )));
        }
        slot.status = SlotStatus::Reserved;
        slot.holder = Some(vehicle.clone());
        slot.reserved_until = Some(until);
        self.slots.update(&slot).await
    }

    /// Transition a reserved slot to occupied after entry confirmation.
    pub async fn occupy(
        &self,
        id: &SlotId,
        vehicle: &VehicleId,
        now: DateTime<Utc>,
    ) -> AppResult<Slot> {
        let mut slot = self.get(id).await?;
        if !slot.is_held_for(vehicle) {
            return Err(AppError::conflict(format!(
                "Slot {id} is not held for vehicle {vehicle}"
            )));
        }
        slot.status = SlotStatus::Occupied;
        slot.locked = true;
        slot.occupied_at = Some(now);
        slot.reserved_until = None;
        self.slots.update(&slot).await
    }

    /// Release a hold or occupancy back to Free, clearing holder and lock.
    pub async fn release(&self, id: &SlotId) -> AppResult<Slot> {
        let mut slot = self.get(id).await?;
        if slot.status == SlotStatus::Free {
            // Idempotent: releasing a free slot is a no-op, but worth a
            // trace since it usually means a double reclamation attempt.
            warn!(slot = %id, "Release requested for an already free slot");
            return Ok(slot);
        }
        slot.status = SlotStatus::Free;
        slot.holder = None;
        slot.locked = false;
        slot.reserved_until = None;
        slot.occupied_at = None;
        self.slots.update(&slot).await
    }

    /// Release a slot after a completed occupancy, recording usage.
    pub async fn finalize(&self, id: &SlotId, now: DateTime<Utc>) -> AppResult<Slot> {
        let mut slot = self.release(id).await?;
        slot.usage_count += 1;
        slot.last_used = Some(now);
        self.slots.update(&slot).await
    }
}
