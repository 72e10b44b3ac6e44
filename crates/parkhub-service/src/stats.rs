//! Site statistics for dashboards.

use serde::{Deserialize, Serialize};

use parkhub_core::AppResult;
use parkhub_core::traits::Repository;

use parkhub_entity::session::SessionStatus;
use parkhub_entity::slot::SlotStatus;

use parkhub_store::{SessionStore, SlotStore};

/// Aggregate site statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteStatistics {
    /// Total slots in the inventory.
    pub total_slots: u64,
    /// Slots currently occupied.
    pub occupied_slots: u64,
    /// Slots currently reserved pending confirmation.
    pub reserved_slots: u64,
    /// Slots currently free.
    pub available_slots: u64,
    /// Vehicles waiting in the queue.
    pub queue_length: usize,
    /// Sessions currently in the `entered` state.
    pub active_sessions: u64,
    /// Entries confirmed today (UTC).
    pub today_entries: u64,
    /// Occupied share of the inventory, 0.0 to 100.0.
    pub occupancy_rate: f64,
}

/// Compute current site statistics.
pub async fn compute(
    slots: &SlotStore,
    sessions: &SessionStore,
    queue_length: usize,
) -> AppResult<SiteStatistics> {
    let all_slots = Repository::find_all(slots).await?;
    let total_slots = all_slots.len() as u64;
    let occupied_slots = all_slots
        .iter()
        .filter(|s| s.status == SlotStatus::Occupied)
        .count() as u64;
    let reserved_slots = all_slots
        .iter()
        .filter(|s| s.status == SlotStatus::Reserved)
        .count() as u64;
    let available_slots = all_slots.iter().filter(|s| s.is_available()).count() as u64;

    let occupancy_rate = if total_slots > 0 {
        occupied_slots as f64 / total_slots as f64 * 100.0
    } else {
        0.0
    };

    Ok(SiteStatistics {
        total_slots,
        occupied_slots,
        reserved_slots,
        available_slots,
        queue_length,
        active_sessions: sessions.count_where(|s| s.status == SessionStatus::Entered),
        today_entries: sessions.count_entries_today(),
        occupancy_rate,
    })
}
