//! Priority queue for waiting vehicles.
//!
//! Entries are ordered by priority rank, FIFO within a rank. The 1-based
//! `position` field of every entry is recomputed after each mutation, so
//! positions are always a contiguous 1..N range matching the order.
//!
//! The queue is a plain in-process structure; the session manager owns it
//! behind the site lock, which serializes all mutations.

use parkhub_core::config::queue::QueueConfig;
use parkhub_core::types::id::{QueueEntryId, VehicleId};

use parkhub_entity::queue::QueueEntry;
use parkhub_entity::vehicle::VehicleClass;

/// Rank-ordered waiting queue.
#[derive(Debug)]
pub struct PriorityQueue {
    entries: Vec<QueueEntry>,
    config: QueueConfig,
}

impl PriorityQueue {
    /// Create an empty queue.
    pub fn new(config: QueueConfig) -> Self {
        Self {
            entries: Vec::new(),
            config,
        }
    }

    /// Number of waiting vehicles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current entries in queue order.
    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    /// Estimated wait in minutes for a vehicle joining now: a floor plus
    /// a linear per-vehicle increment. Computed at insertion time only.
    pub fn estimate_wait(&self) -> u64 {
        let queued = self.entries.len() as u64;
        (queued * self.config.per_vehicle_wait_minutes).max(self.config.min_wait_minutes)
    }

    /// Position of a waiting vehicle, if queued.
    pub fn position_of(&self, vehicle_id: &VehicleId) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| &e.vehicle_id == vehicle_id)
            .map(|e| e.position)
    }

    /// Insert an entry at its priority position and return the assigned
    /// 1-based position.
    ///
    /// The insertion point is the first entry with a strictly lower rank,
    /// or with the same rank but a later enqueue time. Fresh entries have
    /// the newest enqueue time, so this is plain FIFO within a rank; for
    /// reinstated entries it restores their original FIFO spot.
    pub fn insert(&mut self, mut entry: QueueEntry) -> usize {
        let rank = entry.priority.rank();
        let index = self
            .entries
            .iter()
            .position(|e| {
                e.priority.rank() > rank
                    || (e.priority.rank() == rank && e.queued_at > entry.queued_at)
            })
            .unwrap_or(self.entries.len());
        entry.position = index + 1;
        self.entries.insert(index, entry);
        self.reindex();
        index + 1
    }

    /// Remove an entry by id.
    pub fn remove(&mut self, id: &QueueEntryId) -> Option<QueueEntry> {
        let index = self.entries.iter().position(|e| &e.id == id)?;
        let entry = self.entries.remove(index);
        self.reindex();
        Some(entry)
    }

    /// Remove and return the highest-priority entry whose vehicle class
    /// matches the freed slot's class. Entries of other classes keep
    /// their place; they are never discarded on a mismatch.
    pub fn take_first_compatible(&mut self, class: VehicleClass) -> Option<QueueEntry> {
        let index = self.entries.iter().position(|e| e.class == class)?;
        let entry = self.entries.remove(index);
        self.reindex();
        Some(entry)
    }

    fn reindex(&mut self) {
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.position = index + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use parkhub_core::types::id::UserId;
    use parkhub_entity::queue::SlotPreference;
    use parkhub_entity::user::PriorityClass;

    fn entry(vehicle: &str, priority: PriorityClass, offset_secs: i64) -> QueueEntry {
        QueueEntry {
            id: QueueEntryId::new(),
            vehicle_id: VehicleId::new(vehicle),
            user_id: UserId::new(),
            class: VehicleClass::FourWheeler,
            priority,
            queued_at: Utc::now() + Duration::seconds(offset_secs),
            estimated_wait_minutes: 5,
            position: 0,
            notified: false,
            slot_preference: SlotPreference::Any,
        }
    }

    fn order(queue: &PriorityQueue) -> Vec<&str> {
        queue
            .entries()
            .iter()
            .map(|e| e.vehicle_id.as_str())
            .collect()
    }

    #[test]
    fn test_priority_then_fifo_order() {
        let mut q = PriorityQueue::new(QueueConfig::default());
        q.insert(entry("NORMAL-1", PriorityClass::Normal, 0));
        q.insert(entry("VIP-1", PriorityClass::Vip, 1));
        q.insert(entry("NORMAL-2", PriorityClass::Normal, 2));
        q.insert(entry("EMERGENCY-1", PriorityClass::Emergency, 3));
        q.insert(entry("VIP-2", PriorityClass::Vip, 4));

        assert_eq!(
            order(&q),
            vec!["EMERGENCY-1", "VIP-1", "VIP-2", "NORMAL-1", "NORMAL-2"]
        );
    }

    #[test]
    fn test_positions_contiguous_after_mutations() {
        let mut q = PriorityQueue::new(QueueConfig::default());
        q.insert(entry("A", PriorityClass::Normal, 0));
        q.insert(entry("B", PriorityClass::Vip, 1));
        q.insert(entry("C", PriorityClass::Disabled, 2));
        let id = q.entries()[1].id;
        q.remove(&id);

        let positions: Vec<usize> = q.entries().iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn test_wait_estimate_has_floor_and_increment() {
        let mut q = PriorityQueue::new(QueueConfig::default());
        assert_eq!(q.estimate_wait(), 5);
        q.insert(entry("A", PriorityClass::Normal, 0));
        assert_eq!(q.estimate_wait(), 15);
        q.insert(entry("B", PriorityClass::Normal, 1));
        assert_eq!(q.estimate_wait(), 30);
    }

    #[test]
    fn test_take_first_compatible_skips_mismatches() {
        let mut q = PriorityQueue::new(QueueConfig::default());
        let mut bike = entry("BIKE-1", PriorityClass::Emergency, 0);
        bike.class = VehicleClass::TwoWheeler;
        q.insert(bike);
        q.insert(entry("CAR-1", PriorityClass::Normal, 1));

        let taken = q
            .take_first_compatible(VehicleClass::FourWheeler)
            .expect("compatible entry");
        assert_eq!(taken.vehicle_id.as_str(), "CAR-1");
        // The mismatching two-wheeler keeps its place at position 1.
        assert_eq!(q.len(), 1);
        assert_eq!(q.entries()[0].vehicle_id.as_str(), "BIKE-1");
        assert_eq!(q.entries()[0].position, 1);
    }

    #[test]
    fn test_reinstated_entry_recovers_fifo_spot() {
        let mut q = PriorityQueue::new(QueueConfig::default());
        let first = entry("FIRST", PriorityClass::Normal, 0);
        let first_id = first.id;
        q.insert(first);
        q.insert(entry("SECOND", PriorityClass::Normal, 1));

        let taken = q.remove(&first_id).expect("removed");
        q.insert(taken);
        assert_eq!(order(&q), vec!["FIRST", "SECOND"]);
    }
}
