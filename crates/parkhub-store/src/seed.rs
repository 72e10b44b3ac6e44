//! JSON seeding and snapshot export.
//!
//! The slot inventory is fixed at startup: it is loaded from a JSON seed
//! file when one exists, otherwise generated. Snapshots export the full
//! store state for inspection or migration into a durable store.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use parkhub_core::AppResult;
use parkhub_core::types::id::{SlotId, UserId, VehicleId};
use parkhub_core::traits::Repository;

use parkhub_entity::slot::{Location, MaintenanceCondition, Slot, SlotStatus};
use parkhub_entity::user::{PriorityClass, User};
use parkhub_entity::vehicle::VehicleClass;

use crate::memory::{SessionStore, SlotStore, UserStore};

/// Seed file contents: the fixed slot inventory plus registered users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    /// Slot inventory.
    pub slots: Vec<Slot>,
    /// Registered users.
    pub users: Vec<User>,
}

/// Full store snapshot, exported as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Slot inventory with current status.
    pub slots: Vec<Slot>,
    /// Registered users with current statistics.
    pub users: Vec<User>,
    /// Session history, including terminal sessions.
    pub sessions: Vec<parkhub_entity::session::Session>,
}

/// Load seed data from a JSON file. Returns `None` when the file does
/// not exist.
pub async fn load_seed(path: &str) -> AppResult<Option<SeedData>> {
    if !Path::new(path).exists() {
        return Ok(None);
    }
    let raw = tokio::fs::read_to_string(path).await?;
    let seed: SeedData = serde_json::from_str(&raw)?;
    info!(
        path,
        slots = seed.slots.len(),
        users = seed.users.len(),
        "Loaded seed file"
    );
    Ok(Some(seed))
}

/// Populate the stores from seed data.
pub async fn apply_seed(
    seed: &SeedData,
    slots: &SlotStore,
    users: &UserStore,
) -> AppResult<()> {
    for slot in &seed.slots {
        Repository::create(slots, slot).await?;
    }
    for user in &seed.users {
        Repository::create(users, user).await?;
    }
    Ok(())
}

/// Export the full store state to a JSON snapshot file.
pub async fn export_snapshot(
    path: &str,
    slots: &SlotStore,
    users: &UserStore,
    sessions: &SessionStore,
) -> AppResult<()> {
    let snapshot = Snapshot {
        slots: Repository::find_all(slots).await?,
        users: Repository::find_all(users).await?,
        sessions: Repository::find_all(sessions).await?,
    };
    if let Some(parent) = Path::new(path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let raw = serde_json::to_string_pretty(&snapshot)?;
    tokio::fs::write(path, raw).await?;
    info!(path, "Wrote store snapshot");
    Ok(())
}

/// Generate the built-in sample inventory: buildings A-C with two floors
/// of 25 four-wheeler slots each, plus 75 two-wheeler slots at ground
/// level. Deterministic: every slot starts Free with zeroed counters.
pub fn sample_inventory() -> SeedData {
    let buildings = ["A", "B", "C"];
    let mut slots = Vec::new();

    for building in buildings {
        for floor in [1, 2] {
            for i in 1..=25u32 {
                slots.push(Slot {
                    id: SlotId::new(format!("{building}{floor}-{i:02}")),
                    class: VehicleClass::FourWheeler,
                    status: SlotStatus::Free,
                    locked: false,
                    location: Location {
                        building: building.to_string(),
                        floor,
                        zone: if i <= 12 { "North" } else { "South" }.to_string(),
                        section: match i {
                            1..=6 => "A",
                            7..=12 => "B",
                            13..=18 => "C",
                            _ => "D",
                        }
                        .to_string(),
                    },
                    covered: floor == 1,
                    accessible: i <= 3,
                    holder: None,
                    reserved_until: None,
                    occupied_at: None,
                    last_used: None,
                    usage_count: 0,
                    condition: MaintenanceCondition::Good,
                });
            }
        }
    }

    for i in 1..=75u32 {
        let building = buildings[((i - 1) / 25) as usize];
        let slot_num = ((i - 1) % 25) + 1;
        slots.push(Slot {
            id: SlotId::new(format!("2W-{building}{slot_num:02}")),
            class: VehicleClass::TwoWheeler,
            status: SlotStatus::Free,
            locked: false,
            location: Location {
                building: building.to_string(),
                floor: 1,
                zone: "Bike Parking".to_string(),
                section: if slot_num <= 12 { "East" } else { "West" }.to_string(),
            },
            covered: true,
            accessible: false,
            holder: None,
            reserved_until: None,
            occupied_at: None,
            last_used: None,
            usage_count: 0,
            condition: MaintenanceCondition::Good,
        });
    }

    let users = vec![
        User {
            id: UserId::new(),
            name: "John Doe".to_string(),
            employee_id: "EMP001".to_string(),
            vehicle_id: VehicleId::new("KA01AB1234"),
            vehicle_class: VehicleClass::FourWheeler,
            building: "A".to_string(),
            floor: 3,
            priority: PriorityClass::Normal,
            active: true,
            accessibility_needs: false,
            preferred_slots: vec![
                SlotId::new("A1-01"),
                SlotId::new("A1-05"),
                SlotId::new("A1-10"),
            ],
            last_parked: None,
            total_parking_minutes: 2400,
            violation_count: 0,
        },
        User {
            id: UserId::new(),
            name: "Sarah Johnson".to_string(),
            employee_id: "EMP002".to_string(),
            vehicle_id: VehicleId::new("KA02CD5678"),
            vehicle_class: VehicleClass::TwoWheeler,
            building: "B".to_string(),
            floor: 2,
            priority: PriorityClass::Vip,
            active: true,
            accessibility_needs: false,
            preferred_slots: vec![SlotId::new("2W-B15"), SlotId::new("2W-B20")],
            last_parked: None,
            total_parking_minutes: 1800,
            violation_count: 0,
        },
    ];

    SeedData { slots, users }
}
