//! Slot listing filter.

use serde::{Deserialize, Serialize};

use crate::vehicle::VehicleClass;
use super::model::Slot;
use super::status::SlotStatus;

/// Filter applied when listing slots.
///
/// All fields are optional; a default filter matches every slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotFilter {
    /// Restrict to one vehicle class.
    pub class: Option<VehicleClass>,
    /// Restrict to one occupancy status.
    pub status: Option<SlotStatus>,
    /// Restrict to one building.
    pub building: Option<String>,
    /// Restrict to accessibility-suitable slots.
    pub accessible: Option<bool>,
}

impl SlotFilter {
    /// Check whether a slot matches every set field.
    pub fn matches(&self, slot: &Slot) -> bool {
        self.class.is_none_or(|c| slot.class == c)
            && self.status.is_none_or(|s| slot.status == s)
            && self
                .building
                .as_ref()
                .is_none_or(|b| &slot.location.building == b)
            && self.accessible.is_none_or(|a| slot.accessible == a)
    }
}
