//! Slot allocation policy.
//!
//! Pure selection over the currently available candidates of the
//! requester's vehicle class. Candidates must be passed in stable id
//! order so the choice is deterministic for a given input.

use parkhub_entity::slot::Slot;
use parkhub_entity::user::User;

/// Pick the slot to offer a requester.
///
/// Precedence: accessibility need, then the user's preferred-slot list
/// (in list order), then the user's home building, then the first
/// candidate. Returns `None` only when `candidates` is empty.
pub fn select_slot<'a>(user: &User, candidates: &'a [Slot]) -> Option<&'a Slot> {
    if candidates.is_empty() {
        return None;
    }

    if user.accessibility_needs {
        if let Some(slot) = candidates.iter().find(|s| s.accessible) {
            return Some(slot);
        }
    }

    for preferred in &user.preferred_slots {
        if let Some(slot) = candidates.iter().find(|s| &s.id == preferred) {
            return Some(slot);
        }
    }

    if let Some(slot) = candidates
        .iter()
        .find(|s| s.location.building == user.building)
    {
        return Some(slot);
    }

    candidates.first()
}
