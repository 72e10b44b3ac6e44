//! Waiting queue entry entity.

pub mod model;

pub use model::{QueueEntry, SlotPreference};
