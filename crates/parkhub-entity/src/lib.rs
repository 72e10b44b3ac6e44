//! # parkhub-entity
//!
//! Domain entity models for ParkHub: slots, sessions, queue entries,
//! registered users, and gate passes.

pub mod pass;
pub mod queue;
pub mod session;
pub mod slot;
pub mod user;
pub mod vehicle;

pub use pass::{GateAction, GatePass};
pub use queue::{QueueEntry, SlotPreference};
pub use session::{EntryMethod, Session, SessionStatus};
pub use slot::{Location, MaintenanceCondition, Slot, SlotFilter, SlotStatus};
pub use user::{PriorityClass, User};
pub use vehicle::VehicleClass;
