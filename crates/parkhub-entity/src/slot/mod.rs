//! Parking slot entity and related types.

pub mod filter;
pub mod model;
pub mod status;

pub use filter::SlotFilter;
pub use model::{Location, Slot};
pub use status::{MaintenanceCondition, SlotStatus};
