//! Session lifecycle management.

pub mod manager;
pub mod outcome;
pub mod timers;

pub use manager::SessionManager;
pub use outcome::{ConfirmAck, EntryOutcome, EntryTicket, ExitAck, QueuedTicket, VehicleStatus};
pub use timers::TimerRegistry;
