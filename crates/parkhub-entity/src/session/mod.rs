//! Parking session entity and state machine types.

pub mod model;
pub mod status;

pub use model::Session;
pub use status::{EntryMethod, SessionStatus};
