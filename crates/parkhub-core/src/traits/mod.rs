//! Core trait definitions.

pub mod notifier;
pub mod repository;

pub use notifier::ParkingNotifier;
pub use repository::Repository;
