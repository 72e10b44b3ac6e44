//! Registered user entity.

pub mod model;
pub mod priority;

pub use model::User;
pub use priority::PriorityClass;
