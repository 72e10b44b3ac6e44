//! HTTP handlers, organized by domain.

pub mod entry;
pub mod exit;
pub mod health;
pub mod passes;
pub mod queue;
pub mod session;
pub mod slots;
pub mod stats;
