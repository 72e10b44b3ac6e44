//! # parkhub-service
//!
//! Business logic for ParkHub: the gate-pass validator, allocation policy,
//! slot registry, priority queue, tariff computation, and the session
//! manager that coordinates them all under a single site lock.

pub mod allocation;
pub mod gatepass;
pub mod notify;
pub mod queue;
pub mod registry;
pub mod session;
pub mod stats;
pub mod tariff;

pub use gatepass::{GatePassService, PassValidation};
pub use notify::TracingNotifier;
pub use queue::PriorityQueue;
pub use registry::SlotRegistry;
pub use session::SessionManager;
pub use tariff::Tariff;
