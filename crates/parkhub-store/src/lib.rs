//! # parkhub-store
//!
//! In-memory repositories for ParkHub entities, behind the generic
//! [`parkhub_core::traits::Repository`] seam, with JSON seed loading and
//! snapshot export. Suitable for single-node deployments; a durable keyed
//! store would implement the same traits.

pub mod memory;
pub mod seed;

pub use memory::{SessionStore, SlotStore, UserStore};
pub use seed::{SeedData, apply_seed, export_snapshot, load_seed, sample_inventory};
