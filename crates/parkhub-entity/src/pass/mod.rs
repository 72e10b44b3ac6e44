//! Gate pass (access token) entity.

pub mod model;

pub use model::{GateAction, GatePass};
