//! Vehicle classification.

use serde::{Deserialize, Serialize};

/// The two vehicle classes the lot serves. Every slot is built for
/// exactly one class and never serves the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    /// Two-wheelers (motorcycles, scooters).
    #[serde(rename = "2W")]
    TwoWheeler,
    /// Four-wheelers (cars, vans).
    #[serde(rename = "4W")]
    FourWheeler,
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleClass::TwoWheeler => write!(f, "2W"),
            VehicleClass::FourWheeler => write!(f, "4W"),
        }
    }
}
