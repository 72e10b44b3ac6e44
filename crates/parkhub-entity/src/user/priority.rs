//! Priority classification.

use serde::{Deserialize, Serialize};

/// Categorical priority rank governing queue order.
///
/// Lower rank is served first: emergency ahead of accessibility needs,
/// ahead of VIP, ahead of normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityClass {
    /// Emergency vehicles and situations.
    Emergency,
    /// Users with accessibility needs.
    Disabled,
    /// VIP users.
    Vip,
    /// Everyone else.
    Normal,
}

impl PriorityClass {
    /// Ordering rank: lower is served first.
    pub fn rank(&self) -> u8 {
        match self {
            PriorityClass::Emergency => 0,
            PriorityClass::Disabled => 1,
            PriorityClass::Vip => 2,
            PriorityClass::Normal => 3,
        }
    }
}

impl std::fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityClass::Emergency => write!(f, "emergency"),
            PriorityClass::Disabled => write!(f, "disabled"),
            PriorityClass::Vip => write!(f, "vip"),
            PriorityClass::Normal => write!(f, "normal"),
        }
    }
}
