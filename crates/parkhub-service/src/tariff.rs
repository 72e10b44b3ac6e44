//! Parking charge computation.

use parkhub_core::config::tariff::TariffConfig;

/// Computes charges from parked duration.
#[derive(Debug, Clone)]
pub struct Tariff {
    config: TariffConfig,
}

impl Tariff {
    /// Create a tariff from configuration.
    pub fn new(config: TariffConfig) -> Self {
        Self { config }
    }

    /// Charge for a parked duration in minutes: every started hour is
    /// billed at the hourly rate.
    pub fn charge_for_minutes(&self, minutes: u64) -> u64 {
        minutes.div_ceil(60) * self.config.hourly_rate
    }

    /// Display currency code.
    pub fn currency(&self) -> &str {
        &self.config.currency
    }
}

/// Format a duration in minutes the way the gate display shows it.
pub fn format_duration(minutes: u64) -> String {
    let hours = minutes / 60;
    let remaining = minutes % 60;
    if hours > 0 {
        format!("{hours}h {remaining}m")
    } else {
        format!("{remaining}m")
    }
}
