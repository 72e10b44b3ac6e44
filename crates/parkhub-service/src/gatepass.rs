//! Gate pass issuance and validation.
//!
//! A gate pass is a short-lived token displayed at a gate device and
//! presented back when requesting entry or exit. Validation is pure:
//! it checks shape, declared action, and freshness, and always returns
//! a verdict with a reason instead of erroring.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use parkhub_core::AppResult;
use parkhub_core::config::passes::PassConfig;

use parkhub_entity::pass::{GateAction, GatePass};

/// Verdict of a gate pass validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassValidation {
    /// Whether the pass is honored.
    pub valid: bool,
    /// Human-readable reason.
    pub reason: String,
}

impl PassValidation {
    fn ok() -> Self {
        Self {
            valid: true,
            reason: "Gate pass is valid".to_string(),
        }
    }

    fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: reason.into(),
        }
    }
}

/// Issues and validates gate passes. Stateless apart from configuration.
#[derive(Debug, Clone)]
pub struct GatePassService {
    config: PassConfig,
}

impl GatePassService {
    /// Create a new gate pass service.
    pub fn new(config: PassConfig) -> Self {
        Self { config }
    }

    /// Issue a fresh pass for the given action and gate.
    pub fn issue(&self, action: GateAction, gate_id: &str, now: DateTime<Utc>) -> GatePass {
        let device_id = match action {
            GateAction::Entry => "ENTRY_DEVICE_01",
            GateAction::Exit => "EXIT_DEVICE_01",
        };
        GatePass {
            action,
            gate_id: gate_id.to_string(),
            device_id: device_id.to_string(),
            issued_at: now,
            valid_until: now + Duration::minutes(self.config.validity_minutes as i64),
            signature: stub_signature(gate_id, now),
        }
    }

    /// Encode a pass for transport (base64 over the JSON payload).
    pub fn encode(&self, pass: &GatePass) -> AppResult<String> {
        let json = serde_json::to_vec(pass)?;
        Ok(BASE64.encode(json))
    }

    /// Decode a transported pass. Returns `None` on any malformed input.
    pub fn decode(&self, raw: &str) -> Option<GatePass> {
        let bytes = BASE64.decode(raw.trim()).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Validate a decoded pass against the expected action and the clock.
    pub fn validate(
        &self,
        pass: &GatePass,
        expected: GateAction,
        now: DateTime<Utc>,
    ) -> PassValidation {
        if pass.action != expected {
            return PassValidation::rejected(format!(
                "Gate pass does not authorize {expected}"
            ));
        }
        if pass.is_expired(now) {
            return PassValidation::rejected("Gate pass has expired. Please request a new one.");
        }
        let skew = Duration::seconds(self.config.clock_skew_seconds as i64);
        if pass.issued_at > now + skew {
            return PassValidation::rejected("Gate pass issuance time is in the future");
        }
        let max_window = Duration::minutes(self.config.validity_minutes as i64) + skew;
        if pass.valid_until - pass.issued_at > max_window {
            return PassValidation::rejected("Gate pass validity window is too long");
        }
        PassValidation::ok()
    }

    /// Decode and validate a transported pass in one step.
    pub fn validate_encoded(
        &self,
        raw: &str,
        expected: GateAction,
        now: DateTime<Utc>,
    ) -> (PassValidation, Option<GatePass>) {
        match self.decode(raw) {
            Some(pass) => (self.validate(&pass, expected, now), Some(pass)),
            None => (PassValidation::rejected("Malformed gate pass"), None),
        }
    }

    /// Generate a one-time 6-digit verification code.
    pub fn verification_code(&self) -> String {
        rand::thread_rng().gen_range(100_000..=999_999u32).to_string()
    }
}

/// Opaque signature stub over the gate id and issuance time.
///
/// Not a MAC: there is no key and no verification. Kept so the payload
/// shape matches what a keyed scheme would produce.
fn stub_signature(gate_id: &str, issued_at: DateTime<Utc>) -> String {
    let material = format!("{gate_id}{}", issued_at.timestamp_millis());
    let encoded = BASE64.encode(material);
    encoded
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(16)
        .collect()
}
