//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod logging;
pub mod passes;
pub mod queue;
pub mod server;
pub mod session;
pub mod store;
pub mod tariff;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::passes::PassConfig;
use self::queue::QueueConfig;
use self::server::ServerConfig;
use self::session::SessionConfig;
use self::store::StoreConfig;
use self::tariff::TariffConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Session lifecycle settings (hold window, settlement, dwell).
    #[serde(default)]
    pub session: SessionConfig,
    /// Waiting queue settings.
    #[serde(default)]
    pub queue: QueueConfig,
    /// Parking tariff settings.
    #[serde(default)]
    pub tariff: TariffConfig,
    /// Gate pass settings.
    #[serde(default)]
    pub passes: PassConfig,
    /// Store seeding and snapshot settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            session: SessionConfig::default(),
            queue: QueueConfig::default(),
            tariff: TariffConfig::default(),
            passes: PassConfig::default(),
            store: StoreConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `PARKHUB`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("PARKHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
