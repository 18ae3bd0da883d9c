//! Configuration management for the AirSense dashboard server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AIRSENSE_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{City, MAX_FORECAST_HORIZON};

use crate::error::AppError;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Dashboard rendering configuration
    pub dashboard: DashboardConfig,

    /// Live-reading session configuration
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// City shown when a request does not pick one
    pub default_city: City,

    /// Auto-refresh interval of the HTML page
    pub refresh_interval_secs: u64,

    /// Forecast horizon of the citizen view
    pub citizen_horizon_hours: u32,

    /// Forecast horizon of the government forecast view
    pub government_horizon_hours: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Upper bound on concurrently tracked sessions
    pub max_sessions: usize,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AIRSENSE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8501)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("dashboard.default_city", "delhi")?
            .set_default("dashboard.refresh_interval_secs", 15)?
            .set_default("dashboard.citizen_horizon_hours", 24)?
            .set_default("dashboard.government_horizon_hours", 72)?
            .set_default("session.max_sessions", 10_000)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AIRSENSE_ prefix)
            .add_source(
                Environment::with_prefix("AIRSENSE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject settings the dashboard cannot run with
    pub fn validate(&self) -> Result<(), AppError> {
        if self.dashboard.refresh_interval_secs == 0 {
            return Err(AppError::Configuration(
                "dashboard.refresh_interval_secs must be positive".to_string(),
            ));
        }
        for (key, hours) in [
            ("dashboard.citizen_horizon_hours", self.dashboard.citizen_horizon_hours),
            ("dashboard.government_horizon_hours", self.dashboard.government_horizon_hours),
        ] {
            if hours == 0 || hours > MAX_FORECAST_HORIZON {
                return Err(AppError::Configuration(format!(
                    "{} must be between 1 and {}, got {}",
                    key, MAX_FORECAST_HORIZON, hours
                )));
            }
        }
        if self.session.max_sessions == 0 {
            return Err(AppError::Configuration(
                "session.max_sessions must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            dashboard: DashboardConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8501,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_city: City::Delhi,
            refresh_interval_secs: 15,
            citizen_horizon_hours: 24,
            government_horizon_hours: 72,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_env_override_with_airsense_prefix() {
        std::env::set_var("AIRSENSE_SERVER__PORT", "9123");
        std::env::set_var("AIRSENSE_DASHBOARD__DEFAULT_CITY", "noida");
        let loaded = Config::load();
        std::env::remove_var("AIRSENSE_SERVER__PORT");
        std::env::remove_var("AIRSENSE_DASHBOARD__DEFAULT_CITY");

        let config = loaded.unwrap();
        assert_eq!(config.server.port, 9123);
        assert_eq!(config.dashboard.default_city, City::Noida);
        assert_eq!(config.dashboard.refresh_interval_secs, 15);
    }

    #[test]
    fn test_zero_refresh_interval_rejected() {
        let mut config = Config::default();
        config.dashboard.refresh_interval_secs = 0;
        assert!(matches!(config.validate(), Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_horizon_out_of_range_rejected() {
        let mut config = Config::default();
        config.dashboard.government_horizon_hours = MAX_FORECAST_HORIZON + 1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.dashboard.citizen_horizon_hours = 0;
        assert!(config.validate().is_err());
    }
}
