//! Environment-driven application configuration.

use hotelres_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "HOTELRES_LOG_FORMAT";
pub const SEED_TEST_DATA_VAR: &str = "HOTELRES_SEED_TEST_DATA";
pub const RECOMMENDATION_DAYS_VAR: &str = "HOTELRES_RECOMMENDATION_DAYS";

/// Days a search is pushed forward when nothing is free for the asked dates.
pub const DEFAULT_RECOMMENDATION_DAYS: u64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: {message}")]
    Invalid { var: &'static str, message: String },
}

impl ConfigError {
    fn invalid(var: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            var,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_format: LogFormat,
    /// Populate mock customers, rooms and bookings at startup.
    pub seed_test_data: bool,
    pub recommendation_days: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            seed_test_data: false,
            recommendation_days: DEFAULT_RECOMMENDATION_DAYS,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup; unset keys keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = raw
                .parse()
                .map_err(|e: hotelres_observability::tracing::UnknownLogFormat| {
                    ConfigError::invalid(LOG_FORMAT_VAR, e.to_string())
                })?;
        }

        if let Some(raw) = lookup(SEED_TEST_DATA_VAR) {
            config.seed_test_data = parse_bool(&raw)
                .ok_or_else(|| ConfigError::invalid(SEED_TEST_DATA_VAR, format!("not a boolean: {raw:?}")))?;
        }

        if let Some(raw) = lookup(RECOMMENDATION_DAYS_VAR) {
            config.recommendation_days = match raw.trim().parse::<u64>() {
                Ok(days) if days > 0 => days,
                _ => {
                    return Err(ConfigError::invalid(
                        RECOMMENDATION_DAYS_VAR,
                        format!("expected a positive integer, got {raw:?}"),
                    ));
                }
            };
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
