//! Engine configuration module.
//!
//! Provides the tunables shared by the structure engine's components.

use std::env;
use thiserror::Error;

/// Default allowed deviation of a prize level's percentage total from 100
pub const DEFAULT_PERCENTAGE_TOLERANCE: f64 = 0.01;

/// Environment variable overriding the percentage tolerance
pub const PERCENTAGE_TOLERANCE_VAR: &str = "TOURNEY_PERCENTAGE_TOLERANCE";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Value could not be parsed
    #[error("{key} must be a number, got {value:?}")]
    Invalid { key: &'static str, value: String },

    /// Value parsed but is not usable
    #[error("{key} must be a finite, non-negative number, got {value}")]
    OutOfRange { key: &'static str, value: String },
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Rounding allowance when checking that prize percentages total 100
    pub percentage_tolerance: f64,
}

impl EngineConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `TOURNEY_PERCENTAGE_TOLERANCE`: Percentage total tolerance (default: 0.01)
    ///
    /// # Returns
    ///
    /// * `Result<EngineConfig, ConfigError>` - Configuration, or the variable that failed to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        let percentage_tolerance = match env::var(PERCENTAGE_TOLERANCE_VAR) {
            Ok(raw) => parse_tolerance(&raw)?,
            Err(env::VarError::NotPresent) => DEFAULT_PERCENTAGE_TOLERANCE,
            Err(env::VarError::NotUnicode(raw)) => {
                return Err(ConfigError::Invalid {
                    key: PERCENTAGE_TOLERANCE_VAR,
                    value: raw.to_string_lossy().into_owned(),
                });
            }
        };

        Ok(Self {
            percentage_tolerance,
        })
    }

    /// Create a default configuration for development
    pub fn development() -> Self {
        Self {
            percentage_tolerance: DEFAULT_PERCENTAGE_TOLERANCE,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::development()
    }
}

fn parse_tolerance(raw: &str) -> Result<f64, ConfigError> {
    let value: f64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key: PERCENTAGE_TOLERANCE_VAR,
        value: raw.to_string(),
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::OutOfRange {
            key: PERCENTAGE_TOLERANCE_VAR,
            value: raw.to_string(),
        });
    }

    Ok(value)
}
