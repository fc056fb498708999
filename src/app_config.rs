use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Rule configuration module
/// This module holds the thresholds behind the per-field validation rules.
/// Every field carries a serde default so a partial configuration document
/// still yields the standard registration rules.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RulesConfig {
    /// Minimum length for first and last names, counted after trimming
    #[serde(default = "default_min_name_length")]
    pub min_name_length: usize,

    /// Exact number of digits required in a mobile number
    #[serde(default = "default_mobile_digits")]
    pub mobile_digits: usize,

    /// Minimum password length
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Minimum age in whole years
    #[serde(default = "default_adult_age")]
    pub adult_age: i32,

    /// Maximum plausible age in whole years
    #[serde(default = "default_max_age")]
    pub max_age: i32,
}

fn default_min_name_length() -> usize {
    3
}

fn default_mobile_digits() -> usize {
    10
}

fn default_min_password_length() -> usize {
    8
}

fn default_adult_age() -> i32 {
    18
}

fn default_max_age() -> i32 {
    120
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_name_length: default_min_name_length(),
            mobile_digits: default_mobile_digits(),
            min_password_length: default_min_password_length(),
            adult_age: default_adult_age(),
            max_age: default_max_age(),
        }
    }
}

impl RulesConfig {
    /// Parse a configuration from a JSON document
    ///
    /// Missing fields fall back to their defaults; the parsed configuration
    /// is validated before being returned.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse rules configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the thresholds make sense together
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_name_length == 0 {
            return Err(ConfigError::ZeroThreshold("min_name_length"));
        }
        if self.mobile_digits == 0 {
            return Err(ConfigError::ZeroThreshold("mobile_digits"));
        }
        if self.min_password_length == 0 {
            return Err(ConfigError::ZeroThreshold("min_password_length"));
        }
        if self.adult_age <= 0 {
            return Err(ConfigError::NonPositiveAge(self.adult_age));
        }
        if self.max_age <= 0 {
            return Err(ConfigError::NonPositiveAge(self.max_age));
        }
        if self.adult_age > self.max_age {
            return Err(ConfigError::AgeBoundsInverted {
                adult_age: self.adult_age,
                max_age: self.max_age,
            });
        }
        Ok(())
    }
}
