/*!
 * Error types for the regcore library.
 *
 * Validation failures are never modeled as errors: they are data, reported
 * as strings in the form's error map. The types here cover the remaining
 * fault paths, using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when validating rule configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A length or count threshold was set to zero
    #[error("Threshold '{0}' must be at least 1")]
    ZeroThreshold(&'static str),

    /// Adult age exceeds the maximum plausible age
    #[error("Adult age {adult_age} must not exceed maximum age {max_age}")]
    AgeBoundsInverted {
        /// Configured minimum age in whole years
        adult_age: i32,
        /// Configured maximum age in whole years
        max_age: i32,
    },

    /// An age bound was set to a non-positive value
    #[error("Age bounds must be positive, got {0}")]
    NonPositiveAge(i32),
}

/// Errors that can occur when driving the form state machine
#[derive(Error, Debug)]
pub enum FormError {
    /// Back action requested while the form is still in edit mode
    #[error("Cannot go back: no record is being reviewed")]
    NotReviewing,

    /// Error from rule configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
