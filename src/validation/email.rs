/*!
 * Email validation for the registration form.
 *
 * Rule chain:
 * - Must not be blank (after trimming)
 * - Must match the local@domain.tld shape: a run with no whitespace or
 *   "@", an "@", another such run, a ".", and a final run
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for the local@domain.tld shape
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Email validator
pub struct EmailValidator;

impl EmailValidator {
    /// Validate an email value
    ///
    /// The emptiness check runs on the trimmed value; the pattern check
    /// runs on the raw value, so surrounding whitespace fails the pattern.
    pub fn validate(value: &str) -> String {
        if value.trim().is_empty() {
            return "Email cannot be empty".to_string();
        }
        if !EMAIL_REGEX.is_match(value) {
            return "Email is not valid".to_string();
        }

        String::new()
    }
}
