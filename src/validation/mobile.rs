/*!
 * Mobile number validation for the registration form.
 *
 * Rule chain:
 * - Must not be blank (after trimming)
 * - Must consist of digit characters only
 * - Must contain exactly the configured number of digits
 */

/// Default number of digits in a mobile number
const DEFAULT_MOBILE_DIGITS: usize = 10;

/// Mobile number validator
pub struct MobileValidator {
    digits: usize,
}

impl MobileValidator {
    /// Create a new validator expecting the default digit count
    pub fn new() -> Self {
        Self {
            digits: DEFAULT_MOBILE_DIGITS,
        }
    }

    /// Create a new validator expecting a custom digit count
    pub fn with_digits(digits: usize) -> Self {
        Self { digits }
    }

    /// Validate a mobile number value
    ///
    /// The emptiness check runs on the trimmed value; the digit checks run
    /// on the raw value, so embedded or surrounding whitespace fails the
    /// digits-only rule rather than being silently stripped.
    pub fn validate(&self, value: &str) -> String {
        if value.trim().is_empty() {
            return "Mobile number cannot be empty".to_string();
        }
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return "Mobile number can only contain digits".to_string();
        }
        if value.chars().count() != self.digits {
            return format!("Mobile number must be {} digits", self.digits);
        }

        String::new()
    }
}

impl Default for MobileValidator {
    fn default() -> Self {
        Self::new()
    }
}
