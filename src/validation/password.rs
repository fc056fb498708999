/*!
 * Password and confirmation validation for the registration form.
 *
 * Password rule chain:
 * - Must not be empty
 * - Must reach the minimum length
 * - Must contain an uppercase letter, a lowercase letter, a digit and one
 *   of the accepted special characters
 *
 * The confirmation is only ever valid relative to the password value the
 * caller passes in; nothing is captured implicitly.
 */

/// Special characters accepted by the password rules
const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Default minimum password length
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Password validator
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Create a new validator with the default minimum length
    pub fn new() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }

    /// Create a new validator with a custom minimum length
    pub fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Validate a password value
    ///
    /// No trimming is applied: whitespace is password content.
    pub fn validate(&self, value: &str) -> String {
        if value.is_empty() {
            return "Password cannot be empty".to_string();
        }
        if value.chars().count() < self.min_length {
            return format!("Password must be at least {} characters", self.min_length);
        }
        if !value.chars().any(|c| c.is_ascii_uppercase()) {
            return "Password must contain at least one uppercase letter".to_string();
        }
        if !value.chars().any(|c| c.is_ascii_lowercase()) {
            return "Password must contain at least one lowercase letter".to_string();
        }
        if !value.chars().any(|c| c.is_ascii_digit()) {
            return "Password must contain at least one number".to_string();
        }
        if !value.chars().any(|c| SPECIAL_CHARS.contains(c)) {
            return "Password must contain at least one special character".to_string();
        }

        String::new()
    }

    /// Validate a confirmation against the current password value
    ///
    /// # Arguments
    /// * `value` - The confirmation field's raw value
    /// * `password` - The up-to-date password value to compare against
    pub fn validate_confirmation(value: &str, password: &str) -> String {
        if value.is_empty() {
            return "Please confirm your password".to_string();
        }
        if value != password {
            return "Passwords do not match".to_string();
        }

        String::new()
    }
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new()
    }
}
