/*!
 * Profile link validation for the registration form.
 *
 * Rule chain:
 * - Must not be blank (after trimming)
 * - Must be an http or https URL with no embedded whitespace
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for an http(s) URL with no embedded whitespace
static PROFILE_LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s$.?#].[^\s]*$").expect("Invalid profile link regex")
});

/// Profile link validator
pub struct ProfileLinkValidator;

impl ProfileLinkValidator {
    /// Validate a profile link value
    ///
    /// The emptiness check runs on the trimmed value; the pattern check
    /// runs on the raw value.
    pub fn validate(value: &str) -> String {
        if value.trim().is_empty() {
            return "Profile link cannot be empty".to_string();
        }
        if !PROFILE_LINK_REGEX.is_match(value) {
            return "Profile link is not valid".to_string();
        }

        String::new()
    }
}
