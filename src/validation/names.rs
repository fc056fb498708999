/*!
 * Name validation for the registration form.
 *
 * First and last names share the same rule chain:
 * - Must not be blank (after trimming)
 * - Must not contain digit characters
 * - Must reach the minimum trimmed length
 */

/// Which name field is being validated; selects the message prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// First name field
    First,
    /// Last name field
    Last,
}

impl NameKind {
    /// Human-readable field label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::First => "First name",
            Self::Last => "Last name",
        }
    }
}

/// Default minimum name length (after trimming)
const DEFAULT_MIN_NAME_LENGTH: usize = 3;

/// Name validator for first and last names
pub struct NameValidator {
    min_length: usize,
}

impl NameValidator {
    /// Create a new validator with the default minimum length
    pub fn new() -> Self {
        Self {
            min_length: DEFAULT_MIN_NAME_LENGTH,
        }
    }

    /// Create a new validator with a custom minimum length
    pub fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Validate a name value
    ///
    /// Returns the first failing rule's message, or an empty string when
    /// the value is valid. The digit check runs on the raw value, the
    /// emptiness and length checks on the trimmed value.
    pub fn validate(&self, kind: NameKind, value: &str) -> String {
        let label = kind.label();

        if value.trim().is_empty() {
            return format!("{} cannot be empty", label);
        }
        if value.chars().any(|c| c.is_ascii_digit()) {
            return format!("{} cannot contain numbers", label);
        }
        if value.trim().chars().count() < self.min_length {
            return format!("{} must be at least {} characters", label, self.min_length);
        }

        String::new()
    }
}

impl Default for NameValidator {
    fn default() -> Self {
        Self::new()
    }
}
