/*!
 * Birth date validation and age derivation for the registration form.
 *
 * Rule chain:
 * - Must not be empty (an unparsable date is reported the same way)
 * - Must not be in the future
 * - Derived age must reach the adult age
 * - Derived age must not exceed the maximum plausible age
 *
 * The derived age is calendar arithmetic over year/month/day components,
 * never elapsed-time division, so leap years need no special casing. When
 * any rule fails the derived age is cleared to the empty string.
 */

use chrono::{Datelike, NaiveDate};

/// Date format accepted from the presentation layer (ISO 8601 date)
const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default minimum age in whole years
const DEFAULT_ADULT_AGE: i32 = 18;

/// Default maximum plausible age in whole years
const DEFAULT_MAX_AGE: i32 = 120;

/// Result of validating a birth date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthDateValidation {
    /// Error message, empty when the date is valid
    pub error: String,
    /// Derived age as displayed text, empty when any rule failed
    pub age: String,
}

impl BirthDateValidation {
    /// Create a passing result carrying the derived age
    pub fn passed(age: i32) -> Self {
        Self {
            error: String::new(),
            age: age.to_string(),
        }
    }

    /// Create a failing result with a cleared age
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            age: String::new(),
        }
    }
}

/// Birth date validator
pub struct BirthDateValidator {
    adult_age: i32,
    max_age: i32,
}

impl BirthDateValidator {
    /// Create a new validator with the default age bounds
    pub fn new() -> Self {
        Self {
            adult_age: DEFAULT_ADULT_AGE,
            max_age: DEFAULT_MAX_AGE,
        }
    }

    /// Create a new validator with custom age bounds
    pub fn with_bounds(adult_age: i32, max_age: i32) -> Self {
        Self { adult_age, max_age }
    }

    /// Age in whole years at `today` for someone born on `birth`
    ///
    /// Year difference, decremented by one when the birthday has not yet
    /// occurred this calendar year.
    pub fn compute_age(birth: NaiveDate, today: NaiveDate) -> i32 {
        let mut age = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        age
    }

    /// Latest birth date the presentation layer should allow selecting
    pub fn latest_allowed(today: NaiveDate) -> NaiveDate {
        today
    }

    /// Validate a birth date value against `today`
    pub fn validate(&self, value: &str, today: NaiveDate) -> BirthDateValidation {
        if value.is_empty() {
            return BirthDateValidation::failed("Birth date cannot be empty");
        }

        // Unparsable input is reported the same way as a missing date
        let birth = match NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT) {
            Ok(date) => date,
            Err(_) => return BirthDateValidation::failed("Birth date cannot be empty"),
        };

        if birth > today {
            return BirthDateValidation::failed("Birth date cannot be in the future");
        }

        let age = Self::compute_age(birth, today);

        if age < self.adult_age {
            return BirthDateValidation::failed(format!(
                "You must be at least {} years old",
                self.adult_age
            ));
        }
        if age > self.max_age {
            return BirthDateValidation::failed("Please enter a valid birth date");
        }

        BirthDateValidation::passed(age)
    }
}

impl Default for BirthDateValidator {
    fn default() -> Self {
        Self::new()
    }
}
