/*!
 * Validation service that orchestrates all field validators.
 *
 * This module provides the single entry point the form controller uses:
 * per-field dispatch for live re-validation and a bulk pass over the whole
 * draft for submission.
 */

use chrono::NaiveDate;
use log::debug;

use crate::app_config::RulesConfig;
use crate::form::models::{Draft, ErrorMap, FieldName};

use super::birth_date::BirthDateValidator;
use super::email::EmailValidator;
use super::mobile::MobileValidator;
use super::names::{NameKind, NameValidator};
use super::password::PasswordValidator;
use super::profile_link::ProfileLinkValidator;

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    /// Error message, empty when the value is valid
    pub error: String,
    /// Refreshed age text; present only for the birth date field
    pub age: Option<String>,
}

impl FieldOutcome {
    /// Outcome for a field with no derived value
    fn plain(error: String) -> Self {
        Self { error, age: None }
    }

    /// Whether the field passed validation
    pub fn passed(&self) -> bool {
        self.error.is_empty()
    }
}

/// Result of the bulk validation pass over a draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftValidation {
    /// Fresh error map covering every field
    pub errors: ErrorMap,
    /// Recomputed age text, empty when the birth date failed
    pub age: String,
}

impl DraftValidation {
    /// Whether every field passed
    pub fn passed(&self) -> bool {
        self.errors.is_clear()
    }
}

/// Validation service for the registration form
pub struct ValidationService {
    names: NameValidator,
    mobile: MobileValidator,
    birth_date: BirthDateValidator,
    password: PasswordValidator,
}

impl ValidationService {
    /// Create a new validation service with default rule thresholds
    pub fn new() -> Self {
        Self::with_config(&RulesConfig::default())
    }

    /// Create a new validation service from a rules configuration
    pub fn with_config(config: &RulesConfig) -> Self {
        Self {
            names: NameValidator::with_min_length(config.min_name_length),
            mobile: MobileValidator::with_digits(config.mobile_digits),
            birth_date: BirthDateValidator::with_bounds(config.adult_age, config.max_age),
            password: PasswordValidator::with_min_length(config.min_password_length),
        }
    }

    /// Validate a single field's raw value
    ///
    /// # Arguments
    /// * `field` - Which field the value belongs to
    /// * `value` - The field's raw value
    /// * `password` - The current password value, compared against for the
    ///   confirmation field and ignored for every other field
    /// * `today` - Today's date, used only by the birth date field
    pub fn validate_field(
        &self,
        field: FieldName,
        value: &str,
        password: &str,
        today: NaiveDate,
    ) -> FieldOutcome {
        match field {
            FieldName::FirstName => {
                FieldOutcome::plain(self.names.validate(NameKind::First, value))
            }
            FieldName::LastName => FieldOutcome::plain(self.names.validate(NameKind::Last, value)),
            FieldName::MobileNumber => FieldOutcome::plain(self.mobile.validate(value)),
            FieldName::Email => FieldOutcome::plain(EmailValidator::validate(value)),
            FieldName::BirthDate => {
                let result = self.birth_date.validate(value, today);
                FieldOutcome {
                    error: result.error,
                    age: Some(result.age),
                }
            }
            FieldName::Password => FieldOutcome::plain(self.password.validate(value)),
            FieldName::ConfirmPassword => {
                FieldOutcome::plain(PasswordValidator::validate_confirmation(value, password))
            }
            FieldName::ProfileLink => FieldOutcome::plain(ProfileLinkValidator::validate(value)),
        }
    }

    /// Validate every field of a draft, recomputing the age
    ///
    /// Returns a complete error map with one entry per field, suitable for
    /// replacing the live map wholesale on a submit attempt.
    pub fn validate_draft(&self, draft: &Draft, today: NaiveDate) -> DraftValidation {
        let birth = self.birth_date.validate(&draft.birth_date, today);

        let mut errors = ErrorMap::new();
        errors.set(
            FieldName::FirstName,
            self.names.validate(NameKind::First, &draft.first_name),
        );
        errors.set(
            FieldName::LastName,
            self.names.validate(NameKind::Last, &draft.last_name),
        );
        errors.set(
            FieldName::MobileNumber,
            self.mobile.validate(&draft.mobile_number),
        );
        errors.set(FieldName::BirthDate, birth.error);
        errors.set(FieldName::Email, EmailValidator::validate(&draft.email));
        errors.set(FieldName::Password, self.password.validate(&draft.password));
        errors.set(
            FieldName::ConfirmPassword,
            PasswordValidator::validate_confirmation(&draft.confirm_password, &draft.password),
        );
        errors.set(
            FieldName::ProfileLink,
            ProfileLinkValidator::validate(&draft.profile_link),
        );

        debug!(
            "Draft validation: {}/{} fields valid",
            FieldName::ALL.len() - errors.error_count(),
            FieldName::ALL.len()
        );

        DraftValidation {
            errors,
            age: birth.age,
        }
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new()
    }
}
