/*!
 * Form controller: owns the draft, the error map and the view mode.
 *
 * All per-field checks are delegated to the validation service; the
 * controller stores raw values, keeps the error map in step with every
 * change, and performs the edit/review state transition on submission.
 * Operations are synchronous and run to completion; concurrent sessions
 * each own an independent controller.
 */

use chrono::NaiveDate;
use log::debug;

use crate::app_config::RulesConfig;
use crate::clock::{Clock, SystemClock};
use crate::errors::FormError;
use crate::form::models::{Draft, ErrorMap, FieldName, SubmittedRecord, ViewMode};
use crate::validation::ValidationService;

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the form switched to review mode
    Accepted(SubmittedRecord),
    /// At least one field failed; the form stays in edit mode
    Rejected,
}

impl SubmitOutcome {
    /// Whether the submission was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Main controller for the registration form
pub struct FormController {
    validation: ValidationService,
    clock: Box<dyn Clock>,
    draft: Draft,
    errors: ErrorMap,
    view_mode: ViewMode,
    submitted: Option<SubmittedRecord>,
}

impl FormController {
    /// Create a new controller with default rules and the system clock
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Create a new controller with the given rules configuration
    pub fn with_config(config: RulesConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Create a new controller with the given rules and clock
    pub fn with_clock(config: RulesConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            validation: ValidationService::with_config(&config),
            clock,
            draft: Draft::default(),
            errors: ErrorMap::new(),
            view_mode: ViewMode::Editing,
            submitted: None,
        }
    }

    /// Store a raw field value and re-validate that field
    ///
    /// The draft and the error map update together in one synchronous step.
    /// Setting the birth date also recomputes the derived age; setting the
    /// password also runs the confirmation refresh rule.
    pub fn set_field(&mut self, field: FieldName, raw_value: &str) {
        self.draft.set(field, raw_value.to_string());

        let today = self.clock.today();
        let outcome =
            self.validation
                .validate_field(field, raw_value, &self.draft.password, today);

        if let Some(age) = outcome.age {
            self.draft.age = age;
        }
        self.errors.set(field, outcome.error);

        if field == FieldName::Password {
            self.refresh_confirm_password();
        }
    }

    /// Cross-field rule: a password change refreshes the confirmation error
    ///
    /// The refresh only fires when the current password is itself valid and
    /// a confirmation value has been entered. An invalid password leaves any
    /// confirmation error untouched until the confirmation field is next
    /// edited.
    pub fn refresh_confirm_password(&mut self) {
        let today = self.clock.today();
        let password_ok = self
            .validation
            .validate_field(FieldName::Password, &self.draft.password, "", today)
            .passed();

        if !password_ok || self.draft.confirm_password.is_empty() {
            return;
        }

        let outcome = self.validation.validate_field(
            FieldName::ConfirmPassword,
            &self.draft.confirm_password,
            &self.draft.password,
            today,
        );
        self.errors.set(FieldName::ConfirmPassword, outcome.error);
    }

    /// Re-validate every field and, when all pass, switch to review mode
    ///
    /// The error map is replaced wholesale with the fresh results and the
    /// age is recomputed either way. On acceptance the draft and error map
    /// reset and the returned record takes over display duty.
    pub fn submit(&mut self) -> SubmitOutcome {
        let today = self.clock.today();
        let result = self.validation.validate_draft(&self.draft, today);

        self.draft.age = result.age.clone();
        self.errors = result.errors;

        if !self.errors.is_clear() {
            debug!(
                "Submit rejected: {} field(s) failed validation",
                self.errors.error_count()
            );
            return SubmitOutcome::Rejected;
        }

        let record = SubmittedRecord::from_draft(&self.draft);
        self.submitted = Some(record.clone());
        self.view_mode = ViewMode::Reviewing;
        self.draft = Draft::default();
        self.errors = ErrorMap::new();

        debug!("Submit accepted for {}", record.full_name());
        SubmitOutcome::Accepted(record)
    }

    /// Discard the submitted record and return to editing
    ///
    /// Only valid while reviewing. The draft stays empty; the pre-submit
    /// content is not restored.
    pub fn go_back(&mut self) -> Result<(), FormError> {
        if self.view_mode != ViewMode::Reviewing {
            return Err(FormError::NotReviewing);
        }

        self.submitted = None;
        self.view_mode = ViewMode::Editing;
        debug!("Returned to edit mode");
        Ok(())
    }

    /// Current draft values
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Current per-field errors
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Current derived age text
    pub fn age(&self) -> &str {
        &self.draft.age
    }

    /// Current view mode
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The record under review, present only while reviewing
    pub fn submitted_record(&self) -> Option<&SubmittedRecord> {
        self.submitted.as_ref()
    }

    /// Today's date as seen by the controller's clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
