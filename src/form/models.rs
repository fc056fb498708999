/*!
 * Data models for the registration form.
 *
 * These structures are the contract with the presentation layer: the draft
 * being edited, the per-field error map, the immutable record produced by
 * a successful submission, and the view mode flag.
 */

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier for a validated form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    /// First name text field
    FirstName,
    /// Last name text field
    LastName,
    /// Mobile number text field
    MobileNumber,
    /// Birth date field (ISO `YYYY-MM-DD`)
    BirthDate,
    /// Email text field
    Email,
    /// Password field
    Password,
    /// Password confirmation field
    ConfirmPassword,
    /// Profile link field
    ProfileLink,
}

impl FieldName {
    /// All validated fields, in form order
    pub const ALL: [FieldName; 8] = [
        Self::FirstName,
        Self::LastName,
        Self::MobileNumber,
        Self::BirthDate,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::ProfileLink,
    ];

    /// Wire name used by the presentation layer
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::MobileNumber => "mobileNumber",
            Self::BirthDate => "birthDate",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::ProfileLink => "profileLink",
        }
    }
}

// Implement Display trait for FieldName
impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Implement FromStr trait for FieldName
impl std::str::FromStr for FieldName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "firstName" => Ok(Self::FirstName),
            "lastName" => Ok(Self::LastName),
            "mobileNumber" => Ok(Self::MobileNumber),
            "birthDate" => Ok(Self::BirthDate),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "confirmPassword" => Ok(Self::ConfirmPassword),
            "profileLink" => Ok(Self::ProfileLink),
            _ => Err(anyhow!("Unknown field name: {}", s)),
        }
    }
}

/// In-progress registration draft
///
/// Owned exclusively by the form controller while in edit mode. The `age`
/// field is derived from `birth_date` and never set by the user directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// First name raw value
    pub first_name: String,
    /// Last name raw value
    pub last_name: String,
    /// Mobile number raw value
    pub mobile_number: String,
    /// Birth date raw value
    pub birth_date: String,
    /// Email raw value
    pub email: String,
    /// Password raw value
    pub password: String,
    /// Password confirmation raw value
    pub confirm_password: String,
    /// Profile link raw value
    pub profile_link: String,
    /// Derived age text, recomputed whenever the birth date changes
    pub age: String,
}

impl Draft {
    /// Raw value of a field
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::MobileNumber => &self.mobile_number,
            FieldName::BirthDate => &self.birth_date,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
            FieldName::ProfileLink => &self.profile_link,
        }
    }

    /// Store a raw value; only the controller mutates drafts
    pub(crate) fn set(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::FirstName => self.first_name = value,
            FieldName::LastName => self.last_name = value,
            FieldName::MobileNumber => self.mobile_number = value,
            FieldName::BirthDate => self.birth_date = value,
            FieldName::Email => self.email = value,
            FieldName::Password => self.password = value,
            FieldName::ConfirmPassword => self.confirm_password = value,
            FieldName::ProfileLink => self.profile_link = value,
        }
    }

    /// Whether every field (including the derived age) is empty
    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty()) && self.age.is_empty()
    }
}

/// Per-field validation errors; an empty string means the field is valid
///
/// An entry exists once its field has been validated, so a cleanly reset
/// map and a map of all-empty entries both count as clear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMap {
    entries: HashMap<FieldName, String>,
}

impl ErrorMap {
    /// Create an empty error map
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a field's error, replacing any previous entry
    pub fn set(&mut self, field: FieldName, error: String) {
        self.entries.insert(field, error);
    }

    /// A field's current error; empty when valid or not yet validated
    pub fn get(&self, field: FieldName) -> &str {
        self.entries.get(&field).map(|e| e.as_str()).unwrap_or("")
    }

    /// Whether a field currently has a non-empty error
    pub fn has_error(&self, field: FieldName) -> bool {
        !self.get(field).is_empty()
    }

    /// Whether no field has a non-empty error
    pub fn is_clear(&self) -> bool {
        self.entries.values().all(|e| e.is_empty())
    }

    /// Number of fields with a non-empty error
    pub fn error_count(&self) -> usize {
        self.entries.values().filter(|e| !e.is_empty()).count()
    }

    /// Number of fields that have been validated so far
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Immutable snapshot of a successfully submitted registration
///
/// Carries the seven user-entered fields; the derived age is informational
/// only and not persisted onto the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedRecord {
    /// First name as submitted
    pub first_name: String,
    /// Last name as submitted
    pub last_name: String,
    /// Mobile number as submitted
    pub mobile_number: String,
    /// Birth date as submitted
    pub birth_date: String,
    /// Email as submitted
    pub email: String,
    /// Password as submitted
    pub password: String,
    /// Profile link as submitted
    pub profile_link: String,
}

impl SubmittedRecord {
    /// Snapshot the user-entered fields of a draft
    pub(crate) fn from_draft(draft: &Draft) -> Self {
        Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            mobile_number: draft.mobile_number.clone(),
            birth_date: draft.birth_date.clone(),
            email: draft.email.clone(),
            password: draft.password.clone(),
            profile_link: draft.profile_link.clone(),
        }
    }

    /// Full name as the review card displays it
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Whether the form is collecting input or displaying a submitted record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Collecting input into the draft
    #[default]
    Editing,
    /// Displaying the submitted record
    Reviewing,
}
