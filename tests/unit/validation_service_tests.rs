/*!
 * Tests for the validation service
 */

use regcore::app_config::RulesConfig;
use regcore::form::{Draft, FieldName};
use regcore::validation::ValidationService;

use crate::common::{test_today, valid_field_values};

fn valid_draft() -> Draft {
    let mut draft = Draft::default();
    for (field, value) in valid_field_values() {
        match field {
            FieldName::FirstName => draft.first_name = value.to_string(),
            FieldName::LastName => draft.last_name = value.to_string(),
            FieldName::MobileNumber => draft.mobile_number = value.to_string(),
            FieldName::BirthDate => draft.birth_date = value.to_string(),
            FieldName::Email => draft.email = value.to_string(),
            FieldName::Password => draft.password = value.to_string(),
            FieldName::ConfirmPassword => draft.confirm_password = value.to_string(),
            FieldName::ProfileLink => draft.profile_link = value.to_string(),
        }
    }
    draft
}

#[test]
fn test_validateField_withValidValues_shouldAllPass() {
    let service = ValidationService::new();

    for (field, value) in valid_field_values() {
        let outcome = service.validate_field(field, value, "Abcd123!", test_today());
        assert!(outcome.passed(), "{} rejected {:?}", field, value);
    }
}

#[test]
fn test_validateField_emptinessAlwaysPrecedesOtherRules() {
    let service = ValidationService::new();

    // Whitespace-only values fail the emptiness rule for trimming fields
    let trimming = [
        (FieldName::FirstName, "First name cannot be empty"),
        (FieldName::LastName, "Last name cannot be empty"),
        (FieldName::MobileNumber, "Mobile number cannot be empty"),
        (FieldName::Email, "Email cannot be empty"),
        (FieldName::ProfileLink, "Profile link cannot be empty"),
    ];
    for (field, message) in trimming {
        let outcome = service.validate_field(field, "   ", "", test_today());
        assert_eq!(outcome.error, message, "wrong message for {}", field);
    }

    // Password, confirmation and birth date check plain emptiness only
    let plain = [
        (FieldName::Password, "Password cannot be empty"),
        (FieldName::ConfirmPassword, "Please confirm your password"),
        (FieldName::BirthDate, "Birth date cannot be empty"),
    ];
    for (field, message) in plain {
        let outcome = service.validate_field(field, "", "", test_today());
        assert_eq!(outcome.error, message, "wrong message for {}", field);
    }
}

#[test]
fn test_validateField_firstNameScenarios_shouldMatchRuleOrder() {
    let service = ValidationService::new();

    let outcome = service.validate_field(FieldName::FirstName, "Al", "", test_today());
    assert_eq!(outcome.error, "First name must be at least 3 characters");

    // The digit check precedes the length check
    let outcome = service.validate_field(FieldName::FirstName, "Ann3", "", test_today());
    assert_eq!(outcome.error, "First name cannot contain numbers");
}

#[test]
fn test_validateField_mobileScenario_shouldReportDigitsRule() {
    let service = ValidationService::new();

    let outcome = service.validate_field(FieldName::MobileNumber, "12345abc67", "", test_today());
    assert_eq!(outcome.error, "Mobile number can only contain digits");
}

#[test]
fn test_validateField_passwordScenario_shouldReportUppercaseRule() {
    let service = ValidationService::new();

    let outcome = service.validate_field(FieldName::Password, "abcdefgh", "", test_today());
    assert_eq!(
        outcome.error,
        "Password must contain at least one uppercase letter"
    );
}

#[test]
fn test_validateField_onExactEighteenthBirthday_shouldPassWithAge() {
    let service = ValidationService::new();

    // Exactly 18 years before the fixed "today", same month and day
    let outcome = service.validate_field(FieldName::BirthDate, "2006-06-15", "", test_today());

    assert!(outcome.passed());
    assert_eq!(outcome.age, Some("18".to_string()));
}

#[test]
fn test_validateDraft_withValidDraft_shouldPassEveryField() {
    let service = ValidationService::new();

    let result = service.validate_draft(&valid_draft(), test_today());

    assert!(result.passed());
    assert_eq!(result.age, "34");
    for field in FieldName::ALL {
        assert_eq!(result.errors.get(field), "", "unexpected error for {}", field);
    }
}

#[test]
fn test_validateDraft_confirmationUsesDraftPassword() {
    let service = ValidationService::new();
    let mut draft = valid_draft();
    draft.password = "Wxyz123!".to_string();

    let result = service.validate_draft(&draft, test_today());

    assert_eq!(
        result.errors.get(FieldName::ConfirmPassword),
        "Passwords do not match"
    );
}

#[test]
fn test_validateDraft_isPureOverItsInputs() {
    let service = ValidationService::new();
    let draft = valid_draft();

    let first = service.validate_draft(&draft, test_today());
    let second = service.validate_draft(&draft, test_today());

    assert_eq!(first, second);
}

#[test]
fn test_withConfig_shouldThreadThresholdsIntoMessages() {
    let config = RulesConfig {
        min_name_length: 5,
        mobile_digits: 12,
        min_password_length: 10,
        adult_age: 21,
        max_age: 120,
    };
    let service = ValidationService::with_config(&config);

    let outcome = service.validate_field(FieldName::FirstName, "Anna", "", test_today());
    assert_eq!(outcome.error, "First name must be at least 5 characters");

    let outcome = service.validate_field(FieldName::MobileNumber, "0123456789", "", test_today());
    assert_eq!(outcome.error, "Mobile number must be 12 digits");

    let outcome = service.validate_field(FieldName::Password, "Abcd123!", "", test_today());
    assert_eq!(outcome.error, "Password must be at least 10 characters");

    let outcome = service.validate_field(FieldName::BirthDate, "2005-06-15", "", test_today());
    assert_eq!(outcome.error, "You must be at least 21 years old");
}
