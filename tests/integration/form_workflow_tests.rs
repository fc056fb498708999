/*!
 * End-to-end form lifecycle tests
 *
 * These tests drive the controller the way the presentation layer does:
 * field-change events, a submit trigger and a back trigger, asserting the
 * full edit -> review -> edit cycle.
 */

use regcore::form::{FieldName, SubmitOutcome, ViewMode};

use crate::common::{fill_valid_draft, test_controller, valid_field_values};

#[test]
fn test_fullLifecycle_editSubmitReviewBack_shouldCycleCleanly() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut controller = test_controller();

    // Edit phase: fill every field, errors stay clear throughout
    fill_valid_draft(&mut controller);
    assert_eq!(controller.view_mode(), ViewMode::Editing);
    assert!(controller.errors().is_clear());
    assert_eq!(controller.age(), "34");

    // Submit phase: the record snapshots the pre-submit draft exactly
    let record = match controller.submit() {
        SubmitOutcome::Accepted(record) => record,
        SubmitOutcome::Rejected => panic!("valid draft was rejected"),
    };

    let expected: Vec<(FieldName, &str)> = valid_field_values()
        .into_iter()
        .filter(|(field, _)| *field != FieldName::ConfirmPassword)
        .collect();
    for (field, value) in &expected {
        let actual = match field {
            FieldName::FirstName => &record.first_name,
            FieldName::LastName => &record.last_name,
            FieldName::MobileNumber => &record.mobile_number,
            FieldName::BirthDate => &record.birth_date,
            FieldName::Email => &record.email,
            FieldName::Password => &record.password,
            FieldName::ProfileLink => &record.profile_link,
            FieldName::ConfirmPassword => unreachable!(),
        };
        assert_eq!(actual, value, "record mismatch for {}", field);
    }

    // Review phase: draft cleared, record on display
    assert_eq!(controller.view_mode(), ViewMode::Reviewing);
    assert!(controller.draft().is_empty());
    assert_eq!(controller.submitted_record(), Some(&record));

    // Back: record discarded, draft stays empty rather than restored
    controller.go_back().unwrap();
    assert_eq!(controller.view_mode(), ViewMode::Editing);
    assert!(controller.submitted_record().is_none());
    assert!(controller.draft().is_empty());
}

#[test]
fn test_rejectedSubmit_thenFix_shouldAcceptSecondAttempt() {
    let mut controller = test_controller();
    fill_valid_draft(&mut controller);
    controller.set_field(FieldName::Email, "not-an-email");

    assert_eq!(controller.submit(), SubmitOutcome::Rejected);
    assert_eq!(controller.view_mode(), ViewMode::Editing);
    assert_eq!(controller.errors().error_count(), 1);
    assert_eq!(controller.errors().get(FieldName::Email), "Email is not valid");

    // Every other value survived the rejected attempt
    assert_eq!(controller.draft().first_name, "Alice");

    controller.set_field(FieldName::Email, "alice@example.com");
    assert!(controller.submit().is_accepted());
    assert_eq!(controller.view_mode(), ViewMode::Reviewing);
}

#[test]
fn test_resubmitAfterBack_shouldRequireRefillingTheForm() {
    let mut controller = test_controller();
    fill_valid_draft(&mut controller);
    assert!(controller.submit().is_accepted());
    controller.go_back().unwrap();

    // The draft was not restored, so an immediate resubmit fails on
    // every field
    assert_eq!(controller.submit(), SubmitOutcome::Rejected);
    assert_eq!(controller.errors().error_count(), FieldName::ALL.len());

    fill_valid_draft(&mut controller);
    assert!(controller.submit().is_accepted());
}

#[test]
fn test_liveErrors_trackEachKeystroke() {
    let mut controller = test_controller();

    // Simulate typing "Alice" one character at a time
    for (value, expected) in [
        ("A", "First name must be at least 3 characters"),
        ("Al", "First name must be at least 3 characters"),
        ("Ali", ""),
        ("Alic", ""),
        ("Alice", ""),
    ] {
        controller.set_field(FieldName::FirstName, value);
        assert_eq!(controller.errors().get(FieldName::FirstName), expected);
    }
}

#[test]
fn test_independentControllers_shouldNotShareState() {
    let mut first = test_controller();
    let mut second = test_controller();

    fill_valid_draft(&mut first);
    second.set_field(FieldName::FirstName, "Al");

    assert!(first.submit().is_accepted());
    assert_eq!(first.view_mode(), ViewMode::Reviewing);
    assert_eq!(second.view_mode(), ViewMode::Editing);
    assert_eq!(
        second.errors().get(FieldName::FirstName),
        "First name must be at least 3 characters"
    );
}
