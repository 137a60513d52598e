use super::*;

// =============================================================
// Presenter operations
// =============================================================

#[test]
fn fields_start_neutral() {
    let states = FieldStates::default();
    assert_eq!(states.get(Field::Email), &FieldState::Neutral);
    assert_eq!(states.group_class(Field::Email), "form-group");
    assert!(!states.has_errors());
}

#[test]
fn show_field_error_sets_single_message() {
    let mut states = FieldStates::default();
    states.show_field_error(Field::Email, "Email is required");
    states.show_field_error(Field::Email, "Please enter a valid email");
    assert_eq!(states.message(Field::Email), Some("Please enter a valid email"));
    assert_eq!(states.group_class(Field::Email), "form-group error");
    assert_eq!(states.errored(), vec![Field::Email]);
}

#[test]
fn show_field_error_is_idempotent() {
    let mut once = FieldStates::default();
    once.show_field_error(Field::Password, "Password is required");
    let mut twice = once.clone();
    twice.show_field_error(Field::Password, "Password is required");
    assert_eq!(once, twice);
}

#[test]
fn clear_after_show_leaves_no_marker_or_message() {
    let mut states = FieldStates::default();
    states.show_field_error(Field::ConfirmPassword, "Passwords do not match");
    states.clear_field_error(Field::ConfirmPassword);
    assert_eq!(states.message(Field::ConfirmPassword), None);
    assert!(!states.get(Field::ConfirmPassword).is_error());
    assert_eq!(states, FieldStates::default());

    states.clear_field_error(Field::ConfirmPassword);
    assert_eq!(states, FieldStates::default());
}

#[test]
fn success_replaces_error() {
    let mut states = FieldStates::default();
    states.show_field_error(Field::FirstName, "too short");
    states.show_field_success(Field::FirstName);
    assert!(states.get(Field::FirstName).is_success());
    assert_eq!(states.message(Field::FirstName), None);
    assert_eq!(states.group_class(Field::FirstName), "form-group success");
}

#[test]
fn clear_removes_success_marker() {
    let mut states = FieldStates::default();
    states.show_field_success(Field::LastName);
    states.clear_field_error(Field::LastName);
    assert_eq!(states.get(Field::LastName), &FieldState::Neutral);
}

#[test]
fn fields_are_independent() {
    let mut states = FieldStates::default();
    states.show_field_error(Field::Email, "bad");
    states.show_field_error(Field::Password, "bad");
    states.clear_field_error(Field::Email);
    assert_eq!(states.errored(), vec![Field::Password]);
}

// =============================================================
// validate_live
// =============================================================

#[test]
fn validate_live_sets_and_clears_errors() {
    let mut states = FieldStates::default();
    assert!(!states.validate_live(Field::Email, "nope"));
    assert_eq!(states.message(Field::Email), Some("Please enter a valid email address"));
    assert!(states.validate_live(Field::Email, "a@b.co"));
    assert_eq!(states.get(Field::Email), &FieldState::Neutral);
}

#[test]
fn validate_live_accepts_empty_value() {
    let mut states = FieldStates::default();
    states.show_field_error(Field::Password, "Password is required");
    assert!(states.validate_live(Field::Password, ""));
    assert!(!states.has_errors());
}

#[test]
fn field_ids_match_markup() {
    assert_eq!(Field::Email.id(), "email");
    assert_eq!(Field::ConfirmPassword.id(), "confirmPassword");
    assert_eq!(Field::FirstName.id(), "firstName");
}

// =============================================================
// Blur rules
// =============================================================

#[test]
fn live_blur_applies_field_rule() {
    let mut states = FieldStates::default();
    assert!(!states.blur(Field::Password, "abc", BlurRule::Live));
    assert_eq!(states.group_class(Field::Password), "form-group error");
}

#[test]
fn keep_blur_leaves_existing_state_untouched() {
    let mut states = FieldStates::default();
    assert!(states.blur(Field::Password, "abc", BlurRule::Keep));
    assert_eq!(states.get(Field::Password), &FieldState::Neutral);

    states.show_field_error(Field::Password, "Password is required");
    assert!(!states.blur(Field::Password, "abc", BlurRule::Keep));
    assert_eq!(states.message(Field::Password), Some("Password is required"));
}
