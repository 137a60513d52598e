use super::*;

fn valid_signup() -> SignupData {
    SignupData {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "engine42".to_owned(),
        confirm_password: "engine42".to_owned(),
        terms: true,
        newsletter: false,
    }
}

// =============================================================
// Assemblers
// =============================================================

#[test]
fn assemble_login_reads_named_inputs() {
    let mut values = FormValues::default();
    values.set("email", "demo@warnesia.com");
    values.set("password", "password123");
    values.set_checked("remember", true);
    assert_eq!(
        assemble_login(&values),
        LoginData { email: "demo@warnesia.com".to_owned(), password: "password123".to_owned(), remember: true }
    );
}

#[test]
fn assemble_login_defaults_untouched_inputs() {
    assert_eq!(assemble_login(&FormValues::default()), LoginData::default());
}

#[test]
fn assemble_signup_reads_checkboxes() {
    let mut values = FormValues::default();
    values.set("firstName", "Ada");
    values.set("confirmPassword", "x");
    values.set_checked("terms", true);
    values.set_checked("newsletter", true);
    values.set_checked("newsletter", false);
    let data = assemble_signup(&values);
    assert_eq!(data.first_name, "Ada");
    assert_eq!(data.confirm_password, "x");
    assert!(data.terms);
    assert!(!data.newsletter);
}

#[test]
fn only_on_counts_as_checked() {
    let mut values = FormValues::default();
    values.set("terms", "yes");
    assert!(!values.is_checked("terms"));
}

// =============================================================
// validate_login
// =============================================================

#[test]
fn login_requires_email_and_password() {
    let errors = validate_login(&LoginData::default());
    assert_eq!(errors.message_for(Field::Email), Some(MSG_EMAIL_REQUIRED));
    assert_eq!(errors.message_for(Field::Password), Some(MSG_PASSWORD_REQUIRED));
    assert!(errors.notices.is_empty());
}

#[test]
fn login_rejects_malformed_email() {
    let data = LoginData { email: "demo@warnesia".to_owned(), password: "x".to_owned(), remember: false };
    let errors = validate_login(&data);
    assert_eq!(errors.fields, vec![(Field::Email, MSG_EMAIL_INVALID)]);
}

#[test]
fn login_accepts_any_nonempty_password() {
    let data = LoginData { email: "a@b.co".to_owned(), password: "x".to_owned(), remember: false };
    assert!(validate_login(&data).is_empty());
}

// =============================================================
// validate_signup
// =============================================================

#[test]
fn signup_valid_form_passes() {
    assert!(validate_signup(&valid_signup()).is_empty());
}

#[test]
fn signup_names_are_trimmed() {
    let data = SignupData { first_name: " A ".to_owned(), last_name: "  ".to_owned(), ..valid_signup() };
    let errors = validate_signup(&data);
    assert_eq!(errors.message_for(Field::FirstName), Some(MSG_FIRST_NAME_SHORT));
    assert_eq!(errors.message_for(Field::LastName), Some(MSG_LAST_NAME_SHORT));
}

#[test]
fn signup_password_length_blocks_but_strength_does_not() {
    let short = SignupData { password: "abc".to_owned(), confirm_password: "abc".to_owned(), ..valid_signup() };
    assert_eq!(validate_signup(&short).message_for(Field::Password), Some(MSG_PASSWORD_TOO_SHORT));

    let weak_but_long =
        SignupData { password: "aaaaaaaa".to_owned(), confirm_password: "aaaaaaaa".to_owned(), ..valid_signup() };
    assert!(validate_signup(&weak_but_long).is_empty());
}

#[test]
fn signup_empty_password_is_required() {
    let data = SignupData { password: String::new(), confirm_password: String::new(), ..valid_signup() };
    let errors = validate_signup(&data);
    assert_eq!(errors.message_for(Field::Password), Some(MSG_PASSWORD_REQUIRED));
    assert_eq!(errors.message_for(Field::ConfirmPassword), None);
}

#[test]
fn signup_mismatched_confirmation_errors_on_confirm_field() {
    let data = SignupData { confirm_password: "engine43".to_owned(), ..valid_signup() };
    let errors = validate_signup(&data);
    assert_eq!(errors.fields, vec![(Field::ConfirmPassword, MSG_PASSWORDS_DIFFER)]);
}

#[test]
fn signup_terms_surface_as_notice_not_field() {
    let data = SignupData { terms: false, ..valid_signup() };
    let errors = validate_signup(&data);
    assert!(errors.fields.is_empty());
    assert_eq!(errors.notices, vec![MSG_TERMS_REQUIRED]);
    assert!(!errors.is_empty());
}

// =============================================================
// Login blur behavior
// =============================================================

#[test]
fn login_password_blur_keeps_short_value_neutral() {
    use crate::state::fields::{FieldState, FieldStates};

    let mut states = FieldStates::default();
    assert!(states.blur(Field::Password, "abc", login_blur_rule(Field::Password)));
    assert_eq!(states.get(Field::Password), &FieldState::Neutral);
    assert_eq!(states.message(Field::Password), None);
}

#[test]
fn login_email_blur_still_checks_format() {
    use crate::state::fields::FieldStates;

    let mut states = FieldStates::default();
    assert!(!states.blur(Field::Email, "not-an-email", login_blur_rule(Field::Email)));
    assert!(states.message(Field::Email).is_some());
}
