use super::*;

// =============================================================
// validate_email
// =============================================================

#[test]
fn validate_email_accepts_basic_address() {
    assert!(validate_email("a@b.co"));
    assert!(validate_email("demo@warnesia.com"));
}

#[test]
fn validate_email_rejects_missing_tld() {
    assert!(!validate_email("a@b"));
}

#[test]
fn validate_email_rejects_whitespace_and_empty() {
    assert!(!validate_email("a b@c.com"));
    assert!(!validate_email(""));
}

#[test]
fn validate_email_rejects_second_at_sign() {
    assert!(!validate_email("a@b@c.com"));
}

// =============================================================
// validate_password / password_strength
// =============================================================

#[test]
fn validate_password_all_rules_pass() {
    let checks = validate_password("Abc12345!");
    assert_eq!(
        checks,
        PasswordChecks { length: true, uppercase: true, lowercase: true, number: true, special: true }
    );
    assert_eq!(checks.score(), 5);
}

#[test]
fn validate_password_empty_fails_everything() {
    assert_eq!(validate_password(""), PasswordChecks::default());
}

#[test]
fn validate_password_ignores_unlisted_punctuation() {
    let checks = validate_password("abc-_~");
    assert!(!checks.special);
    assert!(checks.lowercase);
}

#[test]
fn strength_buckets_follow_score() {
    assert_eq!(password_strength("Abc12345!"), PasswordStrength::Strong);
    assert_eq!(password_strength("abc"), PasswordStrength::Weak);
    assert_eq!(password_strength(""), PasswordStrength::Weak);
    // lowercase + length
    assert_eq!(password_strength("abcdefgh"), PasswordStrength::Fair);
    // lowercase + length + digit + upper
    assert_eq!(password_strength("Abcdefg1"), PasswordStrength::Good);
}

#[test]
fn strength_renders_css_token() {
    assert_eq!(PasswordStrength::Good.to_string(), "good");
    assert_eq!(PasswordStrength::Weak.as_str(), "weak");
}

// =============================================================
// validate_field
// =============================================================

#[test]
fn validate_field_skips_empty_values() {
    assert_eq!(validate_field(Field::Email, "   "), None);
    assert_eq!(validate_field(Field::Password, ""), None);
}

#[test]
fn validate_field_trims_before_checking() {
    assert_eq!(validate_field(Field::Email, "  a@b.co  "), None);
    assert_eq!(validate_field(Field::FirstName, " J "), Some(MSG_NAME_TOO_SHORT));
}

#[test]
fn validate_field_reports_rule_messages() {
    assert_eq!(validate_field(Field::Email, "nope"), Some(MSG_INVALID_EMAIL_LIVE));
    assert_eq!(validate_field(Field::Password, "short"), Some(MSG_PASSWORD_TOO_SHORT));
    assert_eq!(validate_field(Field::LastName, "x"), Some(MSG_NAME_TOO_SHORT));
    assert_eq!(validate_field(Field::ConfirmPassword, "x"), None);
}

#[test]
fn password_mismatch_waits_for_confirmation_input() {
    assert_eq!(password_mismatch("secret123", ""), None);
    assert_eq!(password_mismatch("secret123", "secret12"), Some(MSG_PASSWORDS_DIFFER));
    assert_eq!(password_mismatch("secret123", "secret123"), None);
}
