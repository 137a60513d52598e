//! Field validators for the login and signup forms.
//!
//! DESIGN
//! ======
//! Every function here is pure: it inspects one value (or one pair of values
//! for confirmation) and never touches presentation state. Callers translate
//! results into `FieldState` through the presenter in `state::fields`.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::state::fields::Field;

/// Minimum password length accepted by both live and submit validation.
pub const MIN_PASSWORD_LEN: usize = 8;
/// Minimum trimmed length for first and last names.
pub const MIN_NAME_LEN: usize = 2;
/// Punctuation accepted by the `special` password rule.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

pub const MSG_INVALID_EMAIL_LIVE: &str = "Please enter a valid email address";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const MSG_NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const MSG_PASSWORDS_DIFFER: &str = "Passwords do not match";

fn email_regex() -> &'static Regex {
    static VALUE: OnceLock<Regex> = OnceLock::new();
    VALUE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// Returns `true` when `value` looks like `local@domain.tld`.
pub fn validate_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Outcome of each password rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PasswordChecks {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordChecks {
    /// Number of rules that passed.
    pub fn score(self) -> usize {
        [self.length, self.uppercase, self.lowercase, self.number, self.special]
            .into_iter()
            .filter(|passed| *passed)
            .count()
    }
}

/// Run every password rule against `value`.
pub fn validate_password(value: &str) -> PasswordChecks {
    PasswordChecks {
        length: value.chars().count() >= MIN_PASSWORD_LEN,
        uppercase: value.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: value.chars().any(|c| c.is_ascii_lowercase()),
        number: value.chars().any(|c| c.is_ascii_digit()),
        special: value.chars().any(|c| SPECIAL_CHARS.contains(c)),
    }
}

/// Coarse strength bucket shown by the signup strength meter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    #[default]
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Strong => "strong",
        }
    }

    fn from_score(score: usize) -> Self {
        match score {
            0 | 1 => Self::Weak,
            2 | 3 => Self::Fair,
            4 => Self::Good,
            _ => Self::Strong,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn password_strength(value: &str) -> PasswordStrength {
    PasswordStrength::from_score(validate_password(value).score())
}

/// Live (blur-time) validation for a single field.
///
/// Empty values pass here; "required" is only enforced on submit.
pub fn validate_field(field: Field, raw: &str) -> Option<&'static str> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    match field {
        Field::Email if !validate_email(value) => Some(MSG_INVALID_EMAIL_LIVE),
        Field::Password if value.chars().count() < MIN_PASSWORD_LEN => Some(MSG_PASSWORD_TOO_SHORT),
        Field::FirstName | Field::LastName if value.chars().count() < MIN_NAME_LEN => Some(MSG_NAME_TOO_SHORT),
        _ => None,
    }
}

/// Live confirmation check; silent until the confirmation has content.
pub fn password_mismatch(password: &str, confirm: &str) -> Option<&'static str> {
    (!confirm.is_empty() && password != confirm).then_some(MSG_PASSWORDS_DIFFER)
}
