//! Form assemblers and submit-time validation.
//!
//! DESIGN
//! ======
//! Inputs write into a `FormValues` record keyed by field name (checkboxes
//! store `"on"` when checked, mirroring browser form encoding). On submit the
//! record is assembled into `LoginData` / `SignupData` and validated as a
//! whole; the result lists field errors and standalone notices separately.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;

use super::fields::{BlurRule, Field};
use crate::net::types::{LoginData, SignupData};
use crate::util::validate::{MIN_NAME_LEN, MSG_PASSWORD_TOO_SHORT, MSG_PASSWORDS_DIFFER, validate_email, validate_password};

pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_INVALID: &str = "Please enter a valid email";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";
pub const MSG_FIRST_NAME_SHORT: &str = "First name must be at least 2 characters";
pub const MSG_LAST_NAME_SHORT: &str = "Last name must be at least 2 characters";
pub const MSG_TERMS_REQUIRED: &str = "You must accept the Terms of Service";

const CHECKED: &str = "on";

/// Raw form contents keyed by input name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_owned(), value.into());
    }

    pub fn set_checked(&mut self, name: &str, checked: bool) {
        if checked {
            self.set(name, CHECKED);
        } else {
            self.values.remove(name);
        }
    }

    /// Current value, or `""` for untouched inputs.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.get(name) == CHECKED
    }
}

/// Login only checks the email format on blur; the password is just required.
pub fn login_blur_rule(field: Field) -> BlurRule {
    match field {
        Field::Email => BlurRule::Live,
        _ => BlurRule::Keep,
    }
}

pub fn assemble_login(values: &FormValues) -> LoginData {
    LoginData {
        email: values.get(Field::Email.id()).to_owned(),
        password: values.get(Field::Password.id()).to_owned(),
        remember: values.is_checked("remember"),
    }
}

pub fn assemble_signup(values: &FormValues) -> SignupData {
    SignupData {
        first_name: values.get(Field::FirstName.id()).to_owned(),
        last_name: values.get(Field::LastName.id()).to_owned(),
        email: values.get(Field::Email.id()).to_owned(),
        password: values.get(Field::Password.id()).to_owned(),
        confirm_password: values.get(Field::ConfirmPassword.id()).to_owned(),
        terms: values.is_checked("terms"),
        newsletter: values.is_checked("newsletter"),
    }
}

/// Everything that blocks a submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    /// Inline messages, at most one per field.
    pub fields: Vec<(Field, &'static str)>,
    /// Messages shown as standalone error notifications.
    pub notices: Vec<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.notices.is_empty()
    }

    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.fields.iter().find(|(f, _)| *f == field).map(|(_, m)| *m)
    }

    fn field(&mut self, field: Field, message: &'static str) {
        self.fields.push((field, message));
    }
}

fn check_email(errors: &mut FormErrors, email: &str) {
    if email.is_empty() {
        errors.field(Field::Email, MSG_EMAIL_REQUIRED);
    } else if !validate_email(email) {
        errors.field(Field::Email, MSG_EMAIL_INVALID);
    }
}

pub fn validate_login(data: &LoginData) -> FormErrors {
    let mut errors = FormErrors::default();
    check_email(&mut errors, &data.email);
    if data.password.is_empty() {
        errors.field(Field::Password, MSG_PASSWORD_REQUIRED);
    }
    errors
}

/// Only password length blocks signup; the remaining strength rules feed the
/// meter but are advisory.
pub fn validate_signup(data: &SignupData) -> FormErrors {
    let mut errors = FormErrors::default();

    if data.first_name.trim().chars().count() < MIN_NAME_LEN {
        errors.field(Field::FirstName, MSG_FIRST_NAME_SHORT);
    }
    if data.last_name.trim().chars().count() < MIN_NAME_LEN {
        errors.field(Field::LastName, MSG_LAST_NAME_SHORT);
    }

    check_email(&mut errors, &data.email);

    if data.password.is_empty() {
        errors.field(Field::Password, MSG_PASSWORD_REQUIRED);
    } else if !validate_password(&data.password).length {
        errors.field(Field::Password, MSG_PASSWORD_TOO_SHORT);
    }

    if data.password != data.confirm_password {
        errors.field(Field::ConfirmPassword, MSG_PASSWORDS_DIFFER);
    }

    if !data.terms {
        errors.notices.push(MSG_TERMS_REQUIRED);
    }
    errors
}
