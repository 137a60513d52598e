//! Per-field validation state and the presenter operations over it.
//!
//! DESIGN
//! ======
//! Each form owns one `FieldStates` value (inside an `RwSignal`). Rendering
//! derives the `.form-group` classes and the single `.validation-message`
//! node from it, so a field can never show two messages at once.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use std::collections::BTreeMap;

use crate::util::validate::validate_field;

/// Inputs that carry inline validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// DOM id and form-field name of the input.
    pub fn id(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

/// Visual state of one field group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Neutral,
    Error(String),
    Success,
}

impl FieldState {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            Self::Neutral | Self::Success => None,
        }
    }
}

/// What a field does when it loses focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlurRule {
    /// Re-run the field's live rule.
    #[default]
    Live,
    /// Leave the current state alone; input still clears it.
    Keep,
}

static NEUTRAL: FieldState = FieldState::Neutral;

/// Validation state for every field of one form. Absent entries are neutral.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldStates {
    states: BTreeMap<Field, FieldState>,
}

impl FieldStates {
    pub fn get(&self, field: Field) -> &FieldState {
        self.states.get(&field).unwrap_or(&NEUTRAL)
    }

    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).message()
    }

    /// Mark `field` as errored, replacing any previous message.
    pub fn show_field_error(&mut self, field: Field, message: impl Into<String>) {
        self.states.insert(field, FieldState::Error(message.into()));
    }

    /// Drop error and success markers along with the message.
    pub fn clear_field_error(&mut self, field: Field) {
        self.states.remove(&field);
    }

    pub fn show_field_success(&mut self, field: Field) {
        self.states.insert(field, FieldState::Success);
    }

    /// Blur-time check: reset the field, then re-apply the live rule.
    /// Returns `true` when the value passes.
    pub fn validate_live(&mut self, field: Field, raw: &str) -> bool {
        self.clear_field_error(field);
        match validate_field(field, raw) {
            Some(message) => {
                self.show_field_error(field, message);
                false
            }
            None => true,
        }
    }

    /// Apply `rule` for a blur on `field`. Returns `true` unless an error was shown.
    pub fn blur(&mut self, field: Field, raw: &str, rule: BlurRule) -> bool {
        match rule {
            BlurRule::Live => self.validate_live(field, raw),
            BlurRule::Keep => !self.get(field).is_error(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.states.values().any(FieldState::is_error)
    }

    /// Fields currently showing an error, in declaration order.
    pub fn errored(&self) -> Vec<Field> {
        self.states
            .iter()
            .filter(|(_, state)| state.is_error())
            .map(|(field, _)| *field)
            .collect()
    }

    /// Class list for the field's `.form-group` container.
    pub fn group_class(&self, field: Field) -> &'static str {
        match self.get(field) {
            FieldState::Neutral => "form-group",
            FieldState::Error(_) => "form-group error",
            FieldState::Success => "form-group success",
        }
    }
}
