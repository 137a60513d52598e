//! Submit orchestration for the login and signup forms.
//!
//! DESIGN
//! ======
//! Each form moves through `SubmitPhase`:
//!
//! ```text
//! Idle --valid submit--> Submitting --resolve--> Succeeded (navigates away)
//!   ^                        |
//!   |                        +--reject--> Failed --resubmit--> Submitting
//!   +-- invalid submit (field errors / notices, no backend call)
//! ```
//!
//! The orchestrators are generic over the backend (`AuthBackend`) and over
//! the presentation surface (`SubmitView`), so the page wires signals in and
//! tests wire recorders in.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use super::fields::Field;
use super::forms::{FormErrors, validate_login, validate_signup};
use super::notifications::NotificationKind;
use crate::config::{DASHBOARD_ROUTE, REDIRECT_DELAY_MS};
use crate::net::auth::{AuthBackend, AuthError};
use crate::net::types::{LoginData, SignupData, User};

/// Label shown on the submit button while busy.
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded(User),
    Failed(String),
}

impl SubmitPhase {
    /// Whether a new submit event should start a flow.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed(_))
    }

    /// Blocking modal is up only while the backend call is outstanding.
    pub fn modal_visible(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Button stays disabled with the loading label until the redirect.
    pub fn button_busy(&self) -> bool {
        matches!(self, Self::Submitting | Self::Succeeded(_))
    }
}

/// Presentation side effects a submit flow needs.
pub trait SubmitView {
    fn set_phase(&self, phase: SubmitPhase);
    fn show_field_errors(&self, errors: &[(Field, &'static str)]);
    fn notify(&self, kind: NotificationKind, message: &str);
    fn redirect_after(&self, path: &'static str, delay_ms: u32);
}

struct FlowText {
    action: &'static str,
    success: &'static str,
    fallback: &'static str,
}

const LOGIN_TEXT: FlowText = FlowText {
    action: "login",
    success: "Login successful!",
    fallback: "Login failed. Please try again.",
};

const SIGNUP_TEXT: FlowText = FlowText {
    action: "signup",
    success: "Account created successfully!",
    fallback: "Signup failed. Please try again.",
};

/// The rejection's own message, or `fallback` when it has none.
pub fn failure_message(err: &AuthError, fallback: &str) -> String {
    let message = err.to_string();
    if message.is_empty() { fallback.to_owned() } else { message }
}

/// Surface validation errors; returns `true` when submission may proceed.
fn report_errors<V: SubmitView>(view: &V, errors: &FormErrors) -> bool {
    if !errors.fields.is_empty() {
        view.show_field_errors(&errors.fields);
    }
    for notice in &errors.notices {
        view.notify(NotificationKind::Error, notice);
    }
    errors.is_empty()
}

fn settle<V: SubmitView>(view: &V, result: Result<User, AuthError>, text: &FlowText) -> SubmitPhase {
    let phase = match result {
        Ok(user) => {
            log::info!("{} succeeded for {}", text.action, user.email);
            view.notify(NotificationKind::Success, text.success);
            view.redirect_after(DASHBOARD_ROUTE, REDIRECT_DELAY_MS);
            SubmitPhase::Succeeded(user)
        }
        Err(err) => {
            log::error!("{} error: {err:?}", text.action);
            let message = failure_message(&err, text.fallback);
            view.notify(NotificationKind::Error, &message);
            SubmitPhase::Failed(message)
        }
    };
    view.set_phase(phase.clone());
    phase
}

/// Run the login flow to completion and return the final phase.
pub async fn submit_login<B, V>(backend: &B, view: &V, data: LoginData) -> SubmitPhase
where
    B: AuthBackend,
    V: SubmitView,
{
    if !report_errors(view, &validate_login(&data)) {
        return SubmitPhase::Idle;
    }
    view.set_phase(SubmitPhase::Submitting);
    let result = backend.login(&data).await;
    settle(view, result, &LOGIN_TEXT)
}

/// Run the signup flow to completion and return the final phase.
pub async fn submit_signup<B, V>(backend: &B, view: &V, data: SignupData) -> SubmitPhase
where
    B: AuthBackend,
    V: SubmitView,
{
    if !report_errors(view, &validate_signup(&data)) {
        return SubmitPhase::Idle;
    }
    view.set_phase(SubmitPhase::Submitting);
    let result = backend.signup(&data).await;
    settle(view, result, &SIGNUP_TEXT)
}
