//! Local UI chrome state (theme, nav menu, placeholders).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of the auth and form state so navigation
//! chrome can change without touching submit flows.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::config::{DASHBOARD_ROUTE, SIGNUP_ROUTE};
use crate::util::theme::Theme;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    /// Mobile navigation menu expanded.
    pub nav_open: bool,
}

/// Header links on public pages, adjusted for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLinks {
    pub show_login: bool,
    pub signup_label: &'static str,
    pub signup_href: &'static str,
}

impl NavLinks {
    pub fn for_session(logged_in: bool) -> Self {
        if logged_in {
            Self { show_login: false, signup_label: "Dashboard", signup_href: DASHBOARD_ROUTE }
        } else {
            Self { show_login: true, signup_label: "Sign Up", signup_href: SIGNUP_ROUTE }
        }
    }
}

/// `type` attribute and icon class for a password input.
pub fn password_input_attrs(visible: bool) -> (&'static str, &'static str) {
    if visible { ("text", "fas fa-eye-slash") } else { ("password", "fas fa-eye") }
}

/// Features that are linked from the auth pages but not built yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    GoogleLogin,
    GitHubLogin,
    ForgotPassword,
}

impl Placeholder {
    pub fn message(self) -> &'static str {
        match self {
            Self::GoogleLogin => "Google login integration coming soon!",
            Self::GitHubLogin => "GitHub login integration coming soon!",
            Self::ForgotPassword => "Password reset feature coming soon!",
        }
    }
}
