//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages bounce anonymous visitors to the login page, and the
//! login/signup pages bounce signed-in visitors to the dashboard. Both guards
//! wait until the stored session has been read.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::{DASHBOARD_ROUTE, LOGIN_ROUTE, SIGNUP_ROUTE};
use crate::state::auth::AuthState;

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Destination for a signed-in visitor landing on `path`, if it is an auth page.
pub fn auth_page_redirect(path: &str, state: &AuthState) -> Option<&'static str> {
    if state.loading || state.user.is_none() {
        return None;
    }
    let path = path.trim_end_matches('/');
    (path.ends_with(LOGIN_ROUTE) || path.ends_with(SIGNUP_ROUTE)).then_some(DASHBOARD_ROUTE)
}

/// Redirect to the login page whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Redirect away from `path` (login or signup) once a stored user is known.
pub fn install_auth_page_redirect<F>(auth: RwSignal<AuthState>, path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = auth_page_redirect(path, &auth.get()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
