//! Signed-in landing page.
//!
//! Anonymous visitors are sent to the login page once the stored session has
//! been read. Logout drops the stored record and leaves with a full-page
//! navigation.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::notifications::notify;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::{LOGIN_ROUTE, REDIRECT_DELAY_MS};
use crate::net::types::{SessionStart, User};
use crate::state::auth::{AuthState, clear_session};
use crate::state::notifications::{NotificationKind, NotificationState};
use crate::util::auth::install_unauth_redirect;
use crate::util::nav::redirect_after;
use crate::util::storage::BrowserStorage;

/// Initials for the avatar fallback, e.g. "Demo User" -> "DU".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// "Logged in" / "Joined" line for the session card.
pub fn session_label(user: &User) -> String {
    match &user.started {
        Some(SessionStart::LoginTime(at)) => format!("Logged in {at}"),
        Some(SessionStart::SignupTime(at)) => format!("Joined {at}"),
        None => "Signed in".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    install_unauth_redirect(auth, use_navigate());

    let logging_out = RwSignal::new(false);
    let on_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        if !clear_session(&BrowserStorage) {
            log::warn!("logout could not clear the stored session");
        }
        notify(notifications, NotificationKind::Success, "Logged out successfully");
        redirect_after(LOGIN_ROUTE, REDIRECT_DELAY_MS);
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <a href="/" class="nav-logo">"Warnesia"</a>
                <div class="dashboard-actions">
                    <ThemeToggle/>
                    <button
                        type="button"
                        class="btn btn-secondary logout-btn"
                        disabled=move || logging_out.get()
                        on:click=on_logout
                    >
                        <i class="fas fa-sign-out-alt"></i>
                        " Logout"
                    </button>
                </div>
            </header>
            <main class="dashboard-main">
                {move || {
                    auth.get()
                        .user
                        .map(|user| {
                            let avatar = user.avatar.clone();
                            let fallback = initials(&user.name);
                            view! {
                                <section class="user-card">
                                    <div class="user-avatar">
                                        {match avatar {
                                            Some(src) => view! { <img src=src alt="avatar"/> }.into_any(),
                                            None => view! { <span>{fallback}</span> }.into_any(),
                                        }}
                                    </div>
                                    <div class="user-info">
                                        <h2 class="user-name">"Welcome, " {user.name.clone()}</h2>
                                        <p class="user-email">{user.email.clone()}</p>
                                        <p class="user-session">{session_label(&user)}</p>
                                    </div>
                                </section>
                            }
                        })
                }}
            </main>
        </div>
    }
}
