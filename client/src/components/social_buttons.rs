//! Social sign-in buttons and other "coming soon" placeholders.

use leptos::prelude::*;

use super::notifications::notify;
use crate::config::PLACEHOLDER_THROTTLE_MS;
use crate::state::notifications::{NotificationKind, NotificationState};
use crate::state::ui::Placeholder;
use crate::util::clock::now_ms;
use crate::util::rate::Throttle;

/// Show the placeholder notice unless this control fired one recently.
pub fn show_placeholder(
    notifications: RwSignal<NotificationState>,
    gate: StoredValue<Throttle>,
    placeholder: Placeholder,
) {
    let now = now_ms();
    if gate.try_update_value(|t| t.try_acquire(now)).unwrap_or(false) {
        notify(notifications, NotificationKind::Info, placeholder.message());
    }
}

pub fn placeholder_gate() -> StoredValue<Throttle> {
    StoredValue::new(Throttle::new(f64::from(PLACEHOLDER_THROTTLE_MS)))
}

#[component]
pub fn SocialButtons() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let google_gate = placeholder_gate();
    let github_gate = placeholder_gate();

    view! {
        <div class="social-login">
            <div class="divider"><span>"or continue with"</span></div>
            <button
                type="button"
                class="btn btn-social btn-google"
                on:click=move |_| show_placeholder(notifications, google_gate, Placeholder::GoogleLogin)
            >
                <i class="fab fa-google"></i>
                " Google"
            </button>
            <button
                type="button"
                class="btn btn-social btn-github"
                on:click=move |_| show_placeholder(notifications, github_gate, Placeholder::GitHubLogin)
            >
                <i class="fab fa-github"></i>
                " GitHub"
            </button>
        </div>
    }
}
