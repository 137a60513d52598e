//! Notification stack and the `notify` entry point.

use leptos::prelude::*;

use crate::state::notifications::{NotificationKind, NotificationState};

/// Push a notification and schedule its removal after the configured TTL.
pub fn notify(state: RwSignal<NotificationState>, kind: NotificationKind, message: &str) {
    let Some(id) = state.try_update(|s| s.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::util::clock::sleep_ms(crate::config::NOTIFICATION_TTL_MS).await;
        state.try_update(|s| s.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Fixed-position stack of live notifications, each with a close button.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let state = expect_context::<RwSignal<NotificationState>>();

    view! {
        <div class="notification-stack">
            <For
                each=move || state.get().items().to_vec()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.class() role="status">
                            <div class="notification-content">
                                <i class=n.icon_class()></i>
                                <span>{n.message.clone()}</span>
                            </div>
                            <button
                                class="notification-close"
                                title="Dismiss"
                                on:click=move |_| {
                                    state.update(|s| {
                                        s.dismiss(id);
                                    });
                                }
                            >
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
