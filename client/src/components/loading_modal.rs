//! Blocking overlay shown while a simulated auth call is outstanding.

use leptos::prelude::*;

#[component]
pub fn LoadingModal(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            id="loadingModal"
            class="modal loading-modal"
            style:display=move || if visible.get() { "block" } else { "none" }
            aria-busy=move || visible.get().to_string()
        >
            <div class="modal-content">
                <div class="spinner"></div>
                <p>"Please wait..."</p>
            </div>
        </div>
    }
}
