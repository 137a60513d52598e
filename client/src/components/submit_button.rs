//! Form submit button that reflects the submit phase.

use leptos::prelude::*;

use crate::state::submit::{LOADING_LABEL, SubmitPhase};

/// Disabled with a spinner while busy; shows `label` otherwise.
#[component]
pub fn SubmitButton(phase: RwSignal<SubmitPhase>, label: &'static str) -> impl IntoView {
    let busy = move || phase.with(SubmitPhase::button_busy);

    view! {
        <button type="submit" class="btn btn-primary btn-full" disabled=busy>
            {move || {
                if busy() {
                    view! {
                        <i class="fas fa-spinner fa-spin"></i>
                        " "
                        {LOADING_LABEL}
                    }
                        .into_any()
                } else {
                    label.into_any()
                }
            }}
        </button>
    }
}
