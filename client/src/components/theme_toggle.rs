//! Light/dark theme switch.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;
use crate::util::theme::{self, Theme};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let next = theme::toggle(&BrowserStorage, ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    view! {
        <button type="button" class="theme-toggle" title="Toggle theme" on:click=on_click>
            <i class=move || {
                if ui.with(|u| u.theme == Theme::Dark) { "fas fa-sun" } else { "fas fa-moon" }
            }></i>
        </button>
    }
}
