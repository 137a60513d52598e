//! Public landing page with session-aware navigation.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::{LOGIN_ROUTE, SIGNUP_ROUTE};
use crate::state::auth::AuthState;
use crate::state::ui::{NavLinks, UiState};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let links = move || NavLinks::for_session(auth.with(AuthState::is_authenticated));
    let nav_class = move || if ui.with(|u| u.nav_open) { "nav-menu active" } else { "nav-menu" };

    view! {
        <header class="navbar">
            <div class="nav-container">
                <a href="/" class="nav-logo">"Warnesia"</a>
                <ul class=nav_class>
                    <li><a href="#features" class="nav-link">"Features"</a></li>
                    <Show when=move || links().show_login>
                        <li><a href=LOGIN_ROUTE class="nav-link">"Login"</a></li>
                    </Show>
                    <li>
                        <a href=move || links().signup_href class="nav-link btn btn-primary">
                            {move || links().signup_label}
                        </a>
                    </li>
                    <li><ThemeToggle/></li>
                </ul>
                <button
                    type="button"
                    class=move || if ui.with(|u| u.nav_open) { "hamburger active" } else { "hamburger" }
                    title="Menu"
                    on:click=move |_| ui.update(|u| u.nav_open = !u.nav_open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </header>
        <main class="hero">
            <h1>"Warnesia"</h1>
            <p class="hero-subtitle">"Everything your team needs, in one place."</p>
            <div class="hero-actions">
                <a href=SIGNUP_ROUTE class="btn btn-primary">"Get Started"</a>
                <a href=LOGIN_ROUTE class="btn btn-secondary">"Sign In"</a>
            </div>
        </main>
        <section id="features" class="features">
            <div class="feature-card">
                <i class="fas fa-bolt"></i>
                <h3>"Fast"</h3>
                <p>"Pages load instantly and stay responsive."</p>
            </div>
            <div class="feature-card">
                <i class="fas fa-shield-alt"></i>
                <h3>"Secure"</h3>
                <p>"Your account details stay on your device."</p>
            </div>
            <div class="feature-card">
                <i class="fas fa-moon"></i>
                <h3>"Comfortable"</h3>
                <p>"Switch between light and dark themes any time."</p>
            </div>
        </section>
    }
}
