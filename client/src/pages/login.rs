//! Login page: email + password against the simulated auth backend.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::form_view::SignalSubmitView;
use crate::components::field_group::FieldGroup;
use crate::components::loading_modal::LoadingModal;
use crate::components::social_buttons::{SocialButtons, placeholder_gate, show_placeholder};
use crate::components::submit_button::SubmitButton;
use crate::config::{AuthSimConfig, HOME_ROUTE, LOGIN_ROUTE, SIGNUP_ROUTE};
use crate::net::auth::SimulatedAuth;
use crate::state::auth::AuthState;
use crate::state::fields::Field;
use crate::state::forms::{FormValues, assemble_login, login_blur_rule};
use crate::state::notifications::NotificationState;
use crate::state::submit::submit_login;
use crate::state::ui::Placeholder;
use crate::util::auth::install_auth_page_redirect;
use crate::util::storage::BrowserStorage;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    install_auth_page_redirect(auth, LOGIN_ROUTE, use_navigate());

    let form = SignalSubmitView::new(notifications);
    let values = RwSignal::new(FormValues::default());
    let reveal = RwSignal::new(false);
    let forgot_gate = placeholder_gate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.accepts_submit() {
            return;
        }
        let data = values.with_untracked(assemble_login);
        leptos::task::spawn_local(async move {
            let backend = SimulatedAuth::new(BrowserStorage, AuthSimConfig::default());
            submit_login(&backend, &form, data).await;
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href=HOME_ROUTE class="auth-logo">"Warnesia"</a>
                <h1>"Welcome back"</h1>
                <p class="auth-subtitle">"Sign in to continue"</p>
                <form id="loginForm" class="auth-form" novalidate=true on:submit=on_submit>
                    <FieldGroup
                        field=Field::Email
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        values=values
                        fields=form.fields
                        blur_rule=login_blur_rule(Field::Email)
                    />
                    <FieldGroup
                        field=Field::Password
                        label="Password"
                        placeholder="Your password"
                        values=values
                        fields=form.fields
                        blur_rule=login_blur_rule(Field::Password)
                        reveal=reveal
                    />
                    <div class="form-options">
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                name="remember"
                                on:change=move |ev| {
                                    values.update(|v| v.set_checked("remember", event_target_checked(&ev)));
                                }
                            />
                            " Remember me"
                        </label>
                        <a
                            href="#"
                            class="forgot-password"
                            on:click=move |ev| {
                                ev.prevent_default();
                                show_placeholder(notifications, forgot_gate, Placeholder::ForgotPassword);
                            }
                        >
                            "Forgot password?"
                        </a>
                    </div>
                    <SubmitButton phase=form.phase label="Sign In"/>
                </form>
                <SocialButtons/>
                <p class="auth-switch">
                    "Don't have an account? "
                    <a href=SIGNUP_ROUTE>"Sign up"</a>
                </p>
            </div>
            <LoadingModal visible=form.modal_visible()/>
        </div>
    }
}
