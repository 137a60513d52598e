//! Signup page: account details, password strength, and terms acceptance.
//!
//! The confirmation field is checked against the password on a trailing
//! debounce while typing and immediately on blur.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::form_view::SignalSubmitView;
use crate::components::field_group::FieldGroup;
use crate::components::loading_modal::LoadingModal;
use crate::components::password_strength::PasswordStrengthMeter;
use crate::components::social_buttons::SocialButtons;
use crate::components::submit_button::SubmitButton;
use crate::config::{AuthSimConfig, CONFIRM_DEBOUNCE_MS, HOME_ROUTE, LOGIN_ROUTE, SIGNUP_ROUTE};
use crate::net::auth::SimulatedAuth;
use crate::state::auth::AuthState;
use crate::state::fields::{Field, FieldStates};
use crate::state::forms::{FormValues, assemble_signup};
use crate::state::notifications::NotificationState;
use crate::state::submit::submit_signup;
use crate::util::auth::install_auth_page_redirect;
use crate::util::clock::{now_ms, sleep_ms};
use crate::util::rate::Debounce;
use crate::util::storage::BrowserStorage;
use crate::util::validate::password_mismatch;

/// Mark the confirmation field from the current password pair.
fn check_confirmation(values: RwSignal<FormValues>, fields: RwSignal<FieldStates>) {
    let mismatch = values.with_untracked(|v| {
        password_mismatch(v.get(Field::Password.id()), v.get(Field::ConfirmPassword.id()))
    });
    fields.try_update(|f| {
        f.clear_field_error(Field::ConfirmPassword);
        if let Some(message) = mismatch {
            f.show_field_error(Field::ConfirmPassword, message);
        }
    });
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    install_auth_page_redirect(auth, SIGNUP_ROUTE, use_navigate());

    let form = SignalSubmitView::new(notifications);
    let fields = form.fields;
    let values = RwSignal::new(FormValues::default());
    let reveal = RwSignal::new(false);
    let debounce = StoredValue::new(Debounce::trailing(f64::from(CONFIRM_DEBOUNCE_MS)));

    let schedule_confirm_check = Callback::new(move |_: String| {
        debounce.update_value(|d| {
            d.call(now_ms());
        });
        leptos::task::spawn_local(async move {
            sleep_ms(CONFIRM_DEBOUNCE_MS).await;
            if debounce.try_update_value(|d| d.poll(now_ms())).unwrap_or(false) {
                check_confirmation(values, fields);
            }
        });
    });
    let confirm_now = Callback::new(move |_: String| check_confirmation(values, fields));
    let password_input = Callback::new(move |value: String| {
        fields.update(|f| {
            f.validate_live(Field::Password, &value);
        });
        schedule_confirm_check.run(value);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.accepts_submit() {
            return;
        }
        let data = values.with_untracked(assemble_signup);
        leptos::task::spawn_local(async move {
            let backend = SimulatedAuth::new(BrowserStorage, AuthSimConfig::default());
            submit_signup(&backend, &form, data).await;
        });
    };

    let checkbox = move |name: &'static str| {
        move |ev: leptos::ev::Event| values.update(|v| v.set_checked(name, event_target_checked(&ev)))
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <a href=HOME_ROUTE class="auth-logo">"Warnesia"</a>
                <h1>"Create your account"</h1>
                <p class="auth-subtitle">"Start for free"</p>
                <form id="signupForm" class="auth-form" novalidate=true on:submit=on_submit>
                    <div class="form-row">
                        <FieldGroup field=Field::FirstName label="First name" values=values fields=fields/>
                        <FieldGroup field=Field::LastName label="Last name" values=values fields=fields/>
                    </div>
                    <FieldGroup
                        field=Field::Email
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        values=values
                        fields=fields
                    />
                    <FieldGroup
                        field=Field::Password
                        label="Password"
                        placeholder="At least 8 characters"
                        values=values
                        fields=fields
                        reveal=reveal
                        on_value=password_input
                    >
                        <PasswordStrengthMeter values=values/>
                    </FieldGroup>
                    <FieldGroup
                        field=Field::ConfirmPassword
                        label="Confirm password"
                        input_type="password"
                        values=values
                        fields=fields
                        on_value=schedule_confirm_check
                        on_blur=confirm_now
                    />
                    <label class="checkbox">
                        <input type="checkbox" name="terms" on:change=checkbox("terms")/>
                        " I agree to the Terms of Service"
                    </label>
                    <label class="checkbox">
                        <input type="checkbox" name="newsletter" on:change=checkbox("newsletter")/>
                        " Send me product news"
                    </label>
                    <SubmitButton phase=form.phase label="Create Account"/>
                </form>
                <SocialButtons/>
                <p class="auth-switch">
                    "Already have an account? "
                    <a href=LOGIN_ROUTE>"Sign in"</a>
                </p>
            </div>
            <LoadingModal visible=form.modal_visible()/>
        </div>
    }
}
