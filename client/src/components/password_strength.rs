//! Password strength meter for the signup form.

use leptos::prelude::*;

use crate::state::fields::Field;
use crate::state::forms::FormValues;
use crate::util::validate::password_strength;

#[component]
pub fn PasswordStrengthMeter(values: RwSignal<FormValues>) -> impl IntoView {
    let strength = move || values.with(|v| password_strength(v.get(Field::Password.id())));

    view! {
        <div
            id="passwordStrength"
            class=move || format!("password-strength {}", strength())
            data-strength=move || strength().as_str()
        >
            <div class="password-strength__bar"></div>
            <span class="password-strength__label">{move || strength().as_str()}</span>
        </div>
    }
}
