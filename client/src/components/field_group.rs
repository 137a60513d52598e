//! Labeled input bound to a form's values and validation state.
//!
//! The group owns the presenter behavior for one field: typing clears its
//! state, blur applies its `BlurRule`, and the `.validation-message` node is
//! derived from `FieldStates`, so at most one is ever rendered.

use leptos::prelude::*;

use crate::state::fields::{BlurRule, Field, FieldStates};
use crate::state::forms::FormValues;
use crate::state::ui::password_input_attrs;

#[component]
pub fn FieldGroup(
    field: Field,
    label: &'static str,
    values: RwSignal<FormValues>,
    fields: RwSignal<FieldStates>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    /// Blur behavior; the live rule unless the form says otherwise.
    #[prop(optional)]
    blur_rule: BlurRule,
    /// Enables the show/hide toggle for password inputs.
    #[prop(optional)]
    reveal: Option<RwSignal<bool>>,
    /// Runs after the value is stored and the field is cleared.
    #[prop(optional)]
    on_value: Option<Callback<String>>,
    /// Runs after the blur rule.
    #[prop(optional)]
    on_blur: Option<Callback<String>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let name = field.id();
    let current = move || values.with_untracked(|v| v.get(name).to_owned());
    let kind = move || reveal.map_or(input_type, |r| password_input_attrs(r.get()).0);

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        values.update(|v| v.set(name, value.clone()));
        fields.update(|f| f.clear_field_error(field));
        if let Some(cb) = on_value {
            cb.run(value);
        }
    };

    let on_focus_out = move |_| {
        let value = current();
        fields.update(|f| {
            f.blur(field, &value, blur_rule);
        });
        if let Some(cb) = on_blur {
            cb.run(value);
        }
    };

    view! {
        <div class=move || fields.with(|f| f.group_class(field))>
            <label for=name>{label}</label>
            <div class="input-wrap">
                <input
                    id=name
                    name=name
                    type=kind
                    placeholder=placeholder
                    required=true
                    prop:value=move || values.with(|v| v.get(name).to_owned())
                    on:input=on_input
                    on:blur=on_focus_out
                />
                {reveal
                    .map(|r| {
                        view! {
                            <button
                                type="button"
                                class="password-toggle"
                                title="Show or hide password"
                                on:click=move |_| r.update(|visible| *visible = !*visible)
                            >
                                <i id="passwordToggleIcon" class=move || password_input_attrs(r.get()).1></i>
                            </button>
                        }
                    })}
            </div>
            {children.map(|c| c())}
            {move || {
                fields
                    .with(|f| f.message(field).map(str::to_owned))
                    .map(|message| view! { <div class="validation-message error">{message}</div> })
            }}
        </div>
    }
}
