//! Add/edit contract dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs are bound to `PanelState.form.fields`; the controller decides on
//! submit whether this is a create or an update.

use leptos::prelude::*;

use crate::app::{AppPanel, spawn_flow};
use crate::state::form::FormField;
use crate::state::panel::PanelState;

/// Modal form for creating or editing a contract.
#[component]
pub fn ContractFormDialog() -> impl IntoView {
    let panel = expect_context::<AppPanel>();
    let state = expect_context::<RwSignal<PanelState>>();

    let on_cancel = {
        let panel = panel.clone();
        Callback::new(move |()| panel.cancel_form())
    };
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    });
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let panel = panel.clone();
        spawn_flow(async move { panel.submit().await });
    };

    view! {
        <div class="dialog-backdrop">
            <form
                class="dialog dialog--contract"
                on:submit=on_submit
                on:keydown=move |ev| on_keydown.run(ev)
            >
                <h2>{move || state.with(|s| s.form.title())}</h2>
                {FormField::ALL.into_iter().map(|field| view! { <FormInput field=field/> }).collect_view()}
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="btn btn--primary"
                        disabled=move || state.with(|s| s.form.submitting)
                    >
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn FormInput(field: FormField) -> impl IntoView {
    let panel = expect_context::<AppPanel>();
    let state = expect_context::<RwSignal<PanelState>>();

    view! {
        <label class="dialog__label">
            {field.label()}
            <input
                class="dialog__input"
                type=field.input_type()
                name=field.key()
                placeholder=field.placeholder()
                required=field.required()
                min=(field == FormField::ContactsLimit).then_some("0")
                prop:value=move || state.with(|s| s.form.fields.get(field).to_owned())
                on:input=move |ev| panel.set_field(field, event_target_value(&ev))
            />
        </label>
    }
}
