//! Contracts page: list, toolbar, and the dialogs layered over them.
//!
//! SYSTEM CONTEXT
//! ==============
//! The first refresh runs once on mount; every later refresh is triggered
//! by a controller flow or the retry button.

use leptos::prelude::*;

use crate::app::{AppPanel, spawn_flow};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::contract_form::ContractFormDialog;
use crate::components::contract_list::ContractList;
use crate::components::help_modal::HelpModal;
use crate::components::toast_stack::ToastStack;
use crate::components::toolbar::PanelToolbar;
use crate::state::panel::PanelState;

#[component]
pub fn ContractsPage() -> impl IntoView {
    let panel = expect_context::<AppPanel>();
    let state = expect_context::<RwSignal<PanelState>>();

    {
        let panel = panel.clone();
        Effect::new(move |ran: Option<()>| {
            if ran.is_none() {
                let panel = panel.clone();
                spawn_flow(async move { panel.refresh().await });
            }
        });
    }

    let on_retry = {
        let panel = panel.clone();
        move |_| {
            let panel = panel.clone();
            spawn_flow(async move { panel.refresh().await });
        }
    };
    let on_help_close = Callback::new(move |()| panel.set_help_open(false));

    view! {
        <div class="contracts-page">
            <PanelToolbar/>
            <Show when=move || state.with(|s| s.contracts.error.is_some())>
                <div class="contracts-page__error" role="alert">
                    <span>{move || state.with(|s| s.contracts.error.clone().unwrap_or_default())}</span>
                    <button class="btn" on:click=on_retry.clone()>
                        "Retry"
                    </button>
                </div>
            </Show>
            <ContractList/>
            <Show when=move || state.with(|s| s.form.open)>
                <ContractFormDialog/>
            </Show>
            <Show when=move || state.with(|s| s.help_open)>
                <HelpModal on_close=on_help_close/>
            </Show>
            <ConfirmDialog/>
            <ToastStack/>
        </div>
    }
}
