//! Card for a single contract with usage bar and edit/delete actions.
//!
//! DESIGN
//! ======
//! Record values only reach the DOM as text nodes or attribute values, and
//! both actions are bound as Rust closures over the row's own `Contract`.

use leptos::prelude::*;

use crate::app::{AppPanel, spawn_flow};
use crate::state::contracts::ContractRow;

#[component]
pub fn ContractCard(row: ContractRow) -> impl IntoView {
    let panel = expect_context::<AppPanel>();

    let usage_label = row.usage_label();
    let bar_style = row.bar_style();
    let color = row.color.as_str();
    let ContractRow { contract, used, limit, limit_reached, last_checked, .. } = row;
    let name = contract.name.clone();
    let id = contract.id;

    let on_edit = {
        let panel = panel.clone();
        move |_| panel.begin_edit(&contract)
    };
    let on_delete = move |_| {
        let panel = panel.clone();
        spawn_flow(async move { panel.delete(id).await });
    };

    view! {
        <div class="contract-item" class:contract-item--limit-reached=limit_reached data-usage=color>
            <div class="contract-item__top">
                <div class="contract-item__name">{name}</div>
                <div class="contract-item__actions">
                    <button
                        class="contract-item__edit"
                        on:click=on_edit
                        title="Edit contract"
                        aria-label="Edit contract"
                    >
                        "✎"
                    </button>
                    <button
                        class="contract-item__delete"
                        on:click=on_delete
                        title="Delete contract"
                        aria-label="Delete contract"
                    >
                        "✕"
                    </button>
                </div>
            </div>
            <div class="contract-item__info">"Contacts Now: " {used}</div>
            <div class="contract-item__info">"Contacts Limit: " {limit}</div>
            <div class="usage-bar" title=usage_label>
                <div class="usage-bar__inner" style=bar_style></div>
            </div>
            <div class="contract-item__checked">"Last checked: " {last_checked}</div>
        </div>
    }
}
