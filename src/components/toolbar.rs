//! Panel header with the add and help actions.

use leptos::prelude::*;

use crate::app::AppPanel;

#[component]
pub fn PanelToolbar() -> impl IntoView {
    let panel = expect_context::<AppPanel>();
    let on_add = {
        let panel = panel.clone();
        move |_| panel.begin_create()
    };
    let on_help = move |_| panel.set_help_open(true);

    view! {
        <div class="toolbar">
            <span class="toolbar__title">"Contracts"</span>
            <span class="toolbar__spacer"></span>
            <button class="btn btn--primary toolbar__add" on:click=on_add>
                "+ Add Contract"
            </button>
            <button class="btn toolbar__help" on:click=on_help title="Help">
                "Help"
            </button>
        </div>
    }
}
