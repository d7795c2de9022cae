//! List container showing one card per contract, or a placeholder.

use leptos::prelude::*;

use crate::components::contract_card::ContractCard;
use crate::state::contracts::{EMPTY_LIST_MESSAGE, LOADING_MESSAGE, ListView};
use crate::state::panel::PanelState;

#[component]
pub fn ContractList() -> impl IntoView {
    let state = expect_context::<RwSignal<PanelState>>();
    // Form and help-modal edits must not rebuild the cards.
    let contracts = Memo::new(move |_| state.with(|s| s.contracts.clone()));
    let refreshing = Memo::new(move |_| contracts.with(|c| c.is_refreshing()));

    view! {
        <div class="contracts-list" class:contracts-list--refreshing=move || refreshing.get()>
            {move || match contracts.with(|c| c.list_view()) {
                ListView::Loading => {
                    view! { <p class="contracts-list__placeholder">{LOADING_MESSAGE}</p> }.into_any()
                }
                ListView::Empty => {
                    view! { <p class="contracts-list__placeholder">{EMPTY_LIST_MESSAGE}</p> }.into_any()
                }
                ListView::Items(rows) => {
                    rows.into_iter()
                        .map(|row| view! { <ContractCard row=row/> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
