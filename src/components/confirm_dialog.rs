//! Yes/no dialog answering `DialogConfirmer` prompts.

use leptos::prelude::*;

use crate::util::confirm::DialogConfirmer;

/// Renders the pending confirmation prompt, if any.
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let confirmer = expect_context::<DialogConfirmer>();
    let prompt = confirmer.prompt();

    let on_cancel = {
        let confirmer = confirmer.clone();
        Callback::new(move |()| confirmer.answer(false))
    };
    let on_confirm = Callback::new(move |()| confirmer.answer(true));
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    });

    view! {
        {move || {
            prompt
                .get()
                .map(|p| {
                    view! {
                        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                            <div
                                class="dialog dialog--confirm"
                                role="alertdialog"
                                on:click=move |ev| ev.stop_propagation()
                                on:keydown=move |ev| on_keydown.run(ev)
                                tabindex="0"
                            >
                                <h2>{p.title}</h2>
                                <p class="dialog__danger">{p.text}</p>
                                <div class="dialog__actions">
                                    <button class="btn" on:click=move |_| on_cancel.run(())>
                                        {p.cancel_label}
                                    </button>
                                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                                        {p.confirm_label}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
