//! Stack of transient success/error toasts.

use leptos::prelude::*;

use crate::util::toast::ToastNotifier;

/// Visible toasts; clicking one dismisses it early.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notifier = expect_context::<ToastNotifier>();
    let toasts = notifier.toasts();

    view! {
        <div class="toast-stack" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=format!("toast toast--{}", toast.kind.as_str())
                                role="status"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
