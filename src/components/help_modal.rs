//! Modal explaining contract fields and usage bar colors.

use leptos::prelude::*;

use crate::state::form::FormField;
use crate::util::usage::UsageColor;

#[derive(Clone, Copy)]
struct HelpRow {
    topic: &'static str,
    detail: &'static str,
}

const FIELD_HELP: &[HelpRow] = &[
    HelpRow { topic: "Name", detail: "Display name for the contract. Required." },
    HelpRow { topic: "SFMC Subdomain", detail: "Marketing Cloud tenant subdomain used for API calls." },
    HelpRow { topic: "Client ID / Secret", detail: "Installed package credentials. The secret is never shown in the list." },
    HelpRow { topic: "DE Key", detail: "External key of the data extension holding the contact count." },
    HelpRow { topic: "Contacts Limit", detail: "Contracted contact count. Leave empty or 0 for no limit." },
    HelpRow { topic: "Slack User IDs", detail: "Comma-separated Slack users notified when usage is high." },
];

const COLOR_HELP: &[(UsageColor, &str)] = &[
    (UsageColor::Green, "Below 70% of the limit"),
    (UsageColor::Amber, "70% up to 90% of the limit"),
    (UsageColor::Red, "90% or more; the card is flagged once the limit is reached"),
];

/// Fullscreen help modal.
#[component]
pub fn HelpModal(on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="help-modal__backdrop" on:click=on_backdrop>
            <div class="help-modal" on:click=move |ev| ev.stop_propagation() on:keydown=move |ev| on_keydown.run(ev) tabindex="0">
                <div class="help-modal__header">
                    <h2>"Help"</h2>
                    <button class="help-modal__close" on:click=on_close_click title="Close help">
                        "✕"
                    </button>
                </div>
                <div class="help-modal__subtitle">"Contract fields"</div>
                <table class="help-modal__table">
                    <tbody>
                        {FIELD_HELP
                            .iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.topic}</td>
                                        <td>{row.detail}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
                <div class="help-modal__subtitle">"Usage bar"</div>
                <table class="help-modal__table">
                    <tbody>
                        {COLOR_HELP
                            .iter()
                            .map(|(color, detail)| {
                                let swatch = format!("background-color:{};", color.hex());
                                view! {
                                    <tr>
                                        <td><span class="help-modal__swatch" style=swatch></span></td>
                                        <td>{*detail}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
                <div class="help-modal__footer">
                    {format!("Only \"{}\" is required.", FormField::Name.label())}
                </div>
            </div>
        </div>
    }
}
