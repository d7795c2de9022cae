//! Root application component with routing and context providers.

use std::future::Future;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::PanelConfig;
use crate::controller::{ContractPanel, FlowOutcome};
use crate::net::api::HttpContractApi;
use crate::pages::contracts::ContractsPage;
use crate::state::panel::PanelState;
use crate::state::ui::ToastState;
use crate::util::confirm::DialogConfirmer;
use crate::util::toast::ToastNotifier;

/// Controller wired to the browser collaborators.
pub type AppPanel = ContractPanel<HttpContractApi, ToastNotifier, DialogConfirmer, RwSignal<PanelState>>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the controller and provides it, its state, and the notification
/// collaborators to every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    let state = RwSignal::new(PanelState::default());
    let toasts = RwSignal::new(ToastState::default());
    let notifier = ToastNotifier::new(toasts, config.toast_duration_ms);
    let confirmer = DialogConfirmer::new();
    let panel: AppPanel =
        ContractPanel::new(HttpContractApi::from_config(&config), notifier, confirmer.clone(), state);

    provide_context(config);
    provide_context(state);
    provide_context(notifier);
    provide_context(confirmer);
    provide_context(panel);

    view! {
        <Stylesheet id="leptos" href="/pkg/contract-panel.css"/>
        <Title text="Contracts"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ContractsPage/>
                <Route path=StaticSegment("dashboard") view=ContractsPage/>
            </Routes>
        </Router>
    }
}

/// Run a controller flow on the UI task queue.
pub fn spawn_flow<F>(flow: F)
where
    F: Future<Output = FlowOutcome> + 'static,
{
    leptos::task::spawn_local(async move {
        let outcome = flow.await;
        log::debug!("flow finished: {outcome:?}");
    });
}

fn load_config() -> PanelConfig {
    #[cfg(feature = "hydrate")]
    {
        PanelConfig::from_document()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        PanelConfig::from_env()
    }
}
