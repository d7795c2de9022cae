//! Signal-backed toast notifier with timed auto-dismissal.

use leptos::prelude::{RwSignal, Update};

use crate::controller::Notifier;
use crate::state::ui::{ToastKind, ToastState};

/// [`Notifier`] that feeds the `ToastStack` component.
#[derive(Clone, Copy, Debug)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
    duration_ms: u32,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>, duration_ms: u32) -> Self {
        Self { toasts, duration_ms }
    }

    pub fn toasts(&self) -> RwSignal<ToastState> {
        self.toasts
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|t| t.dismiss(id));
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        match kind {
            ToastKind::Success => log::info!("toast: {message}"),
            ToastKind::Error => log::warn!("toast: {message}"),
        }
        let Some(id) = self.toasts.try_update(|t| t.push(kind, message)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let notifier = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(notifier.duration_ms))).await;
                notifier.dismiss(id);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
