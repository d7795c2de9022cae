//! Awaitable confirmation dialog backed by a prompt signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller awaits `Confirmer::confirm`; `ConfirmDialog` renders the
//! published prompt and calls `DialogConfirmer::answer` from its buttons.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::prelude::{RwSignal, Set};

use crate::controller::Confirmer;
use crate::state::ui::ConfirmPrompt;

/// Single pending yes/no answer.
#[derive(Clone, Debug, Default)]
pub struct ResponseSlot(Arc<Mutex<Option<oneshot::Sender<bool>>>>);

impl ResponseSlot {
    /// Wait for a new answer. An earlier unanswered question resolves as declined.
    pub fn arm(&self) -> oneshot::Receiver<bool> {
        let (tx, rx) = oneshot::channel();
        if let Ok(mut slot) = self.0.lock() {
            if let Some(previous) = slot.replace(tx) {
                let _ = previous.send(false);
            }
        }
        rx
    }

    /// Deliver `answer` to the pending question; `false` if none was pending.
    pub fn resolve(&self, answer: bool) -> bool {
        let pending = self.0.lock().ok().and_then(|mut slot| slot.take());
        pending.is_some_and(|tx| tx.send(answer).is_ok())
    }

    pub fn is_pending(&self) -> bool {
        self.0.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

/// [`Confirmer`] rendered by the `ConfirmDialog` component.
#[derive(Clone, Debug)]
pub struct DialogConfirmer {
    prompt: RwSignal<Option<ConfirmPrompt>>,
    slot: ResponseSlot,
}

impl Default for DialogConfirmer {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogConfirmer {
    pub fn new() -> Self {
        Self { prompt: RwSignal::new(None), slot: ResponseSlot::default() }
    }

    /// Prompt currently awaiting an answer, if any.
    pub fn prompt(&self) -> RwSignal<Option<ConfirmPrompt>> {
        self.prompt
    }

    /// Hide the dialog and resolve the pending question.
    pub fn answer(&self, confirmed: bool) {
        self.prompt.set(None);
        self.slot.resolve(confirmed);
    }
}

#[async_trait(?Send)]
impl Confirmer for DialogConfirmer {
    async fn confirm(&self, prompt: ConfirmPrompt) -> bool {
        let rx = self.slot.arm();
        self.prompt.set(Some(prompt));
        rx.await.unwrap_or(false)
    }
}
