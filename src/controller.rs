//! Contract panel controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller drives the three user flows (list refresh, form submit,
//! confirmed delete) against an injected API, notifier, and confirmer, and
//! writes all transient UI state through a `PanelStore`. Components only
//! forward user events here.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is reported to the user at the flow boundary and returned as
//! a [`FlowOutcome`]; nothing is retried and nothing propagates further.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use async_trait::async_trait;

use crate::net::api::ContractApi;
use crate::net::types::{Contract, ContractId};
use crate::state::contracts::FetchApplied;
use crate::state::form::FormField;
use crate::state::panel::PanelStore;
use crate::state::ui::{ConfirmPrompt, ToastKind};

/// Transient user-facing message sink.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str);
}

/// Blocking yes/no decision for destructive actions.
#[async_trait(?Send)]
pub trait Confirmer {
    async fn confirm(&self, prompt: ConfirmPrompt) -> bool;
}

/// How a flow ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowOutcome {
    Completed,
    /// The backend or transport reported a failure; the user was notified.
    Failed,
    /// Form input did not validate; no request was sent.
    Invalid,
    /// The user declined the confirmation; no request was sent.
    Declined,
    /// Superseded, already in flight, or the store is gone.
    Ignored,
}

#[derive(Clone, Debug)]
pub struct ContractPanel<A, N, C, S> {
    api: A,
    notifier: N,
    confirmer: C,
    store: S,
}

impl<A, N, C, S> ContractPanel<A, N, C, S>
where
    A: ContractApi,
    N: Notifier,
    C: Confirmer,
    S: PanelStore,
{
    pub fn new(api: A, notifier: N, confirmer: C, store: S) -> Self {
        Self { api, notifier, confirmer, store }
    }

    /// Fetch the whole collection and replace the rendered list.
    ///
    /// Only the most recently started refresh is applied.
    pub async fn refresh(&self) -> FlowOutcome {
        let Some(generation) = self.store.update_panel(|s| s.contracts.begin_fetch()) else {
            return FlowOutcome::Ignored;
        };
        log::debug!("refreshing contracts (generation {generation})");

        let result = self.api.list_contracts().await;
        if let Err(err) = &result {
            log::warn!("contract list fetch failed: {err}");
        }

        match self.store.update_panel(|s| s.contracts.apply_fetch(generation, result)) {
            Some(FetchApplied::Loaded { count }) => {
                log::debug!("applied {count} contracts (generation {generation})");
                FlowOutcome::Completed
            }
            Some(FetchApplied::Failed { message }) => {
                self.notifier.notify(ToastKind::Error, &format!("Error loading contracts: {message}"));
                FlowOutcome::Failed
            }
            Some(FetchApplied::Stale) | None => {
                log::debug!("discarding stale contract list (generation {generation})");
                FlowOutcome::Ignored
            }
        }
    }

    /// Open a blank form; the next submit creates a record.
    pub fn begin_create(&self) {
        self.store.update_panel(|s| s.form.open_create());
    }

    /// Open the form pre-filled from `contract`; the next submit updates it.
    pub fn begin_edit(&self, contract: &Contract) {
        self.store.update_panel(|s| s.form.open_edit(contract));
    }

    /// Close the form and leave edit mode.
    pub fn cancel_form(&self) {
        self.store.update_panel(|s| s.form.close());
    }

    pub fn set_field(&self, field: FormField, value: String) {
        self.store.update_panel(|s| s.form.fields.set(field, value));
    }

    pub fn set_help_open(&self, open: bool) {
        self.store.update_panel(|s| s.help_open = open);
    }

    /// Submit the form as a create or an update depending on edit mode.
    ///
    /// On failure the form stays open with its values and edit mode intact.
    pub async fn submit(&self) -> FlowOutcome {
        let Some((submitting, session, editing_id, fields)) = self
            .store
            .read_panel(|s| (s.form.submitting, s.form.session, s.form.editing_id, s.form.fields.clone()))
        else {
            return FlowOutcome::Ignored;
        };
        if submitting {
            log::debug!("submit ignored; a request is already in flight");
            return FlowOutcome::Ignored;
        }

        let payload = match fields.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                self.notifier.notify(ToastKind::Error, &format!("Error: {err}"));
                return FlowOutcome::Invalid;
            }
        };

        self.store.update_panel(|s| s.form.submitting = true);
        let result = match editing_id {
            Some(id) => self.api.update_contract(id, &payload).await,
            None => self.api.create_contract(&payload).await.map(|_| ()),
        };
        self.store.update_panel(|s| s.form.submitting = false);

        match result {
            Ok(()) => {
                let message = if let Some(id) = editing_id {
                    log::info!("updated contract {id}");
                    "Contract updated successfully"
                } else {
                    log::info!("created contract {:?}", payload.name);
                    "Contract added successfully"
                };
                self.store.update_panel(|s| {
                    if s.form.session == session {
                        s.form.close();
                    }
                });
                self.notifier.notify(ToastKind::Success, message);
                self.refresh().await;
                FlowOutcome::Completed
            }
            Err(err) => {
                log::warn!("contract submit failed: {err}");
                self.notifier.notify(ToastKind::Error, &format!("Error: {err}"));
                FlowOutcome::Failed
            }
        }
    }

    /// Delete a record after the user confirms.
    pub async fn delete(&self, id: ContractId) -> FlowOutcome {
        if !self.confirmer.confirm(ConfirmPrompt::delete_contract()).await {
            log::debug!("delete of contract {id} declined");
            return FlowOutcome::Declined;
        }

        match self.api.delete_contract(id).await {
            Ok(()) => {
                log::info!("deleted contract {id}");
                self.store.update_panel(|s| {
                    if s.form.editing_id == Some(id) {
                        s.form.close();
                    }
                });
                self.notifier.notify(ToastKind::Success, "Contract deleted successfully");
                self.refresh().await;
                FlowOutcome::Completed
            }
            Err(err) => {
                log::warn!("delete of contract {id} failed: {err}");
                self.notifier.notify(ToastKind::Error, &format!("Error deleting contract: {err}"));
                FlowOutcome::Failed
            }
        }
    }
}
