//! Aggregate panel state and the store seam the controller writes through.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the store is an `RwSignal<PanelState>` so writes re-render
//! the view. Natively (tests, embedding) it is a shared `RefCell`.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use super::contracts::ContractsState;
use super::form::FormState;

/// Everything the contract panel renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelState {
    pub contracts: ContractsState,
    pub form: FormState,
    pub help_open: bool,
}

/// Owner of the panel state.
///
/// Both methods return `None` when the backing storage is gone (a disposed
/// signal after the page unmounted).
pub trait PanelStore {
    fn read_panel<R>(&self, f: impl FnOnce(&PanelState) -> R) -> Option<R>;
    fn update_panel<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> Option<R>;
}

impl PanelStore for RwSignal<PanelState> {
    fn read_panel<R>(&self, f: impl FnOnce(&PanelState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn update_panel<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Single-threaded store without a reactive runtime.
#[derive(Clone, Debug, Default)]
pub struct LocalPanelStore(Rc<RefCell<PanelState>>);

impl LocalPanelStore {
    pub fn new(state: PanelState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> PanelState {
        self.0.borrow().clone()
    }
}

impl PanelStore for LocalPanelStore {
    fn read_panel<R>(&self, f: impl FnOnce(&PanelState) -> R) -> Option<R> {
        Some(f(&self.0.borrow()))
    }

    fn update_panel<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> Option<R> {
        Some(f(&mut self.0.borrow_mut()))
    }
}
