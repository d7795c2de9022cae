//! Utility helpers shared across the panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `usage` holds the pure quota math; `toast` and `confirm` adapt the
//! controller's notifier/confirmer seams onto Leptos signals.

pub mod confirm;
pub mod toast;
pub mod usage;
