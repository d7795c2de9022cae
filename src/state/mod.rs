//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`contracts`, `form`, `ui`) so each piece can be
//! tested without a reactive runtime; `panel` aggregates them for the
//! controller.

pub mod contracts;
pub mod form;
pub mod panel;
pub mod ui;
