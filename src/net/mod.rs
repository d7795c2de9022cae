//! Networking modules for the contracts REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the collaborator seam and its HTTP implementation, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
