//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `reports`) so the page and its components
//! depend on small focused models provided as `RwSignal` contexts.

pub mod auth;
pub mod reports;
