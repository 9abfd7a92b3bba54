//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the report listing request; the wire schema and response
//! rules live in the shared `reports` crate.

pub mod api;
