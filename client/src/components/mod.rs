//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components take plain props so the report page can compose them and tests
//! can render them without context providers.

pub mod download_button;
pub mod report_table;
