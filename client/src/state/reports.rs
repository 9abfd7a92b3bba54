//! Report listing state for the report page.
//!
//! DESIGN
//! ======
//! The download flow never touches the signal directly; it emits
//! [`ReportsEvent`]s and the page folds them in with [`ReportsState::apply`].
//! Rows always mirror the most recent successful response; a failure leaves the
//! previous rows in place and replaces the error.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use reports::ReportRow;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportsState {
    /// A request is in flight; the download control is disabled.
    pub loading: bool,
    pub error: Option<String>,
    /// `None` until the first successful fetch.
    pub rows: Option<Vec<ReportRow>>,
}

/// One step of the download flow.
#[derive(Clone, Debug, PartialEq)]
pub enum ReportsEvent {
    /// The request was refused before sending (no token).
    Rejected(String),
    /// The request is about to be sent.
    Started,
    Succeeded(Vec<ReportRow>),
    Failed(String),
}

impl ReportsState {
    pub fn apply(&mut self, event: ReportsEvent) {
        match event {
            ReportsEvent::Rejected(message) => self.error = Some(message),
            ReportsEvent::Started => {
                self.loading = true;
                self.error = None;
            }
            ReportsEvent::Succeeded(rows) => {
                self.rows = Some(rows);
                self.loading = false;
            }
            ReportsEvent::Failed(message) => {
                self.error = Some(message);
                self.loading = false;
            }
        }
    }
}
