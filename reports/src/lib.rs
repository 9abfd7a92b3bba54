//! Shared report listing model and response rules for the usage-report API.
//!
//! This crate owns the wire representation of `GET {API_URL}/reports` used by
//! both the browser `client` and the `cli`. It does no I/O: callers perform the
//! request and hand the status code and raw body to [`interpret_response`],
//! which applies the same success/error reduction everywhere.


use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Path of the report listing endpoint, relative to the API base URL.
pub const REPORTS_PATH: &str = "/reports";

/// Fallback text for failures that carry no message of their own.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// One record of the report listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Device identifier (UUID string on the reference backend).
    pub device: String,
    /// Report identifier.
    #[serde(rename = "reportId")]
    pub report_id: String,
    /// Measured value. The backend sends integers; any JSON scalar is kept as-is.
    pub value: Value,
}

impl ReportRow {
    /// Text shown in the value column. Strings render without quotes.
    #[must_use]
    pub fn value_text(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Success body of the report listing endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportsResponse {
    #[serde(default)]
    pub reports: Option<Vec<ReportRow>>,
}

impl ReportsResponse {
    /// Rows of the response; a missing or `null` list is empty.
    #[must_use]
    pub fn into_rows(self) -> Vec<ReportRow> {
        self.reports.unwrap_or_default()
    }
}

/// Error body shape used by the backend (`{"detail": ...}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: Value,
}

/// Every way a report fetch can fail, reduced to one displayable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// No bearer token is available; the request was never sent.
    #[error("Not authorized")]
    Unauthorized,
    /// The identity provider could not refresh the access token.
    #[error("token refresh failed: {0}")]
    TokenRefresh(String),
    /// The request did not complete (DNS, CORS, connection reset, ...).
    #[error("{0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("Error {status}: {detail}")]
    Status { status: u16, detail: String },
    /// A 2xx body that is not a valid report listing.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Message shown to the user. Never empty.
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_owned()
        } else {
            message
        }
    }
}

/// Join the API base URL and the report listing path.
#[must_use]
pub fn reports_url(api_url: &str) -> String {
    format!("{}{REPORTS_PATH}", api_url.trim_end_matches('/'))
}

/// Value of the `Authorization` header for `token`.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether `status` is a 2xx code.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Extract the human-readable part of a non-2xx body.
///
/// A JSON object with a non-empty string `detail` yields that string. Any other
/// JSON (objects without `detail`, non-string details) is serialized compactly.
/// A body that is not JSON is returned verbatim.
#[must_use]
pub fn error_detail(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return body.to_owned();
    };
    match json.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(detail) if !detail.is_null() && !matches!(detail, Value::String(_)) => detail.to_string(),
        _ => json.to_string(),
    }
}

/// Reduce a completed HTTP exchange to rows or a [`FetchError`].
///
/// # Errors
///
/// Returns [`FetchError::Status`] for non-2xx codes and [`FetchError::Decode`]
/// when a 2xx body is not a report listing.
pub fn interpret_response(status: u16, body: &str) -> Result<Vec<ReportRow>, FetchError> {
    if !is_success(status) {
        return Err(FetchError::Status { status, detail: error_detail(body) });
    }
    let parsed: ReportsResponse = serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(parsed.into_rows())
}
