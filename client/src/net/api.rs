//! REST helper for the report listing endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub that fails, since the listing is only requested
//! from the browser on click.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a [`FetchError`]; status/body interpretation is shared with
//! the CLI through [`reports::interpret_response`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reports::{FetchError, ReportRow};

/// Source of report rows for a bearer token.
#[allow(async_fn_in_trait)]
pub trait ReportsApi {
    /// `GET {API_URL}/reports` with `Authorization: Bearer <token>`.
    async fn fetch_reports(&self, token: &str) -> Result<Vec<ReportRow>, FetchError>;
}

/// [`ReportsApi`] over HTTP.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReportsApi {
    url: String,
}

impl HttpReportsApi {
    #[must_use]
    pub fn new(api_url: &str) -> Self {
        Self { url: reports::reports_url(api_url) }
    }

    /// Full URL of the listing endpoint.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ReportsApi for HttpReportsApi {
    async fn fetch_reports(&self, token: &str) -> Result<Vec<ReportRow>, FetchError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url)
                .header("Authorization", &reports::bearer(token))
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
            reports::interpret_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(FetchError::Network("not available on server".to_owned()))
        }
    }
}
