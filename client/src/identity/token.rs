//! Token endpoint payloads and the stored token set.
//!
//! Client-side (hydrate): real form POSTs via `gloo-net`.
//! Server-side (SSR): the request helper returns an error; SSR never holds a
//! session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Successful token endpoint response (authorization code or refresh grant).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
}

/// OAuth error body (`{"error": "...", "error_description": "..."}`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct TokenErrorBody {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Tokens held for the current page session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub id_token: Option<String>,
    /// Absolute access-token expiry in ms since the Unix epoch, when known.
    pub expires_at_ms: Option<u64>,
}

impl TokenSet {
    /// Build a token set from a fresh response received at `now_ms`.
    #[must_use]
    pub fn from_response(resp: TokenResponse, now_ms: u64) -> Self {
        Self {
            access_token: resp.access_token,
            refresh_token: resp.refresh_token,
            id_token: resp.id_token,
            expires_at_ms: resp
                .expires_in
                .map(|secs| now_ms.saturating_add(secs.saturating_mul(1000))),
        }
    }

    /// Apply a refresh response. Tokens the server omits are carried over.
    #[must_use]
    pub fn refreshed(&self, resp: TokenResponse, now_ms: u64) -> Self {
        let mut next = Self::from_response(resp, now_ms);
        if next.refresh_token.is_none() {
            next.refresh_token.clone_from(&self.refresh_token);
        }
        if next.id_token.is_none() {
            next.id_token.clone_from(&self.id_token);
        }
        next
    }

    /// True when the access token expires within `min_validity_secs` of `now_ms`.
    /// A token without a known expiry is treated as valid.
    #[must_use]
    pub fn expires_within(&self, min_validity_secs: u64, now_ms: u64) -> bool {
        self.expires_at_ms
            .is_some_and(|at| at <= now_ms.saturating_add(min_validity_secs.saturating_mul(1000)))
    }
}

/// Form body for the `authorization_code` grant.
#[must_use]
pub fn authorization_code_form(client_id: &str, code: &str, verifier: &str, redirect_uri: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("grant_type", "authorization_code")
        .append_pair("client_id", client_id)
        .append_pair("code", code)
        .append_pair("code_verifier", verifier)
        .append_pair("redirect_uri", redirect_uri)
        .finish()
}

/// Form body for the `refresh_token` grant.
#[must_use]
pub fn refresh_form(client_id: &str, refresh_token: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("grant_type", "refresh_token")
        .append_pair("client_id", client_id)
        .append_pair("refresh_token", refresh_token)
        .finish()
}

/// Describe a failed token endpoint response.
#[must_use]
pub fn token_error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<TokenErrorBody>(body) {
        Ok(TokenErrorBody { error, error_description: Some(description) }) => format!("{error}: {description}"),
        Ok(TokenErrorBody { error, error_description: None }) => error,
        Err(_) => format!("token endpoint returned {status}"),
    }
}

/// Current wall-clock time in ms since the Unix epoch.
#[must_use]
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

/// POST a url-encoded grant to the token endpoint.
///
/// # Errors
///
/// Returns an error string if the request fails, the server rejects the grant,
/// or the response is not a token response.
pub async fn request_tokens(endpoint: &str, form: String) -> Result<TokenResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(token_error_message(status, &body));
        }
        serde_json::from_str::<TokenResponse>(&body).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, form);
        Err("not available on server".to_owned())
    }
}
