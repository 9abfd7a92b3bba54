//! URL construction and parsing for the authorization-code redirect flow.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use url::Url;

use super::pkce::CHALLENGE_METHOD;
use crate::config::IdentityConfig;

/// Query parameters the identity provider appends on its redirect back.
pub const CALLBACK_PARAMS: &[&str] = &["code", "state", "session_state", "iss", "error", "error_description"];

/// What the identity provider sent back to the page, if anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Callback {
    /// Authorization succeeded; `code` is exchanged at the token endpoint.
    Code { code: String, state: String },
    /// The provider refused or the user cancelled.
    Denied { error: String, description: Option<String> },
}

/// Inspect the current page URL for an authorization response.
#[must_use]
pub fn parse_callback(href: &str) -> Option<Callback> {
    let url = Url::parse(href).ok()?;
    let mut code = None;
    let mut state = None;
    let mut error = None;
    let mut description = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            "error_description" => description = Some(value.into_owned()),
            _ => {}
        }
    }
    if let Some(error) = error {
        return Some(Callback::Denied { error, description });
    }
    Some(Callback::Code { code: code?, state: state? })
}

/// Remove the provider's callback parameters from `href`, keeping the rest.
#[must_use]
pub fn strip_callback_params(href: &str) -> String {
    let Ok(mut url) = Url::parse(href) else {
        return href.to_owned();
    };
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !CALLBACK_PARAMS.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }
    url.into()
}

/// The `redirect_uri` registered for a login started from `href`.
#[must_use]
pub fn redirect_uri(href: &str) -> String {
    let stripped = strip_callback_params(href);
    match Url::parse(&stripped) {
        Ok(mut url) => {
            url.set_fragment(None);
            url.into()
        }
        Err(_) => stripped,
    }
}

/// Authorization endpoint URL for a PKCE login.
///
/// # Errors
///
/// Returns an error if the configured identity URL is not a valid URL.
pub fn authorize_url(
    config: &IdentityConfig,
    redirect_uri: &str,
    state: &str,
    code_challenge: &str,
) -> Result<String, url::ParseError> {
    Url::parse_with_params(
        &config.auth_endpoint(),
        &[
            ("client_id", config.client_id.as_str()),
            ("redirect_uri", redirect_uri),
            ("response_type", "code"),
            ("response_mode", "query"),
            ("scope", "openid"),
            ("state", state),
            ("code_challenge", code_challenge),
            ("code_challenge_method", CHALLENGE_METHOD),
        ],
    )
    .map(String::from)
}

/// End-session URL that returns the browser to `post_logout_redirect_uri`.
///
/// # Errors
///
/// Returns an error if the configured identity URL is not a valid URL.
pub fn logout_url(
    config: &IdentityConfig,
    post_logout_redirect_uri: &str,
    id_token_hint: Option<&str>,
) -> Result<String, url::ParseError> {
    let mut url = Url::parse(&config.logout_endpoint())?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("client_id", &config.client_id);
        query.append_pair("post_logout_redirect_uri", post_logout_redirect_uri);
        if let Some(hint) = id_token_hint {
            query.append_pair("id_token_hint", hint);
        }
    }
    Ok(url.into())
}
