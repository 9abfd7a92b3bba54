//! Browser-side bridge to the OpenID Connect identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication itself happens at the provider. This module only drives the
//! authorization-code + PKCE redirect, keeps the issued tokens for the page
//! session, refreshes the access token before requests, and ends the session
//! on logout.
//!
//! ERROR HANDLING
//! ==============
//! Init and login failures are logged and leave the user anonymous. A failed
//! refresh clears the session and surfaces as a [`FetchError::TokenRefresh`]
//! for the page to display.

pub mod browser;
pub mod flow;
pub mod pkce;
pub mod storage;
pub mod token;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use leptos::prelude::*;
use reports::FetchError;

use crate::config::IdentityConfig;
use crate::state::auth::AuthState;
use flow::Callback;
use storage::PendingLogin;
use token::TokenSet;

/// Minimum remaining access-token lifetime, in seconds, before a request.
pub const MIN_TOKEN_VALIDITY_SECS: u64 = 10;

/// The slice of the identity provider the download flow depends on.
#[allow(async_fn_in_trait)]
pub trait IdentitySession {
    /// Current bearer token, if the user is signed in.
    fn token(&self) -> Option<String>;

    /// Refresh the access token if it expires within `min_validity_secs`.
    async fn update_token(&self, min_validity_secs: u64) -> Result<(), FetchError>;
}

/// [`IdentitySession`] backed by the shared `AuthState` signal and `sessionStorage`.
#[derive(Clone, Debug)]
pub struct BrowserSession {
    config: IdentityConfig,
    auth: RwSignal<AuthState>,
}

impl BrowserSession {
    #[must_use]
    pub fn new(config: IdentityConfig, auth: RwSignal<AuthState>) -> Self {
        Self { config, auth }
    }

    fn clear(&self) {
        storage::clear_tokens();
        self.auth.update(|a| a.tokens = None);
    }
}

impl IdentitySession for BrowserSession {
    fn token(&self) -> Option<String> {
        self.auth.with_untracked(AuthState::token)
    }

    async fn update_token(&self, min_validity_secs: u64) -> Result<(), FetchError> {
        let Some(current) = self.auth.with_untracked(|a| a.tokens.clone()) else {
            return Err(FetchError::Unauthorized);
        };
        if !current.expires_within(min_validity_secs, token::now_ms()) {
            return Ok(());
        }
        let Some(refresh_token) = current.refresh_token.as_deref() else {
            self.clear();
            return Err(FetchError::TokenRefresh("session expired".to_owned()));
        };

        let form = token::refresh_form(&self.config.client_id, refresh_token);
        match token::request_tokens(&self.config.token_endpoint(), form).await {
            Ok(resp) => {
                let next = current.refreshed(resp, token::now_ms());
                storage::save_tokens(&next);
                self.auth.update(|a| a.tokens = Some(next));
                Ok(())
            }
            Err(e) => {
                browser::warn(&format!("token refresh failed: {e}"));
                self.clear();
                Err(FetchError::TokenRefresh(e))
            }
        }
    }
}

/// Restore the session or finish a login redirect, then mark `auth` initialized.
pub async fn init(config: &IdentityConfig, auth: RwSignal<AuthState>) {
    let tokens = match browser::current_href() {
        Some(href) => resume_session(config, &href).await,
        None => storage::load_tokens(),
    };
    auth.set(AuthState { initialized: true, tokens });
}

async fn resume_session(config: &IdentityConfig, href: &str) -> Option<TokenSet> {
    let Some(callback) = flow::parse_callback(href) else {
        return storage::load_tokens();
    };
    let pending = storage::take_pending_login();
    browser::replace_url(&flow::strip_callback_params(href));

    match callback {
        Callback::Denied { error, description } => {
            browser::warn(&format!("login refused: {error} {}", description.unwrap_or_default()));
            storage::load_tokens()
        }
        Callback::Code { code, state } => {
            let Some(pending) = pending.filter(|p| p.state == state) else {
                browser::warn("login callback state mismatch; ignoring");
                return storage::load_tokens();
            };
            exchange_code(config, &code, &pending).await
        }
    }
}

async fn exchange_code(config: &IdentityConfig, code: &str, pending: &PendingLogin) -> Option<TokenSet> {
    let form = token::authorization_code_form(&config.client_id, code, &pending.verifier, &pending.redirect_uri);
    match token::request_tokens(&config.token_endpoint(), form).await {
        Ok(resp) => {
            let tokens = TokenSet::from_response(resp, token::now_ms());
            storage::save_tokens(&tokens);
            Some(tokens)
        }
        Err(e) => {
            browser::warn(&format!("code exchange failed: {e}"));
            None
        }
    }
}

/// Redirect the browser to the provider's login page.
pub fn login(config: &IdentityConfig) {
    let Some(href) = browser::current_href() else {
        return;
    };
    let redirect_uri = flow::redirect_uri(&href);
    let pkce = pkce::generate();
    let state = pkce::random_state();

    match flow::authorize_url(config, &redirect_uri, &state, &pkce.challenge) {
        Ok(url) => {
            let pending = PendingLogin { state, verifier: pkce.verifier, redirect_uri };
            if browser::report_failure("saving pending login failed", storage::save_pending_login(&pending)) {
                browser::redirect(&url);
            }
        }
        Err(e) => browser::warn(&format!("invalid identity provider URL: {e}")),
    }
}

/// Forget the local session and end it at the provider, returning to the page origin.
pub fn logout(config: &IdentityConfig, auth: RwSignal<AuthState>) {
    let id_token = auth.with_untracked(|a| a.tokens.as_ref().and_then(|t| t.id_token.clone()));
    storage::clear_tokens();
    auth.update(|a| a.tokens = None);

    let Some(origin) = browser::origin() else {
        return;
    };
    match flow::logout_url(config, &origin, id_token.as_deref()) {
        Ok(url) => browser::redirect(&url),
        Err(e) => browser::warn(&format!("invalid identity provider URL: {e}")),
    }
}
