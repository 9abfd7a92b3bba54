//! Browser `sessionStorage` persistence for the identity session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens live only for the page session: a reload keeps the user signed in,
//! closing the tab forgets them. Off-browser every read is `None` and every
//! write is a no-op that succeeds.
//!
//! ERROR HANDLING
//! ==============
//! Failed writes are logged through [`browser::warn`]. Only the pending login
//! reports its failure to the caller, since the redirect is useless without it.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::browser;
use super::token::TokenSet;

const TOKENS_KEY: &str = "reports.identity.tokens";
const PENDING_LOGIN_KEY: &str = "reports.identity.pending";

/// Login started on this page and awaiting the provider's redirect back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingLogin {
    pub state: String,
    pub verifier: String,
    pub redirect_uri: String,
}

fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()
            .and_then(|w| w.session_storage().ok().flatten())
            .ok_or_else(|| "sessionStorage unavailable".to_owned())?;
        let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
        storage.set_item(key, &raw).map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        Ok(())
    }
}

fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
            browser::report_failure(&format!("clearing {key} failed"), storage.remove_item(key));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

pub fn load_tokens() -> Option<TokenSet> {
    load_json(TOKENS_KEY)
}

pub fn save_tokens(tokens: &TokenSet) {
    browser::report_failure("saving tokens failed", save_json(TOKENS_KEY, tokens));
}

pub fn clear_tokens() {
    remove(TOKENS_KEY);
}

/// Remember the login about to start.
///
/// # Errors
///
/// Returns a description of the failure when the login cannot be stored; the
/// callback could not be redeemed, so the caller must not redirect.
pub fn save_pending_login(pending: &PendingLogin) -> Result<(), String> {
    save_json(PENDING_LOGIN_KEY, pending)
}

/// Read and forget the pending login; a callback may only be redeemed once.
pub fn take_pending_login() -> Option<PendingLogin> {
    let pending = load_json(PENDING_LOGIN_KEY);
    remove(PENDING_LOGIN_KEY);
    pending
}
