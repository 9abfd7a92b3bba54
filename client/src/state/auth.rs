//! Identity-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by `App`. The identity bridge
//! writes it; the report page reads it to pick between the loading, login and
//! report views.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::identity::token::TokenSet;

/// Whether the identity provider has been consulted, and the tokens it issued.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// False until the bridge has restored a session or finished a login redirect.
    pub initialized: bool,
    pub tokens: Option<TokenSet>,
}

impl AuthState {
    #[must_use]
    pub fn authenticated(&self) -> bool {
        self.tokens.is_some()
    }

    /// Current bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.tokens.as_ref().map(|t| t.access_token.clone())
    }
}
