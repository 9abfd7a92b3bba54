use super::*;
use futures::executor::block_on;
use leptos::reactive::owner::Owner;

fn config() -> IdentityConfig {
    IdentityConfig {
        url: "http://localhost:8080".to_owned(),
        realm: "reports-realm".to_owned(),
        client_id: "reports-frontend".to_owned(),
    }
}

fn tokens(expires_at_ms: Option<u64>, refresh: Option<&str>) -> TokenSet {
    TokenSet {
        access_token: "access".to_owned(),
        refresh_token: refresh.map(str::to_owned),
        id_token: Some("id".to_owned()),
        expires_at_ms,
    }
}

fn signed_in(tokens: TokenSet) -> RwSignal<AuthState> {
    RwSignal::new(AuthState { initialized: true, tokens: Some(tokens) })
}

#[test]
fn session_token_reads_auth_state() {
    Owner::new().with(|| {
        let session = BrowserSession::new(config(), signed_in(tokens(None, None)));
        assert_eq!(session.token().as_deref(), Some("access"));

        let anonymous = BrowserSession::new(config(), RwSignal::new(AuthState::default()));
        assert_eq!(anonymous.token(), None);
    });
}

#[test]
fn update_token_without_session_is_unauthorized() {
    Owner::new().with(|| {
        let session = BrowserSession::new(config(), RwSignal::new(AuthState::default()));
        assert_eq!(block_on(session.update_token(MIN_TOKEN_VALIDITY_SECS)), Err(FetchError::Unauthorized));
    });
}

#[test]
fn update_token_keeps_a_fresh_token() {
    Owner::new().with(|| {
        let far_future = token::now_ms() + 3_600_000;
        let auth = signed_in(tokens(Some(far_future), Some("refresh")));
        let session = BrowserSession::new(config(), auth);
        assert_eq!(block_on(session.update_token(MIN_TOKEN_VALIDITY_SECS)), Ok(()));
        assert_eq!(auth.get_untracked().token().as_deref(), Some("access"));
    });
}

#[test]
fn update_token_without_refresh_token_ends_session() {
    Owner::new().with(|| {
        let auth = signed_in(tokens(Some(0), None));
        let session = BrowserSession::new(config(), auth);
        let result = block_on(session.update_token(MIN_TOKEN_VALIDITY_SECS));
        assert!(matches!(result, Err(FetchError::TokenRefresh(_))));
        assert!(!auth.get_untracked().authenticated());
        assert!(auth.get_untracked().initialized);
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn update_token_refresh_failure_ends_session() {
    Owner::new().with(|| {
        let auth = signed_in(tokens(Some(0), Some("refresh")));
        let session = BrowserSession::new(config(), auth);
        let result = block_on(session.update_token(MIN_TOKEN_VALIDITY_SECS));
        assert!(matches!(result, Err(FetchError::TokenRefresh(_))));
        assert!(!auth.get_untracked().authenticated());
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn init_off_browser_marks_initialized_anonymous() {
    Owner::new().with(|| {
        let auth = RwSignal::new(AuthState::default());
        block_on(init(&config(), auth));
        assert_eq!(auth.get_untracked(), AuthState { initialized: true, tokens: None });
    });
}

#[test]
fn logout_forgets_tokens() {
    Owner::new().with(|| {
        let auth = signed_in(tokens(None, Some("refresh")));
        logout(&config(), auth);
        assert!(!auth.get_untracked().authenticated());
    });
}
