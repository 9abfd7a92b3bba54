use super::*;

fn tokens(access: &str) -> TokenSet {
    TokenSet { access_token: access.to_owned(), refresh_token: None, id_token: None, expires_at_ms: None }
}

#[test]
fn auth_state_default_is_uninitialized_and_anonymous() {
    let state = AuthState::default();
    assert!(!state.initialized);
    assert!(!state.authenticated());
    assert_eq!(state.token(), None);
}

#[test]
fn auth_state_with_tokens_is_authenticated() {
    let state = AuthState { initialized: true, tokens: Some(tokens("abc")) };
    assert!(state.authenticated());
    assert_eq!(state.token().as_deref(), Some("abc"));
}

#[test]
fn initialized_without_tokens_is_anonymous() {
    let state = AuthState { initialized: true, tokens: None };
    assert!(!state.authenticated());
    assert_eq!(state.token(), None);
}
