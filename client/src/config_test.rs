use super::*;

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = ClientConfig::from_values(None, None, None, None);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.identity.url, DEFAULT_OIDC_URL);
    assert_eq!(config.identity.realm, DEFAULT_OIDC_REALM);
    assert_eq!(config.identity.client_id, DEFAULT_OIDC_CLIENT_ID);
    assert_eq!(ClientConfig::default(), config);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ClientConfig::from_values(Some("  "), Some(""), Some(" "), Some(""));
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn explicit_values_are_trimmed() {
    let config = ClientConfig::from_values(
        Some(" https://api.example.com/ "),
        Some("https://sso.example.com//"),
        Some("prod"),
        Some(" portal "),
    );
    assert_eq!(config.api_url, "https://api.example.com");
    assert_eq!(config.identity.url, "https://sso.example.com");
    assert_eq!(config.identity.realm, "prod");
    assert_eq!(config.identity.client_id, "portal");
}

#[test]
fn identity_endpoints_follow_realm_layout() {
    let identity = IdentityConfig {
        url: "http://localhost:8080".to_owned(),
        realm: "reports-realm".to_owned(),
        client_id: "reports-frontend".to_owned(),
    };
    assert_eq!(
        identity.auth_endpoint(),
        "http://localhost:8080/realms/reports-realm/protocol/openid-connect/auth"
    );
    assert_eq!(
        identity.token_endpoint(),
        "http://localhost:8080/realms/reports-realm/protocol/openid-connect/token"
    );
    assert_eq!(
        identity.logout_endpoint(),
        "http://localhost:8080/realms/reports-realm/protocol/openid-connect/logout"
    );
}
