use super::*;

fn response(access: &str, expires_in: Option<u64>, refresh: Option<&str>, id: Option<&str>) -> TokenResponse {
    TokenResponse {
        access_token: access.to_owned(),
        expires_in,
        refresh_token: refresh.map(str::to_owned),
        id_token: id.map(str::to_owned),
    }
}

// =============================================================
// TokenSet
// =============================================================

#[test]
fn from_response_computes_absolute_expiry() {
    let set = TokenSet::from_response(response("a", Some(300), Some("r"), Some("i")), 1_000);
    assert_eq!(set.access_token, "a");
    assert_eq!(set.refresh_token.as_deref(), Some("r"));
    assert_eq!(set.id_token.as_deref(), Some("i"));
    assert_eq!(set.expires_at_ms, Some(301_000));
}

#[test]
fn from_response_without_expiry_has_none() {
    let set = TokenSet::from_response(response("a", None, None, None), 1_000);
    assert_eq!(set.expires_at_ms, None);
    assert!(!set.expires_within(10, u64::MAX - 1));
}

#[test]
fn expires_within_respects_min_validity_window() {
    let set = TokenSet::from_response(response("a", Some(60), None, None), 0);
    // Expires at 60s.
    assert!(!set.expires_within(10, 0));
    assert!(!set.expires_within(10, 49_999));
    assert!(set.expires_within(10, 50_000));
    assert!(set.expires_within(10, 120_000));
    assert!(set.expires_within(0, 60_000));
}

#[test]
fn refreshed_keeps_tokens_server_omitted() {
    let first = TokenSet::from_response(response("a1", Some(60), Some("r1"), Some("i1")), 0);
    let next = first.refreshed(response("a2", Some(60), None, None), 30_000);
    assert_eq!(next.access_token, "a2");
    assert_eq!(next.refresh_token.as_deref(), Some("r1"));
    assert_eq!(next.id_token.as_deref(), Some("i1"));
    assert_eq!(next.expires_at_ms, Some(90_000));
}

#[test]
fn refreshed_prefers_rotated_refresh_token() {
    let first = TokenSet::from_response(response("a1", Some(60), Some("r1"), None), 0);
    let next = first.refreshed(response("a2", Some(60), Some("r2"), None), 0);
    assert_eq!(next.refresh_token.as_deref(), Some("r2"));
}

#[test]
fn token_set_survives_storage_serialization() {
    let set = TokenSet::from_response(response("a", Some(5), Some("r"), None), 7);
    let raw = serde_json::to_string(&set).expect("serialize");
    let back: TokenSet = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, set);
}

#[test]
fn token_response_parses_keycloak_body() {
    let body = r#"{
        "access_token": "eyJ.a.b",
        "expires_in": 300,
        "refresh_expires_in": 1800,
        "refresh_token": "eyJ.r.s",
        "token_type": "Bearer",
        "id_token": "eyJ.i.t",
        "not-before-policy": 0,
        "session_state": "abc",
        "scope": "openid profile email"
    }"#;
    let resp: TokenResponse = serde_json::from_str(body).expect("token response");
    assert_eq!(resp.access_token, "eyJ.a.b");
    assert_eq!(resp.expires_in, Some(300));
    assert_eq!(resp.refresh_token.as_deref(), Some("eyJ.r.s"));
    assert_eq!(resp.id_token.as_deref(), Some("eyJ.i.t"));
}

// =============================================================
// Forms and errors
// =============================================================

#[test]
fn authorization_code_form_encodes_all_fields() {
    let form = authorization_code_form("reports-frontend", "c0de", "v3rifier", "http://localhost:3000/?x=1");
    assert_eq!(
        form,
        "grant_type=authorization_code&client_id=reports-frontend&code=c0de&code_verifier=v3rifier\
         &redirect_uri=http%3A%2F%2Flocalhost%3A3000%2F%3Fx%3D1"
    );
}

#[test]
fn refresh_form_encodes_grant() {
    assert_eq!(
        refresh_form("reports-frontend", "r+t"),
        "grant_type=refresh_token&client_id=reports-frontend&refresh_token=r%2Bt"
    );
}

#[test]
fn token_error_message_prefers_description() {
    let body = r#"{"error":"invalid_grant","error_description":"Token is not active"}"#;
    assert_eq!(token_error_message(400, body), "invalid_grant: Token is not active");
}

#[test]
fn token_error_message_without_description() {
    assert_eq!(token_error_message(400, r#"{"error":"invalid_client"}"#), "invalid_client");
}

#[test]
fn token_error_message_non_json_falls_back_to_status() {
    assert_eq!(token_error_message(502, "Bad Gateway"), "token endpoint returned 502");
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn request_tokens_is_unavailable_off_browser() {
    let result = futures::executor::block_on(request_tokens("http://localhost/token", String::new()));
    assert!(result.is_err());
}
