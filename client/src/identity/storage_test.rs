use super::*;

fn pending() -> PendingLogin {
    PendingLogin {
        state: "state-1".to_owned(),
        verifier: "verifier-1".to_owned(),
        redirect_uri: "http://localhost:3000/".to_owned(),
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn off_browser_writes_succeed_and_reads_are_empty() {
    assert_eq!(save_pending_login(&pending()), Ok(()));
    assert_eq!(take_pending_login(), None);
    assert_eq!(load_tokens(), None);
}

#[test]
fn pending_login_round_trips_through_json() {
    let raw = serde_json::to_string(&pending()).expect("serialize");
    let back: PendingLogin = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, pending());
}
