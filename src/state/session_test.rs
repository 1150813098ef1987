use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;

fn token_with_payload(claims_json: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims_json);
    format!("{header}.{payload}.sig")
}

fn fresh_token(role: &str) -> String {
    token_with_payload(&format!(
        r#"{{"firstName":"Ana","lastName":"Lopez","sub":"ana@exemple.fr","role":"{role}","exp":4102444800}}"#
    ))
}

// =============================================================
// logged_in
// =============================================================

#[test]
fn default_session_is_logged_out() {
    assert!(!SessionState::default().logged_in());
}

#[test]
fn session_with_fresh_token_is_logged_in() {
    let session = SessionState::new(Some(fresh_token("PATIENT")));
    assert!(session.logged_in());
}

#[test]
fn session_with_expired_token_is_logged_out() {
    let session = SessionState::new(Some(token_with_payload(r#"{"exp":1000000000}"#)));
    assert!(!session.logged_in());
}

#[test]
fn session_with_malformed_token_is_logged_out() {
    let session = SessionState::new(Some("garbage".to_owned()));
    assert!(!session.logged_in());
}

// =============================================================
// derived identity
// =============================================================

#[test]
fn role_is_derived_from_the_token() {
    assert_eq!(SessionState::new(Some(fresh_token("DOCTOR"))).role(), Some(Role::Doctor));
    assert_eq!(SessionState::new(Some(fresh_token("PATIENT"))).role(), Some(Role::Patient));
}

#[test]
fn role_is_guest_without_a_token() {
    assert_eq!(SessionState::default().role(), None);
}

#[test]
fn role_is_guest_for_unrecognized_claim() {
    let session = SessionState::new(Some(token_with_payload(r#"{"role":"ADMIN"}"#)));
    assert_eq!(session.role(), None);
}

#[test]
fn display_name_prefers_full_name() {
    let session = SessionState::new(Some(fresh_token("PATIENT")));
    assert_eq!(session.display_name().as_deref(), Some("Ana Lopez"));
}

#[test]
fn display_name_falls_back_to_email() {
    let session = SessionState::new(Some(token_with_payload(r#"{"sub":"ana@exemple.fr"}"#)));
    assert_eq!(session.display_name().as_deref(), Some("ana@exemple.fr"));
}

#[test]
fn display_name_is_none_for_malformed_token() {
    assert_eq!(SessionState::new(Some("garbage".to_owned())).display_name(), None);
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_is_empty_without_browser_storage() {
    assert_eq!(SessionState::restore(), SessionState::default());
}
