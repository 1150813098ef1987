use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;

/// Build an unsigned token whose payload is `claims_json`.
fn token_with_payload(claims_json: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims_json);
    format!("{header}.{payload}.sig")
}

// =============================================================
// decode
// =============================================================

#[test]
fn decode_reads_identity_claims() {
    let token = token_with_payload(
        r#"{"firstName":"Farid","lastName":"Benali","sub":"farid@clinique.fr","role":"DOCTOR","exp":4102444800}"#,
    );
    let claims = decode(&token).unwrap();
    assert_eq!(claims.first_name.as_deref(), Some("Farid"));
    assert_eq!(claims.last_name.as_deref(), Some("Benali"));
    assert_eq!(claims.sub.as_deref(), Some("farid@clinique.fr"));
    assert_eq!(claims.role.as_deref(), Some("DOCTOR"));
    assert_eq!(claims.exp, Some(4_102_444_800));
}

#[test]
fn decode_tolerates_missing_claims() {
    let claims = decode(&token_with_payload(r#"{"sub":"a@b.com"}"#)).unwrap();
    assert_eq!(claims.sub.as_deref(), Some("a@b.com"));
    assert!(claims.role.is_none());
    assert!(claims.exp.is_none());
}

#[test]
fn decode_rejects_token_without_payload_segment() {
    assert_eq!(decode("not-a-token"), Err(JwtError::MissingPayload));
}

#[test]
fn decode_rejects_non_base64_payload() {
    assert!(matches!(decode("head.???.sig"), Err(JwtError::Base64(_))));
}

#[test]
fn decode_rejects_non_json_payload() {
    let payload = URL_SAFE_NO_PAD.encode("plain text");
    let token = format!("head.{payload}.sig");
    assert!(matches!(decode(&token), Err(JwtError::Json(_))));
}

// =============================================================
// role
// =============================================================

#[test]
fn role_maps_doctor_claim() {
    let token = token_with_payload(r#"{"role":"DOCTOR"}"#);
    assert_eq!(role(Some(&token)), Some(Role::Doctor));
}

#[test]
fn role_maps_patient_claim() {
    let token = token_with_payload(r#"{"role":"PATIENT"}"#);
    assert_eq!(role(Some(&token)), Some(Role::Patient));
}

#[test]
fn role_is_none_for_absent_token() {
    assert_eq!(role(None), None);
}

#[test]
fn role_is_none_for_unrecognized_claim() {
    let token = token_with_payload(r#"{"role":"ADMIN"}"#);
    assert_eq!(role(Some(&token)), None);
}

#[test]
fn role_is_none_for_malformed_token() {
    assert_eq!(role(Some("garbage")), None);
}

// =============================================================
// expiry
// =============================================================

#[test]
fn is_expired_true_for_past_exp() {
    let token = token_with_payload(r#"{"exp":1000000000}"#);
    assert!(is_expired(Some(&token)));
}

#[test]
fn is_expired_false_for_future_exp() {
    let token = token_with_payload(r#"{"exp":4102444800}"#);
    assert!(!is_expired(Some(&token)));
}

#[test]
fn is_expired_true_for_absent_token() {
    assert!(is_expired(None));
}

#[test]
fn is_expired_true_for_malformed_token() {
    assert!(is_expired(Some("garbage")));
}

#[test]
fn is_expired_at_boundary_is_not_expired() {
    let claims = Claims {
        exp: Some(1_700_000_000),
        ..Claims::default()
    };
    assert!(!is_expired_at(&claims, 1_700_000_000));
    assert!(is_expired_at(&claims, 1_700_000_001));
}

#[test]
fn is_expired_at_without_exp_claim_is_false() {
    assert!(!is_expired_at(&Claims::default(), i64::MAX));
}
