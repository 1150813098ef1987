use super::*;

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn status_error_exposes_its_code() {
    assert_eq!(ApiError::Status(403).status(), 403);
}

#[test]
fn transport_errors_map_to_status_zero() {
    assert_eq!(ApiError::Network("timeout".to_owned()).status(), 0);
    assert_eq!(ApiError::Body.status(), 0);
    assert_eq!(ApiError::Unavailable.status(), 0);
}

#[test]
fn errors_display_for_logging() {
    assert_eq!(
        ApiError::Status(500).to_string(),
        "request failed with status 500"
    );
    assert_eq!(
        ApiError::Network("offline".to_owned()).to_string(),
        "network error: offline"
    );
}
