use super::*;

#[test]
fn role_text_for_doctor() {
    assert_eq!(role_text(Some(Role::Doctor)), "doctor");
}

#[test]
fn role_text_for_patient() {
    assert_eq!(role_text(Some(Role::Patient)), "patient");
}

#[test]
fn role_text_for_guest() {
    assert_eq!(role_text(None), "user");
}
