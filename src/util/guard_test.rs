use super::*;

#[test]
fn landing_route_sends_doctor_to_doctor_dashboard() {
    assert_eq!(landing_route(Some(Role::Doctor)), "/doctor/dashboard");
}

#[test]
fn landing_route_sends_patient_to_patient_dashboard() {
    assert_eq!(landing_route(Some(Role::Patient)), "/patient/dashboard");
}

#[test]
fn landing_route_sends_guest_home() {
    assert_eq!(landing_route(None), "/home");
}
