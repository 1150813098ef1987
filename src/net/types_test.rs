use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_from_claim_recognizes_both_roles() {
    assert_eq!(Role::from_claim("DOCTOR"), Some(Role::Doctor));
    assert_eq!(Role::from_claim("PATIENT"), Some(Role::Patient));
}

#[test]
fn role_from_claim_rejects_unknown_values() {
    assert_eq!(Role::from_claim("ADMIN"), None);
    assert_eq!(Role::from_claim(""), None);
    assert_eq!(Role::from_claim("doctor"), None);
}

#[test]
fn role_serializes_as_screaming_case() {
    assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"DOCTOR\"");
    assert_eq!(serde_json::to_string(&Role::Patient).unwrap(), "\"PATIENT\"");
}

// =============================================================
// AppointmentStatus
// =============================================================

#[test]
fn status_deserializes_known_values() {
    let status: AppointmentStatus = serde_json::from_str("\"APPROVED\"").unwrap();
    assert_eq!(status, AppointmentStatus::Approved);
}

#[test]
fn status_deserializes_unknown_value_to_unknown() {
    let status: AppointmentStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
    assert_eq!(status, AppointmentStatus::Unknown);
}

#[test]
fn status_badge_classes() {
    assert_eq!(AppointmentStatus::Approved.css_class(), "green");
    assert_eq!(AppointmentStatus::Pending.css_class(), "blue");
    assert_eq!(AppointmentStatus::Rejected.css_class(), "red");
    assert_eq!(AppointmentStatus::Unknown.css_class(), "gray");
}

#[test]
fn status_labels() {
    assert_eq!(AppointmentStatus::Pending.text_fr(), "En attente");
    assert_eq!(AppointmentStatus::Unknown.text_fr(), "Inconnu");
}

// =============================================================
// Appointment / Doctor / stats
// =============================================================

#[test]
fn appointment_deserializes_camel_case_wire_names() {
    let json = r#"{
        "id": 7,
        "date": "2025-03-15",
        "status": "PENDING",
        "patientId": 12,
        "doctorId": 3,
        "patientName": "Dupont, Jean",
        "patientEmail": "jean@exemple.fr"
    }"#;
    let appointment: Appointment = serde_json::from_str(json).unwrap();
    assert_eq!(appointment.id, 7);
    assert_eq!(appointment.patient_id, 12);
    assert_eq!(appointment.doctor_id, 3);
    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(appointment.patient_name.as_deref(), Some("Dupont, Jean"));
}

#[test]
fn appointment_tolerates_missing_display_fields_and_status() {
    let json = r#"{"id":1,"date":"2025-04-01","patientId":2,"doctorId":3}"#;
    let appointment: Appointment = serde_json::from_str(json).unwrap();
    assert_eq!(appointment.status, AppointmentStatus::Unknown);
    assert!(appointment.patient_name.is_none());
    assert!(appointment.patient_email.is_none());
}

#[test]
fn doctor_accepts_both_specialization_spellings() {
    let a: Doctor = serde_json::from_str(r#"{"id":1,"name":"Dr. A","specialization":"Cardiologie"}"#).unwrap();
    let b: Doctor = serde_json::from_str(r#"{"id":2,"name":"Dr. B","speciality":"Dermatologie"}"#).unwrap();
    assert_eq!(a.specialization, "Cardiologie");
    assert_eq!(b.specialization, "Dermatologie");
}

#[test]
fn stats_default_to_zero_counts() {
    let stats: AppointmentStats = serde_json::from_str("{}").unwrap();
    assert_eq!(stats.total_appointments, 0);
    assert_eq!(stats.pending_appointments, 0);
}

#[test]
fn register_request_serializes_camel_case_and_skips_absent_specialization() {
    let request = RegisterRequest {
        first_name: "Jean".to_owned(),
        last_name: "Dupont".to_owned(),
        user_name: "jdupont".to_owned(),
        email: "jean@exemple.fr".to_owned(),
        password: "x".to_owned(),
        role: Role::Patient,
        specialization: None,
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"firstName\":\"Jean\""));
    assert!(json.contains("\"userName\":\"jdupont\""));
    assert!(json.contains("\"role\":\"PATIENT\""));
    assert!(!json.contains("specialization"));
}

#[test]
fn book_request_serializes_camel_case() {
    let request = BookAppointmentRequest {
        doctor_id: 3,
        date: "2025-05-01".to_owned(),
        reason: "Consultation".to_owned(),
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"doctorId\":3"));
    assert!(json.contains("\"date\":\"2025-05-01\""));
}
