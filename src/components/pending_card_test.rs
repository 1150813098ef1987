use super::*;
use crate::net::types::AppointmentStatus;

fn request(patient_name: Option<&str>) -> Appointment {
    Appointment {
        id: 1,
        date: "2025-03-15".to_owned(),
        status: AppointmentStatus::Pending,
        patient_id: 12,
        doctor_id: 3,
        patient_name: patient_name.map(str::to_owned),
        patient_email: None,
    }
}

#[test]
fn patient_display_uses_name_when_present() {
    assert_eq!(patient_display(&request(Some("Dupont, Jean"))), "Dupont, Jean");
}

#[test]
fn patient_display_falls_back_to_patient_id() {
    assert_eq!(patient_display(&request(None)), "Patient 12");
}
