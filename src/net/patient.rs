//! Patient service wrappers: listing, booking, and cancelling the
//! signed-in patient's appointments.

#[cfg(test)]
#[path = "patient_test.rs"]
mod patient_test;

use super::api::{self, ApiError};
use super::types::{Appointment, BookAppointmentRequest};

pub(crate) const APPOINTMENTS_ENDPOINT: &str = "/patient/appointments";

pub(crate) fn appointment_endpoint(id: i64) -> String {
    format!("/patient/appointments/{id}")
}

/// The signed-in patient's appointments.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn my_appointments(token: &str) -> Result<Vec<Appointment>, ApiError> {
    api::get_json(APPOINTMENTS_ENDPOINT, Some(token)).await
}

/// Book an appointment; the backend answers with the created record in its
/// PENDING state.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails; a 404 means the chosen
/// doctor no longer exists.
pub async fn book_appointment(
    token: &str,
    request: &BookAppointmentRequest,
) -> Result<Appointment, ApiError> {
    api::post_json(APPOINTMENTS_ENDPOINT, request, Some(token)).await
}

/// Cancel one of the patient's appointments.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn cancel_appointment(token: &str, id: i64) -> Result<(), ApiError> {
    api::delete(&appointment_endpoint(id), Some(token)).await
}
