//! Doctor service wrappers: the appointment workflow endpoints and the
//! public doctor directory used when booking.

#[cfg(test)]
#[path = "doctor_test.rs"]
mod doctor_test;

use super::api::{self, ApiError};
use super::types::{Appointment, AppointmentStats, Doctor};

pub(crate) const APPOINTMENTS_ENDPOINT: &str = "/doctor/appointment";
pub(crate) const PENDING_ENDPOINT: &str = "/doctor/appointment/pending";
pub(crate) const STATS_ENDPOINT: &str = "/doctor/appointment/stats";
pub(crate) const PUBLIC_DIRECTORY_ENDPOINT: &str = "/doctor/public/all";
pub(crate) const DIRECTORY_ENDPOINT: &str = "/doctor";

pub(crate) fn approve_endpoint(id: i64) -> String {
    format!("/doctor/appointment/{id}/approve")
}

pub(crate) fn reject_endpoint(id: i64) -> String {
    format!("/doctor/appointment/{id}/reject")
}

/// The signed-in doctor's own appointments.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn my_appointments(token: &str) -> Result<Vec<Appointment>, ApiError> {
    api::get_json(APPOINTMENTS_ENDPOINT, Some(token)).await
}

/// Booking requests awaiting this doctor's decision.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn pending_appointments(token: &str) -> Result<Vec<Appointment>, ApiError> {
    api::get_json(PENDING_ENDPOINT, Some(token)).await
}

/// Approve a pending appointment; answers with its new state.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn approve_appointment(token: &str, id: i64) -> Result<Appointment, ApiError> {
    api::put_json(&approve_endpoint(id), &serde_json::json!({}), Some(token)).await
}

/// Reject a pending appointment; answers with its new state.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn reject_appointment(token: &str, id: i64) -> Result<Appointment, ApiError> {
    api::put_json(&reject_endpoint(id), &serde_json::json!({}), Some(token)).await
}

/// Dashboard counters for the signed-in doctor.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn appointment_stats(token: &str) -> Result<AppointmentStats, ApiError> {
    api::get_json(STATS_ENDPOINT, Some(token)).await
}

/// The doctor directory for the booking form: the public endpoint first,
/// then the authenticated one when the public listing is unavailable.
///
/// # Errors
///
/// Returns the fallback's [`ApiError`] when both listings fail.
pub async fn all_doctors(token: Option<&str>) -> Result<Vec<Doctor>, ApiError> {
    match api::get_json(PUBLIC_DIRECTORY_ENDPOINT, None).await {
        Ok(doctors) => Ok(doctors),
        Err(_) => api::get_json(DIRECTORY_ENDPOINT, token).await,
    }
}
