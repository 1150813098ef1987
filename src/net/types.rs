//! Wire DTOs for the clinic backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips
//! stay lossless; display helpers live next to the enums they describe.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access-level enumeration gating views and actions.
///
/// Absence (guest or unrecognized claim) is modeled as `Option<Role>::None`
/// at call sites rather than a variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "DOCTOR")]
    Doctor,
    #[serde(rename = "PATIENT")]
    Patient,
}

impl Role {
    /// Map a raw token claim onto a role; unrecognized values are guest.
    pub fn from_claim(value: &str) -> Option<Self> {
        match value {
            "DOCTOR" => Some(Self::Doctor),
            "PATIENT" => Some(Self::Patient),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Doctor => "DOCTOR",
            Self::Patient => "PATIENT",
        }
    }
}

/// Lifecycle of an appointment, owned and transitioned by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "APPROVED")]
    Approved,
    #[serde(rename = "REJECTED")]
    Rejected,
    /// Any status value this client does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    /// Color class used by the dashboards' status badges.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Approved => "green",
            Self::Pending => "blue",
            Self::Rejected => "red",
            Self::Unknown => "gray",
        }
    }

    /// User-facing status label.
    pub fn text_fr(self) -> &'static str {
        match self {
            Self::Approved => "Approuvé",
            Self::Pending => "En attente",
            Self::Rejected => "Rejeté",
            Self::Unknown => "Inconnu",
        }
    }
}

/// An appointment as returned by both the doctor and patient services.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    /// ISO date, `YYYY-MM-DD` with an optional time suffix.
    pub date: String,
    #[serde(default)]
    pub status: AppointmentStatus,
    pub patient_id: i64,
    pub doctor_id: i64,
    /// Patient display fields, present on the doctor-facing endpoints.
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub patient_email: Option<String>,
}

/// A doctor in the booking directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    /// The backend has shipped both spellings of this field.
    #[serde(default, alias = "speciality")]
    pub specialization: String,
}

/// Doctor dashboard counters from `/doctor/appointment/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentStats {
    #[serde(default)]
    pub total_appointments: i64,
    #[serde(default)]
    pub pending_appointments: i64,
}

/// Token envelope returned by both auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Payload for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

/// Payload for `POST /patient/appointments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    pub doctor_id: i64,
    /// ISO date, validated as today-or-later before it leaves the client.
    pub date: String,
    pub reason: String,
}
