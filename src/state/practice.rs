//! Doctor dashboard state: agenda, pending requests, and counters.

#[cfg(test)]
#[path = "practice_test.rs"]
mod practice_test;

use crate::net::types::{Appointment, AppointmentStats};

#[derive(Clone, Debug, Default)]
pub struct PracticeState {
    /// Approved appointments shown in the agenda.
    pub appointments: Vec<Appointment>,
    /// Booking requests awaiting a decision.
    pub pending: Vec<Appointment>,
    pub stats: AppointmentStats,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}
