//! Patient dashboard state: the signed-in patient's appointment list.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use crate::net::types::Appointment;

#[derive(Clone, Debug, Default)]
pub struct AppointmentsState {
    pub items: Vec<Appointment>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}
