//! Route components, one module per page.

pub mod about;
pub mod book_appointment;
pub mod doctor_dashboard;
pub mod home;
pub mod login;
pub mod patient_dashboard;
pub mod register;
