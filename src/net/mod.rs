//! Remote API surface: shared DTOs, request plumbing, and one wrapper
//! module per backend service (auth, doctor, patient).

pub mod api;
pub mod auth;
pub mod doctor;
pub mod patient;
pub mod types;
