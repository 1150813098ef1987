//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `appointments`, `practice`) so
//! individual pages can depend on small focused models. Each is provided
//! by `App` as an `RwSignal` context.

pub mod appointments;
pub mod practice;
pub mod session;
