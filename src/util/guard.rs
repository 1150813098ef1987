//! Role-based routing policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same rules apply after login and after registration, and again on
//! entry to each role-restricted page: guests go to the login form, a
//! signed-in user with the wrong role goes back home. The guard runs once
//! per page entry as a client-side effect, not continuously.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::session::SessionState;

/// Landing route for a freshly authenticated (or guest) role.
pub fn landing_route(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Doctor) => "/doctor/dashboard",
        Some(Role::Patient) => "/patient/dashboard",
        None => "/home",
    }
}

/// Redirect away from a role-restricted page when the session does not
/// grant access: unauthenticated to `/auth/login`, wrong role to `/home`.
pub fn install_role_guard<F>(session: RwSignal<SessionState>, required: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if !state.logged_in() {
            navigate("/auth/login", NavigateOptions::default());
        } else if state.role() != Some(required) {
            navigate("/home", NavigateOptions::default());
        }
    });
}
