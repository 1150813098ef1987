//! Session store: the one place the bearer token lives.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides an `RwSignal<SessionState>` context; that signal is the
//! authenticated-state broadcast. Pages and the navbar subscribe by reading
//! it inside effects and closures, and Leptos drops those subscriptions
//! with the view. Identity and role are derived freshly from the stored
//! token on every read so they can never diverge from it, and the token is
//! the only value persisted across reloads.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::util::jwt::{self, Claims};
use crate::util::storage;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// The current session: at most one per browser context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
}

impl SessionState {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    /// Rebuild the session from durable storage; empty on SSR.
    pub fn restore() -> Self {
        Self::new(storage::read(TOKEN_KEY))
    }

    /// A token is present and not past its expiry claim.
    pub fn logged_in(&self) -> bool {
        !jwt::is_expired(self.token.as_deref())
    }

    /// Role claim of the current token; `None` is the guest state.
    pub fn role(&self) -> Option<Role> {
        jwt::role(self.token.as_deref())
    }

    /// Decoded claims of the current token, if it decodes.
    pub fn claims(&self) -> Option<Claims> {
        self.token.as_deref().and_then(|t| jwt::decode(t).ok())
    }

    /// Display name from the claims: full name when present, else the
    /// account email.
    pub fn display_name(&self) -> Option<String> {
        let claims = self.claims()?;
        match (claims.first_name, claims.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first),
            (None, Some(last)) => Some(last),
            (None, None) => claims.sub,
        }
    }
}

/// Persist `token` and broadcast the authenticated state change.
pub fn save_token(session: RwSignal<SessionState>, token: String) {
    storage::write(TOKEN_KEY, &token);
    session.set(SessionState::new(Some(token)));
}

/// Clear the persisted token and broadcast the change. Navigation back to
/// the landing page is the caller's responsibility.
pub fn logout(session: RwSignal<SessionState>) {
    storage::remove(TOKEN_KEY);
    session.set(SessionState::default());
}
