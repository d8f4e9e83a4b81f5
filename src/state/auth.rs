//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as a context signal by `App` and read by pages for greetings and
//! identity-dependent rendering. Route protection itself goes through the
//! session repository, not this struct.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Reactive authentication state: the cached profile plus a loading flag
/// for the window between hydration and the first session read.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State for a freshly established or restored session.
    pub fn logged_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }
}
