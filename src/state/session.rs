//! Persisted session store: the single source of truth for "is someone
//! logged in, and as what role".
//!
//! DESIGN
//! ======
//! Storage access goes through the `SessionRepository` trait so the route
//! guard and auth client can be exercised against an in-memory fake. The
//! browser implementation reads localStorage fresh on every call rather
//! than caching: another tab may have logged out since the last navigation,
//! and writes are last-writer-wins. Corrupt or unrecognized stored data
//! reads as "no session" — never an error.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, Session, User};
use crate::util::storage;

/// localStorage key holding the serialized session JSON.
pub const SESSION_KEY: &str = "escreva_session";

/// Parse a stored session blob. Unknown or outdated shapes read as absent.
pub fn parse_session(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

/// Current wall clock in epoch seconds. Zero on the server, where no
/// session-dependent decision is ever final.
pub fn now_epoch_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Persistence boundary for the login session.
pub trait SessionRepository {
    /// Load the stored session, or `None` if absent or unreadable.
    fn load(&self) -> Option<Session>;
    /// Persist tokens and profile atomically; later loads see the new value.
    fn store(&self, session: &Session);
    /// Drop all persisted session data.
    fn clear(&self);

    /// True iff a session exists and its token is unexpired at `now_secs`.
    fn is_authenticated(&self, now_secs: i64) -> bool {
        self.load().is_some_and(|s| s.is_active(now_secs))
    }

    /// Cached profile of the logged-in user, if any.
    fn current_user(&self) -> Option<User> {
        self.load().map(|s| s.user)
    }

    /// Role of the logged-in user, from the cached profile. The access
    /// token's `role` claim exists too but the profile is authoritative.
    fn current_role(&self) -> Option<Role> {
        self.load().map(|s| s.user.role)
    }
}

/// localStorage-backed repository used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessions;

impl SessionRepository for BrowserSessions {
    fn load(&self) -> Option<Session> {
        let raw = storage::load_raw(SESSION_KEY)?;
        let parsed = parse_session(&raw);
        if parsed.is_none() {
            log::warn!("discarding unreadable stored session");
            storage::remove(SESSION_KEY);
        }
        parsed
    }

    fn store(&self, session: &Session) {
        storage::save_json(SESSION_KEY, session);
        log::debug!("session stored for role {:?}", session.user.role);
    }

    fn clear(&self) {
        storage::remove(SESSION_KEY);
        log::debug!("session cleared");
    }
}

/// In-memory repository for tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemorySessions {
    slot: std::cell::RefCell<Option<Session>>,
}

impl SessionRepository for MemorySessions {
    fn load(&self) -> Option<Session> {
        self.slot.borrow().clone()
    }

    fn store(&self, session: &Session) {
        *self.slot.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
