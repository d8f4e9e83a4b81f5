//! Shared wire DTOs, the role model, and the auth error taxonomy.
//!
//! DESIGN
//! ======
//! Roles are a closed enum so the redirect mapping stays exhaustive; unknown
//! role strings from the server or old stored sessions normalize to `None`
//! at the boundary instead of leaking as raw strings. Token claims are
//! derived from the access token on demand and never persisted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of user roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    /// Normalize a role string from storage or the API. Unknown values map
    /// to `None` so callers fall back to unauthenticated behavior.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "teacher" => Some(Self::Teacher),
            "student" => Some(Self::Student),
            _ => None,
        }
    }

    /// Wire representation, matching the serde rename.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }
}

/// Home path for a role, or the unauthenticated landing page when the role
/// is absent or was rejected at the boundary.
///
/// Pure and total: navigation itself happens elsewhere.
pub fn redirect_path(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Teacher) => "/teacher/home",
        Some(Role::Student) => "/student/home",
        None => "/",
    }
}

/// An Escreva+ account as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (opaque string).
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    /// Avatar image URL, if the user uploaded one.
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    /// ISO 8601 creation timestamp, if the server reports it.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO 8601 last-update timestamp, if the server reports it.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    /// Display name for greetings and headers.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A logged-in session: token pair plus the cached profile. Serialized as a
/// single JSON value in localStorage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Epoch seconds after which the access token is stale. When the server
    /// omits it, expiry falls back to the decoded token's `exp` claim.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

impl Session {
    /// Whether the session's access token is still usable at `now_secs`.
    /// A session with no known expiry reads as expired.
    pub fn is_active(&self, now_secs: i64) -> bool {
        self.expires_at
            .or_else(|| decode_claims(&self.access_token).map(|c| c.exp))
            .is_some_and(|exp| exp > now_secs)
    }
}

/// Claims carried in the access token payload. Decoded on demand; the
/// client does not verify signatures.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub token_type: Option<String>,
    /// Expiry, epoch seconds.
    pub exp: i64,
    /// Issued-at, epoch seconds.
    #[serde(default)]
    pub iat: Option<i64>,
    /// Unique token id.
    #[serde(default)]
    pub jti: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Decode the payload segment of a JWT-shaped token. Anything malformed
/// (wrong segment count, bad base64, bad JSON) decodes to `None`.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Failures surfaced by the auth client. Every public operation returns
/// `Result<_, AuthError>`; nothing panics past this boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Client-side validation failure; never reached the network.
    #[error("{0}")]
    InvalidInput(String),
    #[error("Invalid email or password.")]
    InvalidCredentials,
    /// Duplicate-email conflict at registration, shown on the email field.
    #[error("An account with this email already exists.")]
    EmailExists,
    /// Connectivity or timeout failure before a response arrived.
    #[error("Could not reach the server. Check your connection.")]
    Network(String),
    /// Unexpected status or unparsable body.
    #[error("Something went wrong on our side. Try again shortly.")]
    Server(u16),
}
