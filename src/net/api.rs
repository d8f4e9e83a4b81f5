//! REST auth client for the Escreva+ API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors, since identity operations are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every public operation resolves to `Result<_, AuthError>`; network and
//! parse failures are mapped, never propagated as panics. Input validation
//! runs before any request so malformed payloads never leave the client.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

use crate::net::types::{AuthError, Role, User};
#[cfg(feature = "hydrate")]
use crate::net::types::Session;
use crate::state::session::SessionRepository;
use crate::util::validate;

#[cfg(feature = "hydrate")]
const LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(feature = "hydrate")]
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
#[cfg(feature = "hydrate")]
const RECOVER_ENDPOINT: &str = "/api/auth/recover-password";
#[cfg(feature = "hydrate")]
const REGISTER_ENDPOINT: &str = "/api/users/register";
#[cfg(feature = "hydrate")]
const ESSAYS_ENDPOINT: &str = "/api/essays";

/// Registration form as collected by the register page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful login body: token pair plus the profile to cache.
#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_at: Option<i64>,
    user: User,
}

/// Generic `{ "message": ... }` body used by recovery and registration.
#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Error body shape the API uses for rejections. `code` is the structured
/// contract; `message` is human-readable prose.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Trim and require both login fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), AuthError> {
    let email = validate::validate_email(email).map_err(|e| AuthError::InvalidInput(e.to_owned()))?;
    if password.is_empty() {
        return Err(AuthError::InvalidInput("Enter your password.".to_owned()));
    }
    Ok((email, password.to_owned()))
}

/// Validate a registration form field by field. The first failure wins;
/// the page maps it back onto the offending input.
fn validate_registration(form: &RegisterForm) -> Result<RegisterForm, AuthError> {
    let first_name =
        validate::validate_name(&form.first_name).map_err(|e| AuthError::InvalidInput(e.to_owned()))?;
    let last_name =
        validate::validate_name(&form.last_name).map_err(|e| AuthError::InvalidInput(e.to_owned()))?;
    let email = validate::validate_email(&form.email).map_err(|e| AuthError::InvalidInput(e.to_owned()))?;
    validate::validate_password(&form.password).map_err(|e| AuthError::InvalidInput(e.to_owned()))?;
    Ok(RegisterForm {
        first_name,
        last_name,
        email,
        password: form.password.clone(),
        role: form.role,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn build_login_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
fn build_recover_payload(email: &str) -> serde_json::Value {
    serde_json::json!({ "email": email })
}

#[cfg(any(test, feature = "hydrate"))]
fn build_register_payload(form: &RegisterForm) -> serde_json::Value {
    serde_json::json!({
        "first_name": form.first_name,
        "last_name": form.last_name,
        "email": form.email,
        "password": form.password,
        "role": form.role.as_str(),
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn build_essay_payload(theme: &str, body: &str) -> serde_json::Value {
    serde_json::json!({ "theme": theme, "body": body })
}

/// Map a non-OK login status. Any rejection of the credential check reads
/// as bad credentials; everything else is the server's problem.
#[cfg(any(test, feature = "hydrate"))]
fn map_login_failure(status: u16) -> AuthError {
    match status {
        400 | 401 | 403 => AuthError::InvalidCredentials,
        _ => AuthError::Server(status),
    }
}

/// Map a non-OK registration response. The structured `code` field is
/// checked first; scanning the prose message for "email" is a compatibility
/// shim for backends that predate error codes.
#[cfg(any(test, feature = "hydrate"))]
fn map_register_failure(status: u16, body: &str) -> AuthError {
    let parsed: Option<ApiErrorBody> = serde_json::from_str(body).ok();
    if let Some(err) = parsed {
        if err.code.as_deref() == Some("EMAIL_EXISTS") {
            return AuthError::EmailExists;
        }
        if matches!(status, 400 | 409) {
            if let Some(message) = &err.message {
                if message.to_lowercase().contains("email") {
                    return AuthError::EmailExists;
                }
            }
        }
    }
    AuthError::Server(status)
}

/// Map a non-OK recovery status. An unknown address is an input problem the
/// user can fix; the rest is not.
#[cfg(any(test, feature = "hydrate"))]
fn map_recover_failure(status: u16) -> AuthError {
    match status {
        400 | 404 => AuthError::InvalidInput("We could not find an account with this email.".to_owned()),
        _ => AuthError::Server(status),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Log in and persist the resulting session.
///
/// # Errors
///
/// `InvalidInput` before any network call, `InvalidCredentials` on a
/// rejected credential check, `Network` on connectivity failure, `Server`
/// otherwise.
pub async fn login(
    repo: &impl SessionRepository,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    let (email, password) = validate_login_input(email, password)?;
    #[cfg(feature = "hydrate")]
    {
        let payload = build_login_payload(&email, &password);
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let status = resp.status();
        if !resp.ok() {
            log::debug!("login rejected with status {status}");
            return Err(map_login_failure(status));
        }
        let body: LoginResponse = resp.json().await.map_err(|_| AuthError::Server(status))?;
        let session = Session {
            access_token: body.access_token,
            refresh_token: body.refresh_token,
            expires_at: body.expires_at,
            user: body.user.clone(),
        };
        repo.store(&session);
        log::debug!("login ok, role {:?}", body.user.role);
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (repo, email, password);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Log out: the local session is cleared first, so logout is effective even
/// when the notification to the server never arrives.
pub async fn logout(repo: &impl SessionRepository) {
    repo.clear();
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await;
    }
}

/// Request a password-recovery email. Resolves to the confirmation message.
///
/// # Errors
///
/// `InvalidInput` for a malformed address (no network call is made),
/// `Network`/`Server` for transport or backend failures.
pub async fn recover_password(email: &str) -> Result<String, AuthError> {
    let email = validate::validate_email(email).map_err(|e| AuthError::InvalidInput(e.to_owned()))?;
    #[cfg(feature = "hydrate")]
    {
        let payload = build_recover_payload(&email);
        let resp = gloo_net::http::Request::post(RECOVER_ENDPOINT)
            .json(&payload)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let status = resp.status();
        if !resp.ok() {
            return Err(map_recover_failure(status));
        }
        let body: MessageResponse = resp.json().await.unwrap_or(MessageResponse { message: None });
        Ok(body
            .message
            .unwrap_or_else(|| "Check your inbox for a recovery link.".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Create an account. Does not log the user in; the page routes back to the
/// landing form on success.
///
/// # Errors
///
/// `InvalidInput` for rejected fields (no network call), `EmailExists` on a
/// duplicate-email conflict, `Network`/`Server` otherwise.
pub async fn register(form: &RegisterForm) -> Result<String, AuthError> {
    let form = validate_registration(form)?;
    #[cfg(feature = "hydrate")]
    {
        let payload = build_register_payload(&form);
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(&payload)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let status = resp.status();
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            log::debug!("registration rejected with status {status}");
            return Err(map_register_failure(status, &body));
        }
        let body: MessageResponse = resp.json().await.unwrap_or(MessageResponse { message: None });
        Ok(body
            .message
            .unwrap_or_else(|| "Account created. You can sign in now.".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Submit an essay for correction, authorized by the stored session's
/// bearer token.
///
/// # Errors
///
/// `InvalidCredentials` when no usable session exists, `Network`/`Server`
/// for transport or backend failures.
pub async fn submit_essay(
    repo: &impl SessionRepository,
    theme: &str,
    body: &str,
) -> Result<String, AuthError> {
    let Some(session) = repo.load() else {
        return Err(AuthError::InvalidCredentials);
    };
    #[cfg(feature = "hydrate")]
    {
        let payload = build_essay_payload(theme, body);
        let resp = gloo_net::http::Request::post(ESSAYS_ENDPOINT)
            .header("Authorization", &bearer(&session.access_token))
            .json(&payload)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let status = resp.status();
        if !resp.ok() {
            return Err(match status {
                401 | 403 => AuthError::InvalidCredentials,
                _ => AuthError::Server(status),
            });
        }
        let parsed: MessageResponse = resp.json().await.unwrap_or(MessageResponse { message: None });
        Ok(parsed
            .message
            .unwrap_or_else(|| "Essay submitted for correction.".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, theme, body);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}
