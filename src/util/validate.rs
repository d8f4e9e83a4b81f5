//! Client-side input validation for auth and registration forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Malformed input is rejected here, before any network call, so the auth
//! client only ships plausible payloads and the UI can show field-scoped
//! messages synchronously.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Structural email check: one `@` with a dotted domain, no whitespace.
///
/// Deliverability is the server's problem; this only catches input that
/// cannot possibly be an address.
pub fn is_valid_email(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Trim and validate an email field, returning the normalized address.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Enter your email address.");
    }
    if !is_valid_email(trimmed) {
        return Err("Enter a valid email address.");
    }
    Ok(trimmed.to_owned())
}

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate a new password. Login never calls this; existing accounts may
/// predate the length rule.
pub fn validate_password(raw: &str) -> Result<(), &'static str> {
    if raw.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(())
}

/// Trim and validate a required name field.
pub fn validate_name(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("This field is required.");
    }
    Ok(trimmed.to_owned())
}
