use super::*;

fn sample_user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        first_name: "Maria".to_owned(),
        last_name: "Souza".to_owned(),
        email: "maria@example.com".to_owned(),
        role,
        profile_picture_url: None,
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// Role parsing and redirect mapping
// =============================================================

#[test]
fn role_parse_accepts_known_values_case_insensitively() {
    assert_eq!(Role::parse("teacher"), Some(Role::Teacher));
    assert_eq!(Role::parse(" Student "), Some(Role::Student));
    assert_eq!(Role::parse("TEACHER"), Some(Role::Teacher));
}

#[test]
fn role_parse_rejects_unknown_values() {
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse(""), None);
    assert_eq!(Role::parse("students "), None);
}

#[test]
fn redirect_path_maps_each_role_to_its_home() {
    assert_eq!(redirect_path(Some(Role::Teacher)), "/teacher/home");
    assert_eq!(redirect_path(Some(Role::Student)), "/student/home");
}

#[test]
fn redirect_path_defaults_to_landing_without_a_role() {
    assert_eq!(redirect_path(None), "/");
    // Unknown role strings normalize to None at the boundary and land here.
    assert_eq!(redirect_path(Role::parse("admin")), "/");
}

#[test]
fn role_round_trips_through_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), "\"teacher\"");
    let parsed: Role = serde_json::from_str("\"student\"").unwrap();
    assert_eq!(parsed, Role::Student);
}

// =============================================================
// Session expiry
// =============================================================

fn session_with(expires_at: Option<i64>, token: &str) -> Session {
    Session {
        access_token: token.to_owned(),
        refresh_token: "r".to_owned(),
        expires_at,
        user: sample_user(Role::Student),
    }
}

#[test]
fn session_active_before_expiry() {
    let session = session_with(Some(1_000), "opaque");
    assert!(session.is_active(999));
    assert!(!session.is_active(1_000));
    assert!(!session.is_active(2_000));
}

#[test]
fn session_without_expiry_falls_back_to_token_claims() {
    let token = unsigned_token(&serde_json::json!({ "exp": 500 }));
    let session = session_with(None, &token);
    assert!(session.is_active(499));
    assert!(!session.is_active(500));
}

#[test]
fn session_with_no_expiry_information_reads_as_expired() {
    let session = session_with(None, "not-a-jwt");
    assert!(!session.is_active(0));
}

// =============================================================
// Token claim decoding
// =============================================================

fn unsigned_token(payload: &serde_json::Value) -> String {
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"none\"}");
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).unwrap());
    format!("{header}.{body}.")
}

#[test]
fn decode_claims_reads_a_well_formed_payload() {
    let token = unsigned_token(&serde_json::json!({
        "token_type": "access",
        "exp": 1_700_000_000i64,
        "iat": 1_699_990_000i64,
        "jti": "t-42",
        "user_id": "u-1",
        "role": "teacher",
    }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.token_type.as_deref(), Some("access"));
    assert_eq!(claims.exp, 1_700_000_000);
    assert_eq!(claims.iat, Some(1_699_990_000));
    assert_eq!(claims.jti.as_deref(), Some("t-42"));
    assert_eq!(claims.user_id.as_deref(), Some("u-1"));
    assert_eq!(claims.role, Some(Role::Teacher));
}

#[test]
fn decode_claims_tolerates_minimal_payloads() {
    let token = unsigned_token(&serde_json::json!({ "exp": 10 }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.exp, 10);
    assert_eq!(claims.role, None);
}

#[test]
fn decode_claims_rejects_garbage() {
    assert_eq!(decode_claims(""), None);
    assert_eq!(decode_claims("only-one-segment"), None);
    assert_eq!(decode_claims("a.!!!not-base64!!!.c"), None);
    // Valid base64, invalid JSON.
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let bad = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"not json"));
    assert_eq!(decode_claims(&bad), None);
}

// =============================================================
// User display
// =============================================================

#[test]
fn full_name_joins_first_and_last() {
    assert_eq!(sample_user(Role::Teacher).full_name(), "Maria Souza");
}

#[test]
fn user_deserializes_without_optional_timestamps() {
    let raw = serde_json::json!({
        "id": "u-9",
        "first_name": "Ana",
        "last_name": "Lima",
        "email": "ana@example.com",
        "role": "student",
        "profile_picture_url": null,
    });
    let user: User = serde_json::from_value(raw).unwrap();
    assert_eq!(user.role, Role::Student);
    assert_eq!(user.created_at, None);
}
