use super::*;

fn sample_session(role: Role, expires_at: i64) -> Session {
    Session {
        access_token: "a".to_owned(),
        refresh_token: "r".to_owned(),
        expires_at: Some(expires_at),
        user: User {
            id: "u-1".to_owned(),
            first_name: "Maria".to_owned(),
            last_name: "Souza".to_owned(),
            email: "maria@example.com".to_owned(),
            role,
            profile_picture_url: None,
            created_at: None,
            updated_at: None,
        },
    }
}

// =============================================================
// Repository round-trip
// =============================================================

#[test]
fn store_then_load_round_trips_immediately() {
    let repo = MemorySessions::default();
    let session = sample_session(Role::Student, 2_000);
    repo.store(&session);
    assert_eq!(repo.load(), Some(session));
    assert!(repo.is_authenticated(1_999));
}

#[test]
fn clear_removes_everything() {
    let repo = MemorySessions::default();
    repo.store(&sample_session(Role::Teacher, 2_000));
    repo.clear();
    assert_eq!(repo.load(), None);
    assert!(!repo.is_authenticated(0));
    assert_eq!(repo.current_user(), None);
    assert_eq!(repo.current_role(), None);
}

#[test]
fn empty_repository_is_unauthenticated() {
    let repo = MemorySessions::default();
    assert!(!repo.is_authenticated(0));
    assert_eq!(repo.current_user(), None);
}

#[test]
fn expired_session_is_not_authenticated_but_profile_remains_readable() {
    let repo = MemorySessions::default();
    repo.store(&sample_session(Role::Student, 1_000));
    assert!(!repo.is_authenticated(1_000));
    // The cached profile is still there until an explicit clear.
    assert!(repo.current_user().is_some());
}

#[test]
fn current_role_comes_from_the_cached_profile() {
    let repo = MemorySessions::default();
    repo.store(&sample_session(Role::Teacher, 2_000));
    assert_eq!(repo.current_role(), Some(Role::Teacher));
}

#[test]
fn overwriting_a_session_is_last_writer_wins() {
    let repo = MemorySessions::default();
    repo.store(&sample_session(Role::Student, 2_000));
    repo.store(&sample_session(Role::Teacher, 3_000));
    assert_eq!(repo.current_role(), Some(Role::Teacher));
}

// =============================================================
// Stored-blob parsing (fail closed)
// =============================================================

#[test]
fn parse_session_accepts_the_serialized_shape() {
    let session = sample_session(Role::Student, 2_000);
    let raw = serde_json::to_string(&session).unwrap();
    assert_eq!(parse_session(&raw), Some(session));
}

#[test]
fn parse_session_rejects_corrupt_data() {
    assert_eq!(parse_session("not json at all"), None);
    assert_eq!(parse_session(""), None);
    assert_eq!(parse_session("{\"access_token\": 42}"), None);
}

#[test]
fn parse_session_rejects_unknown_old_shapes() {
    // A pre-release shape that only stored a bare token string.
    assert_eq!(parse_session("{\"token\":\"abc\"}"), None);
}
