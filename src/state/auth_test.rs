use super::*;
use crate::net::types::Role;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn logged_in_carries_the_user_and_clears_loading() {
    let user = User {
        id: "u-1".to_owned(),
        first_name: "Ana".to_owned(),
        last_name: "Lima".to_owned(),
        email: "ana@example.com".to_owned(),
        role: Role::Student,
        profile_picture_url: None,
        created_at: None,
        updated_at: None,
    };
    let state = AuthState::logged_in(user.clone());
    assert_eq!(state.user, Some(user));
    assert!(!state.loading);
}
