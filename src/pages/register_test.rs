use super::*;

// =============================================================
// Field-scoped error routing
// =============================================================

#[test]
fn duplicate_email_lands_on_the_email_field() {
    let message = email_field_error(&AuthError::EmailExists).unwrap();
    assert!(message.to_lowercase().contains("email"));
}

#[test]
fn other_failures_stay_form_level() {
    assert_eq!(email_field_error(&AuthError::InvalidCredentials), None);
    assert_eq!(email_field_error(&AuthError::Server(500)), None);
    assert_eq!(
        email_field_error(&AuthError::InvalidInput("x".to_owned())),
        None
    );
}

// =============================================================
// Role select normalization
// =============================================================

#[test]
fn role_select_maps_known_values() {
    assert_eq!(role_from_select("teacher"), Role::Teacher);
    assert_eq!(role_from_select("student"), Role::Student);
}

#[test]
fn role_select_defaults_unknown_values_to_student() {
    assert_eq!(role_from_select(""), Role::Student);
    assert_eq!(role_from_select("admin"), Role::Student);
}
