use super::*;

fn student() -> User {
    User {
        id: "u-1".to_owned(),
        first_name: "Maria".to_owned(),
        last_name: "Souza".to_owned(),
        email: "maria@example.com".to_owned(),
        role: Role::Student,
        profile_picture_url: None,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn greeting_uses_the_first_name() {
    let user = student();
    assert_eq!(greeting_line(Some(&user)), "Welcome, Maria!");
}

#[test]
fn greeting_without_a_cached_profile_stays_generic() {
    assert_eq!(greeting_line(None), "Welcome!");
}
