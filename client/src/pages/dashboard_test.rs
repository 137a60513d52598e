use super::*;

fn user(started: Option<SessionStart>) -> User {
    User {
        id: 7,
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        token: "demo-jwt-token-7".to_owned(),
        avatar: None,
        started,
    }
}

#[test]
fn initials_take_first_letters_of_two_words() {
    assert_eq!(initials("Demo User"), "DU");
    assert_eq!(initials("ada lovelace byron"), "AL");
}

#[test]
fn initials_handle_single_and_empty_names() {
    assert_eq!(initials("Cher"), "C");
    assert_eq!(initials("   "), "");
}

#[test]
fn session_label_reflects_how_session_started() {
    let login = user(Some(SessionStart::LoginTime("2026-01-02T03:04:05Z".to_owned())));
    assert_eq!(session_label(&login), "Logged in 2026-01-02T03:04:05Z");

    let signup = user(Some(SessionStart::SignupTime("2026-02-03T04:05:06Z".to_owned())));
    assert_eq!(session_label(&signup), "Joined 2026-02-03T04:05:06Z");
}

#[test]
fn session_label_without_timestamp_is_generic() {
    assert_eq!(session_label(&user(None)), "Signed in");
}
