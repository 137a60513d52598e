use super::*;

fn demo_user() -> User {
    User {
        id: 1,
        name: "Demo User".to_owned(),
        email: "demo@warnesia.com".to_owned(),
        token: "demo-jwt-token".to_owned(),
        avatar: None,
        started: Some(SessionStart::LoginTime("2026-01-02T03:04:05Z".to_owned())),
    }
}

// =============================================================
// User JSON layout
// =============================================================

#[test]
fn user_serializes_with_camel_case_and_null_avatar() {
    let value = serde_json::to_value(demo_user()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": 1,
            "name": "Demo User",
            "email": "demo@warnesia.com",
            "token": "demo-jwt-token",
            "avatar": null,
            "loginTime": "2026-01-02T03:04:05Z"
        })
    );
}

#[test]
fn user_with_signup_time_uses_signup_key() {
    let mut user = demo_user();
    user.started = Some(SessionStart::SignupTime("2026-01-02T03:04:05Z".to_owned()));
    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("signupTime").is_some());
    assert!(value.get("loginTime").is_none());
}

#[test]
fn user_parses_record_written_by_browser() {
    let raw = r#"{"id":1700000000000,"name":"Ada Lovelace","email":"ada@example.com","token":"demo-jwt-token-1700000000000","avatar":null,"signupTime":"2023-11-14T22:13:20.000Z"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, 1_700_000_000_000);
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.started.as_ref().map(SessionStart::timestamp), Some("2023-11-14T22:13:20.000Z"));
}

#[test]
fn user_without_session_timestamp_still_parses() {
    let raw = r#"{"id":1,"name":"Demo User","email":"demo@warnesia.com","token":"demo-jwt-token","avatar":null}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.started, None);

    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("loginTime").is_none());
    assert!(value.get("signupTime").is_none());
}

#[test]
fn signup_display_name_joins_first_and_last() {
    let data = SignupData { first_name: "Ada".to_owned(), last_name: "Lovelace".to_owned(), ..SignupData::default() };
    assert_eq!(data.display_name(), "Ada Lovelace");
}
