use super::*;
use crate::net::types::SessionStart;
use crate::util::storage::{MemoryStorage, save_to_storage};

fn stored_user() -> User {
    User {
        id: 1,
        name: "Demo User".to_owned(),
        email: "demo@warnesia.com".to_owned(),
        token: "demo-jwt-token".to_owned(),
        avatar: None,
        started: Some(SessionStart::LoginTime("2026-01-01T00:00:00Z".to_owned())),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_is_loading() {
    assert!(AuthState::default().loading);
}

// =============================================================
// Store-backed session
// =============================================================

#[test]
fn from_store_without_record_is_anonymous() {
    let store = MemoryStorage::new();
    let state = AuthState::from_store(&store);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn from_store_with_record_is_authenticated() {
    let store = MemoryStorage::new();
    assert!(save_to_storage(&store, USER_STORAGE_KEY, &stored_user()));
    let state = AuthState::from_store(&store);
    assert_eq!(state.user, Some(stored_user()));
}

#[test]
fn corrupt_record_reads_as_anonymous() {
    let store = MemoryStorage::new();
    store.set_item(USER_STORAGE_KEY, "{\"id\":").unwrap();
    assert_eq!(current_user(&store), None);
}

#[test]
fn clear_session_removes_record() {
    let store = MemoryStorage::new();
    save_to_storage(&store, USER_STORAGE_KEY, &stored_user());
    assert!(clear_session(&store));
    assert_eq!(current_user(&store), None);
}

#[test]
fn from_store_accepts_record_without_session_timestamp() {
    let store = MemoryStorage::new();
    store
        .set_item(
            USER_STORAGE_KEY,
            r#"{"id":1,"name":"Demo User","email":"demo@warnesia.com","token":"demo-jwt-token","avatar":null}"#,
        )
        .unwrap();
    let state = AuthState::from_store(&store);
    assert!(state.is_authenticated());
    assert_eq!(state.user.and_then(|u| u.started), None);
}
