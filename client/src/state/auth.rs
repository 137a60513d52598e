//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stored `User` record is the whole session: its presence means "logged
//! in" on every page and there is no expiry. Route guards and navigation
//! chrome read this state; logout deletes the record.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::USER_STORAGE_KEY;
use crate::net::types::User;
use crate::util::storage::{KeyValueStore, get_from_storage, remove_from_storage};

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true until the stored record has been read on the client;
/// guards wait for it so SSR output never triggers a redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Resolved state from whatever record `store` holds.
    pub fn from_store<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self { user: current_user(store), loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

pub fn current_user<S: KeyValueStore + ?Sized>(store: &S) -> Option<User> {
    get_from_storage(store, USER_STORAGE_KEY)
}

/// Forget the stored user. Returns `false` if the backend refused.
pub fn clear_session<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    remove_from_storage(store, USER_STORAGE_KEY)
}
