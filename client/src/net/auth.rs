//! Authentication backend seam and its in-memory simulation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form orchestrators depend on `AuthBackend` only. `SimulatedAuth` is the
//! shipped implementation: it waits out an artificial latency, compares
//! against fixed credentials, and persists the resulting `User` on success.
//! A real backend would slot in behind the same trait.
//!
//! TRADE-OFFS
//! ==========
//! There is no retry and no partial result. A call either resolves with a
//! stored user or rejects with an `AuthError` whose message is shown to the
//! user verbatim.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use time::OffsetDateTime;

use super::types::{LoginData, SessionStart, SignupData, User};
use crate::config::{AuthSimConfig, USER_STORAGE_KEY};
use crate::util::clock;
use crate::util::storage::{KeyValueStore, save_to_storage};

const DEMO_USER_ID: u64 = 1;
const DEMO_USER_NAME: &str = "Demo User";
const DEMO_TOKEN: &str = "demo-jwt-token";

/// Rejection reasons surfaced to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email already exists")]
    EmailTaken,
    /// Backend-supplied message; may be empty, in which case the caller's
    /// fallback text is shown instead.
    #[error("{0}")]
    Rejected(String),
}

/// Credential submission with latency and a single success/failure outcome.
pub trait AuthBackend {
    fn login(&self, data: &LoginData) -> impl Future<Output = Result<User, AuthError>>;
    fn signup(&self, data: &SignupData) -> impl Future<Output = Result<User, AuthError>>;
}

/// Hard-coded stand-in for an authentication service.
pub struct SimulatedAuth<S> {
    store: S,
    config: AuthSimConfig,
    clock: fn() -> OffsetDateTime,
}

impl<S: KeyValueStore> SimulatedAuth<S> {
    pub fn new(store: S, config: AuthSimConfig) -> Self {
        Self { store, config, clock: OffsetDateTime::now_utc }
    }

    /// Replace the wall clock used for ids, tokens, and timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self, user: &User) {
        if !save_to_storage(&self.store, USER_STORAGE_KEY, user) {
            log::warn!("signed-in user {} could not be persisted", user.id);
        }
    }
}

impl<S: KeyValueStore> AuthBackend for SimulatedAuth<S> {
    async fn login(&self, data: &LoginData) -> Result<User, AuthError> {
        clock::sleep_ms(self.config.login_latency_ms).await;

        if data.email != self.config.demo_email || data.password != self.config.demo_password {
            return Err(AuthError::InvalidCredentials);
        }

        let user = User {
            id: DEMO_USER_ID,
            name: DEMO_USER_NAME.to_owned(),
            email: data.email.clone(),
            token: DEMO_TOKEN.to_owned(),
            avatar: None,
            started: Some(SessionStart::LoginTime(clock::iso_timestamp((self.clock)()))),
        };
        self.persist(&user);
        Ok(user)
    }

    async fn signup(&self, data: &SignupData) -> Result<User, AuthError> {
        clock::sleep_ms(self.config.signup_latency_ms).await;

        if data.email == self.config.reserved_email {
            return Err(AuthError::EmailTaken);
        }

        let now = (self.clock)();
        let id = clock::unix_millis(now);
        let user = User {
            id,
            name: data.display_name(),
            email: data.email.clone(),
            token: format!("{DEMO_TOKEN}-{id}"),
            avatar: None,
            started: Some(SessionStart::SignupTime(clock::iso_timestamp(now))),
        };
        self.persist(&user);
        Ok(user)
    }
}
