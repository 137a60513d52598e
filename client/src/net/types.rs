//! Records exchanged between the forms, the auth backend, and storage.
//!
//! DESIGN
//! ======
//! `User` is the only persisted shape. Its JSON layout (camelCase keys,
//! explicit `avatar: null`, at most one of `loginTime` / `signupTime`) is what other
//! pages read back from `localStorage`, so serde attributes here are part of
//! the storage contract.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as stored under `warnesia_user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Numeric identifier (the demo account is `1`; signups use a ms timestamp).
    pub id: u64,
    /// Display name.
    pub name: String,
    pub email: String,
    /// Opaque bearer token attached to API requests.
    pub token: String,
    /// Avatar image URL; never set by the simulator.
    pub avatar: Option<String>,
    /// How the session began, and when. Records missing both keys still
    /// count as a session.
    #[serde(flatten)]
    pub started: Option<SessionStart>,
}

/// Session origin, serialized as a single `loginTime` or `signupTime` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionStart {
    /// RFC 3339 timestamp of a login.
    LoginTime(String),
    /// RFC 3339 timestamp of an account creation.
    SignupTime(String),
}

impl SessionStart {
    pub fn timestamp(&self) -> &str {
        match self {
            Self::LoginTime(ts) | Self::SignupTime(ts) => ts,
        }
    }
}

/// Credentials collected from the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginData {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

/// Fields collected from the signup form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SignupData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
    pub newsletter: bool,
}

impl SignupData {
    /// `"<first> <last>"`, as shown in the dashboard greeting.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
