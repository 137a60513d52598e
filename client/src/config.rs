//! Client configuration: storage keys, routes, timings, and the auth
//! simulator's fixed behavior.
//!
//! DESIGN
//! ======
//! The browser build has no environment to read from, so everything here is
//! compile-time. `AuthSimConfig` is the one value-level knob; tests build it
//! with zero latency.

/// `localStorage` key holding the signed-in user record (JSON).
pub const USER_STORAGE_KEY: &str = "warnesia_user";
/// `localStorage` key holding the theme preference (plain string).
pub const THEME_STORAGE_KEY: &str = "warnesia_theme";

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Delay between a successful auth outcome and navigation.
pub const REDIRECT_DELAY_MS: u32 = 1000;
/// Lifetime of a notification before it removes itself.
pub const NOTIFICATION_TTL_MS: u32 = 5000;
/// Quiet period before the live password-confirmation check runs.
pub const CONFIRM_DEBOUNCE_MS: u32 = 250;
/// Minimum spacing between repeated "coming soon" notices from one control.
pub const PLACEHOLDER_THROTTLE_MS: u32 = 1000;

/// Fixed behavior of the simulated authentication backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSimConfig {
    pub demo_email: String,
    pub demo_password: String,
    /// Signups for this address are rejected as already registered.
    pub reserved_email: String,
    pub login_latency_ms: u32,
    pub signup_latency_ms: u32,
}

impl Default for AuthSimConfig {
    fn default() -> Self {
        Self {
            demo_email: "demo@warnesia.com".to_owned(),
            demo_password: "password123".to_owned(),
            reserved_email: "existing@example.com".to_owned(),
            login_latency_ms: 1500,
            signup_latency_ms: 2000,
        }
    }
}

impl AuthSimConfig {
    /// Same credentials, no artificial delay.
    pub fn instant() -> Self {
        Self { login_latency_ms: 0, signup_latency_ms: 0, ..Self::default() }
    }
}
