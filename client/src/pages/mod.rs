//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The auth pages drive `state::submit` through a
//! signal-backed view.

pub mod dashboard;
pub(crate) mod form_view;
pub mod home;
pub mod login;
pub mod signup;
