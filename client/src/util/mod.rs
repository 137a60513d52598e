//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! the `<html>` theme attribute) from page and component logic to improve
//! reuse and testability.

pub mod auth;
pub mod clock;
pub mod nav;
pub mod rate;
pub mod storage;
pub mod theme;
pub mod validate;
