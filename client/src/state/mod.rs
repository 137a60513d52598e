//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `fields`, `forms`, `submit`, etc.) so
//! pages and components depend on small focused models. Each value lives in
//! an `RwSignal` provided via context or owned by a page.

pub mod auth;
pub mod fields;
pub mod forms;
pub mod notifications;
pub mod submit;
pub mod ui;
