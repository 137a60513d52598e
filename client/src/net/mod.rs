//! Networking-shaped modules: the auth backend seam and the JSON API helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` hosts the simulated authentication service, `api` the generic
//! authenticated request helper, and `types` the records they exchange.

pub mod api;
pub mod auth;
pub mod types;
