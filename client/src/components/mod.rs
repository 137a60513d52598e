//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form groups, status surfaces, and navigation chrome while
//! reading/writing shared state from Leptos context providers or page-owned
//! signals passed in as props.

pub mod field_group;
pub mod loading_modal;
pub mod notifications;
pub mod password_strength;
pub mod social_buttons;
pub mod submit_button;
pub mod theme_toggle;
