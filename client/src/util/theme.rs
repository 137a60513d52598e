//! Theme initialization and toggle.
//!
//! Reads the stored preference and applies it as a `data-theme` attribute on
//! the `<html>` element. Toggle writes the new value back under
//! `warnesia_theme` as a plain string. DOM access requires a browser; SSR
//! paths no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::THEME_STORAGE_KEY;
use crate::util::storage::{KeyValueStore, load_string, save_string};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Stored preference, if one was saved and is recognizable.
pub fn read_preference<S: KeyValueStore + ?Sized>(store: &S) -> Option<Theme> {
    load_string(store, THEME_STORAGE_KEY).and_then(|raw| Theme::parse(&raw))
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if let Err(e) = el.set_attribute("data-theme", theme.as_str()) {
                log::warn!("failed to apply theme {}: {e:?}", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Apply the stored preference, leaving the document untouched when none exists.
pub fn init<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    match read_preference(store) {
        Some(theme) => {
            apply(theme);
            theme
        }
        None => Theme::default(),
    }
}

/// Flip the theme, apply it, and persist it. Returns the new theme.
pub fn toggle<S: KeyValueStore + ?Sized>(store: &S, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    save_string(store, THEME_STORAGE_KEY, next.as_str());
    next
}
