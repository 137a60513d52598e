//! Transient status messages shown in the notification stack.
//!
//! Entries are appended by `push` and removed either by the close button or
//! by the auto-dismiss timer scheduled in `components::notifications`.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Severity of a notification; drives its CSS modifier and icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Parse a kind name; unknown names fall back to `Info`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    /// Font Awesome icon name (without the `fa-` prefix).
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
            Self::Warning => "exclamation-triangle",
            Self::Info => "info-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn class(&self) -> String {
        format!("notification notification-{}", self.kind.as_str())
    }

    pub fn icon_class(&self) -> String {
        format!("fas fa-{}", self.kind.icon())
    }
}

/// Ordered stack of live notifications, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationState {
    /// Append a notification and return its id for later dismissal.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, kind, message: message.into() });
        id
    }

    /// Remove `id`; returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
