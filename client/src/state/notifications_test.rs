use super::*;

// =============================================================
// NotificationKind
// =============================================================

#[test]
fn kind_icons_match_severity() {
    assert_eq!(NotificationKind::Success.icon(), "check-circle");
    assert_eq!(NotificationKind::Error.icon(), "exclamation-circle");
    assert_eq!(NotificationKind::Warning.icon(), "exclamation-triangle");
    assert_eq!(NotificationKind::Info.icon(), "info-circle");
}

#[test]
fn unknown_kind_falls_back_to_info() {
    assert_eq!(NotificationKind::parse("error"), NotificationKind::Error);
    assert_eq!(NotificationKind::parse("celebration"), NotificationKind::Info);
    assert_eq!(NotificationKind::default(), NotificationKind::Info);
}

// =============================================================
// NotificationState
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotificationState::default();
    let a = state.push(NotificationKind::Success, "Login successful!");
    let b = state.push(NotificationKind::Error, "Invalid email or password");
    assert!(b > a);
    assert_eq!(state.items().len(), 2);
    assert_eq!(state.items()[0].message, "Login successful!");
}

#[test]
fn dismiss_removes_only_target() {
    let mut state = NotificationState::default();
    let a = state.push(NotificationKind::Info, "one");
    let b = state.push(NotificationKind::Info, "two");
    assert!(state.dismiss(a));
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].id, b);
}

#[test]
fn dismiss_twice_is_harmless() {
    let mut state = NotificationState::default();
    let id = state.push(NotificationKind::Info, "one");
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
    assert!(state.is_empty());
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = NotificationState::default();
    let a = state.push(NotificationKind::Info, "one");
    state.dismiss(a);
    let b = state.push(NotificationKind::Info, "two");
    assert_ne!(a, b);
}

#[test]
fn notification_classes_include_kind() {
    let mut state = NotificationState::default();
    state.push(NotificationKind::Warning, "careful");
    let n = &state.items()[0];
    assert_eq!(n.class(), "notification notification-warning");
    assert_eq!(n.icon_class(), "fas fa-exclamation-triangle");
}
