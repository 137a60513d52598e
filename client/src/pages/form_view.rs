//! Signal-backed `SubmitView` shared by the auth pages.

use leptos::prelude::*;

use crate::components::notifications::notify;
use crate::state::fields::{Field, FieldStates};
use crate::state::notifications::{NotificationKind, NotificationState};
use crate::state::submit::{SubmitPhase, SubmitView};
use crate::util::nav;

#[derive(Clone, Copy)]
pub(crate) struct SignalSubmitView {
    pub phase: RwSignal<SubmitPhase>,
    pub fields: RwSignal<FieldStates>,
    pub notifications: RwSignal<NotificationState>,
}

impl SignalSubmitView {
    pub fn new(notifications: RwSignal<NotificationState>) -> Self {
        Self {
            phase: RwSignal::new(SubmitPhase::Idle),
            fields: RwSignal::new(FieldStates::default()),
            notifications,
        }
    }

    pub fn accepts_submit(&self) -> bool {
        self.phase.with_untracked(SubmitPhase::accepts_submit)
    }

    pub fn modal_visible(&self) -> Signal<bool> {
        let phase = self.phase;
        Signal::derive(move || phase.with(SubmitPhase::modal_visible))
    }
}

impl SubmitView for SignalSubmitView {
    fn set_phase(&self, phase: SubmitPhase) {
        self.phase.try_set(phase);
    }

    fn show_field_errors(&self, errors: &[(Field, &'static str)]) {
        self.fields.try_update(|f| {
            for (field, message) in errors {
                f.show_field_error(*field, *message);
            }
        });
    }

    fn notify(&self, kind: NotificationKind, message: &str) {
        notify(self.notifications, kind, message);
    }

    fn redirect_after(&self, path: &'static str, delay_ms: u32) {
        nav::redirect_after(path, delay_ms);
    }
}
