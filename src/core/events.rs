// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::ActionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    User,
    Locked,
    Greeter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The host menu was opened; every configured action gets re-probed.
    MenuOpened {
        now_ms: u64,
    },
    MenuClosed {
        now_ms: u64,
    },

    /// The host reported a click on one of the action buttons.
    Clicked {
        kind: ActionKind,
        now_ms: u64,
    },

    /// An async capability probe finished.
    ProbeCompleted {
        kind: ActionKind,
        available: bool,
        now_ms: u64,
    },

    SessionLocked {
        now_ms: u64,
    },
    SessionUnlocked {
        now_ms: u64,
    },

    /// The host reported a session-mode switch (user/lock-screen/greeter).
    SessionModeChanged {
        mode: SessionMode,
        now_ms: u64,
    },

    PrepareForSleep {
        now_ms: u64,
    },
    ResumedFromSleep {
        now_ms: u64,
    },

    /// The host reported whether its orientation-lock button is shown.
    /// Hiding it frees a slot for the extra suspend button.
    LayoutChanged {
        orientation_lock_visible: bool,
        now_ms: u64,
    },

    /// A concrete confirmation-dialog button was activated by index.
    DialogButtonActivated {
        index: usize,
        now_ms: u64,
    },

    /// The default button was activated (Enter / host shortcut).
    DialogDefaultActivated {
        now_ms: u64,
    },

    /// The cancel button was requested (Escape / host shortcut).
    DialogCancelRequested {
        now_ms: u64,
    },

    /// The host closed the dialog without a choice (click-outside, teardown).
    DialogDismissed {
        now_ms: u64,
    },

    /// The host finished closing the dialog. Only now may a pending
    /// confirmation be acted on.
    DialogClosed {
        now_ms: u64,
    },
}

impl Event {
    pub fn now_ms(&self) -> u64 {
        match self {
            Event::MenuOpened { now_ms }
            | Event::MenuClosed { now_ms }
            | Event::Clicked { now_ms, .. }
            | Event::ProbeCompleted { now_ms, .. }
            | Event::SessionLocked { now_ms }
            | Event::SessionUnlocked { now_ms }
            | Event::SessionModeChanged { now_ms, .. }
            | Event::PrepareForSleep { now_ms }
            | Event::ResumedFromSleep { now_ms }
            | Event::LayoutChanged { now_ms, .. }
            | Event::DialogButtonActivated { now_ms, .. }
            | Event::DialogDefaultActivated { now_ms }
            | Event::DialogCancelRequested { now_ms }
            | Event::DialogDismissed { now_ms }
            | Event::DialogClosed { now_ms } => *now_ms,
        }
    }
}
