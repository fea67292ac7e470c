// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::ActionKind;
use crate::core::error::DialogError;

/// What a finished dialog reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSignal {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButton {
    pub label: String,
    pub signal: ButtonSignal,
    /// Activated by Enter. Exactly one per dialog.
    pub is_default: bool,
    /// Activated by Escape. Exactly one per dialog.
    pub is_cancel: bool,
}

/// A validated confirmation-dialog description.
///
/// Invariants are enforced at construction: at least one button, exactly
/// one default, exactly one cancel. Activation-time code can therefore
/// rely on `default_index`/`cancel_index` always resolving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub subject: String,
    pub body: String,
    pub icon: String,
    pub buttons: Vec<DialogButton>,
}

impl DialogRequest {
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        icon: impl Into<String>,
        buttons: Vec<DialogButton>,
    ) -> Result<Self, DialogError> {
        if buttons.is_empty() {
            return Err(DialogError::NoButtons);
        }

        let defaults = buttons.iter().filter(|b| b.is_default).count();
        if defaults != 1 {
            return Err(DialogError::WrongDefaultCount(defaults));
        }

        let cancels = buttons.iter().filter(|b| b.is_cancel).count();
        if cancels != 1 {
            return Err(DialogError::WrongCancelCount(cancels));
        }

        Ok(Self {
            subject: subject.into(),
            body: body.into(),
            icon: icon.into(),
            buttons,
        })
    }

    /// The usual cancel/confirm pair: cancel on Escape, confirm as the
    /// default button.
    pub fn confirm(
        subject: impl Into<String>,
        body: impl Into<String>,
        icon: impl Into<String>,
        cancel_label: impl Into<String>,
        confirm_label: impl Into<String>,
    ) -> Result<Self, DialogError> {
        Self::new(
            subject,
            body,
            icon,
            vec![
                DialogButton {
                    label: cancel_label.into(),
                    signal: ButtonSignal::Cancelled,
                    is_default: false,
                    is_cancel: true,
                },
                DialogButton {
                    label: confirm_label.into(),
                    signal: ButtonSignal::Confirmed,
                    is_default: true,
                    is_cancel: false,
                },
            ],
        )
    }

    pub fn default_index(&self) -> usize {
        self.buttons
            .iter()
            .position(|b| b.is_default)
            .unwrap_or(0)
    }

    pub fn cancel_index(&self) -> usize {
        self.buttons
            .iter()
            .position(|b| b.is_cancel)
            .unwrap_or(0)
    }

    pub fn signal_of(&self, index: usize) -> Result<ButtonSignal, DialogError> {
        self.buttons
            .get(index)
            .map(|b| b.signal)
            .ok_or(DialogError::UnknownButton(index))
    }
}

/// Gate lifecycle for the destructive-action dialog.
///
/// Open -> Closing happens on any activation or dismissal; the pending
/// signal is only released when the host reports the dialog fully closed.
/// The backend invoke therefore always runs strictly after the close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Idle,
    Open {
        kind: ActionKind,
    },
    Closing {
        kind: ActionKind,
        verdict: Option<ButtonSignal>,
    },
}

impl DialogPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, DialogPhase::Idle)
    }
}
