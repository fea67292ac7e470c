// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::ActionKind;
use crate::core::dialog::DialogRequest;
use crate::core::visibility::VisibilitySnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Query the backend for availability of one action. The result
    /// re-enters the engine as `Event::ProbeCompleted`.
    Probe {
        kind: ActionKind,
    },

    /// Fire the backend action. Fire-and-forget; failures are logged.
    Invoke {
        kind: ActionKind,
    },

    /// Present a confirmation dialog on the host.
    ShowDialog {
        request: DialogRequest,
    },

    /// Ask the host to close the dialog. The host answers with
    /// `Event::DialogClosed` once it is actually gone.
    DismissDialog,

    /// Replace the host's button visibility wholesale. Always a full
    /// snapshot, never a single-button patch.
    ApplyVisibility {
        snapshot: VisibilitySnapshot,
    },

    /// Place the extra suspend button in the slot freed by a hidden
    /// orientation-lock button.
    InsertExtraSuspend,
    RemoveExtraSuspend,
}
