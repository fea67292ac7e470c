// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::{Action, ActionKind};
use crate::core::capability::CapabilityCache;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonVisibility {
    pub kind: ActionKind,
    pub visible: bool,
}

/// The complete per-button visibility the host should display.
///
/// Snapshots are always recomputed from capability + session state in one
/// go; nothing ever patches a single entry of a previous snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilitySnapshot {
    pub entries: Vec<ButtonVisibility>,
}

impl VisibilitySnapshot {
    pub fn all_hidden(actions: &[Action]) -> Self {
        Self {
            entries: actions
                .iter()
                .map(|a| ButtonVisibility {
                    kind: a.kind,
                    visible: false,
                })
                .collect(),
        }
    }

    pub fn visible(&self, kind: ActionKind) -> bool {
        self.entries
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.visible)
            .unwrap_or(false)
    }
}

/// visible = available && !locked && !greeter, per configured action.
pub fn compute_visibility(
    actions: &[Action],
    caps: &CapabilityCache,
    locked: bool,
    greeter: bool,
) -> VisibilitySnapshot {
    let session_allows = !locked && !greeter;

    VisibilitySnapshot {
        entries: actions
            .iter()
            .map(|a| ButtonVisibility {
                kind: a.kind,
                visible: caps.available(a.kind) && session_allows,
            })
            .collect(),
    }
}
