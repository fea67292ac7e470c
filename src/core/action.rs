// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

/// The fixed set of power actions the menu can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Suspend,
    Hibernate,
    HybridSleep,
    Lock,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Suspend,
        ActionKind::Hibernate,
        ActionKind::HybridSleep,
        ActionKind::Lock,
    ];

    /// Stable index into per-kind tables.
    pub fn index(self) -> usize {
        match self {
            ActionKind::Suspend => 0,
            ActionKind::Hibernate => 1,
            ActionKind::HybridSleep => 2,
            ActionKind::Lock => 3,
        }
    }

    /// Canonical lowercase name used in IPC, config and status output.
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::Suspend => "suspend",
            ActionKind::Hibernate => "hibernate",
            ActionKind::HybridSleep => "hybrid-sleep",
            ActionKind::Lock => "lock",
        }
    }

    /// Parse a user-supplied action name. Accepts the canonical spelling
    /// plus the underscore/squashed variants bars tend to emit.
    pub fn parse(s: &str) -> Option<ActionKind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "suspend" => Some(ActionKind::Suspend),
            "hibernate" => Some(ActionKind::Hibernate),
            "hybrid-sleep" | "hybrid_sleep" | "hybridsleep" => Some(ActionKind::HybridSleep),
            "lock" | "lock-session" | "lock_session" => Some(ActionKind::Lock),
            _ => None,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One menu entry: what it is called, what it looks like, and whether a
/// click must pass the confirmation dialog first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub label: String,
    pub icon: String,
    pub destructive: bool,
}

impl Action {
    pub fn new(
        kind: ActionKind,
        label: impl Into<String>,
        icon: impl Into<String>,
        destructive: bool,
    ) -> Self {
        Self {
            kind,
            label: label.into(),
            icon: icon.into(),
            destructive,
        }
    }
}
