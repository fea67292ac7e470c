// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::ActionKind;

/// Cached availability for one action.
///
/// `available` starts out false and only flips on a completed probe, so a
/// button can never show up before the backend has vouched for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityState {
    available: bool,
    last_checked_ms: Option<u64>,
}

impl CapabilityState {
    const UNKNOWN: CapabilityState = CapabilityState {
        available: false,
        last_checked_ms: None,
    };

    pub fn available(&self) -> bool {
        self.available
    }

    pub fn last_checked_ms(&self) -> Option<u64> {
        self.last_checked_ms
    }
}

/// Per-action capability cache. Probe completions may arrive in any order;
/// the last completed write wins and the caller recomputes visibility from
/// the whole cache afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityCache {
    entries: [CapabilityState; ActionKind::ALL.len()],
}

impl CapabilityCache {
    pub fn new() -> Self {
        Self {
            entries: [CapabilityState::UNKNOWN; ActionKind::ALL.len()],
        }
    }

    pub fn get(&self, kind: ActionKind) -> CapabilityState {
        self.entries[kind.index()]
    }

    pub fn available(&self, kind: ActionKind) -> bool {
        self.entries[kind.index()].available
    }

    pub fn record(&mut self, kind: ActionKind, available: bool, now_ms: u64) {
        self.entries[kind.index()] = CapabilityState {
            available,
            last_checked_ms: Some(now_ms),
        };
    }

    /// Back to the fail-closed defaults. A re-enable starts from the same
    /// all-hidden state as a fresh construction.
    pub fn reset(&mut self) {
        self.entries = [CapabilityState::UNKNOWN; ActionKind::ALL.len()];
    }
}

impl Default for CapabilityCache {
    fn default() -> Self {
        CapabilityCache::new()
    }
}
