// Author: Dustin Pilgrim
// License: MIT

use crate::core::capability::CapabilityCache;
use crate::core::dialog::DialogPhase;
use crate::core::events::SessionMode;
use crate::core::host::SubscriptionHandle;

#[derive(Debug, Clone)]
pub struct State {
    // Lifecycle
    enabled: bool,

    // Session (locked and greeter are tracked separately; either one
    // hides every button)
    locked: bool,
    greeter: bool,

    // Menu / layout
    menu_open: bool,
    orientation_lock_visible: bool,
    extra_suspend_placed: bool,

    // Sleep broadcast flag (no automatic reaction beyond recording it)
    preparing_for_sleep: bool,

    // Per-action availability, fail-closed
    capabilities: CapabilityCache,

    // Confirmation gate
    dialog: DialogPhase,

    // Host subscriptions held while enabled
    subscriptions: Vec<SubscriptionHandle>,

    // Timing (ms since epoch)
    started_ms: u64,
}

impl State {
    pub fn new(now_ms: u64) -> Self {
        Self {
            enabled: false,
            locked: false,
            greeter: false,
            menu_open: false,
            orientation_lock_visible: true,
            extra_suspend_placed: false,
            preparing_for_sleep: false,
            capabilities: CapabilityCache::new(),
            dialog: DialogPhase::Idle,
            subscriptions: Vec::new(),
            started_ms: now_ms,
        }
    }

    // ---------------- getters ----------------

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_greeter(&self) -> bool {
        self.greeter
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn orientation_lock_visible(&self) -> bool {
        self.orientation_lock_visible
    }

    pub fn extra_suspend_placed(&self) -> bool {
        self.extra_suspend_placed
    }

    pub fn preparing_for_sleep(&self) -> bool {
        self.preparing_for_sleep
    }

    pub fn capabilities(&self) -> &CapabilityCache {
        &self.capabilities
    }

    pub fn dialog(&self) -> DialogPhase {
        self.dialog
    }

    pub fn subscriptions(&self) -> &[SubscriptionHandle] {
        &self.subscriptions
    }

    pub fn started_ms(&self) -> u64 {
        self.started_ms
    }

    // ---------------- setters ----------------

    pub fn set_enabled(&mut self, v: bool) {
        self.enabled = v;
    }

    pub fn set_locked(&mut self, v: bool) {
        self.locked = v;
    }

    pub fn set_greeter(&mut self, v: bool) {
        self.greeter = v;
    }

    pub fn apply_session_mode(&mut self, mode: SessionMode) {
        match mode {
            SessionMode::User => {
                self.locked = false;
                self.greeter = false;
            }
            SessionMode::Locked => {
                self.locked = true;
                self.greeter = false;
            }
            SessionMode::Greeter => {
                self.locked = false;
                self.greeter = true;
            }
        }
    }

    pub fn set_menu_open(&mut self, v: bool) {
        self.menu_open = v;
    }

    pub fn set_orientation_lock_visible(&mut self, v: bool) {
        self.orientation_lock_visible = v;
    }

    pub fn set_extra_suspend_placed(&mut self, v: bool) {
        self.extra_suspend_placed = v;
    }

    pub fn set_preparing_for_sleep(&mut self, v: bool) {
        self.preparing_for_sleep = v;
    }

    pub fn capabilities_mut(&mut self) -> &mut CapabilityCache {
        &mut self.capabilities
    }

    pub fn set_dialog(&mut self, phase: DialogPhase) {
        self.dialog = phase;
    }

    // ---------------- subscriptions ----------------

    pub fn push_subscription(&mut self, handle: SubscriptionHandle) {
        self.subscriptions.push(handle);
    }

    pub fn take_subscriptions(&mut self) -> Vec<SubscriptionHandle> {
        std::mem::take(&mut self.subscriptions)
    }

    // ---------------- teardown ----------------

    /// Return to the pre-attach baseline: fail-closed capabilities, no
    /// open dialog, no placed extras. Subscriptions are handed back via
    /// `take_subscriptions` before this is called.
    pub fn reset_for_detach(&mut self) {
        self.enabled = false;
        self.menu_open = false;
        self.extra_suspend_placed = false;
        self.dialog = DialogPhase::Idle;
        self.capabilities.reset();
    }
}

impl Default for State {
    fn default() -> Self {
        State::new(0)
    }
}
