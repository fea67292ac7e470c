// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::ActionKind;
use crate::core::dialog::DialogRequest;
use crate::core::error::HostError;
use crate::core::visibility::VisibilitySnapshot;

/// A host signal the dispatcher wants to hear about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    MenuOpened,
    MenuClosed,
    Clicked(ActionKind),
    SessionModeChanged,
    LayoutChanged,
}

/// Opaque handle returned by `MenuHost::subscribe`, kept for symmetric
/// unsubscription at teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(pub u64);

/// The seam between the dispatcher and whatever menu UI hosts the buttons.
///
/// The production impl is the IPC adapter in the daemon; tests drive the
/// dispatcher with a fake. Everything here is synchronous bookkeeping on
/// the host side; real async work (probes, invokes) happens elsewhere.
pub trait MenuHost {
    fn subscribe(&mut self, signal: HostSignal) -> Result<SubscriptionHandle, HostError>;
    fn unsubscribe(&mut self, handle: SubscriptionHandle) -> Result<(), HostError>;

    fn apply_visibility(&mut self, snapshot: &VisibilitySnapshot);

    fn insert_extra_suspend(&mut self);
    fn remove_extra_suspend(&mut self);

    fn present_dialog(&mut self, request: &DialogRequest);
    fn dismiss_dialog(&mut self);
}
