use crate::{
    core::{
        dialog::DialogRequest,
        error::HostError,
        host::{HostSignal, MenuHost, SubscriptionHandle},
        visibility::VisibilitySnapshot,
    },
    tdebug, tinfo,
};

/// Host adapter for the IPC surface.
///
/// Bars drive the daemon over the socket, so there is no widget tree here.
/// This keeps the last thing each sink was told so `status` can report it;
/// the bar mirrors the snapshots on its side.
#[derive(Default)]
pub struct IpcHost {
    next_handle: u64,
    subscriptions: Vec<(SubscriptionHandle, HostSignal)>,
    visibility: Option<VisibilitySnapshot>,
    dialog: Option<DialogRequest>,
    extra_suspend: bool,
}

impl IpcHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dialog(&self) -> Option<&DialogRequest> {
        self.dialog.as_ref()
    }

    pub fn extra_suspend_shown(&self) -> bool {
        self.extra_suspend
    }
}

impl MenuHost for IpcHost {
    fn subscribe(&mut self, signal: HostSignal) -> Result<SubscriptionHandle, HostError> {
        self.next_handle += 1;
        let handle = SubscriptionHandle(self.next_handle);
        self.subscriptions.push((handle, signal));
        Ok(handle)
    }

    fn unsubscribe(&mut self, handle: SubscriptionHandle) -> Result<(), HostError> {
        match self.subscriptions.iter().position(|(h, _)| *h == handle) {
            Some(pos) => {
                self.subscriptions.remove(pos);
                Ok(())
            }
            None => Err(HostError::NotSubscribed),
        }
    }

    fn apply_visibility(&mut self, snapshot: &VisibilitySnapshot) {
        let shown = snapshot.entries.iter().filter(|e| e.visible).count();
        tdebug!(
            "Host",
            "Visibility: {}/{} buttons shown",
            shown,
            snapshot.entries.len()
        );
        self.visibility = Some(snapshot.clone());
    }

    fn insert_extra_suspend(&mut self) {
        tinfo!("Host", "Extra suspend button placed");
        self.extra_suspend = true;
    }

    fn remove_extra_suspend(&mut self) {
        tinfo!("Host", "Extra suspend button removed");
        self.extra_suspend = false;
    }

    fn present_dialog(&mut self, request: &DialogRequest) {
        tinfo!("Host", "Dialog up: {}", request.subject);
        self.dialog = Some(request.clone());
    }

    fn dismiss_dialog(&mut self) {
        if self.dialog.take().is_some() {
            tinfo!("Host", "Dialog down");
        }
    }
}
