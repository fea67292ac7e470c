// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::oneshot;

use crate::core::{events::Event, info::StatusSnapshot};

#[derive(Debug)]
pub enum DispatcherMsg {
    Event(Event),

    GetStatus {
        reply: oneshot::Sender<StatusSnapshot>,
    },

    SetEnabled {
        enabled: bool,
        reply: oneshot::Sender<Result<String, String>>,
    },

    ReloadConfig {
        reply: oneshot::Sender<Result<String, String>>,
    },

    StopDaemon {
        reply: oneshot::Sender<Result<String, String>>,
    },
}
