// Author: Dustin Pilgrim
// License: MIT

mod effects;
mod host;
mod run;

use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::{
    core::{
        config::Config,
        dialog::DialogPhase,
        dispatcher::Dispatcher,
        dispatcher_msg::DispatcherMsg,
        events::Event,
        info::{ButtonStatus, DialogStatus, StatusSnapshot, render_pretty},
        state::State,
        utils::now_ms,
    },
    services::{backend::SessionBackend, logind::EventSink},
    tdebug, terr,
};

use host::IpcHost;

type AnyError = Box<dyn std::error::Error + Send + Sync>;

struct MpscEventSink {
    tx: mpsc::Sender<DispatcherMsg>,
}

impl EventSink for MpscEventSink {
    fn push(&self, ev: Event) {
        let _ = self.tx.try_send(DispatcherMsg::Event(ev));
    }
}

pub struct Daemon {
    dispatcher: Dispatcher,
    state: State,
    host: IpcHost,
    backend: SessionBackend,

    config_path: PathBuf,
}

impl Daemon {
    pub async fn new(cfg: Config, config_path: PathBuf) -> Result<Self, AnyError> {
        let dispatcher = Dispatcher::new(&cfg)?;
        let backend = SessionBackend::detect(&cfg).await;

        tdebug!(
            "Daemon",
            "actions={}, backend={}, extra_suspend={}, config_path={}",
            dispatcher.actions().len(),
            backend.name(),
            dispatcher.extra_suspend_enabled(),
            config_path.display(),
        );

        Ok(Self {
            dispatcher,
            state: State::new(now_ms()),
            host: IpcHost::new(),
            backend,
            config_path,
        })
    }

    fn handle_one_event(&mut self, event: Event, tx: &mpsc::Sender<DispatcherMsg>) {
        tdebug!("Daemon", "incoming: {:?}", event);

        match self.dispatcher.handle_event(&mut self.state, event) {
            Ok(effects) => {
                if !effects.is_empty() {
                    tdebug!("Daemon", "effects: {:?}", effects);
                }
                self.exec_effects(effects, tx);
            }
            Err(e) => terr!("Daemon", "handle_event failed: {}", e),
        }
    }

    fn status_snapshot(&self) -> StatusSnapshot {
        let visibility = self.dispatcher.visibility(&self.state);

        let buttons: Vec<ButtonStatus> = self
            .dispatcher
            .actions()
            .iter()
            .map(|a| {
                let cap = self.state.capabilities().get(a.kind);
                ButtonStatus {
                    action: a.kind.name().to_string(),
                    label: a.label.clone(),
                    icon: a.icon.clone(),
                    destructive: a.destructive,
                    available: cap.available(),
                    visible: visibility.visible(a.kind),
                    last_checked_ms: cap.last_checked_ms(),
                }
            })
            .collect();

        let dialog = match self.state.dialog() {
            DialogPhase::Open { kind } | DialogPhase::Closing { kind, .. } => {
                self.dispatcher.dialog_for(kind).map(|req| DialogStatus {
                    subject: req.subject.clone(),
                    action: kind.name().to_string(),
                    buttons: req.buttons.iter().map(|b| b.label.clone()).collect(),
                })
            }
            DialogPhase::Idle => None,
        };

        let mut snap = StatusSnapshot {
            enabled: self.state.enabled(),
            backend: self.backend.name().to_string(),
            locked: self.state.is_locked(),
            greeter: self.state.is_greeter(),
            menu_open: self.state.menu_open(),
            extra_suspend_shown: self.host.extra_suspend_shown(),
            dialog,
            buttons,
            uptime_seconds: now_ms().saturating_sub(self.state.started_ms()) / 1000,
            pretty_text: String::new(),
        };

        snap.pretty_text = render_pretty(&snap);
        snap
    }
}
