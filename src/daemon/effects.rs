// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::mpsc;

use crate::core::{
    dispatcher_msg::DispatcherMsg, effect::Effect, events::Event, host::MenuHost, utils::now_ms,
};

use super::Daemon;

impl Daemon {
    pub(super) fn exec_effects(&mut self, effects: Vec<Effect>, tx: &mpsc::Sender<DispatcherMsg>) {
        for effect in effects {
            self.exec_effect(effect, tx);
        }
    }

    fn exec_effect(&mut self, effect: Effect, tx: &mpsc::Sender<DispatcherMsg>) {
        match effect {
            Effect::Probe { kind } => {
                let backend = self.backend.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let available = backend.probe(kind).await;
                    let _ = tx
                        .send(DispatcherMsg::Event(Event::ProbeCompleted {
                            kind,
                            available,
                            now_ms: now_ms(),
                        }))
                        .await;
                });
            }

            Effect::Invoke { kind } => {
                let backend = self.backend.clone();
                tokio::spawn(async move {
                    backend.invoke(kind).await;
                });
            }

            Effect::ShowDialog { request } => {
                self.host.present_dialog(&request);
            }

            Effect::DismissDialog => {
                self.host.dismiss_dialog();
                // The IPC host has no close animation; report the close
                // straight back so a pending confirmation can fire.
                let _ = tx.try_send(DispatcherMsg::Event(Event::DialogClosed {
                    now_ms: now_ms(),
                }));
            }

            Effect::ApplyVisibility { snapshot } => {
                self.host.apply_visibility(&snapshot);
            }

            Effect::InsertExtraSuspend => {
                self.host.insert_extra_suspend();
            }

            Effect::RemoveExtraSuspend => {
                self.host.remove_extra_suspend();
            }
        }
    }
}
