// Author: Dustin Pilgrim
// License: MIT

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::{
    core::{dispatcher::Dispatcher, dispatcher_msg::DispatcherMsg},
    services::{backend::SessionBackend, logind::EventSink},
    tdebug, terr, tinfo, twarn,
};

use super::{AnyError, Daemon, MpscEventSink};

impl Daemon {
    pub async fn run(
        &mut self,
        mut shutdown: watch::Receiver<bool>,
        shutdown_tx: watch::Sender<bool>,
    ) -> Result<(), AnyError> {
        tinfo!("Daemon", "Daemon starting");

        let (tx, mut rx) = mpsc::channel::<DispatcherMsg>(256);

        if let Err(e) = crate::ipc::server::spawn_ipc_server(tx.clone()).await {
            twarn!("IPC", "Failed to start: {}", e);
        }

        {
            let sink: Arc<dyn EventSink> = Arc::new(MpscEventSink { tx: tx.clone() });
            crate::services::logind::spawn_listeners(sink, shutdown.clone());
        }

        // The menu starts enabled; attach wires the host signals and pushes
        // the all-hidden snapshot that holds until the first probes land.
        match self.dispatcher.attach(&mut self.state, &mut self.host) {
            Ok(effects) => self.exec_effects(effects, &tx),
            Err(e) => terr!("Daemon", "Initial attach failed: {}", e),
        }

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        tinfo!("Daemon", "Daemon stopping (shutdown requested)");
                        break;
                    }
                }

                maybe = rx.recv() => {
                    let Some(msg) = maybe else {
                        tinfo!("Daemon", "Daemon stopping (event channel closed)");
                        break;
                    };

                    match msg {
                        DispatcherMsg::Event(event) => {
                            self.handle_one_event(event, &tx);
                        }

                        DispatcherMsg::GetStatus { reply } => {
                            let _ = reply.send(self.status_snapshot());
                        }

                        DispatcherMsg::SetEnabled { enabled, reply } => {
                            let result = if enabled {
                                self.dispatcher.attach(&mut self.state, &mut self.host)
                            } else {
                                self.dispatcher.detach(&mut self.state, &mut self.host)
                            };

                            let out = match result {
                                Ok(effects) => {
                                    self.exec_effects(effects, &tx);
                                    Ok(if enabled { "Menu enabled" } else { "Menu disabled" }
                                        .to_string())
                                }
                                Err(e) => Err(format!("{e}")),
                            };

                            let _ = reply.send(out);
                        }

                        DispatcherMsg::ReloadConfig { reply } => {
                            let out = self.reload_config(&tx).await;
                            let _ = reply.send(out);
                        }

                        DispatcherMsg::StopDaemon { reply } => {
                            tinfo!("Daemon", "Daemon stopping (stop requested via IPC)");
                            let _ = reply.send(Ok("Stopping Torpor daemon".to_string()));
                            let _ = shutdown_tx.send(true);
                            break;
                        }
                    }
                }
            }
        }

        // Teardown mirrors setup: detach before the host goes away.
        if self.state.enabled() {
            match self.dispatcher.detach(&mut self.state, &mut self.host) {
                Ok(effects) => self.exec_effects(effects, &tx),
                Err(e) => tdebug!("Daemon", "Final detach failed: {}", e),
            }
        }

        Ok(())
    }

    /// Re-reads the config, rebuilds the dispatcher and re-detects the
    /// backend. An enabled menu is detached first and re-attached after,
    /// so the host never sees a half-swapped button set.
    async fn reload_config(&mut self, tx: &mpsc::Sender<DispatcherMsg>) -> Result<String, String> {
        let loaded = crate::config::load_from_path(&self.config_path)?;

        if loaded.path != self.config_path {
            twarn!(
                "Daemon",
                "Reload: primary config failed; fell back to {}",
                loaded.path.display()
            );
            self.config_path = loaded.path.clone();
        }

        let dispatcher = Dispatcher::new(&loaded.cfg).map_err(|e| format!("{e}"))?;

        let was_enabled = self.state.enabled();
        if was_enabled {
            match self.dispatcher.detach(&mut self.state, &mut self.host) {
                Ok(effects) => self.exec_effects(effects, tx),
                Err(e) => return Err(format!("{e}")),
            }
        }

        self.backend = SessionBackend::detect(&loaded.cfg).await;
        self.dispatcher = dispatcher;

        if was_enabled {
            match self.dispatcher.attach(&mut self.state, &mut self.host) {
                Ok(effects) => self.exec_effects(effects, tx),
                Err(e) => return Err(format!("{e}")),
            }
        }

        Ok(format!("Reloaded from {}", self.config_path.display()))
    }
}
