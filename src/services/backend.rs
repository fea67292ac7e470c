// Author: Dustin Pilgrim
// License: MIT

use crate::{
    core::{
        action::ActionKind,
        config::{BackendChoice, Config},
    },
    services::{logind::LogindBackend, shell::CommandBackend},
    tinfo, twarn,
};

/// Where probes and invocations actually go: the logind manager on the
/// system bus, or plain shell commands when no logind is around.
#[derive(Clone)]
pub enum SessionBackend {
    Logind(LogindBackend),
    Command(CommandBackend),
}

impl SessionBackend {
    /// Picks a backend for this machine. `auto` tries logind first and falls
    /// back to shell commands when the system bus has no login manager.
    pub async fn detect(cfg: &Config) -> Self {
        match cfg.backend {
            BackendChoice::Command => {
                tinfo!("Backend", "Using command backend (configured)");
                SessionBackend::Command(CommandBackend::from_config(cfg))
            }
            BackendChoice::Logind => match LogindBackend::connect(cfg.allow_lock).await {
                Ok(backend) => {
                    tinfo!("Backend", "Using logind backend");
                    SessionBackend::Logind(backend)
                }
                Err(e) => {
                    twarn!(
                        "Backend",
                        "Logind backend requested but unavailable ({}), falling back to commands",
                        e
                    );
                    SessionBackend::Command(CommandBackend::from_config(cfg))
                }
            },
            BackendChoice::Auto => match LogindBackend::connect(cfg.allow_lock).await {
                Ok(backend) => {
                    tinfo!("Backend", "Using logind backend");
                    SessionBackend::Logind(backend)
                }
                Err(e) => {
                    tinfo!("Backend", "Logind unavailable ({}), using command backend", e);
                    SessionBackend::Command(CommandBackend::from_config(cfg))
                }
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SessionBackend::Logind(_) => "logind",
            SessionBackend::Command(_) => "command",
        }
    }

    /// Asks whether `kind` can actually be carried out right now.
    pub async fn probe(&self, kind: ActionKind) -> bool {
        match self {
            SessionBackend::Logind(b) => b.probe(kind).await,
            SessionBackend::Command(b) => b.probe(kind),
        }
    }

    /// Fires the action. Failures are logged rather than returned.
    pub async fn invoke(&self, kind: ActionKind) {
        match self {
            SessionBackend::Logind(b) => b.invoke(kind).await,
            SessionBackend::Command(b) => b.invoke(kind),
        }
    }
}

/// logind capability replies are tri-state: "yes", "no", "challenge" or "na".
/// Anything but a plain "yes" means the button must not be offered.
pub(crate) fn availability_from_reply(reply: &str) -> bool {
    reply.trim() == "yes"
}
