// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::ActionKind;

/// Which session backend the daemon should talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendChoice {
    /// Use login1 when it owns its bus name, shell commands otherwise.
    Auto,
    Logind,
    Command,
}

/// Text shown by the confirmation dialog of a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogCopy {
    pub subject: String,
    pub body: String,
    pub icon: String,
    pub cancel_label: String,
    pub confirm_label: String,
}

/// Per-action settings: menu appearance, confirmation gating, and the
/// optional shell-command override for the command backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionConfig {
    pub label: String,
    pub icon: String,

    /// Destructive actions go through the confirmation dialog.
    pub destructive: bool,

    /// Shell command used by the command backend. `None` means the
    /// action has no command form (lock falls back to the lock helper).
    pub command: Option<String>,

    pub confirm: DialogCopy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend: BackendChoice,

    /// Menu order and enablement in one list; an action not named here
    /// gets no button.
    pub actions: Vec<String>,

    /// Lockdown-style escape hatch: forces the lock probe to "no" even
    /// when a locker is present.
    pub allow_lock: bool,

    /// Locker binary for the command backend, invoked as `<helper> -l`.
    pub lock_helper: String,

    /// Place an extra suspend button when the host reports its
    /// orientation-lock button hidden.
    pub extra_suspend_button: bool,

    pub suspend: ActionConfig,
    pub hibernate: ActionConfig,
    pub hybrid_sleep: ActionConfig,
    pub lock: ActionConfig,
}

impl Config {
    pub fn action(&self, kind: ActionKind) -> &ActionConfig {
        match kind {
            ActionKind::Suspend => &self.suspend,
            ActionKind::Hibernate => &self.hibernate,
            ActionKind::HybridSleep => &self.hybrid_sleep,
            ActionKind::Lock => &self.lock,
        }
    }

    pub fn action_mut(&mut self, kind: ActionKind) -> &mut ActionConfig {
        match kind {
            ActionKind::Suspend => &mut self.suspend,
            ActionKind::Hibernate => &mut self.hibernate,
            ActionKind::HybridSleep => &mut self.hybrid_sleep,
            ActionKind::Lock => &mut self.lock,
        }
    }
}

impl ActionConfig {
    pub fn default_for(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Suspend => ActionConfig {
                label: "Suspend".to_string(),
                icon: "media-playback-pause-symbolic".to_string(),
                destructive: false,
                command: Some("systemctl suspend || loginctl suspend".to_string()),
                confirm: DialogCopy {
                    subject: "Suspend".to_string(),
                    body: "Do you really want to suspend the system ?".to_string(),
                    icon: "document-save-symbolic".to_string(),
                    cancel_label: "Cancel".to_string(),
                    confirm_label: "Suspend".to_string(),
                },
            },
            ActionKind::Hibernate => ActionConfig {
                label: "Hibernate".to_string(),
                icon: "document-save-symbolic".to_string(),
                destructive: true,
                command: Some("systemctl hibernate || loginctl hibernate".to_string()),
                confirm: DialogCopy {
                    subject: "Hibernate".to_string(),
                    body: "Do you really want to hibernate the system ?".to_string(),
                    icon: "document-save-symbolic".to_string(),
                    cancel_label: "Cancel".to_string(),
                    confirm_label: "Hibernate".to_string(),
                },
            },
            ActionKind::HybridSleep => ActionConfig {
                label: "Hybrid Sleep".to_string(),
                icon: "document-save-as-symbolic".to_string(),
                destructive: false,
                command: Some("systemctl hybrid-sleep || loginctl hybrid-sleep".to_string()),
                confirm: DialogCopy {
                    subject: "Hybrid Sleep".to_string(),
                    body: "Do you really want to hybrid-sleep the system ?".to_string(),
                    icon: "document-save-as-symbolic".to_string(),
                    cancel_label: "Cancel".to_string(),
                    confirm_label: "Hybrid Sleep".to_string(),
                },
            },
            ActionKind::Lock => ActionConfig {
                label: "Lock".to_string(),
                icon: "changes-prevent-symbolic".to_string(),
                destructive: false,
                command: None,
                confirm: DialogCopy {
                    subject: "Lock".to_string(),
                    body: "Do you really want to lock the session ?".to_string(),
                    icon: "changes-prevent-symbolic".to_string(),
                    cancel_label: "Cancel".to_string(),
                    confirm_label: "Lock".to_string(),
                },
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendChoice::Auto,
            actions: ActionKind::ALL.iter().map(|k| k.name().to_string()).collect(),
            allow_lock: true,
            lock_helper: "light-locker-command".to_string(),
            extra_suspend_button: true,
            suspend: ActionConfig::default_for(ActionKind::Suspend),
            hibernate: ActionConfig::default_for(ActionKind::Hibernate),
            hybrid_sleep: ActionConfig::default_for(ActionKind::HybridSleep),
            lock: ActionConfig::default_for(ActionKind::Lock),
        }
    }
}
