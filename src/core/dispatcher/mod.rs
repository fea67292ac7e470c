// Author: Dustin Pilgrim
// License: MIT

pub mod engine;

use crate::{
    core::{
        action::{Action, ActionKind},
        config::Config,
        dialog::DialogRequest,
        effect::Effect,
        error::{ConfigError, Error, StateError},
        host::{HostSignal, MenuHost},
        state::State,
        visibility::{compute_visibility, VisibilitySnapshot},
    },
    tdebug,
};

/// Immutable view of the configured menu: which buttons exist, in what
/// order, and which of them must be confirmed before firing.
///
/// All run state lives in [`State`]; the dispatcher itself is only
/// rebuilt on config reload.
#[derive(Debug)]
pub struct Dispatcher {
    actions: Vec<Action>,
    dialogs: [Option<DialogRequest>; ActionKind::ALL.len()],
    extra_suspend_enabled: bool,
}

impl Dispatcher {
    pub fn new(cfg: &Config) -> Result<Self, Error> {
        let mut actions: Vec<Action> = Vec::new();
        let mut dialogs: [Option<DialogRequest>; ActionKind::ALL.len()] = Default::default();

        for name in &cfg.actions {
            let kind = ActionKind::parse(name)
                .ok_or_else(|| Error::InvalidConfig(ConfigError::UnknownAction(name.clone())))?;

            // Duplicate names collapse to the first occurrence.
            if actions.iter().any(|a| a.kind == kind) {
                continue;
            }

            let ac = cfg.action(kind);
            actions.push(Action::new(kind, &ac.label, &ac.icon, ac.destructive));

            if ac.destructive {
                let request = DialogRequest::confirm(
                    &ac.confirm.subject,
                    &ac.confirm.body,
                    &ac.confirm.icon,
                    &ac.confirm.cancel_label,
                    &ac.confirm.confirm_label,
                )
                .map_err(Error::Dialog)?;
                dialogs[kind.index()] = Some(request);
            }
        }

        if actions.is_empty() {
            return Err(Error::InvalidConfig(ConfigError::NoActionsEnabled));
        }

        Ok(Self {
            actions,
            dialogs,
            extra_suspend_enabled: cfg.extra_suspend_button,
        })
    }

    // ---------------- accessors ----------------

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn action(&self, kind: ActionKind) -> Option<&Action> {
        self.actions.iter().find(|a| a.kind == kind)
    }

    /// The confirmation template for a destructive action, `None` for
    /// actions that fire directly.
    pub fn dialog_for(&self, kind: ActionKind) -> Option<&DialogRequest> {
        self.dialogs[kind.index()].as_ref()
    }

    pub fn extra_suspend_enabled(&self) -> bool {
        self.extra_suspend_enabled
    }

    pub fn visibility(&self, state: &State) -> VisibilitySnapshot {
        compute_visibility(
            &self.actions,
            state.capabilities(),
            state.is_locked(),
            state.is_greeter(),
        )
    }

    fn host_signals(&self) -> Vec<HostSignal> {
        let mut signals = vec![HostSignal::MenuOpened, HostSignal::MenuClosed];
        for action in &self.actions {
            signals.push(HostSignal::Clicked(action.kind));
        }
        signals.push(HostSignal::SessionModeChanged);
        signals.push(HostSignal::LayoutChanged);
        signals
    }

    // ---------------- lifecycle ----------------

    /// Wire the menu up: subscribe to every host signal the configured
    /// buttons need, then start from the all-hidden snapshot until the
    /// first probes land. A failed subscription rolls back the ones
    /// already made and leaves the state untouched.
    pub fn attach(&self, state: &mut State, host: &mut dyn MenuHost) -> Result<Vec<Effect>, Error> {
        if state.enabled() {
            return Err(Error::InvalidState(StateError::AlreadyEnabled));
        }

        let mut handles = Vec::new();
        for signal in self.host_signals() {
            match host.subscribe(signal) {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    for handle in handles.into_iter().rev() {
                        let _ = host.unsubscribe(handle);
                    }
                    return Err(Error::Host(e));
                }
            }
        }

        for handle in handles {
            state.push_subscription(handle);
        }
        state.set_enabled(true);

        Ok(vec![Effect::ApplyVisibility {
            snapshot: VisibilitySnapshot::all_hidden(&self.actions),
        }])
    }

    /// Tear down in reverse order of attach: drop every subscription,
    /// dismiss a dialog still up, remove the extra suspend button, and
    /// clear cached capabilities so a later attach starts from scratch.
    pub fn detach(&self, state: &mut State, host: &mut dyn MenuHost) -> Result<Vec<Effect>, Error> {
        if !state.enabled() {
            return Err(Error::InvalidState(StateError::NotEnabled));
        }

        for handle in state.take_subscriptions().into_iter().rev() {
            if let Err(e) = host.unsubscribe(handle) {
                tdebug!("Dispatcher", "Unsubscribe failed during detach: {}", e);
            }
        }

        let mut out = Vec::new();
        if !state.dialog().is_idle() {
            out.push(Effect::DismissDialog);
        }
        if state.extra_suspend_placed() {
            out.push(Effect::RemoveExtraSuspend);
        }

        state.reset_for_detach();

        Ok(out)
    }
}
