// Author: Dustin Pilgrim
// License: MIT

use crate::{
    core::{
        action::ActionKind,
        dialog::{ButtonSignal, DialogPhase, DialogRequest},
        effect::Effect,
        error::{DialogError, Error, StateError},
        events::Event,
        state::State,
    },
    tdebug,
};

use super::Dispatcher;

impl Dispatcher {
    /// Advance the menu state machine by one event.
    ///
    /// Pure apart from logging: every side effect the caller must
    /// perform comes back in the returned list, already ordered. In
    /// particular a confirmed action is never invoked before the
    /// dialog dismissal that precedes it.
    pub fn handle_event(&self, state: &mut State, event: Event) -> Result<Vec<Effect>, Error> {
        let now_ms = event.now_ms();

        if !state.enabled() {
            tdebug!("Dispatcher", "Event while detached, ignoring: {:?}", event);
            return Ok(Vec::new());
        }

        let mut out = Vec::new();

        match event {
            Event::MenuOpened { .. } => {
                state.set_menu_open(true);
                for action in self.actions() {
                    out.push(Effect::Probe { kind: action.kind });
                }
            }

            Event::MenuClosed { .. } => {
                state.set_menu_open(false);
            }

            Event::Clicked { kind, .. } => {
                if self.action(kind).is_none() {
                    return Err(Error::InvalidState(StateError::ActionNotConfigured(kind)));
                }

                if !self.visibility(state).visible(kind) {
                    tdebug!("Dispatcher", "Click on hidden button ignored: {}", kind);
                    return Ok(out);
                }

                match self.dialog_for(kind) {
                    Some(request) => {
                        if !state.dialog().is_idle() {
                            return Err(Error::Dialog(DialogError::AlreadyOpen));
                        }
                        state.set_dialog(DialogPhase::Open { kind });
                        out.push(Effect::ShowDialog {
                            request: request.clone(),
                        });
                    }
                    None => out.push(Effect::Invoke { kind }),
                }
            }

            Event::ProbeCompleted {
                kind, available, ..
            } => {
                if self.action(kind).is_none() {
                    // Result of a probe started before a reload dropped
                    // the action.
                    tdebug!("Dispatcher", "Stale probe result dropped: {}", kind);
                    return Ok(out);
                }
                state.capabilities_mut().record(kind, available, now_ms);
                out.push(Effect::ApplyVisibility {
                    snapshot: self.visibility(state),
                });
            }

            Event::SessionLocked { .. } => {
                if !state.is_locked() {
                    state.set_locked(true);
                    out.push(Effect::ApplyVisibility {
                        snapshot: self.visibility(state),
                    });
                }
            }

            Event::SessionUnlocked { .. } => {
                if state.is_locked() {
                    state.set_locked(false);
                    out.push(Effect::ApplyVisibility {
                        snapshot: self.visibility(state),
                    });
                }
            }

            Event::SessionModeChanged { mode, .. } => {
                let before = (state.is_locked(), state.is_greeter());
                state.apply_session_mode(mode);
                if (state.is_locked(), state.is_greeter()) != before {
                    out.push(Effect::ApplyVisibility {
                        snapshot: self.visibility(state),
                    });
                }
            }

            Event::PrepareForSleep { .. } => {
                state.set_preparing_for_sleep(true);
            }

            Event::ResumedFromSleep { .. } => {
                state.set_preparing_for_sleep(false);
            }

            Event::LayoutChanged {
                orientation_lock_visible,
                ..
            } => {
                state.set_orientation_lock_visible(orientation_lock_visible);

                if !self.extra_suspend_enabled() {
                    return Ok(out);
                }

                if !orientation_lock_visible
                    && !state.extra_suspend_placed()
                    && self.action(ActionKind::Suspend).is_some()
                {
                    state.set_extra_suspend_placed(true);
                    out.push(Effect::InsertExtraSuspend);
                } else if orientation_lock_visible && state.extra_suspend_placed() {
                    state.set_extra_suspend_placed(false);
                    out.push(Effect::RemoveExtraSuspend);
                }
            }

            Event::DialogButtonActivated { index, .. } => {
                out.extend(self.answer_dialog(state, |request| request.signal_of(index))?);
            }

            Event::DialogDefaultActivated { .. } => {
                out.extend(
                    self.answer_dialog(state, |request| request.signal_of(request.default_index()))?,
                );
            }

            Event::DialogCancelRequested { .. } => {
                out.extend(
                    self.answer_dialog(state, |request| request.signal_of(request.cancel_index()))?,
                );
            }

            Event::DialogDismissed { .. } => {
                if let DialogPhase::Open { kind } = state.dialog() {
                    state.set_dialog(DialogPhase::Closing {
                        kind,
                        verdict: None,
                    });
                    out.push(Effect::DismissDialog);
                }
            }

            Event::DialogClosed { .. } => match state.dialog() {
                DialogPhase::Closing { kind, verdict } => {
                    state.set_dialog(DialogPhase::Idle);
                    if matches!(verdict, Some(ButtonSignal::Confirmed)) {
                        out.push(Effect::Invoke { kind });
                    }
                }
                DialogPhase::Open { .. } => {
                    // Host closed the surface on its own; treat as a
                    // dismissal without verdict.
                    state.set_dialog(DialogPhase::Idle);
                }
                DialogPhase::Idle => {}
            },
        }

        Ok(out)
    }

    /// Resolve a dialog answer. Only the first answer counts; anything
    /// arriving while the dialog is already closing is dropped.
    fn answer_dialog<F>(&self, state: &mut State, pick: F) -> Result<Vec<Effect>, Error>
    where
        F: FnOnce(&DialogRequest) -> Result<ButtonSignal, DialogError>,
    {
        match state.dialog() {
            DialogPhase::Open { kind } => {
                let request = self
                    .dialog_for(kind)
                    .ok_or(Error::Dialog(DialogError::NotOpen))?;
                let signal = pick(request).map_err(Error::Dialog)?;

                state.set_dialog(DialogPhase::Closing {
                    kind,
                    verdict: Some(signal),
                });
                Ok(vec![Effect::DismissDialog])
            }
            DialogPhase::Closing { .. } => Ok(Vec::new()),
            DialogPhase::Idle => Err(Error::Dialog(DialogError::NotOpen)),
        }
    }
}
