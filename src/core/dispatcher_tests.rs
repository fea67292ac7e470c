// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::ActionKind;
use crate::core::config::Config;
use crate::core::dialog::{ButtonSignal, DialogButton, DialogRequest};
use crate::core::dispatcher::Dispatcher;
use crate::core::effect::Effect;
use crate::core::error::{ConfigError, DialogError, Error, HostError, StateError};
use crate::core::events::{Event, SessionMode};
use crate::core::host::{HostSignal, MenuHost, SubscriptionHandle};
use crate::core::state::State;
use crate::core::visibility::VisibilitySnapshot;

struct FakeHost {
    next_handle: u64,
    active: Vec<SubscriptionHandle>,
    fail_after: Option<usize>,
    granted: usize,
}

impl FakeHost {
    fn new() -> Self {
        Self {
            next_handle: 1,
            active: Vec::new(),
            fail_after: None,
            granted: 0,
        }
    }

    fn failing_after(n: usize) -> Self {
        let mut host = Self::new();
        host.fail_after = Some(n);
        host
    }
}

impl MenuHost for FakeHost {
    fn subscribe(&mut self, _signal: HostSignal) -> Result<SubscriptionHandle, HostError> {
        if let Some(limit) = self.fail_after {
            if self.granted >= limit {
                return Err(HostError::SubscribeRejected);
            }
        }
        let handle = SubscriptionHandle(self.next_handle);
        self.next_handle += 1;
        self.granted += 1;
        self.active.push(handle);
        Ok(handle)
    }

    fn unsubscribe(&mut self, handle: SubscriptionHandle) -> Result<(), HostError> {
        match self.active.iter().position(|h| *h == handle) {
            Some(idx) => {
                self.active.remove(idx);
                Ok(())
            }
            None => Err(HostError::NotSubscribed),
        }
    }

    fn apply_visibility(&mut self, _snapshot: &VisibilitySnapshot) {}
    fn insert_extra_suspend(&mut self) {}
    fn remove_extra_suspend(&mut self) {}
    fn present_dialog(&mut self, _request: &DialogRequest) {}
    fn dismiss_dialog(&mut self) {}
}

fn dispatcher() -> Dispatcher {
    Dispatcher::new(&Config::default()).unwrap()
}

fn attached() -> (Dispatcher, State, FakeHost) {
    let d = dispatcher();
    let mut state = State::new(0);
    let mut host = FakeHost::new();
    d.attach(&mut state, &mut host).unwrap();
    (d, state, host)
}

fn probe(kind: ActionKind, available: bool, now_ms: u64) -> Event {
    Event::ProbeCompleted {
        kind,
        available,
        now_ms,
    }
}

fn last_snapshot(effects: &[Effect]) -> VisibilitySnapshot {
    effects
        .iter()
        .rev()
        .find_map(|e| match e {
            Effect::ApplyVisibility { snapshot } => Some(snapshot.clone()),
            _ => None,
        })
        .unwrap()
}

fn open_hibernate_dialog(d: &Dispatcher, state: &mut State) {
    d.handle_event(state, probe(ActionKind::Hibernate, true, 1))
        .unwrap();
    let effects = d
        .handle_event(
            state,
            Event::Clicked {
                kind: ActionKind::Hibernate,
                now_ms: 2,
            },
        )
        .unwrap();
    assert!(matches!(effects[0], Effect::ShowDialog { .. }));
}

// ---------------- lifecycle ----------------

#[test]
fn attach_starts_all_hidden() {
    let d = dispatcher();
    let mut state = State::new(0);
    let mut host = FakeHost::new();

    let effects = d.attach(&mut state, &mut host).unwrap();

    let snapshot = last_snapshot(&effects);
    assert!(ActionKind::ALL.iter().all(|k| !snapshot.visible(*k)));
    assert!(state.enabled());

    // open, close, one click per action, session mode, layout
    assert_eq!(host.active.len(), 8);
}

#[test]
fn attach_twice_is_rejected() {
    let (d, mut state, mut host) = attached();

    let err = d.attach(&mut state, &mut host).unwrap_err();
    assert_eq!(err, Error::InvalidState(StateError::AlreadyEnabled));
}

#[test]
fn detach_without_attach_is_rejected() {
    let d = dispatcher();
    let mut state = State::new(0);
    let mut host = FakeHost::new();

    let err = d.detach(&mut state, &mut host).unwrap_err();
    assert_eq!(err, Error::InvalidState(StateError::NotEnabled));
}

#[test]
fn attach_rolls_back_on_subscribe_failure() {
    let d = dispatcher();
    let mut state = State::new(0);
    let mut host = FakeHost::failing_after(3);

    let err = d.attach(&mut state, &mut host).unwrap_err();

    assert_eq!(err, Error::Host(HostError::SubscribeRejected));
    assert!(host.active.is_empty());
    assert!(!state.enabled());
    assert!(state.subscriptions().is_empty());
}

#[test]
fn detach_unsubscribes_everything_and_clears_state() {
    let (d, mut state, mut host) = attached();

    open_hibernate_dialog(&d, &mut state);
    d.handle_event(
        &mut state,
        Event::LayoutChanged {
            orientation_lock_visible: false,
            now_ms: 3,
        },
    )
    .unwrap();

    let effects = d.detach(&mut state, &mut host).unwrap();

    assert_eq!(
        effects,
        vec![Effect::DismissDialog, Effect::RemoveExtraSuspend]
    );
    assert!(host.active.is_empty());
    assert!(!state.enabled());
    assert!(state.dialog().is_idle());

    // a later attach starts from scratch: nothing visible until new probes
    let effects = d.attach(&mut state, &mut host).unwrap();
    let snapshot = last_snapshot(&effects);
    assert!(!snapshot.visible(ActionKind::Hibernate));
    assert!(!state.capabilities().available(ActionKind::Hibernate));
}

#[test]
fn repeated_enable_disable_cycles_leave_no_residue() {
    let d = dispatcher();
    let mut state = State::new(0);
    let mut host = FakeHost::new();

    for _ in 0..3 {
        d.attach(&mut state, &mut host).unwrap();
        assert_eq!(host.active.len(), 8);

        d.detach(&mut state, &mut host).unwrap();
        assert!(host.active.is_empty());
        assert!(state.subscriptions().is_empty());
    }
}

#[test]
fn events_are_ignored_until_attached() {
    let d = dispatcher();
    let mut state = State::new(0);

    let effects = d
        .handle_event(&mut state, Event::MenuOpened { now_ms: 1 })
        .unwrap();

    assert!(effects.is_empty());
    assert!(!state.menu_open());
}

// ---------------- probing and visibility ----------------

#[test]
fn opening_the_menu_probes_every_configured_action() {
    let (d, mut state, _host) = attached();

    let effects = d
        .handle_event(&mut state, Event::MenuOpened { now_ms: 1 })
        .unwrap();

    assert_eq!(
        effects,
        vec![
            Effect::Probe {
                kind: ActionKind::Suspend
            },
            Effect::Probe {
                kind: ActionKind::Hibernate
            },
            Effect::Probe {
                kind: ActionKind::HybridSleep
            },
            Effect::Probe {
                kind: ActionKind::Lock
            },
        ]
    );
    assert!(state.menu_open());
}

#[test]
fn reopening_the_menu_probes_again() {
    let (d, mut state, _host) = attached();

    d.handle_event(&mut state, Event::MenuOpened { now_ms: 1 })
        .unwrap();
    d.handle_event(&mut state, Event::MenuClosed { now_ms: 2 })
        .unwrap();
    assert!(!state.menu_open());

    let effects = d
        .handle_event(&mut state, Event::MenuOpened { now_ms: 3 })
        .unwrap();
    assert_eq!(effects.len(), ActionKind::ALL.len());
}

#[test]
fn first_open_shows_only_available_actions() {
    let (d, mut state, _host) = attached();

    d.handle_event(&mut state, Event::MenuOpened { now_ms: 1 })
        .unwrap();
    d.handle_event(&mut state, probe(ActionKind::Suspend, true, 2))
        .unwrap();
    d.handle_event(&mut state, probe(ActionKind::Hibernate, true, 3))
        .unwrap();
    d.handle_event(&mut state, probe(ActionKind::HybridSleep, false, 4))
        .unwrap();
    let effects = d
        .handle_event(&mut state, probe(ActionKind::Lock, true, 5))
        .unwrap();

    let snapshot = last_snapshot(&effects);
    assert!(snapshot.visible(ActionKind::Suspend));
    assert!(snapshot.visible(ActionKind::Hibernate));
    assert!(!snapshot.visible(ActionKind::HybridSleep));
    assert!(snapshot.visible(ActionKind::Lock));
}

#[test]
fn probe_completion_pushes_a_full_snapshot() {
    let (d, mut state, _host) = attached();

    let effects = d
        .handle_event(&mut state, probe(ActionKind::Suspend, true, 1))
        .unwrap();

    let snapshot = last_snapshot(&effects);
    assert_eq!(snapshot.entries.len(), ActionKind::ALL.len());
    assert!(snapshot.visible(ActionKind::Suspend));
    assert!(!snapshot.visible(ActionKind::Hibernate));
}

#[test]
fn later_probe_result_overrides_earlier() {
    let (d, mut state, _host) = attached();

    d.handle_event(&mut state, probe(ActionKind::Suspend, true, 2))
        .unwrap();
    let effects = d
        .handle_event(&mut state, probe(ActionKind::Suspend, false, 3))
        .unwrap();

    let snapshot = last_snapshot(&effects);
    assert!(!snapshot.visible(ActionKind::Suspend));
    assert_eq!(
        state
            .capabilities()
            .get(ActionKind::Suspend)
            .last_checked_ms(),
        Some(3)
    );
}

#[test]
fn repeated_probe_with_same_result_is_stable() {
    let (d, mut state, _host) = attached();

    d.handle_event(&mut state, probe(ActionKind::Suspend, true, 1))
        .unwrap();
    let first = d.visibility(&state);

    d.handle_event(&mut state, probe(ActionKind::Suspend, true, 2))
        .unwrap();

    assert_eq!(d.visibility(&state), first);
    assert!(state.capabilities().available(ActionKind::Suspend));
}

#[test]
fn probe_for_unconfigured_action_is_dropped() {
    let mut cfg = Config::default();
    cfg.actions = vec!["suspend".to_string()];
    let d = Dispatcher::new(&cfg).unwrap();
    let mut state = State::new(0);
    let mut host = FakeHost::new();
    d.attach(&mut state, &mut host).unwrap();

    let effects = d
        .handle_event(&mut state, probe(ActionKind::Hibernate, true, 1))
        .unwrap();

    assert!(effects.is_empty());
    assert!(!state.capabilities().available(ActionKind::Hibernate));
}

#[test]
fn lock_hides_everything_without_reprobing() {
    let (d, mut state, _host) = attached();

    for kind in ActionKind::ALL {
        d.handle_event(&mut state, probe(kind, true, 1)).unwrap();
    }
    assert!(d.visibility(&state).visible(ActionKind::Suspend));

    let effects = d
        .handle_event(&mut state, Event::SessionLocked { now_ms: 2 })
        .unwrap();
    assert!(effects.iter().all(|e| !matches!(e, Effect::Probe { .. })));
    let snapshot = last_snapshot(&effects);
    assert!(ActionKind::ALL.iter().all(|k| !snapshot.visible(*k)));

    // repeated lock is inert
    let effects = d
        .handle_event(&mut state, Event::SessionLocked { now_ms: 3 })
        .unwrap();
    assert!(effects.is_empty());

    // unlock restores cached availability, again without probing
    let effects = d
        .handle_event(&mut state, Event::SessionUnlocked { now_ms: 4 })
        .unwrap();
    assert!(effects.iter().all(|e| !matches!(e, Effect::Probe { .. })));
    let snapshot = last_snapshot(&effects);
    assert!(ActionKind::ALL.iter().all(|k| snapshot.visible(*k)));
}

#[test]
fn greeter_mode_hides_everything() {
    let (d, mut state, _host) = attached();

    for kind in ActionKind::ALL {
        d.handle_event(&mut state, probe(kind, true, 1)).unwrap();
    }

    let effects = d
        .handle_event(
            &mut state,
            Event::SessionModeChanged {
                mode: SessionMode::Greeter,
                now_ms: 2,
            },
        )
        .unwrap();
    let snapshot = last_snapshot(&effects);
    assert!(ActionKind::ALL.iter().all(|k| !snapshot.visible(*k)));

    let effects = d
        .handle_event(
            &mut state,
            Event::SessionModeChanged {
                mode: SessionMode::User,
                now_ms: 3,
            },
        )
        .unwrap();
    let snapshot = last_snapshot(&effects);
    assert!(ActionKind::ALL.iter().all(|k| snapshot.visible(*k)));

    // repeating the current mode changes nothing
    let effects = d
        .handle_event(
            &mut state,
            Event::SessionModeChanged {
                mode: SessionMode::User,
                now_ms: 4,
            },
        )
        .unwrap();
    assert!(effects.is_empty());
}

#[test]
fn visibility_is_order_independent() {
    let d = dispatcher();

    let mut a = State::new(0);
    let mut host = FakeHost::new();
    d.attach(&mut a, &mut host).unwrap();
    d.handle_event(&mut a, probe(ActionKind::Suspend, true, 1))
        .unwrap();
    d.handle_event(&mut a, Event::SessionLocked { now_ms: 2 })
        .unwrap();
    d.handle_event(&mut a, probe(ActionKind::Hibernate, true, 3))
        .unwrap();
    d.handle_event(&mut a, Event::SessionUnlocked { now_ms: 4 })
        .unwrap();

    let mut b = State::new(0);
    let mut host = FakeHost::new();
    d.attach(&mut b, &mut host).unwrap();
    d.handle_event(&mut b, Event::SessionLocked { now_ms: 1 })
        .unwrap();
    d.handle_event(&mut b, probe(ActionKind::Hibernate, true, 2))
        .unwrap();
    d.handle_event(&mut b, probe(ActionKind::Suspend, true, 3))
        .unwrap();
    d.handle_event(&mut b, Event::SessionUnlocked { now_ms: 4 })
        .unwrap();

    assert_eq!(d.visibility(&a), d.visibility(&b));
}

// ---------------- clicks ----------------

#[test]
fn plain_action_fires_without_confirmation() {
    let (d, mut state, _host) = attached();

    d.handle_event(&mut state, probe(ActionKind::Suspend, true, 1))
        .unwrap();
    let effects = d
        .handle_event(
            &mut state,
            Event::Clicked {
                kind: ActionKind::Suspend,
                now_ms: 2,
            },
        )
        .unwrap();

    assert_eq!(
        effects,
        vec![Effect::Invoke {
            kind: ActionKind::Suspend
        }]
    );
    assert!(state.dialog().is_idle());
}

#[test]
fn click_on_hidden_button_is_ignored() {
    let (d, mut state, _host) = attached();

    // no probe has landed yet, so everything still reads unavailable
    let effects = d
        .handle_event(
            &mut state,
            Event::Clicked {
                kind: ActionKind::Suspend,
                now_ms: 1,
            },
        )
        .unwrap();

    assert!(effects.is_empty());
}

#[test]
fn click_while_locked_is_ignored() {
    let (d, mut state, _host) = attached();

    d.handle_event(&mut state, probe(ActionKind::Suspend, true, 1))
        .unwrap();
    d.handle_event(&mut state, Event::SessionLocked { now_ms: 2 })
        .unwrap();

    let effects = d
        .handle_event(
            &mut state,
            Event::Clicked {
                kind: ActionKind::Suspend,
                now_ms: 3,
            },
        )
        .unwrap();

    assert!(effects.is_empty());
}

#[test]
fn click_on_unconfigured_action_is_rejected() {
    let mut cfg = Config::default();
    cfg.actions = vec!["suspend".to_string()];
    let d = Dispatcher::new(&cfg).unwrap();
    let mut state = State::new(0);
    let mut host = FakeHost::new();
    d.attach(&mut state, &mut host).unwrap();

    let err = d
        .handle_event(
            &mut state,
            Event::Clicked {
                kind: ActionKind::Hibernate,
                now_ms: 1,
            },
        )
        .unwrap_err();

    assert_eq!(
        err,
        Error::InvalidState(StateError::ActionNotConfigured(ActionKind::Hibernate))
    );
}

// ---------------- confirmation dialog ----------------

#[test]
fn destructive_click_opens_the_dialog() {
    let (d, mut state, _host) = attached();

    d.handle_event(&mut state, probe(ActionKind::Hibernate, true, 1))
        .unwrap();
    let effects = d
        .handle_event(
            &mut state,
            Event::Clicked {
                kind: ActionKind::Hibernate,
                now_ms: 2,
            },
        )
        .unwrap();

    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::ShowDialog { request } => {
            assert_eq!(request.subject, "Hibernate");
            assert_eq!(request.body, "Do you really want to hibernate the system ?");
            assert_eq!(request.buttons.len(), 2);
        }
        other => panic!("expected ShowDialog, got {:?}", other),
    }
    assert!(!state.dialog().is_idle());
}

#[test]
fn confirmed_action_fires_only_after_the_dialog_closed() {
    let (d, mut state, _host) = attached();
    open_hibernate_dialog(&d, &mut state);

    // answering closes the dialog but must not invoke yet
    let effects = d
        .handle_event(&mut state, Event::DialogDefaultActivated { now_ms: 3 })
        .unwrap();
    assert_eq!(effects, vec![Effect::DismissDialog]);

    // the close notification releases the pending invoke
    let effects = d
        .handle_event(&mut state, Event::DialogClosed { now_ms: 4 })
        .unwrap();
    assert_eq!(
        effects,
        vec![Effect::Invoke {
            kind: ActionKind::Hibernate
        }]
    );
    assert!(state.dialog().is_idle());

    // a duplicate close signal is inert
    let effects = d
        .handle_event(&mut state, Event::DialogClosed { now_ms: 5 })
        .unwrap();
    assert!(effects.is_empty());
}

#[test]
fn cancelled_dialog_never_invokes() {
    let (d, mut state, _host) = attached();
    open_hibernate_dialog(&d, &mut state);

    let effects = d
        .handle_event(&mut state, Event::DialogCancelRequested { now_ms: 3 })
        .unwrap();
    assert_eq!(effects, vec![Effect::DismissDialog]);

    let effects = d
        .handle_event(&mut state, Event::DialogClosed { now_ms: 4 })
        .unwrap();
    assert!(effects.is_empty());
    assert!(state.dialog().is_idle());
}

#[test]
fn dismissed_dialog_never_invokes() {
    let (d, mut state, _host) = attached();
    open_hibernate_dialog(&d, &mut state);

    let effects = d
        .handle_event(&mut state, Event::DialogDismissed { now_ms: 3 })
        .unwrap();
    assert_eq!(effects, vec![Effect::DismissDialog]);

    // a second dismissal while closing is inert
    let effects = d
        .handle_event(&mut state, Event::DialogDismissed { now_ms: 4 })
        .unwrap();
    assert!(effects.is_empty());

    let effects = d
        .handle_event(&mut state, Event::DialogClosed { now_ms: 5 })
        .unwrap();
    assert!(effects.is_empty());
    assert!(state.dialog().is_idle());
}

#[test]
fn only_the_first_answer_counts() {
    let (d, mut state, _host) = attached();
    open_hibernate_dialog(&d, &mut state);

    d.handle_event(&mut state, Event::DialogDefaultActivated { now_ms: 3 })
        .unwrap();

    // cancel arriving while the dialog is closing is dropped
    let effects = d
        .handle_event(&mut state, Event::DialogCancelRequested { now_ms: 4 })
        .unwrap();
    assert!(effects.is_empty());

    let effects = d
        .handle_event(&mut state, Event::DialogClosed { now_ms: 5 })
        .unwrap();
    assert_eq!(
        effects,
        vec![Effect::Invoke {
            kind: ActionKind::Hibernate
        }]
    );
}

#[test]
fn second_destructive_click_is_rejected_while_dialog_open() {
    let (d, mut state, _host) = attached();
    open_hibernate_dialog(&d, &mut state);

    let err = d
        .handle_event(
            &mut state,
            Event::Clicked {
                kind: ActionKind::Hibernate,
                now_ms: 3,
            },
        )
        .unwrap_err();

    assert_eq!(err, Error::Dialog(DialogError::AlreadyOpen));
}

#[test]
fn answer_without_dialog_is_rejected() {
    let (d, mut state, _host) = attached();

    let err = d
        .handle_event(&mut state, Event::DialogDefaultActivated { now_ms: 1 })
        .unwrap_err();

    assert_eq!(err, Error::Dialog(DialogError::NotOpen));
}

#[test]
fn unknown_button_leaves_the_dialog_open() {
    let (d, mut state, _host) = attached();
    open_hibernate_dialog(&d, &mut state);

    let err = d
        .handle_event(&mut state, Event::DialogButtonActivated { index: 7, now_ms: 3 })
        .unwrap_err();
    assert_eq!(err, Error::Dialog(DialogError::UnknownButton(7)));

    // the dialog is still answerable; index 1 is the confirm button
    let effects = d
        .handle_event(&mut state, Event::DialogButtonActivated { index: 1, now_ms: 4 })
        .unwrap();
    assert_eq!(effects, vec![Effect::DismissDialog]);

    let effects = d
        .handle_event(&mut state, Event::DialogClosed { now_ms: 5 })
        .unwrap();
    assert_eq!(
        effects,
        vec![Effect::Invoke {
            kind: ActionKind::Hibernate
        }]
    );
}

#[test]
fn stray_dialog_close_is_tolerated() {
    let (d, mut state, _host) = attached();

    let effects = d
        .handle_event(&mut state, Event::DialogClosed { now_ms: 1 })
        .unwrap();

    assert!(effects.is_empty());
}

#[test]
fn host_closing_an_open_dialog_counts_as_dismissal() {
    let (d, mut state, _host) = attached();
    open_hibernate_dialog(&d, &mut state);

    // the host killed the dialog without reporting an answer first
    let effects = d
        .handle_event(&mut state, Event::DialogClosed { now_ms: 3 })
        .unwrap();

    assert!(effects.is_empty());
    assert!(state.dialog().is_idle());
}

// ---------------- extra suspend button ----------------

#[test]
fn hidden_orientation_lock_places_the_extra_suspend() {
    let (d, mut state, _host) = attached();

    let effects = d
        .handle_event(
            &mut state,
            Event::LayoutChanged {
                orientation_lock_visible: false,
                now_ms: 1,
            },
        )
        .unwrap();
    assert_eq!(effects, vec![Effect::InsertExtraSuspend]);

    // repeated layout reports do not stack buttons
    let effects = d
        .handle_event(
            &mut state,
            Event::LayoutChanged {
                orientation_lock_visible: false,
                now_ms: 2,
            },
        )
        .unwrap();
    assert!(effects.is_empty());

    let effects = d
        .handle_event(
            &mut state,
            Event::LayoutChanged {
                orientation_lock_visible: true,
                now_ms: 3,
            },
        )
        .unwrap();
    assert_eq!(effects, vec![Effect::RemoveExtraSuspend]);

    let effects = d
        .handle_event(
            &mut state,
            Event::LayoutChanged {
                orientation_lock_visible: true,
                now_ms: 4,
            },
        )
        .unwrap();
    assert!(effects.is_empty());
}

#[test]
fn extra_suspend_respects_the_config_switch() {
    let mut cfg = Config::default();
    cfg.extra_suspend_button = false;
    let d = Dispatcher::new(&cfg).unwrap();
    let mut state = State::new(0);
    let mut host = FakeHost::new();
    d.attach(&mut state, &mut host).unwrap();

    let effects = d
        .handle_event(
            &mut state,
            Event::LayoutChanged {
                orientation_lock_visible: false,
                now_ms: 1,
            },
        )
        .unwrap();

    assert!(effects.is_empty());
    assert!(!state.extra_suspend_placed());
}

#[test]
fn extra_suspend_needs_a_suspend_button() {
    let mut cfg = Config::default();
    cfg.actions = vec!["hibernate".to_string(), "lock".to_string()];
    let d = Dispatcher::new(&cfg).unwrap();
    let mut state = State::new(0);
    let mut host = FakeHost::new();
    d.attach(&mut state, &mut host).unwrap();

    let effects = d
        .handle_event(
            &mut state,
            Event::LayoutChanged {
                orientation_lock_visible: false,
                now_ms: 1,
            },
        )
        .unwrap();

    assert!(effects.is_empty());
}

// ---------------- sleep cycle ----------------

#[test]
fn sleep_cycle_only_flags_state() {
    let (d, mut state, _host) = attached();

    let effects = d
        .handle_event(&mut state, Event::PrepareForSleep { now_ms: 1 })
        .unwrap();
    assert!(effects.is_empty());
    assert!(state.preparing_for_sleep());

    let effects = d
        .handle_event(&mut state, Event::ResumedFromSleep { now_ms: 2 })
        .unwrap();
    assert!(effects.is_empty());
    assert!(!state.preparing_for_sleep());
}

// ---------------- construction ----------------

#[test]
fn unknown_action_name_is_rejected() {
    let mut cfg = Config::default();
    cfg.actions = vec!["poweroff".to_string()];

    let err = Dispatcher::new(&cfg).unwrap_err();

    assert_eq!(
        err,
        Error::InvalidConfig(ConfigError::UnknownAction("poweroff".to_string()))
    );
}

#[test]
fn empty_action_list_is_rejected() {
    let mut cfg = Config::default();
    cfg.actions.clear();

    let err = Dispatcher::new(&cfg).unwrap_err();

    assert_eq!(err, Error::InvalidConfig(ConfigError::NoActionsEnabled));
}

#[test]
fn duplicate_action_names_collapse() {
    let mut cfg = Config::default();
    cfg.actions = vec!["suspend".to_string(), "suspend".to_string()];

    let d = Dispatcher::new(&cfg).unwrap();

    assert_eq!(d.actions().len(), 1);
}

#[test]
fn only_destructive_actions_get_a_dialog() {
    let d = dispatcher();

    assert!(d.dialog_for(ActionKind::Hibernate).is_some());
    assert!(d.dialog_for(ActionKind::Suspend).is_none());
    assert!(d.dialog_for(ActionKind::HybridSleep).is_none());
    assert!(d.dialog_for(ActionKind::Lock).is_none());
}

#[test]
fn dialog_request_enforces_button_invariants() {
    let err = DialogRequest::new("s", "b", "i", vec![]).unwrap_err();
    assert_eq!(err, DialogError::NoButtons);

    let two_defaults = vec![
        DialogButton {
            label: "a".to_string(),
            signal: ButtonSignal::Cancelled,
            is_default: true,
            is_cancel: true,
        },
        DialogButton {
            label: "b".to_string(),
            signal: ButtonSignal::Confirmed,
            is_default: true,
            is_cancel: false,
        },
    ];
    let err = DialogRequest::new("s", "b", "i", two_defaults).unwrap_err();
    assert_eq!(err, DialogError::WrongDefaultCount(2));

    let no_cancel = vec![DialogButton {
        label: "a".to_string(),
        signal: ButtonSignal::Confirmed,
        is_default: true,
        is_cancel: false,
    }];
    let err = DialogRequest::new("s", "b", "i", no_cancel).unwrap_err();
    assert_eq!(err, DialogError::WrongCancelCount(0));
}
