// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use crate::core::action::ActionKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration selection/semantics failed.
    ///
    /// Examples:
    /// - action name in the config is not one of the known kinds
    /// - every action disabled (nothing to put in the menu)
    InvalidConfig(ConfigError),

    /// An event was rejected because it is invalid in the current state.
    ///
    /// Examples:
    /// - enable while already enabled
    /// - click on an action the menu was not built with
    InvalidState(StateError),

    /// Confirmation-dialog protocol violation.
    Dialog(DialogError),

    /// The host refused a subscription or dialog operation.
    Host(HostError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The named action is not one of suspend/hibernate/hybrid-sleep/lock.
    UnknownAction(String),

    /// No action is enabled; an empty menu is a config mistake.
    NoActionsEnabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    AlreadyEnabled,
    NotEnabled,

    /// A click arrived for an action this menu was not built with.
    ActionNotConfigured(ActionKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    /// A second dialog open was requested while one is active.
    /// Policy: the first dialog stays, the new request is rejected.
    AlreadyOpen,

    /// A button/answer event arrived with no dialog open.
    NotOpen,

    /// Activation named a button index the open dialog does not have.
    UnknownButton(usize),

    /// Construction invariants (caught when the request is built,
    /// never at activation time).
    NoButtons,
    WrongDefaultCount(usize),
    WrongCancelCount(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    SubscribeRejected,
    NotSubscribed,
}

// ---------------- Display ----------------

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(e) => write!(f, "{e}"),
            Error::InvalidState(e) => write!(f, "{e}"),
            Error::Dialog(e) => write!(f, "{e}"),
            Error::Host(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownAction(name) =>
                write!(f, "unknown action '{name}'"),
            ConfigError::NoActionsEnabled =>
                write!(f, "no actions enabled"),
        }
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::AlreadyEnabled =>
                write!(f, "already enabled"),
            StateError::NotEnabled =>
                write!(f, "not enabled"),
            StateError::ActionNotConfigured(kind) =>
                write!(f, "action '{kind}' is not configured"),
        }
    }
}

impl fmt::Display for DialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogError::AlreadyOpen =>
                write!(f, "a confirmation dialog is already open"),
            DialogError::NotOpen =>
                write!(f, "no confirmation dialog is open"),
            DialogError::UnknownButton(idx) =>
                write!(f, "dialog has no button {idx}"),
            DialogError::NoButtons =>
                write!(f, "dialog has no buttons"),
            DialogError::WrongDefaultCount(n) =>
                write!(f, "dialog needs exactly one default button, got {n}"),
            DialogError::WrongCancelCount(n) =>
                write!(f, "dialog needs exactly one cancel button, got {n}"),
        }
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::SubscribeRejected =>
                write!(f, "host rejected the subscription"),
            HostError::NotSubscribed =>
                write!(f, "no such subscription"),
        }
    }
}

impl std::error::Error for Error {}
