// Author: Dustin Pilgrim
// License: MIT

pub mod action;
pub mod capability;
pub mod config;
pub mod dialog;
pub mod dispatcher;
pub mod dispatcher_msg;
pub mod effect;
pub mod error;
pub mod events;
pub mod host;
pub mod info;
pub mod state;
pub mod utils;
pub mod visibility;

#[cfg(test)]
mod dispatcher_tests;
