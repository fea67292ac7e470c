// Author: Dustin Pilgrim
// License: MIT

use std::{env, path::Path, process::Stdio};

use tokio::process::Command;

use crate::{
    core::{action::ActionKind, config::Config},
    tdebug, terr,
};

/// Fallback backend that shells out instead of talking to logind.
/// A button is offered only when the first word of its command resolves
/// to an executable.
#[derive(Clone)]
pub struct CommandBackend {
    commands: [Option<String>; ActionKind::ALL.len()],
    allow_lock: bool,
}

impl CommandBackend {
    pub fn from_config(cfg: &Config) -> Self {
        let mut commands: [Option<String>; ActionKind::ALL.len()] = Default::default();
        for kind in ActionKind::ALL {
            commands[kind.index()] = match kind {
                ActionKind::Lock => Some(
                    cfg.lock
                        .command
                        .clone()
                        .unwrap_or_else(|| format!("{} -l", cfg.lock_helper)),
                ),
                _ => cfg.action(kind).command.clone(),
            };
        }

        Self {
            commands,
            allow_lock: cfg.allow_lock,
        }
    }

    pub fn probe(&self, kind: ActionKind) -> bool {
        if kind == ActionKind::Lock && !self.allow_lock {
            return false;
        }

        match &self.commands[kind.index()] {
            Some(cmd) => first_token_on_path(cmd),
            None => false,
        }
    }

    /// Detached spawn in its own process group; the daemon never waits on it.
    pub fn invoke(&self, kind: ActionKind) {
        let Some(cmd) = &self.commands[kind.index()] else {
            terr!("Command", "No command configured for {}", kind.name());
            return;
        };

        tdebug!("Command", "Running: {}", cmd);

        let spawned = Command::new("sh")
            .arg("-c")
            .arg(cmd)
            .envs(std::env::vars())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .process_group(0)
            .spawn();

        if let Err(e) = spawned {
            terr!("Command", "Failed to spawn '{}': {}", cmd, e);
        }
    }
}

fn first_token_on_path(command: &str) -> bool {
    let Some(first) = command.split_whitespace().next() else {
        return false;
    };

    if first.contains('/') {
        return Path::new(first).is_file();
    }

    let Some(path) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&path).any(|dir| dir.join(first).is_file())
}
