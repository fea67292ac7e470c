use std::path::Path;

use eyre::{Result, WrapErr};
use rune_cfg::RuneConfig;

use crate::{
    core::{
        action::ActionKind,
        config::{BackendChoice, Config},
    },
    tdebug,
};

pub fn parse_config_file(path: &Path) -> Result<Config> {
    let rune = RuneConfig::from_file(path)
        .wrap_err_with(|| format!("failed to parse {}", path.display()))?;
    parse_torpor_config(&rune)
}

/// Applies whatever the file sets on top of the built-in defaults. Only the
/// backend name can fail; everything else falls back field by field.
pub fn parse_torpor_config(config: &RuneConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(backend) = get_string(config, "torpor.backend") {
        cfg.backend = parse_backend(&backend).ok_or_else(|| {
            eyre::eyre!(
                "unknown backend '{}' (expected auto, logind or command)",
                backend.trim()
            )
        })?;
    }

    if let Some(actions) = get_strings(config, "torpor.actions") {
        cfg.actions = actions;
    }

    if let Some(allow_lock) = get_bool(config, "torpor.allow_lock") {
        cfg.allow_lock = allow_lock;
    }

    if let Some(helper) = get_string(config, "torpor.lock_helper") {
        cfg.lock_helper = helper;
    }

    if let Some(extra) = get_bool(config, "torpor.extra_suspend_button") {
        cfg.extra_suspend_button = extra;
    }

    for kind in ActionKind::ALL {
        apply_action_block(config, &mut cfg, kind);
    }

    tdebug!("Config", "Parsed config:");
    tdebug!("Config", "  backend = {:?}", cfg.backend);
    tdebug!("Config", "  actions = [{}]", cfg.actions.join(", "));
    tdebug!("Config", "  allow_lock = {}", cfg.allow_lock);
    tdebug!("Config", "  lock_helper = \"{}\"", cfg.lock_helper);
    tdebug!("Config", "  extra_suspend_button = {}", cfg.extra_suspend_button);
    for kind in ActionKind::ALL {
        let a = cfg.action(kind);
        let mut details = format!(
            "  {}: label=\"{}\", destructive={}",
            kind.name(),
            a.label,
            a.destructive
        );
        if let Some(cmd) = &a.command {
            details.push_str(&format!(", command=\"{}\"", cmd));
        }
        tdebug!("Config", "{}", details);
    }

    Ok(cfg)
}

fn apply_action_block(config: &RuneConfig, cfg: &mut Config, kind: ActionKind) {
    let base = format!("torpor.{}", kind.name().replace('-', "_"));
    let action = cfg.action_mut(kind);

    if let Some(label) = get_string(config, &format!("{base}.label")) {
        action.label = label;
    }
    if let Some(icon) = get_string(config, &format!("{base}.icon")) {
        action.icon = icon;
    }
    if let Some(destructive) = get_bool(config, &format!("{base}.destructive")) {
        action.destructive = destructive;
    }
    if let Some(command) = get_string(config, &format!("{base}.command")) {
        action.command = Some(command);
    }

    if let Some(subject) = get_string(config, &format!("{base}.confirm.subject")) {
        action.confirm.subject = subject;
    }
    if let Some(body) = get_string(config, &format!("{base}.confirm.body")) {
        action.confirm.body = body;
    }
    if let Some(icon) = get_string(config, &format!("{base}.confirm.icon")) {
        action.confirm.icon = icon;
    }
    if let Some(cancel) = get_string(config, &format!("{base}.confirm.cancel_label")) {
        action.confirm.cancel_label = cancel;
    }
    if let Some(confirm) = get_string(config, &format!("{base}.confirm.confirm_label")) {
        action.confirm.confirm_label = confirm;
    }
}

fn parse_backend(s: &str) -> Option<BackendChoice> {
    match s.trim().to_ascii_lowercase().as_str() {
        "auto" => Some(BackendChoice::Auto),
        "logind" => Some(BackendChoice::Logind),
        "command" | "shell" => Some(BackendChoice::Command),
        _ => None,
    }
}

fn get_string(config: &RuneConfig, path: &str) -> Option<String> {
    config
        .get::<String>(path)
        .or_else(|_| config.get::<String>(&path.replace('_', "-")))
        .ok()
}

fn get_bool(config: &RuneConfig, path: &str) -> Option<bool> {
    config
        .get::<bool>(path)
        .or_else(|_| config.get::<bool>(&path.replace('_', "-")))
        .ok()
}

fn get_strings(config: &RuneConfig, path: &str) -> Option<Vec<String>> {
    config
        .get::<Vec<String>>(path)
        .or_else(|_| config.get::<Vec<String>>(&path.replace('_', "-")))
        .ok()
}
