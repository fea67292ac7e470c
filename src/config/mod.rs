use std::path::{Path, PathBuf};

pub mod bootstrap;
pub mod parser;

use crate::{core::config::Config, tdebug, twarn};

/// What `load_from_path` actually loaded: the parsed config plus the path
/// it came from, which may be a fallback when the requested file is gone.
pub struct Loaded {
    pub cfg: Config,
    pub path: PathBuf,
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|mut p| {
        p.push(".config/torpor/torpor.rune");
        p
    })
}

fn system_config_path() -> PathBuf {
    PathBuf::from("/etc/torpor/torpor.rune")
}

/// User config wins over the system one. When neither exists the user
/// path is returned.
pub fn resolve_default_config_path() -> PathBuf {
    if let Some(user) = user_config_path() {
        if user.exists() {
            return user;
        }
    }

    let system = system_config_path();
    if system.exists() {
        return system;
    }

    user_config_path().unwrap_or(system)
}

/// A parse failure is a hard error; a missing file falls back to the other
/// well-known location, then to built-in defaults.
pub fn load_from_path(path: &Path) -> Result<Loaded, String> {
    if path.exists() {
        let cfg = parser::parse_config_file(path)
            .map_err(|e| format!("failed to load {}: {e:#}", path.display()))?;
        tdebug!("Config", "Loaded config from: {}", path.display());
        return Ok(Loaded {
            cfg,
            path: path.to_path_buf(),
        });
    }

    let fallback = resolve_default_config_path();
    if fallback != path && fallback.exists() {
        let cfg = parser::parse_config_file(&fallback)
            .map_err(|e| format!("failed to load {}: {e:#}", fallback.display()))?;
        tdebug!("Config", "Loaded config from: {}", fallback.display());
        return Ok(Loaded {
            cfg,
            path: fallback,
        });
    }

    twarn!(
        "Config",
        "{} does not exist; using built-in defaults",
        path.display()
    );
    Ok(Loaded {
        cfg: Config::default(),
        path: path.to_path_buf(),
    })
}
