use crate::tinfo;

/// Starter config written on first run. Everything in it matches the
/// built-in defaults, so deleting the file changes nothing.
const SAMPLE_CONFIG: &str = r#"# Torpor power menu configuration.
# Missing keys fall back to built-in defaults.

torpor {
    # auto | logind | command
    backend: "auto"

    # Menu order; drop an entry to remove its button.
    actions: ["suspend", "hibernate", "hybrid-sleep", "lock"]

    # Probe and invoke session locking.
    allow_lock: true

    # Locker binary for the command backend, invoked as "<helper> -l".
    lock_helper: "light-locker-command"

    # Offer a spare suspend button when the host hides its
    # orientation-lock button.
    extra_suspend_button: true

    suspend {
        label: "Suspend"
        icon: "media-playback-pause-symbolic"
        destructive: false
        command: "systemctl suspend || loginctl suspend"
    }

    hibernate {
        label: "Hibernate"
        icon: "document-save-symbolic"
        destructive: true

        confirm {
            subject: "Hibernate"
            body: "Do you really want to hibernate the system ?"
            icon: "document-save-symbolic"
            cancel_label: "Cancel"
            confirm_label: "Hibernate"
        }
    }

    hybrid_sleep {
        label: "Hybrid Sleep"
        icon: "document-save-as-symbolic"
        destructive: false
        command: "systemctl hybrid-sleep || loginctl hybrid-sleep"
    }

    lock {
        label: "Lock"
        icon: "changes-prevent-symbolic"
        destructive: false
    }
}
"#;

/// Writes the starter config to the user path, only if nothing is there.
pub fn ensure_user_config_exists() -> Result<(), String> {
    let Some(path) = super::user_config_path() else {
        return Err("could not resolve home directory".to_string());
    };

    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
    }

    std::fs::write(&path, SAMPLE_CONFIG)
        .map_err(|e| format!("failed to write {}: {e}", path.display()))?;

    tinfo!("Config", "Wrote starter config to {}", path.display());
    Ok(())
}
