// Author: Dustin Pilgrim
// License: MIT

use std::time::Duration;

use serde::Serialize;

use crate::core::utils::format_duration;

/// Snapshot returned from the daemon for `torpor status`.
///
/// - The serialized form is the stable JSON contract for bars.
/// - `pretty_text` is CLI-facing output for `torpor status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub enabled: bool,
    pub backend: String,

    pub locked: bool,
    pub greeter: bool,
    pub menu_open: bool,
    pub extra_suspend_shown: bool,

    pub dialog: Option<DialogStatus>,
    pub buttons: Vec<ButtonStatus>,

    pub uptime_seconds: u64,

    #[serde(skip_serializing)]
    pub pretty_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ButtonStatus {
    pub action: String,
    pub label: String,
    pub icon: String,
    pub destructive: bool,
    pub available: bool,
    pub visible: bool,
    pub last_checked_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DialogStatus {
    pub subject: String,
    pub action: String,
    pub buttons: Vec<String>,
}

pub fn render_pretty(snap: &StatusSnapshot) -> String {
    let mut pretty = String::new();

    pretty.push_str("◆ STATUS\n");
    pretty.push_str(&format!("Enabled: {}\n", yesno(snap.enabled)));
    pretty.push_str(&format!("Backend: {}\n", snap.backend));

    let session = if snap.greeter {
        "greeter"
    } else if snap.locked {
        "locked"
    } else {
        "user"
    };
    pretty.push_str(&format!("Session: {session}\n"));
    pretty.push_str(&format!("Menu Open: {}\n", yesno(snap.menu_open)));

    match &snap.dialog {
        Some(d) => pretty.push_str(&format!("Dialog: {} ({})\n", d.subject, d.action)),
        None => pretty.push_str("Dialog: none\n"),
    }

    pretty.push_str(&format!(
        "Extra Suspend: {}\n",
        yesno(snap.extra_suspend_shown)
    ));
    pretty.push_str(&format!(
        "Uptime: {}\n",
        format_duration(Duration::from_secs(snap.uptime_seconds))
    ));

    pretty.push('\n');
    pretty.push_str("◆ BUTTONS\n");
    pretty.push_str(&render_buttons(&snap.buttons));

    pretty.trim_end().to_string()
}

fn render_buttons(buttons: &[ButtonStatus]) -> String {
    let mut out = String::new();

    if buttons.is_empty() {
        out.push_str("  (no buttons configured)\n");
        return out;
    }

    // Column widths
    let name_w = buttons
        .iter()
        .map(|b| b.action.len())
        .max()
        .unwrap_or(0)
        .max(6);

    let label_w = buttons
        .iter()
        .map(|b| b.label.len())
        .max()
        .unwrap_or(0)
        .max(5);

    for b in buttons {
        let marker = if b.visible { "→" } else { " " };

        out.push_str(&format!(
            "  {marker} {:<name_w$}  {:<label_w$}  available: {:<3}  shown: {}",
            b.action,
            b.label,
            yesno(b.available),
            yesno(b.visible),
            name_w = name_w,
            label_w = label_w
        ));

        if b.destructive {
            out.push_str("  confirm");
        }

        out.push('\n');
    }

    out
}

fn yesno(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}
