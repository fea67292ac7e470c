// Author: Dustin Pilgrim
// License: MIT

use crate::cli::{Args, Command};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub async fn run(args: Args) -> Result<(), AnyError> {
    // command mode: args.command is Some
    let cmd = args.command.as_ref().expect("command mode");

    match cmd {
        Command::Open => relay("open", "Menu opened").await,
        Command::Close => relay("close", "Menu closed").await,

        Command::Click { action } => {
            let msg = format!("click {}", action);
            relay(&msg, "Click delivered").await
        }

        Command::Answer { args } => {
            let mut msg = String::from("answer");
            if !args.is_empty() {
                msg.push(' ');
                msg.push_str(&args.join(" "));
            }
            relay(&msg, "Answer delivered").await
        }

        Command::Mode { mode } => {
            let msg = format!("mode {}", mode);
            relay(&msg, "Session mode updated").await
        }

        Command::Orientation { state } => {
            let msg = format!("orientation {}", state);
            relay(&msg, "Orientation state updated").await
        }

        Command::Status { json } => {
            let msg = if *json { "status --json" } else { "status" };

            match crate::ipc::client::send_raw(msg).await {
                Ok(resp) => {
                    if !resp.is_empty() {
                        println!("{resp}");
                    }
                    Ok(())
                }
                Err(e) => {
                    if *json {
                        // Bars need valid JSON on stdout even when the daemon
                        // isn't running.
                        println!(
                            "{}",
                            r#"{"enabled":false,"backend":"none","locked":false,"greeter":false,"menu_open":false,"extra_suspend_shown":false,"dialog":null,"buttons":[],"uptime_seconds":0}"#
                        );
                    } else {
                        eprintln!("torpor: {e}");
                    }
                    Ok(())
                }
            }
        }

        Command::Enable => relay("enable", "Menu enabled").await,
        Command::Disable => relay("disable", "Menu disabled").await,
        Command::Reload => relay("reload", "Configuration reloaded").await,
        Command::Stop => relay("stop", "Stopping Torpor daemon").await,
    }
}

async fn relay(msg: &str, fallback: &str) -> Result<(), AnyError> {
    match crate::ipc::client::send_raw(msg).await {
        Ok(resp) => {
            let out = resp.trim_end();
            if out.is_empty() {
                println!("{fallback}");
            } else {
                println!("{out}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("torpor: {e}");
            Ok(())
        }
    }
}
