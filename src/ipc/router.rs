use tokio::sync::{mpsc, oneshot};

use crate::{
    core::{
        action::ActionKind,
        dispatcher_msg::DispatcherMsg,
        events::{Event, SessionMode},
        utils::now_ms,
    },
    twarn,
};

/// Routes one socket command into the daemon loop and renders the reply.
pub async fn route_command(cmd: &str, tx: &mpsc::Sender<DispatcherMsg>) -> String {
    let result: Result<String, String> = match cmd {
        "open" => push_event(tx, Event::MenuOpened { now_ms: now_ms() }).await,
        "close" => push_event(tx, Event::MenuClosed { now_ms: now_ms() }).await,

        cmd if cmd.starts_with("click ") => {
            let name = cmd.strip_prefix("click ").unwrap_or("").trim();
            match ActionKind::parse(name) {
                Some(kind) => {
                    push_event(
                        tx,
                        Event::Clicked {
                            kind,
                            now_ms: now_ms(),
                        },
                    )
                    .await
                }
                None => Err(format!("ERROR: Unknown action '{}'", name)),
            }
        }

        cmd if cmd.starts_with("answer") => {
            let args = cmd.strip_prefix("answer").unwrap_or("").trim();
            match parse_answer(args) {
                Ok(event) => push_event(tx, event).await,
                Err(e) => Err(e),
            }
        }

        cmd if cmd.starts_with("mode ") => {
            let arg = cmd.strip_prefix("mode ").unwrap_or("").trim();
            let mode = match arg {
                "user" => Some(SessionMode::User),
                "locked" => Some(SessionMode::Locked),
                "greeter" => Some(SessionMode::Greeter),
                _ => None,
            };
            match mode {
                Some(mode) => {
                    push_event(
                        tx,
                        Event::SessionModeChanged {
                            mode,
                            now_ms: now_ms(),
                        },
                    )
                    .await
                }
                None => Err(format!("ERROR: Unknown session mode '{}'", arg)),
            }
        }

        cmd if cmd.starts_with("orientation ") => {
            let arg = cmd.strip_prefix("orientation ").unwrap_or("").trim();
            match arg {
                "shown" | "hidden" => {
                    push_event(
                        tx,
                        Event::LayoutChanged {
                            orientation_lock_visible: arg == "shown",
                            now_ms: now_ms(),
                        },
                    )
                    .await
                }
                other => Err(format!("ERROR: Unknown orientation state '{}'", other)),
            }
        }

        cmd if cmd.starts_with("status") => {
            let as_json = cmd.contains("--json");
            let (reply_tx, reply_rx) = oneshot::channel();

            if tx
                .send(DispatcherMsg::GetStatus { reply: reply_tx })
                .await
                .is_err()
            {
                Err("ERROR: daemon loop is gone".to_string())
            } else {
                match reply_rx.await {
                    Ok(snap) => {
                        if as_json {
                            serde_json::to_string_pretty(&snap).map_err(|e| format!("ERROR: {e}"))
                        } else {
                            Ok(snap.pretty_text)
                        }
                    }
                    Err(_) => Err("ERROR: daemon did not answer".to_string()),
                }
            }
        }

        "enable" => {
            request(tx, |reply| DispatcherMsg::SetEnabled {
                enabled: true,
                reply,
            })
            .await
        }
        "disable" => {
            request(tx, |reply| DispatcherMsg::SetEnabled {
                enabled: false,
                reply,
            })
            .await
        }
        "reload" => request(tx, |reply| DispatcherMsg::ReloadConfig { reply }).await,
        "stop" => request(tx, |reply| DispatcherMsg::StopDaemon { reply }).await,

        _ => {
            twarn!("Router", "Unknown IPC command: {}", cmd);
            Err(format!("ERROR: Unknown command '{}'", cmd))
        }
    };

    result.unwrap_or_else(|e| e)
}

async fn push_event(tx: &mpsc::Sender<DispatcherMsg>, event: Event) -> Result<String, String> {
    tx.send(DispatcherMsg::Event(event))
        .await
        .map_err(|_| "ERROR: daemon loop is gone".to_string())?;
    Ok("ok".to_string())
}

async fn request(
    tx: &mpsc::Sender<DispatcherMsg>,
    make: impl FnOnce(oneshot::Sender<Result<String, String>>) -> DispatcherMsg,
) -> Result<String, String> {
    let (reply_tx, reply_rx) = oneshot::channel();

    tx.send(make(reply_tx))
        .await
        .map_err(|_| "ERROR: daemon loop is gone".to_string())?;

    match reply_rx.await {
        Ok(out) => out,
        Err(_) => Err("ERROR: daemon did not answer".to_string()),
    }
}

fn parse_answer(args: &str) -> Result<Event, String> {
    let now_ms = now_ms();
    let mut words = args.split_whitespace();

    match words.next() {
        Some("confirm") => Ok(Event::DialogDefaultActivated { now_ms }),
        Some("cancel") => Ok(Event::DialogCancelRequested { now_ms }),
        Some("dismiss") => Ok(Event::DialogDismissed { now_ms }),
        Some("button") => match words.next().map(str::parse::<usize>) {
            Some(Ok(index)) => Ok(Event::DialogButtonActivated { index, now_ms }),
            Some(Err(_)) => Err("ERROR: answer button needs a numeric index".to_string()),
            None => Err("ERROR: answer button needs an index".to_string()),
        },
        Some(other) => Err(format!("ERROR: Unknown answer '{}'", other)),
        None => {
            Err("ERROR: answer needs an argument (confirm|cancel|dismiss|button <n>)".to_string())
        }
    }
}
