use std::io;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{UnixListener, UnixStream},
    sync::mpsc,
    time::{Duration, timeout},
};

use crate::{core::dispatcher_msg::DispatcherMsg, tdebug, terr, tinfo};

use super::router::route_command;

/// Binds the control socket and spawns the accept loop. Commands are routed
/// into the daemon loop through `tx`.
pub async fn spawn_ipc_server(tx: mpsc::Sender<DispatcherMsg>) -> Result<(), String> {
    let listener = bind_socket()?;
    tinfo!("IPC", "Listening on control socket");

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut stream, _addr)) => {
                    let tx = tx.clone();

                    tokio::spawn(async move {
                        let result = timeout(Duration::from_secs(10), async {
                            if let Err(e) = handle_connection(&mut stream, tx).await {
                                terr!("IPC", "Error handling connection: {}", e);
                            }
                        })
                        .await;

                        if result.is_err() {
                            terr!("IPC", "Connection timed out after 10 seconds");
                        }

                        let _ = stream.shutdown().await;
                    });
                }
                Err(e) => terr!("IPC", "Failed to accept connection: {}", e),
            }
        }
    });

    Ok(())
}

/// A leftover socket from a crashed daemon binds again after a connect
/// probe shows nobody is serving it.
fn bind_socket() -> Result<UnixListener, String> {
    let path = super::socket_path()?;
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match UnixListener::bind(&path) {
        Ok(l) => Ok(l),
        Err(e) if e.kind() == io::ErrorKind::AddrInUse => {
            match std::os::unix::net::UnixStream::connect(&path) {
                Ok(_) => Err(format!(
                    "another daemon is already serving {}",
                    path.display()
                )),
                Err(_) => {
                    let _ = std::fs::remove_file(&path);
                    UnixListener::bind(&path)
                        .map_err(|e| format!("failed to bind {}: {e}", path.display()))
                }
            }
        }
        Err(e) => Err(format!("failed to bind {}: {e}", path.display())),
    }
}

/// Handles a single connection: one command in, one reply out.
async fn handle_connection(
    stream: &mut UnixStream,
    tx: mpsc::Sender<DispatcherMsg>,
) -> std::io::Result<()> {
    let mut buf = vec![0u8; 256];
    let n = stream.read(&mut buf).await?;

    if n == 0 {
        return Ok(());
    }

    let cmd = String::from_utf8_lossy(&buf[..n]).trim().to_string();

    if !cmd.contains("--json") {
        tdebug!("IPC", "Received command: {}", cmd);
    }

    let response = route_command(&cmd, &tx).await;

    stream.write_all(response.as_bytes()).await?;
    stream.flush().await?;

    Ok(())
}
