// Author: Dustin Pilgrim
// License: MIT

use std::fmt::Display;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::UnixStream,
    time::{Duration, timeout},
};

const IO_TIMEOUT: Duration = Duration::from_secs(2);

/// Sends one command to the daemon socket and returns the raw reply.
pub async fn send_raw(cmd: &str) -> Result<String, String> {
    let path = crate::ipc::socket_path()?;

    if !path.exists() {
        return Err("daemon not running".to_string());
    }

    let mut stream = match timeout(IO_TIMEOUT, UnixStream::connect(&path)).await {
        Ok(Ok(s)) => s,
        Ok(Err(e)) => return Err(format!("failed to connect to {}: {e}", path.display())),
        Err(_) => return Err("timeout connecting to daemon".to_string()),
    };

    step("writing to daemon", stream.write_all(cmd.as_bytes())).await?;
    step("finalizing request", stream.shutdown()).await?;

    let mut resp = Vec::new();
    step("reading response", stream.read_to_end(&mut resp)).await?;

    Ok(String::from_utf8_lossy(&resp).to_string())
}

async fn step<T, E: Display>(
    what: &str,
    fut: impl std::future::Future<Output = Result<T, E>>,
) -> Result<T, String> {
    timeout(IO_TIMEOUT, fut)
        .await
        .map_err(|_| format!("timeout {what}"))?
        .map_err(|e| format!("{what} failed: {e}"))
}
