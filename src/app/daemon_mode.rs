// Author: Dustin Pilgrim
// License: MIT

use crate::daemon::Daemon;
use std::io;
use std::path::PathBuf;

use crate::cli::Args;
use crate::{tdebug, terr, tinfo, twarn};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub async fn run(args: Args) -> Result<(), AnyError> {
    // single-instance
    let _instance_lock = crate::app::platform::acquire_single_instance_lock().map_err(|e| {
        eprintln!("{e}");
        io::Error::new(io::ErrorKind::AlreadyExists, e)
    })?;

    // logging
    if args.verbose {
        crate::log::set_verbose(true);
        tdebug!("Daemon", "Debug logging enabled");
    }
    if args.no_console {
        crate::log::set_console(false);
    }
    crate::log::init_daemon_log();

    tinfo!("Daemon", "Torpor starting");

    // resolve config path (initial)
    let mut config_path: PathBuf = match args.config.as_deref() {
        Some(p) => p.to_path_buf(),
        None => crate::config::resolve_default_config_path(),
    };

    // bootstrap only if no --config (and bootstrap itself does "only if missing")
    if args.config.is_none() {
        if let Err(e) = crate::config::bootstrap::ensure_user_config_exists() {
            twarn!("Config", "Failed to bootstrap default config: {e}");
        }

        config_path = crate::config::resolve_default_config_path();
    }

    // load (with fallbacks)
    let loaded = crate::config::load_from_path(&config_path).map_err(|e| {
        terr!("Config", "{e}");
        e
    })?;

    // shutdown
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

    let mut daemon = Daemon::new(loaded.cfg, loaded.path).await?;

    let mut daemon_task = tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move { daemon.run(shutdown_rx, shutdown_tx).await }
    });

    tokio::select! {
        res = &mut daemon_task => {
            match res {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e),
                Err(join_err) => Err(Box::new(join_err) as AnyError),
            }?;
            Ok(())
        }

        _ = tokio::signal::ctrl_c() => {
            tinfo!("Daemon", "Received Ctrl+C, shutting down");
            let _ = shutdown_tx.send(true);

            match daemon_task.await {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e),
                Err(join_err) => Err(Box::new(join_err)),
            }
        }
    }
}
