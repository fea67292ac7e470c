// Author: Dustin Pilgrim
// License: MIT

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::watch;
use zbus::{Connection, Proxy, zvariant::OwnedObjectPath};

use crate::{
    core::{action::ActionKind, events::Event, utils::now_ms},
    services::backend::availability_from_reply,
    tdebug, terr, tinfo, twarn,
};

/// Sink for pushing bus events into the dispatcher loop.
/// Implement this for whatever channel the daemon is using.
pub trait EventSink: Send + Sync + 'static {
    fn push(&self, ev: Event);
}

/// Spawn the login1 signal listeners:
/// - PrepareForSleep (org.freedesktop.login1.Manager)
/// - Lock/Unlock (org.freedesktop.login1.Session)
///
/// The task exits when `shutdown` flips to true.
pub fn spawn_listeners(
    sink: Arc<dyn EventSink>,
    shutdown: watch::Receiver<bool>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = run_listeners(sink, shutdown).await {
            terr!("DBus", "Listener task failed: {e:?}");
        }
    })
}

async fn run_listeners(
    sink: Arc<dyn EventSink>,
    mut shutdown: watch::Receiver<bool>,
) -> zbus::Result<()> {
    let sys = match Connection::system().await {
        Ok(c) => c,
        Err(e) => {
            twarn!("DBus", "Could not connect to system bus: {e:?}");
            return Ok(());
        }
    };

    // 1) PrepareForSleep (login1 Manager)
    match manager_proxy(&sys).await {
        Ok(proxy) => {
            if let Ok(mut stream) = proxy.receive_signal("PrepareForSleep").await {
                let sink = sink.clone();
                tokio::spawn(async move {
                    while let Some(sig) = stream.next().await {
                        let going_down: bool = match sig.body().deserialize() {
                            Ok(v) => v,
                            Err(_) => continue,
                        };
                        let t = now_ms();
                        sink.push(if going_down {
                            Event::PrepareForSleep { now_ms: t }
                        } else {
                            Event::ResumedFromSleep { now_ms: t }
                        });
                    }
                });
            }
        }
        Err(e) => {
            twarn!("DBus", "login1 Manager proxy unavailable: {e:?}");
        }
    }

    // 2) Lock/Unlock (login1 Session)
    match get_current_session_path(&sys).await {
        Ok(session_path) => {
            tinfo!("DBus", "Monitoring session {}", session_path.as_str());

            let proxy = Proxy::new(
                &sys,
                "org.freedesktop.login1",
                session_path,
                "org.freedesktop.login1.Session",
            )
            .await?;

            let mut lock_stream = proxy.receive_signal("Lock").await?;
            let mut unlock_stream = proxy.receive_signal("Unlock").await?;

            let sink_lock = sink.clone();
            tokio::spawn(async move {
                while let Some(_) = lock_stream.next().await {
                    sink_lock.push(Event::SessionLocked { now_ms: now_ms() });
                }
            });

            let sink_unlock = sink.clone();
            tokio::spawn(async move {
                while let Some(_) = unlock_stream.next().await {
                    sink_unlock.push(Event::SessionUnlocked { now_ms: now_ms() });
                }
            });
        }
        Err(e) => {
            twarn!("DBus", "Could not resolve session path for lock/unlock: {e:?}");
        }
    }

    // Hold this task open for the signal streams until shutdown flips.
    loop {
        if *shutdown.borrow() {
            break;
        }
        let _ = shutdown.changed().await;
        if *shutdown.borrow() {
            break;
        }
    }

    Ok(())
}

async fn manager_proxy(conn: &Connection) -> zbus::Result<Proxy<'static>> {
    Proxy::new(
        conn,
        "org.freedesktop.login1",
        "/org/freedesktop/login1",
        "org.freedesktop.login1.Manager",
    )
    .await
}

/// Probes and invokes power actions through org.freedesktop.login1.
#[derive(Clone)]
pub struct LogindBackend {
    conn: Connection,
    session_path: Option<OwnedObjectPath>,
    allow_lock: bool,
}

impl LogindBackend {
    /// Connects to the system bus and confirms a login manager is actually
    /// answering before committing to this backend.
    pub async fn connect(allow_lock: bool) -> zbus::Result<Self> {
        let conn = Connection::system().await?;
        let proxy = manager_proxy(&conn).await?;
        let _: String = proxy.call("CanSuspend", &()).await?;

        let session_path = match get_current_session_path(&conn).await {
            Ok(p) => Some(p),
            Err(e) => {
                twarn!("DBus", "No session path, screen locking unavailable: {e:?}");
                None
            }
        };

        Ok(Self {
            conn,
            session_path,
            allow_lock,
        })
    }

    /// logind answers Can* with "yes"/"no"/"challenge"/"na"; anything short
    /// of "yes" (including a failed call) keeps the button hidden.
    pub async fn probe(&self, kind: ActionKind) -> bool {
        let method = match kind {
            ActionKind::Suspend => "CanSuspend",
            ActionKind::Hibernate => "CanHibernate",
            ActionKind::HybridSleep => "CanHybridSleep",
            ActionKind::Lock => return self.allow_lock && self.session_path.is_some(),
        };

        match self.capability(method).await {
            Ok(reply) => availability_from_reply(&reply),
            Err(e) => {
                tdebug!("DBus", "{} failed, treating as unavailable: {:?}", method, e);
                false
            }
        }
    }

    pub async fn invoke(&self, kind: ActionKind) {
        let result = match kind {
            ActionKind::Suspend => self.manager_action("Suspend").await,
            ActionKind::Hibernate => self.manager_action("Hibernate").await,
            ActionKind::HybridSleep => self.manager_action("HybridSleep").await,
            ActionKind::Lock => self.lock_session().await,
        };

        if let Err(e) = result {
            terr!("DBus", "{} failed: {:?}", kind.name(), e);
        }
    }

    async fn capability(&self, method: &str) -> zbus::Result<String> {
        let proxy = manager_proxy(&self.conn).await?;
        proxy.call(method, &()).await
    }

    async fn manager_action(&self, method: &str) -> zbus::Result<()> {
        let proxy = manager_proxy(&self.conn).await?;
        // false = never pop an interactive polkit prompt.
        proxy.call(method, &(false,)).await
    }

    async fn lock_session(&self) -> zbus::Result<()> {
        let Some(path) = self.session_path.clone() else {
            twarn!("DBus", "Lock requested but no session path is known");
            return Ok(());
        };

        let proxy = Proxy::new(
            &self.conn,
            "org.freedesktop.login1",
            path,
            "org.freedesktop.login1.Session",
        )
        .await?;
        proxy.call("Lock", &()).await
    }
}

async fn get_current_session_path(connection: &Connection) -> zbus::Result<OwnedObjectPath> {
    let proxy = manager_proxy(connection).await?;

    // 1) XDG_SESSION_ID if present
    if let Ok(session_id) = std::env::var("XDG_SESSION_ID") {
        let result: zbus::Result<OwnedObjectPath> =
            proxy.call("GetSession", &(session_id.as_str(),)).await;

        if let Ok(path) = result {
            tdebug!("DBus", "Using session from XDG_SESSION_ID");
            return Ok(path);
        }
    }

    // 2) Search ListSessions for our UID, prefer graphical seat0
    let uid = unsafe { libc::getuid() };

    let sessions: Vec<(String, u32, String, String, OwnedObjectPath)> =
        proxy.call("ListSessions", &()).await?;

    for (session_id, session_uid, _username, seat, path) in &sessions {
        if *session_uid != uid {
            continue;
        }

        if let Ok(sproxy) = Proxy::new(
            connection,
            "org.freedesktop.login1",
            path.clone(),
            "org.freedesktop.login1.Session",
        )
        .await
        {
            if let Ok(session_type) = sproxy.get_property::<String>("Type").await {
                if (session_type == "wayland" || session_type == "x11") && seat == "seat0" {
                    tinfo!(
                        "DBus",
                        "Selected graphical session '{}' (type: {}, seat: {})",
                        session_id,
                        session_type,
                        seat
                    );
                    return Ok(path.clone());
                }
            }
        }
    }

    // 3) Fallback: first session for UID
    for (_session_id, session_uid, _username, _seat, path) in &sessions {
        if *session_uid == uid {
            twarn!("DBus", "Using first session for UID {}", uid);
            return Ok(path.clone());
        }
    }

    // 4) Fallback PID method
    let pid = std::process::id();
    let path: OwnedObjectPath = proxy.call("GetSessionByPID", &(pid,)).await?;
    Ok(path)
}
