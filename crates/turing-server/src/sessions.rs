//! Process-wide, in-memory session store.
//!
//! Each session sits behind its own async mutex so one exchange at a time
//! runs per session; the map itself is guarded by a plain mutex that is
//! never held across an await.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tracing::debug;
use uuid::Uuid;

use turing_core::models::session::TuringSession;

pub type SessionHandle = Arc<tokio::sync::Mutex<TuringSession>>;

struct Entry {
    session: SessionHandle,
    last_access: Instant,
}

/// Sessions idle for longer than the TTL are dropped.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, Entry>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Entry>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a new session, sweeping expired entries first.
    pub fn insert(&self, session: TuringSession) -> (Uuid, SessionHandle) {
        let id = session.id();
        let handle: SessionHandle = Arc::new(tokio::sync::Mutex::new(session));

        let mut map = self.lock();
        let now = Instant::now();
        let swept = sweep(&mut map, now, self.ttl);
        if swept > 0 {
            debug!(swept, "expired sessions swept");
        }
        map.insert(
            id,
            Entry {
                session: Arc::clone(&handle),
                last_access: now,
            },
        );

        (id, handle)
    }

    /// Store `session`, discarding the one previously bound to `previous`.
    pub fn replace(
        &self,
        previous: Option<Uuid>,
        session: TuringSession,
    ) -> (Uuid, SessionHandle) {
        if let Some(old) = previous
            && self.remove(old)
        {
            debug!(session_id = %old, "session overwritten");
        }
        self.insert(session)
    }

    /// Look up a live session and refresh its last-access time.
    pub fn get(&self, id: Uuid) -> Option<SessionHandle> {
        let mut map = self.lock();
        let now = Instant::now();

        let live = map
            .get(&id)
            .map(|entry| now.saturating_duration_since(entry.last_access) < self.ttl)?;
        if !live {
            map.remove(&id);
            debug!(session_id = %id, "session expired");
            return None;
        }

        let entry = map.get_mut(&id)?;
        entry.last_access = now;
        Some(Arc::clone(&entry.session))
    }

    pub fn remove(&self, id: Uuid) -> bool {
        self.lock().remove(&id).is_some()
    }

    /// Drop every expired session, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        sweep(&mut self.lock(), Instant::now(), self.ttl)
    }

    /// Run [`purge_expired`](Self::purge_expired) every `period` in the
    /// background for as long as the runtime lives.
    pub fn spawn_sweeper(&self, period: Duration) -> tokio::task::JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                let purged = store.purge_expired();
                if purged > 0 {
                    debug!(purged, remaining = store.len(), "expired sessions purged");
                }
            }
        })
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Remove entries idle for at least `ttl` as of `now`.
fn sweep(map: &mut HashMap<Uuid, Entry>, now: Instant, ttl: Duration) -> usize {
    let before = map.len();
    map.retain(|_, entry| now.saturating_duration_since(entry.last_access) < ttl);
    before - map.len()
}
