//! Auth-key and session storage interfaces.
//!
//! The traits are synchronous and `Send + Sync` so a store can be shared
//! across connection tasks; an async backend wraps itself behind them.
//! [`MemoryStore`] is the reference implementation used by tests and as the
//! default backend.

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use relay_crypto::STORED_LEN;

/// A persistence failure inside a store backend.
///
/// Store errors are never mapped to protocol replies; they propagate to the
/// caller, which drops the connection without a partial commit.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreError {
    /// Backend-specific description.
    pub message: String,
}

impl StoreError {
    /// Construct from any displayable backend error.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "store error: {}", self.message)
    }
}
impl std::error::Error for StoreError {}

/// Specialized `Result` for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage for permanent and temporary authorization keys.
///
/// Keys are identified by their signed 64-bit fingerprint and persisted in
/// the truncated 192-byte form ([`STORED_LEN`]).
pub trait AuthKeyStore: Send + Sync {
    /// Fetch a permanent key.
    fn auth_key(&self, key_id: i64) -> Result<Option<[u8; STORED_LEN]>>;

    /// Insert a permanent key if absent. Returns `false` when a key with
    /// this id already exists; the stored key is left untouched.
    fn put_auth_key(&self, key_id: i64, key: [u8; STORED_LEN]) -> Result<bool>;

    /// Fetch a temporary key that has not yet expired.
    fn temp_auth_key(&self, key_id: i64) -> Result<Option<[u8; STORED_LEN]>>;

    /// Insert a temporary key with a lifetime, if absent. Same atomicity
    /// contract as [`put_auth_key`](Self::put_auth_key).
    fn put_temp_auth_key(&self, key_id: i64, key: [u8; STORED_LEN], ttl: Duration) -> Result<bool>;

    /// The permanent key a temporary key is bound to, if any.
    fn bound_auth_key(&self, temp_key_id: i64) -> Result<Option<i64>>;

    /// Bind a temporary key to a permanent one. Returns `false` when the
    /// temporary key is already bound; the existing binding wins.
    fn bind_auth_key(&self, temp_key_id: i64, perm_key_id: i64, ttl: Duration) -> Result<bool>;

    /// Remove a key (permanent or temporary) and any binding it appears in.
    /// Returns `false` when no such key existed.
    fn delete_auth_key(&self, key_id: i64) -> Result<bool>;
}

/// Storage for active sessions, keyed by `(auth_key_id, session_id)`.
pub trait SessionStore: Send + Sync {
    /// Create or replace a session with a fresh lifetime.
    fn put_session(&self, auth_key_id: i64, session_id: i64, ttl: Duration) -> Result<()>;

    /// Extend a live session's lifetime. Returns `false` when the session
    /// is absent or already expired — the caller must not resurrect it.
    fn refresh_session(&self, auth_key_id: i64, session_id: i64, ttl: Duration) -> Result<bool>;

    /// Enumerate the live session ids under an auth key.
    fn sessions(&self, auth_key_id: i64) -> Result<Vec<i64>>;

    /// Remove a session. Returns `false` when no live session existed.
    fn delete_session(&self, auth_key_id: i64, session_id: i64) -> Result<bool>;
}

// ─── In-memory reference implementation ──────────────────────────────────────

struct TempEntry {
    key: [u8; STORED_LEN],
    deadline: Instant,
}

struct Binding {
    perm_key_id: i64,
    deadline: Instant,
}

#[derive(Default)]
struct Inner {
    perm: HashMap<i64, [u8; STORED_LEN]>,
    temp: HashMap<i64, TempEntry>,
    bindings: HashMap<i64, Binding>,
    sessions: HashMap<(i64, i64), Instant>,
}

/// Mutex-guarded in-memory store with deadline-based expiry.
///
/// Expired entries are dropped lazily on access; there is no sweeper.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::new("store mutex poisoned"))
    }
}

impl AuthKeyStore for MemoryStore {
    fn auth_key(&self, key_id: i64) -> Result<Option<[u8; STORED_LEN]>> {
        Ok(self.lock()?.perm.get(&key_id).copied())
    }

    fn put_auth_key(&self, key_id: i64, key: [u8; STORED_LEN]) -> Result<bool> {
        let mut inner = self.lock()?;
        if inner.perm.contains_key(&key_id) {
            return Ok(false);
        }
        inner.perm.insert(key_id, key);
        Ok(true)
    }

    fn temp_auth_key(&self, key_id: i64) -> Result<Option<[u8; STORED_LEN]>> {
        let mut inner = self.lock()?;
        match inner.temp.get(&key_id) {
            Some(entry) if entry.deadline > Instant::now() => Ok(Some(entry.key)),
            Some(_) => {
                inner.temp.remove(&key_id);
                inner.bindings.remove(&key_id);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn put_temp_auth_key(&self, key_id: i64, key: [u8; STORED_LEN], ttl: Duration) -> Result<bool> {
        let now = Instant::now();
        let mut inner = self.lock()?;
        match inner.temp.get(&key_id) {
            Some(entry) if entry.deadline > now => Ok(false),
            _ => {
                inner.temp.insert(key_id, TempEntry { key, deadline: now + ttl });
                inner.bindings.remove(&key_id);
                Ok(true)
            }
        }
    }

    fn bound_auth_key(&self, temp_key_id: i64) -> Result<Option<i64>> {
        let mut inner = self.lock()?;
        match inner.bindings.get(&temp_key_id) {
            Some(binding) if binding.deadline > Instant::now() => Ok(Some(binding.perm_key_id)),
            Some(_) => {
                inner.bindings.remove(&temp_key_id);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn bind_auth_key(&self, temp_key_id: i64, perm_key_id: i64, ttl: Duration) -> Result<bool> {
        let now = Instant::now();
        let mut inner = self.lock()?;
        match inner.bindings.get(&temp_key_id) {
            Some(binding) if binding.deadline > now => Ok(false),
            _ => {
                inner
                    .bindings
                    .insert(temp_key_id, Binding { perm_key_id, deadline: now + ttl });
                Ok(true)
            }
        }
    }

    fn delete_auth_key(&self, key_id: i64) -> Result<bool> {
        let mut inner = self.lock()?;
        let had_perm = inner.perm.remove(&key_id).is_some();
        let had_temp = inner.temp.remove(&key_id).is_some();
        inner.bindings.remove(&key_id);
        inner.bindings.retain(|_, b| b.perm_key_id != key_id);
        Ok(had_perm || had_temp)
    }
}

impl SessionStore for MemoryStore {
    fn put_session(&self, auth_key_id: i64, session_id: i64, ttl: Duration) -> Result<()> {
        self.lock()?
            .sessions
            .insert((auth_key_id, session_id), Instant::now() + ttl);
        Ok(())
    }

    fn refresh_session(&self, auth_key_id: i64, session_id: i64, ttl: Duration) -> Result<bool> {
        let now = Instant::now();
        let mut inner = self.lock()?;
        match inner.sessions.get_mut(&(auth_key_id, session_id)) {
            Some(deadline) if *deadline > now => {
                *deadline = now + ttl;
                Ok(true)
            }
            Some(_) => {
                inner.sessions.remove(&(auth_key_id, session_id));
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn sessions(&self, auth_key_id: i64) -> Result<Vec<i64>> {
        let now = Instant::now();
        let mut inner = self.lock()?;
        inner.sessions.retain(|_, deadline| *deadline > now);
        Ok(inner
            .sessions
            .keys()
            .filter(|(key_id, _)| *key_id == auth_key_id)
            .map(|(_, session_id)| *session_id)
            .collect())
    }

    fn delete_session(&self, auth_key_id: i64, session_id: i64) -> Result<bool> {
        let now = Instant::now();
        let mut inner = self.lock()?;
        match inner.sessions.remove(&(auth_key_id, session_id)) {
            Some(deadline) => Ok(deadline > now),
            None => Ok(false),
        }
    }
}
