//! Encrypted per-connection session state.
//!
//! A [`ServerSession`] owns one auth key and unpacks client frames /
//! packs server responses with it. Also home to the key-lifecycle helpers
//! that ride on an established session: temp→perm binding and key
//! destruction.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use relay_crypto::{AuthKey, DecryptError, DequeBuffer, Side, decrypt_data_v2, encrypt_data_v2};
use relay_tl_types::{Cursor, Deserializable, Identifiable, enums, functions, types};

use crate::store::{AuthKeyStore, StoreError};

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Errors unpacking a client frame.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    Decrypt(DecryptError),
    /// Plaintext shorter than the 32-byte inner header.
    TruncatedHeader { len: usize },
    /// The frame belongs to a different session.
    SessionMismatch { got: i64, expected: i64 },
    /// Client message ids must be divisible by 4.
    InvalidClientMsgId { msg_id: i64 },
    /// Declared body length exceeds the decrypted payload.
    TruncatedBody { declared: usize, available: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decrypt(e) => write!(f, "{e}"),
            Self::TruncatedHeader { len } => write!(f, "inner header truncated at {len} bytes"),
            Self::SessionMismatch { got, expected } => {
                write!(f, "session id {got}, expected {expected}")
            }
            Self::InvalidClientMsgId { msg_id } => {
                write!(f, "client msg_id {msg_id} is not divisible by 4")
            }
            Self::TruncatedBody { declared, available } => {
                write!(f, "declared body length {declared}, only {available} available")
            }
        }
    }
}
impl std::error::Error for Error {}

impl From<DecryptError> for Error {
    fn from(e: DecryptError) -> Self {
        Self::Decrypt(e)
    }
}

// ─── ServerSession ───────────────────────────────────────────────────────────

/// A decrypted client message.
#[derive(Clone, Debug, PartialEq)]
pub struct Incoming {
    /// The client's message id.
    pub msg_id: i64,
    /// The client's sequence number.
    pub seq_no: i32,
    /// The serialized TL body.
    pub body: Vec<u8>,
}

/// Per-connection encrypted session state.
pub struct ServerSession {
    auth_key: AuthKey,
    session_id: i64,
    salt: i64,
    seq_no: i32,
    msg_counter: u32,
    last_msg_id: i64,
}

impl ServerSession {
    /// Open a session over an established auth key.
    pub fn new(auth_key: AuthKey, session_id: i64, salt: i64) -> Self {
        Self { auth_key, session_id, salt, seq_no: 0, msg_counter: 0, last_msg_id: 0 }
    }

    /// The fingerprint of the session's auth key.
    pub fn auth_key_id(&self) -> i64 {
        self.auth_key.fingerprint()
    }

    /// The client-chosen session id.
    pub fn session_id(&self) -> i64 {
        self.session_id
    }

    /// The current server salt.
    pub fn salt(&self) -> i64 {
        self.salt
    }

    /// Allocate a response message id.
    ///
    /// The lower 32 bits derive from Unix time; `msg_id % 4 == 1` marks a
    /// server response. Ids are strictly increasing within the session.
    pub fn next_msg_id(&mut self) -> i64 {
        let unix_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        self.msg_counter = self.msg_counter.wrapping_add(1);
        let mut id = ((unix_secs << 32) | (u64::from(self.msg_counter) << 2) | 1) as i64;
        if id <= self.last_msg_id {
            id = self.last_msg_id + 4;
        }
        self.last_msg_id = id;
        id
    }

    fn next_seq_no(&mut self, content_related: bool) -> i32 {
        if content_related {
            let n = self.seq_no | 1;
            self.seq_no += 2;
            n
        } else {
            self.seq_no & !1
        }
    }

    /// Encrypt `body` into a server frame ready for the wire.
    pub fn pack(&mut self, body: &[u8], content_related: bool) -> DequeBuffer {
        let msg_id = self.next_msg_id();
        let seq_no = self.next_seq_no(content_related);

        let mut buffer = DequeBuffer::with_capacity(32 + body.len() + 32, 24);
        buffer.extend(self.salt.to_le_bytes());
        buffer.extend(self.session_id.to_le_bytes());
        buffer.extend(msg_id.to_le_bytes());
        buffer.extend(seq_no.to_le_bytes());
        buffer.extend((body.len() as u32).to_le_bytes());
        buffer.extend(body.iter().copied());

        encrypt_data_v2(&mut buffer, &self.auth_key, Side::Server);
        buffer
    }

    /// Decrypt and validate a client frame.
    pub fn unpack(&mut self, wire: &mut [u8]) -> Result<Incoming, Error> {
        let plain = decrypt_data_v2(wire, &self.auth_key, Side::Client)?;
        if plain.len() < 32 {
            return Err(Error::TruncatedHeader { len: plain.len() });
        }

        let salt = i64::from_le_bytes(plain[..8].try_into().unwrap());
        let session_id = i64::from_le_bytes(plain[8..16].try_into().unwrap());
        let msg_id = i64::from_le_bytes(plain[16..24].try_into().unwrap());
        let seq_no = i32::from_le_bytes(plain[24..28].try_into().unwrap());
        let declared = u32::from_le_bytes(plain[28..32].try_into().unwrap()) as usize;

        if session_id != self.session_id {
            return Err(Error::SessionMismatch { got: session_id, expected: self.session_id });
        }
        if msg_id % 4 != 0 {
            return Err(Error::InvalidClientMsgId { msg_id });
        }
        if declared > plain.len() - 32 {
            return Err(Error::TruncatedBody { declared, available: plain.len() - 32 });
        }
        if salt != self.salt {
            // Tolerated: salts rotate and the client may lag one period.
            log::debug!("frame carries stale salt {salt}, current {}", self.salt);
        }

        Ok(Incoming { msg_id, seq_no, body: plain[32..32 + declared].to_vec() })
    }
}

// ─── Key lifecycle helpers ───────────────────────────────────────────────────

/// Errors validating an `auth.bindTempAuthKey` call.
#[allow(missing_docs)]
#[derive(Debug)]
pub enum BindError {
    /// No permanent key with the requested id exists.
    UnknownPermKey { perm_auth_key_id: i64 },
    Decrypt(DecryptError),
    /// The decrypted payload is not a well-formed bind message.
    Malformed,
    /// The inner message id must equal the enclosing call's message id.
    MsgIdMismatch { inner: i64, outer: i64 },
    /// An inner field disagrees with the call or the session.
    FieldMismatch { field: &'static str },
    Store(StoreError),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPermKey { perm_auth_key_id } => {
                write!(f, "unknown permanent key {perm_auth_key_id}")
            }
            Self::Decrypt(e) => write!(f, "bind message decryption failed: {e}"),
            Self::Malformed => write!(f, "malformed bind_auth_key_inner payload"),
            Self::MsgIdMismatch { inner, outer } => {
                write!(f, "inner msg_id {inner} does not match call msg_id {outer}")
            }
            Self::FieldMismatch { field } => write!(f, "bind field mismatch: {field}"),
            Self::Store(e) => write!(f, "{e}"),
        }
    }
}
impl std::error::Error for BindError {}

impl From<StoreError> for BindError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// Validate an `auth.bindTempAuthKey` call arriving on a temp-key session
/// and install the binding.
///
/// The `encrypted_message` is a full encrypted frame produced under the
/// *permanent* key, whose body is a `bind_auth_key_inner` echoing the call's
/// parameters. Returns `false` when the temp key is already bound.
pub fn bind_temp_auth_key(
    store: &dyn AuthKeyStore,
    session: &ServerSession,
    request: &functions::auth::BindTempAuthKey,
    req_msg_id: i64,
) -> Result<bool, BindError> {
    let stored = store
        .auth_key(request.perm_auth_key_id)?
        .ok_or(BindError::UnknownPermKey { perm_auth_key_id: request.perm_auth_key_id })?;
    let perm_key = AuthKey::from_stored(request.perm_auth_key_id, stored);

    let mut wire = request.encrypted_message.clone();
    let plain = decrypt_data_v2(&mut wire, &perm_key, Side::Client).map_err(BindError::Decrypt)?;
    if plain.len() < 32 {
        return Err(BindError::Malformed);
    }

    let inner_msg_id = i64::from_le_bytes(plain[16..24].try_into().unwrap());
    if inner_msg_id != req_msg_id {
        return Err(BindError::MsgIdMismatch { inner: inner_msg_id, outer: req_msg_id });
    }
    let declared = u32::from_le_bytes(plain[28..32].try_into().unwrap()) as usize;
    if declared > plain.len() - 32 {
        return Err(BindError::Malformed);
    }

    let body = &plain[32..32 + declared];
    let mut cursor = Cursor::from_slice(body);
    let inner = match u32::deserialize(&mut cursor) {
        Ok(id) if id == types::BindAuthKeyInner::CONSTRUCTOR_ID => {
            types::BindAuthKeyInner::deserialize(&mut cursor).map_err(|_| BindError::Malformed)?
        }
        _ => return Err(BindError::Malformed),
    };

    if inner.nonce != request.nonce {
        return Err(BindError::FieldMismatch { field: "nonce" });
    }
    if inner.perm_auth_key_id != request.perm_auth_key_id {
        return Err(BindError::FieldMismatch { field: "perm_auth_key_id" });
    }
    if inner.temp_auth_key_id != session.auth_key_id() {
        return Err(BindError::FieldMismatch { field: "temp_auth_key_id" });
    }
    if inner.temp_session_id != session.session_id() {
        return Err(BindError::FieldMismatch { field: "temp_session_id" });
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    let ttl = Duration::from_secs((i64::from(request.expires_at) - now).max(0) as u64);

    let bound = store.bind_auth_key(session.auth_key_id(), request.perm_auth_key_id, ttl)?;
    if bound {
        log::debug!(
            "temp key {} bound to perm key {}",
            session.auth_key_id(),
            request.perm_auth_key_id
        );
    }
    Ok(bound)
}

/// Handle `destroy_auth_key` for the session's key.
pub fn destroy_auth_key(
    store: &dyn AuthKeyStore,
    auth_key_id: i64,
) -> Result<enums::DestroyAuthKeyRes, StoreError> {
    Ok(if store.delete_auth_key(auth_key_id)? {
        enums::DestroyAuthKeyRes::Ok
    } else {
        enums::DestroyAuthKeyRes::None
    })
}
