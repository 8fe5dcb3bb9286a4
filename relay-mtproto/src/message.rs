//! Plaintext message framing.
//!
//! Before a key exchange completes, both sides speak the unencrypted
//! envelope:
//!
//! ```text
//! auth_key_id:long  (always 0)
//! message_id:long
//! message_data_length:int
//! message_data:bytes
//! ```

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Errors parsing a plaintext frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Frame shorter than the 20-byte header.
    Truncated { len: usize },
    /// `auth_key_id` was not zero; the frame belongs on an encrypted session.
    NotPlaintext { auth_key_id: i64 },
    /// The declared body length disagrees with the frame size.
    LengthMismatch { declared: usize, available: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { len } => write!(f, "plaintext frame of {len} bytes is too short"),
            Self::NotPlaintext { auth_key_id } => {
                write!(f, "frame carries auth_key_id {auth_key_id}, expected 0")
            }
            Self::LengthMismatch { declared, available } => {
                write!(f, "declared body length {declared}, but {available} bytes follow")
            }
        }
    }
}
impl std::error::Error for Error {}

static LAST_MSG_ID: AtomicI64 = AtomicI64::new(0);

/// An unencrypted handshake message.
#[derive(Clone, Debug, PartialEq)]
pub struct PlainMessage {
    /// The 64-bit message identifier.
    pub msg_id: i64,
    /// The serialized TL body (constructor ID + fields).
    pub body: Vec<u8>,
}

impl PlainMessage {
    /// Frame `body` with a fresh server-side message id.
    ///
    /// Server message ids satisfy `msg_id % 4 == 1` (a direct response would
    /// use 1; 3 marks server-initiated messages, which the handshake never
    /// sends). Ids are strictly increasing even within one second.
    pub fn new(body: Vec<u8>) -> Self {
        let unix_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let candidate = ((unix_secs << 32) | 1) as i64;

        // Bump past the last issued id when the clock hasn't moved.
        let mut last = LAST_MSG_ID.load(Ordering::Relaxed);
        loop {
            let id = if candidate > last { candidate } else { last + 4 };
            match LAST_MSG_ID.compare_exchange_weak(last, id, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return Self { msg_id: id, body },
                Err(observed) => last = observed,
            }
        }
    }

    /// Parse a plaintext frame.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < 20 {
            return Err(Error::Truncated { len: bytes.len() });
        }
        let auth_key_id = i64::from_le_bytes(bytes[..8].try_into().unwrap());
        if auth_key_id != 0 {
            return Err(Error::NotPlaintext { auth_key_id });
        }
        let msg_id = i64::from_le_bytes(bytes[8..16].try_into().unwrap());
        let declared = u32::from_le_bytes(bytes[16..20].try_into().unwrap()) as usize;
        let available = bytes.len() - 20;
        if declared != available {
            return Err(Error::LengthMismatch { declared, available });
        }
        Ok(Self { msg_id, body: bytes[20..].to_vec() })
    }

    /// Serialize into the plaintext wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(8 + 8 + 4 + self.body.len());
        buf.extend(0i64.to_le_bytes());
        buf.extend(self.msg_id.to_le_bytes());
        buf.extend((self.body.len() as u32).to_le_bytes());
        buf.extend(&self.body);
        buf
    }
}
