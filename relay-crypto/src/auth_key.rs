//! `AuthKey` — the 256-byte shared secret produced by the DH handshake.

use crate::sha1;

/// The number of key bytes the store persists.
///
/// Only the first 192 bytes of the 256-byte DH output are written to the
/// store, per protocol convention; the identifiers below are still computed
/// over the full key.
pub const STORED_LEN: usize = 192;

/// An authorization key (256 bytes) plus pre-computed identifiers.
#[derive(Clone)]
pub struct AuthKey {
    pub(crate) data: [u8; 256],
    pub(crate) aux_hash: [u8; 8],
    pub(crate) key_id: [u8; 8],
}

impl AuthKey {
    /// Construct from raw 256-byte DH output.
    pub fn from_bytes(data: [u8; 256]) -> Self {
        let sha = sha1!(&data);
        let mut aux_hash = [0u8; 8];
        aux_hash.copy_from_slice(&sha[..8]);
        let mut key_id = [0u8; 8];
        key_id.copy_from_slice(&sha[12..20]);
        Self { data, aux_hash, key_id }
    }

    /// Reconstruct a key from its stored truncated form and known id.
    ///
    /// Message-key derivation only reads the first 128 key bytes, so the
    /// truncated form fully supports frame encryption. The auxiliary hash
    /// cannot be recovered from the truncation and is zeroed; it is only
    /// meaningful on keys freshly produced by the DH exchange.
    pub fn from_stored(key_id: i64, stored: [u8; STORED_LEN]) -> Self {
        let mut data = [0u8; 256];
        data[..STORED_LEN].copy_from_slice(&stored);
        Self { data, aux_hash: [0u8; 8], key_id: key_id.to_le_bytes() }
    }

    /// Return the raw 256-byte representation.
    pub fn to_bytes(&self) -> [u8; 256] { self.data }

    /// The 8-byte key identifier (SHA-1(key)[12..20]).
    pub fn key_id(&self) -> [u8; 8] { self.key_id }

    /// The key identifier as the signed 64-bit fingerprint used for store
    /// lookups and the wire `auth_key_id` field.
    pub fn fingerprint(&self) -> i64 { i64::from_le_bytes(self.key_id) }

    /// The auxiliary hash (SHA-1(key)[..8]) mixed into `dh_gen_*` replies.
    pub fn aux_hash(&self) -> [u8; 8] { self.aux_hash }

    /// The truncated form persisted by the auth-key store.
    pub fn stored_bytes(&self) -> [u8; STORED_LEN] {
        self.data[..STORED_LEN].try_into().unwrap()
    }

    /// Compute the new-nonce hash carried by `dh_gen_ok` (`number` = 1),
    /// `dh_gen_retry` (2) and `dh_gen_fail` (3).
    pub fn calc_new_nonce_hash(&self, new_nonce: &[u8; 32], number: u8) -> [u8; 16] {
        let sha = sha1!(new_nonce, [number], self.aux_hash);
        let mut out = [0u8; 16];
        out.copy_from_slice(&sha[4..]);
        out
    }
}

impl std::fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthKey(id={})", self.fingerprint())
    }
}

impl PartialEq for AuthKey {
    fn eq(&self, other: &Self) -> bool { self.key_id == other.key_id }
}
