//! RSA with the MTProto RSA-PAD scheme.
//!
//! The server holds the private keys; [`PrivateKey::decrypt_hashed`] undoes
//! the padding a client applies with [`encrypt_hashed`]. The encrypt
//! direction is also used by the in-process client side of the handshake
//! tests.

use crate::{aes, sha1, sha256};
use num_bigint::BigUint;

/// Errors from [`PrivateKey::decrypt_hashed`].
#[derive(Clone, Debug, PartialEq)]
pub enum DecryptError {
    /// Ciphertext is not exactly 256 bytes long.
    InvalidLength { len: usize },
    /// Ciphertext interpreted as an integer is not below the modulus.
    OutOfRange,
    /// The embedded SHA-256 did not match the decrypted payload.
    DigestMismatch,
}

impl std::fmt::Display for DecryptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength { len } => write!(f, "RSA ciphertext len {len}, expected 256"),
            Self::OutOfRange => write!(f, "RSA ciphertext not below modulus"),
            Self::DigestMismatch => write!(f, "RSA-PAD digest mismatch"),
        }
    }
}
impl std::error::Error for DecryptError {}

/// An RSA public key (n, e).
pub struct Key {
    n: BigUint,
    e: BigUint,
}

impl Key {
    /// Parse decimal `n` and `e` strings.
    pub fn new(n: &str, e: &str) -> Option<Self> {
        Some(Self {
            n: BigUint::parse_bytes(n.as_bytes(), 10)?,
            e: BigUint::parse_bytes(e.as_bytes(), 10)?,
        })
    }

    /// The 64-bit fingerprint clients use to select a server key.
    ///
    /// Low-order 64 bits of `SHA1(bytes(n) || bytes(e))` where each integer
    /// is its trimmed big-endian magnitude in TL `bytes` encoding.
    pub fn fingerprint(&self) -> i64 {
        let mut buf = Vec::new();
        write_tl_bytes(&self.n.to_bytes_be(), &mut buf);
        write_tl_bytes(&self.e.to_bytes_be(), &mut buf);
        let sha = sha1!(&buf);
        i64::from_le_bytes(sha[12..20].try_into().unwrap())
    }
}

/// A server RSA private key (n, e, d).
pub struct PrivateKey {
    n: BigUint,
    e: BigUint,
    d: BigUint,
}

impl PrivateKey {
    /// Parse decimal `n`, `e` and `d` strings.
    pub fn new(n: &str, e: &str, d: &str) -> Option<Self> {
        Some(Self {
            n: BigUint::parse_bytes(n.as_bytes(), 10)?,
            e: BigUint::parse_bytes(e.as_bytes(), 10)?,
            d: BigUint::parse_bytes(d.as_bytes(), 10)?,
        })
    }

    /// The public half of this key.
    pub fn public(&self) -> Key {
        Key { n: self.n.clone(), e: self.e.clone() }
    }

    /// The fingerprint of the public half.
    pub fn fingerprint(&self) -> i64 {
        self.public().fingerprint()
    }

    /// Undo the RSA-PAD scheme applied by [`encrypt_hashed`].
    ///
    /// Returns the 192-byte `data_with_padding` block; the caller parses the
    /// TL payload from its prefix and ignores the random tail.
    pub fn decrypt_hashed(&self, ciphertext: &[u8]) -> Result<Vec<u8>, DecryptError> {
        if ciphertext.len() != 256 {
            return Err(DecryptError::InvalidLength { len: ciphertext.len() });
        }
        let c = BigUint::from_bytes_be(ciphertext);
        if c >= self.n {
            return Err(DecryptError::OutOfRange);
        }

        let m = c.modpow(&self.d, &self.n);
        let mut block = m.to_bytes_be();
        while block.len() < 256 { block.insert(0, 0); }

        // block = temp_key_xor (32) || aes_encrypted (224)
        let mut temp_key: [u8; 32] = block[..32].try_into().unwrap();
        let mut aes_encrypted = block.split_off(32);

        let hash = sha256!(&aes_encrypted);
        for (k, h) in temp_key.iter_mut().zip(hash.iter()) { *k ^= h; }

        aes::ige_decrypt(&mut aes_encrypted, &temp_key, &[0u8; 32]);

        // aes_encrypted = data_pad_reversed (192) || SHA256(temp_key || data_with_padding)
        let got_hash = &aes_encrypted[192..];
        let data_with_padding: Vec<u8> =
            aes_encrypted[..192].iter().copied().rev().collect();

        if got_hash != sha256!(&temp_key, &data_with_padding) {
            return Err(DecryptError::DigestMismatch);
        }
        Ok(data_with_padding)
    }
}

fn write_tl_bytes(data: &[u8], out: &mut Vec<u8>) {
    // TL bytes encoding; magnitudes here are always well below the 254 escape.
    debug_assert!(data.len() <= 253);
    out.push(data.len() as u8);
    out.extend_from_slice(data);
    let padding = (4 - ((1 + data.len()) % 4)) % 4;
    out.extend(std::iter::repeat(0u8).take(padding));
}

fn increment(data: &mut [u8]) {
    let mut i = data.len() - 1;
    loop {
        let (n, overflow) = data[i].overflowing_add(1);
        data[i] = n;
        if overflow {
            i = i.checked_sub(1).unwrap_or(data.len() - 1);
        } else {
            break;
        }
    }
}

/// RSA-encrypt `data` using the MTProto RSA-PAD scheme.
///
/// `random_bytes` must be exactly 224 bytes of secure random data.
/// `data` must be ≤ 144 bytes.
pub fn encrypt_hashed(data: &[u8], key: &Key, random_bytes: &[u8; 224]) -> Vec<u8> {
    assert!(data.len() <= 144, "data too large for RSA-PAD");

    // data_with_padding: 192 bytes
    let mut data_with_padding = Vec::with_capacity(192);
    data_with_padding.extend_from_slice(data);
    data_with_padding.extend_from_slice(&random_bytes[..192 - data.len()]);

    // data_pad_reversed
    let data_pad_reversed: Vec<u8> = data_with_padding.iter().copied().rev().collect();

    let mut temp_key: [u8; 32] = random_bytes[192..].try_into().unwrap();

    let key_aes_encrypted = loop {
        // data_with_hash = data_pad_reversed + SHA256(temp_key + data_with_padding)
        let mut data_with_hash = Vec::with_capacity(224);
        data_with_hash.extend_from_slice(&data_pad_reversed);
        data_with_hash.extend_from_slice(&sha256!(&temp_key, &data_with_padding));

        aes::ige_encrypt(&mut data_with_hash, &temp_key, &[0u8; 32]);

        // temp_key_xor = temp_key XOR SHA256(aes_encrypted)
        let hash = sha256!(&data_with_hash);
        let mut xored = temp_key;
        for (a, b) in xored.iter_mut().zip(hash.iter()) { *a ^= b; }

        let mut candidate = Vec::with_capacity(256);
        candidate.extend_from_slice(&xored);
        candidate.extend_from_slice(&data_with_hash);

        if BigUint::from_bytes_be(&candidate) < key.n {
            break candidate;
        }
        increment(&mut temp_key);
    };

    let payload = BigUint::from_bytes_be(&key_aes_encrypted);
    let encrypted = payload.modpow(&key.e, &key.n);
    let mut block = encrypted.to_bytes_be();
    while block.len() < 256 { block.insert(0, 0); }
    block
}
