//! Process-wide server configuration.
//!
//! Built once at startup and passed by reference; nothing here is a global.

use std::time::Duration;

use num_bigint::BigUint;
use relay_crypto::rsa;
use relay_tl_types::types;

/// The standard 2048-bit safe prime used for the DH exchange, as a hex string.
///
/// `(p - 1) / 2` is also prime and `p ≡ 2 (mod 3)`, which makes `g = 3` a
/// valid generator.
pub const DEFAULT_DH_PRIME_HEX: &str = "C71CAEB9C6B1C9048E6C522F70F13F73980D40238E3E21C14934D037563D930F48198A0AA7C14058229493D22530F4DBFA336F6E0AC925139543AED44CCE7C3720FD51F69458705AC68CD4FE6B6B13ABDC9746512969328454F18FAF8C595F642477FE96BB2A941D5BCD1D4AC8CC49880708FA9B378E3C4F3A9060BEE67CF9A4A4A695811051907E162753B56B0F6B410DBA74D8A84B2A14B3144E0EF1284754FD17ED950D5965B4B9DD46582DB1178D169C6BC465B0D6FF9CA3928FEF5B9AE4E418FC15E83EBEA0F87FA9FF5EED70050DED2849F47BF959D956850CE929851F0D8115F635B105EE2E4E15D04B2454BF6F4FADF034B10403119CD8E3B92FCC5B";

/// DH group parameters: the generator and the 2048-bit safe prime.
#[derive(Clone, Debug)]
pub struct DhConfig {
    g: i32,
    prime: BigUint,
    prime_bytes: Vec<u8>,
}

impl DhConfig {
    /// Parse a hex-encoded 2048-bit prime with generator `g`.
    ///
    /// Returns `None` when the hex string is malformed or the prime is not
    /// 256 bytes long.
    pub fn new(prime_hex: &str, g: i32) -> Option<Self> {
        let prime = BigUint::parse_bytes(prime_hex.as_bytes(), 16)?;
        let prime_bytes = prime.to_bytes_be();
        if prime_bytes.len() != 256 {
            return None;
        }
        Some(Self { g, prime, prime_bytes })
    }

    /// The generator.
    pub fn g(&self) -> i32 {
        self.g
    }

    /// The prime as a big integer.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// The prime as 256 big-endian bytes, as sent in `server_DH_inner_data`.
    pub fn prime_bytes(&self) -> &[u8] {
        &self.prime_bytes
    }
}

impl Default for DhConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DH_PRIME_HEX, 3).expect("default DH prime is valid")
    }
}

/// Static configuration shared by every connection.
pub struct ServerConfig {
    keys: Vec<rsa::PrivateKey>,
    fingerprints: Vec<i64>,
    /// DH group parameters.
    pub dh: DhConfig,
    /// Delay the caller must apply before answering a first `req_pq_multi`.
    /// Raises the cost of auth-key flooding; retries are served immediately.
    pub first_req_pq_delay: Duration,
    /// How long an unfinished handshake's scratch state stays valid.
    pub handshake_ttl: Duration,
    /// Default lifetime for temporary auth keys when the client's
    /// `expires_in` is zero or negative.
    pub temp_key_ttl: Duration,
    /// Datacenter options advertised to clients.
    pub dc_options: Vec<types::DcOption>,
}

impl ServerConfig {
    /// Build a configuration with default timings and the standard DH group.
    ///
    /// `keys` are the server RSA private keys; their fingerprints are
    /// advertised in `resPQ`.
    pub fn new(keys: Vec<rsa::PrivateKey>) -> Self {
        let fingerprints = keys.iter().map(|k| k.fingerprint()).collect();
        Self {
            keys,
            fingerprints,
            dh: DhConfig::default(),
            first_req_pq_delay: Duration::from_millis(100),
            handshake_ttl: Duration::from_secs(600),
            temp_key_ttl: Duration::from_secs(86_400),
            dc_options: Vec::new(),
        }
    }

    /// The fingerprints of the configured RSA keys, in preference order.
    pub fn fingerprints(&self) -> &[i64] {
        &self.fingerprints
    }

    /// Look up the private key matching a client-selected fingerprint.
    pub fn key_for_fingerprint(&self, fingerprint: i64) -> Option<&rsa::PrivateKey> {
        self.fingerprints
            .iter()
            .position(|&fp| fp == fingerprint)
            .map(|i| &self.keys[i])
    }
}
