//! Sans-IO server side of the MTProto DH key exchange.
//!
//! One [`Handshake`] per connection. Handlers consume decoded TL records and
//! return encoded responses; the caller owns sockets and applies the delay
//! reported by [`ReqPqOutcome::Reply`].
//!
//! # Flow
//!
//! ```text
//! req_pq_multi          → resPQ                (AwaitingPq → AwaitingDhParams)
//! req_DH_params         → server_DH_params_ok  (→ AwaitingClientDhParams)
//! set_client_DH_params  → dh_gen_ok            (→ Completed)
//! ```
//!
//! Mismatched nonces on `req_pq_multi` reset the scratch state and drop the
//! message; every other validation failure is either a typed protocol reply
//! (`server_DH_params_fail`, `dh_gen_fail`, `dh_gen_retry`) or a hard error
//! that terminates the connection.

use std::fmt;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use num_bigint::BigUint;
use num_traits::One;
use relay_crypto::{AuthKey, aes, generate_key_data_from_nonce, prime, rsa};
use relay_tl_types::{Cursor, Deserializable, Serializable, enums, functions, types};
use sha1::{Digest, Sha1};

use crate::config::ServerConfig;
use crate::store::{AuthKeyStore, StoreError};

// ─── Error ────────────────────────────────────────────────────────────────────

/// Hard failures during the key exchange. Any of these terminates the
/// connection; recoverable conditions are expressed as protocol replies
/// instead.
#[allow(missing_docs)]
#[derive(Debug)]
pub enum Error {
    UnexpectedState { expected: &'static str },
    InvalidNonce { got: [u8; 16], expected: [u8; 16] },
    InvalidServerNonce { got: [u8; 16], expected: [u8; 16] },
    InvalidPqEcho,
    UnknownFingerprint { fingerprint: i64 },
    Rsa(rsa::DecryptError),
    InvalidInnerData { error: relay_tl_types::deserialize::Error },
    EncryptedDataNotPadded { len: usize },
    InvalidDataHash { got: [u8; 20], expected: [u8; 20] },
    Store(StoreError),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedState { expected } => {
                write!(f, "request arrived in the wrong state (expected {expected})")
            }
            Self::InvalidNonce { got, expected } => {
                write!(f, "nonce mismatch: got {got:?}, expected {expected:?}")
            }
            Self::InvalidServerNonce { got, expected } => {
                write!(f, "server_nonce mismatch: got {got:?}, expected {expected:?}")
            }
            Self::InvalidPqEcho => write!(f, "p/q echo does not match the issued factors"),
            Self::UnknownFingerprint { fingerprint } => {
                write!(f, "no private key for fingerprint {fingerprint}")
            }
            Self::Rsa(e) => write!(f, "RSA decryption failed: {e}"),
            Self::InvalidInnerData { error } => {
                write!(f, "inner data deserialization error: {error}")
            }
            Self::EncryptedDataNotPadded { len } => {
                write!(f, "encrypted data len {len} is not 16-byte aligned")
            }
            Self::InvalidDataHash { got, expected } => {
                write!(f, "data hash mismatch: got {got:?}, expected {expected:?}")
            }
            Self::Store(e) => write!(f, "{e}"),
        }
    }
}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

// ─── State ───────────────────────────────────────────────────────────────────

struct PqScratch {
    nonce: [u8; 16],
    server_nonce: [u8; 16],
    p: u32,
    q: u32,
    response: types::ResPq,
}

struct DhScratch {
    nonce: [u8; 16],
    server_nonce: [u8; 16],
    new_nonce: [u8; 32],
    a: BigUint,
    temp_key: [u8; 32],
    temp_iv: [u8; 32],
    /// Lifetime requested via `p_q_inner_data_temp`; `None` for permanent keys.
    expires_in: Option<i32>,
}

enum State {
    AwaitingPq,
    AwaitingDhParams(PqScratch),
    AwaitingClientDhParams(DhScratch),
    Completed { auth_key: AuthKey },
    Failed,
}

impl State {
    fn nonce(&self) -> Option<&[u8; 16]> {
        match self {
            State::AwaitingDhParams(s) => Some(&s.nonce),
            State::AwaitingClientDhParams(s) => Some(&s.nonce),
            _ => None,
        }
    }
}

/// Outcome of [`Handshake::handle_req_pq`].
pub enum ReqPqOutcome {
    /// Send `response` after waiting `delay`. The delay is zero for retries.
    Reply {
        /// The `resPQ` answer.
        response: enums::ResPq,
        /// Anti-brute-force delay the caller applies before writing.
        delay: Duration,
    },
    /// Silently discard the request; no bytes go out.
    Drop,
}

/// Per-connection server side of the key exchange.
pub struct Handshake<'a> {
    config: &'a ServerConfig,
    state: State,
    deadline: Instant,
}

impl<'a> Handshake<'a> {
    /// Start a fresh handshake.
    pub fn new(config: &'a ServerConfig) -> Self {
        Self {
            config,
            state: State::AwaitingPq,
            deadline: Instant::now() + config.handshake_ttl,
        }
    }

    /// The negotiated key, once the exchange has completed.
    pub fn auth_key(&self) -> Option<&AuthKey> {
        match &self.state {
            State::Completed { auth_key } => Some(auth_key),
            _ => None,
        }
    }

    /// Drop scratch state whose deadline has passed. An expired handshake
    /// behaves as if it never started.
    fn expire_stale(&mut self) {
        if Instant::now() > self.deadline {
            if self.state.nonce().is_some() {
                log::debug!("handshake scratch expired, resetting");
            }
            self.state = State::AwaitingPq;
        }
    }

    // ─── req_pq_multi ────────────────────────────────────────────────────────

    /// Handle `req_pq_multi`.
    ///
    /// First contact issues a fresh PQ challenge and reports the configured
    /// delay. A retry with the same nonce is answered identically and
    /// immediately. A different nonce while a handshake is in flight resets
    /// the scratch state and drops the message.
    pub fn handle_req_pq(&mut self, request: &functions::ReqPqMulti) -> ReqPqOutcome {
        self.expire_stale();

        match self.state.nonce().copied() {
            Some(nonce) if nonce == request.nonce => {
                if let State::AwaitingDhParams(scratch) = &self.state {
                    log::debug!("req_pq retry, serving cached resPQ");
                    return ReqPqOutcome::Reply {
                        response: scratch.response.clone().into(),
                        delay: Duration::ZERO,
                    };
                }
                // Same nonce but the exchange has already moved past resPQ:
                // the client is replaying out of order.
                log::warn!("req_pq replay after DH params, dropping");
                self.state = State::AwaitingPq;
                return ReqPqOutcome::Drop;
            }
            Some(_) => {
                log::warn!("req_pq nonce mismatch against in-flight handshake, dropping");
                self.state = State::AwaitingPq;
                return ReqPqOutcome::Drop;
            }
            None => {}
        }

        let mut server_nonce = [0u8; 16];
        prime::random_bytes(&mut server_nonce);

        let (mut p, mut q) = (prime::random_prime_u32(), prime::random_prime_u32());
        while p == q {
            q = prime::random_prime_u32();
        }
        if p > q {
            std::mem::swap(&mut p, &mut q);
        }
        let pq = u64::from(p) * u64::from(q);

        let response = types::ResPq {
            nonce: request.nonce,
            server_nonce,
            pq: pq.to_be_bytes().to_vec(),
            server_public_key_fingerprints: self.config.fingerprints().to_vec(),
        };

        self.deadline = Instant::now() + self.config.handshake_ttl;
        self.state = State::AwaitingDhParams(PqScratch {
            nonce: request.nonce,
            server_nonce,
            p,
            q,
            response: response.clone(),
        });

        ReqPqOutcome::Reply {
            response: response.into(),
            delay: self.config.first_req_pq_delay,
        }
    }

    // ─── req_DH_params ───────────────────────────────────────────────────────

    /// Handle `req_DH_params`.
    ///
    /// Validation failures after `new_nonce` is extracted answer
    /// `server_DH_params_fail`; anything earlier is a hard error because no
    /// shared secret exists yet to authenticate a failure reply.
    pub fn handle_req_dh_params(
        &mut self,
        request: &functions::ReqDhParams,
    ) -> Result<enums::ServerDhParams, Error> {
        self.expire_stale();

        let scratch = match &self.state {
            State::AwaitingDhParams(s) => s,
            _ => return Err(Error::UnexpectedState { expected: "req_DH_params" }),
        };

        check_nonce(&request.nonce, &scratch.nonce)?;
        check_server_nonce(&request.server_nonce, &scratch.server_nonce)?;
        if be_to_u64(&request.p) != Some(u64::from(scratch.p))
            || be_to_u64(&request.q) != Some(u64::from(scratch.q))
        {
            return Err(Error::InvalidPqEcho);
        }

        let key = self
            .config
            .key_for_fingerprint(request.public_key_fingerprint)
            .ok_or(Error::UnknownFingerprint { fingerprint: request.public_key_fingerprint })?;

        let padded = key.decrypt_hashed(&request.encrypted_data).map_err(Error::Rsa)?;
        let mut cursor = Cursor::from_slice(&padded);
        let inner = enums::PQInnerData::deserialize(&mut cursor)
            .map_err(|error| Error::InvalidInnerData { error })?;

        let (inner_pq, inner_nonce, inner_server_nonce, new_nonce, expires_in) = match inner {
            enums::PQInnerData::PQInnerData(x) => (x.pq, x.nonce, x.server_nonce, x.new_nonce, None),
            enums::PQInnerData::Dc(x) => (x.pq, x.nonce, x.server_nonce, x.new_nonce, None),
            enums::PQInnerData::Temp(x) => {
                (x.pq, x.nonce, x.server_nonce, x.new_nonce, Some(x.expires_in))
            }
            enums::PQInnerData::TempDc(x) => {
                (x.pq, x.nonce, x.server_nonce, x.new_nonce, Some(x.expires_in))
            }
        };

        // From here on new_nonce is known, so failures get a typed reply.
        let pq = u64::from(scratch.p) * u64::from(scratch.q);
        if inner_nonce != scratch.nonce
            || inner_server_nonce != scratch.server_nonce
            || be_to_u64(&inner_pq) != Some(pq)
        {
            log::warn!("inner PQ data does not match the challenge, failing DH params");
            let response = types::ServerDhParamsFail {
                nonce: scratch.nonce,
                server_nonce: scratch.server_nonce,
                new_nonce_hash: new_nonce_hash(&new_nonce),
            };
            self.state = State::Failed;
            return Ok(response.into());
        }

        let nonce = scratch.nonce;
        let server_nonce = scratch.server_nonce;
        let (temp_key, temp_iv) = generate_key_data_from_nonce(&server_nonce, &new_nonce);

        let dh_prime = self.config.dh.prime();
        let g = BigUint::from(self.config.dh.g() as u32);
        let (a, g_a) = generate_dh_half(&g, dh_prime);

        let server_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i32;

        let inner: enums::ServerDhInnerData = types::ServerDhInnerData {
            nonce,
            server_nonce,
            g: self.config.dh.g(),
            dh_prime: self.config.dh.prime_bytes().to_vec(),
            g_a: g_a.to_bytes_be(),
            server_time,
        }
        .into();
        let inner_bytes = inner.to_bytes();

        // encrypted_answer = IGE(SHA1(inner) || inner || padding)
        let digest: [u8; 20] = {
            let mut sha = Sha1::new();
            sha.update(&inner_bytes);
            sha.finalize().into()
        };
        let pad_len = (16 - ((20 + inner_bytes.len()) % 16)) % 16;
        let mut padding = [0u8; 16];
        prime::random_bytes(&mut padding[..pad_len]);

        let mut answer = Vec::with_capacity(20 + inner_bytes.len() + pad_len);
        answer.extend_from_slice(&digest);
        answer.extend_from_slice(&inner_bytes);
        answer.extend_from_slice(&padding[..pad_len]);
        aes::ige_encrypt(&mut answer, &temp_key, &temp_iv);

        self.state = State::AwaitingClientDhParams(DhScratch {
            nonce,
            server_nonce,
            new_nonce,
            a,
            temp_key,
            temp_iv,
            expires_in,
        });

        Ok(types::ServerDhParamsOk {
            nonce,
            server_nonce,
            encrypted_answer: answer,
        }
        .into())
    }

    // ─── set_client_DH_params ────────────────────────────────────────────────

    /// Handle `set_client_DH_params`.
    ///
    /// A fresh key persists atomically and answers `dh_gen_ok`; a key id
    /// already present answers `dh_gen_retry` and leaves the scratch state in
    /// place so the client can retry with a new `b`. A `g_b` outside the
    /// allowed range answers `dh_gen_fail` and terminates the exchange.
    pub fn handle_set_client_dh_params(
        &mut self,
        store: &dyn AuthKeyStore,
        request: &functions::SetClientDhParams,
    ) -> Result<enums::SetClientDhParamsAnswer, Error> {
        self.expire_stale();

        let scratch = match &self.state {
            State::AwaitingClientDhParams(s) => s,
            _ => return Err(Error::UnexpectedState { expected: "set_client_DH_params" }),
        };

        check_nonce(&request.nonce, &scratch.nonce)?;
        check_server_nonce(&request.server_nonce, &scratch.server_nonce)?;

        if request.encrypted_data.len() < 24 || request.encrypted_data.len() % 16 != 0 {
            return Err(Error::EncryptedDataNotPadded { len: request.encrypted_data.len() });
        }

        let mut plain = request.encrypted_data.clone();
        aes::ige_decrypt(&mut plain, &scratch.temp_key, &scratch.temp_iv);

        let got_hash: [u8; 20] = plain[..20].try_into().unwrap();
        let mut cursor = Cursor::from_slice(&plain[20..]);
        let inner = match enums::ClientDhInnerData::deserialize(&mut cursor) {
            Ok(enums::ClientDhInnerData::ClientDhInnerData(x)) => x,
            Err(error) => return Err(Error::InvalidInnerData { error }),
        };
        let expected_hash: [u8; 20] = {
            let mut sha = Sha1::new();
            sha.update(&plain[20..20 + cursor.pos()]);
            sha.finalize().into()
        };
        if got_hash != expected_hash {
            return Err(Error::InvalidDataHash { got: got_hash, expected: expected_hash });
        }

        check_nonce(&inner.nonce, &scratch.nonce)?;
        check_server_nonce(&inner.server_nonce, &scratch.server_nonce)?;

        let nonce = scratch.nonce;
        let server_nonce = scratch.server_nonce;
        let new_nonce = scratch.new_nonce;

        let dh_prime = self.config.dh.prime();
        let g_b = BigUint::from_bytes_be(&inner.g_b);
        // auth_key is computable even for an invalid g_b; dh_gen_fail carries
        // its aux hash so the client can authenticate the rejection.
        let g_ab = g_b.modpow(&scratch.a, dh_prime);
        let auth_key = AuthKey::from_bytes(pad_to_256(&g_ab));

        let one = BigUint::one();
        let safety = BigUint::one() << (2048 - 64);
        let in_range = |v: &BigUint, lo: &BigUint, hi: &BigUint| lo < v && v < hi;
        if !in_range(&g_b, &one, &(dh_prime - &one))
            || !in_range(&g_b, &safety, &(dh_prime - &safety))
        {
            log::warn!("client g_b outside the allowed range, failing key exchange");
            self.state = State::Failed;
            return Ok(types::DhGenFail {
                nonce,
                server_nonce,
                new_nonce_hash3: auth_key.calc_new_nonce_hash(&new_nonce, 3),
            }
            .into());
        }

        let ttl = scratch
            .expires_in
            .map(|secs| {
                if secs > 0 {
                    Duration::from_secs(secs as u64)
                } else {
                    self.config.temp_key_ttl
                }
            });

        let fresh = match ttl {
            Some(ttl) => {
                store.put_temp_auth_key(auth_key.fingerprint(), auth_key.stored_bytes(), ttl)?
            }
            None => store.put_auth_key(auth_key.fingerprint(), auth_key.stored_bytes())?,
        };

        if fresh {
            log::debug!("auth key {} established", auth_key.fingerprint());
            let response = types::DhGenOk {
                nonce,
                server_nonce,
                new_nonce_hash1: auth_key.calc_new_nonce_hash(&new_nonce, 1),
            };
            self.state = State::Completed { auth_key };
            Ok(response.into())
        } else {
            log::debug!("auth key {} already present, requesting retry", auth_key.fingerprint());
            Ok(types::DhGenRetry {
                nonce,
                server_nonce,
                new_nonce_hash2: auth_key.calc_new_nonce_hash(&new_nonce, 2),
            }
            .into())
        }
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Random exponent `a` and `g_a = g^a mod p`, regenerated until `g_a` falls
/// inside the exclusive `2^(2048-64)` safety band.
fn generate_dh_half(g: &BigUint, dh_prime: &BigUint) -> (BigUint, BigUint) {
    let safety = BigUint::one() << (2048 - 64);
    let upper = dh_prime - &safety;
    loop {
        let mut buf = [0u8; 256];
        prime::random_bytes(&mut buf);
        let a = BigUint::from_bytes_be(&buf);
        let g_a = g.modpow(&a, dh_prime);
        if safety < g_a && g_a < upper {
            return (a, g_a);
        }
    }
}

fn pad_to_256(value: &BigUint) -> [u8; 256] {
    let bytes = value.to_bytes_be();
    let mut out = [0u8; 256];
    out[256 - bytes.len()..].copy_from_slice(&bytes);
    out
}

fn new_nonce_hash(new_nonce: &[u8; 32]) -> [u8; 16] {
    let digest: [u8; 20] = {
        let mut sha = Sha1::new();
        sha.update(new_nonce);
        sha.finalize().into()
    };
    digest[4..].try_into().unwrap()
}

/// Big-endian bytes to `u64`; `None` when longer than 8 bytes after trimming.
fn be_to_u64(bytes: &[u8]) -> Option<u64> {
    let trimmed = match bytes.iter().position(|&b| b != 0) {
        Some(i) => &bytes[i..],
        None => return Some(0),
    };
    if trimmed.len() > 8 {
        return None;
    }
    let mut buf = [0u8; 8];
    buf[8 - trimmed.len()..].copy_from_slice(trimmed);
    Some(u64::from_be_bytes(buf))
}

fn check_nonce(got: &[u8; 16], expected: &[u8; 16]) -> Result<(), Error> {
    if got == expected {
        Ok(())
    } else {
        Err(Error::InvalidNonce { got: *got, expected: *expected })
    }
}

fn check_server_nonce(got: &[u8; 16], expected: &[u8; 16]) -> Result<(), Error> {
    if got == expected {
        Ok(())
    } else {
        Err(Error::InvalidServerNonce { got: *got, expected: *expected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn be_to_u64_trims_and_bounds() {
        assert_eq!(be_to_u64(&[]), Some(0));
        assert_eq!(be_to_u64(&[0, 0, 1, 0]), Some(256));
        assert_eq!(be_to_u64(&[0xff; 8]), Some(u64::MAX));
        assert_eq!(be_to_u64(&[1, 0, 0, 0, 0, 0, 0, 0, 0]), None);
        assert_eq!(be_to_u64(&[0, 1, 0, 0, 0, 0, 0, 0, 0]), Some(1 << 56));
    }

    #[test]
    fn pad_to_256_left_pads() {
        let v = BigUint::from(0x0102u32);
        let padded = pad_to_256(&v);
        assert_eq!(padded[254], 1);
        assert_eq!(padded[255], 2);
        assert!(padded[..254].iter().all(|&b| b == 0));
    }

    #[test]
    fn new_nonce_hash_drops_first_four_bytes() {
        let nn = [5u8; 32];
        let digest: [u8; 20] = {
            let mut sha = Sha1::new();
            sha.update(nn);
            sha.finalize().into()
        };
        assert_eq!(new_nonce_hash(&nn), digest[4..]);
    }
}
