//! # relay — server-side MTProto protocol core
//!
//! `relay` wires together three focused sub-crates:
//!
//! | Sub-crate        | Role                                                |
//! |------------------|-----------------------------------------------------|
//! | `relay-tl-types` | TL binary codec and the service schema subset       |
//! | `relay-crypto`   | AES-IGE, RSA-PAD, SHA, DH and frame encryption      |
//! | `relay-mtproto`  | Key exchange, sessions, auth-key store, dispatch    |
//!
//! ## Quick start: answering a key exchange
//!
//! ```rust,no_run
//! use relay::mtproto::{Handshake, MemoryStore, ServerConfig};
//! use relay::tl::{functions, Deserializable};
//!
//! let config = ServerConfig::new(load_private_keys());
//! let store = MemoryStore::new();
//!
//! let mut handshake = Handshake::new(&config);
//! // let request = functions::ReqPqMulti::from_bytes(&body)?;
//! // match handshake.handle_req_pq(&request) { … }
//! # fn load_private_keys() -> Vec<relay::crypto::rsa::PrivateKey> { Vec::new() }
//! ```
//!
//! The crates are transport-agnostic: sockets, timers and the delay reported
//! by `handle_req_pq` belong to the caller.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Re-export of [`relay_tl_types`] — TL codec, constructors, functions and enums.
pub use relay_tl_types as tl;

/// Re-export of [`relay_mtproto`] — handshake, session, store and dispatch.
pub use relay_mtproto as mtproto;

/// Re-export of [`relay_crypto`] — AES-IGE, SHA, RSA, primes, AuthKey.
pub use relay_crypto as crypto;
