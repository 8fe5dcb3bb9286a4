//! Server-side MTProto core.
//!
//! This crate handles:
//! * The DH key-exchange state machine (`req_pq_multi` → `set_client_DH_params`)
//! * Plaintext and encrypted message framing
//! * Auth-key and session storage interfaces (plus an in-memory reference store)
//! * RPC dispatch: constructor-id routing and `rpc_result` envelopes
//!
//! It is intentionally transport-agnostic: bring your own TCP/WebSocket. All
//! handlers consume decoded TL records and return encoded responses; the
//! caller owns sockets, timers and sleeping.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod dispatch;
pub mod handshake;
pub mod message;
pub mod session;
pub mod store;

pub use config::{DhConfig, ServerConfig};
pub use dispatch::Dispatcher;
pub use handshake::Handshake;
pub use message::PlainMessage;
pub use session::ServerSession;
pub use store::{AuthKeyStore, MemoryStore, SessionStore, StoreError};
