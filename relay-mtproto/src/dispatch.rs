//! Constructor-id RPC routing and the `rpc_result` envelope.
//!
//! The dispatcher owns a table from constructor id to handler. A handler
//! parses its own arguments from the cursor and returns either a serialized
//! result object or a typed `rpc_error`; either way the reply to the client
//! is an `rpc_result` addressed to the request's message id.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use relay_tl_types::{Deserializable, Identifiable, Serializable, deserialize, enums, functions, types};

use crate::session;
use crate::store::{AuthKeyStore, SessionStore};

/// Per-call context handed to handlers.
#[derive(Clone, Copy, Debug)]
pub struct CallContext {
    /// Fingerprint of the auth key the call arrived under.
    pub auth_key_id: i64,
    /// The session the call belongs to.
    pub session_id: i64,
    /// The request's message id; echoed as `req_msg_id`.
    pub msg_id: i64,
}

/// A registered RPC implementation.
///
/// `args` is positioned immediately after the constructor id. On success the
/// handler returns the serialized result object; on failure a typed
/// `rpc_error`, which the dispatcher nests inside the result envelope rather
/// than surfacing as a transport fault.
pub trait RpcHandler: Send + Sync {
    /// Execute the call.
    fn call(
        &self,
        ctx: &mut CallContext,
        args: deserialize::Buffer,
    ) -> Result<Vec<u8>, types::RpcError>;
}

/// Fatal dispatch failures. Unlike handler errors these carry no `rpc_result`
/// reply; the connection is dropped.
#[derive(Clone, Debug, PartialEq)]
pub enum DispatchError {
    /// No handler is registered for the decoded constructor id.
    UnknownConstructor {
        /// The offending id.
        id: u32,
    },
    /// The body ended before a constructor id could be read.
    Deserialize(deserialize::Error),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownConstructor { id } => {
                write!(f, "no handler for constructor {id:#010x}")
            }
            Self::Deserialize(e) => write!(f, "{e}"),
        }
    }
}
impl std::error::Error for DispatchError {}

impl From<deserialize::Error> for DispatchError {
    fn from(e: deserialize::Error) -> Self {
        Self::Deserialize(e)
    }
}

/// Routes calls by constructor id.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<u32, Box<dyn RpcHandler>>,
}

impl Dispatcher {
    /// An empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `constructor_id`, replacing any previous one.
    pub fn register(&mut self, constructor_id: u32, handler: Box<dyn RpcHandler>) {
        self.handlers.insert(constructor_id, handler);
    }

    /// Decode and execute one call, returning the serialized `rpc_result`.
    pub fn dispatch(&self, mut ctx: CallContext, body: &[u8]) -> Result<Vec<u8>, DispatchError> {
        let mut cursor = relay_tl_types::Cursor::from_slice(body);
        let id = u32::deserialize(&mut cursor)?;
        let handler = self
            .handlers
            .get(&id)
            .ok_or(DispatchError::UnknownConstructor { id })?;

        let result = match handler.call(&mut ctx, &mut cursor) {
            Ok(payload) => payload,
            Err(error) => {
                log::debug!(
                    "rpc {:#010x} failed: {} {}",
                    id,
                    error.error_code,
                    error.error_message
                );
                enums::RpcError::from(error).to_bytes()
            }
        };

        Ok(enums::RpcResult::from(types::RpcResult { req_msg_id: ctx.msg_id, result }).to_bytes())
    }
}

// ─── Built-in service handlers ───────────────────────────────────────────────

/// `ping`: replies `pong` and extends the calling session's lifetime.
pub struct PingHandler {
    store: Arc<dyn SessionStore>,
    session_ttl: Duration,
}

impl PingHandler {
    /// `session_ttl` is granted anew on every ping.
    pub fn new(store: Arc<dyn SessionStore>, session_ttl: Duration) -> Self {
        Self { store, session_ttl }
    }
}

impl RpcHandler for PingHandler {
    fn call(
        &self,
        ctx: &mut CallContext,
        args: deserialize::Buffer,
    ) -> Result<Vec<u8>, types::RpcError> {
        let ping = functions::Ping::deserialize(args).map_err(|_| types::RpcError {
            error_code: 400,
            error_message: "INPUT_FETCH_ERROR".into(),
        })?;

        match self.store.refresh_session(ctx.auth_key_id, ctx.session_id, self.session_ttl) {
            Ok(true) => {}
            Ok(false) => log::debug!(
                "ping for unknown session {} under key {}",
                ctx.session_id,
                ctx.auth_key_id
            ),
            Err(e) => {
                log::warn!("session refresh failed: {e}");
                return Err(types::RpcError {
                    error_code: 500,
                    error_message: "INTERNAL".into(),
                });
            }
        }

        Ok(enums::Pong::from(types::Pong { msg_id: ctx.msg_id, ping_id: ping.ping_id }).to_bytes())
    }
}

/// `destroy_auth_key`: removes the calling key and reports the outcome.
pub struct DestroyAuthKeyHandler {
    store: Arc<dyn AuthKeyStore>,
}

impl DestroyAuthKeyHandler {
    /// Handler over the shared auth-key store.
    pub fn new(store: Arc<dyn AuthKeyStore>) -> Self {
        Self { store }
    }
}

impl RpcHandler for DestroyAuthKeyHandler {
    fn call(
        &self,
        ctx: &mut CallContext,
        args: deserialize::Buffer,
    ) -> Result<Vec<u8>, types::RpcError> {
        let _ = functions::DestroyAuthKey::deserialize(args);
        let res = session::destroy_auth_key(self.store.as_ref(), ctx.auth_key_id).map_err(|e| {
            log::warn!("destroy_auth_key failed: {e}");
            types::RpcError { error_code: 500, error_message: "INTERNAL".into() }
        })?;
        Ok(res.to_bytes())
    }
}

/// Register the built-in service handlers (`ping`, `destroy_auth_key`).
pub fn register_service_handlers(
    dispatcher: &mut Dispatcher,
    auth_keys: Arc<dyn AuthKeyStore>,
    sessions: Arc<dyn SessionStore>,
    session_ttl: Duration,
) {
    dispatcher.register(
        functions::Ping::CONSTRUCTOR_ID,
        Box::new(PingHandler::new(sessions, session_ttl)),
    );
    dispatcher.register(
        functions::DestroyAuthKey::CONSTRUCTOR_ID,
        Box::new(DestroyAuthKeyHandler::new(auth_keys)),
    );
}
