//! Dispatcher envelope behavior and the built-in service handlers.

use std::sync::Arc;
use std::time::Duration;

use relay_mtproto::dispatch::{
    CallContext, DispatchError, Dispatcher, RpcHandler, register_service_handlers,
};
use relay_mtproto::store::{AuthKeyStore, MemoryStore, SessionStore};
use relay_tl_types::{
    Deserializable, Identifiable, Serializable, deserialize, enums, functions, types,
};

fn ctx() -> CallContext {
    CallContext { auth_key_id: 0x00aa00bb00cc00dd, session_id: 0x11, msg_id: 0x1000 }
}

fn parse_rpc_result(wire: &[u8]) -> types::RpcResult {
    match enums::RpcResult::from_bytes(wire).unwrap() {
        enums::RpcResult::RpcResult(x) => x,
    }
}

/// Echoes its raw argument bytes back as the result object.
struct EchoHandler;

impl RpcHandler for EchoHandler {
    fn call(
        &self,
        _ctx: &mut CallContext,
        args: deserialize::Buffer,
    ) -> Result<Vec<u8>, types::RpcError> {
        let mut out = Vec::new();
        args.read_to_end(&mut out);
        Ok(out)
    }
}

/// Always fails with FLOOD_WAIT.
struct FloodHandler;

impl RpcHandler for FloodHandler {
    fn call(
        &self,
        _ctx: &mut CallContext,
        _args: deserialize::Buffer,
    ) -> Result<Vec<u8>, types::RpcError> {
        Err(types::RpcError { error_code: 420, error_message: "FLOOD_WAIT_30".into() })
    }
}

#[test]
fn result_envelope_echoes_req_msg_id() {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(0xdeadbeef, Box::new(EchoHandler));

    let mut body = 0xdeadbeef_u32.to_le_bytes().to_vec();
    body.extend_from_slice(&[1, 2, 3, 4]);

    let reply = dispatcher.dispatch(ctx(), &body).unwrap();
    let result = parse_rpc_result(&reply);
    assert_eq!(result.req_msg_id, 0x1000);
    assert_eq!(result.result, vec![1, 2, 3, 4]);
}

#[test]
fn handler_errors_nest_as_rpc_error_objects() {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(0x1111, Box::new(FloodHandler));

    let reply = dispatcher.dispatch(ctx(), &0x1111_u32.to_le_bytes()).unwrap();
    let result = parse_rpc_result(&reply);
    assert_eq!(result.req_msg_id, 0x1000);

    match enums::RpcError::from_bytes(&result.result).unwrap() {
        enums::RpcError::RpcError(error) => {
            assert_eq!(error.error_code, 420);
            assert_eq!(error.error_message, "FLOOD_WAIT_30");
        }
    }
}

#[test]
fn unknown_constructor_is_fatal() {
    let dispatcher = Dispatcher::new();
    assert_eq!(
        dispatcher.dispatch(ctx(), &0x0bad0bad_u32.to_le_bytes()),
        Err(DispatchError::UnknownConstructor { id: 0x0bad0bad })
    );

    // A truncated tag is equally fatal.
    assert!(matches!(
        dispatcher.dispatch(ctx(), &[1, 2]),
        Err(DispatchError::Deserialize(_))
    ));
}

#[test]
fn ping_replies_pong_and_refreshes_the_session() {
    let store = Arc::new(MemoryStore::new());
    let mut dispatcher = Dispatcher::new();
    register_service_handlers(
        &mut dispatcher,
        store.clone(),
        store.clone(),
        Duration::from_secs(60),
    );

    let ctx = ctx();
    store
        .put_session(ctx.auth_key_id, ctx.session_id, Duration::from_millis(30))
        .unwrap();

    let body = functions::Ping { ping_id: 777 }.to_bytes();
    let reply = dispatcher.dispatch(ctx, &body).unwrap();
    let result = parse_rpc_result(&reply);

    match enums::Pong::from_bytes(&result.result).unwrap() {
        enums::Pong::Pong(pong) => {
            assert_eq!(pong.ping_id, 777);
            assert_eq!(pong.msg_id, ctx.msg_id);
        }
    }

    // The ping pushed the session deadline well past the original 30ms.
    std::thread::sleep(Duration::from_millis(50));
    assert!(store.sessions(ctx.auth_key_id).unwrap().contains(&ctx.session_id));
}

#[test]
fn destroy_auth_key_reports_ok_then_none() {
    let store = Arc::new(MemoryStore::new());
    let mut dispatcher = Dispatcher::new();
    register_service_handlers(
        &mut dispatcher,
        store.clone(),
        store.clone(),
        Duration::from_secs(60),
    );

    let ctx = ctx();
    store.put_auth_key(ctx.auth_key_id, [7u8; 192]).unwrap();

    let body = functions::DestroyAuthKey.to_bytes();
    let reply = dispatcher.dispatch(ctx, &body).unwrap();
    let result = parse_rpc_result(&reply);
    assert_eq!(
        enums::DestroyAuthKeyRes::from_bytes(&result.result).unwrap(),
        enums::DestroyAuthKeyRes::Ok
    );
    assert_eq!(store.auth_key(ctx.auth_key_id).unwrap(), None);

    let reply = dispatcher.dispatch(ctx, &body).unwrap();
    let result = parse_rpc_result(&reply);
    assert_eq!(
        enums::DestroyAuthKeyRes::from_bytes(&result.result).unwrap(),
        enums::DestroyAuthKeyRes::None
    );
}

#[test]
fn constructor_ids_route_independently() {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(functions::Ping::CONSTRUCTOR_ID, Box::new(EchoHandler));
    dispatcher.register(0x2222, Box::new(FloodHandler));

    let body = functions::Ping { ping_id: 1 }.to_bytes();
    let reply = dispatcher.dispatch(ctx(), &body).unwrap();
    let result = parse_rpc_result(&reply);
    // EchoHandler got the bytes after the tag: the serialized ping_id.
    assert_eq!(result.result, 1i64.to_le_bytes());
}
