//! Concrete constructors (bare types) as `struct`s.
//!
//! Hand-maintained subset of the MTProto service schema. Each struct mirrors
//! one TL constructor; the `tl` block in its doc comment is the authoritative
//! schema line. Bare serialization never writes the constructor ID — boxed
//! use goes through [`crate::enums`].

use crate::{Deserializable, Serializable};

/// [`resPQ`](https://core.telegram.org/constructor/resPQ)
///
/// ```tl
/// resPQ#05162463 nonce:int128 server_nonce:int128 pq:bytes
///     server_public_key_fingerprints:Vector<long> = ResPQ;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct ResPq {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub pq: Vec<u8>,
    pub server_public_key_fingerprints: Vec<i64>,
}
impl crate::Identifiable for ResPq {
    const CONSTRUCTOR_ID: u32 = 0x05162463;
}
impl crate::Serializable for ResPq {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.pq.serialize(buf);
        self.server_public_key_fingerprints.serialize(buf);
    }
}
impl crate::Deserializable for ResPq {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let pq = Vec::<u8>::deserialize(buf)?;
        let server_public_key_fingerprints = Vec::<i64>::deserialize(buf)?;
        Ok(Self {
            nonce,
            server_nonce,
            pq,
            server_public_key_fingerprints,
        })
    }
}

/// [`p_q_inner_data`](https://core.telegram.org/constructor/p_q_inner_data)
///
/// ```tl
/// p_q_inner_data#83c95aec pq:bytes p:bytes q:bytes nonce:int128
///     server_nonce:int128 new_nonce:int256 = P_Q_inner_data;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct PQInnerData {
    pub pq: Vec<u8>,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce: [u8; 32],
}
impl crate::Identifiable for PQInnerData {
    const CONSTRUCTOR_ID: u32 = 0x83c95aec;
}
impl crate::Serializable for PQInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.pq.serialize(buf);
        self.p.serialize(buf);
        self.q.serialize(buf);
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.new_nonce.serialize(buf);
    }
}
impl crate::Deserializable for PQInnerData {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let pq = Vec::<u8>::deserialize(buf)?;
        let p = Vec::<u8>::deserialize(buf)?;
        let q = Vec::<u8>::deserialize(buf)?;
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let new_nonce = <[u8; 32]>::deserialize(buf)?;
        Ok(Self {
            pq,
            p,
            q,
            nonce,
            server_nonce,
            new_nonce,
        })
    }
}

/// [`p_q_inner_data_dc`](https://core.telegram.org/constructor/p_q_inner_data_dc)
///
/// ```tl
/// p_q_inner_data_dc#a9f55f95 pq:bytes p:bytes q:bytes nonce:int128
///     server_nonce:int128 new_nonce:int256 dc:int = P_Q_inner_data;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct PQInnerDataDc {
    pub pq: Vec<u8>,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce: [u8; 32],
    pub dc: i32,
}
impl crate::Identifiable for PQInnerDataDc {
    const CONSTRUCTOR_ID: u32 = 0xa9f55f95;
}
impl crate::Serializable for PQInnerDataDc {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.pq.serialize(buf);
        self.p.serialize(buf);
        self.q.serialize(buf);
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.new_nonce.serialize(buf);
        self.dc.serialize(buf);
    }
}
impl crate::Deserializable for PQInnerDataDc {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let pq = Vec::<u8>::deserialize(buf)?;
        let p = Vec::<u8>::deserialize(buf)?;
        let q = Vec::<u8>::deserialize(buf)?;
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let new_nonce = <[u8; 32]>::deserialize(buf)?;
        let dc = i32::deserialize(buf)?;
        Ok(Self {
            pq,
            p,
            q,
            nonce,
            server_nonce,
            new_nonce,
            dc,
        })
    }
}

/// [`p_q_inner_data_temp`](https://core.telegram.org/constructor/p_q_inner_data_temp)
///
/// ```tl
/// p_q_inner_data_temp#3c6a84d4 pq:bytes p:bytes q:bytes nonce:int128
///     server_nonce:int128 new_nonce:int256 expires_in:int = P_Q_inner_data;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct PQInnerDataTemp {
    pub pq: Vec<u8>,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce: [u8; 32],
    pub expires_in: i32,
}
impl crate::Identifiable for PQInnerDataTemp {
    const CONSTRUCTOR_ID: u32 = 0x3c6a84d4;
}
impl crate::Serializable for PQInnerDataTemp {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.pq.serialize(buf);
        self.p.serialize(buf);
        self.q.serialize(buf);
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.new_nonce.serialize(buf);
        self.expires_in.serialize(buf);
    }
}
impl crate::Deserializable for PQInnerDataTemp {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let pq = Vec::<u8>::deserialize(buf)?;
        let p = Vec::<u8>::deserialize(buf)?;
        let q = Vec::<u8>::deserialize(buf)?;
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let new_nonce = <[u8; 32]>::deserialize(buf)?;
        let expires_in = i32::deserialize(buf)?;
        Ok(Self {
            pq,
            p,
            q,
            nonce,
            server_nonce,
            new_nonce,
            expires_in,
        })
    }
}

/// [`p_q_inner_data_temp_dc`](https://core.telegram.org/constructor/p_q_inner_data_temp_dc)
///
/// ```tl
/// p_q_inner_data_temp_dc#56fddf88 pq:bytes p:bytes q:bytes nonce:int128
///     server_nonce:int128 new_nonce:int256 dc:int expires_in:int = P_Q_inner_data;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct PQInnerDataTempDc {
    pub pq: Vec<u8>,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce: [u8; 32],
    pub dc: i32,
    pub expires_in: i32,
}
impl crate::Identifiable for PQInnerDataTempDc {
    const CONSTRUCTOR_ID: u32 = 0x56fddf88;
}
impl crate::Serializable for PQInnerDataTempDc {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.pq.serialize(buf);
        self.p.serialize(buf);
        self.q.serialize(buf);
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.new_nonce.serialize(buf);
        self.dc.serialize(buf);
        self.expires_in.serialize(buf);
    }
}
impl crate::Deserializable for PQInnerDataTempDc {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let pq = Vec::<u8>::deserialize(buf)?;
        let p = Vec::<u8>::deserialize(buf)?;
        let q = Vec::<u8>::deserialize(buf)?;
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let new_nonce = <[u8; 32]>::deserialize(buf)?;
        let dc = i32::deserialize(buf)?;
        let expires_in = i32::deserialize(buf)?;
        Ok(Self {
            pq,
            p,
            q,
            nonce,
            server_nonce,
            new_nonce,
            dc,
            expires_in,
        })
    }
}

/// [`server_DH_params_ok`](https://core.telegram.org/constructor/server_DH_params_ok)
///
/// ```tl
/// server_DH_params_ok#d0e8075c nonce:int128 server_nonce:int128
///     encrypted_answer:bytes = Server_DH_Params;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct ServerDhParamsOk {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub encrypted_answer: Vec<u8>,
}
impl crate::Identifiable for ServerDhParamsOk {
    const CONSTRUCTOR_ID: u32 = 0xd0e8075c;
}
impl crate::Serializable for ServerDhParamsOk {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.encrypted_answer.serialize(buf);
    }
}
impl crate::Deserializable for ServerDhParamsOk {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let encrypted_answer = Vec::<u8>::deserialize(buf)?;
        Ok(Self {
            nonce,
            server_nonce,
            encrypted_answer,
        })
    }
}

/// [`server_DH_params_fail`](https://core.telegram.org/constructor/server_DH_params_fail)
///
/// ```tl
/// server_DH_params_fail#79cb045d nonce:int128 server_nonce:int128
///     new_nonce_hash:int128 = Server_DH_Params;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct ServerDhParamsFail {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash: [u8; 16],
}
impl crate::Identifiable for ServerDhParamsFail {
    const CONSTRUCTOR_ID: u32 = 0x79cb045d;
}
impl crate::Serializable for ServerDhParamsFail {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.new_nonce_hash.serialize(buf);
    }
}
impl crate::Deserializable for ServerDhParamsFail {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let new_nonce_hash = <[u8; 16]>::deserialize(buf)?;
        Ok(Self {
            nonce,
            server_nonce,
            new_nonce_hash,
        })
    }
}

/// [`server_DH_inner_data`](https://core.telegram.org/constructor/server_DH_inner_data)
///
/// ```tl
/// server_DH_inner_data#b5890dba nonce:int128 server_nonce:int128 g:int
///     dh_prime:bytes g_a:bytes server_time:int = Server_DH_inner_data;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct ServerDhInnerData {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub g: i32,
    pub dh_prime: Vec<u8>,
    pub g_a: Vec<u8>,
    pub server_time: i32,
}
impl crate::Identifiable for ServerDhInnerData {
    const CONSTRUCTOR_ID: u32 = 0xb5890dba;
}
impl crate::Serializable for ServerDhInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.g.serialize(buf);
        self.dh_prime.serialize(buf);
        self.g_a.serialize(buf);
        self.server_time.serialize(buf);
    }
}
impl crate::Deserializable for ServerDhInnerData {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let g = i32::deserialize(buf)?;
        let dh_prime = Vec::<u8>::deserialize(buf)?;
        let g_a = Vec::<u8>::deserialize(buf)?;
        let server_time = i32::deserialize(buf)?;
        Ok(Self {
            nonce,
            server_nonce,
            g,
            dh_prime,
            g_a,
            server_time,
        })
    }
}

/// [`client_DH_inner_data`](https://core.telegram.org/constructor/client_DH_inner_data)
///
/// ```tl
/// client_DH_inner_data#6643b654 nonce:int128 server_nonce:int128
///     retry_id:long g_b:bytes = Client_DH_Inner_Data;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct ClientDhInnerData {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub retry_id: i64,
    pub g_b: Vec<u8>,
}
impl crate::Identifiable for ClientDhInnerData {
    const CONSTRUCTOR_ID: u32 = 0x6643b654;
}
impl crate::Serializable for ClientDhInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.retry_id.serialize(buf);
        self.g_b.serialize(buf);
    }
}
impl crate::Deserializable for ClientDhInnerData {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let retry_id = i64::deserialize(buf)?;
        let g_b = Vec::<u8>::deserialize(buf)?;
        Ok(Self {
            nonce,
            server_nonce,
            retry_id,
            g_b,
        })
    }
}

/// [`dh_gen_ok`](https://core.telegram.org/constructor/dh_gen_ok)
///
/// ```tl
/// dh_gen_ok#3bcbf734 nonce:int128 server_nonce:int128
///     new_nonce_hash1:int128 = Set_client_DH_params_answer;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct DhGenOk {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash1: [u8; 16],
}
impl crate::Identifiable for DhGenOk {
    const CONSTRUCTOR_ID: u32 = 0x3bcbf734;
}
impl crate::Serializable for DhGenOk {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.new_nonce_hash1.serialize(buf);
    }
}
impl crate::Deserializable for DhGenOk {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let new_nonce_hash1 = <[u8; 16]>::deserialize(buf)?;
        Ok(Self {
            nonce,
            server_nonce,
            new_nonce_hash1,
        })
    }
}

/// [`dh_gen_retry`](https://core.telegram.org/constructor/dh_gen_retry)
///
/// ```tl
/// dh_gen_retry#46dc1fb9 nonce:int128 server_nonce:int128
///     new_nonce_hash2:int128 = Set_client_DH_params_answer;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct DhGenRetry {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash2: [u8; 16],
}
impl crate::Identifiable for DhGenRetry {
    const CONSTRUCTOR_ID: u32 = 0x46dc1fb9;
}
impl crate::Serializable for DhGenRetry {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.new_nonce_hash2.serialize(buf);
    }
}
impl crate::Deserializable for DhGenRetry {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let new_nonce_hash2 = <[u8; 16]>::deserialize(buf)?;
        Ok(Self {
            nonce,
            server_nonce,
            new_nonce_hash2,
        })
    }
}

/// [`dh_gen_fail`](https://core.telegram.org/constructor/dh_gen_fail)
///
/// ```tl
/// dh_gen_fail#a69dae02 nonce:int128 server_nonce:int128
///     new_nonce_hash3:int128 = Set_client_DH_params_answer;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct DhGenFail {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash3: [u8; 16],
}
impl crate::Identifiable for DhGenFail {
    const CONSTRUCTOR_ID: u32 = 0xa69dae02;
}
impl crate::Serializable for DhGenFail {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.new_nonce_hash3.serialize(buf);
    }
}
impl crate::Deserializable for DhGenFail {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let new_nonce_hash3 = <[u8; 16]>::deserialize(buf)?;
        Ok(Self {
            nonce,
            server_nonce,
            new_nonce_hash3,
        })
    }
}

/// [`rpc_result`](https://core.telegram.org/constructor/rpc_result)
///
/// ```tl
/// rpc_result#f35c6d01 req_msg_id:long result:Object = RpcResult;
/// ```
///
/// `result` is a bare object: the raw serialized bytes of the payload,
/// written without any length prefix. Deserialization therefore consumes
/// everything to the end of the buffer.
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct RpcResult {
    pub req_msg_id: i64,
    pub result: Vec<u8>,
}
impl crate::Identifiable for RpcResult {
    const CONSTRUCTOR_ID: u32 = 0xf35c6d01;
}
impl crate::Serializable for RpcResult {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.req_msg_id.serialize(buf);
        buf.extend(self.result.iter().copied());
    }
}
impl crate::Deserializable for RpcResult {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let req_msg_id = i64::deserialize(buf)?;
        let mut result = Vec::with_capacity(buf.remaining());
        buf.read_to_end(&mut result);
        Ok(Self { req_msg_id, result })
    }
}

/// [`rpc_error`](https://core.telegram.org/constructor/rpc_error)
///
/// ```tl
/// rpc_error#2144ca19 error_code:int error_message:string = RpcError;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct RpcError {
    pub error_code: i32,
    pub error_message: String,
}
impl crate::Identifiable for RpcError {
    const CONSTRUCTOR_ID: u32 = 0x2144ca19;
}
impl crate::Serializable for RpcError {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.error_code.serialize(buf);
        self.error_message.serialize(buf);
    }
}
impl crate::Deserializable for RpcError {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let error_code = i32::deserialize(buf)?;
        let error_message = String::deserialize(buf)?;
        Ok(Self { error_code, error_message })
    }
}

/// [`bind_auth_key_inner`](https://core.telegram.org/constructor/bind_auth_key_inner)
///
/// ```tl
/// bind_auth_key_inner#75a3f765 nonce:long temp_auth_key_id:long
///     perm_auth_key_id:long temp_session_id:long expires_at:int = BindAuthKeyInner;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct BindAuthKeyInner {
    pub nonce: i64,
    pub temp_auth_key_id: i64,
    pub perm_auth_key_id: i64,
    pub temp_session_id: i64,
    pub expires_at: i32,
}
impl crate::Identifiable for BindAuthKeyInner {
    const CONSTRUCTOR_ID: u32 = 0x75a3f765;
}
impl crate::Serializable for BindAuthKeyInner {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.temp_auth_key_id.serialize(buf);
        self.perm_auth_key_id.serialize(buf);
        self.temp_session_id.serialize(buf);
        self.expires_at.serialize(buf);
    }
}
impl crate::Deserializable for BindAuthKeyInner {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let nonce = i64::deserialize(buf)?;
        let temp_auth_key_id = i64::deserialize(buf)?;
        let perm_auth_key_id = i64::deserialize(buf)?;
        let temp_session_id = i64::deserialize(buf)?;
        let expires_at = i32::deserialize(buf)?;
        Ok(Self {
            nonce,
            temp_auth_key_id,
            perm_auth_key_id,
            temp_session_id,
            expires_at,
        })
    }
}

/// [`pong`](https://core.telegram.org/constructor/pong)
///
/// ```tl
/// pong#347773c5 msg_id:long ping_id:long = Pong;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct Pong {
    pub msg_id: i64,
    pub ping_id: i64,
}
impl crate::Identifiable for Pong {
    const CONSTRUCTOR_ID: u32 = 0x347773c5;
}
impl crate::Serializable for Pong {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.msg_id.serialize(buf);
        self.ping_id.serialize(buf);
    }
}
impl crate::Deserializable for Pong {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let msg_id = i64::deserialize(buf)?;
        let ping_id = i64::deserialize(buf)?;
        Ok(Self { msg_id, ping_id })
    }
}

/// [`destroy_auth_key_ok`](https://core.telegram.org/constructor/destroy_auth_key_ok)
///
/// ```tl
/// destroy_auth_key_ok#f660e1d4 = DestroyAuthKeyRes;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct DestroyAuthKeyOk;
impl crate::Identifiable for DestroyAuthKeyOk {
    const CONSTRUCTOR_ID: u32 = 0xf660e1d4;
}
impl crate::Serializable for DestroyAuthKeyOk {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {
    }
}
impl crate::Deserializable for DestroyAuthKeyOk {
    fn deserialize(_buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        Ok(Self)
    }
}

/// [`destroy_auth_key_none`](https://core.telegram.org/constructor/destroy_auth_key_none)
///
/// ```tl
/// destroy_auth_key_none#0a9f2259 = DestroyAuthKeyRes;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct DestroyAuthKeyNone;
impl crate::Identifiable for DestroyAuthKeyNone {
    const CONSTRUCTOR_ID: u32 = 0x0a9f2259;
}
impl crate::Serializable for DestroyAuthKeyNone {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {
    }
}
impl crate::Deserializable for DestroyAuthKeyNone {
    fn deserialize(_buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        Ok(Self)
    }
}

/// [`destroy_auth_key_fail`](https://core.telegram.org/constructor/destroy_auth_key_fail)
///
/// ```tl
/// destroy_auth_key_fail#ea109b13 = DestroyAuthKeyRes;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct DestroyAuthKeyFail;
impl crate::Identifiable for DestroyAuthKeyFail {
    const CONSTRUCTOR_ID: u32 = 0xea109b13;
}
impl crate::Serializable for DestroyAuthKeyFail {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {
    }
}
impl crate::Deserializable for DestroyAuthKeyFail {
    fn deserialize(_buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        Ok(Self)
    }
}

/// [`dcOption`](https://core.telegram.org/constructor/dcOption)
///
/// ```tl
/// dcOption#18b7a10d flags:# ipv6:flags.0?true media_only:flags.1?true
///     tcpo_only:flags.2?true cdn:flags.3?true static:flags.4?true
///     this_port_only:flags.5?true id:int ip_address:string port:int
///     secret:flags.10?bytes = DcOption;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct DcOption {
    pub ipv6: bool,
    pub media_only: bool,
    pub tcpo_only: bool,
    pub cdn: bool,
    pub r#static: bool,
    pub this_port_only: bool,
    pub id: i32,
    pub ip_address: String,
    pub port: i32,
    pub secret: Option<Vec<u8>>,
}
impl crate::Identifiable for DcOption {
    const CONSTRUCTOR_ID: u32 = 0x18b7a10d;
}
impl crate::Serializable for DcOption {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        (if self.ipv6 { 1 << 0 } else { 0 }
            | if self.media_only { 1 << 1 } else { 0 }
            | if self.tcpo_only { 1 << 2 } else { 0 }
            | if self.cdn { 1 << 3 } else { 0 }
            | if self.r#static { 1 << 4 } else { 0 }
            | if self.this_port_only { 1 << 5 } else { 0 }
            | if self.secret.is_some() { 1 << 10 } else { 0 }).serialize(buf);
        self.id.serialize(buf);
        self.ip_address.serialize(buf);
        self.port.serialize(buf);
        if let Some(ref v) = self.secret { v.serialize(buf); }
    }
}
impl crate::Deserializable for DcOption {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let _flags = u32::deserialize(buf)?;
        let ipv6 = (_flags & (1 << 0)) != 0;
        let media_only = (_flags & (1 << 1)) != 0;
        let tcpo_only = (_flags & (1 << 2)) != 0;
        let cdn = (_flags & (1 << 3)) != 0;
        let r#static = (_flags & (1 << 4)) != 0;
        let this_port_only = (_flags & (1 << 5)) != 0;
        let id = i32::deserialize(buf)?;
        let ip_address = String::deserialize(buf)?;
        let port = i32::deserialize(buf)?;
        let secret = if (_flags & (1 << 10)) != 0 { Some(Vec::<u8>::deserialize(buf)?) } else { None };
        Ok(Self {
            ipv6,
            media_only,
            tcpo_only,
            cdn,
            r#static,
            this_port_only,
            id,
            ip_address,
            port,
            secret,
        })
    }
}
