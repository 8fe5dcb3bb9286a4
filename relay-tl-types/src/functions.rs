//! RPC functions as `struct`s.
//!
//! Unlike a client-side schema crate, function types here implement
//! [`Deserializable`] as well as [`Serializable`]: the server parses incoming
//! calls. The constructor ID is written by `serialize` but is *not* consumed
//! by `deserialize` — the dispatcher reads the tag first to pick the type,
//! then hands the cursor over for the fields.

use crate::{Deserializable, Serializable};

/// [`req_pq_multi`](https://core.telegram.org/method/req_pq_multi)
///
/// ```tl
/// req_pq_multi#be7e8ef1 nonce:int128 = ResPQ;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct ReqPqMulti {
    pub nonce: [u8; 16],
}
impl crate::Identifiable for ReqPqMulti {
    const CONSTRUCTOR_ID: u32 = 0xbe7e8ef1;
}
impl crate::Serializable for ReqPqMulti {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        Self::CONSTRUCTOR_ID.serialize(buf);
        self.nonce.serialize(buf);
    }
}
impl crate::Deserializable for ReqPqMulti {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let nonce = <[u8; 16]>::deserialize(buf)?;
        Ok(Self { nonce })
    }
}

/// [`req_DH_params`](https://core.telegram.org/method/req_DH_params)
///
/// ```tl
/// req_DH_params#d712e4be nonce:int128 server_nonce:int128 p:bytes q:bytes
///     public_key_fingerprint:long encrypted_data:bytes = Server_DH_Params;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct ReqDhParams {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub public_key_fingerprint: i64,
    pub encrypted_data: Vec<u8>,
}
impl crate::Identifiable for ReqDhParams {
    const CONSTRUCTOR_ID: u32 = 0xd712e4be;
}
impl crate::Serializable for ReqDhParams {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        Self::CONSTRUCTOR_ID.serialize(buf);
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.p.serialize(buf);
        self.q.serialize(buf);
        self.public_key_fingerprint.serialize(buf);
        self.encrypted_data.serialize(buf);
    }
}
impl crate::Deserializable for ReqDhParams {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let p = Vec::<u8>::deserialize(buf)?;
        let q = Vec::<u8>::deserialize(buf)?;
        let public_key_fingerprint = i64::deserialize(buf)?;
        let encrypted_data = Vec::<u8>::deserialize(buf)?;
        Ok(Self {
            nonce,
            server_nonce,
            p,
            q,
            public_key_fingerprint,
            encrypted_data,
        })
    }
}

/// [`set_client_DH_params`](https://core.telegram.org/method/set_client_DH_params)
///
/// ```tl
/// set_client_DH_params#f5045f1f nonce:int128 server_nonce:int128
///     encrypted_data:bytes = Set_client_DH_params_answer;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct SetClientDhParams {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub encrypted_data: Vec<u8>,
}
impl crate::Identifiable for SetClientDhParams {
    const CONSTRUCTOR_ID: u32 = 0xf5045f1f;
}
impl crate::Serializable for SetClientDhParams {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        Self::CONSTRUCTOR_ID.serialize(buf);
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.encrypted_data.serialize(buf);
    }
}
impl crate::Deserializable for SetClientDhParams {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let encrypted_data = Vec::<u8>::deserialize(buf)?;
        Ok(Self {
            nonce,
            server_nonce,
            encrypted_data,
        })
    }
}

/// [`ping`](https://core.telegram.org/method/ping)
///
/// ```tl
/// ping#7abe77ec ping_id:long = Pong;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct Ping {
    pub ping_id: i64,
}
impl crate::Identifiable for Ping {
    const CONSTRUCTOR_ID: u32 = 0x7abe77ec;
}
impl crate::Serializable for Ping {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        Self::CONSTRUCTOR_ID.serialize(buf);
        self.ping_id.serialize(buf);
    }
}
impl crate::Deserializable for Ping {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        let ping_id = i64::deserialize(buf)?;
        Ok(Self { ping_id })
    }
}

/// [`destroy_auth_key`](https://core.telegram.org/method/destroy_auth_key)
///
/// ```tl
/// destroy_auth_key#d1435160 = DestroyAuthKeyRes;
/// ```
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub struct DestroyAuthKey;
impl crate::Identifiable for DestroyAuthKey {
    const CONSTRUCTOR_ID: u32 = 0xd1435160;
}
impl crate::Serializable for DestroyAuthKey {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        Self::CONSTRUCTOR_ID.serialize(buf);
    }
}
impl crate::Deserializable for DestroyAuthKey {
    fn deserialize(_buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        Ok(Self)
    }
}

pub mod auth {
    //! Functions in the `auth.` namespace.

    use crate::{Deserializable, Serializable};

    /// [`auth.bindTempAuthKey`](https://core.telegram.org/method/auth.bindTempAuthKey)
    ///
    /// ```tl
    /// auth.bindTempAuthKey#cdd42a05 perm_auth_key_id:long nonce:long
    ///     expires_at:int encrypted_message:bytes = Bool;
    /// ```
    #[derive(Debug)]
    #[derive(Clone, PartialEq)]
    pub struct BindTempAuthKey {
        pub perm_auth_key_id: i64,
        pub nonce: i64,
        pub expires_at: i32,
        pub encrypted_message: Vec<u8>,
    }
    impl crate::Identifiable for BindTempAuthKey {
        const CONSTRUCTOR_ID: u32 = 0xcdd42a05;
    }
    impl crate::Serializable for BindTempAuthKey {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            use crate::Identifiable;
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.perm_auth_key_id.serialize(buf);
            self.nonce.serialize(buf);
            self.expires_at.serialize(buf);
            self.encrypted_message.serialize(buf);
        }
    }
    impl crate::Deserializable for BindTempAuthKey {
        fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
            let perm_auth_key_id = i64::deserialize(buf)?;
            let nonce = i64::deserialize(buf)?;
            let expires_at = i32::deserialize(buf)?;
            let encrypted_message = Vec::<u8>::deserialize(buf)?;
            Ok(Self {
                perm_auth_key_id,
                nonce,
                expires_at,
                encrypted_message,
            })
        }
    }
}
