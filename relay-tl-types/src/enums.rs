//! Boxed types as `enum`s, one variant per constructor.
//!
//! Boxed (de)serialization is where the 32-bit constructor tag lives: each
//! enum writes the tag of its active variant and decodes by table lookup on
//! the tag. Decoding a tag outside the closed set is a fatal
//! [`UnexpectedConstructor`](crate::deserialize::Error::UnexpectedConstructor).

use crate::{Deserializable, Serializable};

/// [`ResPQ`](https://core.telegram.org/type/ResPQ)
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub enum ResPq {
    ResPq(crate::types::ResPq),
}
impl crate::Serializable for ResPq {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        match self {
            Self::ResPq(x) => {
                crate::types::ResPq::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
        }
    }
}
impl crate::Deserializable for ResPq {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        use crate::Identifiable;
        let id = u32::deserialize(buf)?;
        Ok(match id {
            crate::types::ResPq::CONSTRUCTOR_ID => Self::ResPq(crate::types::ResPq::deserialize(buf)?),
            _ => return Err(crate::deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}
impl From<crate::types::ResPq> for ResPq {
    fn from(x: crate::types::ResPq) -> Self {
        Self::ResPq(x)
    }
}
impl TryFrom<ResPq> for crate::types::ResPq {
    type Error = ResPq;
    #[allow(unreachable_patterns)]
    fn try_from(v: ResPq) -> Result<Self, Self::Error> {
        match v {
            ResPq::ResPq(x) => Ok(x),
            other => Err(other),
        }
    }
}

/// [`P_Q_inner_data`](https://core.telegram.org/type/P_Q_inner_data)
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub enum PQInnerData {
    PQInnerData(crate::types::PQInnerData),
    Dc(crate::types::PQInnerDataDc),
    Temp(crate::types::PQInnerDataTemp),
    TempDc(crate::types::PQInnerDataTempDc),
}
impl crate::Serializable for PQInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        match self {
            Self::PQInnerData(x) => {
                crate::types::PQInnerData::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
            Self::Dc(x) => {
                crate::types::PQInnerDataDc::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
            Self::Temp(x) => {
                crate::types::PQInnerDataTemp::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
            Self::TempDc(x) => {
                crate::types::PQInnerDataTempDc::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
        }
    }
}
impl crate::Deserializable for PQInnerData {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        use crate::Identifiable;
        let id = u32::deserialize(buf)?;
        Ok(match id {
            crate::types::PQInnerData::CONSTRUCTOR_ID => Self::PQInnerData(crate::types::PQInnerData::deserialize(buf)?),
            crate::types::PQInnerDataDc::CONSTRUCTOR_ID => Self::Dc(crate::types::PQInnerDataDc::deserialize(buf)?),
            crate::types::PQInnerDataTemp::CONSTRUCTOR_ID => Self::Temp(crate::types::PQInnerDataTemp::deserialize(buf)?),
            crate::types::PQInnerDataTempDc::CONSTRUCTOR_ID => Self::TempDc(crate::types::PQInnerDataTempDc::deserialize(buf)?),
            _ => return Err(crate::deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}
impl From<crate::types::PQInnerData> for PQInnerData {
    fn from(x: crate::types::PQInnerData) -> Self {
        Self::PQInnerData(x)
    }
}
impl From<crate::types::PQInnerDataDc> for PQInnerData {
    fn from(x: crate::types::PQInnerDataDc) -> Self {
        Self::Dc(x)
    }
}
impl From<crate::types::PQInnerDataTemp> for PQInnerData {
    fn from(x: crate::types::PQInnerDataTemp) -> Self {
        Self::Temp(x)
    }
}
impl From<crate::types::PQInnerDataTempDc> for PQInnerData {
    fn from(x: crate::types::PQInnerDataTempDc) -> Self {
        Self::TempDc(x)
    }
}

/// [`Server_DH_Params`](https://core.telegram.org/type/Server_DH_Params)
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub enum ServerDhParams {
    Ok(crate::types::ServerDhParamsOk),
    Fail(crate::types::ServerDhParamsFail),
}
impl crate::Serializable for ServerDhParams {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        match self {
            Self::Ok(x) => {
                crate::types::ServerDhParamsOk::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
            Self::Fail(x) => {
                crate::types::ServerDhParamsFail::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
        }
    }
}
impl crate::Deserializable for ServerDhParams {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        use crate::Identifiable;
        let id = u32::deserialize(buf)?;
        Ok(match id {
            crate::types::ServerDhParamsOk::CONSTRUCTOR_ID => Self::Ok(crate::types::ServerDhParamsOk::deserialize(buf)?),
            crate::types::ServerDhParamsFail::CONSTRUCTOR_ID => Self::Fail(crate::types::ServerDhParamsFail::deserialize(buf)?),
            _ => return Err(crate::deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}
impl From<crate::types::ServerDhParamsOk> for ServerDhParams {
    fn from(x: crate::types::ServerDhParamsOk) -> Self {
        Self::Ok(x)
    }
}
impl From<crate::types::ServerDhParamsFail> for ServerDhParams {
    fn from(x: crate::types::ServerDhParamsFail) -> Self {
        Self::Fail(x)
    }
}

/// [`Server_DH_inner_data`](https://core.telegram.org/type/Server_DH_inner_data)
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub enum ServerDhInnerData {
    ServerDhInnerData(crate::types::ServerDhInnerData),
}
impl crate::Serializable for ServerDhInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        match self {
            Self::ServerDhInnerData(x) => {
                crate::types::ServerDhInnerData::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
        }
    }
}
impl crate::Deserializable for ServerDhInnerData {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        use crate::Identifiable;
        let id = u32::deserialize(buf)?;
        Ok(match id {
            crate::types::ServerDhInnerData::CONSTRUCTOR_ID => Self::ServerDhInnerData(crate::types::ServerDhInnerData::deserialize(buf)?),
            _ => return Err(crate::deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}
impl From<crate::types::ServerDhInnerData> for ServerDhInnerData {
    fn from(x: crate::types::ServerDhInnerData) -> Self {
        Self::ServerDhInnerData(x)
    }
}
impl TryFrom<ServerDhInnerData> for crate::types::ServerDhInnerData {
    type Error = ServerDhInnerData;
    #[allow(unreachable_patterns)]
    fn try_from(v: ServerDhInnerData) -> Result<Self, Self::Error> {
        match v {
            ServerDhInnerData::ServerDhInnerData(x) => Ok(x),
            other => Err(other),
        }
    }
}

/// [`Client_DH_Inner_Data`](https://core.telegram.org/type/Client_DH_Inner_Data)
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub enum ClientDhInnerData {
    ClientDhInnerData(crate::types::ClientDhInnerData),
}
impl crate::Serializable for ClientDhInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        match self {
            Self::ClientDhInnerData(x) => {
                crate::types::ClientDhInnerData::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
        }
    }
}
impl crate::Deserializable for ClientDhInnerData {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        use crate::Identifiable;
        let id = u32::deserialize(buf)?;
        Ok(match id {
            crate::types::ClientDhInnerData::CONSTRUCTOR_ID => Self::ClientDhInnerData(crate::types::ClientDhInnerData::deserialize(buf)?),
            _ => return Err(crate::deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}
impl From<crate::types::ClientDhInnerData> for ClientDhInnerData {
    fn from(x: crate::types::ClientDhInnerData) -> Self {
        Self::ClientDhInnerData(x)
    }
}
impl TryFrom<ClientDhInnerData> for crate::types::ClientDhInnerData {
    type Error = ClientDhInnerData;
    #[allow(unreachable_patterns)]
    fn try_from(v: ClientDhInnerData) -> Result<Self, Self::Error> {
        match v {
            ClientDhInnerData::ClientDhInnerData(x) => Ok(x),
            other => Err(other),
        }
    }
}

/// [`Set_client_DH_params_answer`](https://core.telegram.org/type/Set_client_DH_params_answer)
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub enum SetClientDhParamsAnswer {
    DhGenOk(crate::types::DhGenOk),
    DhGenRetry(crate::types::DhGenRetry),
    DhGenFail(crate::types::DhGenFail),
}
impl crate::Serializable for SetClientDhParamsAnswer {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        match self {
            Self::DhGenOk(x) => {
                crate::types::DhGenOk::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
            Self::DhGenRetry(x) => {
                crate::types::DhGenRetry::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
            Self::DhGenFail(x) => {
                crate::types::DhGenFail::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
        }
    }
}
impl crate::Deserializable for SetClientDhParamsAnswer {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        use crate::Identifiable;
        let id = u32::deserialize(buf)?;
        Ok(match id {
            crate::types::DhGenOk::CONSTRUCTOR_ID => Self::DhGenOk(crate::types::DhGenOk::deserialize(buf)?),
            crate::types::DhGenRetry::CONSTRUCTOR_ID => Self::DhGenRetry(crate::types::DhGenRetry::deserialize(buf)?),
            crate::types::DhGenFail::CONSTRUCTOR_ID => Self::DhGenFail(crate::types::DhGenFail::deserialize(buf)?),
            _ => return Err(crate::deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}
impl From<crate::types::DhGenOk> for SetClientDhParamsAnswer {
    fn from(x: crate::types::DhGenOk) -> Self {
        Self::DhGenOk(x)
    }
}
impl From<crate::types::DhGenRetry> for SetClientDhParamsAnswer {
    fn from(x: crate::types::DhGenRetry) -> Self {
        Self::DhGenRetry(x)
    }
}
impl From<crate::types::DhGenFail> for SetClientDhParamsAnswer {
    fn from(x: crate::types::DhGenFail) -> Self {
        Self::DhGenFail(x)
    }
}

/// [`RpcResult`](https://core.telegram.org/type/RpcResult)
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub enum RpcResult {
    RpcResult(crate::types::RpcResult),
}
impl crate::Serializable for RpcResult {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        match self {
            Self::RpcResult(x) => {
                crate::types::RpcResult::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
        }
    }
}
impl crate::Deserializable for RpcResult {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        use crate::Identifiable;
        let id = u32::deserialize(buf)?;
        Ok(match id {
            crate::types::RpcResult::CONSTRUCTOR_ID => Self::RpcResult(crate::types::RpcResult::deserialize(buf)?),
            _ => return Err(crate::deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}
impl From<crate::types::RpcResult> for RpcResult {
    fn from(x: crate::types::RpcResult) -> Self {
        Self::RpcResult(x)
    }
}

/// [`RpcError`](https://core.telegram.org/type/RpcError)
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub enum RpcError {
    RpcError(crate::types::RpcError),
}
impl crate::Serializable for RpcError {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        match self {
            Self::RpcError(x) => {
                crate::types::RpcError::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
        }
    }
}
impl crate::Deserializable for RpcError {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        use crate::Identifiable;
        let id = u32::deserialize(buf)?;
        Ok(match id {
            crate::types::RpcError::CONSTRUCTOR_ID => Self::RpcError(crate::types::RpcError::deserialize(buf)?),
            _ => return Err(crate::deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}
impl From<crate::types::RpcError> for RpcError {
    fn from(x: crate::types::RpcError) -> Self {
        Self::RpcError(x)
    }
}

/// [`Pong`](https://core.telegram.org/type/Pong)
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub enum Pong {
    Pong(crate::types::Pong),
}
impl crate::Serializable for Pong {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        match self {
            Self::Pong(x) => {
                crate::types::Pong::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
        }
    }
}
impl crate::Deserializable for Pong {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        use crate::Identifiable;
        let id = u32::deserialize(buf)?;
        Ok(match id {
            crate::types::Pong::CONSTRUCTOR_ID => Self::Pong(crate::types::Pong::deserialize(buf)?),
            _ => return Err(crate::deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}
impl From<crate::types::Pong> for Pong {
    fn from(x: crate::types::Pong) -> Self {
        Self::Pong(x)
    }
}

/// [`DestroyAuthKeyRes`](https://core.telegram.org/type/DestroyAuthKeyRes)
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub enum DestroyAuthKeyRes {
    Ok,
    None,
    Fail,
}
impl crate::Serializable for DestroyAuthKeyRes {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        match self {
            Self::Ok => {
                crate::types::DestroyAuthKeyOk::CONSTRUCTOR_ID.serialize(buf);
            }
            Self::None => {
                crate::types::DestroyAuthKeyNone::CONSTRUCTOR_ID.serialize(buf);
            }
            Self::Fail => {
                crate::types::DestroyAuthKeyFail::CONSTRUCTOR_ID.serialize(buf);
            }
        }
    }
}
impl crate::Deserializable for DestroyAuthKeyRes {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        use crate::Identifiable;
        let id = u32::deserialize(buf)?;
        Ok(match id {
            crate::types::DestroyAuthKeyOk::CONSTRUCTOR_ID => Self::Ok,
            crate::types::DestroyAuthKeyNone::CONSTRUCTOR_ID => Self::None,
            crate::types::DestroyAuthKeyFail::CONSTRUCTOR_ID => Self::Fail,
            _ => return Err(crate::deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

/// [`DcOption`](https://core.telegram.org/type/DcOption)
#[derive(Debug)]
#[derive(Clone, PartialEq)]
pub enum DcOption {
    DcOption(crate::types::DcOption),
}
impl crate::Serializable for DcOption {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        use crate::Identifiable;
        match self {
            Self::DcOption(x) => {
                crate::types::DcOption::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
        }
    }
}
impl crate::Deserializable for DcOption {
    fn deserialize(buf: crate::deserialize::Buffer) -> crate::deserialize::Result<Self> {
        use crate::Identifiable;
        let id = u32::deserialize(buf)?;
        Ok(match id {
            crate::types::DcOption::CONSTRUCTOR_ID => Self::DcOption(crate::types::DcOption::deserialize(buf)?),
            _ => return Err(crate::deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}
impl From<crate::types::DcOption> for DcOption {
    fn from(x: crate::types::DcOption) -> Self {
        Self::DcOption(x)
    }
}
impl TryFrom<DcOption> for crate::types::DcOption {
    type Error = DcOption;
    #[allow(unreachable_patterns)]
    fn try_from(v: DcOption) -> Result<Self, Self::Error> {
        match v {
            DcOption::DcOption(x) => Ok(x),
            other => Err(other),
        }
    }
}
