//! TL binary codec and the MTProto service schema subset.
//!
//! The codec follows the [MTProto Binary Serialization] rules: little-endian
//! fixed-width scalars, 4-byte-aligned length-prefixed strings, boxed vectors
//! with the `0x1cb5c415` marker, and constructors identified by a 32-bit tag.
//!
//! # Overview
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`types`]     | Concrete constructors (bare types) as `struct`s        |
//! | [`functions`] | RPC functions as `struct`s (serializable *and*         |
//! |               | deserializable — the server parses incoming calls)     |
//! | [`enums`]     | Boxed types as `enum`s, one variant per constructor    |
//!
//! Only the MTProto service schema needed by the handshake, session and RPC
//! envelope layers is defined here. The full api.tl schema is maintained
//! elsewhere and is out of scope for the server core.
//!
//! [MTProto Binary Serialization]: https://core.telegram.org/mtproto/serialize

#![deny(unsafe_code)]

pub mod deserialize;
pub mod enums;
pub mod functions;
pub mod serialize;
pub mod types;

pub use deserialize::{Cursor, Deserializable};
pub use serialize::Serializable;

/// Bare vector — `vector` (lowercase) as opposed to the boxed `Vector`.
///
/// Used in rare cases where the peer sends a length-prefixed list without
/// the usual `0x1cb5c415` constructor ID header.
#[derive(Clone, Debug, PartialEq)]
pub struct RawVec<T>(pub Vec<T>);

// ─── Core traits ──────────────────────────────────────────────────────────────

/// Every schema type has a unique 32-bit constructor ID.
pub trait Identifiable {
    /// The constructor ID as specified in the TL schema.
    const CONSTRUCTOR_ID: u32;
}
