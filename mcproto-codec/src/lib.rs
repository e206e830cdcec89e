//! Sans-I/O packet framing, state machine, and composite wire codecs
//! shared across every protocol version.
//!
//! This crate knows how to turn decompressed packet bodies into bytes and
//! back and how to carry connection state (`spec.md` §4.5-§4.7); it does
//! not know what packets exist for a given version — that's
//! `mcproto-registry`, layered on top via the [`packet::PacketRegistry`]
//! trait so this crate never depends on it.
pub mod cipher;
pub mod composite;
pub mod endpoint;
pub mod error;
pub mod framing;
pub mod packet;

pub use endpoint::{DecodedFrame, Direction, Endpoint, State};
pub use error::PacketError;
pub use packet::{PacketId, PacketRegistry};
