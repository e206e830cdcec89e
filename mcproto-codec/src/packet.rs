//! The seam between this crate and a concrete schema registry (`spec.md`
//! §4.4/§4.6). `Endpoint<P>` only needs to turn bytes into a `P` and back;
//! it never needs to know how `P`'s variants are organized or where their
//! field layouts come from. A registry crate provides that by implementing
//! [`PacketRegistry`] over its own packet enum.
use std::io::Cursor;

use crate::endpoint::{Direction, State};
use crate::error::PacketError;

/// A packet value that knows its own wire id within the `(state, direction)`
/// table it was decoded from, for diagnostics and for the encode path.
pub trait PacketId {
    /// The numeric id this packet was registered under.
    fn packet_id(&self) -> i32;
}

/// Resolves packet bodies to and from a concrete packet enum `P`, one
/// `(state, direction)` table at a time. A registry crate implements this
/// over its `ProtocolTables`-backed type; `Endpoint<P>` is generic over
/// any implementor, so this crate never depends on the registry crate.
pub trait PacketRegistry<P: PacketId> {
    /// Decodes one packet body (the bytes after the leading packet-id
    /// `VarInt` has already been consumed by the caller) given the id,
    /// state, and direction it was read under.
    fn decode(&self, id: i32, state: State, direction: Direction, data: &mut Cursor<&[u8]>) -> Result<P, PacketError>;

    /// Encodes a packet's body into `out`. The caller has already written the
    /// leading packet-id `VarInt`; this only appends the fields after it.
    fn encode(&self, packet: &P, state: State, direction: Direction, out: &mut Vec<u8>) -> Result<(), PacketError>;

    /// Returns `true` if `id` is registered for `(state, direction)`. Used by
    /// the endpoint to produce a [`PacketError::ProtocolViolation`] instead
    /// of delegating an unknown id to `decode`.
    fn contains(&self, id: i32, state: State, direction: Direction) -> bool;
}

/// Raised when a registry implementation is asked to decode/encode an id it
/// has no table entry for. Kept separate from [`PacketError`] so registry
/// crates can convert it without depending on this crate's full error type.
#[derive(Debug, thiserror::Error)]
#[error("no packet registered for id {id} in state {state:?}/{direction:?}")]
pub struct UnknownPacketId {
    pub id: i32,
    pub state: State,
    pub direction: Direction,
}

impl From<UnknownPacketId> for PacketError {
    fn from(err: UnknownPacketId) -> Self {
        PacketError::ProtocolViolation(err.to_string())
    }
}
