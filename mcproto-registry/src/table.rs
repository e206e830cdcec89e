//! The packet table (`spec.md` §4.4): a `(state, direction)`-scoped map from
//! packet id to a compiled codec pair, and [`ProtocolTables`], the full set
//! of tables for one protocol version.
//!
//! Tables are `Rc`-backed so `based_on(prev)` is a cheap shallow copy —
//! `protocol(v).based_on(u)` in `original_source/fastmc/proto.py` starts a
//! new version from the previous one's dict and only touches the ids it
//! overrides; `PacketTable::clone` gives the same semantics here.
use std::io::Cursor;
use std::rc::Rc;

use mcproto_utils::{ReadingError, WritingError};
use rustc_hash::FxHashMap;

type Decoder<P> = Rc<dyn Fn(&mut Cursor<&[u8]>) -> Result<P, ReadingError>>;
type Encoder<P> = Rc<dyn Fn(&P, &mut Vec<u8>) -> Result<(), WritingError>>;

struct Entry<P> {
    decode: Decoder<P>,
    encode: Encoder<P>,
}

// Manual impl: `Rc<dyn Fn(..)>` is `Clone` regardless of `P`, but
// `#[derive(Clone)]` would add an unwanted `P: Clone` bound.
impl<P> Clone for Entry<P> {
    fn clone(&self) -> Self {
        Self {
            decode: Rc::clone(&self.decode),
            encode: Rc::clone(&self.encode),
        }
    }
}

/// A single `(state, direction)` packet table.
pub struct PacketTable<P> {
    entries: FxHashMap<i32, Entry<P>>,
}

impl<P> Clone for PacketTable<P> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<P> Default for PacketTable<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> PacketTable<P> {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Registers (or overrides) the codec pair for `id`, mirroring
    /// `add_packet(id, name, dsl)` in the original source.
    pub fn add_packet(
        &mut self,
        id: i32,
        decode: impl Fn(&mut Cursor<&[u8]>) -> Result<P, ReadingError> + 'static,
        encode: impl Fn(&P, &mut Vec<u8>) -> Result<(), WritingError> + 'static,
    ) {
        self.entries.insert(
            id,
            Entry {
                decode: Rc::new(decode),
                encode: Rc::new(encode),
            },
        );
    }

    /// Whether `id` has a registered codec.
    #[must_use]
    pub fn contains(&self, id: i32) -> bool {
        self.entries.contains_key(&id)
    }

    /// Decodes the body for `id`. Panics if `id` is absent — callers must
    /// check [`PacketTable::contains`] first, which `Endpoint::read` does.
    pub fn decode(&self, id: i32, data: &mut Cursor<&[u8]>) -> Result<P, ReadingError> {
        (self.entries[&id].decode)(data)
    }

    /// Encodes `packet`'s body under `id`. Panics if `id` is absent.
    pub fn encode(&self, id: i32, packet: &P, out: &mut Vec<u8>) -> Result<(), WritingError> {
        (self.entries[&id].encode)(packet, out)
    }
}

/// The full set of per-`(state, direction)` tables for one protocol version.
///
/// Handshake has no clientbound table: the handshake packet only ever
/// travels client-to-server, per `spec.md`'s state table.
pub struct ProtocolTables<S, C> {
    pub handshake_serverbound: PacketTable<S>,
    pub status_serverbound: PacketTable<S>,
    pub status_clientbound: PacketTable<C>,
    pub login_serverbound: PacketTable<S>,
    pub login_clientbound: PacketTable<C>,
    pub play_serverbound: PacketTable<S>,
    pub play_clientbound: PacketTable<C>,
}

// Manual impls for the same reason as `Entry`: the fields are always
// `Clone`/`Default` via their inner `Rc`s, with no need for `S`/`C` bounds.
impl<S, C> Clone for ProtocolTables<S, C> {
    fn clone(&self) -> Self {
        Self {
            handshake_serverbound: self.handshake_serverbound.clone(),
            status_serverbound: self.status_serverbound.clone(),
            status_clientbound: self.status_clientbound.clone(),
            login_serverbound: self.login_serverbound.clone(),
            login_clientbound: self.login_clientbound.clone(),
            play_serverbound: self.play_serverbound.clone(),
            play_clientbound: self.play_clientbound.clone(),
        }
    }
}

impl<S, C> Default for ProtocolTables<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C> ProtocolTables<S, C> {
    /// An empty set of tables (used only by version 0; every later version
    /// starts from `based_on(prev)` instead).
    #[must_use]
    pub fn new() -> Self {
        Self {
            handshake_serverbound: PacketTable::new(),
            status_serverbound: PacketTable::new(),
            status_clientbound: PacketTable::new(),
            login_serverbound: PacketTable::new(),
            login_clientbound: PacketTable::new(),
            play_serverbound: PacketTable::new(),
            play_clientbound: PacketTable::new(),
        }
    }

    /// Starts a new version's tables from a prior version's, per `based_on`.
    #[must_use]
    pub fn based_on(prev: &Self) -> Self {
        prev.clone()
    }
}
