//! Public facade over the Minecraft wire-protocol codec engine: the
//! sans-I/O framing/state-machine core from `mcproto-codec`, the concrete
//! packet catalog from `mcproto-registry`, and the wire primitives from
//! `mcproto-utils`, re-exported as one crate the way `steel-protocol`
//! re-exports `steel-utils` for its own downstream consumers.
pub use mcproto_codec::cipher::{self, Aes128Cfb8Dec, Aes128Cfb8Enc, CipherReader, CipherWriter};
pub use mcproto_codec::composite;
pub use mcproto_codec::endpoint::{DecodedFrame, Direction, Endpoint, State};
pub use mcproto_codec::error::PacketError;
pub use mcproto_codec::framing::{ReadBuffer, Snapshot};
pub use mcproto_codec::packet::{PacketId, PacketRegistry, UnknownPacketId};

pub use mcproto_registry::versions::protocol;
pub use mcproto_registry::{ClientboundPacket, ProtocolTables, ProtocolVersion, ServerboundPacket};
pub use mcproto_registry::packets;

pub use mcproto_utils::codec::{BlockPos, PackedPos, VarInt, VarLong};
pub use mcproto_utils::{ReadingError, WritingError};
