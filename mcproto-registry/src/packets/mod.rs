//! The concrete packet catalog (`spec.md` C8): one module per protocol
//! state, plus the top-level tagged unions every version's
//! [`crate::table::ProtocolTables`] is built from.
pub mod handshake;
pub mod login;
pub mod play;
pub mod play_composite;
pub mod status;

use mcproto_codec::packet::PacketId;

pub use handshake::Handshake;
pub use login::{LoginClientbound, LoginServerbound};
pub use play::{PlayClientbound, PlayServerbound};
pub use status::{StatusClientbound, StatusServerbound};

/// Every packet a client sends, across all four states.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerboundPacket {
    Handshake(Handshake),
    Status(StatusServerbound),
    Login(LoginServerbound),
    Play(PlayServerbound),
}

impl PacketId for ServerboundPacket {
    fn packet_id(&self) -> i32 {
        match self {
            Self::Handshake(p) => p.packet_id(),
            Self::Status(p) => p.packet_id(),
            Self::Login(p) => p.packet_id(),
            Self::Play(p) => p.packet_id(),
        }
    }
}

/// Every packet a server sends, across all four states (`HANDSHAKE` has no
/// clientbound packets).
#[derive(Debug, Clone, PartialEq)]
pub enum ClientboundPacket {
    Status(StatusClientbound),
    Login(LoginClientbound),
    Play(PlayClientbound),
}

impl PacketId for ClientboundPacket {
    fn packet_id(&self) -> i32 {
        match self {
            Self::Status(p) => p.packet_id(),
            Self::Login(p) => p.packet_id(),
            Self::Play(p) => p.packet_id(),
        }
    }
}
