//! The `HANDSHAKE` state (`spec.md` §4.8, v0): one packet, always
//! serverbound, grounded on `original_source/fastmc/proto.py`'s
//! `protocol(0).state(0).from_client(0x00, "Handshake", ...)`.
use mcproto_codec::packet::PacketId;
use mcproto_macros::{ReadFrom, WriteTo};

/// `protocol_version / server_address / server_port / next_state`, exactly
/// as the original source's field-list DSL spells it.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct Handshake {
    #[strategy(VarInt)]
    pub protocol_version: i32,
    #[strategy(Prefixed)]
    pub server_address: String,
    pub server_port: u16,
    #[strategy(VarInt)]
    pub next_state: i32,
}

impl PacketId for Handshake {
    fn packet_id(&self) -> i32 {
        0x00
    }
}
