//! The `STATUS` state (`spec.md` §4.8, v0): server-list ping, grounded on
//! `original_source/fastmc/proto.py`'s `protocol(0).state(1)` block.
use mcproto_codec::packet::PacketId;
use mcproto_macros::{ReadFrom, WriteTo};

/// Clientbound `0x00 Response`: a JSON server-list-ping payload.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct StatusResponse {
    pub response: serde_json::Value,
}

/// Clientbound `0x01 Pong`: echoes back the client's ping payload.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct StatusPong {
    pub time: i64,
}

/// Serverbound `0x00 Request`: no fields.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct StatusRequestPacket {}

/// Serverbound `0x01 Ping`: an opaque payload the server must echo back.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct StatusPing {
    pub time: i64,
}

/// Every packet a client sends in `STATUS`.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusServerbound {
    Request(StatusRequestPacket),
    Ping(StatusPing),
}

impl PacketId for StatusServerbound {
    fn packet_id(&self) -> i32 {
        match self {
            Self::Request(_) => 0x00,
            Self::Ping(_) => 0x01,
        }
    }
}

/// Every packet a server sends in `STATUS`.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusClientbound {
    Response(StatusResponse),
    Pong(StatusPong),
}

impl PacketId for StatusClientbound {
    fn packet_id(&self) -> i32 {
        match self {
            Self::Response(_) => 0x00,
            Self::Pong(_) => 0x01,
        }
    }
}
