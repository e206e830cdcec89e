//! The `LOGIN` state (`spec.md` §4.8): v0 packets grounded on
//! `original_source/fastmc/proto.py`'s `protocol(0).state(2)` block.
//! `SetCompression` is defined once in [`super::play`] and registered here
//! too — `spec.md` §6 sends it both as `LOGIN` clientbound `0x03` and as
//! `PLAY` clientbound `0x46`.
use mcproto_codec::packet::PacketId;
use mcproto_macros::{ReadFrom, WriteTo};

pub use super::play::SetCompression;

/// Clientbound `0x00 Disconnect`: a JSON reason, sent before the
/// connection is closed.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct LoginDisconnect {
    pub reason: serde_json::Value,
}

/// Clientbound `0x01 EncryptionRequest`: starts the shared-secret exchange.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct EncryptionRequest {
    #[strategy(Prefixed)]
    pub server_id: String,
    #[strategy(Prefixed(i16))]
    pub public_key: Vec<u8>,
    #[strategy(Prefixed(i16))]
    pub challenge_token: Vec<u8>,
}

/// Clientbound `0x02 LoginSuccess`: login is complete, switch to `PLAY`.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct LoginSuccess {
    #[strategy(Prefixed)]
    pub uuid: String,
    #[strategy(Prefixed)]
    pub username: String,
}

/// Serverbound `0x00 LoginStart`: the player's chosen username.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct LoginStart {
    #[strategy(Prefixed)]
    pub name: String,
}

/// Serverbound `0x01 EncryptionResponse`: completes the shared-secret
/// exchange, RSA-encrypted under the server's public key.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct EncryptionResponse {
    #[strategy(Prefixed(i16))]
    pub shared_secret: Vec<u8>,
    #[strategy(Prefixed(i16))]
    pub response_token: Vec<u8>,
}

/// Every packet a server sends in `LOGIN`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginClientbound {
    Disconnect(LoginDisconnect),
    EncryptionRequest(EncryptionRequest),
    LoginSuccess(LoginSuccess),
    SetCompression(SetCompression),
}

impl PacketId for LoginClientbound {
    fn packet_id(&self) -> i32 {
        match self {
            Self::Disconnect(_) => 0x00,
            Self::EncryptionRequest(_) => 0x01,
            Self::LoginSuccess(_) => 0x02,
            Self::SetCompression(_) => 0x03,
        }
    }
}

/// Every packet a client sends in `LOGIN`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginServerbound {
    LoginStart(LoginStart),
    EncryptionResponse(EncryptionResponse),
}

impl PacketId for LoginServerbound {
    fn packet_id(&self) -> i32 {
        match self {
            Self::LoginStart(_) => 0x00,
            Self::EncryptionResponse(_) => 0x01,
        }
    }
}
