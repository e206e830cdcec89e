//! A concrete schema registry for the Minecraft wire protocol (`spec.md`
//! C4/C8): the packet catalog in [`packets`], the per-version tables in
//! [`versions`], and [`PacketRegistry`] glue tying [`table::ProtocolTables`]
//! to [`mcproto_codec::endpoint::Endpoint`].
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod packets;
pub mod table;
pub mod versions;

use mcproto_codec::endpoint::{Direction, State};
use mcproto_codec::error::PacketError;
use mcproto_codec::packet::{PacketId, PacketRegistry, UnknownPacketId};
pub use packets::{ClientboundPacket, ServerboundPacket};
pub use table::ProtocolTables;
pub use versions::ProtocolVersion;

type Tables = ProtocolTables<ServerboundPacket, ClientboundPacket>;

fn serverbound_table(tables: &Tables, state: State) -> &table::PacketTable<ServerboundPacket> {
    match state {
        State::Handshake => &tables.handshake_serverbound,
        State::Status => &tables.status_serverbound,
        State::Login => &tables.login_serverbound,
        State::Play => &tables.play_serverbound,
    }
}

fn clientbound_table(tables: &Tables, state: State) -> Option<&table::PacketTable<ClientboundPacket>> {
    match state {
        State::Handshake => None,
        State::Status => Some(&tables.status_clientbound),
        State::Login => Some(&tables.login_clientbound),
        State::Play => Some(&tables.play_clientbound),
    }
}

impl PacketRegistry<ServerboundPacket> for Tables {
    fn decode(
        &self,
        id: i32,
        state: State,
        _direction: Direction,
        data: &mut std::io::Cursor<&[u8]>,
    ) -> Result<ServerboundPacket, PacketError> {
        Ok(serverbound_table(self, state).decode(id, data)?)
    }

    fn encode(
        &self,
        packet: &ServerboundPacket,
        state: State,
        _direction: Direction,
        out: &mut Vec<u8>,
    ) -> Result<(), PacketError> {
        Ok(serverbound_table(self, state).encode(packet.packet_id(), packet, out)?)
    }

    fn contains(&self, id: i32, state: State, _direction: Direction) -> bool {
        serverbound_table(self, state).contains(id)
    }
}

impl PacketRegistry<ClientboundPacket> for Tables {
    fn decode(
        &self,
        id: i32,
        state: State,
        direction: Direction,
        data: &mut std::io::Cursor<&[u8]>,
    ) -> Result<ClientboundPacket, PacketError> {
        let table = clientbound_table(self, state).ok_or(UnknownPacketId { id, state, direction })?;
        Ok(table.decode(id, data)?)
    }

    fn encode(
        &self,
        packet: &ClientboundPacket,
        state: State,
        direction: Direction,
        out: &mut Vec<u8>,
    ) -> Result<(), PacketError> {
        let id = packet.packet_id();
        let table = clientbound_table(self, state).ok_or(UnknownPacketId { id, state, direction })?;
        Ok(table.encode(id, packet, out)?)
    }

    fn contains(&self, id: i32, state: State, direction: Direction) -> bool {
        clientbound_table(self, state).is_some_and(|t| t.contains(id))
    }
}
