//! Protocol version 4 (`1.7.2`): `based_on(3)`, overriding `MultiBlockChange`
//! (clientbound `0x22`) from the flat packed-`int` array to the varint-
//! counted `BlockChange` list — the one change `protocol(4)` makes over
//! `protocol(3)` in the original source, and the packet `spec.md` §8
//! scenario 6 exercises by id.
use super::{reg, v3};
use crate::packets::play_composite::MultiBlockChange;
use crate::table::ProtocolTables;
use crate::{ClientboundPacket, ServerboundPacket};

type CP = ClientboundPacket;

pub fn build() -> ProtocolTables<ServerboundPacket, ClientboundPacket> {
    let mut t = ProtocolTables::based_on(&v3::build());

    reg!(
        t.play_clientbound, 0x22,
        |p| CP::Play(crate::packets::play::PlayClientbound::MultiBlockChange(p)),
        CP::Play(crate::packets::play::PlayClientbound::MultiBlockChange(inner)) => inner,
        MultiBlockChange
    );

    t
}
