//! Protocol version 47 (`1.8`): `based_on(5)`, overriding every packet
//! whose wire shape changed for 1.8, plus `SetCompression` — `spec.md` §6
//! has the server send it both as `LOGIN` clientbound `0x03` and as `PLAY`
//! clientbound `0x46` (the id §8 scenario 4 tests), so both catalog slots
//! are registered here against the one shared struct. Everything else
//! keeps version 5's numbering; see `DESIGN.md`'s Open Question decision
//! on the v47 catalog gap.
use super::{reg, v5};
use crate::packets::login::LoginClientbound as LC;
use crate::packets::play::{PlayClientbound as PC, SetCompression};
use crate::packets::play_composite::{EntityEquipment, MapChunkBulk, PlayerListItem, SetSlot};
use crate::table::ProtocolTables;
use crate::{ClientboundPacket, ServerboundPacket};

type CP = ClientboundPacket;

pub fn build() -> ProtocolTables<ServerboundPacket, ClientboundPacket> {
    let mut t = ProtocolTables::based_on(&v5::build());

    reg!(t.login_clientbound, 0x03, |p| CP::Login(LC::SetCompression(p)), CP::Login(LC::SetCompression(inner)) => inner, SetCompression);

    reg!(t.play_clientbound, 0x04, |p| CP::Play(PC::EntityEquipment(p)), CP::Play(PC::EntityEquipment(inner)) => inner, EntityEquipment);
    reg!(t.play_clientbound, 0x26, |p| CP::Play(PC::MapChunkBulk(p)), CP::Play(PC::MapChunkBulk(inner)) => inner, MapChunkBulk);
    reg!(t.play_clientbound, 0x2F, |p| CP::Play(PC::SetSlot(p)), CP::Play(PC::SetSlot(inner)) => inner, SetSlot);
    reg!(t.play_clientbound, 0x38, |p| CP::Play(PC::PlayerListItem(p)), CP::Play(PC::PlayerListItem(inner)) => inner, PlayerListItem);
    reg!(t.play_clientbound, 0x46, |p| CP::Play(PC::SetCompression(p)), CP::Play(PC::SetCompression(inner)) => inner, SetCompression);

    t
}
