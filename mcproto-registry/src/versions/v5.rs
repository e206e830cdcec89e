//! Protocol version 5 (`1.7.6`): `based_on(4)` with no overrides — the wire
//! protocol didn't change in this patch range (see `DESIGN.md`'s Open
//! Question decision on the v47 catalog gap).
use super::v4;
use crate::table::ProtocolTables;
use crate::{ClientboundPacket, ServerboundPacket};

pub fn build() -> ProtocolTables<ServerboundPacket, ClientboundPacket> {
    ProtocolTables::based_on(&v4::build())
}
