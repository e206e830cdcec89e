//! Protocol version 3: `based_on(2)` with no overrides.
use super::v2;
use crate::table::ProtocolTables;
use crate::{ClientboundPacket, ServerboundPacket};

pub fn build() -> ProtocolTables<ServerboundPacket, ClientboundPacket> {
    ProtocolTables::based_on(&v2::build())
}
