//! Protocol version 2: `based_on(1)` with no overrides.
use super::v1;
use crate::table::ProtocolTables;
use crate::{ClientboundPacket, ServerboundPacket};

pub fn build() -> ProtocolTables<ServerboundPacket, ClientboundPacket> {
    ProtocolTables::based_on(&v1::build())
}
