//! Protocol version 1: `based_on(0)` with no overrides — the original
//! source's `protocol(1)` registers nothing beyond what `protocol(0)`
//! already has.
use super::v0;
use crate::table::ProtocolTables;
use crate::{ClientboundPacket, ServerboundPacket};

pub fn build() -> ProtocolTables<ServerboundPacket, ClientboundPacket> {
    ProtocolTables::based_on(&v0::build())
}
