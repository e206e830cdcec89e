//! The version catalog (`spec.md` C8): one module per protocol version,
//! built with [`based_on`](crate::table::ProtocolTables::based_on) chaining
//! the way `original_source/fastmc/proto.py`'s `protocol(v).based_on(u)`
//! does. `spec.md` names five schema-catalog versions (`0, 1, 2, 3, 4`); `5`
//! and `47` are carried too, to reach the 1.8 (`47`) packets `spec.md` §8
//! tests by id — see `DESIGN.md`'s Open Question decision on the v47 gap.
mod v0;
mod v1;
mod v2;
mod v3;
mod v4;
mod v47;
mod v5;

use crate::table::ProtocolTables;
use crate::{ClientboundPacket, ServerboundPacket};

type Tables = ProtocolTables<ServerboundPacket, ClientboundPacket>;

/// A handshake protocol version number (`spec.md` §3). Wraps the bare `i32`
/// the wire carries so a version and, say, an entity id can't be passed to
/// the wrong parameter by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProtocolVersion(i32);

impl ProtocolVersion {
    /// Wraps a raw version number as it appears on the wire.
    #[must_use]
    pub const fn new(version: i32) -> Self {
        Self(version)
    }

    /// The raw version number.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for ProtocolVersion {
    fn from(version: i32) -> Self {
        Self(version)
    }
}

impl From<ProtocolVersion> for i32 {
    fn from(version: ProtocolVersion) -> Self {
        version.0
    }
}

impl std::fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Builds the tables for a known protocol version, or `None` if `version`
/// isn't in the catalog. Mirrors `get_protocol_version(v)` in the original
/// source.
#[must_use]
pub fn protocol(version: impl Into<ProtocolVersion>) -> Option<Tables> {
    match version.into().get() {
        0 => Some(v0::build()),
        1 => Some(v1::build()),
        2 => Some(v2::build()),
        3 => Some(v3::build()),
        4 => Some(v4::build()),
        5 => Some(v5::build()),
        47 => Some(v47::build()),
        _ => None,
    }
}

/// Registers one packet into a table, wiring its decode/encode closures
/// through the given wrap/pattern pair. `$wrap` turns the decoded struct
/// into the table's packet enum; `$pat => $inner` destructures it back out
/// for encode, panicking if `encode` is ever called with the wrong variant
/// for this id (a registry bug, not a wire-data problem).
macro_rules! reg {
    ($table:expr, $id:expr, $wrap:expr, $pat:pat => $inner:expr, $ty:ty) => {
        $table.add_packet(
            $id,
            |data| Ok($wrap(<$ty as mcproto_utils::serial::ReadFrom>::read(data)?)),
            |packet, out| match packet {
                $pat => mcproto_utils::serial::WriteTo::write($inner, out),
                _ => unreachable!("packet id {} dispatched to the wrong variant", $id),
            },
        );
    };
}

pub(crate) use reg;
