//! Wire codecs for the primitives named in the specification: `varint`,
//! fixed-width integers/floats (handled by `serial`), scaled fixed-point
//! coordinates, packed positions, strings, byte arrays, `json`, and the
//! `bytes_exhaustive` read-to-end primitive.

/// A variable-length signed integer (`varint`).
pub mod var_int;
/// A variable-length signed long (`varlong`); same shape as `var_int`, 64-bit.
pub mod var_long;

/// Scaled fixed-point coordinate primitives (`int8`, `int32`, `byte32`).
pub mod scaled;
/// Packed block-position primitive (`position_packed`) and its legacy
/// three-field form (`position`).
pub mod position;
/// Length-prefixed string, byte array, `json`, and `bytes_exhaustive` helpers.
pub mod primitive;

pub use position::{BlockPos, PackedPos};
pub use scaled::{Byte32, Int32, Int8};
pub use var_int::VarInt;
pub use var_long::VarLong;
