//! Wire primitives for the packet codec: varints, fixed-width numbers,
//! length-prefixed strings and byte arrays, scaled fixed-point coordinates,
//! packed positions, UUIDs, and the front-reservable write buffer used to
//! splice a frame length in after a packet body has already been serialized.

pub mod codec;
pub mod error;
pub mod front_vec;
pub mod serial;

pub use error::{ReadingError, WritingError};
pub use front_vec::FrontVec;
pub use serial::{PrefixedRead, PrefixedWrite, ReadFrom, WriteTo};
