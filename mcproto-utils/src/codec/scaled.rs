//! Scaled fixed-point coordinate primitives (`spec.md` §4.1: `int8`,
//! `int32`, `byte32`). Each wraps a signed integer on the wire whose
//! semantic value is `wire / N` on read and `trunc(value * N)` on write —
//! rounding truncates toward zero, per the specification's Open Question on
//! `write_int8`/`write_int32`/`write_byte32`: these write directly through
//! the passed writer, they do not return a detached byte string.
use std::io::{Cursor, Write};

use crate::error::{ReadingError, WritingError};
use crate::serial::{ReadFrom, WriteTo};

macro_rules! scaled_fixed_point {
    ($name:ident, $wire:ty, $factor:expr) => {
        /// Fixed-point coordinate, see module docs for the scale and wire width.
        #[derive(Debug, Copy, Clone, PartialEq, Default)]
        pub struct $name(pub f64);

        impl ReadFrom for $name {
            fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
                let wire = <$wire>::read(data)?;
                Ok(Self(f64::from(wire) / $factor as f64))
            }
        }

        impl WriteTo for $name {
            fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
                let wire = (self.0 * $factor as f64).trunc() as $wire;
                wire.write(writer)
            }
        }

        impl From<f64> for $name {
            fn from(value: f64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

scaled_fixed_point!(Int8, i32, 8);
scaled_fixed_point!(Int32, i32, 32);
scaled_fixed_point!(Byte32, i8, 32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_on_multiples_of_the_scale_and_truncates_otherwise() {
        for (value, factor_expected) in [(1.0_f64, 8i32), (2.5, 20), (-1.0, -8)] {
            let mut buf = Vec::new();
            Int8(value).write(&mut buf).unwrap();
            let mut cursor = Cursor::new(buf.as_slice());
            let wire = i32::read(&mut cursor).unwrap();
            assert_eq!(wire, factor_expected);
        }

        // 1/3 is not representable exactly at scale 32; truncation toward
        // zero means the written value rounds down in magnitude.
        let mut buf = Vec::new();
        Byte32(1.0 / 3.0).write(&mut buf).unwrap();
        assert_eq!(buf, vec![10]); // trunc(32/3) == 10
    }

    #[test]
    fn round_trip_on_exact_multiples() {
        let mut buf = Vec::new();
        Int32(4.0).write(&mut buf).unwrap();
        let mut cursor = Cursor::new(buf.as_slice());
        let back = Int32::read(&mut cursor).unwrap();
        assert_eq!(back.0, 4.0);
    }
}
