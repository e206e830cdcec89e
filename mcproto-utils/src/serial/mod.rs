//! Traits for serializing and deserializing wire values.
use std::io::{Cursor, Write};

use crate::error::{ReadingError, WritingError};

/// Reading prefixed data (length-prefixed strings, vectors, arrays).
pub mod prefixed_read;
/// Writing prefixed data.
pub mod prefixed_write;
/// `ReadFrom` impls for primitive and common types.
pub mod read;
/// `WriteTo` impls for primitive and common types.
pub mod write;

pub use write::OptionalNbt;

/// Default bound on a length prefix when the caller doesn't supply one.
/// Chosen generously: the framing layer (`mcproto-codec`) is what actually
/// protects against hostile lengths, this is a sane backstop for standalone
/// codec use.
pub const DEFAULT_BOUND: usize = i16::MAX as usize;

/// Reads `Self` from a byte cursor.
pub trait ReadFrom: Sized {
    /// Reads one value, consuming bytes from `data`.
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError>;
}

/// Writes `Self` to a writer.
pub trait WriteTo {
    /// Writes one value to `writer`.
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError>;
}

/// Reads a length-prefixed sequence, where the length prefix's wire type is
/// chosen by the caller (usually `VarInt`).
pub trait PrefixedRead: Sized {
    /// Reads a length-prefixed value, rejecting a declared length over `bound`.
    fn read_prefixed_bound<P>(data: &mut Cursor<&[u8]>, bound: usize) -> Result<Self, ReadingError>
    where
        P: TryInto<usize> + ReadFrom;

    /// Reads a length-prefixed value using [`DEFAULT_BOUND`].
    fn read_prefixed<P>(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError>
    where
        P: TryInto<usize> + ReadFrom,
    {
        Self::read_prefixed_bound::<P>(data, DEFAULT_BOUND)
    }
}

/// Writes a length-prefixed sequence, where the length prefix's wire type is
/// chosen by the caller (usually `VarInt`).
pub trait PrefixedWrite {
    /// Writes a length-prefixed value, rejecting a length over `bound`.
    fn write_prefixed_bound<P>(&self, writer: &mut impl Write, bound: usize) -> Result<(), WritingError>
    where
        P: TryFrom<usize> + WriteTo;

    /// Writes a length-prefixed value using [`DEFAULT_BOUND`].
    fn write_prefixed<P>(&self, writer: &mut impl Write) -> Result<(), WritingError>
    where
        P: TryFrom<usize> + WriteTo,
    {
        self.write_prefixed_bound::<P>(writer, DEFAULT_BOUND)
    }
}
