#![allow(missing_docs, clippy::disallowed_types)]
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::io::Write;

use simdnbt::owned::{NbtCompound, NbtTag};
use uuid::Uuid;

use crate::codec::VarInt;
use crate::error::WritingError;
use crate::serial::{PrefixedWrite, WriteTo};

impl WriteTo for bool {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        u8::from(*self).write(writer)
    }
}

impl WriteTo for u8 {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        writer.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl WriteTo for u16 {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        writer.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl WriteTo for u32 {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        writer.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl WriteTo for u64 {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        writer.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl WriteTo for i8 {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        writer.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl WriteTo for i16 {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        writer.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl WriteTo for i32 {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        writer.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl WriteTo for i64 {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        writer.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl WriteTo for f32 {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        writer.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl WriteTo for f64 {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        writer.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl<T: WriteTo> WriteTo for Option<T> {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        if let Some(value) = self {
            true.write(writer)?;
            value.write(writer)
        } else {
            false.write(writer)
        }
    }
}

impl<T: WriteTo, const N: usize> WriteTo for [T; N] {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        for item in self {
            item.write(writer)?;
        }
        Ok(())
    }
}

impl<T: WriteTo, Z: WriteTo> WriteTo for (T, Z) {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.0.write(writer)?;
        self.1.write(writer)
    }
}

impl<K: WriteTo, V: WriteTo, S: BuildHasher> WriteTo for HashMap<K, V, S> {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        VarInt(self.len() as i32).write(writer)?;
        for (key, value) in self {
            key.write(writer)?;
            value.write(writer)?;
        }
        Ok(())
    }
}

impl<T: WriteTo> WriteTo for Vec<T> {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.write_prefixed::<VarInt>(writer)
    }
}

impl WriteTo for Uuid {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        let (most_significant_bits, least_significant_bits) = self.as_u64_pair();
        most_significant_bits.write(writer)?;
        least_significant_bits.write(writer)
    }
}

impl WriteTo for NbtTag {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        let mut buf = Vec::new();
        simdnbt::owned::NbtTag::write(self, &mut buf);
        writer.write_all(&buf)?;
        Ok(())
    }
}

impl WriteTo for NbtCompound {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        let mut buf = Vec::new();
        simdnbt::owned::NbtCompound::write(self, &mut buf);
        writer.write_all(&buf)?;
        Ok(())
    }
}

/// Wrapper for optional NBT that uses the protocol format (END tag for
/// absent) rather than the boolean-prefixed format `Option<T>` writes.
///
/// Used for the 1.8 Slot's NBT field (`spec.md` §4.2): present is the
/// compound tag type byte (`0x0A`) followed by the compound's contents;
/// absent is a single END tag byte (`0x00`).
#[derive(Debug, Clone)]
pub struct OptionalNbt(pub Option<NbtCompound>);

impl WriteTo for OptionalNbt {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        match &self.0 {
            Some(compound) => {
                writer.write_all(&[0x0A])?;
                let mut buf = Vec::new();
                simdnbt::owned::NbtCompound::write(compound, &mut buf);
                writer.write_all(&buf)?;
            }
            None => writer.write_all(&[0x00])?,
        }
        Ok(())
    }
}

impl From<Option<NbtCompound>> for OptionalNbt {
    fn from(opt: Option<NbtCompound>) -> Self {
        Self(opt)
    }
}

impl WriteTo for serde_json::Value {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        crate::codec::primitive::write_json(self, writer, crate::serial::DEFAULT_BOUND)
    }
}
