#![allow(missing_docs)]
use std::io::{Cursor, Read};

use uuid::Uuid;

use crate::error::ReadingError;
use crate::serial::ReadFrom;

fn read_exact<const N: usize>(data: &mut Cursor<&[u8]>, what: &str) -> Result<[u8; N], ReadingError> {
    let mut buf = [0u8; N];
    data.read_exact(&mut buf)
        .map_err(|_| ReadingError::CleanEof(what.to_string()))?;
    Ok(buf)
}

impl ReadFrom for bool {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let byte = u8::read(data)?;
        Ok(byte == 1)
    }
}

impl ReadFrom for u8 {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        Ok(Self::from_be_bytes(read_exact(data, "u8")?))
    }
}

impl ReadFrom for u16 {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        Ok(Self::from_be_bytes(read_exact(data, "u16")?))
    }
}

impl ReadFrom for u32 {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        Ok(Self::from_be_bytes(read_exact(data, "u32")?))
    }
}

impl ReadFrom for u64 {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        Ok(Self::from_be_bytes(read_exact(data, "u64")?))
    }
}

impl ReadFrom for i8 {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        Ok(Self::from_be_bytes(read_exact(data, "i8")?))
    }
}

impl ReadFrom for i16 {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        Ok(Self::from_be_bytes(read_exact(data, "i16")?))
    }
}

impl ReadFrom for i32 {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        Ok(Self::from_be_bytes(read_exact(data, "i32")?))
    }
}

impl ReadFrom for i64 {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        Ok(Self::from_be_bytes(read_exact(data, "i64")?))
    }
}

impl ReadFrom for f32 {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        Ok(Self::from_be_bytes(read_exact(data, "f32")?))
    }
}

impl ReadFrom for f64 {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        Ok(Self::from_be_bytes(read_exact(data, "f64")?))
    }
}

impl<T: ReadFrom> ReadFrom for Option<T> {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        if bool::read(data)? {
            Ok(Some(T::read(data)?))
        } else {
            Ok(None)
        }
    }
}

impl<T: ReadFrom + Copy + Default, const N: usize> ReadFrom for [T; N] {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let mut buf = [T::default(); N];
        for slot in &mut buf {
            *slot = T::read(data)?;
        }
        Ok(buf)
    }
}

impl<T: ReadFrom, Z: ReadFrom> ReadFrom for (T, Z) {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let first = T::read(data)?;
        let second = Z::read(data)?;
        Ok((first, second))
    }
}

impl ReadFrom for Uuid {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let most_significant_bits = u64::read(data)?;
        let least_significant_bits = u64::read(data)?;
        Ok(Uuid::from_u64_pair(most_significant_bits, least_significant_bits))
    }
}

impl ReadFrom for serde_json::Value {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        crate::codec::primitive::read_json(data, crate::serial::DEFAULT_BOUND)
    }
}
