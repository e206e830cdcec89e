#![allow(missing_docs)]
use std::io::{Cursor, Read};

use crate::error::ReadingError;
use crate::serial::{PrefixedRead, ReadFrom};

impl PrefixedRead for String {
    fn read_prefixed_bound<P>(data: &mut Cursor<&[u8]>, bound: usize) -> Result<Self, ReadingError>
    where
        P: TryInto<usize> + ReadFrom,
    {
        let len = P::read(data)?
            .try_into()
            .map_err(|_| ReadingError::Message("length prefix does not fit usize".into()))?;
        if len > bound {
            return Err(ReadingError::TooLarge(format!(
                "string of {len} bytes exceeds bound {bound}"
            )));
        }

        let mut buf = vec![0u8; len];
        data.read_exact(&mut buf)
            .map_err(|_| ReadingError::CleanEof("string body".into()))?;
        String::from_utf8(buf).map_err(|err| ReadingError::Message(err.to_string()))
    }
}

impl<T: ReadFrom> PrefixedRead for Vec<T> {
    fn read_prefixed_bound<P>(data: &mut Cursor<&[u8]>, bound: usize) -> Result<Self, ReadingError>
    where
        P: TryInto<usize> + ReadFrom,
    {
        let len = P::read(data)?
            .try_into()
            .map_err(|_| ReadingError::Message("length prefix does not fit usize".into()))?;
        if len > bound {
            return Err(ReadingError::TooLarge(format!(
                "sequence of {len} elements exceeds bound {bound}"
            )));
        }

        let mut out = Vec::with_capacity(len.min(4096));
        for _ in 0..len {
            out.push(T::read(data)?);
        }
        Ok(out)
    }
}

/// Reads a raw byte array whose length prefix's wire type is `P`.
pub fn read_byte_vec<P>(data: &mut Cursor<&[u8]>, bound: usize) -> Result<Vec<u8>, ReadingError>
where
    P: TryInto<usize> + ReadFrom,
{
    let len = P::read(data)?
        .try_into()
        .map_err(|_| ReadingError::Message("length prefix does not fit usize".into()))?;
    if len > bound {
        return Err(ReadingError::TooLarge(format!(
            "byte array of {len} bytes exceeds bound {bound}"
        )));
    }

    let mut buf = vec![0u8; len];
    data.read_exact(&mut buf)
        .map_err(|_| ReadingError::CleanEof("byte array body".into()))?;
    Ok(buf)
}

impl<T: PrefixedRead> PrefixedRead for Option<T> {
    fn read_prefixed_bound<P>(data: &mut Cursor<&[u8]>, bound: usize) -> Result<Self, ReadingError>
    where
        P: TryInto<usize> + ReadFrom,
    {
        if bool::read(data)? {
            Ok(Some(T::read_prefixed_bound::<P>(data, bound)?))
        } else {
            Ok(None)
        }
    }
}
