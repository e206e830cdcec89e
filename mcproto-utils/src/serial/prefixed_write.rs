#![allow(missing_docs)]
use std::io::Write;

use crate::error::WritingError;
use crate::serial::{PrefixedWrite, WriteTo};

impl PrefixedWrite for String {
    fn write_prefixed_bound<P>(&self, writer: &mut impl Write, bound: usize) -> Result<(), WritingError>
    where
        P: TryFrom<usize> + WriteTo,
    {
        self.as_str().write_prefixed_bound::<P>(writer, bound)
    }
}

impl PrefixedWrite for str {
    fn write_prefixed_bound<P>(&self, writer: &mut impl Write, bound: usize) -> Result<(), WritingError>
    where
        P: TryFrom<usize> + WriteTo,
    {
        if self.len() > bound {
            return Err(WritingError::Message(format!(
                "string of {} bytes exceeds bound {bound}",
                self.len()
            )));
        }

        let len: P = self
            .len()
            .try_into()
            .map_err(|_| WritingError::Message("string length does not fit prefix type".into()))?;
        len.write(writer)?;
        writer.write_all(self.as_bytes())?;
        Ok(())
    }
}

impl<T: WriteTo> PrefixedWrite for Vec<T> {
    fn write_prefixed_bound<P>(&self, writer: &mut impl Write, bound: usize) -> Result<(), WritingError>
    where
        P: TryFrom<usize> + WriteTo,
    {
        self.as_slice().write_prefixed_bound::<P>(writer, bound)
    }
}

impl<T: WriteTo> PrefixedWrite for [T] {
    fn write_prefixed_bound<P>(&self, writer: &mut impl Write, bound: usize) -> Result<(), WritingError>
    where
        P: TryFrom<usize> + WriteTo,
    {
        if self.len() > bound {
            return Err(WritingError::Message(format!(
                "sequence of {} elements exceeds bound {bound}",
                self.len()
            )));
        }

        let len: P = self
            .len()
            .try_into()
            .map_err(|_| WritingError::Message("sequence length does not fit prefix type".into()))?;
        len.write(writer)?;

        for item in self {
            item.write(writer)?;
        }
        Ok(())
    }
}

impl<T: PrefixedWrite> PrefixedWrite for Option<T> {
    fn write_prefixed_bound<P>(&self, writer: &mut impl Write, bound: usize) -> Result<(), WritingError>
    where
        P: TryFrom<usize> + WriteTo,
    {
        if let Some(value) = self {
            true.write(writer)?;
            value.write_prefixed_bound::<P>(writer, bound)
        } else {
            false.write(writer)
        }
    }
}
