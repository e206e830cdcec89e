//! Length-prefixed string/byte-array helpers, `json`, and `bytes_exhaustive`
//! (`spec.md` §4.1). Fixed-width numerics, `bool`, and `uuid` are covered by
//! the [`crate::serial`] `ReadFrom`/`WriteTo` impls; scaled fixed-point and
//! position primitives live in [`super::scaled`] and [`super::position`].
use std::io::{Cursor, Read, Write};

use crate::codec::VarInt;
use crate::error::{ReadingError, WritingError};
use crate::serial::{PrefixedRead, PrefixedWrite, ReadFrom, WriteTo};

/// `string`: `varint(len)` + UTF-8 bytes, bounded by `bound` bytes.
pub fn read_string(data: &mut Cursor<&[u8]>, bound: usize) -> Result<String, ReadingError> {
    String::read_prefixed_bound::<VarInt>(data, bound)
}

/// Writes a `string`.
pub fn write_string(value: &str, writer: &mut impl Write, bound: usize) -> Result<(), WritingError> {
    value.write_prefixed_bound::<VarInt>(writer, bound)
}

/// `short_string`: `short(len)` + UTF-8 bytes (used inside NBT).
pub fn read_short_string(data: &mut Cursor<&[u8]>, bound: usize) -> Result<String, ReadingError> {
    String::read_prefixed_bound::<i16>(data, bound)
}

/// Writes a `short_string`.
pub fn write_short_string(value: &str, writer: &mut impl Write, bound: usize) -> Result<(), WritingError> {
    value.write_prefixed_bound::<i16>(writer, bound)
}

/// `short_byte_array`: `short(len)` + opaque bytes.
pub fn read_short_byte_array(data: &mut Cursor<&[u8]>, bound: usize) -> Result<Vec<u8>, ReadingError> {
    crate::serial::prefixed_read::read_byte_vec::<i16>(data, bound)
}

/// Writes a `short_byte_array`.
pub fn write_short_byte_array(value: &[u8], writer: &mut impl Write, bound: usize) -> Result<(), WritingError> {
    value.write_prefixed_bound::<i16>(writer, bound)
}

/// `int_byte_array`: `int(len)` + opaque bytes.
pub fn read_int_byte_array(data: &mut Cursor<&[u8]>, bound: usize) -> Result<Vec<u8>, ReadingError> {
    crate::serial::prefixed_read::read_byte_vec::<i32>(data, bound)
}

/// Writes an `int_byte_array`.
pub fn write_int_byte_array(value: &[u8], writer: &mut impl Write, bound: usize) -> Result<(), WritingError> {
    value.write_prefixed_bound::<i32>(writer, bound)
}

/// `varint_byte_array`: `varint(len)` + opaque bytes.
pub fn read_varint_byte_array(data: &mut Cursor<&[u8]>, bound: usize) -> Result<Vec<u8>, ReadingError> {
    crate::serial::prefixed_read::read_byte_vec::<VarInt>(data, bound)
}

/// Writes a `varint_byte_array`.
pub fn write_varint_byte_array(value: &[u8], writer: &mut impl Write, bound: usize) -> Result<(), WritingError> {
    value.write_prefixed_bound::<VarInt>(writer, bound)
}

/// `bytes_exhaustive`: consume all remaining bytes of the current cursor.
///
/// Per the specification's Open Question, this is only safe because the
/// framing layer hands schema parsers a cursor over exactly one frame's
/// decompressed body — "exhaustive" means exhaustive of the packet, not of
/// a live stream.
pub fn read_bytes_exhaustive(data: &mut Cursor<&[u8]>) -> Result<Vec<u8>, ReadingError> {
    let mut buf = Vec::new();
    data.read_to_end(&mut buf)
        .map_err(|err| ReadingError::Message(err.to_string()))?;
    Ok(buf)
}

/// Writes raw bytes with no length prefix (the counterpart of
/// `bytes_exhaustive`: it relies on the frame wrapper to bound the reader).
pub fn write_bytes_exhaustive(value: &[u8], writer: &mut impl Write) -> Result<(), WritingError> {
    writer.write_all(value)?;
    Ok(())
}

/// `json`: a `string` whose contents are valid JSON.
pub fn read_json(data: &mut Cursor<&[u8]>, bound: usize) -> Result<serde_json::Value, ReadingError> {
    let text = read_string(data, bound)?;
    serde_json::from_str(&text).map_err(|err| ReadingError::Message(format!("invalid json: {err}")))
}

/// Writes a `json` value.
pub fn write_json(value: &serde_json::Value, writer: &mut impl Write, bound: usize) -> Result<(), WritingError> {
    let text = serde_json::to_string(value).map_err(|err| WritingError::Serde(err.to_string()))?;
    write_string(&text, writer, bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_round_trips() {
        let mut buf = Vec::new();
        write_string("localhost", &mut buf, 255).unwrap();
        assert_eq!(buf[0], 9); // varint(len) for a 9-byte string is one byte
        let mut cursor = Cursor::new(buf.as_slice());
        assert_eq!(read_string(&mut cursor, 255).unwrap(), "localhost");
    }

    #[test]
    fn bytes_exhaustive_consumes_to_the_end_of_the_cursor() {
        let data = [1u8, 2, 3, 4, 5];
        let mut cursor = Cursor::new(&data[..]);
        u8::read(&mut cursor).unwrap();
        assert_eq!(read_bytes_exhaustive(&mut cursor).unwrap(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn json_round_trips() {
        let value = serde_json::json!({"text": "hello"});
        let mut buf = Vec::new();
        write_json(&value, &mut buf, 32_767).unwrap();
        let mut cursor = Cursor::new(buf.as_slice());
        assert_eq!(read_json(&mut cursor, 32_767).unwrap(), value);
    }
}
