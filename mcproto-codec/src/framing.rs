//! The framing layer (`spec.md` §4.5): length-prefixed frames with an
//! optional zlib compression envelope, over a streaming buffer that
//! supports snapshot/restore for partial reads.
use std::io::{Cursor, Read, Write};

use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use mcproto_utils::FrontVec;
use mcproto_utils::codec::VarInt;
use mcproto_utils::serial::{ReadFrom, WriteTo};

use crate::error::PacketError;

/// Compaction threshold: once the consumed prefix exceeds this many bytes,
/// the unconsumed tail is copied to the front and the cursor reset. Bounds
/// memory growth under a long-lived connection.
const COMPACTION_THRESHOLD: usize = 16 * 1024;

/// An append-only byte window with a read cursor, as described in `spec.md`
/// §3. `snapshot`/`restore` let the frame reader back out of a partial read
/// without losing already-buffered bytes.
#[derive(Debug, Default)]
pub struct ReadBuffer {
    buf: Vec<u8>,
    pos: usize,
}

/// An opaque cursor returned by [`ReadBuffer::snapshot`].
#[derive(Debug, Clone, Copy)]
pub struct Snapshot(usize);

impl ReadBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends freshly received bytes to the tail.
    pub fn append(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Returns the unconsumed bytes, compacting first if the consumed
    /// prefix has grown past [`COMPACTION_THRESHOLD`].
    fn compact_if_needed(&mut self) {
        if self.pos >= COMPACTION_THRESHOLD {
            self.buf.drain(0..self.pos);
            self.pos = 0;
        }
    }

    fn remaining(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    /// Captures the current read position.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.pos)
    }

    /// Rewinds the read position to a prior [`Snapshot`].
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.pos = snapshot.0;
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
    }
}

fn read_varint_prefix(data: &[u8]) -> Option<(i32, usize)> {
    let mut val: i32 = 0;
    for i in 0..VarInt::MAX_SIZE {
        let byte = *data.get(i)?;
        val |= (i32::from(byte) & 0x7F) << (i * 7);
        if byte & 0x80 == 0 {
            return Some((val, i + 1));
        }
    }
    None
}

/// Encodes a `VarInt` to its own byte vector, for splicing into a
/// [`FrontVec`]'s reserved front space.
fn encode_varint(value: i32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(VarInt::MAX_SIZE);
    VarInt(value).write(&mut buf).expect("writing to a Vec never fails");
    buf
}

/// Attempts to extract one frame's decompressed body from `rb`.
///
/// `threshold` mirrors the endpoint's current compression threshold:
/// `None` means compression is off. Returns `Ok(None)` when the buffer
/// doesn't yet hold a whole frame ("need more data" — recovered locally,
/// not surfaced); the read position is left exactly where it was.
pub fn read_frame(rb: &mut ReadBuffer, threshold: Option<u32>) -> Result<Option<Vec<u8>>, PacketError> {
    let snapshot = rb.snapshot();

    let Some((total_size, total_size_len)) = read_varint_prefix(rb.remaining()) else {
        rb.restore(snapshot);
        return Ok(None);
    };
    let total_size = total_size as usize;

    if rb.remaining().len() < total_size_len + total_size {
        rb.restore(snapshot);
        return Ok(None);
    }

    rb.advance(total_size_len);
    let frame_bytes = rb.remaining()[..total_size].to_vec();
    rb.advance(total_size);
    rb.compact_if_needed();

    let Some(threshold) = threshold else {
        return Ok(Some(frame_bytes));
    };

    let mut cursor = Cursor::new(frame_bytes.as_slice());
    let data_length = VarInt::read(&mut cursor)?.0;
    let consumed = cursor.position() as usize;
    let body = &frame_bytes[consumed..];

    if data_length == 0 {
        if body.len() >= threshold as usize {
            return Err(PacketError::ProtocolViolation(format!(
                "uncompressed body of {} bytes is not below the compression threshold {threshold}",
                body.len()
            )));
        }
        return Ok(Some(body.to_vec()));
    }

    if data_length < 0 {
        return Err(PacketError::ProtocolViolation(format!(
            "negative data length {data_length} in compressed frame"
        )));
    }

    let mut decompressed = Vec::with_capacity(data_length as usize);
    ZlibDecoder::new(body).read_to_end(&mut decompressed).map_err(|err| {
        log::warn!("zlib decompression failed: {err}");
        PacketError::ProtocolViolation(format!("zlib decompression failed: {err}"))
    })?;

    if decompressed.len() != data_length as usize {
        return Err(PacketError::ProtocolViolation(format!(
            "declared data length {data_length} does not match decompressed length {}",
            decompressed.len()
        )));
    }
    if decompressed.len() < threshold as usize {
        return Err(PacketError::ProtocolViolation(format!(
            "decompressed body of {} bytes is below the compression threshold {threshold}",
            decompressed.len()
        )));
    }

    log::trace!("decompressed frame: {} -> {} bytes", body.len(), decompressed.len());
    Ok(Some(decompressed))
}

/// Serializes one frame of `body` (already `varint packet_id` + payload)
/// into `writer`, applying the compression envelope described in `spec.md`
/// §4.5 when `threshold` is set.
pub fn write_frame(writer: &mut impl Write, body: &[u8], threshold: Option<u32>) -> Result<(), PacketError> {
    let Some(threshold) = threshold else {
        let mut framed = FrontVec::new(VarInt::MAX_SIZE);
        framed.extend_from_slice(body);
        framed.set_in_front(&encode_varint(body.len() as i32));
        writer.write_all(&framed)?;
        return Ok(());
    };

    if body.len() >= threshold as usize {
        let mut compressed = Vec::new();
        {
            let mut encoder = ZlibEncoder::new(&mut compressed, Compression::default());
            encoder
                .write_all(body)
                .map_err(|err| PacketError::ProtocolViolation(format!("zlib compression failed: {err}")))?;
            encoder
                .finish()
                .map_err(|err| PacketError::ProtocolViolation(format!("zlib compression failed: {err}")))?;
        }

        let data_len_bytes = encode_varint(body.len() as i32);
        let total = data_len_bytes.len() + compressed.len();

        let mut framed = FrontVec::new(VarInt::MAX_SIZE * 2);
        framed.extend_from_slice(&compressed);
        framed.set_in_front(&data_len_bytes);
        framed.set_in_front(&encode_varint(total as i32));
        writer.write_all(&framed)?;
    } else {
        let mut framed = FrontVec::new(VarInt::MAX_SIZE * 2);
        framed.extend_from_slice(body);
        framed.set_in_front(&encode_varint(0));
        let total = VarInt::written_size(0) + body.len();
        framed.set_in_front(&encode_varint(total as i32));
        writer.write_all(&framed)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncompressed_frame_round_trips() {
        let body = vec![0x00, 0x2f];
        let mut out = Vec::new();
        write_frame(&mut out, &body, None).unwrap();

        let mut rb = ReadBuffer::new();
        rb.append(&out);
        let frame = read_frame(&mut rb, None).unwrap().unwrap();
        assert_eq!(frame, body);
    }

    #[test]
    fn need_more_data_then_completes_after_append() {
        let body = vec![0xAB; 300];
        let mut out = Vec::new();
        write_frame(&mut out, &body, None).unwrap();

        let mut rb = ReadBuffer::new();
        rb.append(&out[..out.len() - 1]);
        assert!(read_frame(&mut rb, None).unwrap().is_none());

        rb.append(&out[out.len() - 1..]);
        let frame = read_frame(&mut rb, None).unwrap().unwrap();
        assert_eq!(frame, body);
    }

    #[test]
    fn compression_boundary_small_body_is_sent_uncompressed() {
        let body = vec![1u8; 10];
        let mut out = Vec::new();
        write_frame(&mut out, &body, Some(256)).unwrap();

        let mut rb = ReadBuffer::new();
        rb.append(&out);
        let frame = read_frame(&mut rb, Some(256)).unwrap().unwrap();
        assert_eq!(frame, body);
    }

    #[test]
    fn compression_boundary_large_body_is_compressed() {
        let body = vec![7u8; 1024];
        let mut out = Vec::new();
        write_frame(&mut out, &body, Some(256)).unwrap();

        // second byte of the frame (after the outer size varint) is the
        // data_length varint; it must be non-zero, signalling compression.
        let mut rb = ReadBuffer::new();
        rb.append(&out);
        let frame = read_frame(&mut rb, Some(256)).unwrap().unwrap();
        assert_eq!(frame, body);
    }

    #[test]
    fn framing_is_idempotent_when_split_at_any_boundary() {
        let bodies = [vec![1u8, 2, 3], vec![4u8; 50], vec![5u8; 500]];
        let mut stream = Vec::new();
        for body in &bodies {
            write_frame(&mut stream, body, None).unwrap();
        }

        for split in 0..stream.len() {
            let mut rb = ReadBuffer::new();
            rb.append(&stream[..split]);
            rb.append(&stream[split..]);
            let mut decoded = Vec::new();
            while let Some(frame) = read_frame(&mut rb, None).unwrap() {
                decoded.push(frame);
            }
            assert_eq!(decoded, bodies);
        }
    }
}
