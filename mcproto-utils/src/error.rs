//! Error kinds for the read/write boundary (§7 of the design: `NeedMoreData`
//! is not a variant here — it is represented by the absence of a value one
//! layer up, in the framing code that knows how to snapshot and restore).

use thiserror::Error;

/// Failure while decoding a primitive, composite, or packet value.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// Ran out of bytes while reading a fixed-size value.
    #[error("EOF: tried to read {0} but no bytes were left to consume")]
    CleanEof(String),
    /// A varint never terminated within its maximum byte count.
    #[error("incomplete: {0}")]
    Incomplete(String),
    /// A length prefix exceeded the bound the caller imposed.
    #[error("too large: {0}")]
    TooLarge(String),
    /// Any other malformed-value condition (bad UTF-8, bad JSON, out-of-range
    /// tag discriminant, ...).
    #[error("{0}")]
    Message(String),
}

/// Failure while encoding a primitive, composite, or packet value.
#[derive(Debug, Error)]
pub enum WritingError {
    /// The underlying writer failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A value failed to serialize to its wire representation (e.g. JSON).
    #[error("serialization failure: {0}")]
    Serde(String),
    /// Any other malformed-value condition on the write path.
    #[error("{0}")]
    Message(String),
}

impl From<ReadingError> for std::io::Error {
    fn from(err: ReadingError) -> Self {
        std::io::Error::other(err.to_string())
    }
}
