//! Error kinds surfaced above the framing/endpoint boundary (`spec.md` §7).
use thiserror::Error;

pub use mcproto_utils::{ReadingError, WritingError};

/// A fatal, session-poisoning failure. The core never retries; on any of
/// these the caller MUST discard the endpoint.
#[derive(Debug, Error)]
pub enum PacketError {
    /// Low-level decode failure (EOF, malformed varint, bad UTF-8, ...).
    #[error(transparent)]
    Reading(#[from] ReadingError),
    /// Low-level encode failure.
    #[error(transparent)]
    Writing(#[from] WritingError),
    /// An unknown packet id for the current `(version, state, direction)`,
    /// a compression-envelope invariant violation, an unknown player-list
    /// action, or a length mismatch inside a known composite.
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),
    /// Trailing bytes after parsing a packet body in strict mode.
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),
    /// Raised by the transport; the core only propagates it.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
}
