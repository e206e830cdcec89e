//! The endpoint state machine (`spec.md` §4.6): holds current protocol
//! state and compression threshold, dispatches frames to a schema
//! registry, and applies state/threshold changes atomically at the next
//! frame boundary.
use std::io::{Cursor, Write};
use std::marker::PhantomData;

use mcproto_utils::codec::VarInt;
use mcproto_utils::serial::{ReadFrom, WriteTo};

use crate::error::PacketError;
use crate::framing::{self, ReadBuffer};
use crate::packet::{PacketId, PacketRegistry};

/// Which side of the wire a packet travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Server to client.
    Clientbound = 0,
    /// Client to server.
    Serverbound = 1,
}

/// One of the four protocol states a connection passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Handshake,
    Status,
    Login,
    Play,
}

/// A decoded packet together with the raw bytes of its body, as returned by
/// [`Endpoint::read`]. The raw body is kept around for callers that want to
/// re-frame the packet verbatim (e.g. a proxy).
#[derive(Debug, Clone)]
pub struct DecodedFrame<P> {
    pub packet: P,
    pub raw_body: Vec<u8>,
}

/// Holds direction, current state, compression threshold, and a borrowed
/// schema registry. Generic over the packet enum `P` so this crate never
/// depends on a concrete registry crate: any `R: PacketRegistry<P>` works.
pub struct Endpoint<'r, P, R: PacketRegistry<P>> {
    direction: Direction,
    state: State,
    compression_threshold: Option<u32>,
    registry: &'r R,
    _marker: PhantomData<P>,
}

impl<'r, P: PacketId, R: PacketRegistry<P>> Endpoint<'r, P, R> {
    /// Creates a new endpoint in the initial `HANDSHAKE` state with
    /// compression off.
    pub fn new(direction: Direction, registry: &'r R) -> Self {
        Self {
            direction,
            state: State::Handshake,
            compression_threshold: None,
            registry,
            _marker: PhantomData,
        }
    }

    /// Current protocol state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Current compression threshold, `None` if compression is off.
    #[must_use]
    pub fn compression_threshold(&self) -> Option<u32> {
        self.compression_threshold
    }

    /// Replaces the cached schema table for the next frame. The endpoint
    /// does not validate the transition; the caller decides when it is
    /// legal to switch, per `spec.md` §4.6.
    pub fn switch_state(&mut self, state: State) {
        log::debug!("{:?} endpoint switching state {:?} -> {:?}", self.direction, self.state, state);
        self.state = state;
    }

    /// `threshold == -1` means "compression off"; any `threshold >= 0` sets
    /// the on-wire threshold. Takes effect on the next frame.
    pub fn set_compression_threshold(&mut self, threshold: i32) {
        self.compression_threshold = if threshold < 0 { None } else { Some(threshold as u32) };
        log::debug!("{:?} endpoint compression threshold set to {:?}", self.direction, self.compression_threshold);
    }

    /// Attempts to pull one packet out of `rb`. Returns `Ok(None)` when the
    /// buffer doesn't yet hold a whole frame; the caller should append more
    /// bytes and retry.
    pub fn read(&mut self, rb: &mut ReadBuffer) -> Result<Option<DecodedFrame<P>>, PacketError> {
        let Some(body) = framing::read_frame(rb, self.compression_threshold)? else {
            return Ok(None);
        };

        let mut cursor = Cursor::new(body.as_slice());
        let id = VarInt::read(&mut cursor)?.0;

        if !self.registry.contains(id, self.state, self.direction) {
            log::warn!("unknown packet id {id} for state {:?}/direction {:?}", self.state, self.direction);
            return Err(PacketError::ProtocolViolation(format!(
                "unknown packet id {id} for state {:?}/direction {:?}",
                self.state, self.direction
            )));
        }

        log::trace!("decoded packet id {id} in state {:?}/direction {:?}", self.state, self.direction);

        let packet = self.registry.decode(id, self.state, self.direction, &mut cursor)?;

        Ok(Some(DecodedFrame {
            packet,
            raw_body: body,
        }))
    }

    /// Encodes `packet` and frames it onto `writer`.
    pub fn write(&mut self, writer: &mut impl Write, packet: &P) -> Result<(), PacketError> {
        let mut body = Vec::new();
        VarInt(packet.packet_id()).write(&mut body)?;
        self.registry.encode(packet, self.state, self.direction, &mut body)?;
        framing::write_frame(writer, &body, self.compression_threshold)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor as IoCursor;

    use super::*;

    struct EchoPacket(i32, Vec<u8>);

    impl PacketId for EchoPacket {
        fn packet_id(&self) -> i32 {
            self.0
        }
    }

    struct EchoRegistry;

    impl PacketRegistry<EchoPacket> for EchoRegistry {
        fn decode(
            &self,
            id: i32,
            _state: State,
            _direction: Direction,
            data: &mut IoCursor<&[u8]>,
        ) -> Result<EchoPacket, PacketError> {
            let mut rest = Vec::new();
            std::io::Read::read_to_end(data, &mut rest).map_err(mcproto_utils::WritingError::Io)?;
            Ok(EchoPacket(id, rest))
        }

        fn encode(
            &self,
            packet: &EchoPacket,
            _state: State,
            _direction: Direction,
            out: &mut Vec<u8>,
        ) -> Result<(), PacketError> {
            out.extend_from_slice(&packet.1);
            Ok(())
        }

        fn contains(&self, _id: i32, _state: State, _direction: Direction) -> bool {
            true
        }
    }

    #[test]
    fn write_then_read_round_trips_through_framing() {
        let registry = EchoRegistry;
        let mut writer_end = Endpoint::new(Direction::Serverbound, &registry);
        let mut reader_end = Endpoint::new(Direction::Serverbound, &registry);

        let packet = EchoPacket(0x00, vec![0x09, b'h']);
        let mut wire = Vec::new();
        writer_end.write(&mut wire, &packet).unwrap();

        let mut rb = ReadBuffer::new();
        rb.append(&wire);
        let decoded = reader_end.read(&mut rb).unwrap().unwrap();
        assert_eq!(decoded.packet.0, 0x00);
        assert_eq!(decoded.packet.1, vec![0x09, b'h']);
    }

    #[test]
    fn switch_state_and_threshold_take_effect_immediately() {
        let registry = EchoRegistry;
        let mut endpoint = Endpoint::new(Direction::Clientbound, &registry);
        assert_eq!(endpoint.state(), State::Handshake);
        endpoint.switch_state(State::Play);
        assert_eq!(endpoint.state(), State::Play);

        assert_eq!(endpoint.compression_threshold(), None);
        endpoint.set_compression_threshold(256);
        assert_eq!(endpoint.compression_threshold(), Some(256));
        endpoint.set_compression_threshold(-1);
        assert_eq!(endpoint.compression_threshold(), None);
    }

    #[test]
    fn unknown_packet_id_is_a_protocol_violation() {
        struct EmptyRegistry;
        impl PacketRegistry<EchoPacket> for EmptyRegistry {
            fn decode(
                &self,
                id: i32,
                _state: State,
                _direction: Direction,
                _data: &mut IoCursor<&[u8]>,
            ) -> Result<EchoPacket, PacketError> {
                Ok(EchoPacket(id, Vec::new()))
            }
            fn encode(&self, _: &EchoPacket, _: State, _: Direction, _: &mut Vec<u8>) -> Result<(), PacketError> {
                Ok(())
            }
            fn contains(&self, _id: i32, _state: State, _direction: Direction) -> bool {
                false
            }
        }

        let registry = EmptyRegistry;
        let mut endpoint = Endpoint::new(Direction::Serverbound, &registry);
        let mut rb = ReadBuffer::new();
        let mut wire = Vec::new();
        framing::write_frame(&mut wire, &[0x7f], None).unwrap();
        rb.append(&wire);

        assert!(matches!(endpoint.read(&mut rb), Err(PacketError::ProtocolViolation(_))));
    }
}
