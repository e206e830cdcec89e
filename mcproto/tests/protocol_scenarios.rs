//! End-to-end scenarios against the public facade, matching the concrete
//! examples `spec.md` §8 calls out by name. Style grounded on
//! `steel-macros/tests/packet_write_test.rs`.
use std::io::{Cursor, Read, Write};

use mcproto::cipher::ciphers_from_shared_secret;
use mcproto::packets::handshake::Handshake;
use mcproto::packets::login::{EncryptionResponse, LoginServerbound};
use mcproto::packets::play::EntityRelativeMove;
use mcproto::packets::status::{StatusPing, StatusPong, StatusServerbound};
use mcproto::{
    BlockPos, CipherReader, CipherWriter, ClientboundPacket, Direction, Endpoint, PackedPos, PacketRegistry,
    ReadBuffer, ServerboundPacket, State,
};
use mcproto_utils::serial::{ReadFrom, WriteTo};

/// A handshake to `localhost:25565`, requesting `LOGIN` (`next_state = 2`),
/// sent under protocol version 47 — the exact bytes `spec.md` §8 names.
#[test]
fn handshake_matches_the_documented_wire_bytes() {
    let handshake = Handshake {
        protocol_version: 47,
        server_address: "localhost".to_string(),
        server_port: 25565,
        next_state: 2,
    };

    let tables = mcproto::protocol(47).expect("version 47 is in the catalog");
    let mut endpoint: Endpoint<'_, ServerboundPacket, _> = Endpoint::new(Direction::Serverbound, &tables);

    let mut out = Vec::new();
    endpoint
        .write(&mut out, &ServerboundPacket::Handshake(handshake))
        .unwrap();

    assert_eq!(
        out,
        vec![
            0x0f, 0x00, 0x2f, 0x09, b'l', b'o', b'c', b'a', b'l', b'h', b'o', b's', b't', 0x63, 0xdd, 0x02,
        ]
    );
}

/// `STATUS`'s `Ping`/`Pong` pair round-trips its opaque `i64` payload
/// unchanged, the way a server-list ping client expects.
#[test]
fn status_ping_pong_round_trips() {
    let tables = mcproto::protocol(47).unwrap();

    let mut client: Endpoint<'_, ServerboundPacket, _> = Endpoint::new(Direction::Serverbound, &tables);
    client.switch_state(State::Status);
    let mut wire = Vec::new();
    client
        .write(&mut wire, &ServerboundPacket::Status(StatusServerbound::Ping(StatusPing { time: 123_456 })))
        .unwrap();

    let mut server: Endpoint<'_, ServerboundPacket, _> = Endpoint::new(Direction::Serverbound, &tables);
    server.switch_state(State::Status);
    let mut rb = ReadBuffer::new();
    rb.append(&wire);
    let decoded = server.read(&mut rb).unwrap().unwrap();
    let ServerboundPacket::Status(StatusServerbound::Ping(ping)) = decoded.packet else {
        panic!("expected a Status::Ping");
    };
    assert_eq!(ping.time, 123_456);

    let pong = StatusPong { time: ping.time };
    let mut buf = Vec::new();
    pong.write(&mut buf).unwrap();
    let mut cursor = Cursor::new(buf.as_slice());
    assert_eq!(StatusPong::read(&mut cursor).unwrap().time, 123_456);
}

/// Below the compression threshold, a frame is sent uncompressed with a
/// leading `0x00` data-length varint; at or above it, the body is zlib
/// compressed. `spec.md` §8 fixes the threshold at `256`.
#[test]
fn compression_toggles_at_the_threshold() {
    let tables = mcproto::protocol(47).unwrap();

    let small = ServerboundPacket::Play(mcproto::packets::play::PlayServerbound::ChatMessage(
        mcproto::packets::play::ChatMessageServerbound { message: "hi".to_string() },
    ));
    let large = ServerboundPacket::Play(mcproto::packets::play::PlayServerbound::ChatMessage(
        mcproto::packets::play::ChatMessageServerbound {
            message: "x".repeat(400),
        },
    ));

    for packet in [small, large] {
        let mut endpoint: Endpoint<'_, ServerboundPacket, _> = Endpoint::new(Direction::Serverbound, &tables);
        endpoint.switch_state(State::Play);
        endpoint.set_compression_threshold(256);

        let mut wire = Vec::new();
        endpoint.write(&mut wire, &packet).unwrap();

        let mut reader: Endpoint<'_, ServerboundPacket, _> = Endpoint::new(Direction::Serverbound, &tables);
        reader.switch_state(State::Play);
        reader.set_compression_threshold(256);
        let mut rb = ReadBuffer::new();
        rb.append(&wire);
        let decoded = reader.read(&mut rb).unwrap().unwrap();
        assert_eq!(decoded.packet, packet);
    }
}

/// The packed 64-bit position form round-trips full-range coordinates,
/// including the negative values the corrected (non-buggy) encoding must
/// sign-extend properly (`spec.md` §9 Open Questions).
#[test]
fn packed_position_round_trips_negative_coordinates() {
    let cases = [
        BlockPos::new(0, 0, 0),
        BlockPos::new(-1, -1, -1),
        BlockPos::new(33_554_431, 2047, 33_554_431),
        BlockPos::new(-33_554_432, -2048, -33_554_432),
        BlockPos::new(18, 64, -200),
    ];

    for pos in cases {
        let mut buf = Vec::new();
        PackedPos(pos).write(&mut buf).unwrap();
        let mut cursor = Cursor::new(buf.as_slice());
        let decoded = PackedPos::read(&mut cursor).unwrap();
        assert_eq!(decoded.0, pos);
    }
}

/// `spec.md` §8 scenario 6: for `EntityRelativeMove` (v4, id `0x15`) with
/// one `int` field followed by three `byte32`-scaled fields, the
/// macro-derived fused codec must produce byte-identical output to a
/// hand-written, unfused sequential codec, over 10 000 random inputs.
#[test]
fn entity_relative_move_fusion_matches_naive_sequential_codec() {
    use rand::Rng;

    fn naive_write(p: &EntityRelativeMove, out: &mut Vec<u8>) {
        p.entity_id.write(out).unwrap();
        (((p.dx * 32.0).trunc()) as i8).write(out).unwrap();
        (((p.dy * 32.0).trunc()) as i8).write(out).unwrap();
        (((p.dz * 32.0).trunc()) as i8).write(out).unwrap();
    }

    fn naive_read(data: &mut Cursor<&[u8]>) -> EntityRelativeMove {
        let entity_id = i32::read(data).unwrap();
        let dx = f64::from(i8::read(data).unwrap()) / 32.0;
        let dy = f64::from(i8::read(data).unwrap()) / 32.0;
        let dz = f64::from(i8::read(data).unwrap()) / 32.0;
        EntityRelativeMove { entity_id, dx, dy, dz }
    }

    let mut rng = rand::rng();
    for _ in 0..10_000 {
        let packet = EntityRelativeMove {
            entity_id: rng.random(),
            dx: f64::from(rng.random::<i8>()) / 32.0,
            dy: f64::from(rng.random::<i8>()) / 32.0,
            dz: f64::from(rng.random::<i8>()) / 32.0,
        };

        let mut fused = Vec::new();
        packet.write(&mut fused).unwrap();

        let mut naive = Vec::new();
        naive_write(&packet, &mut naive);

        assert_eq!(fused, naive, "fused and naive encodings diverged for {packet:?}");

        let mut cursor = Cursor::new(fused.as_slice());
        let via_fused = EntityRelativeMove::read(&mut cursor).unwrap();
        let mut cursor = Cursor::new(naive.as_slice());
        let via_naive = naive_read(&mut cursor);
        assert_eq!(via_fused, via_naive);
    }
}

/// `PacketId`/`PacketRegistry::contains` agree for a sampling of known ids
/// across states.
#[test]
fn registry_contains_reports_known_and_unknown_ids() {
    let tables = mcproto::protocol(47).unwrap();
    assert!(<_ as PacketRegistry<ServerboundPacket>>::contains(
        &tables,
        0x00,
        State::Handshake,
        Direction::Serverbound
    ));
    assert!(<_ as PacketRegistry<ClientboundPacket>>::contains(
        &tables,
        0x15,
        State::Play,
        Direction::Clientbound
    ));
    assert!(!<_ as PacketRegistry<ClientboundPacket>>::contains(
        &tables,
        0x7F,
        State::Play,
        Direction::Clientbound
    ));
}

/// `spec.md` §8 scenario 5: with `shared_secret` = 16 bytes of `0xAB`, the
/// `EncryptionResponse` fields round-trip byte-for-byte through the wire
/// (RSA wrapping of `shared_secret`/`response_token` is a Non-goal, so both
/// are treated as already-opaque byte strings here), and installing the
/// ciphers derived from that secret lets a [`CipherWriter`]/[`CipherReader`]
/// pair exchange a frame the way `spec.md` §171's handshake pattern
/// ("decode EncryptionResponse → install ciphers → ...") describes.
#[test]
fn encryption_handshake_round_trips_and_installs_working_ciphers() {
    let shared_secret = [0xAB; 16];
    let response = EncryptionResponse {
        shared_secret: shared_secret.to_vec(),
        response_token: vec![0x01, 0x02, 0x03, 0x04],
    };

    let tables = mcproto::protocol(47).unwrap();
    let mut client: Endpoint<'_, ServerboundPacket, _> = Endpoint::new(Direction::Serverbound, &tables);
    client.switch_state(State::Login);
    let mut wire = Vec::new();
    client
        .write(
            &mut wire,
            &ServerboundPacket::Login(LoginServerbound::EncryptionResponse(response.clone())),
        )
        .unwrap();

    let mut server: Endpoint<'_, ServerboundPacket, _> = Endpoint::new(Direction::Serverbound, &tables);
    server.switch_state(State::Login);
    let mut rb = ReadBuffer::new();
    rb.append(&wire);
    let decoded = server.read(&mut rb).unwrap().unwrap();
    let ServerboundPacket::Login(LoginServerbound::EncryptionResponse(decoded_response)) = decoded.packet else {
        panic!("expected a Login::EncryptionResponse");
    };
    assert_eq!(decoded_response, response);

    let (client_enc, client_dec) = ciphers_from_shared_secret(&shared_secret);
    let (server_enc, server_dec) = ciphers_from_shared_secret(&shared_secret);

    let plaintext = b"this is a login success packet body";
    let mut ciphertext = Vec::new();
    {
        let mut writer = CipherWriter::new(&mut ciphertext, client_enc);
        writer.write_all(plaintext).unwrap();
    }

    let mut decrypted = Vec::new();
    let mut reader = CipherReader::new(ciphertext.as_slice(), server_dec);
    reader.read_to_end(&mut decrypted).unwrap();
    assert_eq!(decrypted, plaintext);

    // The reverse direction uses the same 16 bytes as both key and IV, so
    // server -> client traffic is independently decryptable too.
    let mut reply_ciphertext = Vec::new();
    {
        let mut writer = CipherWriter::new(&mut reply_ciphertext, server_enc);
        writer.write_all(plaintext).unwrap();
    }
    let mut reply_decrypted = Vec::new();
    let mut reader = CipherReader::new(reply_ciphertext.as_slice(), client_dec);
    reader.read_to_end(&mut reply_decrypted).unwrap();
    assert_eq!(reply_decrypted, plaintext);
}
