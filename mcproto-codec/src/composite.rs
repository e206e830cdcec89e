//! Composite codecs (`spec.md` §4.2): aggregate wire shapes used by
//! specific packets, too irregular for the derive macros in
//! `mcproto-macros` to express cleanly — each gets a hand-rolled
//! `read`/`write` pair grounded directly on the wire layout the
//! specification gives.
use std::io::{Cursor, Write};

use mcproto_utils::codec::primitive::{read_json, read_string, write_json, write_string};
use mcproto_utils::codec::VarInt;
use mcproto_utils::serial::{OptionalNbt, ReadFrom, WriteTo};
use mcproto_utils::{ReadingError, WritingError};
use simdnbt::owned::NbtCompound;
use uuid::Uuid;

/// The field bound used for the strings embedded in these composites; none
/// of them are framed on their own, so the framing layer's frame size is
/// the real backstop.
const STRING_BOUND: usize = mcproto_utils::serial::DEFAULT_BOUND;

/// An inventory slot, pre-1.8 wire form: `short item_id`, and if not `-1`,
/// `byte count`, `short damage`, `short nbt_size` followed by `nbt_size`
/// raw bytes (opaque — not parsed as NBT).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacySlot {
    pub item_id: i16,
    pub count: i8,
    pub damage: i16,
    pub nbt: Option<Vec<u8>>,
}

impl ReadFrom for Option<LegacySlot> {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let item_id = i16::read(data)?;
        if item_id == -1 {
            return Ok(None);
        }
        let count = i8::read(data)?;
        let damage = i16::read(data)?;
        let nbt_size = i16::read(data)?;
        let nbt = if nbt_size == -1 {
            None
        } else {
            let mut buf = vec![0u8; nbt_size as usize];
            std::io::Read::read_exact(data, &mut buf).map_err(|_| ReadingError::CleanEof("slot nbt".into()))?;
            Some(buf)
        };
        Ok(Some(LegacySlot {
            item_id,
            count,
            damage,
            nbt,
        }))
    }
}

impl WriteTo for Option<LegacySlot> {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        match self {
            None => (-1i16).write(writer),
            Some(slot) => {
                slot.item_id.write(writer)?;
                slot.count.write(writer)?;
                slot.damage.write(writer)?;
                match &slot.nbt {
                    None => (-1i16).write(writer),
                    Some(bytes) => {
                        (bytes.len() as i16).write(writer)?;
                        writer.write_all(bytes)?;
                        Ok(())
                    }
                }
            }
        }
    }
}

/// An inventory slot, 1.8 wire form: same leading fields as [`LegacySlot`]
/// but the trailing bytes are inline NBT; an `END` (`0x00`) root tag means
/// absent rather than a sentinel `nbt_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub item_id: i16,
    pub count: i8,
    pub damage: i16,
    pub nbt: Option<NbtCompound>,
}

impl ReadFrom for Option<Slot> {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let item_id = i16::read(data)?;
        if item_id == -1 {
            return Ok(None);
        }
        let count = i8::read(data)?;
        let damage = i16::read(data)?;
        let nbt = read_inline_nbt(data)?;
        Ok(Some(Slot {
            item_id,
            count,
            damage,
            nbt,
        }))
    }
}

impl WriteTo for Option<Slot> {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        match self {
            None => (-1i16).write(writer),
            Some(slot) => {
                slot.item_id.write(writer)?;
                slot.count.write(writer)?;
                slot.damage.write(writer)?;
                OptionalNbt(slot.nbt.clone()).write(writer)
            }
        }
    }
}

/// A root tag byte of `0x00` (`END`) means absent; anything else is read as
/// a full compound via `simdnbt`'s borrowed reader and copied out owned.
fn read_inline_nbt(data: &mut Cursor<&[u8]>) -> Result<Option<NbtCompound>, ReadingError> {
    let start = data.position() as usize;
    if data.get_ref().get(start).copied() == Some(0x00) {
        data.set_position(start as u64 + 1);
        return Ok(None);
    }
    let compound = simdnbt::borrow::read_compound(data)
        .map_err(|err| ReadingError::Message(format!("malformed nbt: {err}")))?;
    Ok(Some(compound.to_owned()))
}

/// One parsed entity-metadata entry: the raw type tag plus the decoded
/// value, keyed by index when stored in a stream.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Byte(i8),
    Short(i16),
    Int(i32),
    Float(f32),
    String(String),
    LegacySlot(Option<LegacySlot>),
    Slot(Option<Slot>),
    Position(i32, i32, i32),
    Rotation(f32, f32, f32),
}

const METADATA_TERMINATOR: u8 = 0x7F;

/// Reads a legacy (pre-1.8) metadata stream: types 0..6.
pub fn read_metadata_stream_legacy(data: &mut Cursor<&[u8]>) -> Result<Vec<(u8, MetadataValue)>, ReadingError> {
    let mut entries = Vec::new();
    loop {
        let header = u8::read(data)?;
        if header == METADATA_TERMINATOR {
            return Ok(entries);
        }
        let kind = header >> 5;
        let index = header & 0x1F;
        let value = match kind {
            0 => MetadataValue::Byte(i8::read(data)?),
            1 => MetadataValue::Short(i16::read(data)?),
            2 => MetadataValue::Int(i32::read(data)?),
            3 => MetadataValue::Float(f32::read(data)?),
            4 => MetadataValue::String(read_string(data, STRING_BOUND)?),
            5 => MetadataValue::LegacySlot(Option::<LegacySlot>::read(data)?),
            6 => MetadataValue::Position(i32::read(data)?, i32::read(data)?, i32::read(data)?),
            other => return Err(ReadingError::Message(format!("unknown legacy metadata type {other}"))),
        };
        entries.push((index, value));
    }
}

/// Reads a 1.8 metadata stream: types 0..7, adding `rotation` (type 7, three
/// floats) and upgrading slots to the 1.8 inline-NBT form.
pub fn read_metadata_stream_1_8(data: &mut Cursor<&[u8]>) -> Result<Vec<(u8, MetadataValue)>, ReadingError> {
    let mut entries = Vec::new();
    loop {
        let header = u8::read(data)?;
        if header == METADATA_TERMINATOR {
            return Ok(entries);
        }
        let kind = header >> 5;
        let index = header & 0x1F;
        let value = match kind {
            0 => MetadataValue::Byte(i8::read(data)?),
            1 => MetadataValue::Short(i16::read(data)?),
            2 => MetadataValue::Int(i32::read(data)?),
            3 => MetadataValue::Float(f32::read(data)?),
            4 => MetadataValue::String(read_string(data, STRING_BOUND)?),
            5 => MetadataValue::Slot(Option::<Slot>::read(data)?),
            6 => MetadataValue::Position(i32::read(data)?, i32::read(data)?, i32::read(data)?),
            7 => MetadataValue::Rotation(f32::read(data)?, f32::read(data)?, f32::read(data)?),
            other => return Err(ReadingError::Message(format!("unknown 1.8 metadata type {other}"))),
        };
        entries.push((index, value));
    }
}

fn metadata_type_tag(value: &MetadataValue) -> u8 {
    match value {
        MetadataValue::Byte(_) => 0,
        MetadataValue::Short(_) => 1,
        MetadataValue::Int(_) => 2,
        MetadataValue::Float(_) => 3,
        MetadataValue::String(_) => 4,
        MetadataValue::LegacySlot(_) | MetadataValue::Slot(_) => 5,
        MetadataValue::Position(..) => 6,
        MetadataValue::Rotation(..) => 7,
    }
}

/// Writes a metadata stream (either generation; the caller is responsible
/// for only supplying values the target generation understands).
pub fn write_metadata_stream(entries: &[(u8, MetadataValue)], writer: &mut impl Write) -> Result<(), WritingError> {
    for (index, value) in entries {
        let header = (metadata_type_tag(value) << 5) | (index & 0x1F);
        header.write(writer)?;
        match value {
            MetadataValue::Byte(v) => v.write(writer)?,
            MetadataValue::Short(v) => v.write(writer)?,
            MetadataValue::Int(v) => v.write(writer)?,
            MetadataValue::Float(v) => v.write(writer)?,
            MetadataValue::String(v) => write_string(v, writer, STRING_BOUND)?,
            MetadataValue::LegacySlot(v) => v.write(writer)?,
            MetadataValue::Slot(v) => v.write(writer)?,
            MetadataValue::Position(x, y, z) => {
                x.write(writer)?;
                y.write(writer)?;
                z.write(writer)?;
            }
            MetadataValue::Rotation(x, y, z) => {
                x.write(writer)?;
                y.write(writer)?;
                z.write(writer)?;
            }
        }
    }
    METADATA_TERMINATOR.write(writer)
}

/// One attribute modifier (`spec.md` §4.2 property array).
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeModifier {
    pub uuid: Uuid,
    pub amount: f64,
    pub operation: i8,
}

impl ReadFrom for AttributeModifier {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        Ok(Self {
            uuid: Uuid::read(data)?,
            amount: f64::read(data)?,
            operation: i8::read(data)?,
        })
    }
}

impl WriteTo for AttributeModifier {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.uuid.write(writer)?;
        self.amount.write(writer)?;
        self.operation.write(writer)
    }
}

/// One entity attribute/property (`spec.md` §4.2).
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeProperty {
    pub key: String,
    pub value: f64,
    pub modifiers: Vec<AttributeModifier>,
}

/// Reads a legacy (pre-14w04a) property array: `int n` properties, `short m`
/// modifier counts.
pub fn read_property_array_legacy(data: &mut Cursor<&[u8]>) -> Result<Vec<AttributeProperty>, ReadingError> {
    let n = i32::read(data)?;
    let mut out = Vec::with_capacity(n.max(0) as usize);
    for _ in 0..n {
        let key = read_string(data, STRING_BOUND)?;
        let value = f64::read(data)?;
        let m = i16::read(data)?;
        let mut modifiers = Vec::with_capacity(m.max(0) as usize);
        for _ in 0..m {
            modifiers.push(AttributeModifier::read(data)?);
        }
        out.push(AttributeProperty { key, value, modifiers });
    }
    Ok(out)
}

/// Reads a 14w04a+ property array: `int n` properties, `varint m` modifier
/// counts.
pub fn read_property_array(data: &mut Cursor<&[u8]>) -> Result<Vec<AttributeProperty>, ReadingError> {
    let n = i32::read(data)?;
    let mut out = Vec::with_capacity(n.max(0) as usize);
    for _ in 0..n {
        let key = read_string(data, STRING_BOUND)?;
        let value = f64::read(data)?;
        let m = VarInt::read(data)?.0;
        let mut modifiers = Vec::with_capacity(m.max(0) as usize);
        for _ in 0..m {
            modifiers.push(AttributeModifier::read(data)?);
        }
        out.push(AttributeProperty { key, value, modifiers });
    }
    Ok(out)
}

fn write_property_array_inner(
    properties: &[AttributeProperty],
    writer: &mut impl Write,
    write_modifier_count: impl Fn(usize, &mut dyn Write) -> Result<(), WritingError>,
) -> Result<(), WritingError> {
    (properties.len() as i32).write(writer)?;
    for property in properties {
        write_string(&property.key, writer, STRING_BOUND)?;
        property.value.write(writer)?;
        write_modifier_count(property.modifiers.len(), writer)?;
        for modifier in &property.modifiers {
            modifier.write(writer)?;
        }
    }
    Ok(())
}

/// Writes a legacy property array (`short m` modifier counts).
pub fn write_property_array_legacy(properties: &[AttributeProperty], writer: &mut impl Write) -> Result<(), WritingError> {
    write_property_array_inner(properties, writer, |count, w| (count as i16).write(w))
}

/// Writes a 14w04a+ property array (`varint m` modifier counts).
pub fn write_property_array(properties: &[AttributeProperty], writer: &mut impl Write) -> Result<(), WritingError> {
    write_property_array_inner(properties, writer, |count, w| VarInt(count as i32).write(w))
}

/// One legacy block-change record: a packed block state over a whole `int`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyBlockChange(pub u32);

/// One `14w26c+` block-change record: packed y/z/x position plus a varint
/// block id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockChange {
    pub x: u8,
    pub y: u8,
    pub z: u8,
    pub block_id: i32,
}

/// Reads the legacy `Changes` composite: `short count`, `int size`
/// (`== count*4`), then `count` `uint` records.
pub fn read_changes_legacy(data: &mut Cursor<&[u8]>) -> Result<Vec<LegacyBlockChange>, ReadingError> {
    let count = i16::read(data)?;
    let size = i32::read(data)?;
    if size != i32::from(count) * 4 {
        return Err(ReadingError::Message(format!(
            "multi-block-change size {size} does not match count*4 ({})",
            i32::from(count) * 4
        )));
    }
    let mut out = Vec::with_capacity(count.max(0) as usize);
    for _ in 0..count {
        out.push(LegacyBlockChange(u32::read(data)?));
    }
    Ok(out)
}

/// Writes the legacy `Changes` composite.
pub fn write_changes_legacy(changes: &[LegacyBlockChange], writer: &mut impl Write) -> Result<(), WritingError> {
    (changes.len() as i16).write(writer)?;
    (changes.len() as i32 * 4).write(writer)?;
    for change in changes {
        change.0.write(writer)?;
    }
    Ok(())
}

/// Reads the `14w26c+` `Changes` composite: `varint count`, then per record
/// `ushort packed` (`y` in bits 0..7, `z` in bits 8..11, `x` in bits
/// 12..15) and `varint block_id`.
pub fn read_changes(data: &mut Cursor<&[u8]>) -> Result<Vec<BlockChange>, ReadingError> {
    let count = VarInt::read(data)?.0;
    let mut out = Vec::with_capacity(count.max(0) as usize);
    for _ in 0..count {
        let packed = u16::read(data)?;
        let y = (packed & 0xFF) as u8;
        let z = ((packed >> 8) & 0x0F) as u8;
        let x = ((packed >> 12) & 0x0F) as u8;
        let block_id = VarInt::read(data)?.0;
        out.push(BlockChange { x, y, z, block_id });
    }
    Ok(out)
}

/// Writes the `14w26c+` `Changes` composite.
pub fn write_changes(changes: &[BlockChange], writer: &mut impl Write) -> Result<(), WritingError> {
    VarInt(changes.len() as i32).write(writer)?;
    for change in changes {
        let packed = u16::from(change.y) | (u16::from(change.z & 0x0F) << 8) | (u16::from(change.x & 0x0F) << 12);
        packed.write(writer)?;
        VarInt(change.block_id).write(writer)?;
    }
    Ok(())
}

/// One chunk column header in the legacy `Map chunk bulk` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyChunkMeta {
    pub x: i32,
    pub z: i32,
    pub primary_bitmap: u16,
    pub add_bitmap: u16,
}

/// The legacy `Map chunk bulk` composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyChunkBulk {
    pub sky_light: bool,
    pub data: Vec<u8>,
    pub chunks: Vec<LegacyChunkMeta>,
}

/// Reads the legacy `Map chunk bulk` composite: `short num`, `int
/// data_size`, `bool sky_light`, `data_size` opaque bytes, then `num`
/// `(int x, int z, ushort primary_bitmap, ushort add_bitmap)` headers.
pub fn read_map_chunk_bulk_legacy(data: &mut Cursor<&[u8]>) -> Result<LegacyChunkBulk, ReadingError> {
    let num = i16::read(data)?;
    let data_size = i32::read(data)?;
    let sky_light = bool::read(data)?;
    let mut chunk_data = vec![0u8; data_size.max(0) as usize];
    std::io::Read::read_exact(data, &mut chunk_data).map_err(|_| ReadingError::CleanEof("chunk bulk data".into()))?;
    let mut chunks = Vec::with_capacity(num.max(0) as usize);
    for _ in 0..num {
        chunks.push(LegacyChunkMeta {
            x: i32::read(data)?,
            z: i32::read(data)?,
            primary_bitmap: u16::read(data)?,
            add_bitmap: u16::read(data)?,
        });
    }
    Ok(LegacyChunkBulk {
        sky_light,
        data: chunk_data,
        chunks,
    })
}

/// Writes the legacy `Map chunk bulk` composite.
pub fn write_map_chunk_bulk_legacy(bulk: &LegacyChunkBulk, writer: &mut impl Write) -> Result<(), WritingError> {
    (bulk.chunks.len() as i16).write(writer)?;
    (bulk.data.len() as i32).write(writer)?;
    bulk.sky_light.write(writer)?;
    writer.write_all(&bulk.data)?;
    for chunk in &bulk.chunks {
        chunk.x.write(writer)?;
        chunk.z.write(writer)?;
        chunk.primary_bitmap.write(writer)?;
        chunk.add_bitmap.write(writer)?;
    }
    Ok(())
}

/// One chunk column header in the `14w28a+` `Map chunk bulk` layout (no
/// `add_bitmap`; the block-light/sky-light/biome payload size is derived
/// from `primary_bitmap`'s popcount, see [`chunk_payload_len`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkMeta {
    pub x: i32,
    pub z: i32,
    pub primary_bitmap: u16,
}

/// The `14w28a+` `Map chunk bulk` composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkBulk {
    pub sky_light: bool,
    pub chunks: Vec<ChunkMeta>,
    pub data: Vec<u8>,
}

/// Computes the exact payload length implied by a set of chunk metas:
/// `k*(16³*2)` blocks + `k*(16³/2)` block light + (if `sky_light`)
/// `k*(16³/2)` sky light, where `k = popcount(primary_bitmap)`, plus
/// `16*16` biome bytes per chunk.
#[must_use]
pub fn chunk_payload_len(chunks: &[ChunkMeta], sky_light: bool) -> usize {
    chunks
        .iter()
        .map(|chunk| {
            let k = chunk.primary_bitmap.count_ones() as usize;
            let mut len = k * (16 * 16 * 16 * 2) + k * (16 * 16 * 16 / 2);
            if sky_light {
                len += k * (16 * 16 * 16 / 2);
            }
            len + 16 * 16
        })
        .sum()
}

/// Reads the `14w28a+` `Map chunk bulk` composite: `bool sky_light`,
/// `varint num`, `num` `(int x, int z, ushort primary_bitmap)` headers,
/// then the data blob sized per [`chunk_payload_len`].
pub fn read_map_chunk_bulk(data: &mut Cursor<&[u8]>) -> Result<ChunkBulk, ReadingError> {
    let sky_light = bool::read(data)?;
    let num = VarInt::read(data)?.0;
    let mut chunks = Vec::with_capacity(num.max(0) as usize);
    for _ in 0..num {
        chunks.push(ChunkMeta {
            x: i32::read(data)?,
            z: i32::read(data)?,
            primary_bitmap: u16::read(data)?,
        });
    }
    let len = chunk_payload_len(&chunks, sky_light);
    let mut payload = vec![0u8; len];
    std::io::Read::read_exact(data, &mut payload).map_err(|_| ReadingError::CleanEof("chunk bulk payload".into()))?;
    Ok(ChunkBulk {
        sky_light,
        chunks,
        data: payload,
    })
}

/// Writes the `14w28a+` `Map chunk bulk` composite.
pub fn write_map_chunk_bulk(bulk: &ChunkBulk, writer: &mut impl Write) -> Result<(), WritingError> {
    bulk.sky_light.write(writer)?;
    VarInt(bulk.chunks.len() as i32).write(writer)?;
    for chunk in &bulk.chunks {
        chunk.x.write(writer)?;
        chunk.z.write(writer)?;
        chunk.primary_bitmap.write(writer)?;
    }
    writer.write_all(&bulk.data)?;
    Ok(())
}

/// One map icon: direction in the high nibble, type in the low nibble of
/// `dir_type`, plus a signed `x`/`y` position on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapIcon {
    pub direction: u8,
    pub icon_type: u8,
    pub x: i8,
    pub y: i8,
}

/// Reads the `Map icons` composite: `varint num`, each `(byte dir_type,
/// byte x, byte y)`.
pub fn read_map_icons(data: &mut Cursor<&[u8]>) -> Result<Vec<MapIcon>, ReadingError> {
    let num = VarInt::read(data)?.0;
    let mut out = Vec::with_capacity(num.max(0) as usize);
    for _ in 0..num {
        let dir_type = u8::read(data)?;
        out.push(MapIcon {
            direction: dir_type >> 4,
            icon_type: dir_type & 0x0F,
            x: i8::read(data)?,
            y: i8::read(data)?,
        });
    }
    Ok(out)
}

/// Writes the `Map icons` composite.
pub fn write_map_icons(icons: &[MapIcon], writer: &mut impl Write) -> Result<(), WritingError> {
    VarInt(icons.len() as i32).write(writer)?;
    for icon in icons {
        let dir_type = (icon.direction << 4) | (icon.icon_type & 0x0F);
        dir_type.write(writer)?;
        icon.x.write(writer)?;
        icon.y.write(writer)?;
    }
    Ok(())
}

/// One displaced-block record inside an `Explosions` composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplosionRecord {
    pub dx: i8,
    pub dy: i8,
    pub dz: i8,
}

/// Reads the `Explosions` composite: `int n`, then `n` `(byte, byte,
/// byte)` displacement records.
pub fn read_explosion_records(data: &mut Cursor<&[u8]>) -> Result<Vec<ExplosionRecord>, ReadingError> {
    let n = i32::read(data)?;
    let mut out = Vec::with_capacity(n.max(0) as usize);
    for _ in 0..n {
        out.push(ExplosionRecord {
            dx: i8::read(data)?,
            dy: i8::read(data)?,
            dz: i8::read(data)?,
        });
    }
    Ok(out)
}

/// Writes the `Explosions` composite.
pub fn write_explosion_records(records: &[ExplosionRecord], writer: &mut impl Write) -> Result<(), WritingError> {
    (records.len() as i32).write(writer)?;
    for record in records {
        record.dx.write(writer)?;
        record.dy.write(writer)?;
        record.dz.write(writer)?;
    }
    Ok(())
}

/// One named statistic/amount pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistic {
    pub name: String,
    pub amount: i32,
}

/// Reads the `Statistics` composite: `varint n`, each `(string name,
/// varint amount)`.
pub fn read_statistics(data: &mut Cursor<&[u8]>) -> Result<Vec<Statistic>, ReadingError> {
    let n = VarInt::read(data)?.0;
    let mut out = Vec::with_capacity(n.max(0) as usize);
    for _ in 0..n {
        out.push(Statistic {
            name: read_string(data, STRING_BOUND)?,
            amount: VarInt::read(data)?.0,
        });
    }
    Ok(out)
}

/// Writes the `Statistics` composite.
pub fn write_statistics(stats: &[Statistic], writer: &mut impl Write) -> Result<(), WritingError> {
    VarInt(stats.len() as i32).write(writer)?;
    for stat in stats {
        write_string(&stat.name, writer, STRING_BOUND)?;
        VarInt(stat.amount).write(writer)?;
    }
    Ok(())
}

/// One player-profile property as carried by the `add` player-list action
/// (a signed texture property, distinct from the entity attribute
/// [`AttributeProperty`]).
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
    pub signature: Option<String>,
}

/// One entry's per-action payload inside a player-list-action union.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerListAction {
    Add {
        name: String,
        properties: Vec<ProfileProperty>,
        game_mode: i32,
        ping: i32,
        display_name: Option<serde_json::Value>,
    },
    GameMode(i32),
    Latency(i32),
    Display(Option<serde_json::Value>),
    Remove,
}

/// One entry in a player-list-action union packet: an entity uuid plus its
/// per-action payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerListEntry {
    pub uuid: Uuid,
    pub action: PlayerListAction,
}

fn read_profile_property(data: &mut Cursor<&[u8]>) -> Result<ProfileProperty, ReadingError> {
    let name = read_string(data, STRING_BOUND)?;
    let value = read_string(data, STRING_BOUND)?;
    let has_signature = bool::read(data)?;
    let signature = if has_signature {
        Some(read_string(data, STRING_BOUND)?)
    } else {
        None
    };
    Ok(ProfileProperty { name, value, signature })
}

fn write_profile_property(property: &ProfileProperty, writer: &mut impl Write) -> Result<(), WritingError> {
    write_string(&property.name, writer, STRING_BOUND)?;
    write_string(&property.value, writer, STRING_BOUND)?;
    match &property.signature {
        Some(sig) => {
            true.write(writer)?;
            write_string(sig, writer, STRING_BOUND)
        }
        None => false.write(writer),
    }
}

/// Reads the `Player-list actions` union: `varint action`, `varint n`,
/// then `n` entries of `uuid` + the action's payload. `action >= 5` is a
/// fatal parse error.
pub fn read_player_list_actions(data: &mut Cursor<&[u8]>) -> Result<Vec<PlayerListEntry>, ReadingError> {
    let action = VarInt::read(data)?.0;
    let n = VarInt::read(data)?.0;
    let mut entries = Vec::with_capacity(n.max(0) as usize);
    for _ in 0..n {
        let uuid = Uuid::read(data)?;
        let payload = match action {
            0 => {
                let name = read_string(data, STRING_BOUND)?;
                let n_props = VarInt::read(data)?.0;
                let mut properties = Vec::with_capacity(n_props.max(0) as usize);
                for _ in 0..n_props {
                    properties.push(read_profile_property(data)?);
                }
                let game_mode = VarInt::read(data)?.0;
                let ping = VarInt::read(data)?.0;
                let has_display = bool::read(data)?;
                let display_name = if has_display { Some(read_json(data, STRING_BOUND)?) } else { None };
                PlayerListAction::Add {
                    name,
                    properties,
                    game_mode,
                    ping,
                    display_name,
                }
            }
            1 => PlayerListAction::GameMode(VarInt::read(data)?.0),
            2 => PlayerListAction::Latency(VarInt::read(data)?.0),
            3 => {
                let has_display = bool::read(data)?;
                let display = if has_display { Some(read_json(data, STRING_BOUND)?) } else { None };
                PlayerListAction::Display(display)
            }
            4 => PlayerListAction::Remove,
            other => return Err(ReadingError::Message(format!("unknown player-list action {other}"))),
        };
        entries.push(PlayerListEntry { uuid, action: payload });
    }
    Ok(entries)
}

fn action_tag(action: &PlayerListAction) -> i32 {
    match action {
        PlayerListAction::Add { .. } => 0,
        PlayerListAction::GameMode(_) => 1,
        PlayerListAction::Latency(_) => 2,
        PlayerListAction::Display(_) => 3,
        PlayerListAction::Remove => 4,
    }
}

/// Writes the `Player-list actions` union. All entries MUST share the same
/// action (the wire format has one `action` tag for the whole packet); the
/// first entry's action is used.
pub fn write_player_list_actions(entries: &[PlayerListEntry], writer: &mut impl Write) -> Result<(), WritingError> {
    let action = entries.first().map_or(4, |entry| action_tag(&entry.action));
    VarInt(action).write(writer)?;
    VarInt(entries.len() as i32).write(writer)?;
    for entry in entries {
        entry.uuid.write(writer)?;
        match &entry.action {
            PlayerListAction::Add {
                name,
                properties,
                game_mode,
                ping,
                display_name,
            } => {
                write_string(name, writer, STRING_BOUND)?;
                VarInt(properties.len() as i32).write(writer)?;
                for property in properties {
                    write_profile_property(property, writer)?;
                }
                VarInt(*game_mode).write(writer)?;
                VarInt(*ping).write(writer)?;
                match display_name {
                    Some(value) => {
                        true.write(writer)?;
                        write_json(value, writer, STRING_BOUND)?;
                    }
                    None => false.write(writer)?,
                }
            }
            PlayerListAction::GameMode(value) => VarInt(*value).write(writer)?,
            PlayerListAction::Latency(value) => VarInt(*value).write(writer)?,
            PlayerListAction::Display(value) => match value {
                Some(value) => {
                    true.write(writer)?;
                    write_json(value, writer, STRING_BOUND)?;
                }
                None => false.write(writer)?,
            },
            PlayerListAction::Remove => {}
        }
    }
    Ok(())
}

/// An object spawn's extra data (`spec.md` §4.2): a discriminant `int_val`
/// followed by a velocity triple, the triple present only when `int_val` is
/// nonzero (real Minecraft's "has extra data" convention for object spawns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectData {
    pub int_val: i32,
    pub velocity: Option<(i16, i16, i16)>,
}

pub fn read_object_data(data: &mut Cursor<&[u8]>) -> Result<ObjectData, ReadingError> {
    let int_val = i32::read(data)?;
    let velocity = if int_val > 0 {
        Some((i16::read(data)?, i16::read(data)?, i16::read(data)?))
    } else {
        None
    };
    Ok(ObjectData { int_val, velocity })
}

pub fn write_object_data(value: &ObjectData, writer: &mut impl Write) -> Result<(), WritingError> {
    value.int_val.write(writer)?;
    if let Some((x, y, z)) = value.velocity {
        x.write(writer)?;
        y.write(writer)?;
        z.write(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_slot_absent_round_trips() {
        let mut buf = Vec::new();
        let slot: Option<LegacySlot> = None;
        slot.write(&mut buf).unwrap();
        let mut cursor = Cursor::new(buf.as_slice());
        assert_eq!(Option::<LegacySlot>::read(&mut cursor).unwrap(), None);
    }

    #[test]
    fn legacy_slot_present_round_trips() {
        let slot = Some(LegacySlot {
            item_id: 1,
            count: 3,
            damage: 0,
            nbt: Some(vec![1, 2, 3]),
        });
        let mut buf = Vec::new();
        slot.write(&mut buf).unwrap();
        let mut cursor = Cursor::new(buf.as_slice());
        assert_eq!(Option::<LegacySlot>::read(&mut cursor).unwrap(), slot);
    }

    #[test]
    fn metadata_stream_round_trips_legacy() {
        let entries = vec![(0, MetadataValue::Byte(5)), (2, MetadataValue::Int(-7))];
        let mut buf = Vec::new();
        write_metadata_stream(&entries, &mut buf).unwrap();
        let mut cursor = Cursor::new(buf.as_slice());
        assert_eq!(read_metadata_stream_legacy(&mut cursor).unwrap(), entries);
    }

    #[test]
    fn metadata_stream_1_8_understands_rotation() {
        let entries = vec![(3, MetadataValue::Rotation(1.0, 2.0, 3.0))];
        let mut buf = Vec::new();
        write_metadata_stream(&entries, &mut buf).unwrap();
        let mut cursor = Cursor::new(buf.as_slice());
        assert_eq!(read_metadata_stream_1_8(&mut cursor).unwrap(), entries);
    }

    #[test]
    fn property_array_legacy_round_trips() {
        let properties = vec![AttributeProperty {
            key: "generic.maxHealth".to_string(),
            value: 20.0,
            modifiers: vec![AttributeModifier {
                uuid: Uuid::from_u128(1),
                amount: 2.0,
                operation: 0,
            }],
        }];
        let mut buf = Vec::new();
        write_property_array_legacy(&properties, &mut buf).unwrap();
        let mut cursor = Cursor::new(buf.as_slice());
        assert_eq!(read_property_array_legacy(&mut cursor).unwrap(), properties);
    }

    #[test]
    fn changes_packs_xyz_into_ushort() {
        let changes = vec![BlockChange {
            x: 15,
            y: 200,
            z: 3,
            block_id: 42,
        }];
        let mut buf = Vec::new();
        write_changes(&changes, &mut buf).unwrap();
        let mut cursor = Cursor::new(buf.as_slice());
        assert_eq!(read_changes(&mut cursor).unwrap(), changes);
    }

    #[test]
    fn chunk_payload_len_matches_spec_formula() {
        let chunks = vec![ChunkMeta {
            x: 0,
            z: 0,
            primary_bitmap: 0b11, // k = 2
        }];
        let expected = 2 * (16 * 16 * 16 * 2) + 2 * (16 * 16 * 16 / 2) + 2 * (16 * 16 * 16 / 2) + 16 * 16;
        assert_eq!(chunk_payload_len(&chunks, true), expected);
    }

    #[test]
    fn object_data_omits_velocity_when_int_val_is_zero() {
        let value = ObjectData {
            int_val: 0,
            velocity: None,
        };
        let mut buf = Vec::new();
        write_object_data(&value, &mut buf).unwrap();
        assert_eq!(buf.len(), 4);
        let mut cursor = Cursor::new(buf.as_slice());
        assert_eq!(read_object_data(&mut cursor).unwrap(), value);
    }

    #[test]
    fn object_data_carries_velocity_when_int_val_is_positive() {
        let value = ObjectData {
            int_val: 1,
            velocity: Some((1, -2, 3)),
        };
        let mut buf = Vec::new();
        write_object_data(&value, &mut buf).unwrap();
        assert_eq!(buf.len(), 10);
        let mut cursor = Cursor::new(buf.as_slice());
        assert_eq!(read_object_data(&mut cursor).unwrap(), value);
    }

    #[test]
    fn map_icons_round_trip_nibbles() {
        let icons = vec![MapIcon {
            direction: 0xA,
            icon_type: 0x3,
            x: -10,
            y: 20,
        }];
        let mut buf = Vec::new();
        write_map_icons(&icons, &mut buf).unwrap();
        let mut cursor = Cursor::new(buf.as_slice());
        assert_eq!(read_map_icons(&mut cursor).unwrap(), icons);
    }

    #[test]
    fn statistics_round_trip() {
        let stats = vec![Statistic {
            name: "stat.walkOneCm".to_string(),
            amount: 128,
        }];
        let mut buf = Vec::new();
        write_statistics(&stats, &mut buf).unwrap();
        let mut cursor = Cursor::new(buf.as_slice());
        assert_eq!(read_statistics(&mut cursor).unwrap(), stats);
    }

    #[test]
    fn player_list_remove_round_trips() {
        let entries = vec![PlayerListEntry {
            uuid: Uuid::from_u128(9),
            action: PlayerListAction::Remove,
        }];
        let mut buf = Vec::new();
        write_player_list_actions(&entries, &mut buf).unwrap();
        let mut cursor = Cursor::new(buf.as_slice());
        assert_eq!(read_player_list_actions(&mut cursor).unwrap(), entries);
    }

    #[test]
    fn player_list_unknown_action_is_fatal() {
        let mut buf = Vec::new();
        VarInt(5).write(&mut buf).unwrap();
        VarInt(0).write(&mut buf).unwrap();
        let mut cursor = Cursor::new(buf.as_slice());
        assert!(read_player_list_actions(&mut cursor).is_err());
    }
}
