//! `PLAY` packets whose field shapes are composite codecs (`spec.md` §4.2)
//! rather than plain fixed-width runs, so they're hand-implemented instead
//! of derived: the derive macro's `#[strategy(...)]` vocabulary has no slot
//! for "call this free function", and these shapes differ between the
//! legacy (pre-1.8) and 1.8 wire forms in ways a single struct can't model.
//! Grounded on `original_source/fastmc/proto.py`'s matching packet DSLs.
use std::io::{Cursor, Write};

use mcproto_codec::composite::{
    self, AttributeProperty, BlockChange, ChunkBulk, ExplosionRecord, LegacyBlockChange, LegacyChunkBulk, LegacySlot,
    MapIcon, MetadataValue, PlayerListEntry, Slot, Statistic,
};
use mcproto_codec::packet::PacketId;
use mcproto_utils::codec::VarInt;
use mcproto_utils::serial::{PrefixedRead, PrefixedWrite, ReadFrom, WriteTo};
use mcproto_utils::{ReadingError, WritingError};

/// `SpawnMob` (v0, clientbound `0x0F`): a mob spawn carries the full legacy
/// metadata stream (`spec.md` §4.2, type-tagged `0..6`).
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnMobLegacy {
    pub entity_id: i32,
    pub mob_type: u8,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub pitch: u8,
    pub head_pitch: u8,
    pub yaw: u8,
    pub velocity_x: i16,
    pub velocity_y: i16,
    pub velocity_z: i16,
    pub metadata: Vec<(u8, MetadataValue)>,
}

impl ReadFrom for SpawnMobLegacy {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let entity_id = VarInt::read(data)?.0;
        let mob_type = u8::read(data)?;
        let x = f64::from(i32::read(data)?) / 32.0;
        let y = f64::from(i32::read(data)?) / 32.0;
        let z = f64::from(i32::read(data)?) / 32.0;
        let pitch = u8::read(data)?;
        let head_pitch = u8::read(data)?;
        let yaw = u8::read(data)?;
        let velocity_x = i16::read(data)?;
        let velocity_y = i16::read(data)?;
        let velocity_z = i16::read(data)?;
        let metadata = composite::read_metadata_stream_legacy(data)?;
        Ok(Self {
            entity_id,
            mob_type,
            x,
            y,
            z,
            pitch,
            head_pitch,
            yaw,
            velocity_x,
            velocity_y,
            velocity_z,
            metadata,
        })
    }
}

impl WriteTo for SpawnMobLegacy {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        VarInt(self.entity_id).write(writer)?;
        self.mob_type.write(writer)?;
        ((self.x * 32.0).trunc() as i32).write(writer)?;
        ((self.y * 32.0).trunc() as i32).write(writer)?;
        ((self.z * 32.0).trunc() as i32).write(writer)?;
        self.pitch.write(writer)?;
        self.head_pitch.write(writer)?;
        self.yaw.write(writer)?;
        self.velocity_x.write(writer)?;
        self.velocity_y.write(writer)?;
        self.velocity_z.write(writer)?;
        composite::write_metadata_stream(&self.metadata, writer)
    }
}

/// `SpawnPlayer` (clientbound `0x0C`): spawns another player entity,
/// carrying the same legacy metadata stream as [`SpawnMobLegacy`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnPlayer {
    pub entity_id: i32,
    pub uuid: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub yaw: u8,
    pub pitch: u8,
    pub current_item: i16,
    pub metadata: Vec<(u8, MetadataValue)>,
}

impl ReadFrom for SpawnPlayer {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let entity_id = VarInt::read(data)?.0;
        let uuid = String::read_prefixed::<VarInt>(data)?;
        let name = String::read_prefixed::<VarInt>(data)?;
        let x = f64::from(i32::read(data)?) / 32.0;
        let y = f64::from(i32::read(data)?) / 32.0;
        let z = f64::from(i32::read(data)?) / 32.0;
        let yaw = u8::read(data)?;
        let pitch = u8::read(data)?;
        let current_item = i16::read(data)?;
        let metadata = composite::read_metadata_stream_legacy(data)?;
        Ok(Self {
            entity_id,
            uuid,
            name,
            x,
            y,
            z,
            yaw,
            pitch,
            current_item,
            metadata,
        })
    }
}

impl WriteTo for SpawnPlayer {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        VarInt(self.entity_id).write(writer)?;
        self.uuid.write_prefixed::<VarInt>(writer)?;
        self.name.write_prefixed::<VarInt>(writer)?;
        ((self.x * 32.0).trunc() as i32).write(writer)?;
        ((self.y * 32.0).trunc() as i32).write(writer)?;
        ((self.z * 32.0).trunc() as i32).write(writer)?;
        self.yaw.write(writer)?;
        self.pitch.write(writer)?;
        self.current_item.write(writer)?;
        composite::write_metadata_stream(&self.metadata, writer)
    }
}

/// `SpawnObject` (clientbound `0x0E`): spawns a non-living entity (item
/// frame, arrow, minecart, ...), carrying type-specific [`composite::ObjectData`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnObject {
    pub entity_id: i32,
    pub object_type: i8,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub pitch: u8,
    pub yaw: u8,
    pub data: composite::ObjectData,
}

impl ReadFrom for SpawnObject {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let entity_id = VarInt::read(data)?.0;
        let object_type = i8::read(data)?;
        let x = f64::from(i32::read(data)?) / 32.0;
        let y = f64::from(i32::read(data)?) / 32.0;
        let z = f64::from(i32::read(data)?) / 32.0;
        let pitch = u8::read(data)?;
        let yaw = u8::read(data)?;
        let data_field = composite::read_object_data(data)?;
        Ok(Self {
            entity_id,
            object_type,
            x,
            y,
            z,
            pitch,
            yaw,
            data: data_field,
        })
    }
}

impl WriteTo for SpawnObject {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        VarInt(self.entity_id).write(writer)?;
        self.object_type.write(writer)?;
        ((self.x * 32.0).trunc() as i32).write(writer)?;
        ((self.y * 32.0).trunc() as i32).write(writer)?;
        ((self.z * 32.0).trunc() as i32).write(writer)?;
        self.pitch.write(writer)?;
        self.yaw.write(writer)?;
        composite::write_object_data(&self.data, writer)
    }
}

/// `Teams` (clientbound `0x3E`): creates, updates, or removes a scoreboard
/// team. `mode` gates which trailing fields are present — `0` create, `1`
/// remove, `2` update info, `3` add players, `4` remove players.
#[derive(Debug, Clone, PartialEq)]
pub struct Teams {
    pub team_name: String,
    pub mode: i8,
    pub display_name: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub friendly_fire: Option<i8>,
    pub players: Option<Vec<String>>,
}

impl ReadFrom for Teams {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let team_name = String::read_prefixed::<VarInt>(data)?;
        let mode = i8::read(data)?;
        let (display_name, prefix, suffix, friendly_fire) = if mode == 0 || mode == 2 {
            (
                Some(String::read_prefixed::<VarInt>(data)?),
                Some(String::read_prefixed::<VarInt>(data)?),
                Some(String::read_prefixed::<VarInt>(data)?),
                Some(i8::read(data)?),
            )
        } else {
            (None, None, None, None)
        };
        let players = if matches!(mode, 0 | 3 | 4) {
            let count = VarInt::read(data)?.0;
            let mut names = Vec::with_capacity((count.max(0) as usize).min(4096));
            for _ in 0..count {
                names.push(String::read_prefixed::<VarInt>(data)?);
            }
            Some(names)
        } else {
            None
        };
        Ok(Self {
            team_name,
            mode,
            display_name,
            prefix,
            suffix,
            friendly_fire,
            players,
        })
    }
}

impl WriteTo for Teams {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.team_name.write_prefixed::<VarInt>(writer)?;
        self.mode.write(writer)?;
        if self.mode == 0 || self.mode == 2 {
            self.display_name
                .as_ref()
                .expect("mode 0/2 carries display_name")
                .write_prefixed::<VarInt>(writer)?;
            self.prefix
                .as_ref()
                .expect("mode 0/2 carries prefix")
                .write_prefixed::<VarInt>(writer)?;
            self.suffix
                .as_ref()
                .expect("mode 0/2 carries suffix")
                .write_prefixed::<VarInt>(writer)?;
            self.friendly_fire.as_ref().expect("mode 0/2 carries friendly_fire").write(writer)?;
        }
        if matches!(self.mode, 0 | 3 | 4) {
            let players = self.players.as_ref().expect("mode 0/3/4 carries players");
            VarInt(players.len() as i32).write(writer)?;
            for name in players {
                name.write_prefixed::<VarInt>(writer)?;
            }
        }
        Ok(())
    }
}

/// `TabComplete` (clientbound `0x3A`): the completions offered for a
/// client's partial command — a varint-counted list of strings, which the
/// derive macro has no strategy for (no bare `ReadFrom` for `String`).
#[derive(Debug, Clone, PartialEq)]
pub struct TabComplete(pub Vec<String>);

impl ReadFrom for TabComplete {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let count = VarInt::read(data)?.0;
        let mut completions = Vec::with_capacity((count.max(0) as usize).min(4096));
        for _ in 0..count {
            completions.push(String::read_prefixed::<VarInt>(data)?);
        }
        Ok(Self(completions))
    }
}

impl WriteTo for TabComplete {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        VarInt(self.0.len() as i32).write(writer)?;
        for completion in &self.0 {
            completion.write_prefixed::<VarInt>(writer)?;
        }
        Ok(())
    }
}

/// `EntityMetadata` (clientbound `0x1C`): standalone metadata stream for an
/// already-spawned entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMetadata {
    pub entity_id: i32,
    pub metadata: Vec<(u8, MetadataValue)>,
}

impl ReadFrom for EntityMetadata {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let entity_id = i32::read(data)?;
        let metadata = composite::read_metadata_stream_1_8(data)?;
        Ok(Self { entity_id, metadata })
    }
}

impl WriteTo for EntityMetadata {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.entity_id.write(writer)?;
        composite::write_metadata_stream(&self.metadata, writer)
    }
}

/// `EntityProperties` (clientbound `0x20`): attribute values plus their
/// UUID-keyed modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityProperties {
    pub entity_id: i32,
    pub properties: Vec<AttributeProperty>,
}

impl ReadFrom for EntityProperties {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let entity_id = i32::read(data)?;
        let properties = composite::read_property_array(data)?;
        Ok(Self { entity_id, properties })
    }
}

impl WriteTo for EntityProperties {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.entity_id.write(writer)?;
        composite::write_property_array(&self.properties, writer)
    }
}

/// `MultiBlockChange` (clientbound `0x22`): the one override version 4 adds
/// over version 3 in the original source, carrying a batch of packed block
/// changes within one chunk column.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiBlockChange {
    pub chunk_x: i32,
    pub chunk_z: i32,
    pub changes: Vec<BlockChange>,
}

impl ReadFrom for MultiBlockChange {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let chunk_x = i32::read(data)?;
        let chunk_z = i32::read(data)?;
        let changes = composite::read_changes(data)?;
        Ok(Self {
            chunk_x,
            chunk_z,
            changes,
        })
    }
}

impl WriteTo for MultiBlockChange {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.chunk_x.write(writer)?;
        self.chunk_z.write(writer)?;
        composite::write_changes(&self.changes, writer)
    }
}

/// `MultiBlockChange`'s pre-version-4 legacy form: a flat packed-`int`
/// array rather than a varint-counted `BlockChange` list.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiBlockChangeLegacy {
    pub chunk_x: i32,
    pub chunk_z: i32,
    pub changes: Vec<LegacyBlockChange>,
}

impl ReadFrom for MultiBlockChangeLegacy {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let chunk_x = i32::read(data)?;
        let chunk_z = i32::read(data)?;
        let changes = composite::read_changes_legacy(data)?;
        Ok(Self {
            chunk_x,
            chunk_z,
            changes,
        })
    }
}

impl WriteTo for MultiBlockChangeLegacy {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.chunk_x.write(writer)?;
        self.chunk_z.write(writer)?;
        composite::write_changes_legacy(&self.changes, writer)
    }
}

/// `MapChunkBulk` (clientbound `0x26`, 1.8 form): several chunk columns in
/// one packet, sharing a single concatenated data payload.
#[derive(Debug, Clone, PartialEq)]
pub struct MapChunkBulk(pub ChunkBulk);

impl ReadFrom for MapChunkBulk {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        composite::read_map_chunk_bulk(data).map(Self)
    }
}

impl WriteTo for MapChunkBulk {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        composite::write_map_chunk_bulk(&self.0, writer)
    }
}

/// `MapChunkBulk`'s pre-1.8 legacy form (per-chunk bitmaps instead of one
/// shared primary bitmap).
#[derive(Debug, Clone, PartialEq)]
pub struct MapChunkBulkLegacy(pub LegacyChunkBulk);

impl ReadFrom for MapChunkBulkLegacy {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        composite::read_map_chunk_bulk_legacy(data).map(Self)
    }
}

impl WriteTo for MapChunkBulkLegacy {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        composite::write_map_chunk_bulk_legacy(&self.0, writer)
    }
}

/// `Explosion` (clientbound `0x27`): a blast radius plus the list of blocks
/// it destroyed, given as offsets from the blast center.
#[derive(Debug, Clone, PartialEq)]
pub struct Explosion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    pub records: Vec<ExplosionRecord>,
    pub player_motion_x: f32,
    pub player_motion_y: f32,
    pub player_motion_z: f32,
}

impl ReadFrom for Explosion {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let x = f32::read(data)?;
        let y = f32::read(data)?;
        let z = f32::read(data)?;
        let radius = f32::read(data)?;
        let records = composite::read_explosion_records(data)?;
        let player_motion_x = f32::read(data)?;
        let player_motion_y = f32::read(data)?;
        let player_motion_z = f32::read(data)?;
        Ok(Self {
            x,
            y,
            z,
            radius,
            records,
            player_motion_x,
            player_motion_y,
            player_motion_z,
        })
    }
}

impl WriteTo for Explosion {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.x.write(writer)?;
        self.y.write(writer)?;
        self.z.write(writer)?;
        self.radius.write(writer)?;
        composite::write_explosion_records(&self.records, writer)?;
        self.player_motion_x.write(writer)?;
        self.player_motion_y.write(writer)?;
        self.player_motion_z.write(writer)
    }
}

/// `Statistics` (clientbound `0x3C`): the scoreboard's statistic values.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics(pub Vec<Statistic>);

impl ReadFrom for Statistics {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        composite::read_statistics(data).map(Self)
    }
}

impl WriteTo for Statistics {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        composite::write_statistics(&self.0, writer)
    }
}

/// `Maps` (clientbound): the in-world map icon overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Maps {
    pub item_damage: i32,
    pub icons: Vec<MapIcon>,
}

impl ReadFrom for Maps {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let item_damage = VarInt::read(data)?.0;
        let icons = composite::read_map_icons(data)?;
        Ok(Self { item_damage, icons })
    }
}

impl WriteTo for Maps {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        VarInt(self.item_damage).write(writer)?;
        composite::write_map_icons(&self.icons, writer)
    }
}

/// `PlayerListItem` (clientbound `0x38`, 1.8 form): the tab-list action
/// union (`spec.md` §4.2).
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerListItem(pub Vec<PlayerListEntry>);

impl ReadFrom for PlayerListItem {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        composite::read_player_list_actions(data).map(Self)
    }
}

impl WriteTo for PlayerListItem {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        composite::write_player_list_actions(&self.0, writer)
    }
}

/// `PlayerListItem`'s pre-1.8 legacy form: name plus an online flag.
#[derive(Debug, Clone, PartialEq, mcproto_macros::ReadFrom, mcproto_macros::WriteTo)]
pub struct PlayerListItemLegacy {
    #[strategy(Prefixed)]
    pub player_name: String,
    pub online: bool,
    pub ping: i16,
}

/// `EntityEquipment` (clientbound `0x04`, 1.8 form): an equipped item slot.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityEquipment {
    pub entity_id: i32,
    pub slot: i16,
    pub item: Option<Slot>,
}

impl ReadFrom for EntityEquipment {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let entity_id = i32::read(data)?;
        let slot = i16::read(data)?;
        let item = Option::<Slot>::read(data)?;
        Ok(Self { entity_id, slot, item })
    }
}

impl WriteTo for EntityEquipment {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.entity_id.write(writer)?;
        self.slot.write(writer)?;
        self.item.write(writer)
    }
}

/// `EntityEquipment`'s pre-1.8 legacy form, carrying a [`LegacySlot`].
#[derive(Debug, Clone, PartialEq)]
pub struct EntityEquipmentLegacy {
    pub entity_id: i32,
    pub slot: i16,
    pub item: Option<LegacySlot>,
}

impl ReadFrom for EntityEquipmentLegacy {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let entity_id = i32::read(data)?;
        let slot = i16::read(data)?;
        let item = Option::<LegacySlot>::read(data)?;
        Ok(Self { entity_id, slot, item })
    }
}

impl WriteTo for EntityEquipmentLegacy {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.entity_id.write(writer)?;
        self.slot.write(writer)?;
        self.item.write(writer)
    }
}

/// `SetSlot` (clientbound `0x2F`, 1.8 form): one inventory slot's contents.
#[derive(Debug, Clone, PartialEq)]
pub struct SetSlot {
    pub window_id: i8,
    pub slot: i16,
    pub item: Option<Slot>,
}

impl ReadFrom for SetSlot {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let window_id = i8::read(data)?;
        let slot = i16::read(data)?;
        let item = Option::<Slot>::read(data)?;
        Ok(Self { window_id, slot, item })
    }
}

impl WriteTo for SetSlot {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.window_id.write(writer)?;
        self.slot.write(writer)?;
        self.item.write(writer)
    }
}

/// `SetSlot`'s pre-1.8 legacy form, carrying a [`LegacySlot`].
#[derive(Debug, Clone, PartialEq)]
pub struct SetSlotLegacy {
    pub window_id: i8,
    pub slot: i16,
    pub item: Option<LegacySlot>,
}

impl ReadFrom for SetSlotLegacy {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let window_id = i8::read(data)?;
        let slot = i16::read(data)?;
        let item = Option::<LegacySlot>::read(data)?;
        Ok(Self { window_id, slot, item })
    }
}

impl WriteTo for SetSlotLegacy {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.window_id.write(writer)?;
        self.slot.write(writer)?;
        self.item.write(writer)
    }
}

/// `WindowItems` (clientbound `0x30`, 1.8 form): the full slot list of a
/// freshly-opened window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowItems {
    pub window_id: i8,
    pub items: Vec<Option<Slot>>,
}

impl ReadFrom for WindowItems {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let window_id = i8::read(data)?;
        let count = i16::read(data)?;
        let mut items = Vec::with_capacity(count.max(0) as usize);
        for _ in 0..count {
            items.push(Option::<Slot>::read(data)?);
        }
        Ok(Self { window_id, items })
    }
}

impl WriteTo for WindowItems {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.window_id.write(writer)?;
        (self.items.len() as i16).write(writer)?;
        for item in &self.items {
            item.write(writer)?;
        }
        Ok(())
    }
}

/// `PlayerBlockPlacement` (serverbound `0x08`, 1.8 form): the block a
/// player right-clicked, the item they were holding, and the click offset
/// on the target face.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBlockPlacement {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub direction: i8,
    pub held_item: Option<Slot>,
    pub cursor_x: i8,
    pub cursor_y: i8,
    pub cursor_z: i8,
}

impl ReadFrom for PlayerBlockPlacement {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let x = i32::read(data)?;
        let y = i32::read(data)?;
        let z = i32::read(data)?;
        let direction = i8::read(data)?;
        let held_item = Option::<Slot>::read(data)?;
        let cursor_x = i8::read(data)?;
        let cursor_y = i8::read(data)?;
        let cursor_z = i8::read(data)?;
        Ok(Self {
            x,
            y,
            z,
            direction,
            held_item,
            cursor_x,
            cursor_y,
            cursor_z,
        })
    }
}

impl WriteTo for PlayerBlockPlacement {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.x.write(writer)?;
        self.y.write(writer)?;
        self.z.write(writer)?;
        self.direction.write(writer)?;
        self.held_item.write(writer)?;
        self.cursor_x.write(writer)?;
        self.cursor_y.write(writer)?;
        self.cursor_z.write(writer)
    }
}

/// `ClickWindow` (serverbound `0x0E`, 1.8 form): one inventory-click event.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickWindow {
    pub window_id: i8,
    pub slot: i16,
    pub button: i8,
    pub action_number: i16,
    pub mode: i8,
    pub clicked_item: Option<Slot>,
}

impl ReadFrom for ClickWindow {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let window_id = i8::read(data)?;
        let slot = i16::read(data)?;
        let button = i8::read(data)?;
        let action_number = i16::read(data)?;
        let mode = i8::read(data)?;
        let clicked_item = Option::<Slot>::read(data)?;
        Ok(Self {
            window_id,
            slot,
            button,
            action_number,
            mode,
            clicked_item,
        })
    }
}

impl WriteTo for ClickWindow {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.window_id.write(writer)?;
        self.slot.write(writer)?;
        self.button.write(writer)?;
        self.action_number.write(writer)?;
        self.mode.write(writer)?;
        self.clicked_item.write(writer)
    }
}

/// `CreativeInventoryAction` (serverbound `0x10`, 1.8 form).
#[derive(Debug, Clone, PartialEq)]
pub struct CreativeInventoryAction {
    pub slot: i16,
    pub clicked_item: Option<Slot>,
}

impl ReadFrom for CreativeInventoryAction {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let slot = i16::read(data)?;
        let clicked_item = Option::<Slot>::read(data)?;
        Ok(Self { slot, clicked_item })
    }
}

impl WriteTo for CreativeInventoryAction {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.slot.write(writer)?;
        self.clicked_item.write(writer)
    }
}

/// `UpdateBlockEntity` (clientbound `0x35`): overwrites a block entity's
/// NBT data; `nbt_size == -1` means no data follows, the same `-1`-sentinel
/// convention [`LegacySlot`] uses for its `nbt` field.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBlockEntity {
    pub x: i32,
    pub y: i16,
    pub z: i32,
    pub action: u8,
    pub nbt: Option<Vec<u8>>,
}

impl ReadFrom for UpdateBlockEntity {
    fn read(data: &mut Cursor<&[u8]>) -> Result<Self, ReadingError> {
        let x = i32::read(data)?;
        let y = i16::read(data)?;
        let z = i32::read(data)?;
        let action = u8::read(data)?;
        let nbt_size = i16::read(data)?;
        let nbt = if nbt_size == -1 {
            None
        } else {
            let mut buf = vec![0u8; nbt_size.max(0) as usize];
            std::io::Read::read_exact(data, &mut buf).map_err(|_| ReadingError::CleanEof("block entity nbt".into()))?;
            Some(buf)
        };
        Ok(Self { x, y, z, action, nbt })
    }
}

impl WriteTo for UpdateBlockEntity {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        self.x.write(writer)?;
        self.y.write(writer)?;
        self.z.write(writer)?;
        self.action.write(writer)?;
        match &self.nbt {
            Some(bytes) => {
                (bytes.len() as i16).write(writer)?;
                writer.write_all(bytes).map_err(WritingError::Io)?;
            }
            None => (-1i16).write(writer)?,
        }
        Ok(())
    }
}

macro_rules! impl_packet_id {
    ($ty:ty, $id:expr) => {
        impl PacketId for $ty {
            fn packet_id(&self) -> i32 {
                $id
            }
        }
    };
}

impl_packet_id!(SpawnMobLegacy, 0x0F);
impl_packet_id!(EntityMetadata, 0x1C);
impl_packet_id!(EntityProperties, 0x20);
impl_packet_id!(MultiBlockChange, 0x22);
impl_packet_id!(MultiBlockChangeLegacy, 0x22);
impl_packet_id!(MapChunkBulk, 0x26);
impl_packet_id!(MapChunkBulkLegacy, 0x26);
impl_packet_id!(Explosion, 0x27);
impl_packet_id!(Statistics, 0x37);
impl_packet_id!(Maps, 0x34);
impl_packet_id!(PlayerListItem, 0x38);
impl_packet_id!(PlayerListItemLegacy, 0x38);
impl_packet_id!(EntityEquipment, 0x04);
impl_packet_id!(EntityEquipmentLegacy, 0x04);
impl_packet_id!(SetSlot, 0x2F);
impl_packet_id!(SetSlotLegacy, 0x2F);
impl_packet_id!(WindowItems, 0x30);
impl_packet_id!(PlayerBlockPlacement, 0x08);
impl_packet_id!(ClickWindow, 0x0E);
impl_packet_id!(CreativeInventoryAction, 0x10);
impl_packet_id!(SpawnPlayer, 0x0C);
impl_packet_id!(SpawnObject, 0x0E);
impl_packet_id!(Teams, 0x3E);
impl_packet_id!(TabComplete, 0x3A);
impl_packet_id!(UpdateBlockEntity, 0x35);
