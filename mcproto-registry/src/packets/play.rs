//! The `PLAY` state (`spec.md` §4.8): v0's field-list DSL from
//! `original_source/fastmc/proto.py`'s `protocol(0).state(3)` block,
//! transcribed as derived structs wherever the shape is a plain fixed-width
//! run, plus the composite-backed packets from [`super::play_composite`].
//!
//! The catalog matches the original source's true bounds: clientbound runs
//! `0x00`-`0x40` ("Disconnect"), serverbound `0x00`-`0x17` ("PluginMessage").
//! See `DESIGN.md` for the full per-packet grounding list.
use mcproto_codec::packet::PacketId;
use mcproto_macros::{ReadFrom, WriteTo};
use mcproto_utils::codec::BlockPos;

use super::play_composite::{
    ClickWindow, CreativeInventoryAction, EntityEquipment, EntityEquipmentLegacy, EntityMetadata, EntityProperties,
    Explosion, Maps, MapChunkBulk, MapChunkBulkLegacy, MultiBlockChange, MultiBlockChangeLegacy, PlayerBlockPlacement,
    PlayerListItem, PlayerListItemLegacy, SetSlot, SetSlotLegacy, SpawnMobLegacy, SpawnObject, SpawnPlayer,
    Statistics, TabComplete, Teams, UpdateBlockEntity, WindowItems,
};

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct KeepAlive {
    pub keepalive_id: i32,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct JoinGame {
    pub entity_id: i32,
    pub game_mode: u8,
    pub dimension: i8,
    pub difficulty: u8,
    pub max_players: u8,
    #[strategy(Prefixed)]
    pub level_type: String,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct ChatMessageClientbound {
    pub chat: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct TimeUpdate {
    pub world_age: i64,
    pub time_of_day: i64,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct SpawnPosition {
    pub position: BlockPos,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct HealthUpdate {
    pub health: f32,
    pub food: i16,
    pub food_saturation: f32,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct Respawn {
    pub dimension: i32,
    pub difficulty: u8,
    pub game_mode: u8,
    #[strategy(Prefixed)]
    pub level_type: String,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct PlayerPositionAndLookClientbound {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub yaw: f32,
    pub pitch: f32,
    pub on_ground: bool,
}

/// Clientbound `0x0A`: puts an entity into (or out of) bed.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct UseBed {
    pub entity_id: i32,
    pub x: i32,
    pub y: i8,
    pub z: i32,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct HeldItemChangeClientbound {
    pub slot: i8,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct AnimationClientbound {
    #[strategy(VarInt)]
    pub entity_id: i32,
    pub animation: u8,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct CollectItem {
    pub collected_entity_id: i32,
    pub collector_entity_id: i32,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct EntityVelocity {
    pub entity_id: i32,
    pub velocity_x: i16,
    pub velocity_y: i16,
    pub velocity_z: i16,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct DestroyEntities {
    #[strategy(Prefixed(u8))]
    pub entity_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct Entity {
    pub entity_id: i32,
}

/// Clientbound `0x10`: spawns a painting entity at a fixed block position.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct SpawnPainting {
    #[strategy(VarInt)]
    pub entity_id: i32,
    #[strategy(Prefixed)]
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub direction: i32,
}

/// Clientbound `0x11`: spawns an experience orb carrying `count` XP.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct SpawnExperienceOrb {
    #[strategy(VarInt)]
    pub entity_id: i32,
    #[strategy(Scaled(wire = i32, factor = 32))]
    pub x: f64,
    #[strategy(Scaled(wire = i32, factor = 32))]
    pub y: f64,
    #[strategy(Scaled(wire = i32, factor = 32))]
    pub z: f64,
    pub count: i16,
}

/// `spec.md` §8 scenario 6: an `int` field followed by three `byte32`
/// (`Scaled(wire = i8, factor = 32)`) fields, all fusable into one batched
/// read/write per `spec.md` §4.3.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct EntityRelativeMove {
    pub entity_id: i32,
    #[strategy(Scaled(wire = i8, factor = 32))]
    pub dx: f64,
    #[strategy(Scaled(wire = i8, factor = 32))]
    pub dy: f64,
    #[strategy(Scaled(wire = i8, factor = 32))]
    pub dz: f64,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct EntityLook {
    pub entity_id: i32,
    pub yaw: u8,
    pub pitch: u8,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct EntityLookAndRelativeMove {
    pub entity_id: i32,
    #[strategy(Scaled(wire = i8, factor = 32))]
    pub dx: f64,
    #[strategy(Scaled(wire = i8, factor = 32))]
    pub dy: f64,
    #[strategy(Scaled(wire = i8, factor = 32))]
    pub dz: f64,
    pub yaw: u8,
    pub pitch: u8,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct EntityTeleport {
    pub entity_id: i32,
    #[strategy(Scaled(wire = i32, factor = 32))]
    pub x: f64,
    #[strategy(Scaled(wire = i32, factor = 32))]
    pub y: f64,
    #[strategy(Scaled(wire = i32, factor = 32))]
    pub z: f64,
    pub yaw: u8,
    pub pitch: u8,
}

/// Clientbound `0x19`: an entity's head yaw, tracked separately from body
/// yaw so heads can turn independently of movement direction.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct EntityHeadLook {
    pub entity_id: i32,
    pub head_yaw: u8,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct EntityStatus {
    pub entity_id: i32,
    pub status: i8,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct EntityEffect {
    pub entity_id: i32,
    pub effect_id: i8,
    pub amplifier: i8,
    #[strategy(VarInt)]
    pub duration: i32,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct RemoveEntityEffect {
    pub entity_id: i32,
    pub effect_id: i8,
}

/// Clientbound `0x1B`: leashes (or unleashes) an entity to a vehicle/leash
/// holder.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct AttachEntity {
    pub entity_id: i32,
    pub vehicle_id: i32,
    pub leash: bool,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct SetExperience {
    pub experience_bar: f32,
    #[strategy(VarInt)]
    pub level: i32,
    #[strategy(VarInt)]
    pub total_experience: i32,
}

/// The legacy single-block-change form used through version 3 (version 4
/// doesn't touch this one, only `MultiBlockChange`).
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct BlockChangeSingle {
    pub x: i32,
    pub y: u8,
    pub z: i32,
    pub block_type: i16,
    pub block_metadata: i8,
}

/// Clientbound `0x21`: one chunk column, optionally continuous (full
/// column, no unload needed), with a zlib-compressed section payload.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct ChunkData {
    pub chunk_x: i32,
    pub chunk_z: i32,
    pub continuous: bool,
    pub chunk_bitmap: u16,
    pub add_bitmap: u16,
    #[strategy(Prefixed(i32))]
    pub compressed: Vec<u8>,
}

/// Clientbound `0x24`: a block-specific cosmetic event (note block pitch,
/// piston push, chest lid, ...); `b1`/`b2` meaning depends on `block_type`.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct BlockAction {
    pub x: i32,
    pub y: i16,
    pub z: i32,
    pub byte1: u8,
    pub byte2: u8,
    #[strategy(VarInt)]
    pub block_type: i32,
}

/// Clientbound `0x25`: the crack overlay shown while a block is being
/// mined; `destroy_stage` of `-1` clears it.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct BlockBreakAnimation {
    #[strategy(VarInt)]
    pub entity_id: i32,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub destroy_stage: i8,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct SoundEffect {
    #[strategy(Prefixed)]
    pub sound_name: String,
    #[strategy(Scaled(wire = i32, factor = 8))]
    pub x: f64,
    #[strategy(Scaled(wire = i32, factor = 8))]
    pub y: f64,
    #[strategy(Scaled(wire = i32, factor = 8))]
    pub z: f64,
    pub volume: f32,
    pub pitch: u8,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct ChangeGameState {
    pub reason: u8,
    pub value: f32,
}

/// Clientbound `0x28`: a world sound/visual event (door sound, extinguish,
/// record playback, ...) at a fixed block position.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct Effect {
    pub effect_id: i32,
    pub x: i32,
    pub y: i8,
    pub z: i32,
    pub data: i32,
    pub constant_volume: bool,
}

/// Clientbound `0x2A`: a named particle effect at a floating-point position
/// with a per-axis spread offset.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct Particle {
    #[strategy(Prefixed)]
    pub particle: String,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub offset_z: f32,
    pub speed: f32,
    pub number: i32,
}

/// Clientbound `0x2C`: spawns a lightning bolt (the only global entity).
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct SpawnGlobalEntity {
    #[strategy(VarInt)]
    pub entity_id: i32,
    pub entity_type: i8,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Clientbound `0x2D`: opens an inventory window; `entity_id` is present
/// only for the horse window (`window_type == 11`), the predicate
/// mechanism's motivating example (`DESIGN.md`).
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct OpenWindow {
    pub window_id: u8,
    pub window_type: u8,
    #[strategy(Prefixed)]
    pub title: String,
    pub slot_count: u8,
    pub use_title: bool,
    #[predicate = "window_type == 11"]
    pub entity_id: Option<i32>,
}

/// Clientbound `0x31`: updates one numeric window property (furnace
/// progress, enchanting levels, ...).
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct WindowProperty {
    pub window_id: u8,
    pub property: i16,
    pub value: i16,
}

/// Clientbound `0x32`: acknowledges (or rejects) a window click, mirroring
/// [`ConfirmTransactionServerbound`].
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct ConfirmTransactionClientbound {
    pub window_id: i8,
    pub action_number: i16,
    pub accepted: bool,
}

/// Clientbound `0x33`: sets the four lines of text on a sign.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct UpdateSignClientbound {
    pub x: i32,
    pub y: i16,
    pub z: i32,
    #[strategy(Prefixed)]
    pub line1: String,
    #[strategy(Prefixed)]
    pub line2: String,
    #[strategy(Prefixed)]
    pub line3: String,
    #[strategy(Prefixed)]
    pub line4: String,
}

/// Clientbound `0x36`: opens the sign-text editor for a just-placed sign.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct SignEditorOpen {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Clientbound `0x3B`: creates, updates, or removes a scoreboard objective.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct ScoreboardObjective {
    #[strategy(Prefixed)]
    pub name: String,
    #[strategy(Prefixed)]
    pub value: String,
    pub operation: i8,
}

/// Clientbound `0x3C`: sets or removes one scoreboard entry's score;
/// `score_name`/`value` are present only when `remove != 1` (the
/// predicate mechanism's other motivating example).
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct UpdateScore {
    #[strategy(Prefixed)]
    pub name: String,
    pub remove: i8,
    #[strategy(Prefixed)]
    #[predicate = "remove != 1"]
    pub score_name: Option<String>,
    #[predicate = "remove != 1"]
    pub value: Option<i32>,
}

/// Clientbound `0x3D`: shows a scoreboard objective in one of the sidebar
/// slots (`position`: `0` list, `1` sidebar, `2` below name).
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct DisplayScoreboard {
    pub position: i8,
    #[strategy(Prefixed)]
    pub score_name: String,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct PlayerAbilitiesClientbound {
    pub flags: i8,
    pub flying_speed: f32,
    pub walking_speed: f32,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct PluginMessageClientbound {
    #[strategy(Prefixed)]
    pub channel: String,
    #[strategy(Prefixed(i16))]
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct DisconnectPlay {
    pub reason: serde_json::Value,
}

/// Clientbound `0x2E`: closes a window the server opened, mirroring
/// [`CloseWindowServerbound`].
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct CloseWindowClientbound {
    pub window_id: u8,
}

/// `SetCompression` (v47): everything after this switches to the
/// compressed frame format at `threshold`. `spec.md` §6 has the server
/// send this both as `LOGIN` clientbound `0x03` and as `PLAY` clientbound
/// `0x46` (the id §8 scenario 4 tests); one struct, two catalog slots.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct SetCompression {
    #[strategy(VarInt)]
    pub threshold: i32,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct KeepAliveServerbound {
    pub keepalive_id: i32,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct ChatMessageServerbound {
    #[strategy(Prefixed)]
    pub message: String,
}

/// Serverbound `0x02`: a left- or right-click interaction with another
/// entity; `button` distinguishes attack from interact.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct UseEntity {
    pub target: i32,
    pub button: i8,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct PlayerServerbound {
    pub on_ground: bool,
}

/// Order `x, y, stance, z`: the original source's legacy field order, kept
/// as-is rather than "corrected" to `x, y, z, stance`.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct PlayerPosition {
    pub x: f64,
    pub y: f64,
    pub stance: f64,
    pub z: f64,
    pub on_ground: bool,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct PlayerLook {
    pub yaw: f32,
    pub pitch: f32,
    pub on_ground: bool,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct PlayerPositionAndLookServerbound {
    pub x: f64,
    pub y: f64,
    pub stance: f64,
    pub z: f64,
    pub yaw: f32,
    pub pitch: f32,
    pub on_ground: bool,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct PlayerDigging {
    pub status: i8,
    pub position: BlockPos,
    pub face: i8,
}

/// Serverbound `0x0C`: boat/minecart steering input.
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct SteerVehicle {
    pub sideways: f32,
    pub forward: f32,
    pub jump: bool,
    pub unmount: bool,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct HeldItemChangeServerbound {
    pub slot: i16,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct AnimationServerbound {
    pub entity_id: i32,
    pub animation: i8,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct EntityActionServerbound {
    pub entity_id: i32,
    pub action_id: i8,
    pub jump_boost: i32,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct CloseWindowServerbound {
    pub window_id: i8,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct ConfirmTransactionServerbound {
    pub window_id: i8,
    pub action_number: i16,
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct EnchantItem {
    pub window_id: i8,
    pub enchantment: i8,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct PlayerAbilitiesServerbound {
    pub flags: i8,
    pub flying_speed: f32,
    pub walking_speed: f32,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct TabCompleteServerbound {
    #[strategy(Prefixed)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct ClientSettings {
    #[strategy(Prefixed)]
    pub locale: String,
    pub view_distance: i8,
    pub chat_flags: i8,
    pub chat_colors: bool,
    pub difficulty: i8,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct ClientStatus {
    #[strategy(VarInt)]
    pub action_id: i32,
}

/// Serverbound `0x12`: submits the four lines of text for an open sign
/// editor, mirroring [`UpdateSignClientbound`].
#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct UpdateSignServerbound {
    pub x: i32,
    pub y: i16,
    pub z: i32,
    #[strategy(Prefixed)]
    pub line1: String,
    #[strategy(Prefixed)]
    pub line2: String,
    #[strategy(Prefixed)]
    pub line3: String,
    #[strategy(Prefixed)]
    pub line4: String,
}

#[derive(Debug, Clone, PartialEq, ReadFrom, WriteTo)]
pub struct PluginMessageServerbound {
    #[strategy(Prefixed)]
    pub channel: String,
    #[strategy(Prefixed(i16))]
    pub data: Vec<u8>,
}

/// Every packet a server sends in `PLAY`.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayClientbound {
    KeepAlive(KeepAlive),
    JoinGame(JoinGame),
    ChatMessage(ChatMessageClientbound),
    TimeUpdate(TimeUpdate),
    EntityEquipmentLegacy(EntityEquipmentLegacy),
    EntityEquipment(EntityEquipment),
    SpawnPosition(SpawnPosition),
    HealthUpdate(HealthUpdate),
    Respawn(Respawn),
    PlayerPositionAndLook(PlayerPositionAndLookClientbound),
    HeldItemChange(HeldItemChangeClientbound),
    UseBed(UseBed),
    Animation(AnimationClientbound),
    SpawnPlayer(SpawnPlayer),
    CollectItem(CollectItem),
    SpawnObject(SpawnObject),
    SpawnMobLegacy(SpawnMobLegacy),
    SpawnPainting(SpawnPainting),
    SpawnExperienceOrb(SpawnExperienceOrb),
    EntityVelocity(EntityVelocity),
    DestroyEntities(DestroyEntities),
    Entity(Entity),
    EntityRelativeMove(EntityRelativeMove),
    EntityLook(EntityLook),
    EntityLookAndRelativeMove(EntityLookAndRelativeMove),
    EntityTeleport(EntityTeleport),
    EntityHeadLook(EntityHeadLook),
    EntityStatus(EntityStatus),
    AttachEntity(AttachEntity),
    EntityMetadata(EntityMetadata),
    EntityEffect(EntityEffect),
    RemoveEntityEffect(RemoveEntityEffect),
    SetExperience(SetExperience),
    EntityProperties(EntityProperties),
    ChunkData(ChunkData),
    MultiBlockChangeLegacy(MultiBlockChangeLegacy),
    MultiBlockChange(MultiBlockChange),
    BlockChangeSingle(BlockChangeSingle),
    BlockAction(BlockAction),
    BlockBreakAnimation(BlockBreakAnimation),
    MapChunkBulkLegacy(MapChunkBulkLegacy),
    MapChunkBulk(MapChunkBulk),
    Explosion(Explosion),
    Effect(Effect),
    SoundEffect(SoundEffect),
    Particle(Particle),
    ChangeGameState(ChangeGameState),
    SpawnGlobalEntity(SpawnGlobalEntity),
    OpenWindow(OpenWindow),
    CloseWindow(CloseWindowClientbound),
    SetSlotLegacy(SetSlotLegacy),
    SetSlot(SetSlot),
    WindowItems(WindowItems),
    WindowProperty(WindowProperty),
    ConfirmTransaction(ConfirmTransactionClientbound),
    UpdateSign(UpdateSignClientbound),
    Maps(Maps),
    UpdateBlockEntity(UpdateBlockEntity),
    SignEditorOpen(SignEditorOpen),
    Statistics(Statistics),
    PlayerListItemLegacy(PlayerListItemLegacy),
    PlayerListItem(PlayerListItem),
    PlayerAbilities(PlayerAbilitiesClientbound),
    TabComplete(TabComplete),
    ScoreboardObjective(ScoreboardObjective),
    UpdateScore(UpdateScore),
    DisplayScoreboard(DisplayScoreboard),
    Teams(Teams),
    PluginMessage(PluginMessageClientbound),
    Disconnect(DisconnectPlay),
    SetCompression(SetCompression),
}

impl PacketId for PlayClientbound {
    fn packet_id(&self) -> i32 {
        match self {
            Self::KeepAlive(_) => 0x00,
            Self::JoinGame(_) => 0x01,
            Self::ChatMessage(_) => 0x02,
            Self::TimeUpdate(_) => 0x03,
            Self::EntityEquipmentLegacy(p) => p.packet_id(),
            Self::EntityEquipment(p) => p.packet_id(),
            Self::SpawnPosition(_) => 0x05,
            Self::HealthUpdate(_) => 0x06,
            Self::Respawn(_) => 0x07,
            Self::PlayerPositionAndLook(_) => 0x08,
            Self::HeldItemChange(_) => 0x09,
            Self::UseBed(_) => 0x0A,
            Self::Animation(_) => 0x0B,
            Self::SpawnPlayer(p) => p.packet_id(),
            Self::CollectItem(_) => 0x0D,
            Self::SpawnObject(p) => p.packet_id(),
            Self::SpawnMobLegacy(p) => p.packet_id(),
            Self::SpawnPainting(_) => 0x10,
            Self::SpawnExperienceOrb(_) => 0x11,
            Self::EntityVelocity(_) => 0x12,
            Self::DestroyEntities(_) => 0x13,
            Self::Entity(_) => 0x14,
            Self::EntityRelativeMove(_) => 0x15,
            Self::EntityLook(_) => 0x16,
            Self::EntityLookAndRelativeMove(_) => 0x17,
            Self::EntityTeleport(_) => 0x18,
            Self::EntityHeadLook(_) => 0x19,
            Self::EntityStatus(_) => 0x1A,
            Self::AttachEntity(_) => 0x1B,
            Self::EntityMetadata(p) => p.packet_id(),
            Self::EntityEffect(_) => 0x1D,
            Self::RemoveEntityEffect(_) => 0x1E,
            Self::SetExperience(_) => 0x1F,
            Self::EntityProperties(p) => p.packet_id(),
            Self::ChunkData(_) => 0x21,
            Self::MultiBlockChangeLegacy(p) => p.packet_id(),
            Self::MultiBlockChange(p) => p.packet_id(),
            Self::BlockChangeSingle(_) => 0x23,
            Self::BlockAction(_) => 0x24,
            Self::BlockBreakAnimation(_) => 0x25,
            Self::MapChunkBulkLegacy(p) => p.packet_id(),
            Self::MapChunkBulk(p) => p.packet_id(),
            Self::Explosion(p) => p.packet_id(),
            Self::Effect(_) => 0x28,
            Self::SoundEffect(_) => 0x29,
            Self::Particle(_) => 0x2A,
            Self::ChangeGameState(_) => 0x2B,
            Self::SpawnGlobalEntity(_) => 0x2C,
            Self::OpenWindow(_) => 0x2D,
            Self::CloseWindow(_) => 0x2E,
            Self::SetSlotLegacy(p) => p.packet_id(),
            Self::SetSlot(p) => p.packet_id(),
            Self::WindowItems(p) => p.packet_id(),
            Self::WindowProperty(_) => 0x31,
            Self::ConfirmTransaction(_) => 0x32,
            Self::UpdateSign(_) => 0x33,
            Self::Maps(p) => p.packet_id(),
            Self::UpdateBlockEntity(p) => p.packet_id(),
            Self::SignEditorOpen(_) => 0x36,
            Self::Statistics(p) => p.packet_id(),
            Self::PlayerListItemLegacy(p) => p.packet_id(),
            Self::PlayerListItem(p) => p.packet_id(),
            Self::PlayerAbilities(_) => 0x39,
            Self::TabComplete(p) => p.packet_id(),
            Self::ScoreboardObjective(_) => 0x3B,
            Self::UpdateScore(_) => 0x3C,
            Self::DisplayScoreboard(_) => 0x3D,
            Self::Teams(p) => p.packet_id(),
            Self::PluginMessage(_) => 0x3F,
            Self::Disconnect(_) => 0x40,
            Self::SetCompression(_) => 0x46,
        }
    }
}

/// Every packet a client sends in `PLAY`.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayServerbound {
    KeepAlive(KeepAliveServerbound),
    ChatMessage(ChatMessageServerbound),
    UseEntity(UseEntity),
    Player(PlayerServerbound),
    PlayerPosition(PlayerPosition),
    PlayerLook(PlayerLook),
    PlayerPositionAndLook(PlayerPositionAndLookServerbound),
    PlayerDigging(PlayerDigging),
    PlayerBlockPlacement(PlayerBlockPlacement),
    HeldItemChange(HeldItemChangeServerbound),
    Animation(AnimationServerbound),
    EntityAction(EntityActionServerbound),
    SteerVehicle(SteerVehicle),
    CloseWindow(CloseWindowServerbound),
    ClickWindow(ClickWindow),
    ConfirmTransaction(ConfirmTransactionServerbound),
    CreativeInventoryAction(CreativeInventoryAction),
    EnchantItem(EnchantItem),
    PlayerAbilities(PlayerAbilitiesServerbound),
    TabComplete(TabCompleteServerbound),
    ClientSettings(ClientSettings),
    ClientStatus(ClientStatus),
    UpdateSign(UpdateSignServerbound),
    PluginMessage(PluginMessageServerbound),
}

impl PacketId for PlayServerbound {
    fn packet_id(&self) -> i32 {
        match self {
            Self::KeepAlive(_) => 0x00,
            Self::ChatMessage(_) => 0x01,
            Self::UseEntity(_) => 0x02,
            Self::Player(_) => 0x03,
            Self::PlayerPosition(_) => 0x04,
            Self::PlayerLook(_) => 0x05,
            Self::PlayerPositionAndLook(_) => 0x06,
            Self::PlayerDigging(_) => 0x07,
            Self::PlayerBlockPlacement(p) => p.packet_id(),
            Self::HeldItemChange(_) => 0x09,
            Self::Animation(_) => 0x0A,
            Self::EntityAction(_) => 0x0B,
            Self::SteerVehicle(_) => 0x0C,
            Self::CloseWindow(_) => 0x0D,
            Self::ClickWindow(p) => p.packet_id(),
            Self::ConfirmTransaction(_) => 0x0F,
            Self::CreativeInventoryAction(p) => p.packet_id(),
            Self::EnchantItem(_) => 0x11,
            Self::PlayerAbilities(_) => 0x13,
            Self::TabComplete(_) => 0x14,
            Self::ClientSettings(_) => 0x15,
            Self::ClientStatus(_) => 0x16,
            Self::UpdateSign(_) => 0x12,
            Self::PluginMessage(_) => 0x17,
        }
    }
}
