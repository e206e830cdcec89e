//! Protocol version 0: the base catalog every later version is
//! `based_on`, grounded directly on `protocol(0)` in
//! `original_source/fastmc/proto.py`.
use super::reg;
use crate::packets::play::*;
use crate::packets::play_composite::*;
use crate::table::ProtocolTables;
use crate::{ClientboundPacket as CP, ServerboundPacket as SP};

use crate::packets::handshake::Handshake;
use crate::packets::login::{
    EncryptionRequest, EncryptionResponse, LoginClientbound as LC, LoginDisconnect, LoginServerbound as LS,
    LoginStart, LoginSuccess,
};
use crate::packets::status::{
    StatusClientbound as SC, StatusPing, StatusPong, StatusRequestPacket, StatusResponse, StatusServerbound as SS,
};

#[allow(clippy::too_many_lines)]
pub fn build() -> ProtocolTables<SP, CP> {
    let mut t = ProtocolTables::new();

    reg!(t.handshake_serverbound, 0x00, SP::Handshake, SP::Handshake(inner) => inner, Handshake);

    reg!(t.status_serverbound, 0x00, |p| SP::Status(SS::Request(p)), SP::Status(SS::Request(inner)) => inner, StatusRequestPacket);
    reg!(t.status_serverbound, 0x01, |p| SP::Status(SS::Ping(p)), SP::Status(SS::Ping(inner)) => inner, StatusPing);
    reg!(t.status_clientbound, 0x00, |p| CP::Status(SC::Response(p)), CP::Status(SC::Response(inner)) => inner, StatusResponse);
    reg!(t.status_clientbound, 0x01, |p| CP::Status(SC::Pong(p)), CP::Status(SC::Pong(inner)) => inner, StatusPong);

    reg!(t.login_serverbound, 0x00, |p| SP::Login(LS::LoginStart(p)), SP::Login(LS::LoginStart(inner)) => inner, LoginStart);
    reg!(t.login_serverbound, 0x01, |p| SP::Login(LS::EncryptionResponse(p)), SP::Login(LS::EncryptionResponse(inner)) => inner, EncryptionResponse);
    reg!(t.login_clientbound, 0x00, |p| CP::Login(LC::Disconnect(p)), CP::Login(LC::Disconnect(inner)) => inner, LoginDisconnect);
    reg!(t.login_clientbound, 0x01, |p| CP::Login(LC::EncryptionRequest(p)), CP::Login(LC::EncryptionRequest(inner)) => inner, EncryptionRequest);
    reg!(t.login_clientbound, 0x02, |p| CP::Login(LC::LoginSuccess(p)), CP::Login(LC::LoginSuccess(inner)) => inner, LoginSuccess);

    // PLAY, clientbound.
    reg!(t.play_clientbound, 0x00, |p| CP::Play(PlayClientbound::KeepAlive(p)), CP::Play(PlayClientbound::KeepAlive(inner)) => inner, KeepAlive);
    reg!(t.play_clientbound, 0x01, |p| CP::Play(PlayClientbound::JoinGame(p)), CP::Play(PlayClientbound::JoinGame(inner)) => inner, JoinGame);
    reg!(t.play_clientbound, 0x02, |p| CP::Play(PlayClientbound::ChatMessage(p)), CP::Play(PlayClientbound::ChatMessage(inner)) => inner, ChatMessageClientbound);
    reg!(t.play_clientbound, 0x03, |p| CP::Play(PlayClientbound::TimeUpdate(p)), CP::Play(PlayClientbound::TimeUpdate(inner)) => inner, TimeUpdate);
    reg!(t.play_clientbound, 0x04, |p| CP::Play(PlayClientbound::EntityEquipmentLegacy(p)), CP::Play(PlayClientbound::EntityEquipmentLegacy(inner)) => inner, EntityEquipmentLegacy);
    reg!(t.play_clientbound, 0x05, |p| CP::Play(PlayClientbound::SpawnPosition(p)), CP::Play(PlayClientbound::SpawnPosition(inner)) => inner, SpawnPosition);
    reg!(t.play_clientbound, 0x06, |p| CP::Play(PlayClientbound::HealthUpdate(p)), CP::Play(PlayClientbound::HealthUpdate(inner)) => inner, HealthUpdate);
    reg!(t.play_clientbound, 0x07, |p| CP::Play(PlayClientbound::Respawn(p)), CP::Play(PlayClientbound::Respawn(inner)) => inner, Respawn);
    reg!(t.play_clientbound, 0x08, |p| CP::Play(PlayClientbound::PlayerPositionAndLook(p)), CP::Play(PlayClientbound::PlayerPositionAndLook(inner)) => inner, PlayerPositionAndLookClientbound);
    reg!(t.play_clientbound, 0x09, |p| CP::Play(PlayClientbound::HeldItemChange(p)), CP::Play(PlayClientbound::HeldItemChange(inner)) => inner, HeldItemChangeClientbound);
    reg!(t.play_clientbound, 0x0A, |p| CP::Play(PlayClientbound::UseBed(p)), CP::Play(PlayClientbound::UseBed(inner)) => inner, UseBed);
    reg!(t.play_clientbound, 0x0B, |p| CP::Play(PlayClientbound::Animation(p)), CP::Play(PlayClientbound::Animation(inner)) => inner, AnimationClientbound);
    reg!(t.play_clientbound, 0x0C, |p| CP::Play(PlayClientbound::SpawnPlayer(p)), CP::Play(PlayClientbound::SpawnPlayer(inner)) => inner, SpawnPlayer);
    reg!(t.play_clientbound, 0x0D, |p| CP::Play(PlayClientbound::CollectItem(p)), CP::Play(PlayClientbound::CollectItem(inner)) => inner, CollectItem);
    reg!(t.play_clientbound, 0x0E, |p| CP::Play(PlayClientbound::SpawnObject(p)), CP::Play(PlayClientbound::SpawnObject(inner)) => inner, SpawnObject);
    reg!(t.play_clientbound, 0x0F, |p| CP::Play(PlayClientbound::SpawnMobLegacy(p)), CP::Play(PlayClientbound::SpawnMobLegacy(inner)) => inner, SpawnMobLegacy);
    reg!(t.play_clientbound, 0x10, |p| CP::Play(PlayClientbound::SpawnPainting(p)), CP::Play(PlayClientbound::SpawnPainting(inner)) => inner, SpawnPainting);
    reg!(t.play_clientbound, 0x11, |p| CP::Play(PlayClientbound::SpawnExperienceOrb(p)), CP::Play(PlayClientbound::SpawnExperienceOrb(inner)) => inner, SpawnExperienceOrb);
    reg!(t.play_clientbound, 0x12, |p| CP::Play(PlayClientbound::EntityVelocity(p)), CP::Play(PlayClientbound::EntityVelocity(inner)) => inner, EntityVelocity);
    reg!(t.play_clientbound, 0x13, |p| CP::Play(PlayClientbound::DestroyEntities(p)), CP::Play(PlayClientbound::DestroyEntities(inner)) => inner, DestroyEntities);
    reg!(t.play_clientbound, 0x14, |p| CP::Play(PlayClientbound::Entity(p)), CP::Play(PlayClientbound::Entity(inner)) => inner, Entity);
    reg!(t.play_clientbound, 0x15, |p| CP::Play(PlayClientbound::EntityRelativeMove(p)), CP::Play(PlayClientbound::EntityRelativeMove(inner)) => inner, EntityRelativeMove);
    reg!(t.play_clientbound, 0x16, |p| CP::Play(PlayClientbound::EntityLook(p)), CP::Play(PlayClientbound::EntityLook(inner)) => inner, EntityLook);
    reg!(t.play_clientbound, 0x17, |p| CP::Play(PlayClientbound::EntityLookAndRelativeMove(p)), CP::Play(PlayClientbound::EntityLookAndRelativeMove(inner)) => inner, EntityLookAndRelativeMove);
    reg!(t.play_clientbound, 0x18, |p| CP::Play(PlayClientbound::EntityTeleport(p)), CP::Play(PlayClientbound::EntityTeleport(inner)) => inner, EntityTeleport);
    reg!(t.play_clientbound, 0x19, |p| CP::Play(PlayClientbound::EntityHeadLook(p)), CP::Play(PlayClientbound::EntityHeadLook(inner)) => inner, EntityHeadLook);
    reg!(t.play_clientbound, 0x1A, |p| CP::Play(PlayClientbound::EntityStatus(p)), CP::Play(PlayClientbound::EntityStatus(inner)) => inner, EntityStatus);
    reg!(t.play_clientbound, 0x1B, |p| CP::Play(PlayClientbound::AttachEntity(p)), CP::Play(PlayClientbound::AttachEntity(inner)) => inner, AttachEntity);
    reg!(t.play_clientbound, 0x1C, |p| CP::Play(PlayClientbound::EntityMetadata(p)), CP::Play(PlayClientbound::EntityMetadata(inner)) => inner, EntityMetadata);
    reg!(t.play_clientbound, 0x1D, |p| CP::Play(PlayClientbound::EntityEffect(p)), CP::Play(PlayClientbound::EntityEffect(inner)) => inner, EntityEffect);
    reg!(t.play_clientbound, 0x1E, |p| CP::Play(PlayClientbound::RemoveEntityEffect(p)), CP::Play(PlayClientbound::RemoveEntityEffect(inner)) => inner, RemoveEntityEffect);
    reg!(t.play_clientbound, 0x1F, |p| CP::Play(PlayClientbound::SetExperience(p)), CP::Play(PlayClientbound::SetExperience(inner)) => inner, SetExperience);
    reg!(t.play_clientbound, 0x20, |p| CP::Play(PlayClientbound::EntityProperties(p)), CP::Play(PlayClientbound::EntityProperties(inner)) => inner, EntityProperties);
    reg!(t.play_clientbound, 0x21, |p| CP::Play(PlayClientbound::ChunkData(p)), CP::Play(PlayClientbound::ChunkData(inner)) => inner, ChunkData);
    reg!(t.play_clientbound, 0x22, |p| CP::Play(PlayClientbound::MultiBlockChangeLegacy(p)), CP::Play(PlayClientbound::MultiBlockChangeLegacy(inner)) => inner, MultiBlockChangeLegacy);
    reg!(t.play_clientbound, 0x23, |p| CP::Play(PlayClientbound::BlockChangeSingle(p)), CP::Play(PlayClientbound::BlockChangeSingle(inner)) => inner, BlockChangeSingle);
    reg!(t.play_clientbound, 0x24, |p| CP::Play(PlayClientbound::BlockAction(p)), CP::Play(PlayClientbound::BlockAction(inner)) => inner, BlockAction);
    reg!(t.play_clientbound, 0x25, |p| CP::Play(PlayClientbound::BlockBreakAnimation(p)), CP::Play(PlayClientbound::BlockBreakAnimation(inner)) => inner, BlockBreakAnimation);
    reg!(t.play_clientbound, 0x26, |p| CP::Play(PlayClientbound::MapChunkBulkLegacy(p)), CP::Play(PlayClientbound::MapChunkBulkLegacy(inner)) => inner, MapChunkBulkLegacy);
    reg!(t.play_clientbound, 0x27, |p| CP::Play(PlayClientbound::Explosion(p)), CP::Play(PlayClientbound::Explosion(inner)) => inner, Explosion);
    reg!(t.play_clientbound, 0x28, |p| CP::Play(PlayClientbound::Effect(p)), CP::Play(PlayClientbound::Effect(inner)) => inner, Effect);
    reg!(t.play_clientbound, 0x29, |p| CP::Play(PlayClientbound::SoundEffect(p)), CP::Play(PlayClientbound::SoundEffect(inner)) => inner, SoundEffect);
    reg!(t.play_clientbound, 0x2A, |p| CP::Play(PlayClientbound::Particle(p)), CP::Play(PlayClientbound::Particle(inner)) => inner, Particle);
    reg!(t.play_clientbound, 0x2B, |p| CP::Play(PlayClientbound::ChangeGameState(p)), CP::Play(PlayClientbound::ChangeGameState(inner)) => inner, ChangeGameState);
    reg!(t.play_clientbound, 0x2C, |p| CP::Play(PlayClientbound::SpawnGlobalEntity(p)), CP::Play(PlayClientbound::SpawnGlobalEntity(inner)) => inner, SpawnGlobalEntity);
    reg!(t.play_clientbound, 0x2D, |p| CP::Play(PlayClientbound::OpenWindow(p)), CP::Play(PlayClientbound::OpenWindow(inner)) => inner, OpenWindow);
    reg!(t.play_clientbound, 0x2E, |p| CP::Play(PlayClientbound::CloseWindow(p)), CP::Play(PlayClientbound::CloseWindow(inner)) => inner, CloseWindowClientbound);
    reg!(t.play_clientbound, 0x2F, |p| CP::Play(PlayClientbound::SetSlotLegacy(p)), CP::Play(PlayClientbound::SetSlotLegacy(inner)) => inner, SetSlotLegacy);
    reg!(t.play_clientbound, 0x30, |p| CP::Play(PlayClientbound::WindowItems(p)), CP::Play(PlayClientbound::WindowItems(inner)) => inner, WindowItems);
    reg!(t.play_clientbound, 0x31, |p| CP::Play(PlayClientbound::WindowProperty(p)), CP::Play(PlayClientbound::WindowProperty(inner)) => inner, WindowProperty);
    reg!(t.play_clientbound, 0x32, |p| CP::Play(PlayClientbound::ConfirmTransaction(p)), CP::Play(PlayClientbound::ConfirmTransaction(inner)) => inner, ConfirmTransactionClientbound);
    reg!(t.play_clientbound, 0x33, |p| CP::Play(PlayClientbound::UpdateSign(p)), CP::Play(PlayClientbound::UpdateSign(inner)) => inner, UpdateSignClientbound);
    reg!(t.play_clientbound, 0x34, |p| CP::Play(PlayClientbound::Maps(p)), CP::Play(PlayClientbound::Maps(inner)) => inner, Maps);
    reg!(t.play_clientbound, 0x35, |p| CP::Play(PlayClientbound::UpdateBlockEntity(p)), CP::Play(PlayClientbound::UpdateBlockEntity(inner)) => inner, UpdateBlockEntity);
    reg!(t.play_clientbound, 0x36, |p| CP::Play(PlayClientbound::SignEditorOpen(p)), CP::Play(PlayClientbound::SignEditorOpen(inner)) => inner, SignEditorOpen);
    reg!(t.play_clientbound, 0x37, |p| CP::Play(PlayClientbound::Statistics(p)), CP::Play(PlayClientbound::Statistics(inner)) => inner, Statistics);
    reg!(t.play_clientbound, 0x38, |p| CP::Play(PlayClientbound::PlayerListItemLegacy(p)), CP::Play(PlayClientbound::PlayerListItemLegacy(inner)) => inner, PlayerListItemLegacy);
    reg!(t.play_clientbound, 0x39, |p| CP::Play(PlayClientbound::PlayerAbilities(p)), CP::Play(PlayClientbound::PlayerAbilities(inner)) => inner, PlayerAbilitiesClientbound);
    reg!(t.play_clientbound, 0x3A, |p| CP::Play(PlayClientbound::TabComplete(p)), CP::Play(PlayClientbound::TabComplete(inner)) => inner, TabComplete);
    reg!(t.play_clientbound, 0x3B, |p| CP::Play(PlayClientbound::ScoreboardObjective(p)), CP::Play(PlayClientbound::ScoreboardObjective(inner)) => inner, ScoreboardObjective);
    reg!(t.play_clientbound, 0x3C, |p| CP::Play(PlayClientbound::UpdateScore(p)), CP::Play(PlayClientbound::UpdateScore(inner)) => inner, UpdateScore);
    reg!(t.play_clientbound, 0x3D, |p| CP::Play(PlayClientbound::DisplayScoreboard(p)), CP::Play(PlayClientbound::DisplayScoreboard(inner)) => inner, DisplayScoreboard);
    reg!(t.play_clientbound, 0x3E, |p| CP::Play(PlayClientbound::Teams(p)), CP::Play(PlayClientbound::Teams(inner)) => inner, Teams);
    reg!(t.play_clientbound, 0x3F, |p| CP::Play(PlayClientbound::PluginMessage(p)), CP::Play(PlayClientbound::PluginMessage(inner)) => inner, PluginMessageClientbound);
    reg!(t.play_clientbound, 0x40, |p| CP::Play(PlayClientbound::Disconnect(p)), CP::Play(PlayClientbound::Disconnect(inner)) => inner, DisconnectPlay);

    // PLAY, serverbound.
    reg!(t.play_serverbound, 0x00, |p| SP::Play(PlayServerbound::KeepAlive(p)), SP::Play(PlayServerbound::KeepAlive(inner)) => inner, KeepAliveServerbound);
    reg!(t.play_serverbound, 0x01, |p| SP::Play(PlayServerbound::ChatMessage(p)), SP::Play(PlayServerbound::ChatMessage(inner)) => inner, ChatMessageServerbound);
    reg!(t.play_serverbound, 0x02, |p| SP::Play(PlayServerbound::UseEntity(p)), SP::Play(PlayServerbound::UseEntity(inner)) => inner, UseEntity);
    reg!(t.play_serverbound, 0x03, |p| SP::Play(PlayServerbound::Player(p)), SP::Play(PlayServerbound::Player(inner)) => inner, PlayerServerbound);
    reg!(t.play_serverbound, 0x04, |p| SP::Play(PlayServerbound::PlayerPosition(p)), SP::Play(PlayServerbound::PlayerPosition(inner)) => inner, PlayerPosition);
    reg!(t.play_serverbound, 0x05, |p| SP::Play(PlayServerbound::PlayerLook(p)), SP::Play(PlayServerbound::PlayerLook(inner)) => inner, PlayerLook);
    reg!(t.play_serverbound, 0x06, |p| SP::Play(PlayServerbound::PlayerPositionAndLook(p)), SP::Play(PlayServerbound::PlayerPositionAndLook(inner)) => inner, PlayerPositionAndLookServerbound);
    reg!(t.play_serverbound, 0x07, |p| SP::Play(PlayServerbound::PlayerDigging(p)), SP::Play(PlayServerbound::PlayerDigging(inner)) => inner, PlayerDigging);
    reg!(t.play_serverbound, 0x08, |p| SP::Play(PlayServerbound::PlayerBlockPlacement(p)), SP::Play(PlayServerbound::PlayerBlockPlacement(inner)) => inner, PlayerBlockPlacement);
    reg!(t.play_serverbound, 0x09, |p| SP::Play(PlayServerbound::HeldItemChange(p)), SP::Play(PlayServerbound::HeldItemChange(inner)) => inner, HeldItemChangeServerbound);
    reg!(t.play_serverbound, 0x0A, |p| SP::Play(PlayServerbound::Animation(p)), SP::Play(PlayServerbound::Animation(inner)) => inner, AnimationServerbound);
    reg!(t.play_serverbound, 0x0B, |p| SP::Play(PlayServerbound::EntityAction(p)), SP::Play(PlayServerbound::EntityAction(inner)) => inner, EntityActionServerbound);
    reg!(t.play_serverbound, 0x0C, |p| SP::Play(PlayServerbound::SteerVehicle(p)), SP::Play(PlayServerbound::SteerVehicle(inner)) => inner, SteerVehicle);
    reg!(t.play_serverbound, 0x0D, |p| SP::Play(PlayServerbound::CloseWindow(p)), SP::Play(PlayServerbound::CloseWindow(inner)) => inner, CloseWindowServerbound);
    reg!(t.play_serverbound, 0x0E, |p| SP::Play(PlayServerbound::ClickWindow(p)), SP::Play(PlayServerbound::ClickWindow(inner)) => inner, ClickWindow);
    reg!(t.play_serverbound, 0x0F, |p| SP::Play(PlayServerbound::ConfirmTransaction(p)), SP::Play(PlayServerbound::ConfirmTransaction(inner)) => inner, ConfirmTransactionServerbound);
    reg!(t.play_serverbound, 0x10, |p| SP::Play(PlayServerbound::CreativeInventoryAction(p)), SP::Play(PlayServerbound::CreativeInventoryAction(inner)) => inner, CreativeInventoryAction);
    reg!(t.play_serverbound, 0x11, |p| SP::Play(PlayServerbound::EnchantItem(p)), SP::Play(PlayServerbound::EnchantItem(inner)) => inner, EnchantItem);
    reg!(t.play_serverbound, 0x13, |p| SP::Play(PlayServerbound::PlayerAbilities(p)), SP::Play(PlayServerbound::PlayerAbilities(inner)) => inner, PlayerAbilitiesServerbound);
    reg!(t.play_serverbound, 0x14, |p| SP::Play(PlayServerbound::TabComplete(p)), SP::Play(PlayServerbound::TabComplete(inner)) => inner, TabCompleteServerbound);
    reg!(t.play_serverbound, 0x15, |p| SP::Play(PlayServerbound::ClientSettings(p)), SP::Play(PlayServerbound::ClientSettings(inner)) => inner, ClientSettings);
    reg!(t.play_serverbound, 0x16, |p| SP::Play(PlayServerbound::ClientStatus(p)), SP::Play(PlayServerbound::ClientStatus(inner)) => inner, ClientStatus);
    reg!(t.play_serverbound, 0x12, |p| SP::Play(PlayServerbound::UpdateSign(p)), SP::Play(PlayServerbound::UpdateSign(inner)) => inner, UpdateSignServerbound);
    reg!(t.play_serverbound, 0x17, |p| SP::Play(PlayServerbound::PluginMessage(p)), SP::Play(PlayServerbound::PluginMessage(inner)) => inner, PluginMessageServerbound);

    t
}
