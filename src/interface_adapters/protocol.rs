// Wire protocol DTOs and conversions for the game socket.
// Event names and payload shapes follow the server's message catalogue.

use serde::{Deserialize, Serialize};

use crate::domain::{FighterSnapshot, ProjectileSnapshot};
use crate::use_cases::types::{NetEvent, Outbound, RemoteJoin};

/// Messages the server sends to this client.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    // Assigned identity for the connection after the ready handshake.
    MyId { id: u64 },
    // Remote state refresh; also serves as an implicit join.
    OtherUpdate(FighterStateDto),
    // Explicit remote join with display metadata.
    PlayerJoin(PlayerJoinDto),
    // Explicit remote leave.
    PlayerLeft { id: u64 },
    // Opaque scoreboard payload for the presentation layer.
    UpdateHealth(serde_json::Value),
}

/// Messages this client sends to the server.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ClientMessage {
    // Announces intent to join a session.
    Ready { session_id: String },
    // Full local fighter snapshot, sent every frame.
    PlayerData(FighterStateDto),
    // One per detected collision.
    EnemyHit { id: u64 },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionDto {
    pub x: f32,
    pub y: f32,
}

/// Public fighter state as carried by `other_update` and `player_data`.
///
/// A payload missing a required field fails to parse and is skipped by the
/// network adapter, keeping the prior state (fail soft). Only genuinely
/// optional fields take defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterStateDto {
    pub id: u64,
    pub position: PositionDto,
    pub angle: f32,
    #[serde(default)]
    pub projs: Vec<ProjectileDto>,
    pub hp: i32,
    #[serde(default)]
    pub destroyed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileDto {
    pub position: PositionDto,
    pub angle: f32,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

/// Payload for an explicit remote join.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerJoinDto {
    pub id: u64,
    #[serde(default, rename = "pName")]
    pub p_name: String,
    #[serde(default = "default_health")]
    pub health: i32,
}

fn default_health() -> i32 {
    100
}

impl From<FighterStateDto> for FighterSnapshot {
    fn from(dto: FighterStateDto) -> Self {
        Self {
            id: dto.id,
            x: dto.position.x,
            y: dto.position.y,
            angle: dto.angle,
            health: dto.hp,
            destroyed: dto.destroyed,
            // Inert projectiles never re-enter the simulation.
            projectiles: dto
                .projs
                .into_iter()
                .filter(|p| p.active)
                .map(|p| ProjectileSnapshot {
                    x: p.position.x,
                    y: p.position.y,
                    angle: p.angle,
                })
                .collect(),
        }
    }
}

impl From<&FighterSnapshot> for FighterStateDto {
    fn from(snap: &FighterSnapshot) -> Self {
        Self {
            id: snap.id,
            position: PositionDto {
                x: snap.x,
                y: snap.y,
            },
            angle: snap.angle,
            projs: snap
                .projectiles
                .iter()
                .map(|p| ProjectileDto {
                    position: PositionDto { x: p.x, y: p.y },
                    angle: p.angle,
                    active: true,
                })
                .collect(),
            hp: snap.health,
            destroyed: snap.destroyed,
        }
    }
}

impl From<ServerMessage> for NetEvent {
    fn from(msg: ServerMessage) -> Self {
        match msg {
            ServerMessage::MyId { id } => NetEvent::MyId { id },
            ServerMessage::OtherUpdate(dto) => NetEvent::RemoteUpdate(dto.into()),
            ServerMessage::PlayerJoin(dto) => NetEvent::RemoteJoin(RemoteJoin {
                id: dto.id,
                name: dto.p_name,
                health: dto.health,
            }),
            ServerMessage::PlayerLeft { id } => NetEvent::RemoteLeave { id },
            ServerMessage::UpdateHealth(data) => NetEvent::ScoreboardUpdate(data),
        }
    }
}

impl From<Outbound> for ClientMessage {
    fn from(msg: Outbound) -> Self {
        match msg {
            Outbound::PlayerData(snap) => ClientMessage::PlayerData((&snap).into()),
            Outbound::EnemyHit { id } => ClientMessage::EnemyHit { id },
        }
    }
}
