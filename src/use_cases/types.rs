// Use-case level inputs/outputs for the simulation loop.

use crate::domain::FighterSnapshot;

/// Inbound network events, already decoded from the wire.
#[derive(Debug, Clone)]
pub enum NetEvent {
    /// Handshake result: assigns the local fighter's identity.
    MyId { id: u64 },
    /// Remote state refresh; an unknown id is treated as a join.
    RemoteUpdate(FighterSnapshot),
    /// Explicit remote join.
    RemoteJoin(RemoteJoin),
    /// Explicit remote leave. Unknown ids are a no-op.
    RemoteLeave { id: u64 },
    /// Opaque scoreboard payload, passed through to the presentation layer.
    ScoreboardUpdate(serde_json::Value),
}

#[derive(Debug, Clone)]
pub struct RemoteJoin {
    pub id: u64,
    pub name: String,
    pub health: i32,
}

/// Messages the simulation loop emits toward the network adapter.
#[derive(Debug, Clone)]
pub enum Outbound {
    /// Full local fighter snapshot, sent every frame once in game.
    PlayerData(FighterSnapshot),
    /// One per detected collision.
    EnemyHit { id: u64 },
}

/// Lifecycle of a client session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No local identity yet; only the ambient layer runs.
    Connecting,
    /// Local fighter exists, full loop runs.
    InGame,
    /// Torn down; no further frames are produced.
    Terminated,
}
