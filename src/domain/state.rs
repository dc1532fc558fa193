// Domain-level simulation entities and input/snapshot types.

use std::f32::consts::TAU;

/// Held input intents sampled once per frame.
///
/// These are held-state booleans; edge detection (for fire debounce) happens
/// against the fighter's `prev_fire` when the frame is advanced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlIntents {
    pub turn_up: bool,
    pub turn_down: bool,
    pub fire: bool,
}

/// A combat fighter, either the locally controlled one or a remote peer.
pub struct Fighter {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    /// Heading in radians, normalized into [0, 2π). Heading 0 points along
    /// +x, increasing toward +y.
    pub angle: f32,

    // Combat state.
    pub health: i32,
    /// Monotonic: once true it never reverts, regardless of later updates.
    pub destroyed: bool,

    pub name: String,
    /// True for at most one fighter per session. Remote fighters are never
    /// controlled.
    pub controlled: bool,
    /// Insertion order is fire order.
    pub projectiles: Vec<Projectile>,

    // Controller-only state (never serialized): previous frame's fire
    // intent, for rising-edge detection.
    pub prev_fire: bool,
}

pub struct Projectile {
    pub owner_id: u64,
    pub x: f32,
    pub y: f32,
    /// Fixed at fire time; does not track the owner afterwards.
    pub angle: f32,
    /// Cleared exactly once, on hit or lifetime expiry. Never reset.
    pub active: bool,
    /// Seconds of remaining flight. Remote projectiles carry 0 here; they
    /// are render-only and replaced wholesale by the next update.
    pub ttl: f32,
}

impl Fighter {
    /// Creates the locally controlled fighter at the given spawn position.
    pub fn local(id: u64, name: String, x: f32, y: f32, max_hp: i32) -> Self {
        Self {
            id,
            x,
            y,
            angle: 0.0,
            health: max_hp,
            destroyed: false,
            name,
            controlled: true,
            projectiles: Vec::new(),
            prev_fire: false,
        }
    }

    /// Creates an uncontrolled remote fighter at the given position.
    pub fn remote(id: u64, name: String, health: i32, x: f32, y: f32, max_hp: i32) -> Self {
        Self {
            id,
            x,
            y,
            angle: 0.0,
            health: health.clamp(0, max_hp),
            destroyed: false,
            name,
            controlled: false,
            projectiles: Vec::new(),
            prev_fire: false,
        }
    }
}

/// Wraps an angle into [0, 2π).
pub fn normalize_angle(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}

/// Public state of a fighter as sent over the wire every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FighterSnapshot {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub health: i32,
    pub destroyed: bool,
    pub projectiles: Vec<ProjectileSnapshot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileSnapshot {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

impl From<&Fighter> for FighterSnapshot {
    fn from(f: &Fighter) -> Self {
        Self {
            id: f.id,
            x: f.x,
            y: f.y,
            angle: f.angle,
            health: f.health,
            destroyed: f.destroyed,
            // Inert projectiles are excluded; pruning may lag by a frame.
            projectiles: f
                .projectiles
                .iter()
                .filter(|p| p.active)
                .map(ProjectileSnapshot::from)
                .collect(),
        }
    }
}

impl From<&Projectile> for ProjectileSnapshot {
    fn from(p: &Projectile) -> Self {
        Self {
            x: p.x,
            y: p.y,
            angle: p.angle,
        }
    }
}
