// Reconciliation of remote fighters from the inbound event stream.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::state::normalize_angle;
use crate::domain::{Fighter, FighterSnapshot, Projectile};
use crate::use_cases::types::RemoteJoin;

const DEFAULT_DISPLAY_NAME: &str = "Pilot";

/// The set of remote fighters, keyed by network identity.
///
/// Join/update/leave are atomic with respect to the frame tick; rendering
/// and collision iterate over a snapshot taken at the start of the frame.
/// There is deliberately no staleness expiry: a remote fighter persists
/// until an explicit leave arrives.
pub struct RemoteRegistry {
    fighters: HashMap<u64, Fighter>,
    /// Neutral spawn for fresh joins: the viewport center. The first
    /// rendered frame for a newcomer is approximate until an update lands.
    spawn: (f32, f32),
    max_hp: i32,
}

impl RemoteRegistry {
    pub fn new(spawn: (f32, f32), max_hp: i32) -> Self {
        Self {
            fighters: HashMap::new(),
            spawn,
            max_hp,
        }
    }

    /// Applies a state refresh for a remote fighter.
    ///
    /// An unknown id is treated as a join and then receives this update, so
    /// its first rendered state is the sender's actual state. Health is
    /// clamped, the destroyed flag merges monotonically, and the projectile
    /// collection is replaced wholesale from the payload.
    pub fn apply_update(&mut self, data: FighterSnapshot) {
        let (sx, sy) = self.spawn;
        let max_hp = self.max_hp;
        let fighter = self.fighters.entry(data.id).or_insert_with(|| {
            debug!(id = data.id, "implicit join from update");
            Fighter::remote(data.id, DEFAULT_DISPLAY_NAME.to_string(), max_hp, sx, sy, max_hp)
        });

        fighter.x = data.x;
        fighter.y = data.y;
        fighter.angle = normalize_angle(data.angle);
        fighter.health = data.health.clamp(0, max_hp);
        fighter.destroyed |= data.destroyed;
        fighter.projectiles = data
            .projectiles
            .into_iter()
            .map(|p| Projectile {
                owner_id: data.id,
                x: p.x,
                y: p.y,
                angle: p.angle,
                active: true,
                // Render-only; replaced by the next update, never advanced.
                ttl: 0.0,
            })
            .collect();
    }

    /// Registers a newly joined remote fighter at the neutral spawn point.
    ///
    /// Idempotent: a join for a known id keeps the existing state.
    pub fn apply_join(&mut self, data: RemoteJoin) {
        let (sx, sy) = self.spawn;
        let max_hp = self.max_hp;
        self.fighters.entry(data.id).or_insert_with(|| {
            let mut name = data.name.trim().to_string();
            if name.is_empty() {
                name = DEFAULT_DISPLAY_NAME.to_string();
            }
            debug!(id = data.id, name = %name, "remote fighter joined");
            Fighter::remote(data.id, name, data.health, sx, sy, max_hp)
        });
    }

    /// Removes a remote fighter. Unknown ids are a no-op, and a later
    /// update for the same id re-creates the entry.
    pub fn apply_leave(&mut self, id: u64) {
        if self.fighters.remove(&id).is_some() {
            debug!(id, "remote fighter left");
        }
    }

    pub fn get(&self, id: u64) -> Option<&Fighter> {
        self.fighters.get(&id)
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }

    /// Stable per-frame view, ordered by id.
    pub fn frame_snapshot(&self) -> Vec<&Fighter> {
        let mut fighters: Vec<&Fighter> = self.fighters.values().collect();
        fighters.sort_unstable_by_key(|f| f.id);
        fighters
    }
}
