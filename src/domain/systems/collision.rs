// Collision detection between local projectiles and remote fighters.

use crate::domain::state::{Fighter, Projectile};

/// A local projectile overlapped a remote fighter's hit region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitEvent {
    pub remote_id: u64,
}

/// Tests every active projectile against every remote fighter's hit region
/// (naive O(P*E)) and returns the detected hits.
///
/// The hit region is a fixed-radius circle centered on the fighter. Nested
/// projectile-then-entity order: the first overlapping fighter wins, the
/// projectile is deactivated and tests no further fighters, so it can never
/// hit twice. Destroyed fighters remain testable. Remote projectiles are
/// never tested; their impacts are resolved upstream.
pub fn detect(projectiles: &mut [Projectile], remotes: &[&Fighter], hit_radius: f32) -> Vec<HitEvent> {
    let hit_radius_sq = hit_radius * hit_radius;
    let mut hits = Vec::new();

    for p in projectiles.iter_mut().filter(|p| p.active) {
        for f in remotes {
            let dx = f.x - p.x;
            let dy = f.y - p.y;
            if dx * dx + dy * dy <= hit_radius_sq {
                p.active = false;
                hits.push(HitEvent { remote_id: f.id });
                break;
            }
        }
    }

    hits
}
