// Ambient cloud decoration. Purely visual: no identity, no collision.

use rand::Rng;

use crate::domain::tuning::cloud::CloudTuning;

/// A drifting background cloud.
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    // Per-instance drift velocity, fixed at spawn.
    pub vx: f32,
    pub vy: f32,
}

impl Cloud {
    /// Spawns a cloud at a random position inside the viewport with a random
    /// drift direction.
    pub fn spawn<R: Rng>(rng: &mut R, viewport: (f32, f32), tuning: &CloudTuning) -> Self {
        let (w, h) = viewport;
        let speed = rng.gen_range(tuning.min_drift..=tuning.max_drift);
        let heading = rng.gen_range(0.0..std::f32::consts::TAU);
        Self {
            x: rng.gen_range(0.0..w),
            y: rng.gen_range(0.0..h),
            width: tuning.width,
            height: tuning.height,
            vx: heading.cos() * speed,
            vy: heading.sin() * speed,
        }
    }
}
