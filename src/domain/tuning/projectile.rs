/// Tuning for locally fired projectiles.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileTuning {
    /// Forward speed in logical units per second.
    pub speed: f32,
    /// Flight time in seconds before a projectile expires.
    pub life_time: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 480.0,
            life_time: 1.4,
        }
    }
}
