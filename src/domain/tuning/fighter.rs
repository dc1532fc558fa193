/// Tuning for fighter flight and combat.
#[derive(Debug, Clone, Copy)]
pub struct FighterTuning {
    /// Angular rate in radians per second while a turn intent is held.
    pub turn_rate: f32,
    /// Constant forward speed in logical units per second.
    pub speed: f32,
    pub max_hp: i32,
    /// Radius of the static circular hit region centered on the fighter.
    pub hit_radius: f32,
}

impl Default for FighterTuning {
    fn default() -> Self {
        Self {
            turn_rate: 3.2,
            speed: 220.0,
            max_hp: 100,
            hit_radius: 20.0,
        }
    }
}
