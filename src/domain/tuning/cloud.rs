/// Tuning for the ambient cloud layer.
#[derive(Debug, Clone, Copy)]
pub struct CloudTuning {
    /// Number of clouds seeded at session start.
    pub count: usize,
    pub width: f32,
    pub height: f32,
    /// Drift speed range in logical units per second.
    pub min_drift: f32,
    pub max_drift: f32,
}

impl Default for CloudTuning {
    fn default() -> Self {
        Self {
            count: 6,
            width: 300.0,
            height: 200.0,
            min_drift: 8.0,
            max_drift: 30.0,
        }
    }
}
