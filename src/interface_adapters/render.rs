// Render surface adapter: viewport geometry and a headless renderer.

use tracing::trace;

use crate::domain::{Cloud, Fighter, Projectile};
use crate::use_cases::render::Renderer;

/// Trail fill color composited over the previous frame every tick.
pub const TRAIL_COLOR: &str = "#25c5df";
/// Alpha of the trail fill; the previous frame is dimmed, not erased.
pub const TRAIL_ALPHA: f32 = 0.4;

/// A 2D drawable region of fixed logical size.
///
/// Device pixel ratio scales only the backing resolution; gameplay math
/// always works in logical coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Logical size, the coordinate space all simulation math uses.
    pub fn logical_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Headless renderer: the core runs without presentation chrome, and a
/// windowed frontend supplies its own `Renderer` instead.
pub struct NullRenderer {
    frames: u64,
}

impl NullRenderer {
    pub fn new() -> Self {
        Self { frames: 0 }
    }
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for NullRenderer {
    fn begin_frame(&mut self) {
        self.frames += 1;
    }

    fn draw_cloud(&mut self, _cloud: &Cloud) {}

    fn draw_fighter(&mut self, fighter: &Fighter) {
        trace!(
            id = fighter.id,
            x = fighter.x,
            y = fighter.y,
            destroyed = fighter.destroyed,
            "draw fighter"
        );
    }

    fn draw_projectile(&mut self, _projectile: &Projectile) {}

    fn end_frame(&mut self) {
        trace!(frame = self.frames, "frame complete");
    }
}
