// Render port used by the simulation loop. Implementations live in the
// adapter layer; the loop only issues logical-coordinate draw calls.

use crate::domain::{Cloud, Fighter, Projectile};

pub trait Renderer {
    /// Composites the frame background. Implementations keep a low-alpha
    /// trail: the previous frame is dimmed, not fully erased.
    fn begin_frame(&mut self);
    fn draw_cloud(&mut self, cloud: &Cloud);
    fn draw_fighter(&mut self, fighter: &Fighter);
    fn draw_projectile(&mut self, projectile: &Projectile);
    fn end_frame(&mut self);
}
