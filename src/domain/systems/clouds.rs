// Drift integration for the ambient cloud layer.

use crate::domain::cloud::Cloud;

/// Advances each cloud along its drift velocity, wrapping at the viewport
/// edges so the layer never empties.
pub fn drift(clouds: &mut [Cloud], viewport: (f32, f32), dt: f32) {
    let (w, h) = viewport;
    for c in clouds.iter_mut() {
        c.x += c.vx * dt;
        c.y += c.vy * dt;

        if c.x > w + c.width {
            c.x = -c.width;
        } else if c.x < -c.width {
            c.x = w + c.width;
        }
        if c.y > h + c.height {
            c.y = -c.height;
        } else if c.y < -c.height {
            c.y = h + c.height;
        }
    }
}
