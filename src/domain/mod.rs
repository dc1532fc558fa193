// Domain layer: core simulation types and rules.

pub mod cloud;
pub mod state;
pub mod systems;
pub mod tuning;

pub use cloud::Cloud;
pub use state::{ControlIntents, Fighter, FighterSnapshot, Projectile, ProjectileSnapshot};
