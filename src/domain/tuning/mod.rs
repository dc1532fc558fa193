// Gameplay tuning values, grouped per entity kind.

pub mod cloud;
pub mod fighter;
pub mod projectile;

pub use cloud::CloudTuning;
pub use fighter::FighterTuning;
pub use projectile::ProjectileTuning;
