// Local controller: kinematic flight and fire handling for the controlled
// fighter.

use crate::domain::state::{ControlIntents, Fighter, Projectile, normalize_angle};
use crate::domain::tuning::{FighterTuning, ProjectileTuning};

/// Applies one frame of steering and forward flight.
///
/// Turn intents adjust heading additively, so holding both yields no net
/// change. Forward motion is constant-speed regardless of turn intent.
pub fn steer(fighter: &mut Fighter, intents: &ControlIntents, dt: f32, tuning: &FighterTuning) {
    if intents.turn_up {
        fighter.angle -= tuning.turn_rate * dt;
    }
    if intents.turn_down {
        fighter.angle += tuning.turn_rate * dt;
    }
    fighter.angle = normalize_angle(fighter.angle);

    fighter.x += fighter.angle.cos() * tuning.speed * dt;
    fighter.y += fighter.angle.sin() * tuning.speed * dt;
}

/// Spawns a projectile on the rising edge of the fire intent.
///
/// Holding fire across N frames yields exactly one projectile; the previous
/// frame's held state is tracked on the fighter. Returns whether a shot
/// spawned.
pub fn try_fire(fighter: &mut Fighter, fire_held: bool, tuning: &ProjectileTuning) -> bool {
    let rising = fire_held && !fighter.prev_fire;
    fighter.prev_fire = fire_held;
    if rising {
        fighter.projectiles.push(Projectile {
            owner_id: fighter.id,
            x: fighter.x,
            y: fighter.y,
            angle: fighter.angle,
            active: true,
            ttl: tuning.life_time,
        });
    }
    rising
}

/// Integrates the fighter's own projectiles forward and expires spent ones.
///
/// Each projectile flies along its fixed heading. Lifetime expiry clears
/// `active` exactly once; inactive projectiles are pruned here.
pub fn advance_projectiles(fighter: &mut Fighter, dt: f32, tuning: &ProjectileTuning) {
    for p in fighter.projectiles.iter_mut() {
        if !p.active {
            continue;
        }
        p.x += p.angle.cos() * tuning.speed * dt;
        p.y += p.angle.sin() * tuning.speed * dt;
        p.ttl -= dt;
        if p.ttl <= 0.0 {
            p.active = false;
        }
    }
    fighter.projectiles.retain(|p| p.active);
}
