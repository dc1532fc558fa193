// The per-frame simulation loop: one task owns the local fighter, the
// remote registry, and the ambient layer, and reconciles inbound network
// events at frame boundaries.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::{Notify, mpsc, watch};
use tracing::{debug, info, warn};

use crate::domain::systems::{clouds, collision, flight};
use crate::domain::tuning::{CloudTuning, FighterTuning, ProjectileTuning};
use crate::domain::{Cloud, ControlIntents, Fighter, FighterSnapshot};
use crate::use_cases::registry::RemoteRegistry;
use crate::use_cases::render::Renderer;
use crate::use_cases::types::{NetEvent, Outbound, SessionPhase};

const LOG_THROTTLE: Duration = Duration::from_secs(2);

fn should_log(last: &mut Instant) -> bool {
    if last.elapsed() >= LOG_THROTTLE {
        *last = Instant::now();
        true
    } else {
        false
    }
}

/// Static configuration for a session loop.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Fixed frame interval.
    pub tick_interval: Duration,
    /// Logical viewport size; gameplay math never sees device pixels.
    pub viewport: (f32, f32),
    /// Display label for the local fighter.
    pub player_name: String,
    pub fighter: FighterTuning,
    pub projectile: ProjectileTuning,
    pub clouds: CloudTuning,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(1000 / 60),
            viewport: (1080.0, 580.0),
            player_name: "Pilot".to_string(),
            fighter: FighterTuning::default(),
            projectile: ProjectileTuning::default(),
            clouds: CloudTuning::default(),
        }
    }
}

/// Runs the session loop until shutdown is notified.
///
/// Purely time-driven: network events are drained without blocking at the
/// top of each frame, so a message arriving mid-frame applies on the next
/// one (last writer wins, no tearing). Per frame, in order: background with
/// trail, clouds, local fighter (steer, fire, advance, emit snapshot),
/// remote fighters plus collision detection, hit dispatch.
pub async fn session_task<R: Renderer>(
    mut net_rx: mpsc::Receiver<NetEvent>,
    outbound_tx: mpsc::Sender<Outbound>,
    scoreboard_tx: watch::Sender<serde_json::Value>,
    intents_rx: watch::Receiver<ControlIntents>,
    mut renderer: R,
    cfg: SessionConfig,
    shutdown: Arc<Notify>,
) {
    let mut phase = SessionPhase::Connecting;
    let mut player: Option<Fighter> = None;
    let center = (cfg.viewport.0 / 2.0, cfg.viewport.1 / 2.0);
    let mut registry = RemoteRegistry::new(center, cfg.fighter.max_hp);

    // StdRng so the task stays Send; no determinism requirement here.
    let mut rng = StdRng::from_entropy();
    let mut cloud_layer: Vec<Cloud> = (0..cfg.clouds.count)
        .map(|_| Cloud::spawn(&mut rng, cfg.viewport, &cfg.clouds))
        .collect();

    // Drive the fixed-step frame loop at the configured rate.
    let mut interval = tokio::time::interval(cfg.tick_interval);
    let dt = cfg.tick_interval.as_secs_f32();

    let mut last_outbound_full_log = Instant::now() - LOG_THROTTLE;

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                // Teardown stops frame scheduling; nothing renders after this.
                phase = SessionPhase::Terminated;
                break;
            }
            _ = interval.tick() => {}
        }

        // Reconcile inbound events at the frame boundary.
        while let Ok(ev) = net_rx.try_recv() {
            match ev {
                NetEvent::MyId { id } => {
                    if player.is_some() {
                        // Identity is assigned once; repeats are ignored.
                        debug!(id, "duplicate identity assignment ignored");
                        continue;
                    }
                    let (w, h) = cfg.viewport;
                    let x = rng.gen_range(w / 8.0..w * 7.0 / 8.0);
                    let y = rng.gen_range(h / 8.0..h * 7.0 / 8.0);
                    info!(id, x, y, "local fighter spawned");
                    player = Some(Fighter::local(
                        id,
                        cfg.player_name.clone(),
                        x,
                        y,
                        cfg.fighter.max_hp,
                    ));
                    phase = SessionPhase::InGame;
                }
                NetEvent::RemoteUpdate(data) => registry.apply_update(data),
                NetEvent::RemoteJoin(data) => registry.apply_join(data),
                NetEvent::RemoteLeave { id } => registry.apply_leave(id),
                NetEvent::ScoreboardUpdate(data) => {
                    // Presentation concern; forwarded untouched.
                    let _ = scoreboard_tx.send(data);
                }
            }
        }

        // Background with the persistent motion trail.
        renderer.begin_frame();

        clouds::drift(&mut cloud_layer, cfg.viewport, dt);
        for cloud in &cloud_layer {
            renderer.draw_cloud(cloud);
        }

        if phase == SessionPhase::InGame {
            if let Some(fighter) = player.as_mut() {
                let intents = *intents_rx.borrow();
                flight::steer(fighter, &intents, dt, &cfg.fighter);
                flight::try_fire(fighter, intents.fire, &cfg.projectile);
                flight::advance_projectiles(fighter, dt, &cfg.projectile);

                renderer.draw_fighter(fighter);
                for p in &fighter.projectiles {
                    renderer.draw_projectile(p);
                }

                // Emitted every frame, unconditionally, changed or not.
                let snapshot = FighterSnapshot::from(&*fighter);
                dispatch(
                    &outbound_tx,
                    Outbound::PlayerData(snapshot),
                    &mut last_outbound_full_log,
                );
            }
        }

        // Stable view of the registry for this frame.
        let remotes = registry.frame_snapshot();
        for fighter in &remotes {
            renderer.draw_fighter(fighter);
            for p in fighter.projectiles.iter().filter(|p| p.active) {
                renderer.draw_projectile(p);
            }
        }

        if let Some(fighter) = player.as_mut() {
            let hits = collision::detect(
                &mut fighter.projectiles,
                &remotes,
                cfg.fighter.hit_radius,
            );
            for hit in hits {
                debug!(remote_id = hit.remote_id, "projectile hit");
                dispatch(
                    &outbound_tx,
                    Outbound::EnemyHit { id: hit.remote_id },
                    &mut last_outbound_full_log,
                );
            }
        }

        renderer.end_frame();
    }

    info!(?phase, "session terminated");
}

// The frame loop never blocks on network I/O: a full outbound channel drops
// the message rather than stalling the frame.
fn dispatch(
    outbound_tx: &mpsc::Sender<Outbound>,
    msg: Outbound,
    last_full_log: &mut Instant,
) {
    match outbound_tx.try_send(msg) {
        Ok(()) => {}
        Err(mpsc::error::TrySendError::Full(_)) => {
            if should_log(last_full_log) {
                warn!("outbound channel full; dropping message");
            }
        }
        Err(mpsc::error::TrySendError::Closed(_)) => {
            if should_log(last_full_log) {
                warn!("outbound channel closed; message discarded");
            }
        }
    }
}
