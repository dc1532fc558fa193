// Shared harness for driving a session loop from tests: channel wiring, a
// recording renderer, and helpers for stepping frames deterministically.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Notify, mpsc, watch};
use tokio::task::JoinHandle;

use game_client::domain::{Cloud, Fighter, FighterSnapshot, Projectile};
use game_client::interface_adapters::input::{IntentPublisher, intent_channel};
use game_client::use_cases::render::Renderer;
use game_client::use_cases::session::{SessionConfig, session_task};
use game_client::use_cases::types::{NetEvent, Outbound};

/// Counters shared with the renderer inside a running session.
#[derive(Default)]
pub struct RenderStats {
    pub frames: AtomicU64,
    pub fighters_drawn: AtomicU64,
    pub clouds_drawn: AtomicU64,
}

pub struct RecordingRenderer(pub Arc<RenderStats>);

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self) {
        self.0.frames.fetch_add(1, Ordering::Relaxed);
    }

    fn draw_cloud(&mut self, _cloud: &Cloud) {
        self.0.clouds_drawn.fetch_add(1, Ordering::Relaxed);
    }

    fn draw_fighter(&mut self, _fighter: &Fighter) {
        self.0.fighters_drawn.fetch_add(1, Ordering::Relaxed);
    }

    fn draw_projectile(&mut self, _projectile: &Projectile) {}

    fn end_frame(&mut self) {}
}

pub struct SessionHarness {
    pub net_tx: mpsc::Sender<NetEvent>,
    pub out_rx: mpsc::Receiver<Outbound>,
    pub scoreboard_rx: watch::Receiver<serde_json::Value>,
    pub intents: IntentPublisher,
    pub shutdown: Arc<Notify>,
    pub stats: Arc<RenderStats>,
    pub task: JoinHandle<()>,
}

/// Spawns a session loop with default tuning and test-sized channels.
pub fn spawn_session() -> SessionHarness {
    let (net_tx, net_rx) = mpsc::channel::<NetEvent>(64);
    let (outbound_tx, out_rx) = mpsc::channel::<Outbound>(512);
    let (scoreboard_tx, scoreboard_rx) = watch::channel(serde_json::Value::Null);
    let (intents, intents_rx) = intent_channel();
    let shutdown = Arc::new(Notify::new());
    let stats = Arc::new(RenderStats::default());

    let task = tokio::spawn(session_task(
        net_rx,
        outbound_tx,
        scoreboard_tx,
        intents_rx,
        RecordingRenderer(stats.clone()),
        SessionConfig::default(),
        shutdown.clone(),
    ));

    SessionHarness {
        net_tx,
        out_rx,
        scoreboard_rx,
        intents,
        shutdown,
        stats,
        task,
    }
}

/// Receives outbound messages until the next local snapshot arrives.
pub async fn next_player_data(out_rx: &mut mpsc::Receiver<Outbound>) -> FighterSnapshot {
    loop {
        match out_rx.recv().await.expect("session loop ended unexpectedly") {
            Outbound::PlayerData(snapshot) => return snapshot,
            Outbound::EnemyHit { .. } => continue,
        }
    }
}

/// Assigns a local identity and waits for the first emitted snapshot.
pub async fn start_game(harness: &mut SessionHarness, id: u64) -> FighterSnapshot {
    harness
        .net_tx
        .send(NetEvent::MyId { id })
        .await
        .expect("session loop should accept events");
    next_player_data(&mut harness.out_rx).await
}

/// Builds a minimal remote update snapshot at a position.
pub fn remote_snapshot(id: u64, x: f32, y: f32) -> FighterSnapshot {
    FighterSnapshot {
        id,
        x,
        y,
        angle: 0.0,
        health: 100,
        destroyed: false,
        projectiles: Vec::new(),
    }
}
