// Framework bootstrap for the game client runtime.

use std::sync::Arc;

use tokio::sync::{Notify, mpsc, watch};
use tracing::{Instrument, info_span, warn};

use crate::domain::tuning::{CloudTuning, FighterTuning, ProjectileTuning};
use crate::frameworks::config;
use crate::interface_adapters::input;
use crate::interface_adapters::net::net_task;
use crate::interface_adapters::render::{NullRenderer, Viewport};
use crate::interface_adapters::utils::rng::rand_id;
use crate::use_cases::session::{SessionConfig, session_task};
use crate::use_cases::types::{NetEvent, Outbound};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Wires channels, spawns the network task, and runs the session loop on
/// the current task until teardown.
pub async fn run(viewport: Viewport, ws_url: String, session_id: String, player_name: String) {
    // Channel wiring between the socket pump and the simulation loop.
    let (net_tx, net_rx) = mpsc::channel::<NetEvent>(config::NET_EVENT_CAPACITY);
    let (outbound_tx, outbound_rx) = mpsc::channel::<Outbound>(config::OUTBOUND_CAPACITY);

    // Scoreboard passthrough; a presentation frontend subscribes here.
    let (scoreboard_tx, _scoreboard_rx) = watch::channel(serde_json::Value::Null);

    // The device binding owns the publisher half; the headless build keeps
    // it idle but alive for the lifetime of the session.
    let (_intent_publisher, intents_rx) = input::intent_channel();

    // Separate notifies so each task reliably consumes its own permit.
    let net_shutdown = Arc::new(Notify::new());
    let session_shutdown = Arc::new(Notify::new());

    // Teardown on Ctrl-C: stop scheduling frames and close the socket.
    // No in-flight send is waited on.
    {
        let net_shutdown = net_shutdown.clone();
        let session_shutdown = session_shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                session_shutdown.notify_one();
                net_shutdown.notify_one();
            }
        });
    }

    // Connection correlation id for logs before an identity exists.
    let conn_id = rand_id();
    tokio::spawn(
        async move {
            if let Err(e) = net_task(ws_url, session_id, net_tx, outbound_rx, net_shutdown).await {
                warn!(error = ?e, "network task ended with error");
            }
        }
        .instrument(info_span!("conn", conn_id)),
    );

    let session_cfg = SessionConfig {
        tick_interval: config::TICK_INTERVAL,
        viewport: viewport.logical_size(),
        player_name,
        fighter: FighterTuning::default(),
        projectile: ProjectileTuning::default(),
        clouds: CloudTuning::default(),
    };

    session_task(
        net_rx,
        outbound_tx,
        scoreboard_tx,
        intents_rx,
        NullRenderer::new(),
        session_cfg,
        session_shutdown,
    )
    .await;
}

/// Initializes the runtime from the environment and runs a session.
pub async fn run_with_config() {
    init_runtime();

    let viewport = Viewport::new(
        config::VIEWPORT_WIDTH,
        config::VIEWPORT_HEIGHT,
        config::pixel_ratio(),
    );

    run(
        viewport,
        config::ws_url(),
        config::session_id(),
        config::player_name(),
    )
    .await
}
