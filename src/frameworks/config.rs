use std::{env, time::Duration};

use crate::interface_adapters::utils::rng::rand_id;

// Runtime constants and environment accessors (not gameplay tuning).

pub fn ws_url() -> String {
    env::var("GAME_SERVER_WS_URL").unwrap_or_else(|_| "ws://127.0.0.1:3001/ws".to_string())
}

pub fn player_name() -> String {
    env::var("PLAYER_NAME").unwrap_or_else(|_| "Pilot".to_string())
}

pub fn session_id() -> String {
    env::var("SESSION_ID").unwrap_or_else(|_| format!("session-{}", rand_id()))
}

pub fn pixel_ratio() -> f32 {
    env::var("PIXEL_RATIO")
        .ok()
        .and_then(|value| value.parse::<f32>().ok())
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(1.0)
}

pub const NET_EVENT_CAPACITY: usize = 1024;
pub const OUTBOUND_CAPACITY: usize = 256;

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / 60);

// Logical viewport; the device pixel ratio scales only the backing store.
pub const VIEWPORT_WIDTH: f32 = 1080.0;
pub const VIEWPORT_HEIGHT: f32 = 580.0;
