// End-to-end behavior of the session loop, driven through its channels with
// virtual time.

mod support;

use std::sync::atomic::Ordering;
use std::time::Duration;

use game_client::interface_adapters::input::Intent;
use game_client::use_cases::types::{NetEvent, Outbound, RemoteJoin};
use serde_json::json;

#[tokio::test(start_paused = true)]
async fn emits_snapshot_every_frame_without_input() {
    let mut harness = support::spawn_session();
    let first = support::start_game(&mut harness, 1).await;
    assert_eq!(first.angle, 0.0);

    // 60 frames, 60 snapshots, unconditionally: heading and health never
    // change, forward flight advances the position every frame.
    let mut prev_x = first.x;
    for _ in 0..59 {
        let snap = support::next_player_data(&mut harness.out_rx).await;
        assert_eq!(snap.id, 1);
        assert_eq!(snap.health, first.health);
        assert_eq!(snap.angle, first.angle);
        assert!(!snap.destroyed);
        assert!(snap.x > prev_x);
        prev_x = snap.x;
    }
}

#[tokio::test(start_paused = true)]
async fn holding_fire_spawns_exactly_one_projectile() {
    let mut harness = support::spawn_session();
    let _ = support::start_game(&mut harness, 1).await;

    harness.intents.press(Intent::Fire);
    let snap = support::next_player_data(&mut harness.out_rx).await;
    assert_eq!(snap.projectiles.len(), 1);

    for _ in 0..10 {
        let snap = support::next_player_data(&mut harness.out_rx).await;
        assert_eq!(snap.projectiles.len(), 1, "held fire must not repeat");
    }

    // Release for one frame, then a fresh press spawns a second shot.
    harness.intents.release(Intent::Fire);
    let _ = support::next_player_data(&mut harness.out_rx).await;
    harness.intents.press(Intent::Fire);
    let snap = support::next_player_data(&mut harness.out_rx).await;
    assert_eq!(snap.projectiles.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn projectile_on_flight_path_reports_one_hit() {
    let mut harness = support::spawn_session();
    let start = support::start_game(&mut harness, 1).await;

    // Remote parked dead ahead on the local flight path.
    harness
        .net_tx
        .send(NetEvent::RemoteUpdate(support::remote_snapshot(
            99,
            start.x + 150.0,
            start.y,
        )))
        .await
        .expect("send update");

    harness.intents.press(Intent::Fire);

    let mut hits = 0;
    for _ in 0..120 {
        match harness.out_rx.recv().await.expect("loop alive") {
            Outbound::EnemyHit { id } => {
                assert_eq!(id, 99);
                hits += 1;
            }
            Outbound::PlayerData(_) => {}
        }
    }
    assert_eq!(hits, 1, "one overlap, one report, never a second");
}

#[tokio::test(start_paused = true)]
async fn remote_fighters_render_until_leave() {
    let mut harness = support::spawn_session();
    let _ = support::start_game(&mut harness, 1).await;

    harness
        .net_tx
        .send(NetEvent::RemoteJoin(RemoteJoin {
            id: 2,
            name: "Ace".to_string(),
            health: 100,
        }))
        .await
        .expect("send join");

    // Settle one frame so the join is applied, then measure a full frame.
    let _ = support::next_player_data(&mut harness.out_rx).await;
    let before = harness.stats.fighters_drawn.load(Ordering::Relaxed);
    let _ = support::next_player_data(&mut harness.out_rx).await;
    let after = harness.stats.fighters_drawn.load(Ordering::Relaxed);
    assert_eq!(after - before, 2, "local plus one remote per frame");

    harness
        .net_tx
        .send(NetEvent::RemoteLeave { id: 2 })
        .await
        .expect("send leave");

    let _ = support::next_player_data(&mut harness.out_rx).await;
    let before = harness.stats.fighters_drawn.load(Ordering::Relaxed);
    let _ = support::next_player_data(&mut harness.out_rx).await;
    let after = harness.stats.fighters_drawn.load(Ordering::Relaxed);
    assert_eq!(after - before, 1, "only the local fighter remains");
}

#[tokio::test(start_paused = true)]
async fn ambient_layer_runs_while_connecting() {
    let harness = support::spawn_session();

    tokio::time::sleep(Duration::from_millis(100)).await;

    let frames = harness.stats.frames.load(Ordering::Relaxed);
    assert!(frames > 0);
    // Six clouds per frame, and nothing else before an identity arrives.
    assert_eq!(harness.stats.clouds_drawn.load(Ordering::Relaxed), frames * 6);
    assert_eq!(harness.stats.fighters_drawn.load(Ordering::Relaxed), 0);
}

#[tokio::test(start_paused = true)]
async fn scoreboard_payload_passes_through_untouched() {
    let mut harness = support::spawn_session();

    let payload = json!([{ "name": "Ace", "hp": 40 }]);
    harness
        .net_tx
        .send(NetEvent::ScoreboardUpdate(payload.clone()))
        .await
        .expect("send scoreboard");

    harness
        .scoreboard_rx
        .changed()
        .await
        .expect("scoreboard channel alive");
    assert_eq!(*harness.scoreboard_rx.borrow(), payload);
}

#[tokio::test(start_paused = true)]
async fn shutdown_stops_scheduling_frames() {
    let mut harness = support::spawn_session();
    let _ = support::start_game(&mut harness, 1).await;

    harness.shutdown.notify_one();
    harness.task.await.expect("session task exits cleanly");

    let frames = harness.stats.frames.load(Ordering::Relaxed);
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(
        harness.stats.frames.load(Ordering::Relaxed),
        frames,
        "no frames after teardown"
    );

    // Remaining buffered messages drain, then the channel reports closed.
    while harness.out_rx.recv().await.is_some() {}
}
