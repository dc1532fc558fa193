#[tokio::main]
async fn main() {
    game_client::run_with_config().await;
}
