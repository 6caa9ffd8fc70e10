use anyhow::Result;

use polychat::chat;
use polychat::config::AppConfig;
use polychat::llm::models::provider_handle::create_all_clients;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    polychat::init_logger();

    // Every compiled-in provider must be configured before the menu is
    // shown, whichever one the user ends up talking to.
    let config = AppConfig::from_env()?;
    let clients = create_all_clients(&config);

    log::info!("polychat started with {} providers", clients.len());
    chat::run(clients).await
}
