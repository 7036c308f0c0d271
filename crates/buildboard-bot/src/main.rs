//! buildboard
//!
//! Discord bot for sharing hero build codes

use anyhow::Context;
use buildboard_bot::config::{BotConfig, Cli};
use buildboard_bot::discord;
use buildboard_core::logging_facility;
use buildboard_store::BuildStore;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before clap reads its env fallbacks
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = BotConfig::from_env(cli)?;
    logging_facility::init(config.log_profile);
    tracing::info!(db_path = %config.db_path.display(), "starting buildboard");

    let store = BuildStore::new(&config.db_path);
    store
        .initialize()
        .context("failed to initialize build store")?;

    discord::run(&config, store).await
}
