use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use solana_sdk::signature::Signer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wager_bridge::{wallet, Config, Gateway, ProgramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load variables from .env if present
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = Config::from_env()?;
    let payer = Arc::new(wallet::read_keypair(&cfg.payer_keypair_path)?);
    let client = Arc::new(ProgramClient::new(cfg.rpc_url.clone(), cfg.program_id));

    info!(wallet = %payer.pubkey(), program = %cfg.program_id, rpc = %cfg.rpc_url, "starting");

    let gateway = Arc::new(Gateway::new(cfg, client, payer));
    gateway.run().await
}
