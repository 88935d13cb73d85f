//! Environment-driven configuration.
//!
//! Everything the gateway needs is resolved once at startup and passed down
//! explicitly; only the program id is mandatory.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Clone)]
pub struct Config {
    pub program_id: Pubkey,
    pub rpc_url: String,
    pub listen_addr: SocketAddr,
    pub payer_keypair_path: PathBuf,
    pub wallet_dir: PathBuf,
    /// Bet-list and position-list poll interval.
    pub list_refresh: Duration,
    /// Poll interval for watched bets and their positions.
    pub watch_refresh: Duration,
    /// Custodied wallets are topped up to this many lamports on register.
    pub funding_lamports: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let program_id: Pubkey = env::var("WAGER_PROGRAM_ID")
            .context("WAGER_PROGRAM_ID is not set")?
            .parse()
            .context("WAGER_PROGRAM_ID is not a valid pubkey")?;

        let rpc_url = env::var("SOLANA_RPC_URL")
            .unwrap_or_else(|_| "https://api.devnet.solana.com".to_string());

        let listen_addr: SocketAddr = env::var("WAGER_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8767".to_string())
            .parse()
            .context("WAGER_LISTEN_ADDR is not a valid socket address")?;

        let home = dirs::home_dir().context("no home directory")?;
        let payer_keypair_path = env::var("WAGER_PAYER_KEYPAIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home.join(".config/solana/id.json"));
        let wallet_dir = env::var("WAGER_WALLET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home.join(".config/wager-bridge/wallets"));

        let list_refresh = Duration::from_secs(env_u64("WAGER_LIST_REFRESH_SECS", 10)?);
        let watch_refresh = Duration::from_secs(env_u64("WAGER_WATCH_REFRESH_SECS", 5)?);
        let funding_lamports = env_u64("WAGER_FUNDING_LAMPORTS", 50_000_000)?;

        Ok(Self {
            program_id,
            rpc_url,
            listen_addr,
            payer_keypair_path,
            wallet_dir,
            list_refresh,
            watch_refresh,
            funding_lamports,
        })
    }
}

fn env_u64(name: &str, default: u64) -> Result<u64> {
    match env::var(name) {
        Ok(raw) => raw.parse().with_context(|| format!("{name} is not a number")),
        Err(_) => Ok(default),
    }
}
