//! Off-chain gateway for the wager betting program.
//!
//! The betting program itself runs on-chain; this crate is the client side:
//! deterministic account addressing, typed instruction building, validated
//! submission, scheduled account polling, and a WebSocket feed for
//! dashboards.

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod feed;
pub mod gateway;
pub mod locator;
pub mod protocol;
pub mod state;
pub mod validate;
pub mod wallet;

pub use client::ProgramClient;
pub use config::Config;
pub use error::BridgeError;
pub use gateway::Gateway;
pub use state::{BetState, PlatformConfig, UserBetState};
pub use validate::CreateBetRequest;
