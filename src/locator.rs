//! Deterministic account addressing.
//!
//! Every market and position lives at a program-derived address, so the
//! client can locate on-chain state from an id (plus the wallet, for
//! positions) without any index.

use solana_sdk::pubkey::Pubkey;

use crate::protocol::{BET_SEED, PLATFORM_CONFIG_SEED, USER_BET_SEED};

/// Address of the bet account for a market id.
pub fn market_address(program_id: &Pubkey, bet_id: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BET_SEED, bet_id.as_bytes()], program_id)
}

/// Address of one wallet's position on one market.
pub fn position_address(program_id: &Pubkey, bet_id: &str, wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[USER_BET_SEED, bet_id.as_bytes(), wallet.as_ref()],
        program_id,
    )
}

/// Address of the singleton platform fee config.
pub fn platform_config_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PLATFORM_CONFIG_SEED], program_id)
}
