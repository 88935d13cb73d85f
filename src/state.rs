//! Client-side images of the program's accounts.
//!
//! Anchor allocates accounts at their maximum size, so the borsh body is
//! usually followed by zero padding; `unpack` therefore reads a prefix
//! instead of demanding full consumption.

use borsh::{BorshDeserialize, BorshSerialize};
use once_cell::sync::Lazy;
use solana_sdk::pubkey::Pubkey;

use crate::error::{BridgeError, Result};
use crate::protocol::account_discriminator;

pub static BET_STATE_DISCRIMINATOR: Lazy<[u8; 8]> =
    Lazy::new(|| account_discriminator(BetState::ACCOUNT_NAME));
pub static USER_BET_STATE_DISCRIMINATOR: Lazy<[u8; 8]> =
    Lazy::new(|| account_discriminator(UserBetState::ACCOUNT_NAME));
pub static PLATFORM_CONFIG_DISCRIMINATOR: Lazy<[u8; 8]> =
    Lazy::new(|| account_discriminator(PlatformConfig::ACCOUNT_NAME));

/// One betting market. `winning_option` is 0 until resolution.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct BetState {
    pub creator: Pubkey,
    pub bet_id: String,
    pub description: String,
    pub option_a: String,
    pub option_b: String,
    pub end_time: i64,
    pub total_amount_a: u64,
    pub total_amount_b: u64,
    pub is_resolved: bool,
    pub winning_option: u8,
    pub bump: u8,
    pub min_bet_amount: u64,
    pub max_bet_amount: u64,
    pub category: String,
    pub created_at: i64,
    pub resolved_at: i64,
    pub total_bettors: u64,
    pub maker_fee_collected: u64,
    pub platform_fee_collected: u64,
    pub result_details: String,
}

/// One wallet's stake on one market. `amount` is net of fees; the gross
/// stake is kept in `original_amount` for display.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct UserBetState {
    pub user: Pubkey,
    pub bet_id: String,
    pub option: u8,
    pub amount: u64,
    pub is_claimed: bool,
    pub bump: u8,
    pub placed_at: i64,
    pub claimed_at: i64,
    pub original_amount: u64,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct PlatformConfig {
    pub owner: Pubkey,
    pub platform_fee_bps: u16,
    pub maker_fee_bps: u16,
    pub total_volume: u64,
    pub total_fees_collected: u64,
    pub bump: u8,
}

impl BetState {
    pub const ACCOUNT_NAME: &'static str = "BetState";

    pub fn unpack(data: &[u8]) -> Result<Self> {
        unpack_account(Self::ACCOUNT_NAME, data)
    }

    pub fn total_pool(&self) -> u64 {
        self.total_amount_a.saturating_add(self.total_amount_b)
    }

    pub fn outcome_label(&self, outcome: u8) -> Option<&str> {
        match outcome {
            crate::protocol::OUTCOME_A => Some(&self.option_a),
            crate::protocol::OUTCOME_B => Some(&self.option_b),
            _ => None,
        }
    }

    pub fn is_open(&self, now: i64) -> bool {
        !self.is_resolved && now < self.end_time
    }

    pub fn time_remaining(&self, now: i64) -> i64 {
        self.end_time - now
    }
}

impl UserBetState {
    pub const ACCOUNT_NAME: &'static str = "UserBetState";

    pub fn unpack(data: &[u8]) -> Result<Self> {
        unpack_account(Self::ACCOUNT_NAME, data)
    }

    pub fn is_winner(&self, bet: &BetState) -> bool {
        bet.is_resolved && self.option == bet.winning_option
    }

    /// Claimable exactly once, and only on the winning side.
    pub fn can_claim(&self, bet: &BetState) -> bool {
        self.is_winner(bet) && !self.is_claimed
    }
}

impl PlatformConfig {
    pub const ACCOUNT_NAME: &'static str = "PlatformConfig";

    pub fn unpack(data: &[u8]) -> Result<Self> {
        unpack_account(Self::ACCOUNT_NAME, data)
    }
}

fn unpack_account<T: BorshDeserialize>(name: &'static str, data: &[u8]) -> Result<T> {
    if data.len() < 8 {
        return Err(BridgeError::AccountTooShort);
    }
    let (head, mut body) = data.split_at(8);
    if head != &account_discriminator(name)[..] {
        return Err(BridgeError::ForeignAccount(name));
    }
    T::deserialize(&mut body).map_err(|e| BridgeError::Codec(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{OUTCOME_A, OUTCOME_B};

    pub(crate) fn sample_bet() -> BetState {
        BetState {
            creator: Pubkey::new_unique(),
            bet_id: "1f2e3d4c".to_string(),
            description: "Will the home team win?".to_string(),
            option_a: "Home".to_string(),
            option_b: "Away".to_string(),
            end_time: 1_800_000_000,
            total_amount_a: 3_000_000_000,
            total_amount_b: 1_000_000_000,
            is_resolved: false,
            winning_option: 0,
            bump: 254,
            min_bet_amount: 10_000_000,
            max_bet_amount: 100_000_000_000,
            category: "sports".to_string(),
            created_at: 1_790_000_000,
            resolved_at: 0,
            total_bettors: 7,
            maker_fee_collected: 80_000_000,
            platform_fee_collected: 40_000_000,
            result_details: String::new(),
        }
    }

    fn packed(name: &str, body: &[u8], padding: usize) -> Vec<u8> {
        let mut data = account_discriminator(name).to_vec();
        data.extend_from_slice(body);
        // Anchor zero-fills up to the account's fixed size.
        data.extend(std::iter::repeat(0u8).take(padding));
        data
    }

    #[test]
    fn bet_state_unpacks_with_trailing_padding() {
        let bet = sample_bet();
        let body = borsh::to_vec(&bet).unwrap();
        let decoded = BetState::unpack(&packed(BetState::ACCOUNT_NAME, &body, 473)).unwrap();
        assert_eq!(decoded, bet);
    }

    #[test]
    fn unpack_rejects_foreign_discriminator() {
        let bet = sample_bet();
        let body = borsh::to_vec(&bet).unwrap();
        let err = BetState::unpack(&packed(UserBetState::ACCOUNT_NAME, &body, 0)).unwrap_err();
        assert!(matches!(err, BridgeError::ForeignAccount("BetState")));
    }

    #[test]
    fn unpack_rejects_truncated_data() {
        assert!(matches!(
            BetState::unpack(&[1, 2, 3]),
            Err(BridgeError::AccountTooShort)
        ));
        let mut data = account_discriminator(BetState::ACCOUNT_NAME).to_vec();
        data.extend_from_slice(&[0u8; 4]);
        assert!(matches!(BetState::unpack(&data), Err(BridgeError::Codec(_))));
    }

    #[test]
    fn claim_rules_follow_resolution() {
        let mut bet = sample_bet();
        let mut pos = UserBetState {
            user: Pubkey::new_unique(),
            bet_id: bet.bet_id.clone(),
            option: OUTCOME_A,
            amount: 970_000_000,
            is_claimed: false,
            bump: 253,
            placed_at: 1_790_001_000,
            claimed_at: 0,
            original_amount: 1_000_000_000,
        };

        assert!(!pos.can_claim(&bet)); // unresolved

        bet.is_resolved = true;
        bet.winning_option = OUTCOME_B;
        assert!(!pos.can_claim(&bet)); // lost

        bet.winning_option = OUTCOME_A;
        assert!(pos.can_claim(&bet));

        pos.is_claimed = true;
        assert!(!pos.can_claim(&bet)); // once only
    }

    #[test]
    fn outcome_labels() {
        let bet = sample_bet();
        assert_eq!(bet.outcome_label(OUTCOME_A), Some("Home"));
        assert_eq!(bet.outcome_label(OUTCOME_B), Some("Away"));
        assert_eq!(bet.outcome_label(0), None);
    }
}
