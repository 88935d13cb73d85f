//! Wire contract for the on-chain betting program.
//!
//! The program is an Anchor program: instruction data is an 8-byte
//! discriminator (`sha256("global:<name>")[..8]`) followed by the borsh
//! serialization of the arguments in declared order, and every account starts
//! with `sha256("account:<Name>")[..8]`. Seeds, argument layouts and account
//! orders here must match the program exactly; a mismatch shows up as
//! "account not found" rather than a structured error.

use borsh::{BorshDeserialize, BorshSerialize};
use sha2::{Digest, Sha256};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use crate::error::{BridgeError, Result};
use crate::locator;

/// Must match the on-chain seeds.
pub const BET_SEED: &[u8] = b"bet";
pub const USER_BET_SEED: &[u8] = b"user_bet";
pub const PLATFORM_CONFIG_SEED: &[u8] = b"platform_config";

/// Stakes travel in lamports; the UI unit is SOL.
pub const LAMPORTS_PER_SOL: u64 = solana_sdk::native_token::LAMPORTS_PER_SOL;

/// Outcome selector values shared by instructions and account state.
pub const OUTCOME_A: u8 = 1;
pub const OUTCOME_B: u8 = 2;

/// On-chain string capacity, in bytes.
pub const MAX_BET_ID_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 200;
pub const MAX_OPTION_LEN: usize = 100;
pub const MAX_CATEGORY_LEN: usize = 50;
pub const MAX_RESULT_DETAILS_LEN: usize = 300;

pub fn instruction_discriminator(name: &str) -> [u8; 8] {
    anchor_discriminator("global", name)
}

pub fn account_discriminator(name: &str) -> [u8; 8] {
    anchor_discriminator("account", name)
}

fn anchor_discriminator(namespace: &str, name: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    hasher.update(b":");
    hasher.update(name.as_bytes());
    let hash = hasher.finalize();
    let mut out = [0u8; 8];
    out.copy_from_slice(&hash[..8]);
    out
}

/// Derive a bet id from the description and a creation timestamp.
///
/// 32 hex chars of sha256, well inside the on-chain 50-byte bound and free of
/// characters that would be awkward inside a seed.
pub fn derive_bet_id(description: &str, timestamp_ms: u128) -> String {
    let mut hasher = Sha256::new();
    hasher.update(description.as_bytes());
    hasher.update(b"_");
    hasher.update(timestamp_ms.to_le_bytes());
    let hash = hasher.finalize();
    hash[..16].iter().map(|b| format!("{b:02x}")).collect()
}

// ---------- Instruction arguments ----------

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct InitializePlatformArgs {
    pub platform_fee_bps: u16,
    pub maker_fee_bps: u16,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct CreateBetArgs {
    pub bet_id: String,
    pub description: String,
    pub option_a: String,
    pub option_b: String,
    pub end_time: i64,
    pub min_bet_amount: u64,
    pub max_bet_amount: u64,
    pub category: String,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct PlaceBetArgs {
    pub bet_id: String,
    pub option: u8,
    pub amount: u64,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct ResolveBetArgs {
    pub bet_id: String,
    pub winning_option: u8,
    pub result_details: String,
}

/// claim_winnings / claim_maker_fees / claim_platform_fees / cancel_bet all
/// take the bet id alone.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct BetIdArgs {
    pub bet_id: String,
}

fn pack<T: BorshSerialize>(name: &str, args: &T) -> Result<Vec<u8>> {
    let mut data = instruction_discriminator(name).to_vec();
    let body = borsh::to_vec(args).map_err(|e| BridgeError::Codec(e.to_string()))?;
    data.extend_from_slice(&body);
    Ok(data)
}

// ---------- Instruction builders ----------
//
// Account lists mirror the program's `#[derive(Accounts)]` structs in field
// order.

pub fn initialize_platform(
    program_id: &Pubkey,
    owner: &Pubkey,
    args: &InitializePlatformArgs,
) -> Result<Instruction> {
    let (platform_config, _) = locator::platform_config_address(program_id);
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(platform_config, false),
            AccountMeta::new(*owner, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: pack("initialize_platform", args)?,
    })
}

pub fn create_bet(program_id: &Pubkey, creator: &Pubkey, args: &CreateBetArgs) -> Result<Instruction> {
    let (bet, _) = locator::market_address(program_id, &args.bet_id);
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(bet, false),
            AccountMeta::new(*creator, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: pack("create_bet", args)?,
    })
}

pub fn place_bet(program_id: &Pubkey, user: &Pubkey, args: &PlaceBetArgs) -> Result<Instruction> {
    let (bet, _) = locator::market_address(program_id, &args.bet_id);
    let (user_bet, _) = locator::position_address(program_id, &args.bet_id, user);
    let (platform_config, _) = locator::platform_config_address(program_id);
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(bet, false),
            AccountMeta::new(user_bet, false),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(platform_config, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: pack("place_bet", args)?,
    })
}

pub fn resolve_bet(program_id: &Pubkey, creator: &Pubkey, args: &ResolveBetArgs) -> Result<Instruction> {
    let (bet, _) = locator::market_address(program_id, &args.bet_id);
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(bet, false),
            AccountMeta::new(*creator, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: pack("resolve_bet", args)?,
    })
}

pub fn claim_winnings(program_id: &Pubkey, user: &Pubkey, bet_id: &str) -> Result<Instruction> {
    let (bet, _) = locator::market_address(program_id, bet_id);
    let (user_bet, _) = locator::position_address(program_id, bet_id, user);
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(bet, false),
            AccountMeta::new(user_bet, false),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: pack(
            "claim_winnings",
            &BetIdArgs { bet_id: bet_id.to_string() },
        )?,
    })
}

pub fn claim_maker_fees(program_id: &Pubkey, creator: &Pubkey, bet_id: &str) -> Result<Instruction> {
    let (bet, _) = locator::market_address(program_id, bet_id);
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(bet, false),
            AccountMeta::new(*creator, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: pack(
            "claim_maker_fees",
            &BetIdArgs { bet_id: bet_id.to_string() },
        )?,
    })
}

pub fn claim_platform_fees(
    program_id: &Pubkey,
    platform_owner: &Pubkey,
    bet_id: &str,
) -> Result<Instruction> {
    let (bet, _) = locator::market_address(program_id, bet_id);
    let (platform_config, _) = locator::platform_config_address(program_id);
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(bet, false),
            AccountMeta::new_readonly(platform_config, false),
            AccountMeta::new(*platform_owner, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: pack(
            "claim_platform_fees",
            &BetIdArgs { bet_id: bet_id.to_string() },
        )?,
    })
}

pub fn cancel_bet(program_id: &Pubkey, creator: &Pubkey, bet_id: &str) -> Result<Instruction> {
    let (bet, _) = locator::market_address(program_id, bet_id);
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(bet, false),
            AccountMeta::new(*creator, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: pack("cancel_bet", &BetIdArgs { bet_id: bet_id.to_string() })?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program_id() -> Pubkey {
        Pubkey::new_unique()
    }

    #[test]
    fn discriminators_are_stable_and_distinct() {
        assert_eq!(
            instruction_discriminator("place_bet"),
            instruction_discriminator("place_bet")
        );
        assert_ne!(
            instruction_discriminator("place_bet"),
            instruction_discriminator("create_bet")
        );
        // Namespaces are part of the preimage.
        assert_ne!(
            instruction_discriminator("place_bet"),
            account_discriminator("place_bet")
        );
    }

    #[test]
    fn bet_id_is_deterministic_and_input_sensitive() {
        let a = derive_bet_id("Will it rain tomorrow?", 1_700_000_000_000);
        let b = derive_bet_id("Will it rain tomorrow?", 1_700_000_000_000);
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.len() <= MAX_BET_ID_LEN);
        assert_ne!(a, derive_bet_id("Will it rain tomorrow?", 1_700_000_000_001));
        assert_ne!(a, derive_bet_id("Will it snow tomorrow?", 1_700_000_000_000));
    }

    #[test]
    fn place_bet_data_starts_with_discriminator_and_roundtrips() {
        let pid = program_id();
        let user = Pubkey::new_unique();
        let args = PlaceBetArgs {
            bet_id: "abc123".to_string(),
            option: OUTCOME_B,
            amount: 5_000_000,
        };
        let ix = place_bet(&pid, &user, &args).unwrap();

        assert_eq!(&ix.data[..8], &instruction_discriminator("place_bet"));
        let decoded = PlaceBetArgs::try_from_slice(&ix.data[8..]).unwrap();
        assert_eq!(decoded.bet_id, args.bet_id);
        assert_eq!(decoded.option, OUTCOME_B);
        assert_eq!(decoded.amount, 5_000_000);
    }

    #[test]
    fn place_bet_account_order_matches_program() {
        let pid = program_id();
        let user = Pubkey::new_unique();
        let args = PlaceBetArgs {
            bet_id: "abc123".to_string(),
            option: OUTCOME_A,
            amount: 1,
        };
        let ix = place_bet(&pid, &user, &args).unwrap();

        let (bet, _) = locator::market_address(&pid, "abc123");
        let (user_bet, _) = locator::position_address(&pid, "abc123", &user);
        let (platform_config, _) = locator::platform_config_address(&pid);

        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        assert_eq!(
            keys,
            vec![bet, user_bet, user, platform_config, system_program::id()]
        );
        // Only the user signs; the config and system program stay read-only.
        assert!(ix.accounts[2].is_signer);
        assert!(!ix.accounts[3].is_writable);
        assert!(!ix.accounts[4].is_writable);
    }

    #[test]
    fn create_bet_carries_all_args_in_order() {
        let pid = program_id();
        let creator = Pubkey::new_unique();
        let args = CreateBetArgs {
            bet_id: "id".into(),
            description: "desc".into(),
            option_a: "Yes".into(),
            option_b: "No".into(),
            end_time: 1_800_000_000,
            min_bet_amount: 10_000_000,
            max_bet_amount: 100_000_000_000,
            category: "sports".into(),
        };
        let ix = create_bet(&pid, &creator, &args).unwrap();
        let decoded = CreateBetArgs::try_from_slice(&ix.data[8..]).unwrap();
        assert_eq!(decoded.end_time, args.end_time);
        assert_eq!(decoded.max_bet_amount, args.max_bet_amount);
        assert_eq!(decoded.category, "sports");
    }
}
