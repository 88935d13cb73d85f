//! Typed client for the betting program.
//!
//! One method per instruction, plus the account reads the gateway polls.
//! Construction takes the endpoint and program id explicitly; there is no
//! ambient cluster state. Requests are validated locally first, so a bad
//! request fails before the network is touched, and nothing is retried.

use std::time::{SystemTime, UNIX_EPOCH};

use solana_account_decoder::UiAccountEncoding;
use solana_client::{
    nonblocking::rpc_client::RpcClient,
    rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig},
    rpc_filter::{Memcmp, RpcFilterType},
};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

use crate::error::Result;
use crate::locator;
use crate::protocol::{self, CreateBetArgs, InitializePlatformArgs, PlaceBetArgs, ResolveBetArgs};
use crate::state::{
    BetState, PlatformConfig, UserBetState, BET_STATE_DISCRIMINATOR,
    USER_BET_STATE_DISCRIMINATOR,
};
use crate::validate::{self, CreateBetRequest};

pub struct ProgramClient {
    rpc: RpcClient,
    program_id: Pubkey,
    commitment: CommitmentConfig,
}

impl ProgramClient {
    pub fn new(rpc_url: String, program_id: Pubkey) -> Self {
        let commitment = CommitmentConfig::confirmed();
        Self {
            rpc: RpcClient::new_with_commitment(rpc_url, commitment),
            program_id,
            commitment,
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    // ---------- Mutations ----------

    pub async fn initialize_platform(
        &self,
        owner: &Keypair,
        platform_fee_bps: u16,
        maker_fee_bps: u16,
    ) -> Result<Signature> {
        let args = InitializePlatformArgs { platform_fee_bps, maker_fee_bps };
        let ix = protocol::initialize_platform(&self.program_id, &owner.pubkey(), &args)?;
        self.send(ix, owner).await
    }

    /// Validates, derives a fresh bet id, and submits. Returns the id
    /// alongside the confirmed signature so callers can watch the market.
    pub async fn create_bet(
        &self,
        creator: &Keypair,
        req: &CreateBetRequest,
    ) -> Result<(String, Signature)> {
        validate::validate_create(req, unix_now())?;

        let bet_id = protocol::derive_bet_id(&req.description, unix_now_millis());
        let args = CreateBetArgs {
            bet_id: bet_id.clone(),
            description: req.description.clone(),
            option_a: req.option_a.clone(),
            option_b: req.option_b.clone(),
            end_time: req.end_time,
            min_bet_amount: req.min_bet_amount,
            max_bet_amount: req.max_bet_amount,
            category: req.category.clone(),
        };
        let ix = protocol::create_bet(&self.program_id, &creator.pubkey(), &args)?;
        let sig = self.send(ix, creator).await?;
        Ok((bet_id, sig))
    }

    pub async fn place_bet(
        &self,
        user: &Keypair,
        bet_id: &str,
        option: u8,
        amount: u64,
    ) -> Result<Signature> {
        validate::validate_place(bet_id, option, amount)?;
        let args = PlaceBetArgs { bet_id: bet_id.to_string(), option, amount };
        let ix = protocol::place_bet(&self.program_id, &user.pubkey(), &args)?;
        self.send(ix, user).await
    }

    pub async fn resolve_bet(
        &self,
        creator: &Keypair,
        bet_id: &str,
        winning_option: u8,
        result_details: &str,
    ) -> Result<Signature> {
        validate::validate_resolve(bet_id, winning_option, result_details)?;
        let args = ResolveBetArgs {
            bet_id: bet_id.to_string(),
            winning_option,
            result_details: result_details.to_string(),
        };
        let ix = protocol::resolve_bet(&self.program_id, &creator.pubkey(), &args)?;
        self.send(ix, creator).await
    }

    pub async fn claim_winnings(&self, user: &Keypair, bet_id: &str) -> Result<Signature> {
        validate::validate_bet_id(bet_id)?;
        let ix = protocol::claim_winnings(&self.program_id, &user.pubkey(), bet_id)?;
        self.send(ix, user).await
    }

    pub async fn claim_maker_fees(&self, creator: &Keypair, bet_id: &str) -> Result<Signature> {
        validate::validate_bet_id(bet_id)?;
        let ix = protocol::claim_maker_fees(&self.program_id, &creator.pubkey(), bet_id)?;
        self.send(ix, creator).await
    }

    pub async fn claim_platform_fees(&self, owner: &Keypair, bet_id: &str) -> Result<Signature> {
        validate::validate_bet_id(bet_id)?;
        let ix = protocol::claim_platform_fees(&self.program_id, &owner.pubkey(), bet_id)?;
        self.send(ix, owner).await
    }

    pub async fn cancel_bet(&self, creator: &Keypair, bet_id: &str) -> Result<Signature> {
        validate::validate_bet_id(bet_id)?;
        let ix = protocol::cancel_bet(&self.program_id, &creator.pubkey(), bet_id)?;
        self.send(ix, creator).await
    }

    async fn send(
        &self,
        ix: solana_sdk::instruction::Instruction,
        signer: &Keypair,
    ) -> Result<Signature> {
        let recent = self.rpc.get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&signer.pubkey()),
            &[signer],
            recent,
        );
        Ok(self.rpc.send_and_confirm_transaction(&tx).await?)
    }

    // ---------- Reads ----------

    /// A bet by id; `None` when nobody has created it (or it was cancelled).
    pub async fn bet(&self, bet_id: &str) -> Result<Option<BetState>> {
        let (address, _) = locator::market_address(&self.program_id, bet_id);
        match self.fetch(&address).await? {
            Some(data) => Ok(Some(BetState::unpack(&data)?)),
            None => Ok(None),
        }
    }

    /// A wallet's position on a bet; `None` simply means it never placed one.
    pub async fn position(&self, bet_id: &str, wallet: &Pubkey) -> Result<Option<UserBetState>> {
        let (address, _) = locator::position_address(&self.program_id, bet_id, wallet);
        match self.fetch(&address).await? {
            Some(data) => Ok(Some(UserBetState::unpack(&data)?)),
            None => Ok(None),
        }
    }

    pub async fn platform_config(&self) -> Result<Option<PlatformConfig>> {
        let (address, _) = locator::platform_config_address(&self.program_id);
        match self.fetch(&address).await? {
            Some(data) => Ok(Some(PlatformConfig::unpack(&data)?)),
            None => Ok(None),
        }
    }

    /// Every bet account owned by the program.
    pub async fn all_bets(&self) -> Result<Vec<(Pubkey, BetState)>> {
        let filters = vec![RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
            0,
            &BET_STATE_DISCRIMINATOR[..],
        ))];
        let accounts = self.program_accounts(filters).await?;
        Ok(accounts
            .into_iter()
            .filter_map(|(address, data)| match BetState::unpack(&data) {
                Ok(bet) => Some((address, bet)),
                Err(e) => {
                    tracing::warn!(%address, error = %e, "skipping undecodable bet account");
                    None
                }
            })
            .collect())
    }

    /// Every position held by `wallet`, across all bets.
    pub async fn positions_for(&self, wallet: &Pubkey) -> Result<Vec<(Pubkey, UserBetState)>> {
        let filters = vec![
            RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
                0,
                &USER_BET_STATE_DISCRIMINATOR[..],
            )),
            // `user` is the first field after the discriminator.
            RpcFilterType::Memcmp(Memcmp::new_base58_encoded(8, wallet.as_ref())),
        ];
        let accounts = self.program_accounts(filters).await?;
        Ok(accounts
            .into_iter()
            .filter_map(|(address, data)| match UserBetState::unpack(&data) {
                Ok(position) => Some((address, position)),
                Err(e) => {
                    tracing::warn!(%address, error = %e, "skipping undecodable position account");
                    None
                }
            })
            .collect())
    }

    async fn fetch(&self, address: &Pubkey) -> Result<Option<Vec<u8>>> {
        let response = self
            .rpc
            .get_account_with_commitment(address, self.commitment)
            .await?;
        Ok(response.value.map(|account| account.data))
    }

    async fn program_accounts(
        &self,
        filters: Vec<RpcFilterType>,
    ) -> Result<Vec<(Pubkey, Vec<u8>)>> {
        let config = RpcProgramAccountsConfig {
            filters: Some(filters),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                commitment: Some(self.commitment),
                ..Default::default()
            },
            ..Default::default()
        };
        let accounts = self
            .rpc
            .get_program_accounts_with_config(&self.program_id, config)
            .await?;
        Ok(accounts
            .into_iter()
            .map(|(address, account)| (address, account.data))
            .collect())
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

fn unix_now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
