use thiserror::Error;

/// Errors surfaced by the program client and its support modules.
///
/// A missing account is not represented here: reads return `Option` / empty
/// collections, since a wallet with no position (or an id nobody has created
/// yet) is an ordinary state, not a failure.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("{0} must not be empty")]
    BlankField(&'static str),

    #[error("{field} exceeds {max} bytes")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("end time must be in the future")]
    EndTimeNotInFuture,

    #[error("minimum stake must be positive")]
    ZeroMinStake,

    #[error("maximum stake {max} is below minimum stake {min}")]
    StakeBoundsInverted { min: u64, max: u64 },

    #[error("outcome must be 1 or 2, got {0}")]
    InvalidOutcome(u8),

    #[error("amount must be positive")]
    NonPositiveAmount,

    #[error("account data shorter than its discriminator")]
    AccountTooShort,

    #[error("account discriminator does not match {0}")]
    ForeignAccount(&'static str),

    #[error("borsh codec failure: {0}")]
    Codec(String),

    #[error(transparent)]
    Rpc(#[from] solana_client::client_error::ClientError),
}

impl BridgeError {
    /// Local validation failures block submission without touching the
    /// network; everything else came back from it.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            BridgeError::Rpc(_)
                | BridgeError::Codec(_)
                | BridgeError::AccountTooShort
                | BridgeError::ForeignAccount(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
