//! Local request validation.
//!
//! Everything here runs before any network traffic: a rejected request never
//! reaches the RPC endpoint. The current time is an argument, not a clock
//! read, so the rules stay testable.

use serde::Deserialize;

use crate::error::{BridgeError, Result};
use crate::protocol::{
    MAX_BET_ID_LEN, MAX_CATEGORY_LEN, MAX_DESCRIPTION_LEN, MAX_OPTION_LEN,
    MAX_RESULT_DETAILS_LEN, OUTCOME_A, OUTCOME_B,
};

/// Defaults applied when a creator does not set stake bounds: 0.01 SOL up to
/// 100 SOL.
pub const DEFAULT_MIN_BET: u64 = 10_000_000;
pub const DEFAULT_MAX_BET: u64 = 100_000_000_000;

/// Market-creation request. `end_time` is unix seconds; stakes are lamports.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBetRequest {
    pub description: String,
    pub option_a: String,
    pub option_b: String,
    pub end_time: i64,
    #[serde(default = "default_min_bet")]
    pub min_bet_amount: u64,
    #[serde(default = "default_max_bet")]
    pub max_bet_amount: u64,
    pub category: String,
}

fn default_min_bet() -> u64 {
    DEFAULT_MIN_BET
}

fn default_max_bet() -> u64 {
    DEFAULT_MAX_BET
}

pub fn validate_create(req: &CreateBetRequest, now: i64) -> Result<()> {
    require_text("description", &req.description, MAX_DESCRIPTION_LEN)?;
    require_text("option_a", &req.option_a, MAX_OPTION_LEN)?;
    require_text("option_b", &req.option_b, MAX_OPTION_LEN)?;
    require_text("category", &req.category, MAX_CATEGORY_LEN)?;
    if req.end_time <= now {
        return Err(BridgeError::EndTimeNotInFuture);
    }
    if req.min_bet_amount == 0 {
        return Err(BridgeError::ZeroMinStake);
    }
    if req.max_bet_amount < req.min_bet_amount {
        return Err(BridgeError::StakeBoundsInverted {
            min: req.min_bet_amount,
            max: req.max_bet_amount,
        });
    }
    Ok(())
}

pub fn validate_place(bet_id: &str, option: u8, amount: u64) -> Result<()> {
    validate_bet_id(bet_id)?;
    validate_outcome(option)?;
    if amount == 0 {
        return Err(BridgeError::NonPositiveAmount);
    }
    Ok(())
}

pub fn validate_resolve(bet_id: &str, winning_option: u8, result_details: &str) -> Result<()> {
    validate_bet_id(bet_id)?;
    validate_outcome(winning_option)?;
    require_text("result_details", result_details, MAX_RESULT_DETAILS_LEN)
}

pub fn validate_bet_id(bet_id: &str) -> Result<()> {
    require_text("bet_id", bet_id, MAX_BET_ID_LEN)
}

fn validate_outcome(option: u8) -> Result<()> {
    if option != OUTCOME_A && option != OUTCOME_B {
        return Err(BridgeError::InvalidOutcome(option));
    }
    Ok(())
}

fn require_text(field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BridgeError::BlankField(field));
    }
    if value.len() > max {
        return Err(BridgeError::FieldTooLong { field, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn request() -> CreateBetRequest {
        CreateBetRequest {
            description: "Will it rain tomorrow?".to_string(),
            option_a: "Yes".to_string(),
            option_b: "No".to_string(),
            end_time: NOW + 3_600,
            min_bet_amount: DEFAULT_MIN_BET,
            max_bet_amount: DEFAULT_MAX_BET,
            category: "weather".to_string(),
        }
    }

    #[test]
    fn well_formed_request_passes() {
        assert!(validate_create(&request(), NOW).is_ok());
    }

    #[test]
    fn blank_text_fields_are_rejected() {
        for field in ["description", "option_a", "option_b", "category"] {
            let mut req = request();
            match field {
                "description" => req.description = "  ".into(),
                "option_a" => req.option_a = String::new(),
                "option_b" => req.option_b = "\t".into(),
                _ => req.category = String::new(),
            }
            let err = validate_create(&req, NOW).unwrap_err();
            assert!(matches!(err, BridgeError::BlankField(f) if f == field));
            assert!(err.is_validation());
        }
    }

    #[test]
    fn end_time_must_be_strictly_future() {
        let mut req = request();
        req.end_time = NOW;
        assert!(matches!(
            validate_create(&req, NOW),
            Err(BridgeError::EndTimeNotInFuture)
        ));
        req.end_time = NOW - 1;
        assert!(validate_create(&req, NOW).is_err());
        req.end_time = NOW + 1;
        assert!(validate_create(&req, NOW).is_ok());
    }

    #[test]
    fn stake_bounds_must_be_ordered() {
        let mut req = request();
        req.min_bet_amount = 100;
        req.max_bet_amount = 99;
        assert!(matches!(
            validate_create(&req, NOW),
            Err(BridgeError::StakeBoundsInverted { min: 100, max: 99 })
        ));

        req.min_bet_amount = 0;
        assert!(matches!(
            validate_create(&req, NOW),
            Err(BridgeError::ZeroMinStake)
        ));
    }

    #[test]
    fn oversized_fields_are_rejected() {
        let mut req = request();
        req.description = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(matches!(
            validate_create(&req, NOW),
            Err(BridgeError::FieldTooLong { field: "description", .. })
        ));
    }

    #[test]
    fn place_rejects_bad_outcome_and_amount() {
        assert!(validate_place("bet-1", 1, 1).is_ok());
        assert!(validate_place("bet-1", 2, 1).is_ok());
        assert!(matches!(
            validate_place("bet-1", 0, 1),
            Err(BridgeError::InvalidOutcome(0))
        ));
        assert!(matches!(
            validate_place("bet-1", 3, 1),
            Err(BridgeError::InvalidOutcome(3))
        ));
        assert!(matches!(
            validate_place("bet-1", 1, 0),
            Err(BridgeError::NonPositiveAmount)
        ));
        assert!(matches!(
            validate_place("", 1, 1),
            Err(BridgeError::BlankField("bet_id"))
        ));
    }

    #[test]
    fn resolve_requires_details() {
        assert!(validate_resolve("bet-1", 2, "Away side won 2-1").is_ok());
        assert!(matches!(
            validate_resolve("bet-1", 2, "  "),
            Err(BridgeError::BlankField("result_details"))
        ));
        assert!(matches!(
            validate_resolve("bet-1", 9, "done"),
            Err(BridgeError::InvalidOutcome(9))
        ));
    }
}
