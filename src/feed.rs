//! Outbound message builders.
//!
//! Everything a dashboard renders is composed here from decoded account
//! state: raw lamport figures for anything a client wants to recompute, plus
//! the formatted odds / SOL / countdown strings the cards show directly. No
//! builder touches the network.

use serde_json::{json, Value};
use solana_sdk::pubkey::Pubkey;

use crate::display;
use crate::state::{BetState, UserBetState};

pub fn registered(client_id: &str, wallet: &Pubkey) -> Value {
    json!({
        "type": "registered",
        "client_id": client_id,
        "wallet": wallet.to_string(),
    })
}

pub fn spectator_registered(spectator_id: &str) -> Value {
    json!({
        "type": "spectator_registered",
        "spectator_id": spectator_id,
    })
}

/// Confirmed-transaction notification, the counterpart of a success toast.
pub fn tx(kind: &str, signature: &str) -> Value {
    json!({
        "type": "tx",
        "kind": kind,
        "signature": signature,
    })
}

/// Transient failure notification; the operation is abandoned, the user may
/// re-trigger it.
pub fn error(message: String) -> Value {
    json!({
        "type": "error",
        "message": message,
    })
}

/// Broadcast once per fresh market so every dashboard learns the id.
pub fn bet_created(bet_id: &str, signature: &str) -> Value {
    json!({
        "type": "bet_created",
        "bet_id": bet_id,
        "signature": signature,
    })
}

pub fn bet_update(address: &Pubkey, bet: &BetState, now: i64) -> Value {
    let mut snapshot = bet_snapshot(address, bet, now);
    snapshot["type"] = json!("bet_update");
    snapshot
}

pub fn bet_list(entries: &[(Pubkey, BetState)], now: i64) -> Value {
    json!({
        "type": "bet_list",
        "bets": entries
            .iter()
            .map(|(address, bet)| bet_snapshot(address, bet, now))
            .collect::<Vec<_>>(),
    })
}

/// `position: null` tells the card "you have no stake here" — distinct from
/// a fetch error, which arrives as an `error` message instead.
pub fn position_update(bet_id: &str, position: Option<(&Pubkey, &UserBetState)>, bet: Option<&BetState>) -> Value {
    json!({
        "type": "position_update",
        "bet_id": bet_id,
        "position": position.map(|(address, p)| position_snapshot(address, p, bet)),
    })
}

pub fn position_list(wallet: &Pubkey, entries: &[(Pubkey, UserBetState)]) -> Value {
    json!({
        "type": "position_list",
        "wallet": wallet.to_string(),
        "positions": entries
            .iter()
            .map(|(address, p)| position_snapshot(address, p, None))
            .collect::<Vec<_>>(),
    })
}

fn bet_snapshot(address: &Pubkey, bet: &BetState, now: i64) -> Value {
    let (odds_a, odds_b) = display::odds(bet.total_amount_a, bet.total_amount_b);
    json!({
        "bet_id": bet.bet_id,
        "address": address.to_string(),
        "creator": bet.creator.to_string(),
        "description": bet.description,
        "option_a": bet.option_a,
        "option_b": bet.option_b,
        "category": bet.category,
        "total_amount_a": bet.total_amount_a,
        "total_amount_b": bet.total_amount_b,
        "total_pool_sol": display::format_sol(bet.total_pool()),
        "odds_a": odds_a,
        "odds_b": odds_b,
        "min_bet_amount": bet.min_bet_amount,
        "max_bet_amount": bet.max_bet_amount,
        "total_bettors": bet.total_bettors,
        "maker_fee_collected": bet.maker_fee_collected,
        "is_resolved": bet.is_resolved,
        "winning_option": bet.winning_option,
        "winning_label": bet.outcome_label(bet.winning_option),
        "result_details": bet.result_details,
        "created_at": bet.created_at,
        "end_time": bet.end_time,
        "time_remaining": display::format_time_remaining(bet.time_remaining(now)),
    })
}

fn position_snapshot(address: &Pubkey, position: &UserBetState, bet: Option<&BetState>) -> Value {
    json!({
        "bet_id": position.bet_id,
        "address": address.to_string(),
        "option": position.option,
        "option_label": bet.and_then(|b| b.outcome_label(position.option)),
        "amount": position.amount,
        "amount_sol": display::format_sol(position.amount),
        "original_amount": position.original_amount,
        "is_claimed": position.is_claimed,
        "can_claim": bet.map(|b| position.can_claim(b)),
        "placed_at": position.placed_at,
        "claimed_at": position.claimed_at,
    })
}
