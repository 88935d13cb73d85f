//! Formatting helpers for pushed snapshots.

use crate::protocol::LAMPORTS_PER_SOL;

/// Implied odds for both outcomes as whole percentages.
///
/// A side's odds reflect the share staked on the other side; an empty pool
/// shows even odds.
pub fn odds(total_a: u64, total_b: u64) -> (u32, u32) {
    let total = total_a as u128 + total_b as u128;
    if total == 0 {
        return (50, 50);
    }
    let odds_a = (total_b as f64 / total as f64 * 100.0).round() as u32;
    let odds_b = (total_a as f64 / total as f64 * 100.0).round() as u32;
    (odds_a, odds_b)
}

/// Lamports rendered as SOL with four decimals.
pub fn format_sol(lamports: u64) -> String {
    format!("{:.4}", lamports as f64 / LAMPORTS_PER_SOL as f64)
}

/// Seconds left rendered for the card header; anything elapsed is "Ended".
pub fn format_time_remaining(seconds: i64) -> String {
    if seconds <= 0 {
        return "Ended".to_string();
    }
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_shows_even_odds() {
        assert_eq!(odds(0, 0), (50, 50));
    }

    #[test]
    fn odds_weight_the_opposite_side() {
        // 3 SOL on A, 1 SOL on B: A pays out of the 25% staked against it.
        assert_eq!(odds(3_000_000_000, 1_000_000_000), (25, 75));
        assert_eq!(odds(1, 0), (0, 100));
        assert_eq!(odds(0, 1), (100, 0));

        let (a, b) = odds(123_456_789, 987_654_321);
        assert_eq!(a + b, 100);
    }

    #[test]
    fn sol_formatting_keeps_four_decimals() {
        assert_eq!(format_sol(0), "0.0000");
        assert_eq!(format_sol(10_000_000), "0.0100");
        assert_eq!(format_sol(1_500_000_000), "1.5000");
    }

    #[test]
    fn elapsed_time_renders_ended() {
        assert_eq!(format_time_remaining(0), "Ended");
        assert_eq!(format_time_remaining(-5), "Ended");
    }

    #[test]
    fn time_components_collapse_from_days_down() {
        assert_eq!(format_time_remaining(3_661), "1h 1m");
        assert_eq!(format_time_remaining(59), "0m");
        assert_eq!(format_time_remaining(60), "1m");
        assert_eq!(format_time_remaining(90_061), "1d 1h 1m");
    }
}
