use anchor_lang::prelude::*;

use crate::errors::GoldenCobraError;

/// Stars credited for an XTR amount at the given rate.
pub fn stars_from_xtr(xtr: u64, stars_per_xtr: u64) -> Result<u64> {
    xtr.checked_mul(stars_per_xtr)
        .ok_or_else(|| error!(GoldenCobraError::MathOverflow))
}

/// Inverse conversion, truncating toward zero.
pub fn xtr_from_stars(stars: u64, stars_per_xtr: u64) -> Result<u64> {
    stars
        .checked_div(stars_per_xtr)
        .ok_or_else(|| error!(GoldenCobraError::InvalidAmount))
}

/// Withdrawal fee for a whole-percent rate: floor(amount * pct / 100).
pub fn withdrawal_fee(amount: u64, fee_percent: u64) -> Result<u64> {
    amount
        .checked_mul(fee_percent)
        .ok_or(GoldenCobraError::MathOverflow)?
        .checked_div(100)
        .ok_or_else(|| error!(GoldenCobraError::MathOverflow))
}

/// Daily reward: base plus a per-day streak bonus that does not apply to the
/// first day and is capped. `streak` is the streak AFTER the claim (>= 1).
pub fn daily_reward(base: u64, step: u64, cap: u64, streak: u32) -> u64 {
    let prior_days = u64::from(streak.saturating_sub(1));
    base.saturating_add(prior_days.saturating_mul(step).min(cap))
}

/// Raffle winner count: one winner per ten eligible players, clamped.
pub fn raffle_winner_count(eligible: usize, divisor: usize, min: usize, max: usize) -> usize {
    (eligible / divisor).clamp(min, max)
}

/// Prize per raffle winner: half the goal split evenly, remainder stays in
/// the fund.
pub fn raffle_prize_per_winner(goal: u64, winner_count: usize) -> Result<u64> {
    let share = (winner_count as u64)
        .checked_mul(2)
        .ok_or(GoldenCobraError::MathOverflow)?;
    goal.checked_div(share)
        .ok_or_else(|| error!(GoldenCobraError::InvalidAmount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_multiplies_by_rate() {
        // 10 XTR at rate 1000 -> 10_000 stars.
        assert_eq!(stars_from_xtr(10, 1_000).unwrap(), 10_000);
        assert!(stars_from_xtr(u64::MAX, 2).is_err());
    }

    #[test]
    fn inverse_conversion_truncates_toward_zero() {
        assert_eq!(xtr_from_stars(1_999, 1_000).unwrap(), 1);
        assert_eq!(xtr_from_stars(999, 1_000).unwrap(), 0);
    }

    #[test]
    fn fee_floors() {
        // 5% of 999 = 49.95 -> 49.
        assert_eq!(withdrawal_fee(999, 5).unwrap(), 49);
        assert_eq!(withdrawal_fee(1_000, 5).unwrap(), 50);
        assert_eq!(withdrawal_fee(100, 0).unwrap(), 0);
    }

    #[test]
    fn net_equals_amount_minus_fee() {
        for amount in [10u64, 37, 100, 999, 10_000] {
            let fee = withdrawal_fee(amount, 5).unwrap();
            let net = amount - fee;
            assert_eq!(net, amount - amount * 5 / 100);
        }
    }

    #[test]
    fn first_daily_claim_pays_exactly_base() {
        assert_eq!(daily_reward(100, 10, 500, 1), 100);
    }

    #[test]
    fn streak_bonus_grows_then_caps() {
        assert_eq!(daily_reward(100, 10, 500, 2), 110);
        assert_eq!(daily_reward(100, 10, 500, 11), 200);
        // 50 prior days * 10 = 500 = cap.
        assert_eq!(daily_reward(100, 10, 500, 51), 600);
        assert_eq!(daily_reward(100, 10, 500, 200), 600);
    }

    #[test]
    fn winner_count_clamps() {
        assert_eq!(raffle_winner_count(0, 10, 1, 10), 1);
        assert_eq!(raffle_winner_count(5, 10, 1, 10), 1);
        assert_eq!(raffle_winner_count(10, 10, 1, 10), 1);
        assert_eq!(raffle_winner_count(35, 10, 1, 10), 3);
        assert_eq!(raffle_winner_count(500, 10, 1, 10), 10);
    }

    #[test]
    fn raffle_payout_never_exceeds_half_goal() {
        for goal in [10_000u64, 50_001, 99_999] {
            for winners in 1..=10usize {
                let prize = raffle_prize_per_winner(goal, winners).unwrap();
                assert!(prize * winners as u64 <= goal / 2);
            }
        }
    }

    #[test]
    fn five_eligible_at_ten_thousand_goal() {
        // Goal 10_000 with 5 eligible players: one winner, prize 5_000.
        let winners = raffle_winner_count(5, 10, 1, 10);
        assert_eq!(winners, 1);
        assert_eq!(raffle_prize_per_winner(10_000, winners).unwrap(), 5_000);
    }
}
