use anchor_lang::prelude::*;

use crate::errors::GoldenCobraError;

/// ---------------------------------------------------------------------------
/// GlobalFund
/// ---------------------------------------------------------------------------
///
/// Singleton PDA accumulating every spend in the community fund. When the
/// accumulated total crosses `current_goal` the raffle is armed; the draw
/// itself runs in a separate authority crank. Also owns the monotonic
/// issuance counters used to derive challenge and withdrawal PDA seeds.
#[account]
pub struct GlobalFund {
    /// PDA bump.
    pub bump: u8,

    /// Stars accumulated from spends since launch (monotonic).
    pub total_stars: u64,

    /// Goal that arms the next raffle.
    pub current_goal: u64,

    /// Goal installed after the next raffle completes. Doubles each time.
    pub next_goal: u64,

    /// 1 while a raffle is armed but not yet drawn. A second raffle must not
    /// be armed while set.
    pub raffle_active: u8,

    /// Lifetime raffles completed.
    pub total_raffles: u32,

    /// Unix timestamp of the last completed raffle, 0 = never.
    pub last_raffle: i64,

    // ─────────────────────────────
    // Issuance counters
    // ─────────────────────────────
    /// Next challenge id to be created.
    pub challenge_count: u64,

    /// Next withdrawal-request id to be created.
    pub withdrawal_count: u64,

    /// Reserved for future upgrades.
    pub _reserved: [u8; 16],
}

impl GlobalFund {
    pub const SEED: &'static [u8] = b"fund";

    pub const SIZE: usize =
        1 +  // bump
            8 +  // total_stars
            8 +  // current_goal
            8 +  // next_goal
            1 +  // raffle_active
            4 +  // total_raffles
            8 +  // last_raffle
            8 +  // challenge_count
            8 +  // withdrawal_count
            16;  // reserved

    pub fn is_raffle_armed(&self) -> bool {
        self.raffle_active != 0
    }

    /// Add a spend to the fund and report whether the goal was just crossed
    /// (only when no raffle is already armed).
    pub fn accumulate(&mut self, amount: u64) -> Result<bool> {
        self.total_stars = self
            .total_stars
            .checked_add(amount)
            .ok_or(GoldenCobraError::MathOverflow)?;
        Ok(self.total_stars >= self.current_goal && !self.is_raffle_armed())
    }

    /// Advance goals after a completed draw: the fund keeps accumulating, so
    /// only the goal ladder and the flag move.
    pub fn advance_after_raffle(&mut self, now: i64) -> Result<()> {
        self.raffle_active = 0;
        self.current_goal = self.next_goal;
        self.next_goal = self
            .next_goal
            .checked_mul(2)
            .ok_or(GoldenCobraError::MathOverflow)?;
        self.total_raffles = self
            .total_raffles
            .checked_add(1)
            .ok_or(GoldenCobraError::MathOverflow)?;
        self.last_raffle = now;
        Ok(())
    }

    /// Take the next challenge id, verifying the caller-supplied seed value.
    pub fn next_challenge_id(&mut self, supplied: u64) -> Result<u64> {
        require!(
            supplied == self.challenge_count,
            GoldenCobraError::CounterMismatch
        );
        self.challenge_count = self
            .challenge_count
            .checked_add(1)
            .ok_or(GoldenCobraError::MathOverflow)?;
        Ok(supplied)
    }

    /// Take the next withdrawal-request id, verifying the caller-supplied
    /// seed value.
    pub fn next_withdrawal_id(&mut self, supplied: u64) -> Result<u64> {
        require!(
            supplied == self.withdrawal_count,
            GoldenCobraError::CounterMismatch
        );
        self.withdrawal_count = self
            .withdrawal_count
            .checked_add(1)
            .ok_or(GoldenCobraError::MathOverflow)?;
        Ok(supplied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    fn fresh_fund() -> GlobalFund {
        GlobalFund {
            bump: 0,
            total_stars: 0,
            current_goal: 10_000,
            next_goal: 50_000,
            raffle_active: 0,
            total_raffles: 0,
            last_raffle: 0,
            challenge_count: 0,
            withdrawal_count: 0,
            _reserved: [0; 16],
        }
    }

    #[test]
    fn fund_size_matches_serialization() {
        let f = fresh_fund();
        let bytes = f.try_to_vec().unwrap();
        assert_eq!(bytes.len(), GlobalFund::SIZE);
    }

    #[test]
    fn accumulate_arms_exactly_at_goal() {
        let mut f = fresh_fund();
        assert!(!f.accumulate(9_999).unwrap());
        assert!(f.accumulate(1).unwrap());
    }

    #[test]
    fn armed_raffle_suppresses_second_trigger() {
        let mut f = fresh_fund();
        f.raffle_active = 1;
        assert!(!f.accumulate(20_000).unwrap());
    }

    #[test]
    fn goals_double_after_raffle() {
        let mut f = fresh_fund();
        f.raffle_active = 1;
        f.advance_after_raffle(123).unwrap();
        assert_eq!(f.raffle_active, 0);
        assert_eq!(f.current_goal, 50_000);
        assert_eq!(f.next_goal, 100_000);
        assert_eq!(f.total_raffles, 1);
        assert_eq!(f.last_raffle, 123);
    }

    #[test]
    fn issuance_counters_enforce_sequence() {
        let mut f = fresh_fund();
        assert_eq!(f.next_challenge_id(0).unwrap(), 0);
        assert!(f.next_challenge_id(0).is_err());
        assert_eq!(f.next_challenge_id(1).unwrap(), 1);
        assert_eq!(f.next_withdrawal_id(0).unwrap(), 0);
        assert_eq!(f.withdrawal_count, 1);
    }
}
