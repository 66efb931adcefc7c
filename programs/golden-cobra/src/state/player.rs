use anchor_lang::prelude::*;

use crate::errors::GoldenCobraError;

/// Per-user ledger account.
///
/// Created on first contact with zero balances, never closed. Every balance
/// mutation in the program flows through the checked helpers below, so
/// `earned` and `external_balance` can never underflow and the lifetime
/// counters never decrease.
#[account]
pub struct Player {
    /// The owning wallet.
    pub owner: Pubkey, // 32

    /// PDA bump.
    pub bump: u8, // 1

    // ─────────────────────────────
    // Balances
    // ─────────────────────────────
    /// Spendable internal currency (stars).
    pub earned: u64, // 8

    /// Lifetime stars spent. Monotonic; drives the rank ladder.
    pub spent: u64, // 8

    /// Lifetime stars credited. Monotonic audit counter.
    pub total_earned: u64, // 8

    /// Withdrawable external currency (XTR).
    pub external_balance: u64, // 8

    /// Lifetime XTR deposited. Monotonic audit counter.
    pub total_deposited: u64, // 8

    /// Lifetime XTR reserved for withdrawal. Monotonic audit counter.
    pub total_withdrawn: u64, // 8

    // ─────────────────────────────
    // Progression
    // ─────────────────────────────
    pub daily_streak: u32,     // 4
    /// Unix timestamp of the last daily claim, 0 = never.
    pub last_daily_claim: i64, // 8
    pub referrals: u32,        // 4
    /// Set once at registration, never overwritten. Default = no referrer.
    pub referred_by: Pubkey,   // 32

    // ─────────────────────────────
    // Trust flags
    // ─────────────────────────────
    /// Gates withdrawals above the unverified cap.
    pub is_verified: u8, // 1
    /// Excludes from raffles.
    pub is_banned: u8, // 1

    // ─────────────────────────────
    // Activity / aggregate stats
    // ─────────────────────────────
    pub last_active: i64,      // 8
    pub challenges_won: u32,   // 4
    pub challenges_lost: u32,  // 4
    pub items_owned: u32,      // 4
    pub created_at: i64,       // 8

    /// Reserved for future upgrades.
    pub _reserved: [u8; 16],
}

impl Player {
    pub const SEED_PREFIX: &'static [u8] = b"player";

    /// Total serialized size (not including the 8-byte discriminator)
    pub const SIZE: usize =
        32  // owner
            + 1   // bump
            + 8   // earned
            + 8   // spent
            + 8   // total_earned
            + 8   // external_balance
            + 8   // total_deposited
            + 8   // total_withdrawn
            + 4   // daily_streak
            + 8   // last_daily_claim
            + 4   // referrals
            + 32  // referred_by
            + 1   // is_verified
            + 1   // is_banned
            + 8   // last_active
            + 4   // challenges_won
            + 4   // challenges_lost
            + 4   // items_owned
            + 8   // created_at
            + 16; // reserved

    /// Increase spendable stars, counting the credit toward lifetime
    /// `total_earned`.
    pub fn credit_earned(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, GoldenCobraError::InvalidAmount);
        self.earned = self
            .earned
            .checked_add(amount)
            .ok_or(GoldenCobraError::MathOverflow)?;
        self.total_earned = self.total_earned.saturating_add(amount);
        Ok(())
    }

    /// Take stars off the spendable balance without counting them as spend
    /// (challenge stakes, admin debits). Fails closed on underflow.
    pub fn debit_earned(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, GoldenCobraError::InvalidAmount);
        self.earned = self
            .earned
            .checked_sub(amount)
            .ok_or(GoldenCobraError::InsufficientFunds)?;
        Ok(())
    }

    /// Spend stars: debit `earned` and push the same amount onto lifetime
    /// `spent`. The balance check and both writes happen here, so a failure
    /// leaves the account untouched.
    pub fn debit_spend(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, GoldenCobraError::InvalidAmount);
        let new_earned = self
            .earned
            .checked_sub(amount)
            .ok_or(GoldenCobraError::InsufficientFunds)?;
        let new_spent = self
            .spent
            .checked_add(amount)
            .ok_or(GoldenCobraError::MathOverflow)?;
        self.earned = new_earned;
        self.spent = new_spent;
        Ok(())
    }

    pub fn credit_external(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, GoldenCobraError::InvalidAmount);
        self.external_balance = self
            .external_balance
            .checked_add(amount)
            .ok_or(GoldenCobraError::MathOverflow)?;
        Ok(())
    }

    pub fn debit_external(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, GoldenCobraError::InvalidAmount);
        self.external_balance = self
            .external_balance
            .checked_sub(amount)
            .ok_or(GoldenCobraError::InsufficientFunds)?;
        Ok(())
    }

    pub fn touch(&mut self, now: i64) {
        self.last_active = now;
    }

    pub fn is_active_within(&self, now: i64, window_secs: i64) -> bool {
        now.saturating_sub(self.last_active) <= window_secs
    }

    pub fn has_referrer(&self) -> bool {
        self.referred_by != Pubkey::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    fn blank_player() -> Player {
        Player {
            owner: Pubkey::default(),
            bump: 0,
            earned: 0,
            spent: 0,
            total_earned: 0,
            external_balance: 0,
            total_deposited: 0,
            total_withdrawn: 0,
            daily_streak: 0,
            last_daily_claim: 0,
            referrals: 0,
            referred_by: Pubkey::default(),
            is_verified: 0,
            is_banned: 0,
            last_active: 0,
            challenges_won: 0,
            challenges_lost: 0,
            items_owned: 0,
            created_at: 0,
            _reserved: [0; 16],
        }
    }

    #[test]
    fn player_size_matches_serialization() {
        let p = blank_player();
        let bytes = p.try_to_vec().unwrap();
        assert_eq!(bytes.len(), Player::SIZE);
    }

    #[test]
    fn debit_spend_moves_earned_to_spent() {
        let mut p = blank_player();
        p.earned = 1_000;
        p.debit_spend(400).unwrap();
        assert_eq!(p.earned, 600);
        assert_eq!(p.spent, 400);
    }

    #[test]
    fn debit_spend_rejects_overdraft_without_mutation() {
        let mut p = blank_player();
        p.earned = 1_000;
        assert!(p.debit_spend(1_500).is_err());
        assert_eq!(p.earned, 1_000);
        assert_eq!(p.spent, 0);
    }

    #[test]
    fn stake_transfer_conserves_combined_balance() {
        // Same loser-debit / winner-credit pair the flip settlement runs,
        // checked for both outcomes.
        for challenger_wins in [true, false] {
            let mut challenger = blank_player();
            let mut challenged = blank_player();
            challenger.earned = 700;
            challenged.earned = 300;
            let total = challenger.earned + challenged.earned;
            let stake = 250;

            let (winner, loser) = if challenger_wins {
                (&mut challenger, &mut challenged)
            } else {
                (&mut challenged, &mut challenger)
            };
            loser.debit_earned(stake).unwrap();
            winner.credit_earned(stake).unwrap();

            assert_eq!(challenger.earned + challenged.earned, total);
            if challenger_wins {
                assert_eq!(challenger.earned, 950);
                assert_eq!(challenged.earned, 50);
            } else {
                assert_eq!(challenger.earned, 450);
                assert_eq!(challenged.earned, 550);
            }
        }
    }

    #[test]
    fn zero_amounts_rejected_everywhere() {
        let mut p = blank_player();
        p.earned = 10;
        p.external_balance = 10;
        assert!(p.credit_earned(0).is_err());
        assert!(p.debit_earned(0).is_err());
        assert!(p.debit_spend(0).is_err());
        assert!(p.credit_external(0).is_err());
        assert!(p.debit_external(0).is_err());
        assert_eq!(p.earned, 10);
        assert_eq!(p.external_balance, 10);
    }

    #[test]
    fn activity_window_check() {
        let mut p = blank_player();
        p.last_active = 1_000;
        assert!(p.is_active_within(1_000 + 100, 3_600));
        assert!(!p.is_active_within(1_000 + 4_000, 3_600));

        // An idle player returns to the eligibility window once touched.
        p.touch(1_000 + 4_000);
        assert!(p.is_active_within(1_000 + 4_000, 3_600));
    }
}
