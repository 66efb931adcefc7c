use anchor_lang::prelude::*;

use crate::errors::GoldenCobraError;
use crate::state::shop::Currency;

/// Global configuration PDA.
///
/// Stores the admin authority, pause flags, the stars/XTR exchange rate, and
/// the parameters of the daily-reward, challenge, and withdrawal paths.
/// This account holds no lamports beyond rent.
#[account]
pub struct Config {
    /// Program admin authority.
    pub authority: Pubkey,

    /// 1 = spending paused, 0 = enabled.
    pub pause_spend: u8,

    /// 1 = withdrawal requests paused, 0 = enabled.
    pub pause_withdraw: u8,

    /// Stars credited per 1 XTR. Single mutable scalar read by every
    /// conversion.
    pub stars_per_xtr: u64,

    // ─────────────────────────────
    // Withdrawal parameters
    // ─────────────────────────────
    pub min_withdrawal: u64,
    pub max_withdrawal: u64,

    /// Whole-percent fee retained from each withdrawal (0..=100).
    pub withdrawal_fee_percent: u64,

    /// Largest single withdrawal allowed without `is_verified`.
    pub unverified_withdrawal_cap: u64,

    // ─────────────────────────────
    // Daily-reward parameters
    // ─────────────────────────────
    pub daily_base_reward: u64,
    pub daily_streak_step: u64,
    pub daily_streak_bonus_cap: u64,
    pub daily_cooldown_secs: i64,
    pub streak_break_secs: i64,

    // ─────────────────────────────
    // Challenge parameters
    // ─────────────────────────────
    pub challenge_ttl_secs: i64,

    /// Unix timestamp when the program was initialized.
    pub started_at: i64,

    /// PDA bump for Config.
    pub bump: u8,

    /// Reserved space for future upgrades.
    pub _reserved: [u8; 16],
}

impl Config {
    pub const SEED: &'static [u8] = b"config";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32 + // authority
            1 +  // pause_spend
            1 +  // pause_withdraw
            8 +  // stars_per_xtr
            8 +  // min_withdrawal
            8 +  // max_withdrawal
            8 +  // withdrawal_fee_percent
            8 +  // unverified_withdrawal_cap
            8 +  // daily_base_reward
            8 +  // daily_streak_step
            8 +  // daily_streak_bonus_cap
            8 +  // daily_cooldown_secs
            8 +  // streak_break_secs
            8 +  // challenge_ttl_secs
            8 +  // started_at
            1 +  // bump
            16;  // reserved

    pub fn is_spending_paused(&self) -> bool {
        self.pause_spend != 0
    }

    pub fn is_withdraw_paused(&self) -> bool {
        self.pause_withdraw != 0
    }

    /// The kill switches cover purchases too: star purchases are spends,
    /// XTR purchases move the withdrawable balance.
    pub fn ensure_purchase_allowed(&self, currency: Currency) -> Result<()> {
        match currency {
            Currency::Stars => require!(
                !self.is_spending_paused(),
                GoldenCobraError::SpendingPaused
            ),
            Currency::Xtr => require!(
                !self.is_withdraw_paused(),
                GoldenCobraError::WithdrawalsPaused
            ),
        }
        Ok(())
    }

    /// Withdrawal bounds and fee must stay mutually consistent.
    pub fn validate_withdrawal_params(&self) -> Result<()> {
        require!(
            self.min_withdrawal > 0 && self.min_withdrawal <= self.max_withdrawal,
            GoldenCobraError::InvalidWithdrawalBounds
        );
        require!(
            self.withdrawal_fee_percent <= 100,
            GoldenCobraError::InvalidFeeConfig
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use anchor_lang::AnchorSerialize;

    fn default_config() -> Config {
        Config {
            authority: Pubkey::default(),
            pause_spend: 0,
            pause_withdraw: 0,
            stars_per_xtr: DEFAULT_STARS_PER_XTR,
            min_withdrawal: DEFAULT_MIN_WITHDRAWAL,
            max_withdrawal: DEFAULT_MAX_WITHDRAWAL,
            withdrawal_fee_percent: DEFAULT_WITHDRAWAL_FEE_PERCENT,
            unverified_withdrawal_cap: DEFAULT_UNVERIFIED_WITHDRAWAL_CAP,
            daily_base_reward: DEFAULT_DAILY_BASE_REWARD,
            daily_streak_step: DEFAULT_DAILY_STREAK_STEP,
            daily_streak_bonus_cap: DEFAULT_DAILY_STREAK_BONUS_CAP,
            daily_cooldown_secs: DEFAULT_DAILY_COOLDOWN_SECS,
            streak_break_secs: DEFAULT_STREAK_BREAK_SECS,
            challenge_ttl_secs: DEFAULT_CHALLENGE_TTL_SECS,
            started_at: 0,
            bump: 0,
            _reserved: [0; 16],
        }
    }

    #[test]
    fn config_size_matches_serialization() {
        let cfg = default_config();
        let bytes = cfg.try_to_vec().unwrap();
        assert_eq!(bytes.len(), Config::SIZE);
    }

    #[test]
    fn default_withdrawal_params_are_valid() {
        let cfg = default_config();
        assert!(cfg.validate_withdrawal_params().is_ok());
    }

    #[test]
    fn fee_above_hundred_percent_rejected() {
        let mut cfg = default_config();
        cfg.withdrawal_fee_percent = 101;
        assert!(cfg.validate_withdrawal_params().is_err());
    }

    #[test]
    fn pause_flags_gate_purchase_currencies() {
        let mut cfg = default_config();
        assert!(cfg.ensure_purchase_allowed(Currency::Stars).is_ok());
        assert!(cfg.ensure_purchase_allowed(Currency::Xtr).is_ok());

        cfg.pause_spend = 1;
        assert!(cfg.ensure_purchase_allowed(Currency::Stars).is_err());
        assert!(cfg.ensure_purchase_allowed(Currency::Xtr).is_ok());

        cfg.pause_spend = 0;
        cfg.pause_withdraw = 1;
        assert!(cfg.ensure_purchase_allowed(Currency::Stars).is_ok());
        assert!(cfg.ensure_purchase_allowed(Currency::Xtr).is_err());
    }

    #[test]
    fn inverted_bounds_rejected() {
        let mut cfg = default_config();
        cfg.min_withdrawal = 500;
        cfg.max_withdrawal = 100;
        assert!(cfg.validate_withdrawal_params().is_err());
    }
}
