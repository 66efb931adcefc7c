use anchor_lang::prelude::*;

use crate::errors::GoldenCobraError;
use crate::state::config::Config;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Global Config PDA.
    /// Only the `authority` stored in Config is allowed to update it.
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ GoldenCobraError::NotAuthorized
    )]
    pub config: Account<'info, Config>,

    /// Current program authority.
    pub authority: Signer<'info>,
}

/// Updates one or more global configuration parameters.
///
/// All arguments are optional: a `None` leaves the existing value unchanged.
#[allow(clippy::too_many_arguments)]
pub fn update_config_handler(
    ctx: Context<UpdateConfig>,
    pause_spend: Option<u8>,
    pause_withdraw: Option<u8>,
    new_authority: Option<Pubkey>,
    new_stars_per_xtr: Option<u64>,
    new_min_withdrawal: Option<u64>,
    new_max_withdrawal: Option<u64>,
    new_withdrawal_fee_percent: Option<u64>,
    new_unverified_withdrawal_cap: Option<u64>,
    new_daily_base_reward: Option<u64>,
    new_challenge_ttl_secs: Option<i64>,
) -> Result<()> {
    let cfg = &mut ctx.accounts.config;

    if let Some(flag) = pause_spend {
        require!(flag <= 1, GoldenCobraError::InvalidAmount);
        cfg.pause_spend = flag;
    }

    if let Some(flag) = pause_withdraw {
        require!(flag <= 1, GoldenCobraError::InvalidAmount);
        cfg.pause_withdraw = flag;
    }

    if let Some(authority) = new_authority {
        require!(
            authority != Pubkey::default(),
            GoldenCobraError::NotAuthorized
        );
        cfg.authority = authority;
    }

    if let Some(rate) = new_stars_per_xtr {
        require!(rate > 0, GoldenCobraError::InvalidAmount);
        cfg.stars_per_xtr = rate;
    }

    if let Some(min) = new_min_withdrawal {
        cfg.min_withdrawal = min;
    }

    if let Some(max) = new_max_withdrawal {
        cfg.max_withdrawal = max;
    }

    if let Some(fee) = new_withdrawal_fee_percent {
        cfg.withdrawal_fee_percent = fee;
    }

    if let Some(cap) = new_unverified_withdrawal_cap {
        cfg.unverified_withdrawal_cap = cap;
    }

    if let Some(base) = new_daily_base_reward {
        require!(base > 0, GoldenCobraError::InvalidAmount);
        cfg.daily_base_reward = base;
    }

    if let Some(ttl) = new_challenge_ttl_secs {
        require!(ttl > 0, GoldenCobraError::InvalidAmount);
        cfg.challenge_ttl_secs = ttl;
    }

    // Reject any combination that leaves the withdrawal path unusable.
    cfg.validate_withdrawal_params()?;

    msg!("Config updated by {}", ctx.accounts.authority.key());

    Ok(())
}
