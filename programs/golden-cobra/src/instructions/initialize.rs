use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::config::Config;
use crate::state::fund::GlobalFund;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Global config PDA.
    #[account(
        init,
        payer = authority,
        space = 8 + Config::SIZE,
        seeds = [Config::SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    /// Community fund PDA.
    #[account(
        init,
        payer = authority,
        space = 8 + GlobalFund::SIZE,
        seeds = [GlobalFund::SEED],
        bump
    )]
    pub fund: Account<'info, GlobalFund>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<Initialize>) -> Result<()> {
    let clock = Clock::get()?;
    let cfg = &mut ctx.accounts.config;

    // ────────────────────────────────────────────────
    // Initialize config
    // ────────────────────────────────────────────────
    cfg.authority = ctx.accounts.authority.key();
    cfg.pause_spend = 0;
    cfg.pause_withdraw = 0;

    cfg.stars_per_xtr = DEFAULT_STARS_PER_XTR;

    cfg.min_withdrawal = DEFAULT_MIN_WITHDRAWAL;
    cfg.max_withdrawal = DEFAULT_MAX_WITHDRAWAL;
    cfg.withdrawal_fee_percent = DEFAULT_WITHDRAWAL_FEE_PERCENT;
    cfg.unverified_withdrawal_cap = DEFAULT_UNVERIFIED_WITHDRAWAL_CAP;

    cfg.daily_base_reward = DEFAULT_DAILY_BASE_REWARD;
    cfg.daily_streak_step = DEFAULT_DAILY_STREAK_STEP;
    cfg.daily_streak_bonus_cap = DEFAULT_DAILY_STREAK_BONUS_CAP;
    cfg.daily_cooldown_secs = DEFAULT_DAILY_COOLDOWN_SECS;
    cfg.streak_break_secs = DEFAULT_STREAK_BREAK_SECS;

    cfg.challenge_ttl_secs = DEFAULT_CHALLENGE_TTL_SECS;

    cfg.started_at = clock.unix_timestamp;
    cfg.bump = ctx.bumps.config;
    cfg._reserved = [0; 16];

    cfg.validate_withdrawal_params()?;

    // ────────────────────────────────────────────────
    // Initialize fund
    // ────────────────────────────────────────────────
    let fund = &mut ctx.accounts.fund;
    fund.bump = ctx.bumps.fund;
    fund.total_stars = 0;
    fund.current_goal = DEFAULT_FUND_GOAL;
    fund.next_goal = DEFAULT_FUND_NEXT_GOAL;
    fund.raffle_active = 0;
    fund.total_raffles = 0;
    fund.last_raffle = 0;
    fund.challenge_count = 0;
    fund.withdrawal_count = 0;
    fund._reserved = [0; 16];

    Ok(())
}
