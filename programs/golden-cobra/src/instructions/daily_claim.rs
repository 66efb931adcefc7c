use anchor_lang::prelude::*;

use crate::errors::GoldenCobraError;
use crate::events::{DailyClaimed, LedgerEntry, TxKind};
use crate::state::config::Config;
use crate::state::player::Player;
use crate::utils::ledger::daily_reward;

#[derive(Accounts)]
pub struct ClaimDaily<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [Player::SEED_PREFIX, owner.key().as_ref()],
        bump = player.bump,
        constraint = player.owner == owner.key() @ GoldenCobraError::NotAuthorized
    )]
    pub player: Box<Account<'info, Player>>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,
}

/// Daily reward claim. Inside the cooldown window the claim fails with no
/// balance change; claiming within the streak window extends the streak,
/// later than that resets it to day one.
pub fn claim_daily_handler(ctx: Context<ClaimDaily>) -> Result<()> {
    let player = &mut ctx.accounts.player;
    let config = &ctx.accounts.config;

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let new_streak = if player.last_daily_claim == 0 {
        1
    } else {
        let since = now.saturating_sub(player.last_daily_claim);
        require!(
            since >= config.daily_cooldown_secs,
            GoldenCobraError::DailyCooldown
        );
        if since < config.streak_break_secs {
            player
                .daily_streak
                .checked_add(1)
                .ok_or(GoldenCobraError::MathOverflow)?
        } else {
            1
        }
    };

    let reward = daily_reward(
        config.daily_base_reward,
        config.daily_streak_step,
        config.daily_streak_bonus_cap,
        new_streak,
    );

    player.last_daily_claim = now;
    player.daily_streak = new_streak;
    player.credit_earned(reward)?;
    player.touch(now);

    emit!(LedgerEntry {
        player: player.owner,
        amount: reward as i64,
        kind: TxKind::Daily,
        balance_after: player.earned,
        timestamp: now,
    });
    emit!(DailyClaimed {
        player: player.owner,
        reward,
        streak: new_streak,
    });

    Ok(())
}
