use anchor_lang::prelude::*;

use crate::errors::GoldenCobraError;
use crate::events::{LedgerEntry, RaffleArmed, RankChanged, TxKind};
use crate::state::config::Config;
use crate::state::fund::GlobalFund;
use crate::state::player::Player;
use crate::utils::rank::rank_for;

#[derive(Accounts)]
pub struct Spend<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [Player::SEED_PREFIX, owner.key().as_ref()],
        bump = player.bump,
        constraint = player.owner == owner.key() @ GoldenCobraError::NotAuthorized
    )]
    pub player: Box<Account<'info, Player>>,

    #[account(
        mut,
        seeds = [GlobalFund::SEED],
        bump = fund.bump,
    )]
    pub fund: Box<Account<'info, GlobalFund>>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,
}

/// Burn stars from the spendable balance. The debit, the lifetime-spent
/// bump, and the fund contribution commit together or not at all.
pub fn spend_handler(ctx: Context<Spend>, amount: u64) -> Result<()> {
    let player = &mut ctx.accounts.player;
    let fund = &mut ctx.accounts.fund;
    let config = &ctx.accounts.config;

    let clock = Clock::get()?;

    require!(!config.is_spending_paused(), GoldenCobraError::SpendingPaused);
    require!(amount > 0, GoldenCobraError::InvalidAmount);

    let old_rank = rank_for(player.spent);

    player.debit_spend(amount)?;
    player.touch(clock.unix_timestamp);

    emit!(LedgerEntry {
        player: player.owner,
        amount: -(amount as i64),
        kind: TxKind::Spend,
        balance_after: player.earned,
        timestamp: clock.unix_timestamp,
    });

    // ─────────────────────────────
    // Rank evaluation
    // ─────────────────────────────
    let new_rank = rank_for(player.spent);
    if new_rank.threshold != old_rank.threshold {
        emit!(RankChanged {
            player: player.owner,
            old_threshold: old_rank.threshold,
            new_threshold: new_rank.threshold,
            lifetime_spent: player.spent,
        });
        msg!("Rank up: {} -> {}", old_rank.name, new_rank.name);
    }

    // ─────────────────────────────
    // Community fund / raffle trigger
    // ─────────────────────────────
    let goal_crossed = fund.accumulate(amount)?;
    if goal_crossed {
        fund.raffle_active = 1;
        emit!(RaffleArmed {
            goal: fund.current_goal,
            fund_total: fund.total_stars,
        });
        msg!("Raffle armed at goal {}", fund.current_goal);
    }

    Ok(())
}
