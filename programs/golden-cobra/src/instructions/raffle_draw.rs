use anchor_lang::prelude::*;

use crate::constants::{
    RAFFLE_ACTIVE_WINDOW_SECS, RAFFLE_MAX_WINNERS, RAFFLE_MIN_WINNERS, RAFFLE_WINNER_DIVISOR,
};
use crate::errors::GoldenCobraError;
use crate::events::{LedgerEntry, RaffleCompleted, TxKind};
use crate::state::config::Config;
use crate::state::fund::GlobalFund;
use crate::state::player::Player;
use crate::utils::ledger::{raffle_prize_per_winner, raffle_winner_count};
use crate::utils::random::{derive_seed, sample_without_replacement};

#[derive(Accounts)]
pub struct DrawRaffle<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ GoldenCobraError::NotAuthorized
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [GlobalFund::SEED],
        bump = fund.bump,
    )]
    pub fund: Box<Account<'info, GlobalFund>>,
    // remaining_accounts: the eligible Player PDAs (writable). Every passed
    // candidate is re-validated on-chain, so the crank cannot smuggle in a
    // banned or idle player.
}

/// Resolve an armed raffle: sample winners from the candidate set, pay out
/// half the goal split evenly, then advance the goal ladder. With zero
/// candidates the draw still completes with zero payouts, so a
/// dead community can never wedge the fund.
pub fn draw_raffle_handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, DrawRaffle<'info>>,
) -> Result<()> {
    let fund = &mut ctx.accounts.fund;

    require!(fund.is_raffle_armed(), GoldenCobraError::RaffleNotArmed);

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let goal = fund.current_goal;

    let candidates = ctx.remaining_accounts;

    // ─────────────────────────────
    // Validate the candidate set
    // ─────────────────────────────
    for pair_start in 0..candidates.len() {
        for other in candidates.iter().skip(pair_start + 1) {
            require!(
                candidates[pair_start].key() != other.key(),
                GoldenCobraError::DuplicateCandidate
            );
        }
    }

    let mut eligible: Vec<Account<'info, Player>> = Vec::with_capacity(candidates.len());
    for info in candidates {
        let player: Account<'info, Player> = Account::try_from(info)?;
        require!(player.is_banned == 0, GoldenCobraError::IneligibleCandidate);
        require!(
            player.is_active_within(now, RAFFLE_ACTIVE_WINDOW_SECS),
            GoldenCobraError::IneligibleCandidate
        );
        eligible.push(player);
    }

    // ─────────────────────────────
    // Draw and pay
    // ─────────────────────────────
    let mut winner_count = 0u32;
    let mut prize = 0u64;

    if !eligible.is_empty() {
        let count = raffle_winner_count(
            eligible.len(),
            RAFFLE_WINNER_DIVISOR,
            RAFFLE_MIN_WINNERS,
            RAFFLE_MAX_WINNERS,
        );
        prize = raffle_prize_per_winner(goal, count)?;

        let fund_key = fund.key();
        let candidate_keys: Vec<&Pubkey> = std::iter::once(&fund_key)
            .chain(eligible.iter().map(|p| &p.owner))
            .collect();
        let seed = derive_seed(&clock, &candidate_keys);

        for index in sample_without_replacement(&seed, eligible.len(), count) {
            let winner = &mut eligible[index];
            winner.credit_earned(prize)?;
            winner.touch(now);

            emit!(LedgerEntry {
                player: winner.owner,
                amount: prize as i64,
                kind: TxKind::Raffle,
                balance_after: winner.earned,
                timestamp: now,
            });
            msg!("Raffle winner {} gets {} stars", winner.owner, prize);

            winner_count += 1;
        }

        // Write the mutated candidate accounts back; remaining_accounts are
        // not auto-persisted by Anchor.
        for player in eligible.iter_mut() {
            player.exit(&crate::ID)?;
        }
    } else {
        msg!("No eligible players; raffle completes without payout");
    }

    fund.advance_after_raffle(now)?;

    emit!(RaffleCompleted {
        goal,
        winner_count,
        prize_per_winner: prize,
        next_goal: fund.current_goal,
    });

    Ok(())
}
