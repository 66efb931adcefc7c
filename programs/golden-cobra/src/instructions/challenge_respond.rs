use anchor_lang::prelude::*;

use crate::errors::GoldenCobraError;
use crate::events::{ChallengeDeclined, ChallengeResolved, LedgerEntry, TxKind};
use crate::state::challenge::{Challenge, ChallengeStatus};
use crate::state::player::Player;
use crate::utils::random::{coin_flip, derive_seed};

/// Decline reasons surfaced in [`ChallengeDeclined`].
pub const DECLINE_BY_OPPONENT: u8 = 1;
pub const DECLINE_INSUFFICIENT_FUNDS: u8 = 2;

#[derive(Accounts)]
pub struct RespondChallenge<'info> {
    /// Only the challenged party may respond.
    pub responder: Signer<'info>,

    #[account(
        mut,
        seeds = [Challenge::SEED_PREFIX, &challenge.id.to_le_bytes()],
        bump = challenge.bump,
        constraint = challenge.challenged == responder.key() @ GoldenCobraError::NotAuthorized,
    )]
    pub challenge: Box<Account<'info, Challenge>>,

    #[account(
        mut,
        seeds = [Player::SEED_PREFIX, challenge.challenger.as_ref()],
        bump = challenger_player.bump,
    )]
    pub challenger_player: Box<Account<'info, Player>>,

    #[account(
        mut,
        seeds = [Player::SEED_PREFIX, challenge.challenged.as_ref()],
        bump = challenged_player.bump,
    )]
    pub challenged_player: Box<Account<'info, Player>>,
}

/// Accept or decline a pending challenge. On accept the coin is flipped and
/// the stake moves loser -> winner in the same instruction, so the two
/// balance writes and the terminal state commit as one unit.
pub fn respond_challenge_handler(ctx: Context<RespondChallenge>, accept: bool) -> Result<()> {
    let challenge = &mut ctx.accounts.challenge;
    let challenger = &mut ctx.accounts.challenger_player;
    let challenged = &mut ctx.accounts.challenged_player;

    require!(
        challenge.status == ChallengeStatus::Pending,
        GoldenCobraError::AlreadyProcessed
    );

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    if !accept {
        challenge.status = ChallengeStatus::Declined;
        emit!(ChallengeDeclined {
            challenge_id: challenge.id,
            reason: DECLINE_BY_OPPONENT,
        });
        return Ok(());
    }

    challenge.status = ChallengeStatus::Accepted;
    let stake = challenge.stake;

    // Balances may have moved since creation. A side that can no longer
    // cover the stake turns the challenge into a committed decline, not an
    // aborting error (an error would roll the state transition back).
    if challenger.earned < stake || challenged.earned < stake {
        challenge.status = ChallengeStatus::Declined;
        emit!(ChallengeDeclined {
            challenge_id: challenge.id,
            reason: DECLINE_INSUFFICIENT_FUNDS,
        });
        msg!("Challenge {}: stake no longer covered", challenge.id);
        return Ok(());
    }

    // ─────────────────────────────
    // Unweighted coin flip
    // ─────────────────────────────
    let challenge_key = challenge.key();
    let seed = derive_seed(
        &clock,
        &[&challenge_key, &challenge.challenger, &challenge.challenged],
    );
    let challenger_wins = coin_flip(&seed);

    let (winner, loser) = if challenger_wins {
        (challenger, challenged)
    } else {
        (challenged, challenger)
    };

    // Stake moves loser -> winner; the pair conserves the total.
    loser.debit_earned(stake)?;
    winner.credit_earned(stake)?;

    winner.challenges_won = winner
        .challenges_won
        .checked_add(1)
        .ok_or(GoldenCobraError::MathOverflow)?;
    loser.challenges_lost = loser
        .challenges_lost
        .checked_add(1)
        .ok_or(GoldenCobraError::MathOverflow)?;

    winner.touch(now);
    loser.touch(now);

    challenge.status = ChallengeStatus::Completed;
    challenge.winner = winner.owner;

    emit!(LedgerEntry {
        player: loser.owner,
        amount: -(stake as i64),
        kind: TxKind::Challenge,
        balance_after: loser.earned,
        timestamp: now,
    });
    emit!(LedgerEntry {
        player: winner.owner,
        amount: stake as i64,
        kind: TxKind::Challenge,
        balance_after: winner.earned,
        timestamp: now,
    });
    emit!(ChallengeResolved {
        challenge_id: challenge.id,
        winner: challenge.winner,
        loser: if challenger_wins {
            challenge.challenged
        } else {
            challenge.challenger
        },
        stake,
    });

    Ok(())
}
