use anchor_lang::prelude::*;

use crate::errors::GoldenCobraError;
use crate::events::ChallengeExpired;
use crate::state::challenge::{Challenge, ChallengeStatus};

/// Permissionless sweep crank: anyone may expire a pending challenge whose
/// TTL has elapsed. One bad challenge never blocks the rest of the sweep;
/// each expiry is its own transaction.
#[derive(Accounts)]
pub struct ExpireChallenge<'info> {
    pub cranker: Signer<'info>,

    #[account(
        mut,
        seeds = [Challenge::SEED_PREFIX, &challenge.id.to_le_bytes()],
        bump = challenge.bump,
    )]
    pub challenge: Box<Account<'info, Challenge>>,
}

pub fn expire_challenge_handler(ctx: Context<ExpireChallenge>) -> Result<()> {
    let challenge = &mut ctx.accounts.challenge;

    require!(
        challenge.status == ChallengeStatus::Pending,
        GoldenCobraError::AlreadyProcessed
    );

    let clock = Clock::get()?;
    require!(
        clock.unix_timestamp > challenge.expires_at,
        GoldenCobraError::ChallengeNotExpired
    );

    challenge.status = ChallengeStatus::Expired;

    emit!(ChallengeExpired {
        challenge_id: challenge.id,
    });

    Ok(())
}
