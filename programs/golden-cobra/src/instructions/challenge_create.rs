use anchor_lang::prelude::*;

use crate::errors::GoldenCobraError;
use crate::events::ChallengeCreated;
use crate::state::challenge::{Challenge, ChallengeStatus};
use crate::state::config::Config;
use crate::state::fund::GlobalFund;
use crate::state::player::Player;

#[derive(Accounts)]
#[instruction(challenge_id: u64)]
pub struct CreateChallenge<'info> {
    #[account(mut)]
    pub challenger: Signer<'info>,

    #[account(
        mut,
        seeds = [Player::SEED_PREFIX, challenger.key().as_ref()],
        bump = challenger_player.bump,
        constraint = challenger_player.owner == challenger.key() @ GoldenCobraError::NotAuthorized
    )]
    pub challenger_player: Box<Account<'info, Player>>,

    /// Opponent's ledger account; also proves the opponent exists.
    #[account(
        seeds = [Player::SEED_PREFIX, challenged_player.owner.as_ref()],
        bump = challenged_player.bump,
    )]
    pub challenged_player: Box<Account<'info, Player>>,

    #[account(
        init,
        payer = challenger,
        space = 8 + Challenge::SIZE,
        seeds = [Challenge::SEED_PREFIX, &challenge_id.to_le_bytes()],
        bump
    )]
    pub challenge: Box<Account<'info, Challenge>>,

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

    pub system_program: Program<'info, System>,
}

/// Propose a coin-flip wager. The stake is not escrowed here; both balances
/// are checked again at resolution.
pub fn create_challenge_handler(
    ctx: Context<CreateChallenge>,
    challenge_id: u64,
    stake: u64,
) -> Result<()> {
    let challenger = &mut ctx.accounts.challenger_player;
    let challenged = &ctx.accounts.challenged_player;
    let config = &ctx.accounts.config;

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    require!(stake > 0, GoldenCobraError::InvalidAmount);
    require!(
        challenger.owner != challenged.owner,
        GoldenCobraError::SelfChallenge
    );
    require!(
        challenger.earned >= stake,
        GoldenCobraError::InsufficientFunds
    );
    require!(
        challenged.earned >= stake,
        GoldenCobraError::InsufficientFunds
    );

    let id = ctx.accounts.fund.next_challenge_id(challenge_id)?;

    let challenge = &mut ctx.accounts.challenge;
    challenge.id = id;
    challenge.bump = ctx.bumps.challenge;
    challenge.challenger = challenger.owner;
    challenge.challenged = challenged.owner;
    challenge.stake = stake;
    challenge.status = ChallengeStatus::Pending;
    challenge.winner = Pubkey::default();
    challenge.created_at = now;
    challenge.expires_at = now
        .checked_add(config.challenge_ttl_secs)
        .ok_or(GoldenCobraError::MathOverflow)?;

    challenger.touch(now);

    emit!(ChallengeCreated {
        challenge_id: id,
        challenger: challenge.challenger,
        challenged: challenge.challenged,
        stake,
        expires_at: challenge.expires_at,
    });

    Ok(())
}
