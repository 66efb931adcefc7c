use anchor_lang::prelude::*;

use crate::constants::REFERRAL_BONUS;
use crate::errors::GoldenCobraError;
use crate::events::{LedgerEntry, PlayerRegistered, TxKind};
use crate::state::player::Player;

#[derive(Accounts)]
pub struct RegisterPlayer<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + Player::SIZE,
        seeds = [Player::SEED_PREFIX, owner.key().as_ref()],
        bump
    )]
    pub player: Box<Account<'info, Player>>,

    /// Referrer's player account, when joining through a referral link.
    #[account(
        mut,
        seeds = [Player::SEED_PREFIX, referrer.owner.as_ref()],
        bump = referrer.bump,
    )]
    pub referrer: Option<Box<Account<'info, Player>>>,

    pub system_program: Program<'info, System>,
}

pub fn register_player_handler(ctx: Context<RegisterPlayer>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let owner_key = ctx.accounts.owner.key();

    let player = &mut ctx.accounts.player;
    player.owner = owner_key;
    player.bump = ctx.bumps.player;
    player.last_active = now;
    player.created_at = now;
    player._reserved = [0; 16];

    let mut referred_by = None;

    // ─────────────────────────────
    // Referral bonus, both sides
    // ─────────────────────────────
    if let Some(referrer) = ctx.accounts.referrer.as_mut() {
        require!(
            referrer.owner != owner_key,
            GoldenCobraError::SelfReferral
        );

        player.referred_by = referrer.owner;
        referred_by = Some(referrer.owner);

        referrer.referrals = referrer
            .referrals
            .checked_add(1)
            .ok_or(GoldenCobraError::MathOverflow)?;
        referrer.credit_earned(REFERRAL_BONUS)?;
        player.credit_earned(REFERRAL_BONUS)?;

        emit!(LedgerEntry {
            player: referrer.owner,
            amount: REFERRAL_BONUS as i64,
            kind: TxKind::Referral,
            balance_after: referrer.earned,
            timestamp: now,
        });
        emit!(LedgerEntry {
            player: owner_key,
            amount: REFERRAL_BONUS as i64,
            kind: TxKind::Referral,
            balance_after: player.earned,
            timestamp: now,
        });
    }

    emit!(PlayerRegistered {
        player: owner_key,
        referred_by,
    });

    Ok(())
}
