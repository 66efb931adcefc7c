use anchor_lang::prelude::*;

use crate::constants::MAX_ADMIN_NOTE_LEN;
use crate::errors::GoldenCobraError;
use crate::events::{LedgerEntry, TxKind};
use crate::state::config::Config;
use crate::state::player::Player;
use crate::state::shop::Currency;

#[derive(Accounts)]
pub struct AdminAdjust<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ GoldenCobraError::NotAuthorized
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [Player::SEED_PREFIX, player.owner.as_ref()],
        bump = player.bump,
    )]
    pub player: Box<Account<'info, Player>>,
}

/// Direct balance adjustment. Bypasses user-facing validation (no upper
/// bound), but the non-negative balance invariant still holds and the entry
/// lands in the audit log like any other mutation.
pub fn admin_adjust_handler(
    ctx: Context<AdminAdjust>,
    currency: Currency,
    delta: i64,
    note: Vec<u8>,
) -> Result<()> {
    let player = &mut ctx.accounts.player;

    require!(delta != 0, GoldenCobraError::InvalidAmount);
    require!(note.len() <= MAX_ADMIN_NOTE_LEN, GoldenCobraError::InvalidNote);

    let clock = Clock::get()?;
    let magnitude = delta.unsigned_abs();

    let balance_after = match (currency, delta > 0) {
        (Currency::Stars, true) => {
            player.credit_earned(magnitude)?;
            player.earned
        }
        (Currency::Stars, false) => {
            player.debit_earned(magnitude)?;
            player.earned
        }
        (Currency::Xtr, true) => {
            player.credit_external(magnitude)?;
            player.external_balance
        }
        (Currency::Xtr, false) => {
            player.debit_external(magnitude)?;
            player.external_balance
        }
    };

    msg!(
        "Admin adjustment for {}: {} ({})",
        player.owner,
        delta,
        String::from_utf8_lossy(&note)
    );

    emit!(LedgerEntry {
        player: player.owner,
        amount: delta,
        kind: TxKind::AdminAdjustment,
        balance_after,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetPlayerFlags<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ GoldenCobraError::NotAuthorized
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [Player::SEED_PREFIX, player.owner.as_ref()],
        bump = player.bump,
    )]
    pub player: Box<Account<'info, Player>>,
}

/// Toggle the trust flags: verification (gates large withdrawals) and ban
/// (excludes from raffles).
pub fn set_player_flags_handler(
    ctx: Context<SetPlayerFlags>,
    verified: Option<u8>,
    banned: Option<u8>,
) -> Result<()> {
    let player = &mut ctx.accounts.player;

    if let Some(flag) = verified {
        require!(flag <= 1, GoldenCobraError::InvalidAmount);
        player.is_verified = flag;
    }
    if let Some(flag) = banned {
        require!(flag <= 1, GoldenCobraError::InvalidAmount);
        player.is_banned = flag;
    }

    Ok(())
}
