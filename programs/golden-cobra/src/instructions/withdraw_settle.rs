use anchor_lang::prelude::*;

use crate::constants::MAX_ADMIN_NOTE_LEN;
use crate::errors::GoldenCobraError;
use crate::events::WithdrawalSettled;
use crate::state::config::Config;
use crate::state::player::Player;
use crate::state::withdrawal::{WithdrawalRequest, WithdrawalStatus};

#[derive(Accounts)]
pub struct SettleWithdrawal<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ GoldenCobraError::NotAuthorized
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [WithdrawalRequest::SEED_PREFIX, &request.id.to_le_bytes()],
        bump = request.bump,
    )]
    pub request: Box<Account<'info, WithdrawalRequest>>,

    #[account(
        mut,
        seeds = [Player::SEED_PREFIX, request.player.as_ref()],
        bump = player.bump,
    )]
    pub player: Box<Account<'info, Player>>,
}

/// Mark a request as being worked on. Keeps two admins from racing the same
/// payout.
pub fn process_withdrawal_handler(ctx: Context<SettleWithdrawal>) -> Result<()> {
    let request = &mut ctx.accounts.request;

    require!(
        request.status == WithdrawalStatus::Pending,
        GoldenCobraError::AlreadyProcessed
    );

    request.status = WithdrawalStatus::Processing;
    msg!("Withdrawal {} processing", request.id);

    Ok(())
}

/// Final admin verdict after the out-of-band transfer attempt. Rejection
/// does not refund the reserved balance; a reversal, if owed, is an explicit
/// `admin_adjust`.
pub fn settle_withdrawal_handler(
    ctx: Context<SettleWithdrawal>,
    approve: bool,
    note: Vec<u8>,
) -> Result<()> {
    let request = &mut ctx.accounts.request;

    require!(!request.is_terminal(), GoldenCobraError::AlreadyProcessed);
    require!(note.len() <= MAX_ADMIN_NOTE_LEN, GoldenCobraError::InvalidNote);

    let clock = Clock::get()?;

    if approve {
        let player = &mut ctx.accounts.player;
        player.total_withdrawn = player
            .total_withdrawn
            .checked_add(request.amount)
            .ok_or(GoldenCobraError::MathOverflow)?;
        request.status = WithdrawalStatus::Completed;
    } else {
        request.status = WithdrawalStatus::Rejected;
    }
    request.set_admin_note(&note);
    request.settled_at = clock.unix_timestamp;

    emit!(WithdrawalSettled {
        request_id: request.id,
        player: request.player,
        approved: approve,
    });

    Ok(())
}
