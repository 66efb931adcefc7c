use anchor_lang::prelude::*;

use crate::errors::GoldenCobraError;
use crate::events::{LedgerEntry, TxKind, WithdrawalCancelled};
use crate::state::player::Player;
use crate::state::withdrawal::{WithdrawalRequest, WithdrawalStatus};

#[derive(Accounts)]
pub struct CancelWithdrawal<'info> {
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
        seeds = [WithdrawalRequest::SEED_PREFIX, &request.id.to_le_bytes()],
        bump = request.bump,
        constraint = request.player == owner.key() @ GoldenCobraError::NotAuthorized,
    )]
    pub request: Box<Account<'info, WithdrawalRequest>>,
}

/// Requester-side cancellation of a still-Pending request. The full reserved
/// amount (fee included) returns to the external balance; once an admin has
/// picked the request up it can no longer be cancelled.
pub fn cancel_withdrawal_handler(ctx: Context<CancelWithdrawal>) -> Result<()> {
    let request = &mut ctx.accounts.request;
    let player = &mut ctx.accounts.player;

    require!(
        request.status == WithdrawalStatus::Pending,
        GoldenCobraError::AlreadyProcessed
    );

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    player.credit_external(request.amount)?;
    player.touch(now);

    request.status = WithdrawalStatus::Cancelled;
    request.settled_at = now;

    emit!(LedgerEntry {
        player: player.owner,
        amount: request.amount as i64,
        kind: TxKind::Withdrawal,
        balance_after: player.external_balance,
        timestamp: now,
    });
    emit!(WithdrawalCancelled {
        request_id: request.id,
        player: player.owner,
        refunded: request.amount,
    });

    Ok(())
}
