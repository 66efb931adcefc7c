use anchor_lang::prelude::*;

use crate::constants::MAX_WALLET_REF_LEN;
use crate::errors::GoldenCobraError;
use crate::events::{LedgerEntry, TxKind, WithdrawalRequested};
use crate::state::config::Config;
use crate::state::fund::GlobalFund;
use crate::state::player::Player;
use crate::state::withdrawal::{WithdrawalRequest, WithdrawalStatus};
use crate::utils::ledger::withdrawal_fee;

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct RequestWithdrawal<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [Player::SEED_PREFIX, owner.key().as_ref()],
        bump = player.bump,
        constraint = player.owner == owner.key() @ GoldenCobraError::NotAuthorized
    )]
    pub player: Box<Account<'info, Player>>,

    #[account(
        init,
        payer = owner,
        space = 8 + WithdrawalRequest::SIZE,
        seeds = [WithdrawalRequest::SEED_PREFIX, &request_id.to_le_bytes()],
        bump
    )]
    pub request: Box<Account<'info, WithdrawalRequest>>,

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

/// Reserve funds for an external payout. The full amount (fee included)
/// leaves the player's XTR balance here; the actual transfer to the external
/// wallet is an out-of-band admin action that later settles the request.
pub fn request_withdrawal_handler(
    ctx: Context<RequestWithdrawal>,
    request_id: u64,
    amount: u64,
    wallet: Vec<u8>,
) -> Result<()> {
    let player = &mut ctx.accounts.player;
    let config = &ctx.accounts.config;

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    require!(
        !config.is_withdraw_paused(),
        GoldenCobraError::WithdrawalsPaused
    );
    require!(player.is_banned == 0, GoldenCobraError::BannedPlayer);
    require!(
        !wallet.is_empty() && wallet.len() <= MAX_WALLET_REF_LEN,
        GoldenCobraError::InvalidWallet
    );

    // Validation order: bounds, then funds, then verification ceiling.
    require!(
        amount >= config.min_withdrawal && amount <= config.max_withdrawal,
        GoldenCobraError::InvalidAmount
    );
    require!(
        player.external_balance >= amount,
        GoldenCobraError::InsufficientFunds
    );
    require!(
        player.is_verified != 0 || amount <= config.unverified_withdrawal_cap,
        GoldenCobraError::VerificationRequired
    );

    let fee = withdrawal_fee(amount, config.withdrawal_fee_percent)?;
    let net = amount
        .checked_sub(fee)
        .ok_or(GoldenCobraError::MathOverflow)?;

    let id = ctx.accounts.fund.next_withdrawal_id(request_id)?;

    // Reserve the full amount; the fee is retained by the system.
    // total_withdrawn moves only when the payout is approved.
    player.debit_external(amount)?;
    player.touch(now);

    let request = &mut ctx.accounts.request;
    request.id = id;
    request.bump = ctx.bumps.request;
    request.player = player.owner;
    request.amount = amount;
    request.fee = fee;
    request.net = net;
    request.set_wallet(&wallet);
    request.status = WithdrawalStatus::Pending;
    request.created_at = now;
    request.settled_at = 0;

    emit!(LedgerEntry {
        player: player.owner,
        amount: -(amount as i64),
        kind: TxKind::Withdrawal,
        balance_after: player.external_balance,
        timestamp: now,
    });
    emit!(WithdrawalRequested {
        request_id: id,
        player: player.owner,
        amount,
        fee,
        net,
    });

    Ok(())
}
