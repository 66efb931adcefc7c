use anchor_lang::prelude::*;

use crate::errors::GoldenCobraError;
use crate::events::{DepositSettled, LedgerEntry, TxKind};
use crate::state::config::Config;
use crate::state::player::Player;
use crate::state::receipts::DepositReceipt;
use crate::utils::ledger::stars_from_xtr;

#[derive(Accounts)]
#[instruction(provider_ref: [u8; 32])]
pub struct SettleDeposit<'info> {
    /// Backend authority relaying the payment provider's confirmation.
    #[account(mut)]
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

    /// Idempotency receipt keyed by the provider charge reference. A second
    /// settlement of the same reference lands on the already-settled PDA.
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + DepositReceipt::SIZE,
        seeds = [DepositReceipt::SEED_PREFIX, provider_ref.as_ref()],
        bump,
    )]
    pub receipt: Box<Account<'info, DepositReceipt>>,

    pub system_program: Program<'info, System>,
}

/// Apply a confirmed external-currency deposit: credit the XTR balance and
/// the converted stars, one ledger entry per currency. A duplicate provider
/// reference is a no-op success, never a double credit.
pub fn settle_deposit_handler(
    ctx: Context<SettleDeposit>,
    provider_ref: [u8; 32],
    external_amount: u64,
) -> Result<()> {
    let receipt = &mut ctx.accounts.receipt;

    if receipt.settled != 0 {
        msg!("Deposit already settled, skipping");
        return Ok(());
    }

    require!(external_amount > 0, GoldenCobraError::InvalidAmount);

    let player = &mut ctx.accounts.player;
    let config = &ctx.accounts.config;

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let stars = stars_from_xtr(external_amount, config.stars_per_xtr)?;

    player.credit_external(external_amount)?;
    player.total_deposited = player
        .total_deposited
        .checked_add(external_amount)
        .ok_or(GoldenCobraError::MathOverflow)?;
    player.credit_earned(stars)?;
    player.touch(now);

    receipt.bump = ctx.bumps.receipt;
    receipt.provider_ref = provider_ref;
    receipt.player = player.owner;
    receipt.external_amount = external_amount;
    receipt.stars_credited = stars;
    receipt.settled_at = now;
    receipt.settled = 1;

    emit!(LedgerEntry {
        player: player.owner,
        amount: external_amount as i64,
        kind: TxKind::Deposit,
        balance_after: player.external_balance,
        timestamp: now,
    });
    emit!(LedgerEntry {
        player: player.owner,
        amount: stars as i64,
        kind: TxKind::Earn,
        balance_after: player.earned,
        timestamp: now,
    });
    emit!(DepositSettled {
        player: player.owner,
        provider_ref,
        external_amount,
        stars_credited: stars,
    });

    Ok(())
}
