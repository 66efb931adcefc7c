use anchor_lang::prelude::*;

use crate::errors::GoldenCobraError;
use crate::events::{ItemPurchased, LedgerEntry, RaffleArmed, TxKind};
use crate::state::config::Config;
use crate::state::fund::GlobalFund;
use crate::state::player::Player;
use crate::state::shop::{Currency, ItemOwnership, ShopItem};

#[derive(Accounts)]
pub struct PurchaseItem<'info> {
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
        mut,
        seeds = [ShopItem::SEED_PREFIX, &item.item_id.to_le_bytes()],
        bump = item.bump,
    )]
    pub item: Box<Account<'info, ShopItem>>,

    /// Ownership PDA; its seed is the uniqueness constraint on
    /// (player, item); a repeat purchase fails at init.
    #[account(
        init,
        payer = owner,
        space = 8 + ItemOwnership::SIZE,
        seeds = [
            ItemOwnership::SEED_PREFIX,
            &item.item_id.to_le_bytes(),
            owner.key().as_ref(),
        ],
        bump
    )]
    pub ownership: Box<Account<'info, ItemOwnership>>,

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

/// Buy a catalog item in either currency. Star purchases count toward
/// lifetime spend and the community fund like any other spend; XTR purchases
/// only debit the external balance. Stock decrements in the same instruction
/// that creates the ownership record.
pub fn purchase_item_handler(ctx: Context<PurchaseItem>, currency: Currency) -> Result<()> {
    let player = &mut ctx.accounts.player;
    let item = &mut ctx.accounts.item;
    let fund = &mut ctx.accounts.fund;
    let config = &ctx.accounts.config;

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    config.ensure_purchase_allowed(currency)?;

    let price = item.price_in(currency);
    require!(price > 0, GoldenCobraError::InvalidPrice);

    item.take_one()?;

    match currency {
        Currency::Stars => {
            player.debit_spend(price)?;
            let goal_crossed = fund.accumulate(price)?;
            if goal_crossed {
                fund.raffle_active = 1;
                emit!(RaffleArmed {
                    goal: fund.current_goal,
                    fund_total: fund.total_stars,
                });
            }
            emit!(LedgerEntry {
                player: player.owner,
                amount: -(price as i64),
                kind: TxKind::Purchase,
                balance_after: player.earned,
                timestamp: now,
            });
        }
        Currency::Xtr => {
            player.debit_external(price)?;
            emit!(LedgerEntry {
                player: player.owner,
                amount: -(price as i64),
                kind: TxKind::Purchase,
                balance_after: player.external_balance,
                timestamp: now,
            });
        }
    }

    player.items_owned = player
        .items_owned
        .checked_add(1)
        .ok_or(GoldenCobraError::MathOverflow)?;
    player.touch(now);

    let ownership = &mut ctx.accounts.ownership;
    ownership.item_id = item.item_id;
    ownership.bump = ctx.bumps.ownership;
    ownership.owner = player.owner;
    ownership.paid_with = currency;
    ownership.price_paid = price;
    ownership.purchased_at = now;

    emit!(ItemPurchased {
        item_id: item.item_id,
        player: player.owner,
        price_paid: price,
        currency: currency as u8,
    });

    Ok(())
}
