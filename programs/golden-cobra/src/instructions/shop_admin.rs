use anchor_lang::prelude::*;

use crate::constants::UNLIMITED_STOCK;
use crate::errors::GoldenCobraError;
use crate::state::config::Config;
use crate::state::shop::{ItemRarity, ShopItem};

#[derive(Accounts)]
#[instruction(item_id: u64)]
pub struct CreateShopItem<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ GoldenCobraError::NotAuthorized
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        init,
        payer = authority,
        space = 8 + ShopItem::SIZE,
        seeds = [ShopItem::SEED_PREFIX, &item_id.to_le_bytes()],
        bump
    )]
    pub item: Box<Account<'info, ShopItem>>,

    pub system_program: Program<'info, System>,
}

pub fn create_shop_item_handler(
    ctx: Context<CreateShopItem>,
    item_id: u64,
    price_stars: u64,
    price_xtr: u64,
    rarity: ItemRarity,
    stock: i64,
) -> Result<()> {
    // At least one purchase path must be open.
    require!(
        price_stars > 0 || price_xtr > 0,
        GoldenCobraError::InvalidPrice
    );
    require!(
        stock >= 0 || stock == UNLIMITED_STOCK,
        GoldenCobraError::InvalidAmount
    );

    let clock = Clock::get()?;

    let item = &mut ctx.accounts.item;
    item.item_id = item_id;
    item.bump = ctx.bumps.item;
    item.price_stars = price_stars;
    item.price_xtr = price_xtr;
    item.rarity = rarity;
    item.stock = stock;
    item.active = 1;
    item.total_sold = 0;
    item.created_at = clock.unix_timestamp;

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateShopItem<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ GoldenCobraError::NotAuthorized
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [ShopItem::SEED_PREFIX, &item.item_id.to_le_bytes()],
        bump = item.bump,
    )]
    pub item: Box<Account<'info, ShopItem>>,
}

pub fn update_shop_item_handler(
    ctx: Context<UpdateShopItem>,
    price_stars: Option<u64>,
    price_xtr: Option<u64>,
    stock: Option<i64>,
    active: Option<u8>,
) -> Result<()> {
    let item = &mut ctx.accounts.item;

    if let Some(price) = price_stars {
        item.price_stars = price;
    }
    if let Some(price) = price_xtr {
        item.price_xtr = price;
    }
    if let Some(stock) = stock {
        require!(
            stock >= 0 || stock == UNLIMITED_STOCK,
            GoldenCobraError::InvalidAmount
        );
        item.stock = stock;
    }
    if let Some(flag) = active {
        require!(flag <= 1, GoldenCobraError::InvalidAmount);
        item.active = flag;
    }

    require!(
        item.price_stars > 0 || item.price_xtr > 0,
        GoldenCobraError::InvalidPrice
    );

    Ok(())
}
