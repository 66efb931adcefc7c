use anchor_lang::prelude::*;
use solana_security_txt::security_txt;

use crate::state::shop::{Currency, ItemRarity};

// -----------------------------------------------------------------------------
// Program ID
// -----------------------------------------------------------------------------
declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

security_txt! {
    name: "Golden Cobra",
    project_url: "https://goldencobra.app",
    source_code: "https://github.com/golden-cobra",
    contacts: "mailto:contact@goldencobra.app",
    policy: "https://github.com/golden-cobra/blob/main/SECURITY.md",
    preferred_languages: "en"
}


// -----------------------------------------------------------------------------
// Modules
// -----------------------------------------------------------------------------
pub mod state;
pub mod instructions;
pub mod utils;
pub mod errors;
pub mod events;
pub mod constants;

use instructions::*;

// -----------------------------------------------------------------------------
// Program Entrypoints
// -----------------------------------------------------------------------------
#[program]
pub mod golden_cobra {
    use super::*;

    // -------------------------------------------------------------------------
    // initialize
    // -------------------------------------------------------------------------
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize_handler(ctx)
    }

    // -------------------------------------------------------------------------
    // update_config
    // -------------------------------------------------------------------------
    #[allow(clippy::too_many_arguments)]
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        pause_spend: Option<u8>,
        pause_withdraw: Option<u8>,
        new_authority: Option<Pubkey>,
        new_stars_per_xtr: Option<u64>,
        new_min_withdrawal: Option<u64>,
        new_max_withdrawal: Option<u64>,
        new_withdrawal_fee_percent: Option<u64>,
        new_unverified_withdrawal_cap: Option<u64>,
        new_daily_base_reward: Option<u64>,
        new_challenge_ttl_secs: Option<i64>,
    ) -> Result<()> {
        update_config_handler(
            ctx,
            pause_spend,
            pause_withdraw,
            new_authority,
            new_stars_per_xtr,
            new_min_withdrawal,
            new_max_withdrawal,
            new_withdrawal_fee_percent,
            new_unverified_withdrawal_cap,
            new_daily_base_reward,
            new_challenge_ttl_secs,
        )
    }

    // -------------------------------------------------------------------------
    // emergency_pause_all
    // -------------------------------------------------------------------------
    pub fn emergency_pause_all(ctx: Context<UpdateConfig>) -> Result<()> {
        update_config_handler(
            ctx,
            Some(1),
            Some(1),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
        )
    }

    // =====================================================================
    // PLAYER LEDGER
    // =====================================================================

    pub fn register_player(ctx: Context<RegisterPlayer>) -> Result<()> {
        register_player_handler(ctx)
    }

    pub fn spend(ctx: Context<Spend>, amount: u64) -> Result<()> {
        spend_handler(ctx, amount)
    }

    pub fn claim_daily(ctx: Context<ClaimDaily>) -> Result<()> {
        claim_daily_handler(ctx)
    }

    // =====================================================================
    // CHALLENGES
    // =====================================================================

    pub fn create_challenge(
        ctx: Context<CreateChallenge>,
        challenge_id: u64,
        stake: u64,
    ) -> Result<()> {
        create_challenge_handler(ctx, challenge_id, stake)
    }

    pub fn respond_challenge(ctx: Context<RespondChallenge>, accept: bool) -> Result<()> {
        respond_challenge_handler(ctx, accept)
    }

    pub fn expire_challenge(ctx: Context<ExpireChallenge>) -> Result<()> {
        expire_challenge_handler(ctx)
    }

    // =====================================================================
    // REAL-MONEY SETTLEMENT
    // =====================================================================

    pub fn settle_deposit(
        ctx: Context<SettleDeposit>,
        provider_ref: [u8; 32],
        external_amount: u64,
    ) -> Result<()> {
        settle_deposit_handler(ctx, provider_ref, external_amount)
    }

    pub fn request_withdrawal(
        ctx: Context<RequestWithdrawal>,
        request_id: u64,
        amount: u64,
        wallet: Vec<u8>,
    ) -> Result<()> {
        request_withdrawal_handler(ctx, request_id, amount, wallet)
    }

    pub fn cancel_withdrawal(ctx: Context<CancelWithdrawal>) -> Result<()> {
        cancel_withdrawal_handler(ctx)
    }

    pub fn process_withdrawal(ctx: Context<SettleWithdrawal>) -> Result<()> {
        process_withdrawal_handler(ctx)
    }

    pub fn settle_withdrawal(
        ctx: Context<SettleWithdrawal>,
        approve: bool,
        note: Vec<u8>,
    ) -> Result<()> {
        settle_withdrawal_handler(ctx, approve, note)
    }

    // =====================================================================
    // SHOP
    // =====================================================================

    pub fn create_shop_item(
        ctx: Context<CreateShopItem>,
        item_id: u64,
        price_stars: u64,
        price_xtr: u64,
        rarity: ItemRarity,
        stock: i64,
    ) -> Result<()> {
        create_shop_item_handler(ctx, item_id, price_stars, price_xtr, rarity, stock)
    }

    pub fn update_shop_item(
        ctx: Context<UpdateShopItem>,
        price_stars: Option<u64>,
        price_xtr: Option<u64>,
        stock: Option<i64>,
        active: Option<u8>,
    ) -> Result<()> {
        update_shop_item_handler(ctx, price_stars, price_xtr, stock, active)
    }

    pub fn purchase_item(ctx: Context<PurchaseItem>, currency: Currency) -> Result<()> {
        purchase_item_handler(ctx, currency)
    }

    // =====================================================================
    // RAFFLE
    // =====================================================================

    pub fn draw_raffle<'info>(
        ctx: Context<'_, '_, 'info, 'info, DrawRaffle<'info>>,
    ) -> Result<()> {
        draw_raffle_handler(ctx)
    }

    // =====================================================================
    // ACHIEVEMENTS
    // =====================================================================

    pub fn unlock_achievement(
        ctx: Context<UnlockAchievement>,
        achievement_id: u16,
    ) -> Result<()> {
        unlock_achievement_handler(ctx, achievement_id)
    }

    pub fn award_achievement(
        ctx: Context<AwardAchievement>,
        achievement_id: u16,
    ) -> Result<()> {
        award_achievement_handler(ctx, achievement_id)
    }

    // =====================================================================
    // ADMIN
    // =====================================================================

    pub fn admin_adjust(
        ctx: Context<AdminAdjust>,
        currency: Currency,
        delta: i64,
        note: Vec<u8>,
    ) -> Result<()> {
        admin_adjust_handler(ctx, currency, delta, note)
    }

    pub fn set_player_flags(
        ctx: Context<SetPlayerFlags>,
        verified: Option<u8>,
        banned: Option<u8>,
    ) -> Result<()> {
        set_player_flags_handler(ctx, verified, banned)
    }
}
