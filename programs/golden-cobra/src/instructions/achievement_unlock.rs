use anchor_lang::prelude::*;

use crate::errors::GoldenCobraError;
use crate::events::{AchievementUnlocked, LedgerEntry, TxKind};
use crate::state::config::Config;
use crate::state::player::Player;
use crate::state::receipts::AchievementRecord;
use crate::utils::achievements::{achievement_by_id, condition_met, Condition};

#[derive(Accounts)]
#[instruction(achievement_id: u16)]
pub struct UnlockAchievement<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [Player::SEED_PREFIX, owner.key().as_ref()],
        bump = player.bump,
        constraint = player.owner == owner.key() @ GoldenCobraError::NotAuthorized
    )]
    pub player: Box<Account<'info, Player>>,

    /// Unlock marker; PDA-seed uniqueness on (achievement, player) makes the
    /// unlock once-only without rechecking the condition later.
    #[account(
        init,
        payer = owner,
        space = 8 + AchievementRecord::SIZE,
        seeds = [
            AchievementRecord::SEED_PREFIX,
            &achievement_id.to_le_bytes(),
            owner.key().as_ref(),
        ],
        bump
    )]
    pub record: Box<Account<'info, AchievementRecord>>,

    pub system_program: Program<'info, System>,
}

/// Player-cranked unlock for the counter-based achievement conditions.
pub fn unlock_achievement_handler(
    ctx: Context<UnlockAchievement>,
    achievement_id: u16,
) -> Result<()> {
    let player = &mut ctx.accounts.player;

    let def = achievement_by_id(achievement_id)
        .ok_or_else(|| error!(GoldenCobraError::UnknownAchievement))?;
    require!(condition_met(def, player), GoldenCobraError::ConditionNotMet);

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    player.credit_earned(def.reward)?;
    player.touch(now);

    let record = &mut ctx.accounts.record;
    record.bump = ctx.bumps.record;
    record.achievement_id = achievement_id;
    record.owner = player.owner;
    record.reward = def.reward;
    record.unlocked_at = now;

    emit!(LedgerEntry {
        player: player.owner,
        amount: def.reward as i64,
        kind: TxKind::Earn,
        balance_after: player.earned,
        timestamp: now,
    });
    emit!(AchievementUnlocked {
        achievement_id,
        player: player.owner,
        reward: def.reward,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(achievement_id: u16)]
pub struct AwardAchievement<'info> {
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

    #[account(
        init,
        payer = authority,
        space = 8 + AchievementRecord::SIZE,
        seeds = [
            AchievementRecord::SEED_PREFIX,
            &achievement_id.to_le_bytes(),
            player.owner.as_ref(),
        ],
        bump
    )]
    pub record: Box<Account<'info, AchievementRecord>>,

    pub system_program: Program<'info, System>,
}

/// Authority-attested unlock for conditions a single account cannot prove
/// on-chain (leaderboard position). The once-only PDA guard is the same.
pub fn award_achievement_handler(
    ctx: Context<AwardAchievement>,
    achievement_id: u16,
) -> Result<()> {
    let player = &mut ctx.accounts.player;

    let def = achievement_by_id(achievement_id)
        .ok_or_else(|| error!(GoldenCobraError::UnknownAchievement))?;
    // The attested path exists only for what the crank must vouch for.
    require!(
        def.condition == Condition::LeaderboardPosition,
        GoldenCobraError::ConditionNotMet
    );

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    player.credit_earned(def.reward)?;
    player.touch(now);

    let record = &mut ctx.accounts.record;
    record.bump = ctx.bumps.record;
    record.achievement_id = achievement_id;
    record.owner = player.owner;
    record.reward = def.reward;
    record.unlocked_at = now;

    emit!(LedgerEntry {
        player: player.owner,
        amount: def.reward as i64,
        kind: TxKind::Earn,
        balance_after: player.earned,
        timestamp: now,
    });
    emit!(AchievementUnlocked {
        achievement_id,
        player: player.owner,
        reward: def.reward,
    });

    Ok(())
}
