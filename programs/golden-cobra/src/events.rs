use anchor_lang::prelude::*;

/// Kind tag carried by every [`LedgerEntry`].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TxKind {
    Deposit,
    Withdrawal,
    Spend,
    Earn,
    Daily,
    Referral,
    Challenge,
    Purchase,
    AdminAdjustment,
    Raffle,
}

/// Audit record for a single balance mutation. The event stream is the
/// transaction log; balances are never reconstructed from it.
#[event]
pub struct LedgerEntry {
    pub player: Pubkey,
    /// Signed delta: negative for debits.
    pub amount: i64,
    pub kind: TxKind,
    /// Spendable-stars balance after the mutation (external balance for
    /// Deposit/Withdrawal entries).
    pub balance_after: u64,
    pub timestamp: i64,
}

#[event]
pub struct PlayerRegistered {
    pub player: Pubkey,
    pub referred_by: Option<Pubkey>,
}

#[event]
pub struct DailyClaimed {
    pub player: Pubkey,
    pub reward: u64,
    pub streak: u32,
}

#[event]
pub struct RankChanged {
    pub player: Pubkey,
    pub old_threshold: u64,
    pub new_threshold: u64,
    pub lifetime_spent: u64,
}

#[event]
pub struct ChallengeCreated {
    pub challenge_id: u64,
    pub challenger: Pubkey,
    pub challenged: Pubkey,
    pub stake: u64,
    pub expires_at: i64,
}

#[event]
pub struct ChallengeResolved {
    pub challenge_id: u64,
    pub winner: Pubkey,
    pub loser: Pubkey,
    pub stake: u64,
}

#[event]
pub struct ChallengeDeclined {
    pub challenge_id: u64,
    /// 1 = declined by the challenged party, 2 = a side could no longer
    /// cover the stake at resolution time.
    pub reason: u8,
}

#[event]
pub struct ChallengeExpired {
    pub challenge_id: u64,
}

#[event]
pub struct RaffleArmed {
    pub goal: u64,
    pub fund_total: u64,
}

#[event]
pub struct RaffleCompleted {
    pub goal: u64,
    pub winner_count: u32,
    pub prize_per_winner: u64,
    pub next_goal: u64,
}

#[event]
pub struct DepositSettled {
    pub player: Pubkey,
    pub provider_ref: [u8; 32],
    pub external_amount: u64,
    pub stars_credited: u64,
}

#[event]
pub struct WithdrawalRequested {
    pub request_id: u64,
    pub player: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub net: u64,
}

#[event]
pub struct WithdrawalSettled {
    pub request_id: u64,
    pub player: Pubkey,
    pub approved: bool,
}

#[event]
pub struct WithdrawalCancelled {
    pub request_id: u64,
    pub player: Pubkey,
    pub refunded: u64,
}

#[event]
pub struct ItemPurchased {
    pub item_id: u64,
    pub player: Pubkey,
    pub price_paid: u64,
    /// 0 = stars, 1 = XTR.
    pub currency: u8,
}

#[event]
pub struct AchievementUnlocked {
    pub achievement_id: u16,
    pub player: Pubkey,
    pub reward: u64,
}
