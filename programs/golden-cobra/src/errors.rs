use anchor_lang::prelude::*;

#[error_code]
pub enum GoldenCobraError {
    // ─────────────────────────────
    // General / Access Control
    // ─────────────────────────────
    #[msg("Not authorized")]
    NotAuthorized,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Already processed")]
    AlreadyProcessed,

    // ─────────────────────────────
    // Amount validation
    // ─────────────────────────────
    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Insufficient funds")]
    InsufficientFunds,

    // ─────────────────────────────
    // Pause flags
    // ─────────────────────────────
    #[msg("Spending paused")]
    SpendingPaused,

    #[msg("Withdrawals paused")]
    WithdrawalsPaused,

    // ─────────────────────────────
    // Daily claim
    // ─────────────────────────────
    #[msg("Daily reward already claimed")]
    DailyCooldown,

    // ─────────────────────────────
    // Challenges
    // ─────────────────────────────
    #[msg("Cannot challenge yourself")]
    SelfChallenge,

    SelfReferral,

    ChallengeNotExpired,
    CounterMismatch,

    // ─────────────────────────────
    // Withdrawals
    // ─────────────────────────────
    #[msg("Verification required")]
    VerificationRequired,

    #[msg("Player is banned")]
    BannedPlayer,

    #[msg("Invalid wallet reference")]
    InvalidWallet,

    InvalidNote,
    InvalidFeeConfig,
    InvalidWithdrawalBounds,

    // ─────────────────────────────
    // Shop
    // ─────────────────────────────
    #[msg("Out of stock")]
    OutOfStock,

    ItemInactive,
    InvalidPrice,

    // ─────────────────────────────
    // Raffle
    // ─────────────────────────────
    #[msg("Raffle not armed")]
    RaffleNotArmed,

    IneligibleCandidate,
    DuplicateCandidate,

    // ─────────────────────────────
    // Achievements
    // ─────────────────────────────
    UnknownAchievement,

    #[msg("Condition not met")]
    ConditionNotMet,
}
