/// Default stars credited per 1 XTR deposited.
pub const DEFAULT_STARS_PER_XTR: u64 = 1_000;

// ─────────────────────────────
// Daily rewards
// ─────────────────────────────

/// Base stars for a daily claim.
pub const DEFAULT_DAILY_BASE_REWARD: u64 = 100;

/// Extra stars per consecutive day already on the streak.
pub const DEFAULT_DAILY_STREAK_STEP: u64 = 10;

/// Cap on the streak bonus, base excluded.
pub const DEFAULT_DAILY_STREAK_BONUS_CAP: u64 = 500;

/// A claim inside this window is rejected.
pub const DEFAULT_DAILY_COOLDOWN_SECS: i64 = 20 * 60 * 60;

/// A claim later than this after the previous one resets the streak to 1.
pub const DEFAULT_STREAK_BREAK_SECS: i64 = 48 * 60 * 60;

/// Stars credited to both sides of a referral.
pub const REFERRAL_BONUS: u64 = 100;

// ─────────────────────────────
// Challenges
// ─────────────────────────────

/// Pending challenges expire after 24 hours.
pub const DEFAULT_CHALLENGE_TTL_SECS: i64 = 24 * 60 * 60;

// ─────────────────────────────
// Global fund / raffle
// ─────────────────────────────

pub const DEFAULT_FUND_GOAL: u64 = 10_000;
pub const DEFAULT_FUND_NEXT_GOAL: u64 = 50_000;

/// Players idle longer than this are not raffle-eligible.
pub const RAFFLE_ACTIVE_WINDOW_SECS: i64 = 30 * 24 * 60 * 60;

/// One winner per this many eligible players.
pub const RAFFLE_WINNER_DIVISOR: usize = 10;

pub const RAFFLE_MIN_WINNERS: usize = 1;
pub const RAFFLE_MAX_WINNERS: usize = 10;

// ─────────────────────────────
// Withdrawals
// ─────────────────────────────

pub const DEFAULT_MIN_WITHDRAWAL: u64 = 10;
pub const DEFAULT_MAX_WITHDRAWAL: u64 = 10_000;

/// Percentage of the requested amount retained as a fee.
pub const DEFAULT_WITHDRAWAL_FEE_PERCENT: u64 = 5;

/// Unverified players cannot withdraw more than this per request.
pub const DEFAULT_UNVERIFIED_WITHDRAWAL_CAP: u64 = 1_000;

/// Max byte length of an external wallet reference.
pub const MAX_WALLET_REF_LEN: usize = 64;

/// Max byte length of an admin settlement note.
pub const MAX_ADMIN_NOTE_LEN: usize = 64;

/// Sentinel stock value for items with unlimited supply.
pub const UNLIMITED_STOCK: i64 = -1;
