use anchor_lang::prelude::*;

/// Lifecycle of a two-party wager. Declined, Expired, and Completed are
/// terminal; a terminal challenge is never mutated again.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChallengeStatus {
    Pending,
    Accepted,
    Declined,
    Expired,
    Completed,
}

/// A proposed coin-flip wager between two players. The stake is not escrowed
/// at creation; both balances are re-checked at resolution time and the
/// transfer happens inside the resolving instruction.
#[account]
pub struct Challenge {
    /// Sequential id, also the PDA seed.
    pub id: u64,

    /// PDA bump.
    pub bump: u8,

    pub challenger: Pubkey,
    pub challenged: Pubkey,

    /// Stars at stake, > 0.
    pub stake: u64,

    pub status: ChallengeStatus,

    /// Set only when `status == Completed`.
    pub winner: Pubkey,

    pub created_at: i64,
    pub expires_at: i64,
}

impl Challenge {
    pub const SEED_PREFIX: &'static [u8] = b"challenge";

    pub const SIZE: usize =
        8 +  // id
            1 +  // bump
            32 + // challenger
            32 + // challenged
            8 +  // stake
            1 +  // status
            32 + // winner
            8 +  // created_at
            8;   // expires_at

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            ChallengeStatus::Declined | ChallengeStatus::Expired | ChallengeStatus::Completed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    #[test]
    fn challenge_size_matches_serialization() {
        let c = Challenge {
            id: 0,
            bump: 0,
            challenger: Pubkey::default(),
            challenged: Pubkey::default(),
            stake: 0,
            status: ChallengeStatus::Pending,
            winner: Pubkey::default(),
            created_at: 0,
            expires_at: 0,
        };
        let bytes = c.try_to_vec().unwrap();
        assert_eq!(bytes.len(), Challenge::SIZE);
    }

    #[test]
    fn terminal_states() {
        let mut c = Challenge {
            id: 0,
            bump: 0,
            challenger: Pubkey::default(),
            challenged: Pubkey::default(),
            stake: 0,
            status: ChallengeStatus::Pending,
            winner: Pubkey::default(),
            created_at: 0,
            expires_at: 0,
        };
        assert!(!c.is_terminal());
        c.status = ChallengeStatus::Accepted;
        assert!(!c.is_terminal());
        for s in [
            ChallengeStatus::Declined,
            ChallengeStatus::Expired,
            ChallengeStatus::Completed,
        ] {
            c.status = s;
            assert!(c.is_terminal());
        }
    }
}
