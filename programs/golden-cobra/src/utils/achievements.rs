use crate::state::player::Player;

/// Counter a definition checks against. `LeaderboardPosition` cannot be
/// evaluated from a single account on-chain and is only unlockable through
/// the authority-attested award path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    SpentTotal,
    EarnedTotal,
    DailyStreak,
    Referrals,
    ChallengeWins,
    ItemsOwned,
    LeaderboardPosition,
}

#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: u16,
    pub name: &'static str,
    pub condition: Condition,
    pub threshold: u64,
    /// Stars credited on unlock.
    pub reward: u64,
}

/// Static achievement table. Ids are stable; new entries append.
pub const ACHIEVEMENTS: [AchievementDef; 8] = [
    AchievementDef { id: 1, name: "First Blood", condition: Condition::SpentTotal, threshold: 1, reward: 100 },
    AchievementDef { id: 2, name: "Star Spender", condition: Condition::SpentTotal, threshold: 1_000, reward: 500 },
    AchievementDef { id: 3, name: "Cobra Dominator", condition: Condition::LeaderboardPosition, threshold: 10, reward: 1_000 },
    AchievementDef { id: 4, name: "Challenge Master", condition: Condition::ChallengeWins, threshold: 10, reward: 1_500 },
    AchievementDef { id: 5, name: "Referral King", condition: Condition::Referrals, threshold: 10, reward: 2_000 },
    AchievementDef { id: 6, name: "Daily Warrior", condition: Condition::DailyStreak, threshold: 30, reward: 3_000 },
    AchievementDef { id: 7, name: "NFT Collector", condition: Condition::ItemsOwned, threshold: 5, reward: 2_500 },
    AchievementDef { id: 8, name: "Millionaire", condition: Condition::EarnedTotal, threshold: 1_000_000, reward: 10_000 },
];

pub fn achievement_by_id(id: u16) -> Option<&'static AchievementDef> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Whether the player's own counters satisfy the definition. Always false
/// for `LeaderboardPosition`, which needs attestation.
pub fn condition_met(def: &AchievementDef, player: &Player) -> bool {
    match def.condition {
        Condition::SpentTotal => player.spent >= def.threshold,
        Condition::EarnedTotal => player.total_earned >= def.threshold,
        Condition::DailyStreak => u64::from(player.daily_streak) >= def.threshold,
        Condition::Referrals => u64::from(player.referrals) >= def.threshold,
        Condition::ChallengeWins => u64::from(player.challenges_won) >= def.threshold,
        Condition::ItemsOwned => u64::from(player.items_owned) >= def.threshold,
        Condition::LeaderboardPosition => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    fn player() -> Player {
        Player {
            owner: Pubkey::default(),
            bump: 0,
            earned: 0,
            spent: 0,
            total_earned: 0,
            external_balance: 0,
            total_deposited: 0,
            total_withdrawn: 0,
            daily_streak: 0,
            last_daily_claim: 0,
            referrals: 0,
            referred_by: Pubkey::default(),
            is_verified: 0,
            is_banned: 0,
            last_active: 0,
            challenges_won: 0,
            challenges_lost: 0,
            items_owned: 0,
            created_at: 0,
            _reserved: [0; 16],
        }
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in ACHIEVEMENTS.iter().enumerate() {
            for b in &ACHIEVEMENTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(achievement_by_id(6).unwrap().name, "Daily Warrior");
        assert!(achievement_by_id(999).is_none());
    }

    #[test]
    fn spend_threshold() {
        let def = achievement_by_id(1).unwrap();
        let mut p = player();
        assert!(!condition_met(def, &p));
        p.spent = 1;
        assert!(condition_met(def, &p));
    }

    #[test]
    fn table_matches_seed_rows() {
        let spender = achievement_by_id(2).unwrap();
        assert_eq!(spender.name, "Star Spender");
        assert_eq!((spender.threshold, spender.reward), (1_000, 500));

        let millionaire = achievement_by_id(8).unwrap();
        assert_eq!(millionaire.condition, Condition::EarnedTotal);
        assert_eq!((millionaire.threshold, millionaire.reward), (1_000_000, 10_000));

        let collector = achievement_by_id(7).unwrap();
        assert_eq!((collector.threshold, collector.reward), (5, 2_500));
    }

    #[test]
    fn streak_and_wins() {
        let mut p = player();
        p.daily_streak = 30;
        p.challenges_won = 9;
        assert!(condition_met(achievement_by_id(6).unwrap(), &p));
        assert!(!condition_met(achievement_by_id(4).unwrap(), &p));
    }

    #[test]
    fn leaderboard_condition_never_self_unlocks() {
        let mut p = player();
        p.spent = u64::MAX;
        p.total_earned = u64::MAX;
        assert!(!condition_met(achievement_by_id(3).unwrap(), &p));
    }
}
