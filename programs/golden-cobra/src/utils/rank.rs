/// One tier of the rank ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankTier {
    /// Lifetime spend required to hold this tier.
    pub threshold: u64,
    pub name: &'static str,
    pub emblem: &'static str,
    /// Reward multiplier in percent (100 = 1.0x).
    pub multiplier_pct: u16,
}

/// Rank ladder, sorted by threshold strictly descending. The first entry
/// whose threshold is <= lifetime spend is the player's current rank, so the
/// scan always lands on the highest qualifying tier.
pub const RANKS: [RankTier; 13] = [
    RankTier { threshold: 100_000_000, name: "Eternal Cobra Overlord", emblem: "🔥", multiplier_pct: 300 },
    RankTier { threshold: 50_000_000, name: "Apocalyptic Viper Queen", emblem: "💎", multiplier_pct: 275 },
    RankTier { threshold: 10_000_000, name: "Cosmic Cobra Deity", emblem: "👑", multiplier_pct: 250 },
    RankTier { threshold: 5_000_000, name: "Mythical Viper Titan", emblem: "🌟", multiplier_pct: 225 },
    RankTier { threshold: 1_000_000, name: "Ultimate Cobra God", emblem: "⚡", multiplier_pct: 200 },
    RankTier { threshold: 500_000, name: "Legendary Viper Overlord", emblem: "🔥", multiplier_pct: 185 },
    RankTier { threshold: 100_000, name: "Golden Cobra Emperor", emblem: "💫", multiplier_pct: 170 },
    RankTier { threshold: 50_000, name: "Diamond Viper", emblem: "💎", multiplier_pct: 155 },
    RankTier { threshold: 10_000, name: "Platinum Snake", emblem: "🏆", multiplier_pct: 140 },
    RankTier { threshold: 5_000, name: "Gold Adder", emblem: "🪙", multiplier_pct: 130 },
    RankTier { threshold: 1_000, name: "Silver Serpent", emblem: "🥈", multiplier_pct: 120 },
    RankTier { threshold: 100, name: "Bronze Worm", emblem: "🪱", multiplier_pct: 110 },
    RankTier { threshold: 0, name: "Newbie Maggot", emblem: "🐛", multiplier_pct: 100 },
];

/// Current rank for a lifetime spend. Total: the last entry has threshold 0.
pub fn rank_for(spent: u64) -> &'static RankTier {
    RANKS
        .iter()
        .find(|t| t.threshold <= spent)
        .unwrap_or(&RANKS[RANKS.len() - 1])
}

/// Next higher tier and the stars still needed to reach it.
/// None when already at the top.
pub fn next_rank(spent: u64) -> Option<(&'static RankTier, u64)> {
    let current = rank_for(spent);
    RANKS
        .iter()
        .rev()
        .find(|t| t.threshold > current.threshold)
        .map(|t| (t, t.threshold.saturating_sub(spent)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_strictly_descending() {
        for pair in RANKS.windows(2) {
            assert!(pair[0].threshold > pair[1].threshold);
        }
        assert_eq!(RANKS[RANKS.len() - 1].threshold, 0);
    }

    #[test]
    fn zero_spend_is_bottom_tier() {
        assert_eq!(rank_for(0).name, "Newbie Maggot");
    }

    #[test]
    fn exact_threshold_qualifies() {
        assert_eq!(rank_for(100).name, "Bronze Worm");
        assert_eq!(rank_for(99).name, "Newbie Maggot");
        assert_eq!(rank_for(100_000_000).name, "Eternal Cobra Overlord");
    }

    #[test]
    fn rank_is_monotonic_in_spend() {
        let probes = [0u64, 1, 99, 100, 999, 1_000, 4_999, 5_000, 50_000,
            99_999, 100_000, 1_000_000, 49_999_999, 100_000_000, u64::MAX];
        for w in probes.windows(2) {
            assert!(rank_for(w[0]).threshold <= rank_for(w[1]).threshold);
        }
    }

    #[test]
    fn next_rank_reports_gap() {
        let (next, needed) = next_rank(40).unwrap();
        assert_eq!(next.name, "Bronze Worm");
        assert_eq!(needed, 60);

        let (next, needed) = next_rank(100).unwrap();
        assert_eq!(next.name, "Silver Serpent");
        assert_eq!(needed, 900);
    }

    #[test]
    fn top_tier_has_no_next() {
        assert!(next_rank(100_000_000).is_none());
        assert!(next_rank(u64::MAX).is_none());
    }

    #[test]
    fn multipliers_never_decrease_up_the_ladder() {
        for pair in RANKS.windows(2) {
            assert!(pair[0].multiplier_pct >= pair[1].multiplier_pct);
        }
    }
}
