//! Reward economy: budget tiers, quality buckets, and payout math.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const BLOCKBUSTER_XP: u32 = 400;
const SUCCESS_XP: u32 = 200;
const AVERAGE_XP: u32 = 100;
const FLOP_XP: u32 = 30;

/// Each tier above Low adds 20% bonus XP for the same quality bucket.
const TIER_XP_BONUS_STEP: f64 = 0.2;

/// Discrete production budget levels. Cost and risk/reward multipliers are
/// fixed per tier; there is no invalid tier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    #[default]
    Low,
    Medium,
    High,
}

impl BudgetTier {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// One-based tier index used by the XP bonus and the scoring wire format.
    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Up-front cost deducted when a production starts.
    #[must_use]
    pub const fn production_cost(self) -> i64 {
        match self {
            Self::Low => 1_000,
            Self::Medium => 5_000,
            Self::High => 15_000,
        }
    }

    /// Maximum payout as a multiple of the production cost. Small budgets
    /// carry the largest potential return.
    #[must_use]
    pub const fn roi_multiplier(self) -> f64 {
        match self {
            Self::Low => 2.5,
            Self::Medium => 2.0,
            Self::High => 1.8,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetTier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(()),
        }
    }
}

/// Critical-reception band a quality score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityBucket {
    Flop,
    Average,
    Success,
    Blockbuster,
}

impl QualityBucket {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            Self::Blockbuster
        } else if score >= 8.0 {
            Self::Success
        } else if score >= 6.0 {
            Self::Average
        } else {
            Self::Flop
        }
    }

    #[must_use]
    pub const fn base_xp(self) -> u32 {
        match self {
            Self::Blockbuster => BLOCKBUSTER_XP,
            Self::Success => SUCCESS_XP,
            Self::Average => AVERAGE_XP,
            Self::Flop => FLOP_XP,
        }
    }
}

/// Outcome of the reward computation for one production.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub money_earned: i64,
    pub xp_earned: u32,
    pub is_profit: bool,
}

/// Convert a quality score and budget tier into money and XP.
///
/// The success factor scales the tier's maximum potential return linearly
/// with the score and is clamped to [0, 1], so out-of-range scores can never
/// over-reward and money earned is never negative.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn compute_reward(score: f64, tier: BudgetTier, production_cost: i64) -> Reward {
    let base_xp = QualityBucket::from_score(score).base_xp();
    let bonus = 1.0 + f64::from(tier.index() - 1) * TIER_XP_BONUS_STEP;
    let xp_earned = (f64::from(base_xp) * bonus).floor() as u32;

    let success_factor = (score / 10.0).clamp(0.0, 1.0);
    let potential_return = production_cost as f64 * tier.roi_multiplier();
    let money_earned = (potential_return * success_factor).floor() as i64;

    Reward {
        money_earned,
        xp_earned,
        is_profit: money_earned > production_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_score_on_low_budget_pays_full_return() {
        let reward = compute_reward(10.0, BudgetTier::Low, BudgetTier::Low.production_cost());
        assert_eq!(reward.money_earned, 2_500);
        assert!(reward.is_profit);
    }

    #[test]
    fn zero_score_on_high_budget_pays_nothing() {
        let reward = compute_reward(0.0, BudgetTier::High, BudgetTier::High.production_cost());
        assert_eq!(reward.money_earned, 0);
        assert!(!reward.is_profit);
    }

    #[test]
    fn average_score_on_medium_budget() {
        // Score 7 lands in the average bucket (base 100 XP); medium budget
        // adds 20% XP and returns 5000 * 2.0 * 0.7.
        let reward = compute_reward(7.0, BudgetTier::Medium, BudgetTier::Medium.production_cost());
        assert_eq!(reward.xp_earned, 120);
        assert_eq!(reward.money_earned, 7_000);
        assert!(reward.is_profit);
    }

    #[test]
    fn quality_bucket_boundaries_are_inclusive() {
        assert_eq!(QualityBucket::from_score(5.99), QualityBucket::Flop);
        assert_eq!(QualityBucket::from_score(6.0), QualityBucket::Average);
        assert_eq!(QualityBucket::from_score(7.99), QualityBucket::Average);
        assert_eq!(QualityBucket::from_score(8.0), QualityBucket::Success);
        assert_eq!(QualityBucket::from_score(9.0), QualityBucket::Blockbuster);
        assert_eq!(QualityBucket::from_score(10.0), QualityBucket::Blockbuster);
    }

    #[test]
    fn tier_bonus_scales_bucket_xp() {
        assert_eq!(compute_reward(9.5, BudgetTier::Low, 1_000).xp_earned, 400);
        assert_eq!(compute_reward(9.5, BudgetTier::Medium, 5_000).xp_earned, 480);
        assert_eq!(compute_reward(9.5, BudgetTier::High, 15_000).xp_earned, 560);
        assert_eq!(compute_reward(1.0, BudgetTier::High, 15_000).xp_earned, 42);
    }

    #[test]
    fn success_factor_is_capped_at_one() {
        let capped = compute_reward(12.0, BudgetTier::Low, 1_000);
        let exact = compute_reward(10.0, BudgetTier::Low, 1_000);
        assert_eq!(capped.money_earned, exact.money_earned);
    }

    #[test]
    fn money_earned_is_never_negative() {
        for tier in BudgetTier::ALL {
            for tenth in 0..=100 {
                let score = f64::from(tenth) / 10.0;
                let reward = compute_reward(score, tier, tier.production_cost());
                assert!(reward.money_earned >= 0);
            }
        }
    }

    #[test]
    fn profit_flag_matches_payout_comparison() {
        for tier in BudgetTier::ALL {
            let cost = tier.production_cost();
            for tenth in 0..=100 {
                let score = f64::from(tenth) / 10.0;
                let reward = compute_reward(score, tier, cost);
                assert_eq!(reward.is_profit, reward.money_earned > cost);
            }
        }
    }

    #[test]
    fn tier_round_trips_through_strings() {
        for tier in BudgetTier::ALL {
            assert_eq!(tier.as_str().parse::<BudgetTier>(), Ok(tier));
        }
        assert!("colossal".parse::<BudgetTier>().is_err());
    }
}
