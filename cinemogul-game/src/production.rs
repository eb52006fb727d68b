//! Production orchestration: funds check, cost deduction, scoring, rewards.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::economy;
use crate::film::{FilmDescription, FilmError, FilmRecord};
use crate::player::PlayerState;
use crate::score::{ScoreProvider, ScoreSource, SCORE_MAX, validate_score};

/// Ways a production attempt can be rejected. Every rejection happens before
/// any state mutation; once the cost is deducted the attempt always resolves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductionError {
    #[error("another production is already in progress")]
    InProgress,
    #[error(transparent)]
    Film(#[from] FilmError),
    #[error("insufficient funds: production costs ${cost} but only ${funds} is available")]
    InsufficientFunds { cost: i64, funds: i64 },
}

/// Result of one resolved production attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionOutcome {
    pub film: FilmRecord,
    pub production_cost: i64,
    pub is_profit: bool,
    pub score_source: ScoreSource,
    /// New level when this production crossed a threshold.
    pub level_up: Option<u32>,
}

/// Orchestrates film productions against a scoring collaborator.
///
/// One attempt runs at a time: submission checks affordability, deducts the
/// cost, awaits the scorer (falling back to a seeded random score on any
/// failure), applies the reward economy, and appends the sealed record to
/// the player's history.
#[derive(Debug)]
pub struct Studio<S, C = SystemClock>
where
    S: ScoreProvider,
    C: Clock,
{
    scorer: S,
    clock: C,
    rng: SmallRng,
    in_flight: bool,
    last_id: i64,
}

impl<S: ScoreProvider> Studio<S, SystemClock> {
    /// Studio with the system clock. `seed` drives fallback scoring only.
    #[must_use]
    pub fn new(scorer: S, seed: u64) -> Self {
        Self::with_clock(scorer, SystemClock, seed)
    }
}

impl<S, C> Studio<S, C>
where
    S: ScoreProvider,
    C: Clock,
{
    #[must_use]
    pub fn with_clock(scorer: S, clock: C, seed: u64) -> Self {
        Self {
            scorer,
            clock,
            rng: SmallRng::seed_from_u64(seed),
            in_flight: false,
            last_id: 0,
        }
    }

    /// Whether a submission is currently between cost deduction and
    /// resolution. Callers should disable resubmission while this is set.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Run one production attempt end to end.
    ///
    /// # Errors
    ///
    /// Rejects with [`ProductionError::InProgress`] while another attempt is
    /// outstanding, [`ProductionError::Film`] for an invalid description,
    /// or [`ProductionError::InsufficientFunds`] when the tier's cost
    /// exceeds the player's funds. None of these mutate any state.
    pub async fn submit(
        &mut self,
        film: FilmDescription,
        player: &mut PlayerState,
    ) -> Result<ProductionOutcome, ProductionError> {
        if self.in_flight {
            return Err(ProductionError::InProgress);
        }
        film.validate(player.level)?;

        let cost = film.tier.production_cost();
        if !player.can_afford(cost) {
            return Err(ProductionError::InsufficientFunds {
                cost,
                funds: player.funds,
            });
        }

        // Point of no return: the player is at risk until resolution.
        self.in_flight = true;
        player.charge(cost);

        let (score, score_source) = match self.scorer.score(&film).await {
            Ok(raw) => match validate_score(raw) {
                Some(score) => (score, ScoreSource::Scored),
                None => {
                    log::warn!("scorer returned unusable value {raw}; using fallback score");
                    (self.fallback_score(), ScoreSource::Fallback)
                }
            },
            Err(err) => {
                log::warn!("scoring unavailable ({err}); using fallback score");
                (self.fallback_score(), ScoreSource::Fallback)
            }
        };

        let reward = economy::compute_reward(score, film.tier, cost);
        let created_at = self.clock.now();
        let id = self.next_record_id(created_at);
        let record = FilmRecord::resolve(id, film, score, &reward, score_source, created_at);

        player.credit(reward.money_earned);
        player.add_xp(reward.xp_earned);
        player.record_film(record.clone());
        let level_up = player.sync_level();
        self.in_flight = false;

        if let Some(level) = level_up {
            log::info!("player reached level {level}");
        }

        Ok(ProductionOutcome {
            film: record,
            production_cost: cost,
            is_profit: reward.is_profit,
            score_source,
            level_up,
        })
    }

    /// Uniform random score in [0, 10), seeded at construction.
    fn fallback_score(&mut self) -> f64 {
        self.rng.gen_range(0.0..SCORE_MAX)
    }

    /// Millisecond timestamps, bumped past the previous id so records made
    /// within the same millisecond stay unique.
    fn next_record_id(&mut self, created_at: DateTime<Utc>) -> i64 {
        let id = created_at.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::BudgetTier;
    use crate::film::Genre;
    use crate::score::{FixedScorer, OfflineScorer};
    use chrono::TimeZone;
    use futures::executor::block_on;

    #[derive(Debug, Clone, Copy)]
    struct FrozenClock(i64);

    impl Clock for FrozenClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.timestamp_millis_opt(self.0).unwrap()
        }
    }

    fn film(tier: BudgetTier) -> FilmDescription {
        FilmDescription {
            title: "Standing Ovation".to_string(),
            synopsis: "A washed-up conductor gets one last premiere.".to_string(),
            genre: Genre::Drama,
            release_year: 2025,
            director: "A. Reyes".to_string(),
            cast: "T. Walcott, H. Ichikawa".to_string(),
            runtime_min: 112,
            tier,
        }
    }

    #[test]
    fn insufficient_funds_rejects_without_mutation() {
        let mut studio = Studio::new(FixedScorer(9.0), 1);
        let mut player = PlayerState::new();
        player.funds = 500;

        let err = block_on(studio.submit(film(BudgetTier::Low), &mut player)).unwrap_err();
        assert_eq!(
            err,
            ProductionError::InsufficientFunds {
                cost: 1_000,
                funds: 500
            }
        );
        assert_eq!(player.funds, 500);
        assert!(player.history.is_empty());
        assert_eq!(player.xp, 0);
        assert!(!studio.is_in_flight());
    }

    #[test]
    fn invalid_film_rejects_before_funds_are_touched() {
        let mut studio = Studio::new(FixedScorer(9.0), 1);
        let mut player = PlayerState::new();
        let mut description = film(BudgetTier::Low);
        description.genre = Genre::Western;

        let err = block_on(studio.submit(description, &mut player)).unwrap_err();
        assert!(matches!(err, ProductionError::Film(_)));
        assert_eq!(player.funds, crate::player::STARTING_FUNDS);
    }

    #[test]
    fn successful_production_updates_funds_xp_and_history() {
        let mut studio = Studio::with_clock(FixedScorer(10.0), FrozenClock(1_700_000_000_000), 1);
        let mut player = PlayerState::new();

        let outcome = block_on(studio.submit(film(BudgetTier::Low), &mut player)).unwrap();
        assert_eq!(outcome.score_source, ScoreSource::Scored);
        assert!(outcome.is_profit);
        assert_eq!(outcome.film.money_earned, 2_500);
        // 10_000 - 1_000 cost + 2_500 payout.
        assert_eq!(player.funds, 11_500);
        assert_eq!(player.xp, 400);
        assert_eq!(player.history.len(), 1);
        assert_eq!(player.latest_film().unwrap().id, outcome.film.id);
    }

    #[test]
    fn scorer_failure_falls_back_and_still_resolves() {
        let mut studio = Studio::with_clock(OfflineScorer, FrozenClock(1_700_000_000_000), 42);
        let mut player = PlayerState::new();

        let outcome = block_on(studio.submit(film(BudgetTier::Medium), &mut player)).unwrap();
        assert_eq!(outcome.score_source, ScoreSource::Fallback);
        assert!(outcome.film.quality_score >= 0.0 && outcome.film.quality_score < 10.0);
        assert_eq!(player.history.len(), 1);
        // Cost was deducted even though the scorer was down.
        assert_eq!(
            player.funds,
            crate::player::STARTING_FUNDS - 5_000 + outcome.film.money_earned
        );
    }

    #[test]
    fn fallback_scores_are_deterministic_under_a_seed() {
        let run = |seed: u64| {
            let mut studio = Studio::with_clock(OfflineScorer, FrozenClock(0), seed);
            let mut player = PlayerState::new();
            let outcome = block_on(studio.submit(film(BudgetTier::Low), &mut player)).unwrap();
            outcome.film.quality_score
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn out_of_range_scorer_value_is_treated_as_failure() {
        let mut studio = Studio::with_clock(FixedScorer(42.0), FrozenClock(0), 5);
        let mut player = PlayerState::new();

        let outcome = block_on(studio.submit(film(BudgetTier::Low), &mut player)).unwrap();
        assert_eq!(outcome.score_source, ScoreSource::Fallback);
        assert!(outcome.film.quality_score < 10.0);
    }

    #[test]
    fn level_up_fires_when_threshold_is_crossed() {
        // Blockbuster on Low earns exactly 400 XP, crossing 100 and 300.
        let mut studio = Studio::with_clock(FixedScorer(9.5), FrozenClock(0), 1);
        let mut player = PlayerState::new();

        let outcome = block_on(studio.submit(film(BudgetTier::Low), &mut player)).unwrap();
        assert_eq!(outcome.level_up, Some(3));
        assert_eq!(player.level, 3);

        // A flop afterwards earns 30 XP and crosses nothing.
        let mut flop = film(BudgetTier::Low);
        flop.title = "Straight to Streaming".to_string();
        let outcome = block_on(studio.submit(flop, &mut player)).unwrap();
        assert_eq!(outcome.level_up, None);
    }

    #[test]
    fn record_ids_are_unique_within_a_millisecond() {
        let mut studio = Studio::with_clock(FixedScorer(7.0), FrozenClock(1_000), 1);
        let mut player = PlayerState::new();

        let first = block_on(studio.submit(film(BudgetTier::Low), &mut player)).unwrap();
        let second = block_on(studio.submit(film(BudgetTier::Low), &mut player)).unwrap();
        assert_ne!(first.film.id, second.film.id);
        assert!(second.film.id > first.film.id);
    }
}
