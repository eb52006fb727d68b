//! CineMogul Game Engine
//!
//! Platform-agnostic core logic for the CineMogul movie-studio tycoon game.
//! This crate provides the reward economy, progression model, and production
//! orchestration without UI or platform-specific dependencies.

pub mod clock;
pub mod economy;
pub mod film;
pub mod player;
pub mod production;
pub mod progression;
pub mod reference;
pub mod score;
pub mod stats;

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use economy::{BudgetTier, QualityBucket, Reward, compute_reward};
pub use film::{FilmDescription, FilmError, FilmRecord, Genre};
pub use player::{PlayerState, STARTING_FUNDS};
pub use production::{ProductionError, ProductionOutcome, Studio};
pub use progression::{
    MAX_LEVEL, all_genres_with_levels, genre_unlock_level, genre_unlocked, level_for_xp,
    next_level_xp, unlocked_genres, xp_threshold,
};
pub use reference::{Person, fallback_actors, fallback_directors, sort_by_popularity};
pub use score::{
    FixedScorer, OfflineScorer, SCORE_MAX, SCORE_MIN, ScoreProvider, ScoreRequest, ScoreResponse,
    ScoreSource, ScoringUnavailable, validate_score,
};
pub use stats::{
    FrequencyEntry, PopularityEntry, RATING_LABELS, StoredMovie, TOP_N, parse_list_field,
    ratings_histogram, runtime_distribution, top_countries, top_genres, top_languages,
    views_vs_likes,
};
