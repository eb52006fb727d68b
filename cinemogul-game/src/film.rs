//! Film descriptions, genres, and the immutable production record.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::economy::{BudgetTier, Reward};
use crate::progression;
use crate::score::ScoreSource;

pub const MIN_SYNOPSIS_LEN: usize = 10;
pub const MIN_RELEASE_YEAR: i32 = 1900;
pub const MAX_RELEASE_YEAR: i32 = 2030;
pub const MIN_RUNTIME_MIN: u32 = 30;
pub const MAX_RUNTIME_MIN: u32 = 300;

/// Film genres, unlocked progressively by player level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Adventure,
    Crime,
    Animation,
    Romance,
    Thriller,
    Horror,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Documentary,
    Fantasy,
    Western,
}

impl Genre {
    pub const ALL: [Self; 13] = [
        Self::Action,
        Self::Comedy,
        Self::Drama,
        Self::Adventure,
        Self::Crime,
        Self::Animation,
        Self::Romance,
        Self::Thriller,
        Self::Horror,
        Self::SciFi,
        Self::Documentary,
        Self::Fantasy,
        Self::Western,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Adventure => "Adventure",
            Self::Crime => "Crime",
            Self::Animation => "Animation",
            Self::Romance => "Romance",
            Self::Thriller => "Thriller",
            Self::Horror => "Horror",
            Self::SciFi => "Sci-Fi",
            Self::Documentary => "Documentary",
            Self::Fantasy => "Fantasy",
            Self::Western => "Western",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or(())
    }
}

/// Validation failures for a submitted film description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilmError {
    #[error("a title is required")]
    TitleRequired,
    #[error("the synopsis must be at least {min} characters")]
    SynopsisTooShort { min: usize },
    #[error("release year {0} is outside {MIN_RELEASE_YEAR}-{MAX_RELEASE_YEAR}")]
    YearOutOfRange(i32),
    #[error("a director is required")]
    DirectorRequired,
    #[error("at least one cast member is required")]
    CastRequired,
    #[error("runtime {0} min is outside {MIN_RUNTIME_MIN}-{MAX_RUNTIME_MIN}")]
    RuntimeOutOfRange(u32),
    #[error("{genre} is locked until level {unlock_level}")]
    GenreLocked { genre: Genre, unlock_level: u32 },
}

/// A film as submitted for production, before scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmDescription {
    pub title: String,
    pub synopsis: String,
    pub genre: Genre,
    pub release_year: i32,
    pub director: String,
    /// One or more cast names, free text.
    pub cast: String,
    pub runtime_min: u32,
    pub tier: BudgetTier,
}

impl FilmDescription {
    /// Check the description against the form constraints and the genres
    /// unlocked at `level`.
    ///
    /// # Errors
    ///
    /// Returns the first failing constraint.
    pub fn validate(&self, level: u32) -> Result<(), FilmError> {
        if self.title.trim().is_empty() {
            return Err(FilmError::TitleRequired);
        }
        if self.synopsis.chars().count() < MIN_SYNOPSIS_LEN {
            return Err(FilmError::SynopsisTooShort {
                min: MIN_SYNOPSIS_LEN,
            });
        }
        if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&self.release_year) {
            return Err(FilmError::YearOutOfRange(self.release_year));
        }
        if self.director.trim().is_empty() {
            return Err(FilmError::DirectorRequired);
        }
        if self.cast.trim().is_empty() {
            return Err(FilmError::CastRequired);
        }
        if !(MIN_RUNTIME_MIN..=MAX_RUNTIME_MIN).contains(&self.runtime_min) {
            return Err(FilmError::RuntimeOutOfRange(self.runtime_min));
        }
        if !progression::genre_unlocked(self.genre, level) {
            return Err(FilmError::GenreLocked {
                genre: self.genre,
                unlock_level: progression::genre_unlock_level(self.genre),
            });
        }
        Ok(())
    }
}

/// One completed production attempt. Constructed only once scoring has
/// resolved (real or fallback) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmRecord {
    /// Creation-time id, unique within a session.
    pub id: i64,
    pub title: String,
    pub synopsis: String,
    pub genre: Genre,
    pub release_year: i32,
    pub director: String,
    pub cast: String,
    pub runtime_min: u32,
    pub tier: BudgetTier,
    /// Quality score in [0, 10].
    pub quality_score: f64,
    /// Payout, which may be below the production cost.
    pub money_earned: i64,
    pub xp_earned: u32,
    pub score_source: ScoreSource,
    pub created_at: DateTime<Utc>,
}

impl FilmRecord {
    /// Seal a resolved production into its permanent record.
    #[must_use]
    pub fn resolve(
        id: i64,
        description: FilmDescription,
        quality_score: f64,
        reward: &Reward,
        score_source: ScoreSource,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: description.title,
            synopsis: description.synopsis,
            genre: description.genre,
            release_year: description.release_year,
            director: description.director,
            cast: description.cast,
            runtime_min: description.runtime_min,
            tier: description.tier,
            quality_score,
            money_earned: reward.money_earned,
            xp_earned: reward.xp_earned,
            score_source,
            created_at,
        }
    }
}
