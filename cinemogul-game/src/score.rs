//! Scoring collaborator seam: wire types, validation, and provider trait.
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use thiserror::Error;

use crate::film::FilmDescription;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 10.0;

/// Request body understood by the external scoring service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRequest<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub genre: &'a str,
    pub annee: i32,
    pub acteur: &'a str,
    pub director: &'a str,
    pub duree: u32,
    pub budget: u32,
}

impl<'a> From<&'a FilmDescription> for ScoreRequest<'a> {
    fn from(film: &'a FilmDescription) -> Self {
        Self {
            name: &film.title,
            description: &film.synopsis,
            genre: film.genre.as_str(),
            annee: film.release_year,
            acteur: &film.cast,
            director: &film.director,
            duree: film.runtime_min,
            budget: film.tier.index(),
        }
    }
}

/// Response from the scoring service. A missing or invalid total is treated
/// as a scoring failure by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct ScoreResponse {
    #[serde(default)]
    pub note_totale: Option<f64>,
}

impl ScoreResponse {
    /// The score, if present and within range.
    #[must_use]
    pub fn validated(&self) -> Option<f64> {
        self.note_totale.and_then(validate_score)
    }
}

/// Accept only finite scores within [0, 10].
#[must_use]
pub fn validate_score(value: f64) -> Option<f64> {
    (value.is_finite() && (SCORE_MIN..=SCORE_MAX).contains(&value)).then_some(value)
}

/// Where a resolved quality score came from. Fallback results stay
/// distinguishable in history and telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Scored,
    Fallback,
}

impl ScoreSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scored => "scored",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Abstraction over the external scoring service.
/// Platform-specific implementations should provide this.
pub trait ScoreProvider {
    type Error: std::error::Error + 'static;

    /// Score a film description, returning a value expected in [0, 10].
    ///
    /// # Errors
    ///
    /// Returns an error when the service is unreachable or its response is
    /// unusable; the caller falls back to a synthetic score.
    fn score(
        &mut self,
        film: &FilmDescription,
    ) -> impl Future<Output = Result<f64, Self::Error>>;
}

/// Deterministic provider returning the same score for every film.
#[derive(Debug, Clone, Copy)]
pub struct FixedScorer(pub f64);

impl ScoreProvider for FixedScorer {
    type Error = Infallible;

    async fn score(&mut self, _film: &FilmDescription) -> Result<f64, Self::Error> {
        Ok(self.0)
    }
}

/// Raised by [`OfflineScorer`] for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("scoring service unavailable")]
pub struct ScoringUnavailable;

/// Provider that always fails, forcing the random-fallback path.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineScorer;

impl ScoreProvider for OfflineScorer {
    type Error = ScoringUnavailable;

    async fn score(&mut self, _film: &FilmDescription) -> Result<f64, Self::Error> {
        Err(ScoringUnavailable)
    }
}
