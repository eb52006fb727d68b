//! HTTP clients for the game's external collaborators.
//!
//! Scoring and reference-data failures are recovered by the callers (random
//! fallback score, static name lists); only the statistics loader surfaces
//! its error to the UI.
use futures::future::{Either, select};
use futures::pin_mut;
use gloo::timers::future::TimeoutFuture;
use gloo_net::http::Request;
use thiserror::Error;

use cinemogul_game::FilmDescription;
use cinemogul_game::reference::{self, Person};
use cinemogul_game::score::{ScoreProvider, ScoreRequest, ScoreResponse};
use cinemogul_game::stats::StoredMovie;

/// How long a scoring request may run before it counts as a failure.
pub const DEFAULT_SCORE_TIMEOUT_MS: u32 = 8_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("response carried no usable score")]
    InvalidScore,
}

/// Scoring client for the external rating service.
#[derive(Debug, Clone)]
pub struct HttpScoreClient {
    endpoint: String,
    timeout_ms: u32,
}

impl HttpScoreClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_ms: DEFAULT_SCORE_TIMEOUT_MS,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    async fn post_score(&self, film: &FilmDescription) -> Result<f64, NetError> {
        let response = Request::post(&self.endpoint)
            .json(&ScoreRequest::from(film))
            .map_err(|e| NetError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| NetError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(NetError::Status(response.status()));
        }
        let body: ScoreResponse = response
            .json()
            .await
            .map_err(|e| NetError::Network(e.to_string()))?;
        body.validated().ok_or(NetError::InvalidScore)
    }
}

impl ScoreProvider for HttpScoreClient {
    type Error = NetError;

    async fn score(&mut self, film: &FilmDescription) -> Result<f64, Self::Error> {
        let fetch = self.post_score(film);
        let timeout = TimeoutFuture::new(self.timeout_ms);
        pin_mut!(fetch, timeout);
        match select(fetch, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(NetError::Timeout(self.timeout_ms)),
        }
    }
}

async fn fetch_people(url: &str) -> Result<Vec<Person>, NetError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| NetError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(NetError::Status(response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| NetError::Network(e.to_string()))
}

/// Actor list for the casting suggestions, most popular first. Any failure
/// substitutes the built-in list.
pub async fn load_actors(url: &str) -> Vec<Person> {
    match fetch_people(url).await {
        Ok(mut actors) => {
            reference::sort_by_popularity(&mut actors);
            actors
        }
        Err(err) => {
            log::warn!("actor list unavailable ({err}); using built-in fallback");
            reference::fallback_actors()
        }
    }
}

/// Director list for the form suggestions. Any failure substitutes the
/// built-in list.
pub async fn load_directors(url: &str) -> Vec<Person> {
    match fetch_people(url).await {
        Ok(directors) => directors,
        Err(err) => {
            log::warn!("director list unavailable ({err}); using built-in fallback");
            reference::fallback_directors()
        }
    }
}

/// Full stored-movie catalogue for the statistics view.
///
/// # Errors
///
/// Unlike the other loaders there is no fallback: the statistics view shows
/// an error state when the catalogue cannot be fetched.
pub async fn load_movie_stats(url: &str) -> Result<Vec<StoredMovie>, NetError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| NetError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(NetError::Status(response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| NetError::Network(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_client_builder_sets_endpoint_and_timeout() {
        let client = HttpScoreClient::new("/api/predict").with_timeout(2_000);
        assert_eq!(client.endpoint, "/api/predict");
        assert_eq!(client.timeout_ms, 2_000);
        assert_eq!(
            HttpScoreClient::new("/api/predict").timeout_ms,
            DEFAULT_SCORE_TIMEOUT_MS
        );
    }

    #[test]
    fn net_errors_render_their_context() {
        assert_eq!(
            NetError::Timeout(8_000).to_string(),
            "request timed out after 8000 ms"
        );
        assert_eq!(NetError::Status(503).to_string(), "unexpected status 503");
    }
}
