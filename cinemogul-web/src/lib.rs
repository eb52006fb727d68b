#![forbid(unsafe_code)]
//! Web-specific glue for the CineMogul game engine.
//!
//! This crate provides browser implementations of the core collaborator
//! seams (scoring service, reference data, statistics, clock) and re-exports
//! the platform-agnostic game logic.

pub mod clock;
pub mod net;

// Re-export all types from cinemogul-game
pub use cinemogul_game::*;

pub use clock::BrowserClock;
pub use net::{HttpScoreClient, NetError, load_actors, load_directors, load_movie_stats};
