//! Session-scoped player state: funds, experience, level, and film history.
use serde::{Deserialize, Serialize};

use crate::film::FilmRecord;
use crate::progression;

/// Funds every new studio starts with.
pub const STARTING_FUNDS: i64 = 10_000;

/// All mutable state for one player session. Funds move only through
/// production-cost deduction and reward addition; experience only grows;
/// level is always derived from experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub funds: i64,
    pub xp: u64,
    pub level: u32,
    /// Completed productions, most recent first.
    pub history: Vec<FilmRecord>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            funds: STARTING_FUNDS,
            xp: 0,
            level: 1,
            history: Vec::new(),
        }
    }
}

impl PlayerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn can_afford(&self, cost: i64) -> bool {
        self.funds >= cost
    }

    pub(crate) fn charge(&mut self, cost: i64) {
        self.funds -= cost;
    }

    pub(crate) fn credit(&mut self, amount: i64) {
        self.funds += amount;
    }

    pub(crate) fn add_xp(&mut self, xp: u32) {
        self.xp += u64::from(xp);
    }

    pub(crate) fn record_film(&mut self, record: FilmRecord) {
        self.history.insert(0, record);
    }

    /// Recompute level from cumulative XP. Returns the new level when it
    /// increased, which is the only time a level-up signal fires.
    pub fn sync_level(&mut self) -> Option<u32> {
        let level = progression::level_for_xp(self.xp);
        if level > self.level {
            self.level = level;
            Some(level)
        } else {
            None
        }
    }

    #[must_use]
    pub fn latest_film(&self) -> Option<&FilmRecord> {
        self.history.first()
    }

    #[must_use]
    pub fn films_produced(&self) -> usize {
        self.history.len()
    }

    /// Genres available at the current level.
    #[must_use]
    pub fn unlocked_genres(&self) -> Vec<crate::film::Genre> {
        progression::unlocked_genres(self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_with_defaults() {
        let player = PlayerState::new();
        assert_eq!(player.funds, STARTING_FUNDS);
        assert_eq!(player.xp, 0);
        assert_eq!(player.level, 1);
        assert!(player.history.is_empty());
    }

    #[test]
    fn sync_level_fires_only_on_increase() {
        let mut player = PlayerState::new();
        assert_eq!(player.sync_level(), None);

        player.add_xp(100);
        assert_eq!(player.sync_level(), Some(2));
        // Re-syncing at the same XP is silent.
        assert_eq!(player.sync_level(), None);

        player.add_xp(200);
        assert_eq!(player.sync_level(), Some(3));
    }

    #[test]
    fn unlocked_genres_follow_level() {
        let mut player = PlayerState::new();
        assert_eq!(player.unlocked_genres().len(), 3);
        player.add_xp(300);
        player.sync_level();
        assert_eq!(player.level, 3);
        assert_eq!(player.unlocked_genres().len(), 5);
    }
}
