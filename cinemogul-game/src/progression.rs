//! Level progression and genre unlock tables.
use crate::film::Genre;

/// Level saturates here; XP beyond the last threshold has no further effect.
pub const MAX_LEVEL: u32 = 20;

/// Cumulative XP required to reach each level. Index 0 is level 1 (start).
/// Deltas grow so early levels come quickly.
const XP_THRESHOLDS: [u64; 20] = [
    0, 100, 300, 600, 1_000, 1_500, 2_100, 2_800, 3_600, 4_500, 5_500, 6_600, 7_800, 9_100,
    10_500, 12_000, 13_600, 15_300, 17_100, 19_000,
];

/// Genres newly unlocked at each level. The cumulative unlocked set at level
/// L is the union of all entries with level <= L. Levels missing from the
/// table (11, 13 and up) unlock nothing new.
const GENRE_UNLOCKS: &[(u32, &[Genre])] = &[
    (1, &[Genre::Action, Genre::Comedy, Genre::Drama]),
    (2, &[Genre::Adventure]),
    (3, &[Genre::Crime]),
    (4, &[Genre::Animation]),
    (5, &[Genre::Romance]),
    (6, &[Genre::Thriller]),
    (7, &[Genre::Horror]),
    (8, &[Genre::SciFi]),
    (9, &[Genre::Documentary]),
    (10, &[Genre::Fantasy]),
    (12, &[Genre::Western]),
];

/// Highest level whose cumulative threshold does not exceed `xp`.
/// Boundary inclusive: landing exactly on a threshold reaches that level.
#[must_use]
pub fn level_for_xp(xp: u64) -> u32 {
    let mut level = 1;
    for (i, threshold) in XP_THRESHOLDS.iter().enumerate().skip(1) {
        if xp >= *threshold {
            level = u32::try_from(i).unwrap_or(0) + 1;
        } else {
            break;
        }
    }
    level
}

/// Cumulative XP at which `level` begins. `None` outside the table.
#[must_use]
pub fn xp_threshold(level: u32) -> Option<u64> {
    if level == 0 {
        return None;
    }
    XP_THRESHOLDS.get(level as usize - 1).copied()
}

/// Cumulative XP needed for the next level, or `None` at the cap.
#[must_use]
pub fn next_level_xp(level: u32) -> Option<u64> {
    xp_threshold(level + 1)
}

/// All genres available at `level`, in unlock order.
#[must_use]
pub fn unlocked_genres(level: u32) -> Vec<Genre> {
    let mut genres = Vec::new();
    for (unlock_level, batch) in GENRE_UNLOCKS {
        if *unlock_level <= level {
            genres.extend_from_slice(batch);
        }
    }
    genres
}

/// Whether `genre` is available at `level`.
#[must_use]
pub fn genre_unlocked(genre: Genre, level: u32) -> bool {
    genre_unlock_level(genre) <= level
}

/// The level at which `genre` becomes available.
#[must_use]
pub fn genre_unlock_level(genre: Genre) -> u32 {
    for (unlock_level, batch) in GENRE_UNLOCKS {
        if batch.contains(&genre) {
            return *unlock_level;
        }
    }
    // Every genre appears in the table; unreachable for current variants.
    1
}

/// Every genre in the game paired with its unlock level, in unlock order.
#[must_use]
pub fn all_genres_with_levels() -> Vec<(Genre, u32)> {
    GENRE_UNLOCKS
        .iter()
        .flat_map(|(level, batch)| batch.iter().map(|genre| (*genre, *level)))
        .collect()
}
