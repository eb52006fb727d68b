//! Client-side aggregations over the stored movie catalogue.
//!
//! The statistics endpoint returns raw records; everything below reduces
//! them to chart-ready series. Catalogue fields come from a CSV import, so
//! list columns arrive as bracketed strings and absent values as `"nan"`.
use serde::Deserialize;
use std::collections::HashMap;

/// Every frequency series is cut to the ten largest entries.
pub const TOP_N: usize = 10;

/// Star buckets in ascending order, matching the catalogue column names.
pub const RATING_LABELS: [&str; 10] = [
    "½",
    "★",
    "★½",
    "★★",
    "★★½",
    "★★★",
    "★★★½",
    "★★★★",
    "★★★★½",
    "★★★★★",
];

/// One movie record as stored in the catalogue. Field names mirror the
/// import columns; counts default to zero when a column is missing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StoredMovie {
    #[serde(rename = "Film_title", default)]
    pub film_title: String,
    #[serde(rename = "Release_year", default)]
    pub release_year: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Cast", default)]
    pub cast: String,
    #[serde(rename = "Average_rating", default)]
    pub average_rating: f64,
    #[serde(rename = "Genres", default)]
    pub genres: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: u32,
    #[serde(rename = "Countries", default)]
    pub countries: String,
    #[serde(rename = "Original_language", default)]
    pub original_language: String,
    #[serde(rename = "Watches", default)]
    pub watches: u64,
    #[serde(rename = "Likes", default)]
    pub likes: u64,
    #[serde(rename = "½", default)]
    pub half_star: u64,
    #[serde(rename = "★", default)]
    pub one_star: u64,
    #[serde(rename = "★½", default)]
    pub one_half_star: u64,
    #[serde(rename = "★★", default)]
    pub two_star: u64,
    #[serde(rename = "★★½", default)]
    pub two_half_star: u64,
    #[serde(rename = "★★★", default)]
    pub three_star: u64,
    #[serde(rename = "★★★½", default)]
    pub three_half_star: u64,
    #[serde(rename = "★★★★", default)]
    pub four_star: u64,
    #[serde(rename = "★★★★½", default)]
    pub four_half_star: u64,
    #[serde(rename = "★★★★★", default)]
    pub five_star: u64,
    #[serde(rename = "Total_ratings", default)]
    pub total_ratings: u64,
}

impl StoredMovie {
    /// Star-bucket counts in [`RATING_LABELS`] order.
    #[must_use]
    pub const fn star_counts(&self) -> [u64; 10] {
        [
            self.half_star,
            self.one_star,
            self.one_half_star,
            self.two_star,
            self.two_half_star,
            self.three_star,
            self.three_half_star,
            self.four_star,
            self.four_half_star,
            self.five_star,
        ]
    }
}

/// A labelled count for frequency charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub name: String,
    pub value: u64,
}

/// One film in the popularity series.
#[derive(Debug, Clone, PartialEq)]
pub struct PopularityEntry {
    pub name: String,
    pub watches: u64,
    pub likes: u64,
    /// Likes per hundred watches, rounded to two decimals.
    pub ratio: f64,
}

/// Parse a bracketed list column such as `['France', "USA"]`.
///
/// Elements are whatever sits between matching single or double quotes; the
/// `"nan"` sentinel and anything unquoted yield an empty list.
#[must_use]
pub fn parse_list_field(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "nan" {
        return Vec::new();
    }
    let mut items = Vec::new();
    let mut chars = trimmed.chars();
    while let Some(c) = chars.next() {
        if c == '\'' || c == '"' {
            let quote = c;
            let mut item = String::new();
            for inner in chars.by_ref() {
                if inner == quote {
                    break;
                }
                item.push(inner);
            }
            items.push(item);
        }
    }
    items
}

/// Total ratings per star bucket, ascending half-star to five stars.
#[must_use]
pub fn ratings_histogram(movies: &[StoredMovie]) -> Vec<FrequencyEntry> {
    let mut totals = [0u64; 10];
    for movie in movies {
        for (total, count) in totals.iter_mut().zip(movie.star_counts()) {
            *total += count;
        }
    }
    RATING_LABELS
        .iter()
        .zip(totals)
        .map(|(label, value)| FrequencyEntry {
            name: (*label).to_string(),
            value,
        })
        .collect()
}

/// Ten most frequent genres across the catalogue.
#[must_use]
pub fn top_genres(movies: &[StoredMovie]) -> Vec<FrequencyEntry> {
    top_list_field(movies, |movie| &movie.genres)
}

/// Ten most frequent production countries.
#[must_use]
pub fn top_countries(movies: &[StoredMovie]) -> Vec<FrequencyEntry> {
    top_list_field(movies, |movie| &movie.countries)
}

/// Ten most frequent original languages.
#[must_use]
pub fn top_languages(movies: &[StoredMovie]) -> Vec<FrequencyEntry> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for movie in movies {
        let language = movie.original_language.as_str();
        if !language.is_empty() && language != "nan" {
            *counts.entry(language).or_insert(0) += 1;
        }
    }
    top_entries(counts)
}

/// Film counts per runtime bucket, in fixed bucket order. Records with a
/// zero runtime are unparsed imports and are skipped.
#[must_use]
pub fn runtime_distribution(movies: &[StoredMovie]) -> Vec<FrequencyEntry> {
    let mut buckets = [0u64; 5];
    for movie in movies {
        let runtime = movie.runtime;
        if runtime == 0 {
            continue;
        }
        let idx = if runtime < 60 {
            0
        } else if runtime < 90 {
            1
        } else if runtime < 120 {
            2
        } else if runtime < 150 {
            3
        } else {
            4
        };
        buckets[idx] += 1;
    }
    ["< 60 min", "60-90 min", "90-120 min", "120-150 min", "> 150 min"]
        .iter()
        .zip(buckets)
        .map(|(label, value)| FrequencyEntry {
            name: (*label).to_string(),
            value,
        })
        .collect()
}

/// Watches against likes for the ten most-watched films. Titles longer than
/// fifteen characters are truncated for axis labels.
#[must_use]
pub fn views_vs_likes(movies: &[StoredMovie]) -> Vec<PopularityEntry> {
    let mut entries: Vec<PopularityEntry> = movies
        .iter()
        .filter(|movie| movie.watches > 0 && movie.likes > 0)
        .map(|movie| {
            let ratio = (movie.likes as f64 / movie.watches as f64) * 100.0;
            PopularityEntry {
                name: truncate_title(&movie.film_title),
                watches: movie.watches,
                likes: movie.likes,
                ratio: (ratio * 100.0).round() / 100.0,
            }
        })
        .collect();
    entries.sort_by(|a, b| b.watches.cmp(&a.watches));
    entries.truncate(TOP_N);
    entries
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() > 15 {
        let mut short: String = title.chars().take(15).collect();
        short.push_str("...");
        short
    } else {
        title.to_string()
    }
}

fn top_list_field<F>(movies: &[StoredMovie], field: F) -> Vec<FrequencyEntry>
where
    F: Fn(&StoredMovie) -> &str,
{
    let mut counts: HashMap<String, u64> = HashMap::new();
    for movie in movies {
        for item in parse_list_field(field(movie)) {
            *counts.entry(item).or_insert(0) += 1;
        }
    }
    top_entries(counts)
}

fn top_entries<K: Into<String>>(counts: HashMap<K, u64>) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = counts
        .into_iter()
        .map(|(name, value)| FrequencyEntry {
            name: name.into(),
            value,
        })
        .collect();
    // Secondary name ordering keeps equal counts deterministic.
    entries.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    entries.truncate(TOP_N);
    entries
}
