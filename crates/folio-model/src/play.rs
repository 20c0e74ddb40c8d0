use serde::{Deserialize, Serialize};

use crate::tier::Tier;

/// Average reading rate used to turn a word count into hours.
pub const WORDS_PER_MINUTE: f64 = 170.0;

/// One play after joining corpus metadata with the genre table.
///
/// The join is an outer join, so a row may carry only one side's fields:
/// genre-only rows have no metadata, metadata-only rows have no genre.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayRecord {
    /// Corpus identifier (e.g., "shake000017").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Corpus slug used in play URLs (e.g., "julius-caesar").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Normalized title, the join key.
    pub title: String,
    pub genre: Option<String>,
    pub num_character: Option<u32>,
    pub num_male_character: Option<u32>,
    pub num_female_character: Option<u32>,
    pub num_unknown_character: Option<u32>,
    pub num_scene: Option<u32>,
    /// Popularity signal.
    pub link_count: Option<u64>,
    /// Complexity signal.
    pub average_degree: Option<f64>,
    pub word_count: Option<u64>,
    pub play_length_hr: Option<f64>,
    pub popularity: Option<Tier>,
    pub play_complexity: Option<Tier>,
    pub play_length: Option<Tier>,
}

/// Reading time in hours for a word count.
pub fn reading_hours(word_count: u64) -> f64 {
    word_count as f64 / WORDS_PER_MINUTE / 60.0
}

/// Summary projection of a [`PlayRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaySummary {
    pub title: String,
    pub popularity: Option<Tier>,
    pub genre: Option<String>,
    pub num_character: Option<u32>,
    pub play_length: Option<Tier>,
    pub play_complexity: Option<Tier>,
}

/// Extended projection of a [`PlayRecord`] with per-gender cast counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayDetail {
    pub title: String,
    pub popularity: Option<Tier>,
    pub genre: Option<String>,
    pub num_male_character: Option<u32>,
    pub num_female_character: Option<u32>,
    pub num_unknown_character: Option<u32>,
    pub num_scene: Option<u32>,
    pub play_complexity: Option<Tier>,
    pub play_length_hr: Option<f64>,
}

impl From<&PlayRecord> for PlaySummary {
    fn from(r: &PlayRecord) -> Self {
        Self {
            title: r.title.clone(),
            popularity: r.popularity,
            genre: r.genre.clone(),
            num_character: r.num_character,
            play_length: r.play_length,
            play_complexity: r.play_complexity,
        }
    }
}

impl From<&PlayRecord> for PlayDetail {
    fn from(r: &PlayRecord) -> Self {
        Self {
            title: r.title.clone(),
            popularity: r.popularity,
            genre: r.genre.clone(),
            num_male_character: r.num_male_character,
            num_female_character: r.num_female_character,
            num_unknown_character: r.num_unknown_character,
            num_scene: r.num_scene,
            play_complexity: r.play_complexity,
            play_length_hr: r.play_length_hr,
        }
    }
}
