// Play catalog: corpus metadata outer-joined with the genre table.
//
// Pipeline: normalize titles -> outer join on title -> tier the full joined
// population -> filter by cast size and requested tiers -> order by
// popularity. Tiers are fixed before any filter runs, so a play keeps its
// tier whatever filters are applied.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use folio_acquire::dracor::PlayMetadata;
use folio_acquire::normalize::normalize_title;
use folio_acquire::output;
use folio_acquire::word_count::GenreRow;
use folio_acquire::{Fetch, Sources};
use folio_model::{reading_hours, tertiles, PlayDetail, PlayRecord, PlaySummary};

use crate::config::PlayCatalogConfig;
use crate::error::{CatalogError, Result};
use crate::select_row;

#[derive(Debug, Clone)]
pub struct PlayCatalog {
    rows: Vec<PlayRecord>,
}

impl PlayCatalog {
    /// Fetch both sources and build the catalog.
    ///
    /// The configuration is validated before any request is sent.
    pub async fn fetch<F: Fetch>(sources: &Sources<F>, config: PlayCatalogConfig) -> Result<Self> {
        config.validate()?;
        let metadata = sources.play_metadata().await?;
        let genres = sources.genre_table().await?;
        Ok(Self::from_sources(metadata, &genres, config))
    }

    /// Build the catalog from already-fetched source tables.
    pub fn from_sources(
        metadata: Vec<PlayMetadata>,
        genres: &[GenreRow],
        config: PlayCatalogConfig,
    ) -> Self {
        let mut rows = outer_join(metadata, genres);
        assign_tiers(&mut rows);
        let joined = rows.len();

        rows.retain(|r| r.num_character.is_some_and(|n| n >= config.min_cast_size));
        if let Some(tier) = config.length_tier {
            rows.retain(|r| r.play_length == Some(tier));
        }
        if let Some(tier) = config.complexity_tier {
            rows.retain(|r| r.play_complexity == Some(tier));
        }

        // Descending; plays without a link count sort last.
        rows.sort_by(|a, b| b.link_count.cmp(&a.link_count));

        tracing::info!(
            joined,
            kept = rows.len(),
            min_cast_size = config.min_cast_size,
            length_tier = ?config.length_tier,
            complexity_tier = ?config.complexity_tier,
            "Built play catalog"
        );

        Self { rows }
    }

    pub fn rows(&self) -> &[PlayRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary(&self) -> Vec<PlaySummary> {
        self.rows.iter().map(PlaySummary::from).collect()
    }

    pub fn detail(&self) -> Vec<PlayDetail> {
        self.rows.iter().map(PlayDetail::from).collect()
    }

    /// The play at a 1-based row.
    pub fn record(&self, row: usize) -> Result<&PlayRecord> {
        select_row(&self.rows, row)
    }

    /// Download the TEI text of the play at a 1-based row into `output_dir`
    /// as `{name}_script.xml`, returning the written path.
    pub async fn download_script<F: Fetch>(
        &self,
        sources: &Sources<F>,
        row: usize,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let record = self.record(row)?;
        let name = record.name.as_deref().ok_or_else(|| {
            CatalogError::InvalidArgument(format!(
                "row {row} ('{}') has no corpus identifier",
                record.title
            ))
        })?;

        let tei = sources.play_tei(name).await?;
        Ok(output::write_script(output_dir, name, &tei)?)
    }
}

/// Outer join on normalized title. Rows come back ordered by title.
fn outer_join(metadata: Vec<PlayMetadata>, genres: &[GenreRow]) -> Vec<PlayRecord> {
    let mut matched: HashSet<usize> = HashSet::new();
    let mut rows = Vec::with_capacity(metadata.len() + genres.len());

    for play in metadata {
        let title = normalize_title(&play.title);
        let hits: Vec<usize> = genres
            .iter()
            .enumerate()
            .filter(|(_, g)| g.title == title)
            .map(|(i, _)| i)
            .collect();

        if hits.is_empty() {
            tracing::debug!(title = %title, "No genre row for play");
            rows.push(record_from_metadata(&play, title, None));
        } else {
            for i in hits {
                matched.insert(i);
                rows.push(record_from_metadata(&play, title.clone(), Some(genres[i].genre.clone())));
            }
        }
    }

    for (i, g) in genres.iter().enumerate() {
        if !matched.contains(&i) {
            tracing::debug!(title = %g.title, "No metadata for genre row");
            rows.push(record_from_genre(g));
        }
    }

    rows.sort_by(|a, b| a.title.cmp(&b.title));
    rows
}

fn record_from_metadata(play: &PlayMetadata, title: String, genre: Option<String>) -> PlayRecord {
    PlayRecord {
        id: play.id.clone(),
        name: play.name.clone(),
        title,
        genre,
        num_character: play.num_of_speakers,
        num_male_character: play.num_of_speakers_male,
        num_female_character: play.num_of_speakers_female,
        num_unknown_character: play.num_of_speakers_unknown,
        num_scene: play.num_of_segments,
        link_count: play.wikipedia_link_count,
        average_degree: play.average_degree,
        word_count: play.word_count_sp,
        play_length_hr: play.word_count_sp.map(reading_hours),
        popularity: None,
        play_complexity: None,
        play_length: None,
    }
}

fn record_from_genre(g: &GenreRow) -> PlayRecord {
    PlayRecord {
        id: None,
        name: None,
        title: g.title.clone(),
        genre: Some(g.genre.clone()),
        num_character: None,
        num_male_character: None,
        num_female_character: None,
        num_unknown_character: None,
        num_scene: None,
        link_count: None,
        average_degree: None,
        word_count: None,
        play_length_hr: None,
        popularity: None,
        play_complexity: None,
        play_length: None,
    }
}

/// Tier popularity, complexity and length over every joined row.
fn assign_tiers(rows: &mut [PlayRecord]) {
    let popularity = tertiles(&rows.iter().map(|r| r.link_count.map(|v| v as f64)).collect::<Vec<_>>());
    let complexity = tertiles(&rows.iter().map(|r| r.average_degree).collect::<Vec<_>>());
    let length = tertiles(&rows.iter().map(|r| r.play_length_hr).collect::<Vec<_>>());

    for (i, row) in rows.iter_mut().enumerate() {
        row.popularity = popularity[i];
        row.play_complexity = complexity[i];
        row.play_length = length[i];
    }
}
