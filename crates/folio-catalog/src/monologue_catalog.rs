// Monologue catalog: cast lists joined with monologue listings.
//
// Characters are matched by name alone. Two plays that share a character
// name (e.g. "Ghost") will cross-match; the join key does not include the
// play.

use std::path::{Path, PathBuf};

use folio_acquire::folger::code_for_play;
use folio_acquire::output;
use folio_acquire::{Fetch, Sources};
use folio_model::readability::{self, Readability};
use folio_model::{CastEntry, MonologueEntry, MonologueRecord};

use crate::config::MonologueCatalogConfig;
use crate::error::Result;
use crate::select_row;

#[derive(Debug, Clone)]
pub struct MonologueCatalog {
    rows: Vec<MonologueRecord>,
}

impl MonologueCatalog {
    /// Fetch cast lists and monologue listings for the selected plays.
    ///
    /// A cast list that answers 404 or 5xx aborts the build. A listing that
    /// answers anything but 200 means the play has no monologues and is
    /// skipped.
    pub async fn fetch<F: Fetch>(
        sources: &Sources<F>,
        config: MonologueCatalogConfig,
    ) -> Result<Self> {
        config.validate()?;

        let mut cast: Vec<CastEntry> = Vec::new();
        for play in config.plays() {
            let members = sources.cast(play).await?;
            let listed = members.len();
            let kept: Vec<CastEntry> = members
                .into_iter()
                .filter(|m| !m.is_group)
                .map(|m| m.into_entry(play))
                .filter(|e| config.gender.admits(e.gender))
                .collect();
            tracing::debug!(play = %play, listed, kept = kept.len(), "Filtered cast list");
            cast.extend(kept);
        }

        let mut codes: Vec<&'static str> = Vec::new();
        for entry in &cast {
            if let Some(code) = code_for_play(&entry.play) {
                if !codes.contains(&code) {
                    codes.push(code);
                }
            }
        }

        let mut monologues: Vec<MonologueEntry> = Vec::new();
        for code in codes {
            if let Some(entries) = sources.monologue_listing(code, config.min_line_count).await? {
                monologues.extend(entries);
            }
        }

        Ok(Self::from_parts(config, &cast, &monologues))
    }

    /// Join already-fetched cast entries and monologues.
    pub fn from_parts(
        config: MonologueCatalogConfig,
        cast: &[CastEntry],
        monologues: &[MonologueEntry],
    ) -> Self {
        let mut rows: Vec<MonologueRecord> = cast
            .iter()
            .flat_map(|c| {
                monologues
                    .iter()
                    .filter(move |m| m.name == c.name)
                    .map(move |m| MonologueRecord::join(c, m))
            })
            .collect();

        rows.sort_by(|a, b| {
            b.degree
                .cmp(&a.degree)
                .then_with(|| b.line_num.cmp(&a.line_num))
        });

        tracing::info!(
            cast = cast.len(),
            monologues = monologues.len(),
            joined = rows.len(),
            gender = ?config.gender,
            min_line_count = config.min_line_count,
            "Built monologue catalog"
        );

        Self { rows }
    }

    pub fn summary(&self) -> &[MonologueRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn record(&self, row: usize) -> Result<&MonologueRecord> {
        select_row(&self.rows, row)
    }

    /// Score every monologue's readability and band it.
    ///
    /// One request per row, sent in order. Any failed request aborts the
    /// pass and leaves earlier scores untouched.
    pub async fn complexity<F: Fetch>(&mut self, sources: &Sources<F>) -> Result<&[MonologueRecord]> {
        tracing::info!(rows = self.rows.len(), "Scoring monologue readability");

        let mut assessed: Vec<Option<Readability>> = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let text = sources.monologue_text(&row.monologue_link).await?;
            let result = readability::assess(&text);
            match &result {
                Some(r) => tracing::debug!(
                    name = %row.name,
                    sentences = r.stats.sentences,
                    words = r.stats.words,
                    syllables = r.stats.syllables,
                    score = r.score,
                    "Scored monologue"
                ),
                None => tracing::warn!(name = %row.name, url = %row.monologue_link, "Monologue has no scorable text"),
            }
            assessed.push(result);
        }

        for (row, result) in self.rows.iter_mut().zip(assessed) {
            row.complexity_score = result.map(|r| r.score);
            row.complexity_category = result.and_then(|r| r.category);
        }

        Ok(&self.rows)
    }

    /// Download the text of the monologue at a 1-based row into `output_dir`
    /// as `{play}_{name}_monologue.txt`, returning the written path.
    pub async fn download_script<F: Fetch>(
        &self,
        sources: &Sources<F>,
        row: usize,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let record = self.record(row)?;
        let text = sources.monologue_text(&record.monologue_link).await?;
        Ok(output::write_monologue(output_dir, &record.play, &record.name, &text)?)
    }
}
