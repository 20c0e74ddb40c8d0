use folio_model::MonologueEntry;
use reqwest::StatusCode;

use crate::dracor::{self, CastMember, PlayMetadata};
use crate::endpoints::Endpoints;
use crate::error::Result;
use crate::fetch::Fetch;
use crate::folger;
use crate::word_count::{self, GenreRow};

/// The remote sources, reached through one fetcher.
///
/// Every method issues its requests one after another and awaits each
/// before sending the next.
#[derive(Debug)]
pub struct Sources<F> {
    fetcher: F,
    endpoints: Endpoints,
}

impl<F: Fetch> Sources<F> {
    pub fn new(fetcher: F, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Metadata for every play in the corpus.
    pub async fn play_metadata(&self) -> Result<Vec<PlayMetadata>> {
        let url = self.endpoints.metadata_url();
        tracing::info!(url = %url, "Fetching play metadata");
        let response = self.fetcher.get(&url).await?.error_for_status()?;
        let plays = dracor::parse_metadata(&response)?;
        tracing::info!(plays = plays.len(), "Parsed play metadata");
        Ok(plays)
    }

    /// Title/genre rows from the word-count page.
    pub async fn genre_table(&self) -> Result<Vec<GenreRow>> {
        let url = self.endpoints.word_count_url();
        tracing::info!(url = %url, "Fetching genre table");
        let response = self.fetcher.get(&url).await?.error_for_status()?;
        word_count::parse_genre_table(&response.text(), &url)
    }

    /// Cast list of one play, group entries included.
    pub async fn cast(&self, play: &str) -> Result<Vec<CastMember>> {
        let url = self.endpoints.cast_url(play);
        tracing::info!(url = %url, play = %play, "Fetching cast list");
        let response = self.fetcher.get(&url).await?.error_for_status()?;
        dracor::parse_cast(&response)
    }

    /// Monologues of at least `min_line` lines for one play.
    ///
    /// Any status other than 200 means the play has no listing and yields
    /// `None`; it is not an error.
    pub async fn monologue_listing(
        &self,
        short_code: &str,
        min_line: u32,
    ) -> Result<Option<Vec<MonologueEntry>>> {
        let url = self.endpoints.monologue_listing_url(short_code, min_line);
        tracing::info!(url = %url, "Fetching monologue listing");
        let response = self.fetcher.get(&url).await?;
        if response.status != StatusCode::OK {
            tracing::debug!(url = %url, status = %response.status, "No monologue listing");
            return Ok(None);
        }
        let entries = folger::parse_listing(&response.text(), &url)?;
        tracing::info!(code = %short_code, monologues = entries.len(), "Parsed monologue listing");
        Ok(Some(entries))
    }

    /// Raw TEI document of one play.
    pub async fn play_tei(&self, play: &str) -> Result<Vec<u8>> {
        let url = self.endpoints.tei_url(play);
        tracing::info!(url = %url, "Fetching TEI script");
        let response = self.fetcher.get(&url).await?.error_for_status()?;
        Ok(response.body)
    }

    /// Full text content of a monologue page.
    pub async fn monologue_text(&self, url: &str) -> Result<String> {
        tracing::debug!(url = %url, "Fetching monologue text");
        let response = self.fetcher.get(url).await?.error_for_status()?;
        Ok(folger::page_text(&response.text()))
    }
}
