/// Base URLs of the three remote sources and the paths built on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Drama corpus API (metadata, cast lists, TEI texts).
    pub corpus: String,
    /// Site hosting the word-count/genre table.
    pub word_count_site: String,
    /// Digital-text site hosting monologue listings.
    pub digital_text_site: String,
}

pub const DEFAULT_CORPUS: &str = "https://dracor.org/api";
pub const DEFAULT_WORD_COUNT_SITE: &str = "https://www.opensourceshakespeare.org";
pub const DEFAULT_DIGITAL_TEXT_SITE: &str = "https://www.folgerdigitaltexts.org";

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            corpus: DEFAULT_CORPUS.to_string(),
            word_count_site: DEFAULT_WORD_COUNT_SITE.to_string(),
            digital_text_site: DEFAULT_DIGITAL_TEXT_SITE.to_string(),
        }
    }
}

impl Endpoints {
    pub fn metadata_url(&self) -> String {
        format!("{}/corpora/shake/metadata", trim(&self.corpus))
    }

    pub fn word_count_url(&self) -> String {
        format!("{}/views/plays/plays_numwords.php", trim(&self.word_count_site))
    }

    pub fn cast_url(&self, play: &str) -> String {
        format!("{}/corpora/shake/play/{play}/cast", trim(&self.corpus))
    }

    pub fn tei_url(&self, play: &str) -> String {
        format!("{}/corpora/shake/play/{play}/tei", trim(&self.corpus))
    }

    pub fn monologue_listing_url(&self, short_code: &str, min_line: u32) -> String {
        format!(
            "{}/{short_code}/monologue/{min_line}",
            trim(&self.digital_text_site)
        )
    }
}

fn trim(base: &str) -> &str {
    base.trim_end_matches('/')
}
