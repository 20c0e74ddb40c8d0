// Wire types for the drama corpus API.
//
// Only the fields the catalogs consume are declared; everything else in the
// payload is ignored.

use folio_model::{CastEntry, Gender};
use serde::Deserialize;

use crate::error::Result;
use crate::fetch::FetchResponse;

/// One entry of `GET /corpora/shake/metadata`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayMetadata {
    pub id: Option<String>,
    pub name: Option<String>,
    pub title: String,
    pub wikipedia_link_count: Option<u64>,
    pub average_degree: Option<f64>,
    pub word_count_sp: Option<u64>,
    pub num_of_speakers: Option<u32>,
    pub num_of_speakers_male: Option<u32>,
    pub num_of_speakers_female: Option<u32>,
    pub num_of_speakers_unknown: Option<u32>,
    pub num_of_segments: Option<u32>,
}

/// One entry of `GET /corpora/shake/play/{name}/cast`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub is_group: bool,
    #[serde(default)]
    pub degree: u32,
}

impl CastMember {
    pub fn into_entry(self, play: &str) -> CastEntry {
        CastEntry {
            play: play.to_string(),
            gender: Gender::from_wire(self.gender.as_deref()),
            name: self.name,
            degree: self.degree,
        }
    }
}

pub fn parse_metadata(response: &FetchResponse) -> Result<Vec<PlayMetadata>> {
    response.json()
}

pub fn parse_cast(response: &FetchResponse) -> Result<Vec<CastMember>> {
    response.json()
}
