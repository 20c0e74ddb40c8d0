use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Gender as reported by the corpus cast list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    /// Map the corpus wire value. Empty or unrecognized values are unspecified.
    pub fn from_wire(value: Option<&str>) -> Option<Self> {
        match value.map(str::trim) {
            Some("MALE") => Some(Gender::Male),
            Some("FEMALE") => Some(Gender::Female),
            Some("UNKNOWN") => Some(Gender::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Unknown => "UNKNOWN",
        })
    }
}

/// Which genders a monologue search asks for.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum GenderFilter {
    #[default]
    All,
    Female,
    Male,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown gender '{0}': expected 'ALL', 'FEMALE', or 'MALE'")]
pub struct ParseGenderError(pub String);

impl FromStr for GenderFilter {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(GenderFilter::All),
            "FEMALE" => Ok(GenderFilter::Female),
            "MALE" => Ok(GenderFilter::Male),
            other => Err(ParseGenderError(other.to_string())),
        }
    }
}

impl GenderFilter {
    /// Whether a cast member of the given gender passes the filter.
    ///
    /// Unknown and unspecified genders always pass.
    pub fn admits(&self, gender: Option<Gender>) -> bool {
        match (self, gender) {
            (GenderFilter::All, _) => true,
            (_, None) | (_, Some(Gender::Unknown)) => true,
            (GenderFilter::Male, Some(g)) => g == Gender::Male,
            (GenderFilter::Female, Some(g)) => g == Gender::Female,
        }
    }
}

/// A single (non-group) character from a play's cast list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastEntry {
    /// Corpus slug of the play.
    pub play: String,
    pub name: String,
    pub gender: Option<Gender>,
    /// Network degree of the character, a prominence signal.
    pub degree: u32,
}

/// One monologue from a listing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonologueEntry {
    pub name: String,
    pub monologue_link: String,
    pub line_num: u32,
}

/// Reading-difficulty band of a readability score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum ComplexityCategory {
    Basic,
    Average,
    Skilled,
    Advanced,
}

impl ComplexityCategory {
    /// Bin a score into `(1, 6]`, `(6, 12]`, `(12, 18]`, `(18, 400]`.
    /// Anything outside those ranges is uncategorized.
    pub fn from_score(score: f64) -> Option<Self> {
        if !(score > 1.0 && score <= 400.0) {
            None
        } else if score <= 6.0 {
            Some(ComplexityCategory::Basic)
        } else if score <= 12.0 {
            Some(ComplexityCategory::Average)
        } else if score <= 18.0 {
            Some(ComplexityCategory::Skilled)
        } else {
            Some(ComplexityCategory::Advanced)
        }
    }
}

impl fmt::Display for ComplexityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ComplexityCategory::Basic => "Basic",
            ComplexityCategory::Average => "Average",
            ComplexityCategory::Skilled => "Skilled",
            ComplexityCategory::Advanced => "Advanced",
        })
    }
}

/// A cast entry joined with one of its monologues.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonologueRecord {
    pub play: String,
    pub name: String,
    pub gender: Option<Gender>,
    pub degree: u32,
    pub monologue_link: String,
    pub line_num: u32,
    /// Populated only by an explicit complexity pass.
    pub complexity_score: Option<f64>,
    pub complexity_category: Option<ComplexityCategory>,
}

impl MonologueRecord {
    pub fn join(cast: &CastEntry, monologue: &MonologueEntry) -> Self {
        Self {
            play: cast.play.clone(),
            name: cast.name.clone(),
            gender: cast.gender,
            degree: cast.degree,
            monologue_link: monologue.monologue_link.clone(),
            line_num: monologue.line_num,
            complexity_score: None,
            complexity_category: None,
        }
    }
}
