use folio_acquire::folger::{self, PLAY_CODES};
use folio_model::{GenderFilter, Tier};

use crate::error::{CatalogError, Result};

pub const DEFAULT_MIN_CAST_SIZE: u32 = 20;
pub const DEFAULT_MIN_LINE_COUNT: u32 = 30;

/// Filters applied to the play catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCatalogConfig {
    /// Smallest cast (number of speakers) a play may have.
    pub min_cast_size: u32,
    pub length_tier: Option<Tier>,
    pub complexity_tier: Option<Tier>,
}

impl Default for PlayCatalogConfig {
    fn default() -> Self {
        Self {
            min_cast_size: DEFAULT_MIN_CAST_SIZE,
            length_tier: None,
            complexity_tier: None,
        }
    }
}

impl PlayCatalogConfig {
    /// Build from raw user input, rejecting anything out of range.
    pub fn from_args(
        min_cast_size: i64,
        length_tier: Option<&str>,
        complexity_tier: Option<&str>,
    ) -> Result<Self> {
        let min_cast_size = u32::try_from(min_cast_size)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                CatalogError::InvalidArgument(format!(
                    "minimum cast size must be a positive integer, got {min_cast_size}"
                ))
            })?;

        let config = Self {
            min_cast_size,
            length_tier: length_tier.map(str::parse).transpose()?,
            complexity_tier: complexity_tier.map(str::parse).transpose()?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_cast_size == 0 {
            return Err(CatalogError::InvalidArgument(
                "minimum cast size must be a positive integer, got 0".into(),
            ));
        }
        Ok(())
    }
}

/// Which plays a monologue search covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaySelection {
    #[default]
    All,
    /// Short codes on the digital-text site (e.g., "Ham", "Rom").
    Only(Vec<String>),
}

/// Filters applied to the monologue catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonologueCatalogConfig {
    pub gender: GenderFilter,
    /// Smallest monologue, in lines.
    pub min_line_count: u32,
    pub selection: PlaySelection,
}

impl Default for MonologueCatalogConfig {
    fn default() -> Self {
        Self {
            gender: GenderFilter::All,
            min_line_count: DEFAULT_MIN_LINE_COUNT,
            selection: PlaySelection::All,
        }
    }
}

impl MonologueCatalogConfig {
    /// Build from raw user input. Without `include_all`, a non-empty list
    /// of short codes is required.
    pub fn from_args(
        gender: &str,
        min_line_count: i64,
        include_all: bool,
        plays: Option<&[String]>,
    ) -> Result<Self> {
        let gender: GenderFilter = gender.parse()?;
        let min_line_count = u32::try_from(min_line_count)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                CatalogError::InvalidArgument(format!(
                    "minimum monologue length must be positive, got {min_line_count}"
                ))
            })?;

        let selection = if include_all {
            PlaySelection::All
        } else {
            match plays {
                Some(codes) => PlaySelection::Only(codes.to_vec()),
                None => {
                    return Err(CatalogError::InvalidArgument(
                        "a list of play short codes is required when not including all plays".into(),
                    ))
                }
            }
        };

        let config = Self {
            gender,
            min_line_count,
            selection,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_line_count == 0 {
            return Err(CatalogError::InvalidArgument(
                "minimum monologue length must be positive, got 0".into(),
            ));
        }
        if let PlaySelection::Only(codes) = &self.selection {
            if codes.is_empty() {
                return Err(CatalogError::InvalidArgument(
                    "a list of play short codes is required when not including all plays".into(),
                ));
            }
            if let Some(unknown) = codes.iter().find(|c| folger::play_for_code(c).is_none()) {
                return Err(CatalogError::InvalidArgument(format!(
                    "unknown play short code '{unknown}'"
                )));
            }
        }
        Ok(())
    }

    /// Corpus slugs of the selected plays, in short-code table order.
    pub fn plays(&self) -> Vec<&'static str> {
        PLAY_CODES
            .iter()
            .filter(|(code, _)| match &self.selection {
                PlaySelection::All => true,
                PlaySelection::Only(codes) => codes.iter().any(|c| c.as_str() == *code),
            })
            .map(|(_, play)| *play)
            .collect()
    }
}
