use folio_acquire::AcquireError;
use folio_model::{ParseGenderError, ParseTierError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("row {row} is out of range: the table has {rows} rows (rows are numbered from 1)")]
    IndexOutOfRange { row: usize, rows: usize },

    #[error(transparent)]
    Remote(#[from] AcquireError),
}

impl From<ParseTierError> for CatalogError {
    fn from(e: ParseTierError) -> Self {
        CatalogError::InvalidArgument(e.to_string())
    }
}

impl From<ParseGenderError> for CatalogError {
    fn from(e: ParseGenderError) -> Self {
        CatalogError::InvalidArgument(e.to_string())
    }
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Remote(AcquireError::RemoteNotFound { .. }))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, CatalogError::Remote(AcquireError::RemoteServerError { .. }))
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
