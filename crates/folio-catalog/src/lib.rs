pub mod error;
pub mod config;
pub mod play_catalog;
pub mod monologue_catalog;

pub use config::{MonologueCatalogConfig, PlayCatalogConfig, PlaySelection};
pub use error::{CatalogError, Result};
pub use monologue_catalog::MonologueCatalog;
pub use play_catalog::PlayCatalog;

/// Look up a 1-based row.
pub(crate) fn select_row<T>(rows: &[T], row: usize) -> Result<&T> {
    row.checked_sub(1)
        .and_then(|i| rows.get(i))
        .ok_or(CatalogError::IndexOutOfRange {
            row,
            rows: rows.len(),
        })
}
