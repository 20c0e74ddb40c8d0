use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File name of a downloaded TEI script.
pub fn script_file_name(play: &str) -> String {
    format!("{play}_script.xml")
}

/// File name of a downloaded monologue.
pub fn monologue_file_name(play: &str, name: &str) -> String {
    format!("{play}_{name}_monologue.txt")
}

/// Write a TEI document verbatim. Existing files are overwritten.
pub fn write_script(output_dir: &Path, play: &str, tei: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(script_file_name(play));
    fs::write(&path, tei)?;
    tracing::info!(path = %path.display(), bytes = tei.len(), "Wrote script");
    Ok(path)
}

/// Write a monologue's text. Existing files are overwritten.
pub fn write_monologue(output_dir: &Path, play: &str, name: &str, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(monologue_file_name(play, name));
    fs::write(&path, text)?;
    tracing::info!(path = %path.display(), lines = text.lines().count(), "Wrote monologue");
    Ok(path)
}
