//! Reading and writing the song library as YAML.
//!
//! A library file that does not exist yet is an empty library, so the first
//! `import` can create it.

use std::fs;
use std::path::Path;

use crate::error::{ChordsheetError, Result};
use crate::library::SongLibrary;

pub fn from_yaml(content: &str) -> Result<SongLibrary> {
    if content.trim().is_empty() {
        return Ok(SongLibrary::default());
    }
    serde_yaml::from_str(content).map_err(|e| ChordsheetError::Library(e.to_string()))
}

pub fn to_yaml(library: &SongLibrary) -> Result<String> {
    serde_yaml::to_string(library).map_err(|e| ChordsheetError::Library(e.to_string()))
}

/// Load the library at `path`, or an empty one if the file is missing.
pub fn load(path: &Path) -> Result<SongLibrary> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "library file not found, starting empty");
        return Ok(SongLibrary::default());
    }
    let content = fs::read_to_string(path).map_err(|source| ChordsheetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let library = from_yaml(&content)?;
    tracing::debug!(path = %path.display(), songs = library.len(), "loaded library");
    Ok(library)
}

pub fn save(library: &SongLibrary, path: &Path) -> Result<()> {
    let yaml = to_yaml(library)?;
    fs::write(path, yaml).map_err(|source| ChordsheetError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), songs = library.len(), "saved library");
    Ok(())
}
