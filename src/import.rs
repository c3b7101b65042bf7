//! # Song Import
//!
//! Turns a plain-text chord sheet on disk into a [`Song`] in the library.
//!
//! ## Rules
//! - Only `.txt` files are accepted (extension compared case-insensitively)
//! - A file that is empty or whitespace-only is rejected
//! - The title is the file name without `.txt`
//! - The id is `imported_<unix millis>`, suffixed if already taken
//! - The new song starts with a transpose offset of 0

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{ChordsheetError, Result};
use crate::library::{Song, SongLibrary};

/// Check a file name and its content, and build a song from them.
pub fn song_from_text(path: &Path, content: &str, id: String) -> Result<Song> {
    if !is_plain_text(path) {
        return Err(ChordsheetError::NotPlainText {
            path: path.to_path_buf(),
        });
    }
    if content.trim().is_empty() {
        return Err(ChordsheetError::EmptySong {
            path: path.to_path_buf(),
        });
    }

    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Song::new(id, title, content))
}

/// Read `path` and add it to `library`.
pub fn import_file<'a>(path: &Path, library: &'a mut SongLibrary) -> Result<&'a Song> {
    // Checked up front so a wrong file type is never read
    if !is_plain_text(path) {
        return Err(ChordsheetError::NotPlainText {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|source| ChordsheetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let id = library.unique_id(&format!("imported_{}", now_millis()));
    let song = song_from_text(path, &content, id)?;
    tracing::info!(id = %song.id, title = %song.title, "imported song");
    Ok(library.add(song))
}

fn is_plain_text(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}
