//! # Song Library
//!
//! The user's collection of chord sheets together with the per-song state
//! the renderer needs: an accumulated transpose offset and a favorite flag.
//!
//! The library is a plain value. Callers load it, change it, render it and
//! save it again; nothing here touches global state or the filesystem.
//!
//! ## Example
//! ```rust
//! use chordsheet::{Song, SongLibrary};
//!
//! let mut library = SongLibrary::default();
//! library.add(Song::new("s1", "Amazing Grace", "[Verse]\nG  C  G"));
//! library.transpose_song("s1", 2)?;
//! library.transpose_song("s1", 1)?;
//! assert_eq!(library.offset("s1"), 3);
//! assert!(library.toggle_favorite("s1")?);
//! # Ok::<(), chordsheet::ChordsheetError>(())
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::annotate::{annotate_with, AnnotateOptions};
use crate::error::{ChordsheetError, Result};

/// One chord sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    /// Lyrics with inline chords, exactly as imported
    pub raw: String,
}

impl Song {
    pub fn new(id: impl Into<String>, title: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            raw: raw.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongLibrary {
    songs: Vec<Song>,
    /// Accumulated semitone offset per song id
    transpose: BTreeMap<String, i32>,
    favorites: BTreeSet<String>,
}

impl SongLibrary {
    /// Songs in insertion order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.id == id)
    }

    fn require(&self, id: &str) -> Result<&Song> {
        self.get(id)
            .ok_or_else(|| ChordsheetError::UnknownSong(id.to_string()))
    }

    /// Append a song with a zero offset. A song with the same id is replaced
    /// in place, keeping its position and favorite flag.
    pub fn add(&mut self, song: Song) -> &Song {
        self.transpose.insert(song.id.clone(), 0);
        let index = match self.songs.iter().position(|s| s.id == song.id) {
            Some(index) => {
                tracing::debug!(id = %song.id, "replacing song");
                self.songs[index] = song;
                index
            }
            None => {
                self.songs.push(song);
                self.songs.len() - 1
            }
        };
        &self.songs[index]
    }

    /// An id starting with `base` that no song uses yet
    pub fn unique_id(&self, base: &str) -> String {
        if self.get(base).is_none() {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{}_{}", base, n))
            .find(|candidate| self.get(candidate).is_none())
            .unwrap_or_else(|| base.to_string())
    }

    /// Current offset of a song; 0 when none has been recorded
    pub fn offset(&self, id: &str) -> i32 {
        self.transpose.get(id).copied().unwrap_or(0)
    }

    /// Add `step` semitones to one song's offset and return the new offset.
    pub fn transpose_song(&mut self, id: &str, step: i32) -> Result<i32> {
        self.require(id)?;
        let offset = self.transpose.entry(id.to_string()).or_insert(0);
        *offset = offset.saturating_add(step);
        tracing::debug!(id, step, offset = *offset, "transposed song");
        Ok(*offset)
    }

    /// Add `step` semitones to every song's offset.
    pub fn transpose_all(&mut self, step: i32) {
        for song in &self.songs {
            let offset = self.transpose.entry(song.id.clone()).or_insert(0);
            *offset = offset.saturating_add(step);
        }
        tracing::debug!(step, songs = self.songs.len(), "transposed all songs");
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Flip a song's favorite flag and return the new value.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        self.require(id)?;
        let now_favorite = if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        };
        Ok(now_favorite)
    }

    /// Remove a song along with its offset and favorite flag.
    pub fn delete(&mut self, id: &str) -> Result<Song> {
        let index = self
            .songs
            .iter()
            .position(|song| song.id == id)
            .ok_or_else(|| ChordsheetError::UnknownSong(id.to_string()))?;
        self.transpose.remove(id);
        self.favorites.remove(id);
        let song = self.songs.remove(index);
        tracing::info!(id, title = %song.title, "deleted song");
        Ok(song)
    }

    /// The song's lyrics with every chord moved by its current offset
    pub fn annotated(&self, id: &str, options: &AnnotateOptions) -> Result<String> {
        let song = self.require(id)?;
        Ok(annotate_with(&song.raw, self.offset(id), options))
    }
}
