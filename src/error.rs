//! # Error Types
//!
//! Chord detection and transposition never fail. Errors come from the layers
//! around them: importing song files, reading and writing the song library,
//! loading configuration, and looking up songs by id.
//!
//! ## Usage
//! ```rust
//! use chordsheet::{ChordsheetError, SongLibrary};
//!
//! let mut library = SongLibrary::default();
//! match library.delete("missing") {
//!     Err(ChordsheetError::UnknownSong(id)) => assert_eq!(id, "missing"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result alias carrying [`ChordsheetError`]
pub type Result<T> = std::result::Result<T, ChordsheetError>;

#[derive(Error, Debug)]
pub enum ChordsheetError {
    /// Import of a file that is not a `.txt` file.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordsheetError;
    /// let err = ChordsheetError::NotPlainText { path: "song.pdf".into() };
    /// assert_eq!(err.to_string(), "Not a plain text (.txt) file: song.pdf");
    /// ```
    #[error("Not a plain text (.txt) file: {}", path.display())]
    NotPlainText { path: PathBuf },

    /// Import of a file with nothing but whitespace in it.
    #[error("The file is empty: {}", path.display())]
    EmptySong { path: PathBuf },

    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No song with this id in the library.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordsheetError;
    /// let err = ChordsheetError::UnknownSong("imported_42".to_string());
    /// assert_eq!(err.to_string(), "Unknown song: imported_42");
    /// ```
    #[error("Unknown song: {0}")]
    UnknownSong(String),

    /// The library file could not be parsed or produced.
    #[error("Invalid song library: {0}")]
    Library(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Writing to the terminal or another output stream failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
