pub mod annotate;
pub mod config;
pub mod error;
pub mod import;
pub mod lexer;
pub mod library;
pub mod pitch;
pub mod render;
pub mod scroll;
pub mod storage;
pub mod transpose;

pub use annotate::{annotate, annotate_with, AnnotateOptions, Emphasis};
pub use config::Config;
pub use error::*;
pub use import::import_file;
pub use lexer::{ChordToken, Quality};
pub use library::{Song, SongLibrary};
pub use pitch::{FlatNormalization, PitchClass};
pub use render::{key_label, render_html, render_text};
pub use transpose::{transpose, transpose_with, TransposeOptions};
