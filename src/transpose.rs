//! # Chord Transposition
//!
//! Shifts the root of a single chord symbol by a number of semitones,
//! leaving the quality suffix alone.
//!
//! ## Rules
//! - The root is the first letter A-G in the token plus a directly following
//!   `#` or `b`. A token without one comes back unchanged.
//! - `Db` and `Eb` are read as `C#` and `D#`. Other flats are not recognized
//!   unless [`FlatNormalization::AllFlats`] is passed, and such tokens come
//!   back unchanged.
//! - The result is always spelled with sharps, so `transpose("Db", 0)` is
//!   `"C#"`.
//! - Offsets wrap modulo 12 in both directions.
//!
//! ## Example
//! ```rust
//! use chordsheet::transpose;
//!
//! assert_eq!(transpose("C", 2), "D");
//! assert_eq!(transpose("B", 1), "C");
//! assert_eq!(transpose("C", -1), "B");
//! assert_eq!(transpose("A7", 3), "C7");
//! assert_eq!(transpose("Db", 0), "C#");
//! assert_eq!(transpose("Bb", 2), "Bb");
//! ```

use crate::lexer::root_spelling;
use crate::pitch::{FlatNormalization, PitchClass};

/// Knobs for [`transpose_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransposeOptions {
    pub flats: FlatNormalization,
}

/// Transpose a chord token by `steps` semitones with default options.
pub fn transpose(token: &str, steps: i32) -> String {
    transpose_with(token, steps, &TransposeOptions::default())
}

/// Transpose a chord token by `steps` semitones.
///
/// Only the first occurrence of the written root is replaced; everything else
/// in the token is copied as is.
pub fn transpose_with(token: &str, steps: i32, options: &TransposeOptions) -> String {
    let Some(root) = root_spelling(token) else {
        return token.to_string();
    };
    let Some(pitch) = PitchClass::from_spelling(root, options.flats) else {
        return token.to_string();
    };

    token.replacen(root, pitch.shift(steps).name(), 1)
}
