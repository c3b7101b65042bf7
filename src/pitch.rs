//! # Pitch Classes
//!
//! The twelve equal-tempered note names used as chord roots, in the order
//! `C C# D D# E F F# G G# A A# B`. All arithmetic on indices is modulo 12.
//!
//! ## Spelling
//! Roots are always written back with sharps. Two flat spellings are read by
//! default (`Db` and `Eb`); every other flat is unknown unless
//! [`FlatNormalization::AllFlats`] is requested.
//!
//! ## Example
//! ```rust
//! use chordsheet::{FlatNormalization, PitchClass};
//!
//! let eb = PitchClass::from_spelling("Eb", FlatNormalization::DbEbOnly);
//! assert_eq!(eb, Some(PitchClass::DSharp));
//! assert_eq!(PitchClass::B.shift(1), PitchClass::C);
//! assert_eq!(PitchClass::from_spelling("Gb", FlatNormalization::DbEbOnly), None);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pitch class of a chord root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

/// Which flat spellings are accepted as chord roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlatNormalization {
    /// Only `Db` and `Eb` are read (as `C#` and `D#`). `Gb`, `Ab`, `Bb` and the
    /// rest are left untouched.
    #[default]
    DbEbOnly,
    /// Every `Xb` is read as the pitch one semitone below `X` (`Cb` is `B`).
    AllFlats,
}

impl PitchClass {
    /// The pitch-class table, index 0 = C
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Position in [`PitchClass::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pitch class at `index`, wrapping modulo 12
    pub fn from_index(index: usize) -> PitchClass {
        Self::ALL[index % 12]
    }

    /// Canonical (sharp) spelling
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Resolve a root spelling (`"C"`, `"F#"`, `"Eb"`, ...) to a pitch class.
    ///
    /// Returns `None` for anything that is not a letter A-G with an optional
    /// `#`/`b`, and for flats that `flats` does not accept.
    pub fn from_spelling(spelling: &str, flats: FlatNormalization) -> Option<PitchClass> {
        let normalized = match spelling {
            "Db" => "C#",
            "Eb" => "D#",
            other => other,
        };

        if let Some(pc) = Self::ALL.iter().find(|pc| pc.name() == normalized) {
            return Some(*pc);
        }

        if flats == FlatNormalization::AllFlats {
            let mut chars = spelling.chars();
            if let (Some(letter), Some('b'), None) = (chars.next(), chars.next(), chars.next()) {
                let natural = Self::from_spelling(&letter.to_string(), flats)?;
                return Some(natural.shift(-1));
            }
        }

        None
    }

    /// Move by `steps` semitones, wrapping in either direction.
    pub fn shift(self, steps: i32) -> PitchClass {
        // Reduce first so the addition cannot overflow for extreme offsets
        let offset = steps.rem_euclid(12) as usize;
        Self::from_index(self.index() + offset)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
