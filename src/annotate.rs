//! # Chord Annotation
//!
//! Transposes every chord in a chord sheet and marks it up for display.
//!
//! ## Processing
//! 1. Split the text on `\n`
//! 2. Section headings (`[Verse 1]`, `[Chorus]`, ...) are copied verbatim
//! 3. Every other line is scanned with the [`lexer`](crate::lexer); each chord
//!    is transposed and wrapped in emphasis markup, text in between is copied
//! 4. Lines are joined back with `\n`
//!
//! The number and order of lines never change, and a trailing newline stays a
//! trailing newline.
//!
//! ## Example
//! ```rust
//! use chordsheet::annotate;
//!
//! let sheet = "[Verse 1]\nG   D   Em\nAmazing grace";
//! assert_eq!(
//!     annotate(sheet, 2),
//!     "[Verse 1]\n<b>A</b>   <b>E</b>   <b>F#m</b>\nAmazing grace"
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::lexer::{is_section_line, scan_line, Segment};
use crate::pitch::FlatNormalization;
use crate::transpose::{transpose_with, TransposeOptions};

/// How a transposed chord is marked in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Emphasis {
    /// `<b>G</b>`
    #[default]
    Html,
    /// `**G**`
    Markdown,
    /// Bold terminal escape sequence
    Ansi,
    /// No markup
    Plain,
}

impl Emphasis {
    pub fn wrap(self, chord: &str) -> String {
        match self {
            Emphasis::Html => format!("<b>{}</b>", chord),
            Emphasis::Markdown => format!("**{}**", chord),
            Emphasis::Ansi => format!("\x1b[1m{}\x1b[0m", chord),
            Emphasis::Plain => chord.to_string(),
        }
    }
}

impl FromStr for Emphasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Emphasis::Html),
            "markdown" | "md" => Ok(Emphasis::Markdown),
            "ansi" => Ok(Emphasis::Ansi),
            "plain" | "none" => Ok(Emphasis::Plain),
            other => Err(format!(
                "Unknown emphasis '{}' (expected html, markdown, ansi or plain)",
                other
            )),
        }
    }
}

impl fmt::Display for Emphasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Emphasis::Html => "html",
            Emphasis::Markdown => "markdown",
            Emphasis::Ansi => "ansi",
            Emphasis::Plain => "plain",
        };
        f.write_str(name)
    }
}

/// Options for [`annotate_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotateOptions {
    pub emphasis: Emphasis,
    pub flats: FlatNormalization,
}

/// Transpose and emphasize every chord in `raw` by `steps` semitones,
/// using HTML bold markup.
pub fn annotate(raw: &str, steps: i32) -> String {
    annotate_with(raw, steps, &AnnotateOptions::default())
}

/// Transpose and emphasize every chord in `raw` by `steps` semitones.
pub fn annotate_with(raw: &str, steps: i32, options: &AnnotateOptions) -> String {
    let transpose_options = TransposeOptions {
        flats: options.flats,
    };
    let mut out = String::with_capacity(raw.len() + raw.len() / 4);

    for (i, line) in raw.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if is_section_line(line) {
            out.push_str(line);
            continue;
        }
        for segment in scan_line(line) {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Chord(chord) => {
                    let shifted = transpose_with(chord.text, steps, &transpose_options);
                    out.push_str(&options.emphasis.wrap(&shifted));
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_and_chord_lines() {
        let out = annotate("[Verse 1]\nG   D   Em", 2);
        let lines: Vec<_> = out.split('\n').collect();
        assert_eq!(lines[0], "[Verse 1]");
        assert_eq!(lines[1], "<b>A</b>   <b>E</b>   <b>F#m</b>");
    }

    #[test]
    fn test_section_line_with_chord_letters_untouched() {
        for steps in [-13, -1, 0, 1, 7] {
            assert_eq!(annotate("[A B C]", steps), "[A B C]");
            assert_eq!(annotate("  [Chorus: G D]  ", steps), "  [Chorus: G D]  ");
        }
    }

    #[test]
    fn test_zero_steps_still_marks_chords() {
        assert_eq!(annotate("C Am", 0), "<b>C</b> <b>Am</b>");
    }

    #[test]
    fn test_lyrics_pass_through() {
        assert_eq!(annotate("Hello darkness my old friend", 4), "Hello darkness my old friend");
    }

    #[test]
    fn test_lone_letter_is_marked() {
        assert_eq!(annotate("A whole new world", 1), "<b>A#</b> whole new world");
    }

    #[test]
    fn test_unrecognized_flat_is_marked_but_not_moved() {
        assert_eq!(annotate("Bb F", 2), "<b>Bb</b> <b>G</b>");
    }

    #[test]
    fn test_all_flats_option() {
        let options = AnnotateOptions {
            flats: FlatNormalization::AllFlats,
            ..AnnotateOptions::default()
        };
        assert_eq!(annotate_with("Bb F", 2, &options), "<b>C</b> <b>G</b>");
    }

    #[test]
    fn test_line_count_preserved() {
        for text in ["", "\n", "G\n\nD\n", "a\nb\nc", "[x]\n\n\n"] {
            let out = annotate(text, 3);
            assert_eq!(out.split('\n').count(), text.split('\n').count(), "{:?}", text);
        }
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(annotate("[Intro]\r\nG\r\n", 2), "[Intro]\r\n<b>A</b>\r\n");
    }

    #[test]
    fn test_emphasis_styles() {
        let mut options = AnnotateOptions::default();
        options.emphasis = Emphasis::Markdown;
        assert_eq!(annotate_with("G", 2, &options), "**A**");
        options.emphasis = Emphasis::Plain;
        assert_eq!(annotate_with("G", 2, &options), "A");
        options.emphasis = Emphasis::Ansi;
        assert_eq!(annotate_with("G", 2, &options), "\x1b[1mA\x1b[0m");
    }

    #[test]
    fn test_emphasis_from_str() {
        assert_eq!("HTML".parse::<Emphasis>(), Ok(Emphasis::Html));
        assert_eq!("md".parse::<Emphasis>(), Ok(Emphasis::Markdown));
        assert_eq!("none".parse::<Emphasis>(), Ok(Emphasis::Plain));
        assert!("bold".parse::<Emphasis>().is_err());
        assert_eq!(Emphasis::Ansi.to_string(), "ansi");
    }
}
