//! # Chord Lexer
//!
//! Finds chord symbols embedded in a line of lyrics.
//!
//! ## Grammar
//! ```text
//! chord   = root [ "m" ] [ "7" ]
//! root    = "A".."G" [ "#" | "b" ]
//! ```
//! A chord must stand as a whole word: the character before it and the
//! character after it are either absent or not word characters. Word
//! characters are alphanumerics (any script) and `_`.
//!
//! When the longest grammatical prefix at a position runs into a word
//! character, shorter prefixes are tried, longest first. So `Em7` is one
//! chord, `C#x` yields `C` (the `#` is not a word character), and `Ebm7x`
//! yields nothing.
//!
//! Matching is purely textual. A lyric word `A` standing alone is a chord
//! as far as the lexer is concerned.
//!
//! ## Example
//! ```rust
//! use chordsheet::lexer::{chords, Quality};
//!
//! let found: Vec<_> = chords("G  D/F#  Em7  Away").collect();
//! let texts: Vec<_> = found.iter().map(|c| c.text).collect();
//! assert_eq!(texts, vec!["G", "D", "F#", "Em7"]);
//! assert_eq!(found[3].quality, Quality::MinorSeventh);
//! ```

/// Chord quality suffix recognized by the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    Major,        // (none)
    Minor,        // m
    Seventh,      // 7
    MinorSeventh, // m7
}

impl Quality {
    pub fn suffix(self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Seventh => "7",
            Quality::MinorSeventh => "m7",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Quality> {
        match suffix {
            "" => Some(Quality::Major),
            "m" => Some(Quality::Minor),
            "7" => Some(Quality::Seventh),
            "m7" => Some(Quality::MinorSeventh),
            _ => None,
        }
    }
}

/// A chord found in a line, borrowing from the line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordToken<'a> {
    /// The whole matched text, e.g. `"F#m7"`
    pub text: &'a str,
    /// Root spelling as written, e.g. `"F#"` or `"Eb"`
    pub root: &'a str,
    pub quality: Quality,
    /// Byte offset of the first character in the line
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

/// A piece of a scanned line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Chord(ChordToken<'a>),
}

/// Scanner over one line, yielding chord tokens left to right
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn previous_char(&self, at: usize) -> Option<char> {
        self.input[..at].chars().next_back()
    }

    /// Try to read a chord starting exactly at byte `start`.
    fn chord_at(&self, start: usize) -> Option<ChordToken<'a>> {
        let bytes = self.input.as_bytes();
        if !matches!(bytes.get(start), Some(b'A'..=b'G')) {
            return None;
        }
        if self.previous_char(start).is_some_and(is_word_char) {
            return None;
        }

        // End offsets of every grammatical prefix, shortest first
        let mut ends = vec![start + 1];
        let mut pos = start + 1;
        if matches!(bytes.get(pos), Some(b'#' | b'b')) {
            pos += 1;
            ends.push(pos);
        }
        let root_end = pos;
        if bytes.get(pos) == Some(&b'm') {
            pos += 1;
            ends.push(pos);
        }
        if bytes.get(pos) == Some(&b'7') {
            pos += 1;
            ends.push(pos);
        }

        ends.into_iter().rev().find_map(|end| {
            let followed_by_word = self.input[end..].chars().next().is_some_and(is_word_char);
            if followed_by_word {
                return None;
            }
            let root_end = root_end.min(end);
            Some(ChordToken {
                text: &self.input[start..end],
                root: &self.input[start..root_end],
                quality: Quality::from_suffix(&self.input[root_end..end])?,
                start,
                end,
            })
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = ChordToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.position < self.input.len() {
            let start = self.position;
            if let Some(token) = self.chord_at(start) {
                self.position = token.end;
                return Some(token);
            }
            let width = self.input[start..].chars().next().map_or(1, char::len_utf8);
            self.position += width;
        }
        None
    }
}

/// Iterate over the chords of a single line.
pub fn chords(line: &str) -> Lexer<'_> {
    Lexer::new(line)
}

/// Split a line into alternating text and chord segments.
///
/// Concatenating the segments gives back the line.
pub fn scan_line(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for token in chords(line) {
        if token.start > last {
            segments.push(Segment::Text(&line[last..token.start]));
        }
        segments.push(Segment::Chord(token));
        last = token.end;
    }
    if last < line.len() {
        segments.push(Segment::Text(&line[last..]));
    }

    segments
}

/// A section heading such as `[Verse 1]` or `  [Chorus]  `
pub fn is_section_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('[') && trimmed.ends_with(']')
}

/// First root spelling anywhere in `token`: a letter A-G plus a directly
/// following `#` or `b`.
pub fn root_spelling(token: &str) -> Option<&str> {
    let start = token.find(|c: char| ('A'..='G').contains(&c))?;
    let end = match token.as_bytes().get(start + 1) {
        Some(b'#' | b'b') => start + 2,
        _ => start + 1,
    };
    Some(&token[start..end])
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<&str> {
        chords(line).map(|c| c.text).collect()
    }

    #[test]
    fn test_simple_chords() {
        assert_eq!(texts("G   D   Em"), vec!["G", "D", "Em"]);
    }

    #[test]
    fn test_qualities() {
        let found: Vec<_> = chords("C Cm C7 Cm7").map(|c| c.quality).collect();
        assert_eq!(
            found,
            vec![
                Quality::Major,
                Quality::Minor,
                Quality::Seventh,
                Quality::MinorSeventh,
            ]
        );
    }

    #[test]
    fn test_roots() {
        let roots: Vec<_> = chords("F#m Bb7 E").map(|c| c.root).collect();
        assert_eq!(roots, vec!["F#", "Bb", "E"]);
    }

    #[test]
    fn test_sharp_at_end_of_line() {
        assert_eq!(texts("D F#"), vec!["D", "F#"]);
    }

    #[test]
    fn test_rejects_words() {
        assert!(texts("Amazing Grace").is_empty());
        assert!(texts("Bad Dog Cm7x").is_empty());
        assert!(texts("ABC").is_empty());
        assert!(texts("xC").is_empty());
    }

    #[test]
    fn test_backs_off_to_shorter_prefix() {
        // '#' is not a word character, so "C" still ends on a boundary
        let found: Vec<_> = chords("C#x").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "C");
        assert_eq!(found[0].end, 1);
    }

    #[test]
    fn test_punctuation_boundaries() {
        assert_eq!(texts("(G) D/F# A-Bm, C."), vec!["G", "D", "F#", "A", "Bm", "C"]);
    }

    #[test]
    fn test_lone_lyric_letter_is_a_chord() {
        assert_eq!(texts("A love so true"), vec!["A"]);
    }

    #[test]
    fn test_unicode_neighbours() {
        // Non-ASCII letters count as word characters
        assert!(texts("éA").is_empty());
        assert!(texts("Aé").is_empty());
        assert_eq!(texts("— A —"), vec!["A"]);
    }

    #[test]
    fn test_offsets() {
        let found: Vec<_> = chords("  Am7 G").collect();
        assert_eq!((found[0].start, found[0].end), (2, 5));
        assert_eq!((found[1].start, found[1].end), (6, 7));
    }

    #[test]
    fn test_scan_line_reassembles() {
        let line = "[x] G  la la Em7 ,D";
        let rebuilt: String = scan_line(line)
            .iter()
            .map(|s| match s {
                Segment::Text(t) => *t,
                Segment::Chord(c) => c.text,
            })
            .collect();
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn test_scan_line_segments() {
        let segments = scan_line("G hi");
        assert_eq!(segments.len(), 2);
        assert!(matches!(segments[0], Segment::Chord(c) if c.text == "G"));
        assert_eq!(segments[1], Segment::Text(" hi"));
        assert!(scan_line("").is_empty());
    }

    #[test]
    fn test_section_lines() {
        assert!(is_section_line("[Verse 1]"));
        assert!(is_section_line("  [Chorus]\r"));
        assert!(is_section_line("[]"));
        assert!(!is_section_line("[Intro] G D"));
        assert!(!is_section_line("G [x]"));
        assert!(!is_section_line(""));
    }

    #[test]
    fn test_root_spelling() {
        assert_eq!(root_spelling("Ebm7"), Some("Eb"));
        assert_eq!(root_spelling("C#"), Some("C#"));
        assert_eq!(root_spelling("xAm"), Some("A"));
        assert_eq!(root_spelling("Am"), Some("A"));
        assert_eq!(root_spelling("hmm"), None);
    }
}
