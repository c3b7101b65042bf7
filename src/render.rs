//! # Library Rendering
//!
//! Produces the displayed form of a [`SongLibrary`]: each song's heading
//! (title, favorite star, key label) followed by its chord sheet, transposed
//! by the song's current offset.
//!
//! Two targets:
//! - [`render_html`] - a standalone HTML page, chords in `<b>`
//! - [`render_text`] - terminal text, chords marked with the configured
//!   [`Emphasis`]
//!
//! ## Key Label
//! The offset is shown with an explicit sign: `+0`, `+3`, `-2`.

use crate::annotate::{annotate_with, AnnotateOptions, Emphasis};
use crate::error::{ChordsheetError, Result};
use crate::library::{Song, SongLibrary};

const FAVORITE: &str = "★";
const NOT_FAVORITE: &str = "☆";

/// Signed key label for a transpose offset
pub fn key_label(offset: i32) -> String {
    if offset >= 0 {
        format!("+{}", offset)
    } else {
        offset.to_string()
    }
}

fn star(favorite: bool) -> &'static str {
    if favorite {
        FAVORITE
    } else {
        NOT_FAVORITE
    }
}

/// Render the whole library as an HTML page.
///
/// Lyrics are escaped before chords are marked, so the only tags in a song
/// body are the `<b>` elements around chords.
pub fn render_html(library: &SongLibrary, options: &AnnotateOptions) -> String {
    let options = AnnotateOptions {
        emphasis: Emphasis::Html,
        ..*options
    };
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html>\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str("  <title>Songs</title>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str("<div id=\"songs\">\n");

    for song in library.songs() {
        let offset = library.offset(&song.id);
        html.push_str(&format!(
            "<section class=\"song\" data-song-id=\"{}\">\n",
            escape_attr(&song.id)
        ));
        html.push_str(&format!(
            "  <h2>{} <span class=\"favorite\">{}</span></h2>\n",
            escape_attr(&song.title),
            star(library.is_favorite(&song.id))
        ));
        html.push_str(&format!(
            "  <div class=\"controls\"><span>Key: {}</span></div>\n",
            key_label(offset)
        ));
        let body = annotate_with(&escape_text(&song.raw), offset, &options);
        html.push_str(&format!("  <pre><code>{}</code></pre>\n", body));
        html.push_str("</section>\n");
    }

    html.push_str("</div>\n");
    html.push_str("</body>\n</html>\n");
    html
}

/// Heading line for one song in terminal output
pub fn song_heading(library: &SongLibrary, song: &Song) -> String {
    format!(
        "{} {} (Key: {}) [{}]",
        song.title,
        star(library.is_favorite(&song.id)),
        key_label(library.offset(&song.id)),
        song.id
    )
}

/// Render one song for the terminal.
pub fn render_song_text(library: &SongLibrary, id: &str, options: &AnnotateOptions) -> Result<String> {
    let song = library
        .get(id)
        .ok_or_else(|| ChordsheetError::UnknownSong(id.to_string()))?;
    let body = annotate_with(&song.raw, library.offset(id), options);
    Ok(format!("== {}\n{}", song_heading(library, song), body))
}

/// Render every song for the terminal, separated by blank lines.
pub fn render_text(library: &SongLibrary, options: &AnnotateOptions) -> String {
    library
        .songs()
        .iter()
        .map(|song| {
            let body = annotate_with(&song.raw, library.offset(&song.id), options);
            format!("== {}\n{}", song_heading(library, song), body)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Escape text content. Every entity starts with `&` and ends with `;`,
/// neither of which is a word character, so chord boundaries are unchanged.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;").replace('\'', "&apos;")
}
