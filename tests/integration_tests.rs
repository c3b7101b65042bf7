//! Integration tests for chordsheet
//!
//! Exercises the public API end to end: transposing single chords, annotating
//! whole sheets, and the import / transpose / render / save cycle of a library.

use std::fs;

use chordsheet::{
    annotate, annotate_with, import_file, render_html, storage, transpose, AnnotateOptions,
    Emphasis, SongLibrary,
};

const CANONICAL: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

#[test]
fn test_transpose_scenarios() {
    assert_eq!(transpose("C", 2), "D");
    assert_eq!(transpose("B", 1), "C");
    assert_eq!(transpose("C", -1), "B");
    assert_eq!(transpose("Db", 0), "C#");
    assert_eq!(transpose("A7", 3), "C7");
}

#[test]
fn test_transpose_properties() {
    for root in CANONICAL {
        for suffix in ["", "m", "7", "m7"] {
            let token = format!("{}{}", root, suffix);
            assert_eq!(transpose(&token, 0), token);
            for steps in [-25, -12, -7, -1, 1, 5, 11, 12, 100] {
                let shifted = transpose(&token, steps);
                assert_eq!(transpose(&shifted, -steps), token);
                assert_eq!(transpose(&token, steps + 12), shifted);
            }
        }
    }
}

#[test]
fn test_annotate_verse() {
    let out = annotate("[Verse 1]\nG   D   Em", 2);
    assert_eq!(out, "[Verse 1]\n<b>A</b>   <b>E</b>   <b>F#m</b>");
}

#[test]
fn test_annotate_full_sheet() {
    let sheet = "\
[Intro]
C  G  Am  F

[Verse 1]
C              G
When I find myself in times of trouble
Am             F
Mother Mary comes to me
";
    let out = annotate(sheet, -2);
    let lines: Vec<_> = out.split('\n').collect();
    assert_eq!(lines.len(), sheet.split('\n').count());
    assert_eq!(lines[0], "[Intro]");
    assert_eq!(lines[1], "<b>A#</b>  <b>F</b>  <b>Gm</b>  <b>D#</b>");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "[Verse 1]");
    assert_eq!(lines[4], "<b>A#</b>              <b>F</b>");
    assert_eq!(lines[5], "When I find myself in times of trouble");
    assert_eq!(lines[7], "Mother Mary comes to me");
    assert_eq!(lines[8], "");
}

#[test]
fn test_section_lines_pass_through() {
    for line in ["[Verse 1]", "[Chorus - G D Em]", "   [Bridge]\t", "[]"] {
        for steps in -12..=12 {
            assert_eq!(annotate(line, steps), line);
        }
    }
}

#[test]
fn test_annotate_markdown() {
    let options = AnnotateOptions {
        emphasis: Emphasis::Markdown,
        ..AnnotateOptions::default()
    };
    assert_eq!(annotate_with("Dm7 G7 C", 5, &options), "**Gm7** **C7** **F**");
}

#[test]
fn test_library_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let sheet_path = dir.path().join("Let It Be.txt");
    let library_path = dir.path().join("songs.yaml");
    fs::write(&sheet_path, "[Chorus]\nAm G F C\nLet it be").unwrap();

    let mut library = storage::load(&library_path).unwrap();
    let id = import_file(&sheet_path, &mut library).unwrap().id.clone();
    library.transpose_song(&id, 1).unwrap();
    library.transpose_all(1);
    library.toggle_favorite(&id).unwrap();
    storage::save(&library, &library_path).unwrap();

    let loaded: SongLibrary = storage::load(&library_path).unwrap();
    assert_eq!(loaded.offset(&id), 2);
    assert!(loaded.is_favorite(&id));

    let html = render_html(&loaded, &AnnotateOptions::default());
    assert!(html.contains("<h2>Let It Be <span class=\"favorite\">★</span></h2>"));
    assert!(html.contains("Key: +2"));
    assert!(html.contains("[Chorus]\n<b>Bm</b> <b>A</b> <b>G</b> <b>D</b>\nLet it be"));

    let mut loaded = loaded;
    loaded.delete(&id).unwrap();
    storage::save(&loaded, &library_path).unwrap();
    assert!(storage::load(&library_path).unwrap().is_empty());
}
