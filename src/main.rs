use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use chordsheet::render::{render_song_text, song_heading};
use chordsheet::scroll::scroll;
use chordsheet::{
    annotate_with, import_file, key_label, render_html, render_text, storage, transpose_with,
    ChordsheetError, Config, Emphasis, Result, SongLibrary, TransposeOptions,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Transpose the chords in plain-text song sheets", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, default_value = "chordsheet.yaml")]
    config: PathBuf,

    /// Song library file (overrides the configured one)
    #[arg(long, global = true)]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a chord sheet file with its chords transposed.
    Show {
        file: PathBuf,
        /// Semitones to shift by
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        steps: i32,
        /// html, markdown, ansi or plain
        #[arg(short, long)]
        emphasis: Option<Emphasis>,
    },
    /// Transpose a single chord symbol.
    Chord {
        token: String,
        #[arg(allow_negative_numbers = true)]
        steps: i32,
    },
    /// Add a .txt chord sheet to the library.
    Import { file: PathBuf },
    /// List the songs in the library.
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Render the whole library.
    Render {
        /// Produce an HTML page
        #[arg(long)]
        html: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Shift one song's key.
    Transpose {
        id: String,
        #[arg(allow_negative_numbers = true)]
        step: i32,
    },
    /// Shift every song's key.
    TransposeAll {
        #[arg(allow_negative_numbers = true)]
        step: i32,
    },
    /// Mark or unmark a song as favorite.
    Favorite { id: String },
    /// Remove a song from the library.
    Delete { id: String },
    /// Print a song slowly, one line at a time.
    Scroll {
        id: String,
        /// Milliseconds between lines
        #[arg(long)]
        speed: Option<u64>,
    },
    /// Write one song, transposed, as plain text.
    Export {
        id: String,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct SongSummary<'a> {
    id: &'a str,
    title: &'a str,
    favorite: bool,
    offset: i32,
    key: String,
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let library_path = cli.library.clone().unwrap_or_else(|| config.library.clone());
    let options = config.annotate_options();

    match cli.command {
        Commands::Show {
            file,
            steps,
            emphasis,
        } => {
            let raw = fs::read_to_string(&file).map_err(|source| ChordsheetError::Read {
                path: file.clone(),
                source,
            })?;
            let mut options = options;
            if let Some(emphasis) = emphasis {
                options.emphasis = emphasis;
            }
            println!("{}", annotate_with(&raw, steps, &options));
        }
        Commands::Chord { token, steps } => {
            let transpose_options = TransposeOptions {
                flats: config.flats,
            };
            println!("{}", transpose_with(&token, steps, &transpose_options));
        }
        Commands::Import { file } => {
            let mut library = storage::load(&library_path)?;
            let song = import_file(&file, &mut library)?;
            println!("Imported '{}' as {}", song.title, song.id);
            storage::save(&library, &library_path)?;
        }
        Commands::List { json } => {
            let library = storage::load(&library_path)?;
            if json {
                let summaries: Vec<_> = library
                    .songs()
                    .iter()
                    .map(|song| SongSummary {
                        id: &song.id,
                        title: &song.title,
                        favorite: library.is_favorite(&song.id),
                        offset: library.offset(&song.id),
                        key: key_label(library.offset(&song.id)),
                    })
                    .collect();
                let text = serde_json::to_string_pretty(&summaries)
                    .map_err(|e| ChordsheetError::Library(e.to_string()))?;
                println!("{}", text);
            } else if library.is_empty() {
                println!("No songs yet. Add one with `chordsheet import <file.txt>`.");
            } else {
                for song in library.songs() {
                    println!("{}", song_heading(&library, song));
                }
            }
        }
        Commands::Render { html, out } => {
            let library = storage::load(&library_path)?;
            let text = if html {
                render_html(&library, &options)
            } else {
                render_text(&library, &options)
            };
            emit(&text, out.as_deref())?;
        }
        Commands::Transpose { id, step } => {
            let mut library = storage::load(&library_path)?;
            let offset = library.transpose_song(&id, step)?;
            storage::save(&library, &library_path)?;
            println!("{}: Key {}", id, key_label(offset));
        }
        Commands::TransposeAll { step } => {
            let mut library = storage::load(&library_path)?;
            library.transpose_all(step);
            storage::save(&library, &library_path)?;
            print_keys(&library);
        }
        Commands::Favorite { id } => {
            let mut library = storage::load(&library_path)?;
            let favorite = library.toggle_favorite(&id)?;
            storage::save(&library, &library_path)?;
            let state = if favorite { "favorite" } else { "not favorite" };
            println!("{}: {}", id, state);
        }
        Commands::Delete { id } => {
            let mut library = storage::load(&library_path)?;
            let song = library.delete(&id)?;
            storage::save(&library, &library_path)?;
            println!("Deleted '{}'", song.title);
        }
        Commands::Scroll { id, speed } => {
            let library = storage::load(&library_path)?;
            let text = render_song_text(&library, &id, &options)?;
            let delay = Duration::from_millis(speed.unwrap_or(config.scroll_speed_ms));
            tracing::debug!(id = %id, ?delay, "scrolling");
            scroll(&text, delay, &mut io::stdout().lock())?;
        }
        Commands::Export { id, out } => {
            let library = storage::load(&library_path)?;
            let mut options = options;
            options.emphasis = Emphasis::Plain;
            let text = library.annotated(&id, &options)?;
            emit(&text, out.as_deref())?;
        }
    }

    Ok(())
}

fn print_keys(library: &SongLibrary) {
    for song in library.songs() {
        println!("{}: Key {}", song.id, key_label(library.offset(&song.id)));
    }
}

fn emit(text: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, text).map_err(|source| ChordsheetError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", text)?;
        }
    }
    Ok(())
}
