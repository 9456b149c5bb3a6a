use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use unicode_width::UnicodeWidthStr;

use hela_engine::assist::{AssistTask, GeminiClient};
use hela_engine::export::{FileSink, TextSink};
use hela_engine::settings::settings;
use hela_engine::translit::{mapping_entries, transliterate};
use hela_engine::HelaEngine;

#[derive(Parser)]
#[command(name = "helatool", about = "HelaType Singlish → Sinhala toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate Singlish text (reads stdin when TEXT is omitted)
    Convert {
        text: Option<String>,
        /// Output as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Show the Singlish mapping table
    Mappings {
        /// Filter by Latin spelling or Sinhala glyph substring
        #[arg(long)]
        search: Option<String>,
    },

    /// List saved history, newest first
    History {
        /// Path to the history file (defaults to the configured file name)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Save text to history, converting it first
    Save {
        text: String,
        /// Path to the history file
        #[arg(long)]
        store: Option<PathBuf>,
        /// API key for smart labelling (falls back to a plain save)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Remove one saved record by id
    Remove {
        id: String,
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Clear all saved history
    Clear {
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Run a text-assist task: grammar, formal, social, or translate
    Assist {
        task: String,
        text: String,
        #[arg(long)]
        api_key: String,
    },

    /// Write text to an export file after conversion
    Export {
        text: String,
        /// Output path (defaults to the configured export file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Convert { text, json } => {
            let input = match text {
                Some(t) => t,
                None => read_stdin()?,
            };
            let output = transliterate(&input);
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "input": input, "output": output })
                );
            } else {
                println!("{output}");
            }
        }

        Command::Mappings { search } => print_mappings(search.as_deref()),

        Command::History { store } => {
            let engine = HelaEngine::open(store_path(store))?;
            for record in engine.history_records() {
                println!("{}  {}  {}", record.id, record.timestamp_millis, record.text);
            }
        }

        Command::Save {
            text,
            store,
            api_key,
        } => {
            let mut engine = HelaEngine::open(store_path(store))?;
            if let Some(key) = api_key {
                engine = engine.with_assistant(Box::new(GeminiClient::new(key)));
            }
            let sinhala = engine.convert(&text);
            let saved = engine.save_text(&sinhala)?;
            println!("saved {} ({})", saved.record.id, saved.label);
        }

        Command::Remove { id, store } => {
            let engine = HelaEngine::open(store_path(store))?;
            if engine.remove_history(&id)? {
                println!("removed {id}");
            } else {
                eprintln!("no record with id {id}");
                process::exit(1);
            }
        }

        Command::Clear { store } => {
            let engine = HelaEngine::open(store_path(store))?;
            engine.clear_history()?;
        }

        Command::Assist {
            task,
            text,
            api_key,
        } => {
            let task = parse_task(&task)?;
            let engine =
                HelaEngine::new().with_assistant(Box::new(GeminiClient::new(api_key)));
            println!("{}", engine.assist_rewrite(task, &text)?);
        }

        Command::Export { text, output } => {
            let path = output
                .unwrap_or_else(|| PathBuf::from(&settings().export.default_file_name));
            let sinhala = transliterate(&text);
            let mut sink = FileSink::new(&path);
            sink.write_text(&sinhala)?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}

fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn store_path(store: Option<PathBuf>) -> PathBuf {
    store.unwrap_or_else(|| PathBuf::from(&settings().history.file_name))
}

fn parse_task(s: &str) -> Result<AssistTask, String> {
    match s {
        "grammar" => Ok(AssistTask::GrammarFix),
        "formal" => Ok(AssistTask::FormalLetter),
        "social" => Ok(AssistTask::SocialPost),
        "translate" => Ok(AssistTask::TranslateToEnglish),
        other => Err(format!(
            "unknown task {other:?} (expected grammar, formal, social, or translate)"
        )),
    }
}

/// Print the mapping table grouped by category, Latin column aligned.
/// Search matches the Latin spelling case-insensitively or the Sinhala
/// glyph exactly, like the original help tab.
fn print_mappings(search: Option<&str>) {
    let needle = search.map(str::to_lowercase);
    let entries: Vec<_> = mapping_entries()
        .filter(|e| match &needle {
            Some(n) => e.latin.to_lowercase().contains(n.as_str()) || e.sinhala.contains(n.as_str()),
            None => true,
        })
        .collect();

    let latin_width = entries
        .iter()
        .map(|e| e.latin.width())
        .max()
        .unwrap_or(0)
        .max("latin".width());

    let mut current_category = None;
    for entry in entries {
        if current_category != Some(entry.category) {
            println!("\n{}", entry.category.label());
            current_category = Some(entry.category);
        }
        let glyph = if entry.sinhala.is_empty() {
            "(none)"
        } else {
            entry.sinhala
        };
        println!("  {:latin_width$}  {}", entry.latin, glyph);
    }
}
