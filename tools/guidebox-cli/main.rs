use clap::{Parser, Subcommand, ValueEnum};
use guidebox::prelude::*;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatCli {
    Markdown,
    Csv,
}

impl From<FormatCli> for ImportFormat {
    fn from(format: FormatCli) -> Self {
        match format {
            FormatCli::Markdown => ImportFormat::Markdown,
            FormatCli::Csv => ImportFormat::Csv,
        }
    }
}

/// Import Markdown and CSV guide content into flow boxes and steps
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log skipped rows and discarded headings to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import a Markdown or CSV file into a guide
    Import {
        /// Path to the Markdown or CSV file
        file: String,
        /// Guide the content is appended to
        #[arg(short, long)]
        guide: String,
        /// Input format; detected from the file extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<FormatCli>,
        /// Store snapshot to load and update (created if missing)
        #[arg(short, long)]
        store: Option<String>,
        /// Skip CSV rows without a step title
        #[arg(long)]
        require_step_titles: bool,
        /// Print the result as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// Print a starter document for a format
    Template {
        #[arg(value_enum)]
        format: FormatCli,
    },
    /// Print a stored guide as Markdown
    Export {
        #[arg(short, long)]
        guide: String,
        #[arg(short, long)]
        store: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Import {
            file,
            guide,
            format,
            store,
            require_step_titles,
            json,
        } => run_import(&file, &guide, format, store, require_step_titles, json),
        Command::Template { format } => match ImportFormat::from(format) {
            ImportFormat::Markdown => println!("{}", markdown_template()),
            ImportFormat::Csv => print!("{}", csv_template()),
        },
        Command::Export { guide, store } => {
            let store = MemoryStore::from_file(&store)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to load store: {}", e)));
            if store.flow_boxes(&guide).is_empty() {
                exit_with_error(&format!("Guide '{}' has no flow boxes", guide));
            }
            println!("{}", export_markdown(&store, &guide));
        }
    }
}

fn run_import(
    file: &str,
    guide: &str,
    format: Option<FormatCli>,
    store_path: Option<String>,
    require_step_titles: bool,
    json: bool,
) {
    let start = Instant::now();

    let format = match format {
        Some(format) => ImportFormat::from(format),
        None => ImportFormat::from_path(file)
            .unwrap_or_else(|e| exit_with_error(&format!("Could not detect format: {}", e))),
    };
    let text = fs::read_to_string(file)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read file '{}': {}", file, e)));

    let mut store = match &store_path {
        Some(path) if Path::new(path).exists() => MemoryStore::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load store: {}", e))),
        _ => MemoryStore::new(),
    };

    let importer = GuideImporter::builder()
        .require_step_titles(require_step_titles)
        .build();
    let outcome = importer
        .import(&mut store, guide, format.as_str(), &text)
        .unwrap_or_else(|e| exit_with_error(&format!("Import rejected: {}", e)));

    // A failed import leaves the snapshot on disk untouched.
    if let Some(path) = store_path.as_ref().filter(|_| outcome.is_success()) {
        store
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save store: {}", e)));
    }

    if json {
        let rendered = serde_json::to_string_pretty(&outcome.to_json())
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to render JSON: {}", e)));
        println!("{}", rendered);
    } else {
        println!("{}", ReportFormatter::format(&outcome));
        println!("Finished in {:?}", start.elapsed());
    }

    if !outcome.is_success() {
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
