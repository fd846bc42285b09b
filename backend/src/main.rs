//! App Reviews CLI - sentiment and summary statistics for a review CSV
//!
//! # Commands
//!
//! ```bash
//! appreviews analyze reviews.csv              # Full report as JSON
//! appreviews sentiment reviews.csv --by app   # Per-app (or per-language) tallies
//! appreviews summary reviews.csv              # Most-reviewed app statistics
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! appreviews parse reviews.csv    # Just parse CSV to JSON rows
//! appreviews clean reviews.csv    # Parse and clean to typed reviews
//! ```
//!
//! The input path may be omitted when `APP_REVIEWS_CSV` is set (a `.env`
//! file in the working directory is honored).

use appreviews::logs::LOG_BROADCASTER;
use appreviews::{
    analyze, load_file, parse_file, read_file, sentiment_by_app, sentiment_by_language,
    summarize, AnalysisOptions, GroupBy,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the default input file
const INPUT_ENV: &str = "APP_REVIEWS_CSV";

#[derive(Parser)]
#[command(name = "appreviews")]
#[command(about = "Sentiment and summary statistics for mobile app review CSVs", long_about = None)]
struct Cli {
    /// Don't print progress logs to stderr
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Input CSV file (default: $APP_REVIEWS_CSV)
    input: Option<PathBuf>,

    /// CSV delimiter (auto-detect if not specified)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Input encoding label, e.g. utf-8 or windows-1252 (auto-detect if not specified)
    #[arg(short, long)]
    encoding: Option<String>,

    /// Trim whitespace around headers and values
    #[arg(long)]
    trim: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a CSV file and output raw rows as JSON
    Parse(InputArgs),

    /// Clean rows into typed reviews
    Clean(InputArgs),

    /// Sentiment tallies per app or per language
    Sentiment {
        #[command(flatten)]
        args: InputArgs,

        /// Group key
        #[arg(short, long, value_enum, default_value = "app")]
        by: GroupBy,
    },

    /// Most-reviewed app, its main device and average rating
    Summary(InputArgs),

    /// Full report: tallies by app and language plus summary
    Analyze(InputArgs),
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if cli.quiet {
        LOG_BROADCASTER.set_echo(false);
    }

    let result = match cli.command {
        Commands::Parse(args) => cmd_parse(&args),
        Commands::Clean(args) => cmd_clean(&args),
        Commands::Sentiment { args, by } => cmd_sentiment(&args, by),
        Commands::Summary(args) => cmd_summary(&args),
        Commands::Analyze(args) => cmd_analyze(&args),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

impl InputArgs {
    fn input_path(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        match self.input {
            Some(ref path) => Ok(path.clone()),
            None => std::env::var(INPUT_ENV)
                .map(PathBuf::from)
                .map_err(|_| format!("No input file given and {} is not set", INPUT_ENV).into()),
        }
    }

    fn options(&self) -> Result<AnalysisOptions, Box<dyn std::error::Error>> {
        let delimiter = match self.delimiter {
            Some(c) if c.is_ascii() => Some(c as u8),
            Some(c) => return Err(format!("Delimiter must be an ASCII character, got '{}'", c).into()),
            None => None,
        };
        Ok(AnalysisOptions {
            delimiter,
            encoding: self.encoding.clone(),
            trim: self.trim,
            ..AnalysisOptions::default()
        })
    }
}

fn cmd_parse(args: &InputArgs) -> CliResult {
    let input = args.input_path()?;
    eprintln!("📄 Parsing CSV: {}", input.display());

    let result = parse_file(&input, &args.options()?.parse_options())?;

    eprintln!("   Encoding: {}", result.encoding);
    eprintln!(
        "   Delimiter: '{}'{}",
        appreviews::parser::format_delimiter(result.delimiter),
        if args.delimiter.is_none() { " (auto-detected)" } else { "" }
    );
    eprintln!("   Columns: {}", result.headers.join(", "));
    eprintln!("✅ Parsed {} rows", result.rows.len());

    write_json(&result.rows, args.output.as_deref())
}

fn cmd_clean(args: &InputArgs) -> CliResult {
    let loaded = load_file(args.input_path()?, &args.options()?)?;
    write_json(loaded.reviews(), args.output.as_deref())
}

fn cmd_sentiment(args: &InputArgs, by: GroupBy) -> CliResult {
    // Tallies are defined for zero reviews, print `[]` rather than fail
    let loaded = read_file(args.input_path()?, &args.options()?)?;
    let output = args.output.as_deref();

    match by {
        GroupBy::App => write_json(&sentiment_by_app(loaded.reviews()), output),
        GroupBy::Language => write_json(&sentiment_by_language(loaded.reviews()), output),
    }
}

fn cmd_summary(args: &InputArgs) -> CliResult {
    let loaded = load_file(args.input_path()?, &args.options()?)?;
    let summary = summarize(loaded.reviews())?;
    write_json(&summary, args.output.as_deref())
}

fn cmd_analyze(args: &InputArgs) -> CliResult {
    let loaded = load_file(args.input_path()?, &args.options()?)?;
    let report = analyze(loaded)?;
    write_json(&report, args.output.as_deref())
}

fn write_json<T: Serialize + ?Sized>(value: &T, path: Option<&Path>) -> CliResult {
    let json = serde_json::to_string_pretty(value)?;
    match path {
        Some(p) => {
            fs::write(p, json)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", json);
        }
    }
    Ok(())
}
