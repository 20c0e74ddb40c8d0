use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_acquire::{Endpoints, HttpFetcher, Sources};
use folio_catalog::config::{DEFAULT_MIN_CAST_SIZE, DEFAULT_MIN_LINE_COUNT};
use folio_catalog::{MonologueCatalog, MonologueCatalogConfig, PlayCatalog, PlayCatalogConfig};

mod render;

use render::Format;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Shakespeare play and monologue catalogs built from public sources")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    /// Base URL of the drama corpus API
    #[arg(long, global = true, default_value = folio_acquire::endpoints::DEFAULT_CORPUS)]
    corpus_url: String,

    /// Base URL of the word-count/genre site
    #[arg(long, global = true, default_value = folio_acquire::endpoints::DEFAULT_WORD_COUNT_SITE)]
    word_count_url: String,

    /// Base URL of the digital-text site with monologue listings
    #[arg(long, global = true, default_value = folio_acquire::endpoints::DEFAULT_DIGITAL_TEXT_SITE)]
    text_url: String,

    /// Output format for printed tables
    #[arg(short, long, global = true, default_value = "table", value_enum)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// List plays with popularity, complexity and length tiers
    Plays {
        /// Smallest cast size to keep
        #[arg(short = 'c', long, default_value_t = i64::from(DEFAULT_MIN_CAST_SIZE), allow_negative_numbers = true)]
        min_cast: i64,

        /// Keep only plays of this length tier: Low, Medium, High
        #[arg(short, long)]
        length: Option<String>,

        /// Keep only plays of this complexity tier: Low, Medium, High
        #[arg(short = 'x', long)]
        complexity: Option<String>,

        /// Print the detailed view (per-gender cast counts, length in hours)
        #[arg(short, long)]
        detail: bool,

        /// Download the TEI script of this row (1-based) instead of printing
        #[arg(long)]
        download: Option<usize>,

        /// Directory for downloaded files
        #[arg(short = 'O', long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// List monologues joined with their speakers' cast entries
    Monologues {
        /// Gender filter: ALL, FEMALE, MALE (unknown genders always pass)
        #[arg(short, long, default_value = "ALL")]
        gender: String,

        /// Smallest monologue length in lines
        #[arg(short = 'n', long, default_value_t = i64::from(DEFAULT_MIN_LINE_COUNT), allow_negative_numbers = true)]
        min_lines: i64,

        /// Play short codes (e.g., "Ham", "Rom"); omit to search every play
        #[arg(short, long = "play")]
        plays: Vec<String>,

        /// Fetch every monologue and add readability scores (one request per row)
        #[arg(long)]
        complexity: bool,

        /// Download the text of this row (1-based) instead of printing
        #[arg(long)]
        download: Option<usize>,

        /// Directory for downloaded files
        #[arg(short = 'O', long, default_value = ".")]
        output_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    // Logs go to stderr so printed tables stay clean on stdout
    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    let endpoints = Endpoints {
        corpus: cli.corpus_url,
        word_count_site: cli.word_count_url,
        digital_text_site: cli.text_url,
    };

    match cli.command {
        Commands::Plays {
            min_cast,
            length,
            complexity,
            detail,
            download,
            output_dir,
        } => {
            let config = PlayCatalogConfig::from_args(min_cast, length.as_deref(), complexity.as_deref())?;
            let sources = Sources::new(HttpFetcher::new()?, endpoints);
            let catalog = PlayCatalog::fetch(&sources, config).await?;

            if let Some(row) = download {
                let path = catalog.download_script(&sources, row, &output_dir).await?;
                tracing::info!(path = %path.display(), "Saved script as XML document");
            } else if detail {
                render::print_play_detail(&catalog.detail(), cli.format)?;
            } else {
                render::print_play_summary(&catalog.summary(), cli.format)?;
            }
        }
        Commands::Monologues {
            gender,
            min_lines,
            plays,
            complexity,
            download,
            output_dir,
        } => {
            let include_all = plays.is_empty();
            let selected = (!include_all).then_some(plays.as_slice());
            let config = MonologueCatalogConfig::from_args(&gender, min_lines, include_all, selected)?;
            let sources = Sources::new(HttpFetcher::new()?, endpoints);
            let mut catalog = MonologueCatalog::fetch(&sources, config).await?;

            if let Some(row) = download {
                let path = catalog.download_script(&sources, row, &output_dir).await?;
                tracing::info!(path = %path.display(), "Saved monologue as text document");
            } else if complexity {
                let rows = catalog.complexity(&sources).await?;
                render::print_monologues(rows, true, cli.format)?;
            } else {
                render::print_monologues(catalog.summary(), false, cli.format)?;
            }
        }
    }

    Ok(())
}
