use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use duration_timestamp::config::AppConfig;
use duration_timestamp::youtube::extract_youtube_id_from_html;
use duration_timestamp::{
    format_named, format_timestamp, parse_timestamp, DecorateConfig, Decorator, Style,
    TimestampScanner, VideoContext,
};

#[derive(Parser)]
#[command(name = "timestamps")]
#[command(about = "Find, parse, format and replace duration timestamps")]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the first timestamp in a piece of text
    Parse {
        text: String,

        /// Print the parsed value as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a timestamp and render it in another style
    Format {
        text: String,

        /// numeric, seconds, tiny, short, medium or long
        #[arg(long, default_value = "short")]
        style: String,
    },

    /// List every timestamp found in the input
    Find {
        /// Input file (default: stdin)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Only match timestamps followed by this pattern
        #[arg(long)]
        suffix: Option<String>,
    },

    /// Rewrite every timestamp in the input into a style
    Replace {
        /// Input file (default: stdin)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Target style (default: from config)
        #[arg(long)]
        style: Option<String>,

        /// Only rewrite timestamps followed by this pattern
        #[arg(long)]
        suffix: Option<String>,
    },

    /// Print the YouTube video id found in an HTML document
    ExtractId {
        /// Input file (default: stdin)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Link suffixed timestamps in an HTML fragment to a YouTube video
    Decorate {
        /// HTML fragment (default: stdin)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Enclosing page, searched when the fragment has no video id
        #[arg(long)]
        page: Option<PathBuf>,

        /// Video id to use when none is found in the markup
        #[arg(long)]
        video_id: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    init_tracing(
        cli.log_level.as_deref().unwrap_or(&config.log_level),
        cli.json_logs,
    );

    tracing::debug!("Starting timestamps v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Parse { text, json } => match parse_timestamp(&text) {
            Some(ts) if json => println!("{}", serde_json::to_string_pretty(&ts)?),
            Some(ts) => {
                println!("Hours:   {}", display_part(ts.hours));
                println!("Minutes: {}", display_part(ts.minutes));
                println!("Seconds: {}", display_part(ts.seconds));
                println!("Total:   {}s", ts.total);
            }
            None => println!("no timestamp"),
        },
        Commands::Format { text, style } => {
            let ts = parse_timestamp(&text);
            match format_named(ts.as_ref(), &style)? {
                Some(rendered) => println!("{}", rendered),
                None => println!("no timestamp"),
            }
        }
        Commands::Find { file, suffix } => {
            let input = read_input(file.as_deref())?;
            let suffix = suffix.unwrap_or(config.replace.suffix_pattern);
            let scanner = TimestampScanner::with_suffix(&suffix)?;
            for span in scanner.find_all(&input) {
                println!("{}", serde_json::to_string(&span)?);
            }
        }
        Commands::Replace {
            file,
            style,
            suffix,
        } => {
            let input = read_input(file.as_deref())?;
            let style: Style = match style {
                Some(name) => name.parse()?,
                None => config.replace.style,
            };
            let suffix = suffix.unwrap_or(config.replace.suffix_pattern);
            let scanner = TimestampScanner::with_suffix(&suffix)?;
            let output = scanner.replace_all(&input, |ts| format_timestamp(ts, style));
            print!("{}", output);
        }
        Commands::ExtractId { file } => {
            let html = read_input(file.as_deref())?;
            let id = extract_youtube_id_from_html(&html);
            if id.is_empty() {
                tracing::warn!("No video id found");
            } else {
                println!("{}", id);
            }
        }
        Commands::Decorate {
            file,
            page,
            video_id,
        } => {
            let fragment = read_input(file.as_deref())?;
            let page = page
                .map(|p| {
                    std::fs::read_to_string(&p)
                        .with_context(|| format!("Failed to read page {}", p.display()))
                })
                .transpose()?;

            let decorator = build_decorator(config.decorate)?;
            let mut ctx = video_id.map(VideoContext::with_video_id).unwrap_or_default();

            match decorator.decorate(&fragment, page.as_deref(), &mut ctx) {
                Some(html) => print!("{}", html),
                None => {
                    tracing::info!("Nothing to decorate");
                    print!("{}", fragment);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_decorator(config: DecorateConfig) -> Result<Decorator> {
    Decorator::new(config).context("Invalid decorate.suffix_pattern")
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn display_part(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
