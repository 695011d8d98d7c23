use std::cmp::Ordering;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use versioning::config::{self, FormatConfig};
use versioning::version::checker::{compare_versions, sort_versions};
use versioning::{Version, VersionPart, parse_version};

#[derive(Parser)]
#[command(name = "versioning")]
#[command(version, about = "Parse, compare and normalize loosely-structured version strings")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/versioning/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the parts and renderings of a version
    Parse {
        raw: String,
        #[arg(long)]
        json: bool,
    },
    /// Compare two versions
    Compare { a: String, b: String },
    /// Print versions in ascending order
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParseReport<'a> {
    original: &'a str,
    friendly: String,
    data: String,
    parts: &'a [VersionPart],
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config_path = cli.config.unwrap_or_else(config::config_path);
    let format = FormatConfig::load(&config_path)?;

    match cli.command {
        Command::Parse { raw, json } => {
            let version = parse_version(&raw)?;
            let report = ParseReport {
                original: version.original_string(),
                friendly: format.friendly(&version),
                data: format.data(&version),
                parts: version.parts(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("original: {}", report.original);
                println!("friendly: {}", report.friendly);
                println!("data:     {}", report.data);
                for part in report.parts {
                    println!("  {:?}", part);
                }
            }
        }
        Command::Compare { a, b } => {
            let left = parse_version(&a)?;
            let right = parse_version(&b)?;
            let symbol = match left.compare_to(&right) {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            println!(
                "{} {} {} ({:?})",
                format.friendly(&left),
                symbol,
                format.friendly(&right),
                compare_versions(&a, &b)
            );
        }
        Command::Sort { versions } => {
            let mut parsed: Vec<Version> = versions
                .iter()
                .filter_map(|raw| {
                    parse_version(raw)
                        .inspect_err(|e| warn!("Skipping '{}': {}", raw, e))
                        .ok()
                })
                .collect();
            sort_versions(&mut parsed);
            for version in &parsed {
                println!("{}", version.original_string());
            }
        }
    }

    Ok(())
}
