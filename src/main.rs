// src/main.rs
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

mod config;
mod models;
mod people;

use config::{load_config, Config};
use models::{ParseReport, Result};
use people::PeopleParser;

#[derive(Debug, Parser)]
#[command(
    name = "people-scraper",
    about = "Extract person profiles from saved people-search HTML pages"
)]
struct Args {
    /// Saved HTML page to parse
    input: PathBuf,

    /// Origin used for root-relative profile links (e.g. https://de.linkedin.com)
    #[arg(long)]
    origin: Option<String>,

    /// YAML config file
    #[arg(long, default_value = "config.yml")]
    config: String,

    /// Write the JSON report to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON report, overriding the config file
    #[arg(long)]
    pretty: Option<bool>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("people_scraper=info".parse().unwrap()),
        )
        .init();

    let config = match load_config(&args.config).await {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load {}: {}. Using defaults.", args.config, e);
            Config::default()
        }
    };

    let mut parser_config = config.to_parser_config();
    if let Some(origin) = &args.origin {
        // Reduce the override to a bare origin so href concatenation stays
        // well-formed.
        let parsed = Url::parse(origin)?;
        parser_config.origin = parsed.origin().ascii_serialization();
    }

    let html = tokio::fs::read_to_string(&args.input).await?;
    let parser = PeopleParser::new(parser_config);
    let profiles = parser.parse(&html);

    let report = ParseReport::new(args.input.display().to_string(), profiles);
    let pretty = args.pretty.unwrap_or(config.output.pretty_json);
    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &json).await?;
            info!("Wrote {} profiles to {}", report.total_profiles, path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
