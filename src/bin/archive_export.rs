//! Catalog export tool for the exoplanet proxy.
//!
//! Talks to the same TAP endpoint as the HTTP service, without going through
//! the HTTP layer.
//!
//! # Usage
//!
//! ```bash
//! # Download the full confirmed-planet catalog into ./public/data
//! cargo run --bin archive-export -- download
//!
//! # Custom directory and timeout
//! cargo run --bin archive-export -- download --output-dir data --timeout-secs 120
//!
//! # Run a single system lookup
//! cargo run --bin archive-export -- systems "Kepler-11"
//! ```
//!
//! # Environment Variables
//!
//! - `ARCHIVE_URL` (optional): TAP sync endpoint
//! - `ARCHIVE_USER_AGENT` (optional): `User-Agent` sent upstream

use exoplanet_proxy::application::services::{CatalogService, ExoplanetService};
use exoplanet_proxy::config::{DEFAULT_ARCHIVE_TIMEOUT_MS, DEFAULT_ARCHIVE_URL, DEFAULT_USER_AGENT};
use exoplanet_proxy::domain::entities::{CatalogMetadata, CatalogSummary};
use exoplanet_proxy::infrastructure::archive::{ArchiveSettings, TapArchiveClient};
use exoplanet_proxy::infrastructure::export::{write_catalog_csv, write_metadata};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Exports data from the NASA Exoplanet Archive.
#[derive(Parser)]
#[command(name = "archive-export")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download and clean the full confirmed-planet catalog
    Download {
        /// Directory receiving exoplanet_data.csv and metadata.json
        #[arg(short, long, default_value = "public/data")]
        output_dir: PathBuf,

        /// Upstream request timeout in seconds
        #[arg(short, long, default_value_t = 60)]
        timeout_secs: u64,
    },

    /// Look up the planets of every host whose name starts with PREFIX
    Systems {
        prefix: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Download {
            output_dir,
            timeout_secs,
        } => download(output_dir, Duration::from_secs(timeout_secs)).await?,
        Commands::Systems { prefix } => systems(&prefix).await?,
    }

    Ok(())
}

/// Builds an archive client from `ARCHIVE_URL` / `ARCHIVE_USER_AGENT`.
fn archive_client(timeout: Duration) -> Result<TapArchiveClient> {
    let endpoint =
        std::env::var("ARCHIVE_URL").unwrap_or_else(|_| DEFAULT_ARCHIVE_URL.to_string());
    let user_agent =
        std::env::var("ARCHIVE_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

    let settings = ArchiveSettings {
        endpoint: Url::parse(&endpoint).context("Invalid ARCHIVE_URL")?,
        timeout,
        user_agent,
    };

    TapArchiveClient::new(settings).context("Failed to build archive client")
}

/// Downloads the catalog, writes the export files and prints a summary.
///
/// # Flow
///
/// 1. One archive query for every confirmed planet
/// 2. Clean rows and derive missing radii
/// 3. Write `exoplanet_data.csv` (skipped when nothing survives cleaning)
/// 4. Write `metadata.json`
/// 5. Print summary figures
async fn download(output_dir: PathBuf, timeout: Duration) -> Result<()> {
    println!("{}", "🪐 Download Exoplanet Catalog".bright_blue().bold());
    println!();

    let client = archive_client(timeout)?;
    let api_url = client.endpoint().to_string();
    let service = CatalogService::new(Arc::new(client));

    println!("  Querying {}", api_url.bright_black());
    let snapshot = service
        .download()
        .await
        .context("Catalog download failed")?;
    println!(
        "  Downloaded {} records",
        snapshot.total_records.to_string().bright_white().bold()
    );

    let summary = snapshot.summary();

    match write_catalog_csv(&output_dir, &snapshot.planets)? {
        Some(path) => println!("  {} {}", "Saved".green(), path.display()),
        None => println!("{}", "  No valid records, CSV not written".yellow()),
    }

    let metadata = CatalogMetadata::new(&summary, snapshot.downloaded_at, api_url);
    let metadata_path = write_metadata(&output_dir, &metadata)?;
    println!("  {} {}", "Saved".green(), metadata_path.display());
    println!();

    print_summary(&summary);

    Ok(())
}

/// Prints the catalog summary.
///
/// # Output Format
///
/// ```text
/// 📊 Summary
///
///   Total records:      5834
///   Valid records:      5502
///   Unique systems:     4123
///   Discovery years:    1992 - 2025
///   Period range:       0.09 - 402000000.00 days
///   Semi-major axis:    0.0044 - 19000.0000 AU
///
///   Top systems
///   KOI-351                        8 planets
/// ```
fn print_summary(summary: &CatalogSummary) {
    println!("{}", "📊 Summary".bright_blue().bold());
    println!();
    println!(
        "  Total records:      {}",
        summary.total_records.to_string().bright_white().bold()
    );
    println!(
        "  Valid records:      {}",
        summary.valid_records.to_string().bright_white().bold()
    );
    println!(
        "  Unique systems:     {}",
        summary.unique_systems.to_string().bright_white().bold()
    );

    if let Some((first, last)) = summary.discovery_years {
        println!("  Discovery years:    {first} - {last}");
    }
    if let Some((lo, hi)) = summary.period_range {
        println!("  Period range:       {lo:.2} - {hi:.2} days");
    }
    if let Some((lo, hi)) = summary.semi_major_axis_range {
        println!("  Semi-major axis:    {lo:.4} - {hi:.4} AU");
    }

    if !summary.top_systems.is_empty() {
        println!();
        println!("  {}", "Top systems".bright_white().bold());
        for (host, count) in &summary.top_systems {
            println!("  {:<30} {} planets", host.cyan(), count);
        }
    }
    println!();
}

/// Runs the per-system lookup and prints the retained planets.
async fn systems(prefix: &str) -> Result<()> {
    let timeout = Duration::from_millis(DEFAULT_ARCHIVE_TIMEOUT_MS);
    let service = ExoplanetService::new(Arc::new(archive_client(timeout)?));

    let system = service.get_exoplanets(prefix).await?;

    println!(
        "{} {} ({} planets)",
        "🪐".bright_blue(),
        system.system.bright_blue().bold(),
        system.planet_count()
    );
    println!();
    println!(
        "  {:<24} {:<20} {:>12} {:>10} {:>10} {:>10}",
        "Name".bright_white().bold(),
        "Host".bright_white().bold(),
        "Period (d)".bright_white().bold(),
        "R (Rj)".bright_white().bold(),
        "a (AU)".bright_white().bold(),
        "M (Me)".bright_white().bold()
    );
    println!("  {}", "─".repeat(92).bright_black());

    for planet in &system.planets {
        let mass = planet
            .mass
            .map(|m| format!("{m:.2}"))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<24} {:<20} {:>12.3} {:>10.3} {:>10.4} {:>10}",
            planet.name.cyan(),
            planet.hostname,
            planet.period,
            planet.radius,
            planet.semi_major_axis,
            mass.bright_black()
        );
    }
    println!();

    Ok(())
}
