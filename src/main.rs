//! Campus-Roster main entry point
//!
//! This is the command-line interface for the directory crawler. Each
//! entity kind (staff, groups) is one independent unit of work: crawl the
//! listing, persist the mapping, report the count. A failure in one kind
//! is reported and does not stop the other.

use campus_roster::config::{load_config, Config};
use campus_roster::crawler::{crawl_groups, crawl_staff, Fetcher};
use campus_roster::{output, CrawlError};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Campus-Roster: a staff and study-group directory scraper
///
/// Campus-Roster walks the public staff listing and the per-faculty
/// schedule listings of a campus site and writes each as a JSON mapping
/// from display name to numeric identifier.
#[derive(Parser, Debug)]
#[command(name = "campus-roster")]
#[command(version = "1.0.0")]
#[command(about = "A staff and study-group directory scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (compiled-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Crawl only the staff listing
    #[arg(long, conflicts_with = "groups_only")]
    staff_only: bool,

    /// Crawl only the group listing
    #[arg(long, conflicts_with = "staff_only")]
    groups_only: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or fall back to the compiled-in defaults
    let config = match cli.config {
        Some(ref path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config(path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => Config::default(),
    };

    let fetcher = match Fetcher::new(&config.site, &config.fetcher) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // The two crawls are independent; a failure in one is terminal for
    // that entity kind only. Whatever was persisted before a failure
    // stays on disk.
    let mut failed = false;

    if !cli.groups_only {
        if let Err(e) = handle_staff(&fetcher, &config).await {
            tracing::error!("Staff crawl failed: {}", e);
            failed = true;
        }
    }

    if !cli.staff_only {
        if let Err(e) = handle_groups(&fetcher, &config).await {
            tracing::error!("Group crawl failed: {}", e);
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("campus_roster=info,warn"),
            1 => EnvFilter::new("campus_roster=debug,info"),
            2 => EnvFilter::new("campus_roster=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Crawls the staff listing and persists the resulting mapping
async fn handle_staff(fetcher: &Fetcher, config: &Config) -> Result<(), CrawlError> {
    println!("Crawling staff directory...");
    let catalog = crawl_staff(fetcher, &config.site.base_url).await?;
    output::write_catalog(Path::new(&config.output.staff_path), &catalog)?;
    println!(
        "Saved {} staff entries to {}",
        catalog.len(),
        config.output.staff_path
    );
    Ok(())
}

/// Crawls the group listings and persists the resulting mapping
async fn handle_groups(fetcher: &Fetcher, config: &Config) -> Result<(), CrawlError> {
    println!("Crawling group listings...");
    let catalog = crawl_groups(fetcher, &config.site.base_url).await?;
    output::write_catalog(Path::new(&config.output.groups_path), &catalog)?;
    println!(
        "Saved {} group entries to {}",
        catalog.len(),
        config.output.groups_path
    );
    Ok(())
}
