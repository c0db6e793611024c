//! Maps scraper CLI
//!
//! Runs one scrape against Google Maps and writes the result set next to
//! the working directory. Ctrl-C requests a cooperative stop; whatever was
//! scraped before the stop is still exported.

use anyhow::Context;
use clap::Parser;
use maps_scraper::{export, ScrapeOptions, Scraper};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "maps-scraper",
    version,
    about = "Scrape Google Maps listings into CSV/XLSX"
)]
struct Cli {
    /// Search query or full Google Maps URL
    input: String,

    /// Launch the browser with a visible window
    #[arg(long)]
    headed: bool,

    /// Use a specific Chrome/Chromium binary instead of the system default
    #[arg(long, value_name = "PATH")]
    chrome_path: Option<PathBuf>,

    /// Maximum number of listings to collect (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_listings: usize,

    /// Seconds to wait after each scroll and listing load
    #[arg(long, default_value_t = 1.0, value_name = "SECS")]
    scroll_delay: f64,

    /// Output format
    #[arg(long, value_parser = ["csv", "xlsx", "both"], default_value = "both")]
    format: String,

    /// Directory to write output files into
    #[arg(long, default_value = ".", value_name = "DIR")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut options = ScrapeOptions::new(cli.input.as_str())
        .headless(!cli.headed)
        .max_listings(cli.max_listings)
        .scroll_delay(Duration::from_secs_f64(cli.scroll_delay));
    if let Some(path) = &cli.chrome_path {
        options = options.use_system_browser(false).chrome_path(path);
    }

    let scraper = Scraper::new(options);

    let cancel = scraper.cancel_token();
    ctrlc::set_handler(move || {
        log::warn!("stop requested; finishing the current listing");
        cancel.cancel();
    })
    .context("failed to install the Ctrl-C handler")?;

    let outcome = scraper.run()?;

    if outcome.places.is_empty() {
        log::warn!("no listings scraped; nothing to export");
        return Ok(());
    }

    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;

    if cli.format == "csv" || cli.format == "both" {
        let path = cli.output.join(format!("{}.csv", outcome.file_stem));
        std::fs::write(&path, export::to_csv(&outcome.places)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    if cli.format == "xlsx" || cli.format == "both" {
        let path = cli.output.join(format!("{}.xlsx", outcome.file_stem));
        std::fs::write(&path, export::to_xlsx(&outcome.places)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    if outcome.cancelled {
        log::info!(
            "stopped early with {} records ({} skipped, {} duplicates)",
            outcome.stats.scraped,
            outcome.stats.skipped,
            outcome.stats.duplicates
        );
    } else {
        log::info!(
            "finished with {} records ({} skipped, {} duplicates)",
            outcome.stats.scraped,
            outcome.stats.skipped,
            outcome.stats.duplicates
        );
    }

    Ok(())
}
