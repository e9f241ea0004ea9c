mod config;
mod error;
mod models;
mod output;
mod scrapers;

use chrono::Local;
use config::{Config, DEFAULT_CONFIG_PATH};
use scrapers::{HttpFetcher, IdealistaScraper};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let started = Local::now();
    info!("🏠 Idealista Scout");

    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path).await?;
    let settings = config.settings();

    let scraper = IdealistaScraper::new(HttpFetcher::new(&settings)?, settings);

    // Ctrl-C drops the walk and everything collected so far
    let homes = tokio::select! {
        homes = scraper.collect(&config.url) => homes,
        _ = tokio::signal::ctrl_c() => {
            println!("\nProgram terminated by user.");
            std::process::exit(130);
        }
    };

    if homes.is_empty() {
        return Ok(());
    }

    info!("✅ Scraped {} homes", homes.len());
    output::print_table(&homes);
    output::save_to_json(&homes, &config.output).await?;

    let elapsed = (Local::now() - started).num_milliseconds() as f64 / 1000.0;
    info!("Finished in {:.1} s", elapsed);

    Ok(())
}
