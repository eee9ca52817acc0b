use std::io;

use thiserror::Error;
use tracing::{error, info, warn};

use pexels_search::{Client, Config, output, pexels};

#[derive(Debug, Error)]
enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Pexels(#[from] pexels::Error),

    #[error("Could not locate the configuration directory")]
    ConfigDir,
}

type Result<T> = core::result::Result<T, Error>;

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let path = dirs::config_dir()
        .ok_or(Error::ConfigDir)?
        .join("PexelsSearch");

    let config = Config::load(&path)?;

    let client = Client::new_from_env(&config.client)?;

    let result = client
        .search_photos(&config.query, config.per_page, config.page)
        .await?;

    if !result.is_usable() {
        warn!("Search result is unusable");
    }

    println!("{:#?}", result);

    output::write_result(&config.output, &result)?;
    info!(
        path = %config.output.display(),
        photos = result.photos().len(),
        remaining_quota = client.remaining_quota(),
        "Search result saved"
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        error!("{}", e);
    }
}
