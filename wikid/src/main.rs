use wikid::{client::WikiClient, config::WikiConfig, session};

use anyhow::{Context, Result};
use dotenv::dotenv;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();

    // logs go to stderr so they never interleave with the screen on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = WikiConfig::from_env();
    info!(
        api_url = %cfg.api_url,
        timeout_ms = cfg.timeout_ms,
        accent = %cfg.accent_color,
        "wikid starting"
    );

    let client = WikiClient::from_config(&cfg).context("building http client")?;
    session::run_session(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        client,
        cfg.accent_color.clone(),
        cfg.colors,
    )
    .await
}
