use anyhow::Context;
use clap::Parser;
use modelist::{
    OpenAiProvider,
    config::{Args, Config},
    error::ListingError,
    listing,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.default_log_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = Config::try_from(args).context("Invalid configuration")?;
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "starting model listing");

    let mut stdout = std::io::stdout().lock();

    match build_client(&config) {
        Ok(client) => {
            let provider = OpenAiProvider::new(client, config.api_key().to_owned())
                .url(config.base_url.clone());
            listing::execute(&provider, config.format, &mut stdout).await;
        }
        Err(err) => listing::report_failure(&err, &mut stdout),
    }

    Ok(())
}

fn build_client(config: &Config) -> Result<reqwest::Client, ListingError> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| ListingError::Unknown(anyhow::Error::new(e)))
}
