mod api;
mod dataset;
mod recipe;
mod selection;
mod settings;
mod web;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    dataset::Dataset,
    settings::{Args, Settings},
    web::Tls,
};

const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Err(e) = run().await {
        error!("{e:#}");
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::from_file(&args.config).with_context(|| {
        format!(
            "Problem while loading settings from {}",
            args.config.display()
        )
    })?;
    info!("Price Dashboard Server");

    let dataset = Dataset::load(
        &settings.data.records,
        settings.data.important_dates.as_deref(),
    )
    .context("Problem while loading the dataset")?;

    let tls = args.cert.zip(args.key).map(|(cert, key)| Tls { cert, key });
    let schema = api::schema(dataset);
    web::serve(schema, settings.web.address, tls).await;
    Ok(())
}
