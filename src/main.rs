//! Course quotes HTTP server.

use anyhow::Context;
use clap::Parser;
use course_quotes::api::rest::{AppState, create_router};
use course_quotes::application::services::QuoteEngine;
use course_quotes::application::use_cases::CalculateQuotesUseCase;
use course_quotes::config::AppConfig;
use course_quotes::infrastructure::catalog::{CatalogSource, JsonFileCatalogSource};
use course_quotes::telemetry;
use std::path::PathBuf;
use std::sync::Arc;

/// Command-line arguments. Values given here override file and environment.
#[derive(Debug, Parser)]
#[command(name = "course-quotes", version, about)]
struct Cli {
    /// Configuration file (defaults to config/default.toml if present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Provider catalog JSON file.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Bind host.
    #[arg(long)]
    host: Option<String>,

    /// Bind port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let builder = AppConfig::builder(cli.config.as_deref())?
        .set_override_option("server.host", cli.host)
        .and_then(|b| b.set_override_option("server.port", cli.port.map(i64::from)))
        .and_then(|b| {
            b.set_override_option(
                "catalog.path",
                cli.catalog.map(|p| p.to_string_lossy().into_owned()),
            )
        })
        .context("invalid command-line override")?;
    let config = AppConfig::from_builder(builder)?;

    telemetry::init_tracing(&config.log)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        empty_topics = %config.quotes.empty_topics,
        "starting course quotes service"
    );

    let source = JsonFileCatalogSource::new(&config.catalog.path);
    let catalog = source.load().await.map_err(|e| {
        tracing::error!(error = %e, source = %source.describe(), "failed to load provider catalog");
        e
    })?;

    let engine = Arc::new(QuoteEngine::with_defaults(Arc::new(catalog)));
    let use_case = CalculateQuotesUseCase::new(engine, config.quotes.empty_topics);
    let app = create_router(Arc::new(AppState::new(use_case)));

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
