use anyhow::Result;
use portfolio::build::build_site;
use portfolio::config::Config;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    init_logger();

    let config = Config::new(Path::new("."))?;
    let report = build_site(&config)?;
    tracing::info!(
        articles = report.articles,
        skipped_articles = report.skipped_articles,
        assets = report.assets,
        skipped_assets = report.skipped_assets,
        "build finished"
    );

    println!("Portfolio site generated in 'dist' directory!");
    Ok(())
}
