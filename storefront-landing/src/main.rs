use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Target};
use log::{LevelFilter, info};
use tokio::sync::mpsc;

use storefront_landing::infra::services::LogNotifier;
use storefront_landing::infra::{ApiClient, LandingConfig, ViewportSignal};
use storefront_landing::view::render_page;
use storefront_landing::{LandingPage, PageOptions};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "storefront-landing")]
#[command(about = "Mount the storefront landing page and render it to HTML")]
struct Cli {
    /// Backend base URL (overrides config)
    #[arg(long, env = "STOREFRONT_SERVER_URL")]
    server_url: Option<String>,

    /// Viewport width in pixels; unknown widths render the desktop layout
    #[arg(long, env = "STOREFRONT_VIEWPORT")]
    width: Option<u32>,

    /// Config file to read instead of the per-user default
    #[arg(long, env = "STOREFRONT_CONFIG")]
    config: Option<PathBuf>,

    /// Keep the page running (autoplay included) for this many seconds
    /// before rendering
    #[arg(long)]
    run_for: Option<u64>,

    /// Write the markup here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("storefront_landing", LevelFilter::Info)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(_) | Err(dotenvy::Error::Io(_)) => {}
        Err(err) => return Err(err).context("failed to read .env"),
    }

    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => LandingConfig::load_from(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => LandingConfig::load(),
    };
    if let Some(url) = cli.server_url {
        config.server_url = url;
    }
    if cli.width.is_some() {
        config.viewport_width = cli.width;
    }

    let client = ApiClient::new(&config.server_url, config.request_timeout())
        .context("invalid server URL")?;
    info!("Using backend {}", client.base_url());

    let viewport = ViewportSignal::new(config.viewport_width);
    let options = PageOptions {
        autoplay: cli.run_for.is_some(),
        ..PageOptions::from_config(&config)
    };
    let mut page = LandingPage::mount(
        Arc::new(client),
        Arc::new(LogNotifier),
        Some(viewport.subscribe()),
        options,
    )
    .await;

    if let Some(secs) = cli.run_for {
        // The sender stays alive so the loop keeps waiting for commands.
        let (_commands_tx, commands_rx) = mpsc::channel(16);
        page.run(commands_rx, tokio::time::sleep(Duration::from_secs(secs)))
            .await;
    }

    let markup = render_page(&page.view()).into_string();
    page.unmount();

    match cli.output {
        Some(path) => {
            std::fs::write(&path, markup)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{markup}"),
    }
    Ok(())
}
