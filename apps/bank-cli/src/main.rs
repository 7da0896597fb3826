//! # SpringBank CLI
//!
//! Terminal front-end for the SpringBank API: customer and back-office
//! commands over the client SDK.

use clap::Parser;

mod commands;
mod config;
mod context;

use config::AppConfig;
use context::AppContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = commands::Cli::parse();
    let config = AppConfig::from_env();
    let ctx = AppContext::new(&config);

    // Rehydrate the persisted session before any guard decision.
    ctx.session.init().await?;

    commands::dispatch(&ctx, cli.command).await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,bank_cli=info,springbank_infra=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}
