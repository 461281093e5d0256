use std::sync::Arc;

use clap::Parser;
use koto_config::Config;
use koto_config::logging::LoggingConfig;
use koto_core::state::AppState;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod display;


use self::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    init_tracing(&config.logging);
    tracing::debug!("koto v{} starting", env!("CARGO_PKG_VERSION"));

    let state = Arc::new(AppState::new(config));
    if let Some(store) = cli.store {
        state.set_store_path(store).await;
    }
    let output = commands::run(state, cli.command).await?;
    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}

/// Logs go to stderr so command output stays pipeable
fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
