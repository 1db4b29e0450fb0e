use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use swapi_catalog::cli::{self, Cli};
use swapi_catalog::{config, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
        config.validate()?;
    }

    init_tracing(&config);
    config.print_summary();

    let state = AppState::new(&config)?;

    cli::run(args.command, state).await
}

fn init_tracing(config: &config::Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
