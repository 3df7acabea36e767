//! Shift management HTTP server.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use shift_management::api::{AppState, create_router};
use shift_management::config::ConfigLoader;
use shift_management::logging;

#[derive(Debug, Parser)]
#[command(name = "shift-management", version, about = "Shift management HTTP server")]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(short, long, default_value = "./config/shift_management.yaml")]
    config: PathBuf,

    /// Override the bind address from the configuration.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut loader = match ConfigLoader::load(&args.config) {
        Ok(loader) => loader,
        Err(err) => {
            eprintln!("warning: {err}; using default configuration");
            ConfigLoader::default()
        }
    };
    if let Some(bind) = args.bind {
        loader.set_bind_addr(bind);
    }

    logging::init(loader.log_level());

    let bind_addr = loader.bind_addr().to_string();
    info!(
        bind_addr = %bind_addr,
        locale = ?loader.locale(),
        company_id = %loader.company_id(),
        "Starting shift management server"
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    let router = create_router(AppState::new(loader));

    axum::serve(listener, router)
        .await
        .context("server error")?;

    Ok(())
}
