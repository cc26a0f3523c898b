//! Service entry point: reads configuration, wires the store and the routing
//! table, serves until SIGTERM or Ctrl-C.

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use contacts::api::{self, AppState};
use contacts::config::Config;
use contacts::{MemoryStore, Server, telemetry};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let config = Config::parse();
    telemetry::init(config.log_format);

    match run(config).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server failed");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), contacts::Error> {
    let store = Arc::new(MemoryStore::new());
    let state = Arc::new(AppState::new(store, &config.ui_dir));
    info!(ui_dir = %config.ui_dir.display(), "contact store ready");

    Server::bind(&config.addr)
        .await?
        .body_limit(config.max_body_bytes)
        .serve(api::routes(state))
        .await
}
