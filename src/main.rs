use std::process;

use tracing::{error, info};
use trip_reports::api::{create_router, AppState};
use trip_reports::config::ConfigLoader;

const DEFAULT_CONFIG_PATH: &str = "./config/app.yaml";

#[tokio::main]
async fn main() {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let loader = match ConfigLoader::load(&config_path) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            &loader.config().logging.level,
        ))
        .init();

    info!(config = %config_path, "Starting trip reports server");

    let repository = match loader.load_dataset() {
        Ok(repository) => repository,
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            process::exit(1);
        }
    };

    let router = create_router(AppState::from_repository(repository));
    let address = loader.config().server.bind_address();

    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address = %address, "Failed to bind listener: {}", e);
            process::exit(1);
        }
    };

    info!(address = %address, "Listening");
    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        process::exit(1);
    }
}
