//! RAX Auth Server - Entry Point
//!
//! A small credential verification service speaking JSON over HTTP.

use log::{error, info};
use std::sync::Arc;

use rax_auth_server::Server;
use rax_auth_server::config::ServerConfig;
use rax_auth_server::store::JsonFileStore;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching auth server...");

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let store = Arc::new(JsonFileStore::new(config.users_file_path()));

    let server = match Server::bind(&config, store).await {
        Ok(server) => server,
        Err(e) => {
            error!("Server startup failed: {}", e);
            std::process::exit(1);
        }
    };

    server.start().await;
}
