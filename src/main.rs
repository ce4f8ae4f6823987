//! Command-line entry point for the webworker server.
//!
//! Usage: `webworker [CONFIG.json]`. Without a configuration file the
//! defaults apply; `WEBWORKER_ADDR` overrides the listen address either way.

use log::info;
use webworker::{HttpServer, ServerConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from {path}");
            ServerConfig::from_json_file(&path)?
        }
        None => ServerConfig::default(),
    }
    .with_env_overrides()?;

    HttpServer::new(config).start().await
}
