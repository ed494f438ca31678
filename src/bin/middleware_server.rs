//! Pattern 6: HTTP Middleware
//!
//! Run with: cargo run --bin middleware_server [config.toml]
//!
//! Then try:
//!   curl -i http://localhost:8080/hello              (401)
//!   curl -i 'http://localhost:8080/hello?user=admin' (200, logs one line)

use std::path::PathBuf;

use event_patterns::{logging, middleware, ServerConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = match ServerConfig::load_or_default(path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    logging::init(&config.log_filter);

    tokio::select! {
        result = middleware::serve(&config) => {
            if let Err(err) = result {
                error!("{err}");
                std::process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => info!("Shutting down"),
    }
}
