use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use medisense::analysis::HttpGenClient;
use medisense::api::{self, ApiContext};
use medisense::config;
use medisense::store::{KvStore, MemoryStore, SqliteStore};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("MediSense starting v{}", config::APP_VERSION);

    // Conversations survive restarts through the on-disk store; if it
    // cannot be opened the app still serves, without persistence.
    let store: Arc<dyn KvStore> = match SqliteStore::open(&config::store_path()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "cannot open on-disk store, using in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    let client = Arc::new(HttpGenClient::from_env());
    let ctx = ApiContext::new(store, client);

    let mut server = api::server::start(ctx, config::bind_addr())
        .await
        .expect("error while starting MediSense");

    tracing::info!(addr = %server.addr, "MediSense ready");

    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for shutdown signal");
    server.shutdown();
}
