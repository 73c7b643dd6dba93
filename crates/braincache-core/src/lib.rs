pub mod config;
pub mod error;
pub mod paths;
pub mod policy;
pub mod services;
pub mod storage;

pub use config::AppConfig;
pub use error::{CoreError, Result};

use std::sync::Arc;
use storage::Storage;
use tracing::info;

/// Core application state shared by the API server and tests.
///
/// Holds the typed storage layer and the configuration injected once at
/// startup. Nothing below this point reads ambient state.
pub struct AppCore {
    pub storage: Arc<Storage>,
    pub config: AppConfig,
}

impl AppCore {
    pub async fn new(db_path: &str, config: AppConfig) -> anyhow::Result<Self> {
        let storage = Arc::new(Storage::new(db_path)?);

        info!(
            free_space_limit = config.free_space_limit,
            "Initializing BrainCache core"
        );

        Ok(Self { storage, config })
    }
}
