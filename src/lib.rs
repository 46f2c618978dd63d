pub mod audit;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod query;
pub mod rest;
pub mod staff;
pub mod store;

use std::sync::Arc;

use config::ServerConfig;
use lifecycle::TaskLifecycle;
use query::TaskQueries;
use staff::StaffDirectory;
use store::TaskStore;

/// Shared application state passed to every route handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    /// Canonical task collection. All components receive it via construction,
    /// never through ambient global state.
    pub store: Arc<TaskStore>,
    pub staff: Arc<StaffDirectory>,
    pub lifecycle: Arc<TaskLifecycle>,
    pub queries: Arc<TaskQueries>,
    pub started_at: std::time::Instant,
}

impl AppContext {
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(TaskStore::new());
        Self {
            config: Arc::new(config),
            lifecycle: Arc::new(TaskLifecycle::new(store.clone())),
            queries: Arc::new(TaskQueries::new(store.clone())),
            staff: Arc::new(StaffDirectory::with_sample_data()),
            store,
            started_at: std::time::Instant::now(),
        }
    }
}
