use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::content::ContentRepository;
use crate::portfolio::Portfolio;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The one mounted page. Only the navigation handlers take the write lock.
    pub portfolio: Arc<RwLock<Portfolio>>,
}

impl AppState {
    pub fn new(config: Config, content: ContentRepository) -> Self {
        Self {
            config,
            portfolio: Arc::new(RwLock::new(Portfolio::new(Arc::new(content)))),
        }
    }
}
