//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::{InMemoryPostStore, seed_sample_posts};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Build the state for a running server.
    pub async fn from_config(config: &AppConfig) -> Self {
        let store = Arc::new(InMemoryPostStore::new());
        if config.seed_sample_posts {
            seed_sample_posts(store.as_ref()).await;
        }

        tracing::info!("Application state initialized");

        Self::new(store)
    }
}
