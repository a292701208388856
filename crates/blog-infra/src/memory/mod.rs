//! In-memory storage.

mod post_store;
mod seed;

pub use post_store::InMemoryPostStore;
pub use seed::seed_sample_posts;
