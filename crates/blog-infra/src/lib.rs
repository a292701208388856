//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! Posts are kept in process memory only and are lost on restart.

pub mod memory;

pub use memory::{InMemoryPostStore, seed_sample_posts};
