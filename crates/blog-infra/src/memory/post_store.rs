//! In-memory post store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{Post, PostFields, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// Post store backed by a `Vec` behind an async RwLock.
///
/// The vector keeps insertion order. Each mutation holds the write lock for
/// its whole lookup-and-modify step, so calls never interleave.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    fn not_found(id: &str) -> RepoError {
        RepoError::NotFound { id: id.to_string() }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn create(&self, fields: PostFields) -> Post {
        let post = Post::new(fields);
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        tracing::debug!(post_id = %post.id, total = posts.len(), "Stored post");
        post
    }

    async fn find_all(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    async fn find_by_id(&self, id: &str) -> Result<Post, RepoError> {
        let posts = self.posts.read().await;
        posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn update(&self, id: &str, patch: PostPatch) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        post.apply(patch);
        tracing::debug!(post_id = %id, "Updated post");
        Ok(post.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|post| post.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        posts.remove(index);
        tracing::debug!(post_id = %id, total = posts.len(), "Removed post");
        Ok(())
    }

    async fn count(&self) -> usize {
        self.posts.read().await.len()
    }
}
