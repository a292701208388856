use async_trait::async_trait;

use crate::domain::{Post, PostFields, PostPatch};
use crate::error::RepoError;

/// Post repository - owns the collection of posts.
///
/// Every mutating call is atomic: implementations must not let another call
/// observe a half-applied create, update or delete.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a new post under a freshly generated id.
    async fn create(&self, fields: PostFields) -> Post;

    /// All posts, in insertion order.
    async fn find_all(&self) -> Vec<Post>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: &str) -> Result<Post, RepoError>;

    /// Replace the fields present in `patch` on the post with this id.
    async fn update(&self, id: &str, patch: PostPatch) -> Result<Post, RepoError>;

    /// Remove the post with this id.
    async fn delete(&self, id: &str) -> Result<(), RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> usize;
}
