//! Sample posts loaded at startup.

use blog_core::domain::PostFields;
use blog_core::ports::PostRepository;

const SAMPLE_POSTS: [(&str, &str, &str, &str); 2] = [
    (
        "cows",
        "You will never expect these 10 cow things",
        "Cow Expert",
        "01/01/2017",
    ),
    (
        "dogs",
        "You will never expect these 10 dogs things",
        "Dog Expert",
        "01/02/2017",
    ),
];

/// Insert the sample posts into `store`, returning how many were added.
pub async fn seed_sample_posts(store: &dyn PostRepository) -> usize {
    for (title, content, author, publish_date) in SAMPLE_POSTS {
        store
            .create(PostFields {
                title: title.to_string(),
                content: content.to_string(),
                author: author.to_string(),
                publish_date: publish_date.to_string(),
            })
            .await;
    }
    tracing::info!(count = SAMPLE_POSTS.len(), "Seeded sample posts");
    SAMPLE_POSTS.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryPostStore;

    #[tokio::test]
    async fn test_seed_adds_cows_then_dogs() {
        let store = InMemoryPostStore::new();
        assert_eq!(seed_sample_posts(&store).await, 2);

        let posts = store.find_all().await;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "cows");
        assert_eq!(posts[1].author, "Dog Expert");
        assert_ne!(posts[0].id, posts[1].id);
    }
}
