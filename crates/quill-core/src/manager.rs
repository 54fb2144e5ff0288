use crate::error::ServiceError;
use crate::outcome::Outcome;
use crate::post::{Post, PostDraft, PostId};
use async_trait::async_trait;

type Result<T> = std::result::Result<Outcome<T>, ServiceError>;

#[async_trait]
pub trait PostManager: Send + Sync + 'static {
    /// Lists every post, or only those whose title contains `title` ignoring case.
    async fn list(&self, title: Option<&str>) -> Result<Vec<Post>>;

    /// Fetches a single post.
    async fn get(&self, id: PostId) -> Result<Post>;

    /// Creates a post. The new post is always unpublished.
    async fn create(&self, draft: PostDraft) -> Result<Post>;

    /// Replaces every mutable field of an existing post.
    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post>;

    /// Deletes a post. Deleting an unknown id succeeds.
    async fn delete(&self, id: PostId) -> Result<()>;

    /// Deletes every post.
    async fn delete_all(&self) -> Result<()>;

    /// Lists the published posts.
    async fn list_published(&self) -> Result<Vec<Post>>;
}
