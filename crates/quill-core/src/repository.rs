use crate::error::Result;
use crate::post::{Post, PostId};
use async_trait::async_trait;

/// A read-only view of a post store.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Returns every stored post. No ordering is guaranteed.
    async fn find_all(&self) -> Result<Vec<Post>>;

    /// Retrieves the post with the given id.
    /// Returns `None` if the id does not exist.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>>;

    /// Returns the posts whose title contains `title`, ignoring case.
    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Post>>;

    /// Returns the posts whose published flag equals `published`.
    async fn find_by_published(&self, published: bool) -> Result<Vec<Post>>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Persists a post and returns the stored record.
    ///
    /// A post without an id is inserted and receives a fresh, positive id.
    /// A post with an id overwrites the record stored under that id.
    async fn save(&self, post: Post) -> Result<Post>;

    /// Removes the post with the given id. Absent ids are not an error.
    async fn delete_by_id(&self, id: PostId) -> Result<()>;

    /// Removes every post.
    async fn delete_all(&self) -> Result<()>;
}
