use async_trait::async_trait;
use dashmap::DashMap;
use quill_core::error::Result;
use quill_core::repository::{ReadRepository, Repository};
use quill_core::{Post, PostId};
use std::sync::atomic::{AtomicI64, Ordering};

/// In-memory implementation of the repository contract using DashMap.
///
/// Ids come from an atomic sequence starting at 1 and are never handed out
/// twice, even after the record holding them is deleted.
#[derive(Debug)]
pub struct InMemoryRepository {
    storage: DashMap<PostId, Post>,
    last_id: AtomicI64,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
            last_id: AtomicI64::new(0),
        }
    }

    fn next_id(&self) -> PostId {
        PostId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn collect<F>(&self, predicate: F) -> Vec<Post>
    where
        F: Fn(&Post) -> bool,
    {
        let mut posts: Vec<Post> = self
            .storage
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        posts.sort_by_key(|post| post.id);
        posts
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Post>> {
        Ok(self.collect(|_| true))
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>> {
        Ok(self.storage.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Post>> {
        let needle = title.to_lowercase();
        Ok(self.collect(|post| post.title.to_lowercase().contains(&needle)))
    }

    async fn find_by_published(&self, published: bool) -> Result<Vec<Post>> {
        Ok(self.collect(|post| post.published == published))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn save(&self, post: Post) -> Result<Post> {
        let id = match post.id {
            Some(id) => {
                // keep the sequence ahead of explicitly supplied ids
                self.last_id.fetch_max(id.get(), Ordering::SeqCst);
                id
            }
            None => self.next_id(),
        };

        let post = post.with_id(id);
        self.storage.insert(id, post.clone());
        Ok(post)
    }

    async fn delete_by_id(&self, id: PostId) -> Result<()> {
        self.storage.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.storage.clear();
        Ok(())
    }
}
