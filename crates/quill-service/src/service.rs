use async_trait::async_trait;
use quill_core::{
    Outcome, Post, PostDraft, PostId, PostManager, ReadRepository, Repository, ServiceError,
};
use std::sync::Arc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<Outcome<T>, ServiceError>;

/// A concrete implementation of the [`PostManager`] trait.
///
/// This service wraps a [`Repository`] and decides the outcome of each call:
/// - listings yield `NoContent` instead of an empty list
/// - lookups of unknown ids yield `NotFound`
/// - creation ignores the client's published flag
///
/// Store faults are passed through as [`ServiceError::Storage`] and never
/// retried.
#[derive(Debug)]
pub struct PostService<R> {
    repository: Arc<R>,
}

impl<R> Clone for PostService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Repository> PostService<R> {
    /// Creates a new `PostService` backed by the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

#[async_trait]
impl<R: Repository> PostManager for PostService<R> {
    async fn list(&self, title: Option<&str>) -> Result<Vec<Post>> {
        let posts = match title {
            None => self.repository.find_all().await?,
            Some(title) => self.repository.find_by_title_containing(title).await?,
        };

        debug!(title = ?title, count = posts.len(), "listed posts");
        Ok(Outcome::listing(posts))
    }

    async fn get(&self, id: PostId) -> Result<Post> {
        let post = self.repository.find_by_id(id).await?;
        if post.is_none() {
            trace!(id = %id, "post not found");
        }
        Ok(Outcome::found(post))
    }

    async fn create(&self, draft: PostDraft) -> Result<Post> {
        // new posts always start unpublished
        let post = Post::new(draft.title, draft.description, false);
        let saved = self.repository.save(post).await?;

        debug!(id = ?saved.id, "created post");
        Ok(Outcome::Created(saved))
    }

    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post> {
        let Some(mut post) = self.repository.find_by_id(id).await? else {
            trace!(id = %id, "post not found");
            return Ok(Outcome::NotFound);
        };

        post.apply(draft);
        let saved = self.repository.save(post).await?;

        debug!(id = %id, published = saved.published, "updated post");
        Ok(Outcome::Ok(saved))
    }

    async fn delete(&self, id: PostId) -> Result<()> {
        self.repository.delete_by_id(id).await?;

        debug!(id = %id, "deleted post");
        Ok(Outcome::NoContent)
    }

    async fn delete_all(&self) -> Result<()> {
        self.repository.delete_all().await?;

        debug!("deleted all posts");
        Ok(Outcome::NoContent)
    }

    async fn list_published(&self) -> Result<Vec<Post>> {
        let posts = self.repository.find_by_published(true).await?;

        debug!(count = posts.len(), "listed published posts");
        Ok(Outcome::listing(posts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::StorageError;
    use quill_storage::InMemoryRepository;

    fn test_service() -> PostService<InMemoryRepository> {
        PostService::new(InMemoryRepository::new())
    }

    fn draft(title: &str, description: &str, published: bool) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            description: description.to_string(),
            published,
        }
    }

    /// A store whose every call fails.
    struct BrokenRepository;

    fn unavailable<T>() -> std::result::Result<T, StorageError> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }

    #[async_trait]
    impl ReadRepository for BrokenRepository {
        async fn find_all(&self) -> quill_core::error::Result<Vec<Post>> {
            unavailable()
        }

        async fn find_by_id(&self, _id: PostId) -> quill_core::error::Result<Option<Post>> {
            unavailable()
        }

        async fn find_by_title_containing(
            &self,
            _title: &str,
        ) -> quill_core::error::Result<Vec<Post>> {
            unavailable()
        }

        async fn find_by_published(&self, _published: bool) -> quill_core::error::Result<Vec<Post>> {
            unavailable()
        }
    }

    #[async_trait]
    impl Repository for BrokenRepository {
        async fn save(&self, _post: Post) -> quill_core::error::Result<Post> {
            unavailable()
        }

        async fn delete_by_id(&self, _id: PostId) -> quill_core::error::Result<()> {
            unavailable()
        }

        async fn delete_all(&self) -> quill_core::error::Result<()> {
            unavailable()
        }
    }

    async fn create(service: &PostService<InMemoryRepository>, title: &str, published: bool) -> Post {
        match service.create(draft(title, "Desc", published)).await.unwrap() {
            Outcome::Created(post) => post,
            other => panic!("expected created, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_on_empty_store_is_no_content() {
        let service = test_service();

        assert_eq!(service.list(None).await.unwrap(), Outcome::NoContent);
    }

    #[tokio::test]
    async fn list_returns_all_posts() {
        let service = test_service();
        let a = create(&service, "Spring Boot", false).await;
        let b = create(&service, "Java Basics", false).await;

        assert_eq!(service.list(None).await.unwrap(), Outcome::Ok(vec![a, b]));
    }

    #[tokio::test]
    async fn list_filters_by_title() {
        let service = test_service();
        let spring = create(&service, "Spring Boot", false).await;
        create(&service, "Java Basics", false).await;

        let outcome = service.list(Some("sPrInG")).await.unwrap();
        assert_eq!(outcome, Outcome::Ok(vec![spring]));

        let outcome = service.list(Some("zzz")).await.unwrap();
        assert_eq!(outcome, Outcome::NoContent);
    }

    #[tokio::test]
    async fn create_forces_unpublished() {
        let service = test_service();

        let outcome = service.create(draft("Spring", "Boot", true)).await.unwrap();
        let Outcome::Created(post) = outcome else {
            panic!("expected created, got {outcome:?}");
        };

        assert!(post.id.is_some_and(|id| id.get() > 0));
        assert_eq!(post.title, "Spring");
        assert_eq!(post.description, "Boot");
        assert!(!post.published);
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let service = test_service();
        let created = create(&service, "A", true).await;
        let id = created.id.unwrap();

        let outcome = service.get(id).await.unwrap();
        assert_eq!(outcome, Outcome::Ok(Post::new("A", "Desc", false).with_id(id)));
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let service = test_service();

        assert_eq!(service.get(PostId::new(1)).await.unwrap(), Outcome::NotFound);
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let service = test_service();
        let id = create(&service, "Spring", false).await.id.unwrap();

        let outcome = service
            .update(id, draft("Spring2", "Boot2", true))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Ok(Post::new("Spring2", "Boot2", true).with_id(id))
        );

        let outcome = service.update(id, PostDraft::default()).await.unwrap();
        assert_eq!(outcome, Outcome::Ok(Post::new("", "", false).with_id(id)));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let service = test_service();

        let outcome = service
            .update(PostId::new(5), draft("T", "D", true))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::NotFound);
        assert_eq!(service.list(None).await.unwrap(), Outcome::NoContent);
    }

    #[tokio::test]
    async fn delete_existing_and_unknown_ids_are_no_content() {
        let service = test_service();
        let id = create(&service, "Delete Me", false).await.id.unwrap();

        assert_eq!(service.delete(id).await.unwrap(), Outcome::NoContent);
        assert_eq!(service.delete(id).await.unwrap(), Outcome::NoContent);
        assert_eq!(service.get(id).await.unwrap(), Outcome::NotFound);
    }

    #[tokio::test]
    async fn delete_all_twice() {
        let service = test_service();
        create(&service, "One", false).await;
        create(&service, "Two", false).await;

        assert_eq!(service.delete_all().await.unwrap(), Outcome::NoContent);
        assert_eq!(service.delete_all().await.unwrap(), Outcome::NoContent);
        assert_eq!(service.list(None).await.unwrap(), Outcome::NoContent);
    }

    #[tokio::test]
    async fn list_published_only_returns_published() {
        let service = test_service();
        assert_eq!(service.list_published().await.unwrap(), Outcome::NoContent);

        let id = create(&service, "Spring", false).await.id.unwrap();
        create(&service, "Draft", false).await;
        assert_eq!(service.list_published().await.unwrap(), Outcome::NoContent);

        service
            .update(id, draft("Spring", "Boot", true))
            .await
            .unwrap();
        assert_eq!(
            service.list_published().await.unwrap(),
            Outcome::Ok(vec![Post::new("Spring", "Boot", true).with_id(id)])
        );
    }

    #[tokio::test]
    async fn store_faults_surface_as_errors() {
        let service = PostService::new(BrokenRepository);
        let id = PostId::new(1);

        assert!(matches!(
            service.list(None).await,
            Err(ServiceError::Storage(StorageError::Unavailable(_)))
        ));
        assert!(service.list(Some("t")).await.is_err());
        assert!(service.get(id).await.is_err());
        assert!(service.create(draft("T", "D", false)).await.is_err());
        assert!(service.update(id, draft("T", "D", false)).await.is_err());
        assert!(service.delete(id).await.is_err());
        assert!(service.delete_all().await.is_err());
        assert!(service.list_published().await.is_err());
    }
}
