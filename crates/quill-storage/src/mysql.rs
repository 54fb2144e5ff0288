use async_trait::async_trait;
use quill_core::error::{Result, StorageError};
use quill_core::repository::{ReadRepository, Repository};
use quill_core::{Post, PostId};
use sqlx::mysql::{MySqlArguments, MySqlPoolOptions, MySqlRow};
use sqlx::query::Query;
use sqlx::{MySql, MySqlPool, Row};
use tracing::{debug, info};

const SCHEMA: &str = include_str!("../ddl/mysql/posts.sql");

/// MySQL implementation of the repository contract.
///
/// Posts live in a single `posts` table whose `id` is an auto-increment
/// primary key. Saving a post that already carries an id is an upsert, so
/// concurrent updates of one row resolve as last write wins.
#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates a repository with a pool capped at `max_connections`.
    pub async fn connect_with(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `posts` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        info!("posts table is ready");
        Ok(())
    }

    async fn fetch_posts(&self, query: Query<'_, MySql, MySqlArguments>) -> Result<Vec<Post>> {
        let rows = query.fetch_all(&self.pool).await.map_err(map_sqlx_error)?;

        rows.iter().map(post_from_row).collect()
    }
}

fn post_from_row(row: &MySqlRow) -> Result<Post> {
    let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;
    let title: String = row.try_get("title").map_err(map_sqlx_error)?;
    let description: String = row.try_get("description").map_err(map_sqlx_error)?;
    let published: bool = row.try_get("published").map_err(map_sqlx_error)?;

    Ok(Post::new(title, description, published).with_id(PostId::new(id)))
}

/// Escapes `LIKE` metacharacters so the input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        sqlx::Error::Configuration(_) | sqlx::Error::Protocol(_) => {
            StorageError::Operation(message)
        }
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl ReadRepository for MySqlRepository {
    async fn find_all(&self) -> Result<Vec<Post>> {
        self.fetch_posts(sqlx::query(
            r#"
            SELECT id, title, description, published
            FROM posts
            ORDER BY id
            "#,
        ))
        .await
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, published
            FROM posts
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(post_from_row).transpose()
    }

    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Post>> {
        self.fetch_posts(
            sqlx::query(
                r#"
                SELECT id, title, description, published
                FROM posts
                WHERE LOWER(title) LIKE CONCAT('%', LOWER(?), '%')
                ORDER BY id
                "#,
            )
            .bind(escape_like(title)),
        )
        .await
    }

    async fn find_by_published(&self, published: bool) -> Result<Vec<Post>> {
        self.fetch_posts(
            sqlx::query(
                r#"
                SELECT id, title, description, published
                FROM posts
                WHERE published = ?
                ORDER BY id
                "#,
            )
            .bind(published),
        )
        .await
    }
}

#[async_trait]
impl Repository for MySqlRepository {
    async fn save(&self, post: Post) -> Result<Post> {
        match post.id {
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO posts (title, description, published)
                    VALUES (?, ?, ?)
                    "#,
                )
                .bind(&post.title)
                .bind(&post.description)
                .bind(post.published)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

                let id = i64::try_from(result.last_insert_id()).map_err(|e| {
                    StorageError::InvalidData(format!(
                        "generated id '{}' out of range: {e}",
                        result.last_insert_id()
                    ))
                })?;
                debug!(id, "inserted post");
                Ok(post.with_id(PostId::new(id)))
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO posts (id, title, description, published)
                    VALUES (?, ?, ?, ?) AS new
                    ON DUPLICATE KEY UPDATE
                        title = new.title,
                        description = new.description,
                        published = new.published
                    "#,
                )
                .bind(id.get())
                .bind(&post.title)
                .bind(&post.description)
                .bind(post.published)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

                debug!(id = id.get(), "saved post");
                Ok(post)
            }
        }
    }

    async fn delete_by_id(&self, id: PostId) -> Result<()> {
        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        sqlx::query("DELETE FROM posts")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_escapes_metacharacters() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\dir"), "c:\\\\dir");
    }

    #[test]
    fn pool_errors_are_classified() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            StorageError::Timeout(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolClosed),
            StorageError::Unavailable(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            StorageError::InvalidData(_)
        ));
    }
}
