//! SQLite post repository implementation.
//!
//! Implements `PostRepository` from `quill-core`. The feed query joins
//! against `users` so each post carries its author in one round trip.

use chrono::Utc;
use quill_core::repository::post::{PostRecord, PostRepository};
use quill_types::error::RepositoryError;
use quill_types::post::{Post, PostId, PostWithAuthor};
use quill_types::user::{User, UserId};
use sqlx::Row;

use super::pool::DatabasePool;
use super::user::{format_datetime, parse_datetime};

/// SQLite-backed implementation of `PostRepository`.
pub struct SqlitePostRepository {
    pool: DatabasePool,
}

impl SqlitePostRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain Post.
struct PostRow {
    id: i64,
    content: String,
    author_id: i64,
    created_at: String,
}

impl PostRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            content: row.try_get("content")?,
            author_id: row.try_get("author_id")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_post(self) -> Result<Post, RepositoryError> {
        Ok(Post {
            id: PostId(self.id),
            content: self.content,
            author_id: UserId(self.author_id),
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl PostRepository for SqlitePostRepository {
    async fn create(&self, post: &PostRecord) -> Result<Post, RepositoryError> {
        let now = Utc::now();

        let result =
            sqlx::query("INSERT INTO posts (content, author_id, created_at) VALUES (?, ?, ?)")
                .bind(&post.content)
                .bind(post.author_id.0)
                .bind(format_datetime(&now))
                .execute(&self.pool.writer)
                .await;

        match result {
            Ok(done) => Ok(Post {
                id: PostId(done.last_insert_rowid()),
                content: post.content.clone(),
                author_id: post.author_id,
                created_at: now,
            }),
            // Backstop only; the service resolves the author before inserting.
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("FOREIGN KEY") => {
                Err(RepositoryError::Conflict(format!(
                    "author {} does not exist",
                    post.author_id
                )))
            }
            Err(e) => Err(RepositoryError::Query(e.to_string())),
        }
    }

    async fn get_by_id(&self, id: &PostId) -> Result<Option<Post>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM posts WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let post_row =
                    PostRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(post_row.into_post()?))
            }
            None => Ok(None),
        }
    }

    async fn list_with_authors(&self) -> Result<Vec<PostWithAuthor>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT p.id, p.content, p.author_id, p.created_at,
                    u.username, u.email, u.name, u.created_at AS author_created_at
             FROM posts p
             JOIN users u ON u.id = p.author_id",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut feed = Vec::with_capacity(rows.len());
        for row in &rows {
            let post_row =
                PostRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            let author_id = post_row.author_id;
            let author_created_at: String = row
                .try_get("author_created_at")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

            let author = User {
                id: UserId(author_id),
                username: row
                    .try_get("username")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?,
                email: row
                    .try_get("email")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?,
                name: row
                    .try_get("name")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?,
                created_at: parse_datetime(&author_created_at)?,
            };

            feed.push(PostWithAuthor {
                post: post_row.into_post()?,
                author,
            });
        }

        Ok(feed)
    }

    async fn update(&self, post: &Post) -> Result<Post, RepositoryError> {
        let result = sqlx::query("UPDATE posts SET content = ? WHERE id = ?")
            .bind(&post.content)
            .bind(post.id.0)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(post.clone())
    }

    async fn delete(&self, id: &PostId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
