//! SQLite user repository implementation.
//!
//! Implements `UserRepository` from `quill-core` using sqlx with split
//! read/write pools.

use chrono::{DateTime, Utc};
use quill_core::repository::user::UserRepository;
use quill_types::error::RepositoryError;
use quill_types::user::{NewUser, User, UserId};
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `UserRepository`.
pub struct SqliteUserRepository {
    pool: DatabasePool,
}

impl SqliteUserRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain User.
struct UserRow {
    id: i64,
    username: String,
    email: String,
    name: Option<String>,
    created_at: String,
}

impl UserRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            name: row.try_get("name")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_user(self) -> Result<User, RepositoryError> {
        Ok(User {
            id: UserId(self.id),
            username: self.username,
            email: self.email,
            name: self.name,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

pub(crate) fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO users (username, email, name, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.name)
        .bind(format_datetime(&now))
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(done) => Ok(User {
                id: UserId(done.last_insert_rowid()),
                username: user.username.clone(),
                email: user.email.clone(),
                name: user.name.clone(),
                created_at: now,
            }),
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => {
                Err(RepositoryError::Conflict(format!(
                    "username '{}' or email '{}' already exists",
                    user.username, user.email
                )))
            }
            Err(e) => Err(RepositoryError::Query(e.to_string())),
        }
    }

    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let user_row =
                    UserRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(user_row.into_user()?))
            }
            None => Ok(None),
        }
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        // Column collation is BINARY, so the match is case-sensitive.
        let row = sqlx::query("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let user_row =
                    UserRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(user_row.into_user()?))
            }
            None => Ok(None),
        }
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let user_row =
                    UserRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(user_row.into_user()?))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::DatabasePool;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn ada() -> NewUser {
        NewUser {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada Lovelace".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = SqliteUserRepository::new(test_pool().await);

        let first = repo.create(&ada()).await.unwrap();
        let second = repo
            .create(&NewUser {
                username: "grace".to_string(),
                email: "grace@example.com".to_string(),
                name: None,
            })
            .await
            .unwrap();

        assert_eq!(first.id, UserId(1));
        assert_eq!(second.id, UserId(2));
    }

    #[tokio::test]
    async fn test_duplicate_username_or_email_conflicts() {
        let repo = SqliteUserRepository::new(test_pool().await);
        repo.create(&ada()).await.unwrap();

        let same_username = NewUser {
            username: "ada".to_string(),
            email: "other@example.com".to_string(),
            name: None,
        };
        let same_email = NewUser {
            username: "other".to_string(),
            email: "ada@example.com".to_string(),
            name: None,
        };

        assert!(matches!(
            repo.create(&same_username).await,
            Err(RepositoryError::Conflict(_))
        ));
        assert!(matches!(
            repo.create(&same_email).await,
            Err(RepositoryError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_get_by_username_is_case_sensitive() {
        let repo = SqliteUserRepository::new(test_pool().await);
        repo.create(&ada()).await.unwrap();

        assert!(repo.get_by_username("ada").await.unwrap().is_some());
        assert!(repo.get_by_username("Ada").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_round_trip_preserves_fields() {
        let repo = SqliteUserRepository::new(test_pool().await);
        let created = repo.create(&ada()).await.unwrap();

        let fetched = repo.get_by_email("ada@example.com").await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.username, "ada");
        assert_eq!(fetched.name.as_deref(), Some("Ada Lovelace"));
    }
}
