//! Post repository trait definition.

use quill_types::error::RepositoryError;
use quill_types::post::{Post, PostId, PostWithAuthor};
use quill_types::user::UserId;

/// Fields for inserting a post, with the author already resolved to an id.
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub content: String,
    pub author_id: UserId,
}

/// Repository trait for post persistence.
///
/// Implementations live in quill-infra (e.g., SqlitePostRepository).
pub trait PostRepository: Send + Sync {
    /// Insert a new post. Returns the stored record with its assigned id.
    fn create(
        &self,
        post: &PostRecord,
    ) -> impl std::future::Future<Output = Result<Post, RepositoryError>> + Send;

    /// Get a post by id.
    fn get_by_id(
        &self,
        id: &PostId,
    ) -> impl std::future::Future<Output = Result<Option<Post>, RepositoryError>> + Send;

    /// List every post with its author embedded (the feed query).
    fn list_with_authors(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<PostWithAuthor>, RepositoryError>> + Send;

    /// Write back a modified post. Fails with `RepositoryError::NotFound`
    /// when no row with that id exists.
    fn update(
        &self,
        post: &Post,
    ) -> impl std::future::Future<Output = Result<Post, RepositoryError>> + Send;

    /// Delete a post by id. Fails with `RepositoryError::NotFound` when
    /// no row with that id exists.
    fn delete(
        &self,
        id: &PostId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
