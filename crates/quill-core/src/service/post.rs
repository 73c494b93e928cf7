//! Post service.
//!
//! Resolves authorship by email before insertion so a post can never be
//! written against a missing user, and implements merge semantics for
//! partial updates.

use quill_types::error::{PostError, RepositoryError};
use quill_types::post::{NewPost, Post, PostId, PostWithAuthor, UpdatePost};

use crate::repository::post::{PostRecord, PostRepository};
use crate::repository::user::UserRepository;

/// Service orchestrating the post lifecycle.
pub struct PostService<P: PostRepository, U: UserRepository> {
    post_repo: P,
    user_repo: U,
}

impl<P: PostRepository, U: UserRepository> PostService<P, U> {
    pub fn new(post_repo: P, user_repo: U) -> Self {
        Self {
            post_repo,
            user_repo,
        }
    }

    /// Create a post, resolving the author by email first. The lookup
    /// happens before the insert, so no orphan row is ever written.
    pub async fn create_post(&self, request: NewPost) -> Result<Post, PostError> {
        let author = self
            .user_repo
            .get_by_email(&request.author_email)
            .await
            .map_err(|e| PostError::Storage(e.to_string()))?
            .ok_or_else(|| PostError::AuthorNotFound(request.author_email.clone()))?;

        self.post_repo
            .create(&PostRecord {
                content: request.content,
                author_id: author.id,
            })
            .await
            .map_err(|e| PostError::Storage(e.to_string()))
    }

    /// Get a post by id.
    pub async fn get_post(&self, id: &PostId) -> Result<Post, PostError> {
        self.post_repo
            .get_by_id(id)
            .await
            .map_err(|e| PostError::Storage(e.to_string()))?
            .ok_or(PostError::NotFound)
    }

    /// The feed: every post with its author embedded. No filtering or
    /// ordering guarantee.
    pub async fn feed(&self) -> Result<Vec<PostWithAuthor>, PostError> {
        self.post_repo
            .list_with_authors()
            .await
            .map_err(|e| PostError::Storage(e.to_string()))
    }

    /// Merge the supplied fields into an existing post. Omitted fields
    /// keep their prior values.
    pub async fn update_post(
        &self,
        id: &PostId,
        request: UpdatePost,
    ) -> Result<Post, PostError> {
        let mut post = self.get_post(id).await?;

        if let Some(content) = request.content {
            post.content = content;
        }

        self.post_repo.update(&post).await.map_err(|e| match e {
            RepositoryError::NotFound => PostError::NotFound,
            other => PostError::Storage(other.to_string()),
        })
    }

    /// Delete a post and return its prior state.
    pub async fn delete_post(&self, id: &PostId) -> Result<Post, PostError> {
        let post = self.get_post(id).await?;

        self.post_repo.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => PostError::NotFound,
            other => PostError::Storage(other.to_string()),
        })?;

        Ok(post)
    }
}
