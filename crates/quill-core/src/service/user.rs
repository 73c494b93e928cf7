//! User account service.

use quill_types::error::{RepositoryError, UserError};
use quill_types::user::{NewUser, User};

use crate::repository::user::UserRepository;

/// Service for user creation and lookup.
///
/// Generic over the repository trait so storage can be swapped or
/// mocked in tests -- quill-core never depends on quill-infra.
pub struct UserService<U: UserRepository> {
    user_repo: U,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(user_repo: U) -> Self {
        Self { user_repo }
    }

    /// Create a user from the request body. Username and email
    /// uniqueness is enforced by the storage layer and surfaced as a
    /// conflict.
    pub async fn create_user(&self, request: NewUser) -> Result<User, UserError> {
        self.user_repo.create(&request).await.map_err(|e| match e {
            RepositoryError::Conflict(msg) => UserError::Conflict(msg),
            other => UserError::Storage(other.to_string()),
        })
    }

    /// Case-sensitive exact-match lookup by username.
    pub async fn get_user_by_username(&self, username: &str) -> Result<User, UserError> {
        self.user_repo
            .get_by_username(username)
            .await
            .map_err(|e| UserError::Storage(e.to_string()))?
            .ok_or(UserError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::InMemoryUsers;

    #[tokio::test]
    async fn test_create_user_assigns_id() {
        let service = UserService::new(InMemoryUsers::default());

        let user = service
            .create_user(NewUser {
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                name: Some("Ada".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(user.id.0, 1);
        assert_eq!(user.username, "ada");
    }

    #[tokio::test]
    async fn test_duplicate_username_is_a_conflict() {
        let service = UserService::new(InMemoryUsers::default());
        let request = NewUser {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            name: None,
        };

        service.create_user(request.clone()).await.unwrap();
        let err = service.create_user(request).await.unwrap_err();

        assert!(matches!(err, UserError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_username_lookup_is_case_sensitive() {
        let service = UserService::new(InMemoryUsers::default());
        service
            .create_user(NewUser {
                username: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                name: None,
            })
            .await
            .unwrap();

        assert!(service.get_user_by_username("Ada").await.is_ok());
        let err = service.get_user_by_username("ada").await.unwrap_err();
        assert!(matches!(err, UserError::NotFound));
    }
}
