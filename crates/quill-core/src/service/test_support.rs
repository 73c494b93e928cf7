//! In-memory repository fakes for service tests.

use std::sync::Mutex;

use chrono::Utc;
use quill_types::error::RepositoryError;
use quill_types::post::{Post, PostId, PostWithAuthor};
use quill_types::user::{NewUser, User, UserId};

use crate::repository::post::{PostRecord, PostRepository};
use crate::repository::user::UserRepository;

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    /// Seed a user directly, bypassing the service layer.
    pub async fn insert(&self, user: NewUser) -> User {
        self.create(&user).await.unwrap()
    }
}

impl UserRepository for InMemoryUsers {
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(RepositoryError::Conflict(
                "username or email already exists".to_string(),
            ));
        }
        let stored = User {
            id: UserId(users.len() as i64 + 1),
            username: user.username.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: Utc::now(),
        };
        users.push(stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == *id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryPosts {
    posts: Mutex<Vec<Post>>,
    next_id: Mutex<i64>,
}

impl PostRepository for InMemoryPosts {
    async fn create(&self, post: &PostRecord) -> Result<Post, RepositoryError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let stored = Post {
            id: PostId(*next_id),
            content: post.content.clone(),
            author_id: post.author_id,
            created_at: Utc::now(),
        };
        self.posts.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, id: &PostId) -> Result<Option<Post>, RepositoryError> {
        Ok(self.posts.lock().unwrap().iter().find(|p| p.id == *id).cloned())
    }

    async fn list_with_authors(&self) -> Result<Vec<PostWithAuthor>, RepositoryError> {
        // The fake has no user table; fabricate the author from the id so
        // feed tests can check the embedding shape.
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .map(|p| PostWithAuthor {
                post: p.clone(),
                author: User {
                    id: p.author_id,
                    username: "ada".to_string(),
                    email: "a@x.com".to_string(),
                    name: None,
                    created_at: p.created_at,
                },
            })
            .collect())
    }

    async fn update(&self, post: &Post) -> Result<Post, RepositoryError> {
        let mut posts = self.posts.lock().unwrap();
        match posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => {
                *existing = post.clone();
                Ok(post.clone())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: &PostId) -> Result<(), RepositoryError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != *id);
        if posts.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
