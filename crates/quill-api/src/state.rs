//! Application state wiring the services together.
//!
//! Services are generic over repository traits, but AppState pins them to
//! the concrete SQLite implementations from quill-infra.

use std::sync::Arc;

use quill_core::service::post::PostService;
use quill_core::service::user::UserService;
use quill_infra::sqlite::pool::DatabasePool;
use quill_infra::sqlite::post::SqlitePostRepository;
use quill_infra::sqlite::user::SqliteUserRepository;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteUserService = UserService<SqliteUserRepository>;
pub type ConcretePostService = PostService<SqlitePostRepository, SqliteUserRepository>;

/// Shared application state holding the services and the database pool.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<ConcreteUserService>,
    pub post_service: Arc<ConcretePostService>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to the database (running
    /// migrations) and wire the services.
    pub async fn init(database_url: &str) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(database_url).await?;

        let user_service = UserService::new(SqliteUserRepository::new(db_pool.clone()));
        // The post service carries its own user repository handle for
        // author resolution; pools are cheap to clone.
        let post_service = PostService::new(
            SqlitePostRepository::new(db_pool.clone()),
            SqliteUserRepository::new(db_pool.clone()),
        );

        Ok(Self {
            user_service: Arc::new(user_service),
            post_service: Arc::new(post_service),
            db_pool,
        })
    }
}
