//! posts-api: JSON CRUD over a single `posts` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{AppConfig, StoreKind};
pub use error::{AppError, ConfigError, StoreError};
pub use migration::{apply_migrations, ensure_database_exists};
pub use model::{NewPost, Post, PostChanges};
pub use routes::{app, common_routes_with_ready, post_routes};
pub use state::AppState;
pub use store::{MemoryPostStore, PgPostStore, PostStore};
