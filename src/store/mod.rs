//! Post persistence behind the [`PostStore`] capability.

mod memory;
mod postgres;

pub use memory::MemoryPostStore;
pub use postgres::PgPostStore;

use crate::error::StoreError;
use crate::model::{NewPost, Post, PostChanges};
use async_trait::async_trait;

/// CRUD primitives over the posts table. Injected into handlers through
/// [`AppState`](crate::state::AppState); implementations must be shareable across tasks.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a post; the store assigns `id` and both timestamps.
    async fn create(&self, post: NewPost) -> Result<Post, StoreError>;

    /// All posts in ascending `id` order.
    async fn find_all(&self) -> Result<Vec<Post>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, StoreError>;

    /// Apply `changes` and refresh `updated_at`. `None` when no row has that id.
    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>, StoreError>;

    /// Remove the row. Returns false when nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// Cheap round-trip used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}
