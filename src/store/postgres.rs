//! PostgreSQL-backed store.

use super::PostStore;
use crate::error::StoreError;
use crate::migration::POSTS_TABLE;
use crate::model::{NewPost, Post, PostChanges};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, title, body, created_at, updated_at";

#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn create(&self, post: NewPost) -> Result<Post, StoreError> {
        let sql = format!(
            "INSERT INTO {} (title, body) VALUES ($1, $2) RETURNING {}",
            POSTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Post>(&sql)
            .bind(&post.title)
            .bind(&post.body)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id ASC", COLUMNS, POSTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Post>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, StoreError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, POSTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>, StoreError> {
        // COALESCE keeps the stored value for fields absent from the request.
        let sql = format!(
            "UPDATE {} SET title = COALESCE($2, title), body = COALESCE($3, body), updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            POSTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .bind(changes.title)
            .bind(changes.body)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", POSTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
