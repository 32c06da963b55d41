//! Posts CRUD handlers: create, index, show, update, delete.

use crate::error::AppError;
use crate::extractors::{JsonBody, PostId};
use crate::model::{NewPost, PostChanges};
use crate::response::{empty_ok, post_ok, posts_ok};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("post {}", id))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewPost>,
) -> Result<impl IntoResponse, AppError> {
    let post = state.store.create(body).await?;
    tracing::debug!(id = post.id, "post created");
    Ok(post_ok(post))
}

pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = state.store.find_all().await?;
    Ok(posts_ok(posts))
}

pub async fn show(
    State(state): State<AppState>,
    PostId(id): PostId,
) -> Result<impl IntoResponse, AppError> {
    let post = state.store.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
    Ok(post_ok(post))
}

pub async fn update(
    State(state): State<AppState>,
    PostId(id): PostId,
    JsonBody(changes): JsonBody<PostChanges>,
) -> Result<impl IntoResponse, AppError> {
    if state.store.find_by_id(id).await?.is_none() {
        return Err(not_found(id));
    }
    // The row may be deleted between the lookup and the write.
    let post = state
        .store
        .update(id, changes)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::debug!(id, "post updated");
    Ok(post_ok(post))
}

pub async fn delete(
    State(state): State<AppState>,
    PostId(id): PostId,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete(id).await? {
        return Err(not_found(id));
    }
    tracing::debug!(id, "post deleted");
    Ok(empty_ok())
}
