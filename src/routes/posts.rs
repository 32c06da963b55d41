//! Posts CRUD routes.

use crate::handlers::posts::{create, delete as delete_handler, index, show, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn post_routes(state: AppState) -> Router {
    Router::new()
        .route("/posts", get(index).post(create))
        .route("/posts/:id", get(show).put(update).delete(delete_handler))
        .with_state(state)
}
