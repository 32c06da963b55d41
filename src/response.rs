//! Response envelopes: `{"post": ..}`, `{"posts": [..]}` and `{}`.

use crate::model::Post;
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct PostEnvelope {
    pub post: Post,
}

#[derive(Serialize)]
pub struct PostsEnvelope {
    pub posts: Vec<Post>,
}

#[derive(Serialize)]
pub struct Empty {}

pub fn post_ok(post: Post) -> (StatusCode, Json<PostEnvelope>) {
    (StatusCode::OK, Json(PostEnvelope { post }))
}

pub fn posts_ok(posts: Vec<Post>) -> (StatusCode, Json<PostsEnvelope>) {
    (StatusCode::OK, Json(PostsEnvelope { posts }))
}

pub fn empty_ok() -> (StatusCode, Json<Empty>) {
    (StatusCode::OK, Json(Empty {}))
}
