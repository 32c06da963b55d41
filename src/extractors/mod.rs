//! Request extractors whose rejections render as [`AppError`](crate::error::AppError).

mod json;
mod post_id;

pub use json::JsonBody;
pub use post_id::{parse_id, PostId};
