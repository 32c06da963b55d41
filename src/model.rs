//! Post entity and its request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted post. `id` and both timestamps are owned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload. Absent fields default to the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NewPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Update payload. `None` keeps the stored value; `Some("")` clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PostChanges {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl PostChanges {
    /// Overwrite the supplied fields on `post`. Identity and `created_at` are untouched.
    pub fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(body) = self.body {
            post.body = body;
        }
    }
}
