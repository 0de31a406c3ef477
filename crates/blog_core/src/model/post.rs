//! Post, attachment and comment records.
//!
//! # Responsibility
//! - Define the records stored under the `blogPosts` key.
//! - Validate user-supplied required fields before any mutation.
//!
//! # Invariants
//! - `title` and `content` of a post are non-empty after trimming.
//! - `author` and `content` of a comment are non-empty after trimming.
//! - `comments` only ever grow at the tail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable post identifier, persisted as a plain JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

/// Stable comment identifier, persisted as a plain JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl Display for PostId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for CommentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation failure for user-supplied fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is missing or whitespace-only.
    EmptyField(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "`{field}` must not be empty"),
        }
    }
}

impl Error for ValidationError {}

/// Named binary payload attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Original file name as supplied by the author.
    pub name: String,
    /// Payload size in bytes.
    pub size: u64,
    /// Serialized as `type` to match the persisted layout.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Embedded `data:` URI.
    pub data: String,
}

/// Reply attached to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub content: String,
    #[serde(with = "crate::model::timestamp")]
    pub date: DateTime<Utc>,
}

impl Comment {
    /// Checks the user-supplied comment fields.
    pub fn validate_fields(author: &str, content: &str) -> Result<(), ValidationError> {
        require_non_empty("author", author)?;
        require_non_empty("content", content)
    }
}

/// User-authored blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Markdown source (or plain text).
    pub content: String,
    /// Optional cover image, embedded as a `data:` URI.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(with = "crate::model::timestamp")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Checks the user-supplied post fields.
    pub fn validate_fields(title: &str, content: &str) -> Result<(), ValidationError> {
        require_non_empty("title", title)?;
        require_non_empty("content", content)
    }

    /// Largest id used by this post or any of its comments.
    pub fn max_id(&self) -> u64 {
        self.comments
            .iter()
            .map(|comment| comment.id.0)
            .fold(self.id.0, u64::max)
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Post, PostId, ValidationError};

    #[test]
    fn validate_fields_rejects_whitespace_title() {
        let err = Post::validate_fields("   ", "body").expect_err("blank title must fail");
        assert_eq!(err, ValidationError::EmptyField("title"));
    }

    #[test]
    fn deserializes_original_layout() {
        let raw = r#"{
            "id": 1714557600000,
            "title": "Hello",
            "content": "**hi**",
            "imageUrl": null,
            "attachments": [{"name": "a.txt", "size": 3, "type": "text/plain", "data": "data:text/plain;base64,YWJj"}],
            "date": "2024-05-01T10:00:00.000Z",
            "comments": [{"id": 1714557600001, "author": "ann", "content": "nice", "date": "2024-05-01T10:05:00.000Z"}]
        }"#;
        let post: Post = serde_json::from_str(raw).expect("original layout should parse");
        assert_eq!(post.id, PostId(1714557600000));
        assert_eq!(post.attachments[0].mime_type, "text/plain");
        assert_eq!(post.max_id(), 1714557600001);

        let encoded = serde_json::to_value(&post).expect("post should serialize");
        assert!(encoded.get("imageUrl").is_some());
        assert_eq!(encoded["attachments"][0]["type"], "text/plain");
        assert_eq!(encoded["date"], "2024-05-01T10:00:00.000Z");
    }
}
