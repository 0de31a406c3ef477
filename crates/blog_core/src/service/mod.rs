//! Blog use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, encoding and persistence for each use-case.
//! - Map lower-layer failures into the caller-facing `BlogError` taxonomy.

use crate::model::post::{PostId, ValidationError};
use crate::repo::blog_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod authoring;
pub mod blog_store;
pub mod clock;
pub mod ids;

use authoring::EncodingError;

/// Caller-facing error for every mutating blog operation.
#[derive(Debug)]
pub enum BlogError {
    /// Required field missing or empty; nothing changed.
    Validation(ValidationError),
    /// Referenced post does not exist; nothing was written.
    NotFound(PostId),
    /// A file could not be embedded; no post was created.
    Encoding(EncodingError),
    /// Storage write failed; in-memory state was rolled back.
    Persistence(RepoError),
}

impl Display for BlogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "validation failed: {err}"),
            Self::NotFound(post_id) => write!(f, "post not found: {post_id}"),
            Self::Encoding(err) => write!(f, "{err}"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BlogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Encoding(err) => Some(err),
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<ValidationError> for BlogError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<EncodingError> for BlogError {
    fn from(value: EncodingError) -> Self {
        Self::Encoding(value)
    }
}

impl From<RepoError> for BlogError {
    fn from(value: RepoError) -> Self {
        Self::Persistence(value)
    }
}
