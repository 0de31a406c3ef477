//! Repository layer over key-value storage.
//!
//! # Responsibility
//! - Define whole-collection persistence contracts for posts and locale.
//! - Keep JSON encoding details out of the service layer.
//!
//! # Invariants
//! - Read paths degrade to defaults; write paths surface every failure.

pub mod blog_repo;
