//! Blog domain model.
//!
//! # Responsibility
//! - Define the canonical post/attachment/comment records.
//! - Own the persisted JSON shape of those records.
//!
//! # Invariants
//! - Every post is identified by a `PostId` unique within one collection.
//! - Comments and attachments are append-only and keep insertion order.

pub mod post;
pub mod timestamp;
