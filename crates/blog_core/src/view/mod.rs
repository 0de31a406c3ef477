//! Rendering facet: pure functions from the collection to display data.
//!
//! # Responsibility
//! - Build feed and detail view models for a given locale.
//! - Provide the markdown collaborator and the HTML markup layer.
//!
//! # Invariants
//! - Nothing here mutates or persists state.
//! - User text is escaped only at the markup layer, never in view models.

pub mod detail;
pub mod feed;
pub mod html;
pub mod markdown;
pub mod text;

pub use detail::{build_detail, AttachmentView, CommentFormView, CommentView, PostDetailView};
pub use feed::{build_feed, FeedView, PostSummary};
pub use markdown::{CommonMarkRenderer, MarkdownRenderer};
pub use text::{excerpt, format_date, format_file_size, strip_markdown};
