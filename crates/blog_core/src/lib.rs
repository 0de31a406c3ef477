//! Core domain logic for a local-first blog.
//! Posts, comments and the interface locale live in one key-value store and
//! are rewritten whole on every mutation.

pub mod config;
pub mod db;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;
pub mod view;

pub use config::BlogConfig;
pub use i18n::{text, translate, Labels, Locale, MessageKey};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::post::{Attachment, Comment, CommentId, Post, PostId, ValidationError};
pub use repo::blog_repo::{
    KvBlogRepository, LocaleRepository, PostRepository, RepoError, RepoResult, LOCALE_KEY,
    POSTS_KEY,
};
pub use service::authoring::{
    encode_file, EncodedFile, EncodingError, FileSource, InMemoryFile, NewPost, PathFile,
};
pub use service::blog_store::BlogStore;
pub use service::clock::{Clock, FixedClock, SystemClock};
pub use service::BlogError;
pub use storage::{KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult};
pub use view::{
    build_detail, build_feed, format_file_size, CommonMarkRenderer, FeedView, MarkdownRenderer,
    PostDetailView, PostSummary,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
