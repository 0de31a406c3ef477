//! Post collection and locale persistence over key-value slots.
//!
//! # Responsibility
//! - Serialize the whole post collection into the `blogPosts` slot.
//! - Persist the active locale code in the `blogLanguage` slot.
//!
//! # Invariants
//! - `save` is a full overwrite; there is no incremental write path.
//! - `load` never fails: a missing or corrupt blob reads as "no posts".
//! - A failed `save` leaves the previously stored blob in place.

use crate::i18n::Locale;
use crate::model::post::Post;
use crate::storage::{KeyValueStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot holding the JSON array of posts.
pub const POSTS_KEY: &str = "blogPosts";
/// Slot holding the active locale code.
pub const LOCALE_KEY: &str = "blogLanguage";

pub type RepoResult<T> = Result<T, RepoError>;

/// Write-side persistence failure.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "storage write failed: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize posts: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Whole-collection persistence for posts.
pub trait PostRepository {
    /// Reads the stored collection, newest first.
    fn load(&self) -> Vec<Post>;
    /// Replaces the stored collection with `posts`.
    fn save(&mut self, posts: &[Post]) -> RepoResult<()>;
}

/// Persistence for the active interface locale.
pub trait LocaleRepository {
    /// Reads the stored locale; unknown or missing codes yield `None`.
    fn load_locale(&self) -> Option<Locale>;
    fn save_locale(&mut self, locale: Locale) -> RepoResult<()>;
}

/// Repository storing posts and locale in one key-value backend.
pub struct KvBlogRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvBlogRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: KeyValueStore> PostRepository for KvBlogRepository<S> {
    fn load(&self) -> Vec<Post> {
        let raw = match self.store.get(POSTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("event=posts_load module=repo status=degraded reason=read_failed error={err}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Post>>(&raw) {
            Ok(posts) => {
                info!(
                    "event=posts_load module=repo status=ok count={}",
                    posts.len()
                );
                posts
            }
            Err(err) => {
                warn!(
                    "event=posts_load module=repo status=degraded reason=unparseable bytes={} error={err}",
                    raw.len()
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, posts: &[Post]) -> RepoResult<()> {
        let encoded = serde_json::to_string(posts)?;
        if let Err(err) = self.store.set(POSTS_KEY, &encoded) {
            warn!(
                "event=posts_save module=repo status=error count={} bytes={} error={err}",
                posts.len(),
                encoded.len()
            );
            return Err(err.into());
        }
        Ok(())
    }
}

impl<S: KeyValueStore> LocaleRepository for KvBlogRepository<S> {
    fn load_locale(&self) -> Option<Locale> {
        let raw = match self.store.get(LOCALE_KEY) {
            Ok(value) => value?,
            Err(err) => {
                warn!("event=locale_load module=repo status=degraded error={err}");
                return None;
            }
        };
        match raw.parse::<Locale>() {
            Ok(locale) => Some(locale),
            Err(err) => {
                warn!("event=locale_load module=repo status=degraded error={err}");
                None
            }
        }
    }

    fn save_locale(&mut self, locale: Locale) -> RepoResult<()> {
        self.store.set(LOCALE_KEY, locale.code())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KvBlogRepository, LocaleRepository, PostRepository, LOCALE_KEY, POSTS_KEY};
    use crate::i18n::Locale;
    use crate::storage::{KeyValueStore, MemoryStore};

    #[test]
    fn missing_and_corrupt_blobs_load_as_empty() {
        let mut repo = KvBlogRepository::new(MemoryStore::new());
        assert!(repo.load().is_empty());

        repo.store_mut()
            .set(POSTS_KEY, "{not json")
            .expect("memory write");
        assert!(repo.load().is_empty());
    }

    #[test]
    fn unknown_locale_code_loads_as_none() {
        let mut repo = KvBlogRepository::new(MemoryStore::new());
        repo.store_mut().set(LOCALE_KEY, "fr").expect("memory write");
        assert_eq!(repo.load_locale(), None);

        repo.save_locale(Locale::Ru).expect("save locale");
        assert_eq!(repo.load_locale(), Some(Locale::Ru));
        assert_eq!(repo.store().raw(LOCALE_KEY), Some("ru"));
    }
}
