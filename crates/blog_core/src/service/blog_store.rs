//! In-memory post collection kept in lockstep with its repository.
//!
//! # Responsibility
//! - Own the ordered post collection and the active interface locale.
//! - Run the create-post, add-comment and switch-locale use-cases.
//! - Expose feed/detail rendering for the current state.
//!
//! # Invariants
//! - Newest post first; new posts are prepended.
//! - After every mutating call returns, the repository holds exactly the
//!   in-memory collection. A failed save rolls the in-memory change back.
//! - Validation runs before any file is read or any state changes.
//! - Comments are appended and never reordered.

use crate::i18n::{Labels, Locale};
use crate::model::post::{Attachment, Comment, CommentId, Post, PostId};
use crate::repo::blog_repo::{LocaleRepository, PostRepository};
use crate::service::authoring::{encode_draft_files, NewPost};
use crate::service::clock::{Clock, SystemClock};
use crate::service::ids::IdGenerator;
use crate::service::BlogError;
use crate::view::{build_detail, build_feed, FeedView, MarkdownRenderer, PostDetailView};
use chrono::{DateTime, SubsecRound, Utc};
use log::{info, warn};

/// Single-owner blog state bound to one repository.
pub struct BlogStore<R>
where
    R: PostRepository + LocaleRepository,
{
    repo: R,
    posts: Vec<Post>,
    locale: Locale,
    clock: Box<dyn Clock>,
    ids: IdGenerator,
}

impl<R> BlogStore<R>
where
    R: PostRepository + LocaleRepository,
{
    /// Loads state from `repo` using the system clock and `en` default.
    pub fn open(repo: R) -> Self {
        Self::open_with(repo, Box::new(SystemClock), Locale::default())
    }

    /// Loads state from `repo` with an explicit clock and fallback locale.
    ///
    /// A missing or corrupt post blob opens as an empty blog; a missing or
    /// unknown locale code opens with `default_locale`.
    pub fn open_with(repo: R, clock: Box<dyn Clock>, default_locale: Locale) -> Self {
        let posts = repo.load();
        let locale = repo.load_locale().unwrap_or(default_locale);
        let ids = IdGenerator::seeded_from(&posts);
        info!(
            "event=store_open module=service status=ok posts={} locale={}",
            posts.len(),
            locale
        );
        Self {
            repo,
            posts,
            locale,
            clock,
            ids,
        }
    }

    /// Re-reads the collection from storage, discarding in-memory state.
    ///
    /// Picks up writes made by another process sharing the same store.
    pub fn reload(&mut self) {
        self.posts = self.repo.load();
        self.ids = IdGenerator::seeded_from(&self.posts);
        if let Some(locale) = self.repo.load_locale() {
            self.locale = locale;
        }
    }

    /// Releases the store and hands back the repository.
    pub fn close(self) -> R {
        info!(
            "event=store_close module=service status=ok posts={}",
            self.posts.len()
        );
        self.repo
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, post_id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == post_id)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validates, encodes and stores a new post at the front of the feed.
    ///
    /// # Errors
    /// - `Validation` when title or content is empty; no file is read.
    /// - `Encoding` when any file cannot be read; nothing is stored.
    /// - `Persistence` when the save fails; the collection is unchanged.
    pub fn create_post(&mut self, draft: NewPost) -> Result<&Post, BlogError> {
        Post::validate_fields(&draft.title, &draft.content)?;

        let (image, attachments) = encode_draft_files(&draft).map_err(|err| {
            warn!(
                "event=post_create module=service status=error error_code=encoding_failed error={}",
                err.source
            );
            BlogError::Encoding(err)
        })?;

        let now = self.now();
        let post = Post {
            id: PostId(self.ids.next(now.timestamp_millis())),
            title: draft.title,
            content: draft.content,
            image_url: image.map(|file| file.data_uri),
            attachments: attachments
                .into_iter()
                .map(|file| Attachment {
                    name: file.name,
                    size: file.size,
                    mime_type: file.mime_type,
                    data: file.data_uri,
                })
                .collect(),
            date: now,
            comments: Vec::new(),
        };
        let post_id = post.id;
        let attachment_count = post.attachments.len();
        let has_image = post.image_url.is_some();

        self.posts.insert(0, post);
        if let Err(err) = self.repo.save(&self.posts) {
            self.posts.remove(0);
            warn!(
                "event=post_create module=service status=rolled_back post_id={post_id} error={err}"
            );
            return Err(BlogError::Persistence(err));
        }

        info!(
            "event=post_create module=service status=ok post_id={post_id} attachments={attachment_count} image={has_image}"
        );
        Ok(&self.posts[0])
    }

    /// Appends a comment to an existing post.
    ///
    /// # Errors
    /// - `Validation` when author or content is empty.
    /// - `NotFound` when `post_id` is unknown; storage is not written.
    /// - `Persistence` when the save fails; the comment is removed again.
    pub fn add_comment(
        &mut self,
        post_id: PostId,
        author: &str,
        content: &str,
    ) -> Result<Comment, BlogError> {
        Comment::validate_fields(author, content)?;

        let index = self
            .posts
            .iter()
            .position(|post| post.id == post_id)
            .ok_or(BlogError::NotFound(post_id))?;

        let now = self.now();
        let comment = Comment {
            id: CommentId(self.ids.next(now.timestamp_millis())),
            author: author.to_string(),
            content: content.to_string(),
            date: now.max(self.posts[index].date),
        };

        self.posts[index].comments.push(comment.clone());
        if let Err(err) = self.repo.save(&self.posts) {
            self.posts[index].comments.pop();
            warn!(
                "event=comment_add module=service status=rolled_back post_id={post_id} error={err}"
            );
            return Err(BlogError::Persistence(err));
        }

        info!(
            "event=comment_add module=service status=ok post_id={post_id} comment_id={} comments={}",
            comment.id,
            self.posts[index].comments.len()
        );
        Ok(comment)
    }

    /// Persists and activates `locale`. Post data is not touched.
    pub fn set_locale(&mut self, locale: Locale) -> Result<(), BlogError> {
        self.repo
            .save_locale(locale)
            .map_err(BlogError::Persistence)?;
        if self.locale != locale {
            info!(
                "event=locale_switch module=service status=ok from={} to={}",
                self.locale, locale
            );
        }
        self.locale = locale;
        Ok(())
    }

    /// Switches to the other supported locale and returns it.
    pub fn toggle_locale(&mut self) -> Result<Locale, BlogError> {
        let next = self.locale.toggled();
        self.set_locale(next)?;
        Ok(next)
    }

    /// UI labels for the active locale.
    pub fn labels(&self) -> Labels {
        Labels::for_locale(self.locale)
    }

    /// Clock reading truncated to the persisted millisecond precision.
    fn now(&self) -> DateTime<Utc> {
        self.clock.now().trunc_subsecs(3)
    }

    /// Feed for the active locale.
    pub fn feed(&self) -> FeedView {
        build_feed(&self.posts, self.locale)
    }

    /// Detail view for one post in the active locale.
    pub fn detail(
        &self,
        post_id: PostId,
        renderer: &dyn MarkdownRenderer,
    ) -> Option<PostDetailView> {
        build_detail(&self.posts, post_id, self.locale, renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::BlogStore;
    use crate::i18n::Locale;
    use crate::repo::blog_repo::KvBlogRepository;
    use crate::service::authoring::{InMemoryFile, NewPost};
    use crate::service::clock::FixedClock;
    use crate::service::BlogError;
    use crate::storage::MemoryStore;

    fn store_at(millis: i64) -> (BlogStore<KvBlogRepository<MemoryStore>>, FixedClock) {
        let clock = FixedClock::at_millis(millis);
        let store = BlogStore::open_with(
            KvBlogRepository::new(MemoryStore::new()),
            Box::new(clock.clone()),
            Locale::En,
        );
        (store, clock)
    }

    #[test]
    fn same_tick_posts_get_distinct_ids() {
        let (mut store, _clock) = store_at(1_700_000_000_000);
        let first = store.create_post(NewPost::new("a", "b")).expect("first").id;
        let second = store.create_post(NewPost::new("c", "d")).expect("second").id;
        assert_ne!(first, second);
        assert_eq!(store.posts()[0].id, second);
    }

    #[test]
    fn comment_date_is_not_before_post_date() {
        let (mut store, clock) = store_at(5_000);
        let post_id = store.create_post(NewPost::new("a", "b")).expect("post").id;
        clock.set_millis(1_000);
        let comment = store.add_comment(post_id, "ann", "hi").expect("comment");
        assert!(comment.date >= store.posts()[0].date);
    }

    #[test]
    fn validation_happens_before_encoding() {
        struct Exploding;
        impl crate::service::authoring::FileSource for Exploding {
            fn name(&self) -> &str {
                "boom"
            }
            fn mime_type(&self) -> &str {
                ""
            }
            fn read(&self) -> std::io::Result<Vec<u8>> {
                panic!("file must not be read for an invalid draft");
            }
        }

        let (mut store, _clock) = store_at(1);
        let err = store
            .create_post(NewPost::new("", "body").with_attachment(Exploding))
            .expect_err("empty title must fail");
        assert!(matches!(err, BlogError::Validation(_)));
        assert!(store.posts().is_empty());
    }

    #[test]
    fn encoding_failure_stores_nothing() {
        let (mut store, _clock) = store_at(1);
        let draft = NewPost::new("t", "c")
            .with_attachment(InMemoryFile::new("ok.txt", "text/plain", b"ok".to_vec()))
            .with_attachment(crate::service::authoring::PathFile::new(
                "/no/such/dir/missing.bin",
            ));
        let err = store.create_post(draft).expect_err("missing file must fail");
        assert!(matches!(err, BlogError::Encoding(ref e) if e.name == "missing.bin"));
        assert!(store.posts().is_empty());
        assert!(store.repository().store().raw("blogPosts").is_none());
    }
}
