//! Feed view model: one summary per post, newest first.

use super::text::{excerpt, format_date};
use crate::i18n::{text, Locale, MessageKey};
use crate::model::post::{Post, PostId};

/// Feed screen contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedView {
    /// Placeholder shown while the collection is empty.
    Empty {
        title: &'static str,
        hint: &'static str,
    },
    Posts(Vec<PostSummary>),
}

/// Card shown for one post in the feed. Carries no attachment payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub image_url: Option<String>,
    pub excerpt: String,
    pub date: String,
    pub comment_count: usize,
    /// Count plus localized noun, e.g. `3 comments`.
    pub comments_label: String,
    pub attachments_label: &'static str,
    pub attachment_names: Vec<String>,
}

/// Builds the feed for `posts` in collection order.
pub fn build_feed(posts: &[Post], locale: Locale) -> FeedView {
    if posts.is_empty() {
        return FeedView::Empty {
            title: text(locale, MessageKey::NoPostsTitle),
            hint: text(locale, MessageKey::NoPostsHint),
        };
    }

    FeedView::Posts(posts.iter().map(|post| summarize(post, locale)).collect())
}

fn summarize(post: &Post, locale: Locale) -> PostSummary {
    let comment_count = post.comments.len();
    PostSummary {
        id: post.id,
        title: post.title.clone(),
        image_url: post.image_url.clone(),
        excerpt: excerpt(&post.content),
        date: format_date(&post.date, locale),
        comment_count,
        comments_label: format!("{comment_count} {}", text(locale, MessageKey::CommentsNoun)),
        attachments_label: text(locale, MessageKey::AttachmentsInline),
        attachment_names: post
            .attachments
            .iter()
            .map(|attachment| attachment.name.clone())
            .collect(),
    }
}
