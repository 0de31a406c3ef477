//! Detail view model for one post, its attachments and comments.

use super::markdown::MarkdownRenderer;
use super::text::{format_date, format_file_size};
use crate::i18n::{text, Locale, MessageKey};
use crate::model::post::{CommentId, Post, PostId};

/// Full post screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetailView {
    pub id: PostId,
    pub title: String,
    pub image_url: Option<String>,
    pub date: String,
    /// Renderer output; trusted markup.
    pub body_html: String,
    pub attachments_heading: &'static str,
    pub attachments: Vec<AttachmentView>,
    /// Localized heading with count, e.g. `Comments (2)`.
    pub comments_heading: String,
    /// Chronological (append) order.
    pub comments: Vec<CommentView>,
    pub form: CommentFormView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentView {
    pub name: String,
    pub size_label: String,
    /// Embedded payload usable as a download link.
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub id: CommentId,
    pub author: String,
    pub date: String,
    pub content: String,
}

/// Comment submission form bound to one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFormView {
    pub post_id: PostId,
    pub name_label: &'static str,
    pub comment_label: &'static str,
    pub placeholder: &'static str,
    pub submit_label: &'static str,
}

/// Builds the detail view for `post_id`, or `None` when it does not exist.
pub fn build_detail(
    posts: &[Post],
    post_id: PostId,
    locale: Locale,
    renderer: &dyn MarkdownRenderer,
) -> Option<PostDetailView> {
    let post = posts.iter().find(|post| post.id == post_id)?;
    Some(PostDetailView {
        id: post.id,
        title: post.title.clone(),
        image_url: post.image_url.clone(),
        date: format_date(&post.date, locale),
        body_html: renderer.render(&post.content),
        attachments_heading: text(locale, MessageKey::AttachmentsHeading),
        attachments: post
            .attachments
            .iter()
            .map(|attachment| AttachmentView {
                name: attachment.name.clone(),
                size_label: format_file_size(attachment.size),
                href: attachment.data.clone(),
            })
            .collect(),
        comments_heading: format!(
            "{} ({})",
            text(locale, MessageKey::CommentsHeading),
            post.comments.len()
        ),
        comments: post
            .comments
            .iter()
            .map(|comment| CommentView {
                id: comment.id,
                author: comment.author.clone(),
                date: format_date(&comment.date, locale),
                content: comment.content.clone(),
            })
            .collect(),
        form: CommentFormView {
            post_id: post.id,
            name_label: text(locale, MessageKey::YourName),
            comment_label: text(locale, MessageKey::CommentLabel),
            placeholder: text(locale, MessageKey::CommentPlaceholder),
            submit_label: text(locale, MessageKey::AddComment),
        },
    })
}
