//! Markup layer turning view models into HTML fragments.
//!
//! # Invariants
//! - All user-supplied text (titles, excerpts, names, comments) and all
//!   attribute values are escaped.
//! - `body_html` is embedded verbatim; the markdown renderer owns its safety.

use super::detail::PostDetailView;
use super::feed::{FeedView, PostSummary};
use std::fmt::Write;

/// Escapes `& < > " '` for element content and quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders the feed container contents.
pub fn render_feed(feed: &FeedView) -> String {
    match feed {
        FeedView::Empty { title, hint } => format!(
            "<div class=\"empty-feed\"><h3>{}</h3><p>{}</p></div>",
            escape_html(title),
            escape_html(hint)
        ),
        FeedView::Posts(items) => items.iter().map(render_card).collect(),
    }
}

fn render_card(summary: &PostSummary) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<article class=\"post-card\" data-post-id=\"{}\">",
        summary.id
    );
    if let Some(image_url) = &summary.image_url {
        let _ = write!(
            out,
            "<img src=\"{}\" alt=\"{}\" class=\"post-image\">",
            escape_html(image_url),
            escape_html(&summary.title)
        );
    }
    let _ = write!(
        out,
        "<div class=\"post-content\"><h2 class=\"post-title\">{}</h2>\
         <div class=\"post-meta\">{} &bull; {}</div>\
         <div class=\"post-excerpt\">{}</div>",
        escape_html(&summary.title),
        escape_html(&summary.date),
        escape_html(&summary.comments_label),
        escape_html(&summary.excerpt)
    );
    if !summary.attachment_names.is_empty() {
        let _ = write!(
            out,
            "<div class=\"post-attachments\"><strong>{}</strong>",
            escape_html(summary.attachments_label)
        );
        for name in &summary.attachment_names {
            let _ = write!(
                out,
                "<span class=\"attachment-link\">{}</span>",
                escape_html(name)
            );
        }
        out.push_str("</div>");
    }
    out.push_str("</div></article>");
    out
}

/// Renders the full post view including the comment form.
pub fn render_detail(detail: &PostDetailView) -> String {
    let mut out = String::from("<article class=\"post-full\">");
    if let Some(image_url) = &detail.image_url {
        let _ = write!(
            out,
            "<img src=\"{}\" alt=\"{}\" class=\"post-image\">",
            escape_html(image_url),
            escape_html(&detail.title)
        );
    }
    let _ = write!(
        out,
        "<h1>{}</h1><div class=\"post-meta\">{}</div>\
         <div class=\"markdown-content\">{}</div>",
        escape_html(&detail.title),
        escape_html(&detail.date),
        detail.body_html
    );

    if !detail.attachments.is_empty() {
        let _ = write!(
            out,
            "<div class=\"post-attachments\"><h3>{}</h3>",
            escape_html(detail.attachments_heading)
        );
        for attachment in &detail.attachments {
            let _ = write!(
                out,
                "<a href=\"{}\" download=\"{}\" class=\"attachment-link\">{} ({})</a>",
                escape_html(&attachment.href),
                escape_html(&attachment.name),
                escape_html(&attachment.name),
                escape_html(&attachment.size_label)
            );
        }
        out.push_str("</div>");
    }

    let form = &detail.form;
    let _ = write!(
        out,
        "<div class=\"comments-section\"><h3>{}</h3>\
         <form class=\"comment-form\" data-post-id=\"{}\">\
         <label>{}</label><input type=\"text\" name=\"author\" required>\
         <label>{}</label><textarea name=\"content\" required placeholder=\"{}\"></textarea>\
         <button type=\"submit\" class=\"btn btn-primary\">{}</button></form>\
         <div class=\"comments-list\">",
        escape_html(&detail.comments_heading),
        form.post_id,
        escape_html(form.name_label),
        escape_html(form.comment_label),
        escape_html(form.placeholder),
        escape_html(form.submit_label)
    );
    for comment in &detail.comments {
        let _ = write!(
            out,
            "<div class=\"comment\"><div class=\"comment-author\">{}</div>\
             <div class=\"comment-date\">{}</div>\
             <div class=\"comment-content\">{}</div></div>",
            escape_html(&comment.author),
            escape_html(&comment.date),
            escape_html(&comment.content)
        );
    }
    out.push_str("</div></div></article>");
    out
}
