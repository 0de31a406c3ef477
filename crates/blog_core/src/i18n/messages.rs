//! Static UI string tables.

use super::locale::Locale;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Identifier of one translatable UI string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageKey {
    AppTitle,
    NewPost,
    NewPostHeading,
    TitleLabel,
    ContentLabel,
    ImageLabel,
    FilesLabel,
    Publish,
    Cancel,
    NoPostsTitle,
    NoPostsHint,
    /// Noun following the comment count in the feed.
    CommentsNoun,
    /// Inline prefix before attachment names in the feed.
    AttachmentsInline,
    AttachmentsHeading,
    CommentsHeading,
    YourName,
    CommentLabel,
    CommentPlaceholder,
    AddComment,
}

impl MessageKey {
    pub const ALL: [MessageKey; 19] = [
        MessageKey::AppTitle,
        MessageKey::NewPost,
        MessageKey::NewPostHeading,
        MessageKey::TitleLabel,
        MessageKey::ContentLabel,
        MessageKey::ImageLabel,
        MessageKey::FilesLabel,
        MessageKey::Publish,
        MessageKey::Cancel,
        MessageKey::NoPostsTitle,
        MessageKey::NoPostsHint,
        MessageKey::CommentsNoun,
        MessageKey::AttachmentsInline,
        MessageKey::AttachmentsHeading,
        MessageKey::CommentsHeading,
        MessageKey::YourName,
        MessageKey::CommentLabel,
        MessageKey::CommentPlaceholder,
        MessageKey::AddComment,
    ];

    /// Stable snake_case id, used by shells that address labels by name.
    pub fn id(self) -> &'static str {
        match self {
            Self::AppTitle => "app_title",
            Self::NewPost => "new_post",
            Self::NewPostHeading => "new_post_heading",
            Self::TitleLabel => "title_label",
            Self::ContentLabel => "content_label",
            Self::ImageLabel => "image_label",
            Self::FilesLabel => "files_label",
            Self::Publish => "publish",
            Self::Cancel => "cancel",
            Self::NoPostsTitle => "no_posts_title",
            Self::NoPostsHint => "no_posts_hint",
            Self::CommentsNoun => "comments_noun",
            Self::AttachmentsInline => "attachments_inline",
            Self::AttachmentsHeading => "attachments_heading",
            Self::CommentsHeading => "comments_heading",
            Self::YourName => "your_name",
            Self::CommentLabel => "comment_label",
            Self::CommentPlaceholder => "comment_placeholder",
            Self::AddComment => "add_comment",
        }
    }
}

const EN: &[(MessageKey, &str)] = &[
    (MessageKey::AppTitle, "My Blog"),
    (MessageKey::NewPost, "New Post"),
    (MessageKey::NewPostHeading, "Create New Post"),
    (MessageKey::TitleLabel, "Title"),
    (MessageKey::ContentLabel, "Content (Markdown supported)"),
    (MessageKey::ImageLabel, "Image"),
    (MessageKey::FilesLabel, "Attach files"),
    (MessageKey::Publish, "Publish"),
    (MessageKey::Cancel, "Cancel"),
    (MessageKey::NoPostsTitle, "No posts yet"),
    (MessageKey::NoPostsHint, "Create your first post to get started!"),
    (MessageKey::CommentsNoun, "comments"),
    (MessageKey::AttachmentsInline, "Attachments:"),
    (MessageKey::AttachmentsHeading, "Attachments"),
    (MessageKey::CommentsHeading, "Comments"),
    (MessageKey::YourName, "Your name"),
    (MessageKey::CommentLabel, "Comment"),
    (MessageKey::CommentPlaceholder, "Write your comment..."),
    (MessageKey::AddComment, "Add Comment"),
];

const RU: &[(MessageKey, &str)] = &[
    (MessageKey::AppTitle, "Мой блог"),
    (MessageKey::NewPost, "Новый пост"),
    (MessageKey::NewPostHeading, "Создать новый пост"),
    (MessageKey::TitleLabel, "Заголовок"),
    (MessageKey::ContentLabel, "Содержание (поддерживается Markdown)"),
    (MessageKey::ImageLabel, "Изображение"),
    (MessageKey::FilesLabel, "Прикрепить файлы"),
    (MessageKey::Publish, "Опубликовать"),
    (MessageKey::Cancel, "Отмена"),
    (MessageKey::NoPostsTitle, "Пока нет постов"),
    (MessageKey::NoPostsHint, "Создайте свой первый пост!"),
    (MessageKey::CommentsNoun, "комментариев"),
    (MessageKey::AttachmentsInline, "Вложения:"),
    (MessageKey::AttachmentsHeading, "Вложения"),
    (MessageKey::CommentsHeading, "Комментарии"),
    (MessageKey::YourName, "Ваше имя"),
    (MessageKey::CommentLabel, "Комментарий"),
    (MessageKey::CommentPlaceholder, "Напишите ваш комментарий..."),
    (MessageKey::AddComment, "Добавить комментарий"),
];

static CATALOG: Lazy<BTreeMap<(Locale, MessageKey), &'static str>> = Lazy::new(|| {
    let mut catalog = BTreeMap::new();
    for (locale, table) in [(Locale::En, EN), (Locale::Ru, RU)] {
        for (key, value) in table {
            catalog.insert((locale, *key), *value);
        }
    }
    catalog
});

/// Exact lookup; `None` when `locale` has no entry for `key`.
pub fn translate(locale: Locale, key: MessageKey) -> Option<&'static str> {
    CATALOG.get(&(locale, key)).copied()
}

/// Lookup with fallback to the default locale.
///
/// Returns the key id itself only if even the default table lacks it.
pub fn text(locale: Locale, key: MessageKey) -> &'static str {
    translate(locale, key)
        .or_else(|| translate(Locale::default(), key))
        .unwrap_or_else(|| key.id())
}

/// Every UI string resolved for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub locale: Locale,
    entries: BTreeMap<MessageKey, &'static str>,
}

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        let entries = MessageKey::ALL
            .iter()
            .map(|key| (*key, text(locale, *key)))
            .collect();
        Self { locale, entries }
    }

    pub fn get(&self, key: MessageKey) -> &'static str {
        self.entries
            .get(&key)
            .copied()
            .unwrap_or_else(|| text(self.locale, key))
    }

    /// Labels in `MessageKey::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (MessageKey, &'static str)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, *value))
    }
}

#[cfg(test)]
mod tests {
    use super::{text, translate, Labels, MessageKey};
    use crate::i18n::Locale;

    #[test]
    fn every_key_is_translated_in_every_locale() {
        for locale in Locale::ALL {
            for key in MessageKey::ALL {
                assert!(
                    translate(locale, key).is_some(),
                    "missing {} for {}",
                    key.id(),
                    locale
                );
            }
        }
    }

    #[test]
    fn russian_labels_differ_from_english() {
        assert_eq!(text(Locale::En, MessageKey::AddComment), "Add Comment");
        assert_eq!(
            text(Locale::Ru, MessageKey::AddComment),
            "Добавить комментарий"
        );
    }

    #[test]
    fn labels_iterate_every_key_once() {
        let labels = Labels::for_locale(Locale::Ru);
        assert_eq!(labels.iter().count(), MessageKey::ALL.len());
        assert_eq!(labels.get(MessageKey::Cancel), "Отмена");
    }
}
