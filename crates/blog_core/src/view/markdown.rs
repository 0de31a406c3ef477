//! Markdown-to-HTML collaborator.
//!
//! The core treats the renderer as trusted: its output is embedded without
//! further sanitizing.

use pulldown_cmark::{html, Options, Parser};

/// Converts markdown source into rich-text markup.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> String;
}

/// CommonMark renderer with tables, strikethrough and task lists enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMarkRenderer;

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        let parser = Parser::new_ext(markdown, options);
        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, parser);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::{CommonMarkRenderer, MarkdownRenderer};

    #[test]
    fn renders_headings_and_emphasis() {
        let rendered = CommonMarkRenderer.render("# Hi\n\n**bold**");
        assert!(rendered.contains("<h1>Hi</h1>"));
        assert!(rendered.contains("<strong>bold</strong>"));
    }
}
