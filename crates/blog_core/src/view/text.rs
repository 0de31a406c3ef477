//! Text helpers for post previews and metadata labels.
//!
//! # Invariants
//! - Every helper is a pure function of its arguments.
//! - `strip_markdown` is best-effort and may mis-handle nested markup.

use crate::i18n::Locale;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum characters kept in a feed excerpt before the ellipsis.
pub const EXCERPT_CHARS: usize = 150;
const ELLIPSIS: &str = "...";
const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

static HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#{1,6}\s").expect("valid header regex"));
static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold regex"));
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("valid italic regex"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]\(.*?\)").expect("valid link regex"));
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").expect("valid code regex"));

/// Removes the common inline markdown markers and flattens newlines.
///
/// Rules, applied in order: `#`..`######` header prefixes, `**bold**`,
/// `*italic*`, `[text](url)` -> `text`, `` `code` ``, newline -> space.
pub fn strip_markdown(markdown: &str) -> String {
    let text = HEADER_RE.replace_all(markdown, "");
    let text = BOLD_RE.replace_all(&text, "$1");
    let text = ITALIC_RE.replace_all(&text, "$1");
    let text = LINK_RE.replace_all(&text, "$1");
    let text = CODE_RE.replace_all(&text, "$1");
    text.replace('\n', " ").trim().to_string()
}

/// Feed preview: stripped text capped at `EXCERPT_CHARS`, then `...`.
///
/// The ellipsis is appended even when nothing was cut.
pub fn excerpt(markdown: &str) -> String {
    let mut preview: String = strip_markdown(markdown).chars().take(EXCERPT_CHARS).collect();
    preview.push_str(ELLIPSIS);
    preview
}

/// Human-readable 1024-based size with at most two decimals.
///
/// Sizes of 1024 GB and above stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    while unit + 1 < SIZE_UNITS.len() && bytes >= 1u64 << (10 * (unit + 1)) {
        unit += 1;
    }

    let scaled = bytes as f64 / (1u64 << (10 * unit)) as f64;
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{rounded} {}", SIZE_UNITS[unit])
}

/// Short calendar date in the locale's conventional order (UTC).
pub fn format_date(date: &DateTime<Utc>, locale: Locale) -> String {
    match locale {
        Locale::En => date.format("%-m/%-d/%Y").to_string(),
        Locale::Ru => date.format("%d.%m.%Y").to_string(),
    }
}
