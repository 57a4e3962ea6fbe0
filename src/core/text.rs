//! Permissive text normalization shared by every extraction step.
//!
//! Tag removal is a plain non-greedy `<.*?>` match, not a parser: it does not
//! cross newlines and will cut inside quoted attribute values containing `>`.
//! Upstream pages are inconsistent enough that this is the behaviour callers
//! rely on.

use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").expect("tag pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("line break pattern"));

/// Remove every `<...>` substring.
pub fn strip_tags(s: &str) -> String {
    TAG.replace_all(s, "").into_owned()
}

/// Collapse whitespace runs to a single space and trim.
pub fn collapse_ws(s: &str) -> String {
    WHITESPACE.replace_all(s, " ").trim().to_string()
}

/// Decode the entities an HTML serializer emits for text content.
///
/// `&amp;` goes last so `&amp;lt;` stays a literal `&lt;`.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&nbsp;", "\u{a0}")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Split serialized markup on `<br>` markers, in any of their spellings.
pub fn split_line_breaks(markup: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK.split(markup)
}

/// Strip tags then trim, leaving inner whitespace alone.
pub fn clean_label(s: &str) -> String {
    strip_tags(s).trim().to_string()
}
