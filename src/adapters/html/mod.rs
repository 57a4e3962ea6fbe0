mod extractor;

use crate::core::ast::Conjugation;
use crate::core::text::strip_tags;
use crate::{ExtractOptions, Result};
use scraper::ElementRef;

pub trait PageExtractor {
    fn extract(
        &self,
        html: &str,
        word: Option<&str>,
        options: &ExtractOptions,
    ) -> Result<Conjugation>;
}

pub use extractor::HtmlExtractor;

/// Each text node trimmed, empties skipped, the rest concatenated without a
/// separator, then tag-stripped.
pub(crate) fn stripped_text(element: ElementRef<'_>) -> String {
    let joined: String = element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    strip_tags(&joined)
}

pub(crate) fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}
