//! Lines converter - splits a free-form body on `<br>` markers.

use crate::core::ast::BlockContent;
use crate::core::text::{collapse_ws, decode_entities, split_line_breaks, strip_tags};
use scraper::ElementRef;

/// Converter for bodies that carry no table.
pub struct LinesConverter;

impl LinesConverter {
    pub fn convert(body: ElementRef<'_>) -> BlockContent {
        BlockContent::Lines {
            data: Self::split(&body.inner_html()),
        }
    }

    /// Split serialized markup into tag-free, whitespace-collapsed lines.
    ///
    /// Whitespace is collapsed before stripping so comments and attribute
    /// values spanning several lines are matched as one tag.
    pub fn split(markup: &str) -> Vec<String> {
        split_line_breaks(markup)
            .map(|fragment| collapse_ws(&strip_tags(&collapse_ws(&decode_entities(fragment)))))
            .filter(|line| !line.is_empty())
            .collect()
    }
}
