//! Tense container converter - picks the table or lines shape for one block.

use super::{LinesConverter, TableConverter};
use crate::adapters::html::stripped_text;
use crate::core::ast::Block;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

static HEADER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3.tempsheader").expect("header selector"));
static BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.tempscorps").expect("body selector"));
static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("table selector"));

/// Converter for `tempstab` / `bloc` containers.
pub struct BlockConverter;

impl BlockConverter {
    /// Returns `None` when the container has no body; a missing header only
    /// leaves the title empty.
    pub fn convert(container: ElementRef<'_>) -> Option<Block> {
        let title = container
            .select(&HEADER)
            .next()
            .map(stripped_text)
            .unwrap_or_default();

        let Some(body) = container.select(&BODY).next() else {
            tracing::debug!(%title, "tense container without body skipped");
            return None;
        };

        let content = match body.select(&TABLE).next() {
            Some(table) => TableConverter::convert(table),
            None => LinesConverter::convert(body),
        };

        Some(Block { title, content })
    }
}
