//! Table converter - one row of trimmed cell text per `<tr>`.

use crate::adapters::html::stripped_text;
use crate::core::ast::BlockContent;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("row selector"));
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("cell selector"));

/// Converter for `<table>` bodies.
pub struct TableConverter;

impl TableConverter {
    /// Rows whose cells are all empty after trimming are dropped.
    pub fn convert(table: ElementRef<'_>) -> BlockContent {
        let rows = table
            .select(&ROW)
            .filter_map(|row| {
                let cells: Vec<String> = row.select(&CELL).map(stripped_text).collect();
                cells.iter().any(|c| !c.is_empty()).then_some(cells)
            })
            .collect();
        BlockContent::Table { rows }
    }
}
