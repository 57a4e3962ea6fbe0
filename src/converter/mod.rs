//! Converter modules for conjugation page to structured tree transformation.

mod block;
mod lines;
mod table;

use crate::adapters::html::{HtmlExtractor, PageExtractor};
use crate::core::ast::Conjugation;
use crate::{ExtractOptions, Result};
use std::path::Path;

pub use self::block::BlockConverter;
pub use self::lines::LinesConverter;
pub use self::table::TableConverter;

/// Main converter struct that turns a conjugation page into a [`Conjugation`].
pub struct ConjugationConverter {
    options: ExtractOptions,
    extractor: HtmlExtractor,
}

impl ConjugationConverter {
    /// Creates a new converter with the given options.
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            extractor: HtmlExtractor,
        }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ExtractOptions::default())
    }

    /// Converts page markup already held in memory.
    ///
    /// An absent or empty `word` yields [`Conjugation::empty`] without parsing.
    pub fn convert(&self, html: &str, word: Option<&str>) -> Result<Conjugation> {
        self.extractor.extract(html, word, &self.options)
    }

    /// Converts a saved page. Bytes that are not valid UTF-8 are replaced.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P, word: Option<&str>) -> Result<Conjugation> {
        let bytes = std::fs::read(path.as_ref())?;
        let html = String::from_utf8_lossy(&bytes);
        self.convert(&html, word)
    }
}

impl Default for ConjugationConverter {
    fn default() -> Self {
        Self::with_defaults()
    }
}
