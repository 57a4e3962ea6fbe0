//! # conjugo
//!
//! Verb conjugation pages to structured JSON, using `scraper`.
//!
//! ## Example
//!
//! ```
//! use conjugo::{ConjugationConverter, ExtractOptions};
//!
//! let html = r#"
//!     <h2 class="mode">Indicatif</h2>
//!     <div class="tempstab">
//!       <h3 class="tempsheader">Présent</h3>
//!       <div class="tempscorps"><table><tr><td>je</td><td>suis</td></tr></table></div>
//!     </div>"#;
//!
//! let converter = ConjugationConverter::new(ExtractOptions::default());
//! let result = converter.convert(html, Some("être")).unwrap();
//! assert_eq!(result.data[0].root, "Indicatif");
//! ```

pub mod adapters;
pub mod config;
pub mod converter;
pub mod core;
pub mod error;
pub mod fetch;
pub mod render;
pub mod server;
pub mod service;

pub use config::AppConfig;
pub use converter::ConjugationConverter;
pub use crate::core::ast::{Block, BlockContent, Conjugation, Section};
pub use error::{Error, Result};
pub use service::ConjugationService;

use serde::{Deserialize, Serialize};

/// Options for page extraction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractOptions {
    /// Label of the section that collects tense blocks seen before any mood
    /// heading.
    #[serde(default = "default_section")]
    pub default_section: String,
}

fn default_section() -> String {
    "Default".to_string()
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            default_section: default_section(),
        }
    }
}
