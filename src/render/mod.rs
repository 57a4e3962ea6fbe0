mod json;
mod text;

use crate::core::ast::Conjugation;
use crate::Result;

pub use json::JsonRenderer;
pub use text::TextRenderer;

pub trait Renderer {
    fn render(&self, document: &Conjugation) -> Result<String>;
}
