use crate::core::ast::{BlockContent, Conjugation};
use crate::render::Renderer;
use crate::Result;

/// Human-readable outline for terminals.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, document: &Conjugation) -> Result<String> {
        let mut out = String::new();

        if let Some(word) = &document.word {
            out.push_str(word);
            out.push_str("\n\n");
        }

        for section in &document.data {
            out.push_str(&format!("== {} ==\n", section.root));
            for block in &section.children {
                if !block.title.is_empty() {
                    out.push_str(&format!("-- {}\n", block.title));
                }
                match &block.content {
                    BlockContent::Table { rows } => {
                        for row in rows {
                            let cells: Vec<&str> = row
                                .iter()
                                .map(String::as_str)
                                .filter(|c| !c.is_empty())
                                .collect();
                            out.push_str(&format!("   {}\n", cells.join(" ")));
                        }
                    }
                    BlockContent::Lines { data } => {
                        for line in data {
                            out.push_str(&format!("   {}\n", line));
                        }
                    }
                }
            }
            out.push('\n');
        }

        Ok(out)
    }
}
