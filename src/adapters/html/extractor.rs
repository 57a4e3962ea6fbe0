use super::{has_class, PageExtractor};
use crate::converter::BlockConverter;
use crate::core::ast::{Conjugation, Section};
use crate::core::text::clean_label;
use crate::{ExtractOptions, Result};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static ROLES: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h2.mode, div.tempstab, div.bloc").expect("role selector")
});

enum Role {
    MoodHeading,
    TenseBlock,
}

impl Role {
    fn of(element: ElementRef<'_>) -> Option<Self> {
        match element.value().name() {
            "h2" if has_class(element, "mode") => Some(Role::MoodHeading),
            "div" if has_class(element, "tempstab") || has_class(element, "bloc") => {
                Some(Role::TenseBlock)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlExtractor;

impl PageExtractor for HtmlExtractor {
    fn extract(
        &self,
        html: &str,
        word: Option<&str>,
        options: &ExtractOptions,
    ) -> Result<Conjugation> {
        let Some(word) = word.filter(|w| !w.is_empty()) else {
            return Ok(Conjugation::empty());
        };

        let document = Html::parse_document(html);
        // The open section is always the last one pushed.
        let data = document
            .select(&ROLES)
            .fold(Vec::new(), |mut sections, element| {
                self.visit(element, &mut sections, options);
                sections
            });

        tracing::debug!(
            word,
            sections = data.len(),
            blocks = data.iter().map(|s| s.children.len()).sum::<usize>(),
            "extracted conjugation"
        );

        Ok(Conjugation {
            word: Some(word.to_string()),
            data,
        })
    }
}

impl HtmlExtractor {
    fn visit(
        &self,
        element: ElementRef<'_>,
        sections: &mut Vec<Section>,
        options: &ExtractOptions,
    ) {
        match Role::of(element) {
            Some(Role::MoodHeading) => {
                let label: String = element.text().collect();
                sections.push(Section::new(clean_label(&label)));
            }
            Some(Role::TenseBlock) => {
                if sections.is_empty() {
                    sections.push(Section::new(options.default_section.as_str()));
                }
                if let (Some(block), Some(current)) =
                    (BlockConverter::convert(element), sections.last_mut())
                {
                    current.children.push(block);
                }
            }
            None => {}
        }
    }
}
