//! Request-level orchestration shared by the CLI and the HTTP service.

use crate::config::AppConfig;
use crate::converter::ConjugationConverter;
use crate::core::ast::Conjugation;
use crate::fetch::PageFetcher;
use crate::{Error, Result};
use serde_json::json;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Fetch-then-extract pipeline plus the pass-through word lookup.
pub struct ConjugationService {
    fetcher: PageFetcher,
    converter: ConjugationConverter,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "extractor panicked".to_string())
}

impl ConjugationService {
    pub fn new(fetcher: PageFetcher, converter: ConjugationConverter) -> Self {
        Self { fetcher, converter }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(
            PageFetcher::from_config(config)?,
            ConjugationConverter::new(config.extract.clone()),
        ))
    }

    /// Conjugation tree for `word` in language `lang`.
    ///
    /// A missing or empty language or word answers [`Conjugation::empty`]
    /// without touching the network.
    pub async fn search_word(&self, lang: Option<&str>, word: Option<&str>) -> Result<Conjugation> {
        let (Some(lang), Some(word)) = (present(lang), present(word)) else {
            return Ok(Conjugation::empty());
        };
        let html = self.fetcher.fetch_page(lang, word).await?;
        // A panic here must not take the request task down with it.
        panic::catch_unwind(AssertUnwindSafe(|| self.converter.convert(&html, Some(word))))
            .map_err(|payload| Error::Extraction(panic_message(payload)))?
    }

    /// `{"data": <upstream body>}` for the site's word lookup.
    pub async fn check_word(
        &self,
        lang: Option<&str>,
        query: Option<&str>,
    ) -> Result<serde_json::Value> {
        let body = self.fetcher.lookup(lang, query).await?;
        Ok(json!({ "data": body }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_service() -> ConjugationService {
        // Port 9 (discard) is never contacted: every case below short-circuits.
        let config = AppConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        };
        ConjugationService::from_config(&config).expect("service should build")
    }

    #[test]
    fn test_panic_message() {
        assert_eq!(panic_message(Box::new("index out of bounds")), "index out of bounds");
        assert_eq!(panic_message(Box::new(String::from("bad slice"))), "bad slice");
        assert_eq!(panic_message(Box::new(42_u8)), "extractor panicked");
    }

    #[tokio::test]
    async fn test_missing_inputs_return_empty_result() {
        let service = offline_service();
        for (lang, word) in [
            (None, Some("être")),
            (Some("fr"), None),
            (Some(""), Some("être")),
            (Some("fr"), Some("")),
            (None, None),
        ] {
            let result = service.search_word(lang, word).await.expect("no error");
            assert_eq!(result, Conjugation::empty());
        }
    }
}
