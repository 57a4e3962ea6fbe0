use super::retry::{run_with_retry, Failure, RetryPolicy};
use crate::config::AppConfig;
use crate::{Error, Result};

/// HTTP client for the conjugation site.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl PageFetcher {
    /// Build a fetcher from loaded configuration. `base_url` must be set.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let base_url = config.require_base_url()?.to_string();
        let http = reqwest::Client::builder()
            .user_agent(config.fetch.user_agent.as_str())
            .timeout(config.fetch.timeout())
            .build()
            .map_err(|e| Error::InvalidConfig {
                field: "fetch".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            http,
            base_url,
            retry: config.fetch.retry_policy(),
        })
    }

    /// `{base_url}/{lang}/verbe/{word}.php`, both segments percent-encoded.
    pub fn page_url(&self, lang: &str, word: &str) -> String {
        format!(
            "{}/{}/verbe/{}.php",
            self.base_url,
            urlencoding::encode(lang),
            urlencoding::encode(word)
        )
    }

    /// `{base_url}/ajx/moteur.php`, absent parameters left out.
    pub fn lookup_url(&self, lang: Option<&str>, query: Option<&str>) -> String {
        let params: Vec<String> = [("l", lang), ("q", query)]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| format!("{key}={}", urlencoding::encode(v))))
            .collect();
        let mut url = format!("{}/ajx/moteur.php", self.base_url);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }
        url
    }

    /// Fetch the raw conjugation page, retrying timeouts and refused connections.
    ///
    /// Non-success statuses are logged, not raised: the site answers unknown
    /// verbs with a page that simply has no conjugation blocks.
    ///
    /// # Errors
    ///
    /// [`Error::GatewayTimeout`] once every attempt timed out or failed to
    /// connect, [`Error::BadGateway`] for any other transport failure.
    pub async fn fetch_page(&self, lang: &str, word: &str) -> Result<String> {
        let url = self.page_url(lang, word);
        let url = url.as_str();
        run_with_retry(&self.retry, move |attempt| {
            let request = self.http.get(url);
            async move {
                tracing::debug!(attempt, %url, "fetching conjugation page");
                let resp = request.send().await?;
                let status = resp.status();
                if !status.is_success() {
                    tracing::warn!(%url, status = status.as_u16(), "upstream returned non-success status");
                }
                resp.text().await.map_err(Failure::from)
            }
        })
        .await
    }

    /// Forward a word lookup and return the upstream JSON untouched.
    ///
    /// # Errors
    ///
    /// [`Error::BadGateway`] when the request fails or the body is not JSON.
    pub async fn lookup(
        &self,
        lang: Option<&str>,
        query: Option<&str>,
    ) -> Result<serde_json::Value> {
        let url = self.lookup_url(lang, query);
        tracing::debug!(%url, "forwarding word lookup");
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::BadGateway(e.to_string()))?;
        resp.json::<serde_json::Value>()
            .await
            .map_err(|e| Error::BadGateway(e.to_string()))
    }
}
