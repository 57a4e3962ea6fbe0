//! Layered configuration loading using figment.
//!
//! Sources, highest priority first:
//! 1. `CONJUGO_*` environment variables (`__` separates nested sections,
//!    e.g. `CONJUGO_FETCH__MAX_ATTEMPTS`)
//! 2. The bare `BASE_URL` variable
//! 3. A TOML file (`--config <FILE>`, else `./conjugo.toml` when present)
//! 4. Built-in defaults
//!
//! [`AppConfig::load`] reads a `.env` file first, so any of the variables above
//! may live there.

use crate::fetch::RetryPolicy;
use crate::{Error, ExtractOptions, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = "conjugo.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Root of the conjugation site, without trailing slash.
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub extract: ExtractOptions,
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_max_attempts() -> u32 {
    3
}

const fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_user_agent() -> String {
    format!("conjugo/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Per-attempt request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Attempts before a timeout is reported upstream.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            delay: Duration::from_millis(self.retry_delay_ms),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl AppConfig {
    /// Load `.env`, then every layered source, then validate.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let _ = dotenvy::dotenv();
        let config: Self = Self::figment(config_file).extract()?;
        config.validated()
    }

    /// Load only the `extract` section. Offline extraction does not depend on
    /// fetch or server settings, so those are neither parsed nor validated.
    pub fn load_extract_options(config_file: Option<&Path>) -> Result<ExtractOptions> {
        let _ = dotenvy::dotenv();
        Ok(Self::figment(config_file).focus("extract").extract()?)
    }

    /// Build the provider chain without reading `.env`.
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let file = config_file.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::raw().only(&["BASE_URL"]))
            .merge(Env::prefixed("CONJUGO_").split("__"))
    }

    /// Normalize and check values the type system does not cover.
    pub fn validated(mut self) -> Result<Self> {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();

        if self.fetch.max_attempts == 0 {
            return Err(Error::InvalidConfig {
                field: "fetch.max_attempts".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.fetch.timeout_secs == 0 {
            return Err(Error::InvalidConfig {
                field: "fetch.timeout_secs".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(self)
    }

    /// The base URL, or an error naming the missing setting.
    pub fn require_base_url(&self) -> Result<&str> {
        if self.base_url.is_empty() {
            return Err(Error::InvalidConfig {
                field: "base_url".to_string(),
                reason: "not set (use BASE_URL or CONJUGO_BASE_URL)".to_string(),
            });
        }
        Ok(&self.base_url)
    }
}
