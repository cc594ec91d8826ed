use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use super::{Fetch, FetchResponse};
use crate::errors::{BoxError, ConfigError};

pub const DEFAULT_BASE_URL: &str = "http://moonbase.local";

/// Where the device's web server lives and how to identify ourselves to it.
#[derive(Debug, Clone)]
pub struct HttpFetchConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for HttpFetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("moonbase-ctx/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// [`Fetch`] backed by a `reqwest` client. Paths resolve against the base url.
#[derive(Debug, Clone)]
pub struct HttpFetch {
    client: reqwest::Client,
    base: Url,
}

impl HttpFetch {
    pub fn new(config: &HttpFetchConfig) -> Result<Self, ConfigError> {
        let base = Url::parse(&config.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "expected an http(s) url".to_string(),
            });
        }
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn resolve(&self, path: &str) -> Result<Url, BoxError> {
        Ok(self.base.join(path)?)
    }
}

#[async_trait]
impl Fetch for HttpFetch {
    async fn get(&self, path: &str) -> Result<FetchResponse, BoxError> {
        let url = self.resolve(path)?;
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(path, status, bytes = body.len(), "fetched");
        Ok(FetchResponse { status, body })
    }
}
