use crate::config::Config;
use crate::search::query::SearchParams;
use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, Url};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Fetch capability used by the search session.
///
/// Only transport failures are errors; the response itself is not consulted.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn fetch(&self, params: &SearchParams) -> Result<(), ApiError>;
}

/// `reqwest` backed search endpoint
#[derive(Clone)]
pub struct HttpSearchClient {
    client: Client,
    base_url: Url,
    endpoint: String,
}

impl HttpSearchClient {
    pub fn new(base_url: &str, endpoint: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            client: Client::new(),
            base_url,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.api_base, config.api_endpoint.clone())
    }

    /// Absolute URL requested for `params`
    pub fn request_url(&self, params: &SearchParams) -> Result<Url, ApiError> {
        let target = params.fetch_target(&self.endpoint);
        self.base_url
            .join(&target)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", target, e)))
    }
}

#[async_trait]
impl SearchApi for HttpSearchClient {
    async fn fetch(&self, params: &SearchParams) -> Result<(), ApiError> {
        let url = self.request_url(params)?;
        info!("GET {}", url);

        let response = self.client.get(url).send().await?;
        debug!("Search endpoint answered {}", response.status());

        Ok(())
    }
}
