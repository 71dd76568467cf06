use async_trait::async_trait;

use crate::config::{ClientConfig, ConfigError};
use crate::error::SourceError;

/// Anything that can answer a GET with a response body.
///
/// Non-2xx responses must be reported as [`SourceError::Status`].
#[async_trait]
pub trait DexSource: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, SourceError>;
}

/// [`DexSource`] backed by a real HTTP client
#[derive(Clone)]
pub struct HttpSource {
    http: reqwest::Client,
}

impl HttpSource {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(ConfigError::HttpClient)?;
        Ok(Self { http })
    }
}

#[async_trait]
impl DexSource for HttpSource {
    async fn get(&self, url: &str) -> Result<String, SourceError> {
        tracing::debug!(url = %url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::from_reqwest(url, e))
    }
}
