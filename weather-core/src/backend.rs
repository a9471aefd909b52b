use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::Client;

use crate::{error::BackendError, model::BackendWeather};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080/api/weather";

#[async_trait]
pub trait WeatherBackend: Send + Sync + Debug {
    /// Current conditions for `city`, exactly one request per call.
    async fn current(&self, city: &str) -> Result<BackendWeather, BackendError>;
}

/// `GET <endpoint>?city=<name>` against the weather backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    endpoint: String,
    http: Client,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    /// Like [`HttpBackend::new`], but requests give up after `timeout`.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BackendError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WeatherBackend for HttpBackend {
    async fn current(&self, city: &str) -> Result<BackendWeather, BackendError> {
        tracing::debug!(endpoint = %self.endpoint, city, "requesting current weather");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("city", city)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = (0..=MAX).rev().find(|i| body.is_char_boundary(*i)).unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
