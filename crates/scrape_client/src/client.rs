use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use session_logging::{session_debug, session_trace};
use url::Url;

use crate::{ClientError, FailureKind, ScrapeRequest, ScrapeResponse};

const SCRAPE_PATH: &str = "/scrape";
const JSON: &str = "application/json";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base address of the scraping service, e.g. `http://localhost:5173`.
    pub service_base: String,
    pub connect_timeout: Duration,
    /// Overall request deadline. `None` leaves timing to the service.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl ClientSettings {
    pub fn new(service_base: impl Into<String>) -> Self {
        Self {
            service_base: service_base.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_bytes: 5 * 1024 * 1024,
        }
    }

    /// `<service_base>/scrape`; the base must be an absolute http(s) URL.
    pub fn endpoint(&self) -> Result<Url, ClientError> {
        let base = Url::parse(&self.service_base).map_err(|err| {
            ClientError::new(
                FailureKind::InvalidServiceBase,
                format!("{}: {err}", self.service_base),
            )
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::new(
                FailureKind::InvalidServiceBase,
                format!("unsupported scheme {}", base.scheme()),
            ));
        }

        let joined = format!("{}{SCRAPE_PATH}", self.service_base.trim_end_matches('/'));
        Url::parse(&joined)
            .map_err(|err| ClientError::new(FailureKind::InvalidServiceBase, err.to_string()))
    }
}

#[async_trait::async_trait]
pub trait ScrapeClient: Send + Sync {
    /// Asks the service to scrape `target`. Exactly one request, no retries.
    async fn scrape(&self, target: &str) -> Result<ScrapeResponse, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestScrapeClient {
    client: reqwest::Client,
    endpoint: Url,
    max_bytes: u64,
}

impl ReqwestScrapeClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let endpoint = settings.endpoint()?;

        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            max_bytes: settings.max_bytes,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl ScrapeClient for ReqwestScrapeClient {
    async fn scrape(&self, target: &str) -> Result<ScrapeResponse, ClientError> {
        let body = serde_json::to_vec(&ScrapeRequest { url: target })
            .map_err(|err| ClientError::new(FailureKind::Decode, err.to_string()))?;

        session_debug!("POST {} ({} bytes)", self.endpoint, body.len());
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.max_bytes {
                return Err(ClientError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.max_bytes {
                return Err(ClientError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        session_trace!("Received {} bytes from {}", bytes.len(), self.endpoint);

        serde_json::from_slice(&bytes)
            .map_err(|err| ClientError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(FailureKind::Timeout, err.to_string());
    }
    ClientError::new(FailureKind::Network, err.to_string())
}
