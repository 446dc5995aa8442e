use std::fmt;

use serde::{Deserialize, Serialize};

pub type RequestId = u64;

/// Body of `POST <base>/scrape`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeRequest<'a> {
    pub url: &'a str,
}

/// Success body. Every field may be omitted by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ScrapeResponse {
    pub data: Option<ScrapeData>,
    pub screenshot: Option<String>,
}

/// Result object. `null` is accepted wherever the service may leave a value out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ScrapeData {
    pub links: Option<Vec<WireLink>>,
    pub contents: Option<Vec<Option<String>>>,
    pub images: Option<Vec<WireImage>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct WireLink {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct WireImage {
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    ScrapeCompleted {
        request_id: RequestId,
        result: Result<ScrapeResponse, ClientError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ClientError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClientError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidServiceBase,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
    /// The service answered with a body that is not the expected JSON.
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidServiceBase => write!(f, "invalid service base"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "undecodable response"),
        }
    }
}
