//! HTTP header inspection, minus the network
//!
//! The shell performs the request; everything about what a valid target looks
//! like, how a transport failure is reported and what the response document
//! contains lives here.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("URL is empty")]
    EmptyUrl,

    #[error("Unsupported URL scheme: {0}. Only http and https are allowed")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCheckRequest {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderCheckResponse {
    pub url: String,
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<HeaderEntry>,
    pub timestamp: String,
    /// Milliseconds between sending the request and receiving the headers
    pub response_time: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Check that `input` is an absolute http(s) URL with a host
///
/// Parsing follows the same URL rules the HTTP client applies, so anything
/// accepted here can be sent. Returns the trimmed URL unchanged.
pub fn validate_url(input: &str) -> Result<String, HeaderError> {
    let url = input.trim();
    if url.is_empty() {
        return Err(HeaderError::EmptyUrl);
    }

    if url.chars().any(char::is_whitespace) {
        return Err(HeaderError::Malformed("URL contains whitespace".to_string()));
    }

    let parsed = url::Url::parse(url).map_err(|e| match e {
        url::ParseError::EmptyHost => HeaderError::MissingHost,
        other => HeaderError::Malformed(other.to_string()),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(HeaderError::UnsupportedScheme(other.to_string())),
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(url.to_string()),
        _ => Err(HeaderError::MissingHost),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureClass {
    InvalidUrl,
    Timeout,
    Dns,
    Connection,
    Upstream,
    Internal,
}

impl FailureClass {
    pub fn status_code(&self) -> u16 {
        match self {
            FailureClass::InvalidUrl => 400,
            FailureClass::Timeout => 504,
            FailureClass::Dns | FailureClass::Connection | FailureClass::Upstream => 502,
            FailureClass::Internal => 500,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FailureClass::InvalidUrl => "Please enter a valid http or https URL",
            FailureClass::Timeout => "The request timed out",
            FailureClass::Dns => "Could not resolve the host name",
            FailureClass::Connection => "Could not connect to the server",
            FailureClass::Upstream => "The server returned an invalid response",
            FailureClass::Internal => "An unexpected error occurred",
        }
    }
}

/// What the HTTP client reported about a request that never produced a response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportFailure {
    pub timeout: bool,
    pub connect: bool,
    /// Every message of the error's source chain, joined
    pub detail: String,
}

const DNS_MARKERS: [&str; 4] = [
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "no such host",
];

pub fn classify_transport_failure(failure: &TransportFailure) -> FailureClass {
    let detail = failure.detail.to_lowercase();

    if failure.timeout {
        FailureClass::Timeout
    } else if DNS_MARKERS.iter().any(|marker| detail.contains(marker)) {
        FailureClass::Dns
    } else if failure.connect {
        FailureClass::Connection
    } else {
        FailureClass::Upstream
    }
}

/// A HEAD answered with these is retried as GET
pub fn should_fallback_to_get(status: u16) -> bool {
    matches!(status, 405 | 501)
}

pub fn build_response<I>(
    url: &str,
    status: u16,
    reason: Option<&str>,
    headers: I,
    timestamp: DateTime<Utc>,
    elapsed: Duration,
) -> HeaderCheckResponse
where
    I: IntoIterator<Item = (String, String)>,
{
    HeaderCheckResponse {
        url: url.to_string(),
        status,
        status_text: reason.unwrap_or_default().to_string(),
        headers: headers
            .into_iter()
            .map(|(name, value)| HeaderEntry {
                name: name.to_lowercase(),
                value,
            })
            .collect(),
        timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        response_time: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
    }
}
