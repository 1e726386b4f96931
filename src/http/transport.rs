//! Transport capability and its request/response types

use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::stream::{self, BoxStream};
use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use std::fmt;
use url::Url;

/// Header carrying the Socrata application token
pub const APP_TOKEN_HEADER: &str = "X-App-Token";

/// Streaming response body
pub type BodyStream = BoxStream<'static, Result<Bytes>>;

/// Executes GET requests
///
/// Implementations perform exactly one attempt per call. Network failures
/// are reported as [`Error::Transport`]; any HTTP status, including error
/// statuses, is returned as a response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a GET request
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// A GET request ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Full request URL, query string included
    pub url: Url,
    /// Request headers
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Create a request without headers
    pub fn get(url: Url) -> Self {
        Self {
            url,
            headers: Vec::new(),
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Look up a header value (case-insensitive)
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// Response returned by a [`Transport`]
///
/// The body is live: the caller owns it and releases the underlying
/// connection by consuming or dropping the response.
pub struct HttpResponse {
    status: u16,
    headers: HeaderMap,
    body: BodyStream,
}

impl HttpResponse {
    /// Create a response from a body stream
    pub fn new(status: u16, headers: HeaderMap, body: BodyStream) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Create a response with an in-memory body
    pub fn from_bytes(status: u16, body: impl Into<Bytes>) -> Self {
        let body: Bytes = body.into();
        let body = stream::once(async move { Ok(body) }).boxed();
        Self::new(status, HeaderMap::new(), body)
    }

    /// Add a header. Invalid names or values are ignored.
    #[must_use]
    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(key.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Check if the status is below 400
    pub fn is_success(&self) -> bool {
        self.status < 400
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get a header value as text
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Take the body stream
    pub fn into_stream(self) -> BodyStream {
        self.body
    }

    /// Read the full body
    pub async fn bytes(self) -> Result<Bytes> {
        let mut body = self.body;
        let mut buf = BytesMut::new();
        while let Some(chunk) = body.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf.freeze())
    }

    /// Read the full body as text, replacing invalid UTF-8
    pub async fn text(self) -> Result<String> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read the full body and deserialize it as JSON
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let bytes = self.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
