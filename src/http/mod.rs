//! HTTP transport module
//!
//! The request executor talks to the network through the [`Transport`]
//! capability: one method that executes a GET request and returns a
//! streaming response. [`ReqwestTransport`] is the default implementation;
//! tests and embedders may inject their own.
//!
//! # Features
//!
//! - **Streaming bodies**: responses expose the body as a byte stream
//! - **Rate Limiting**: optional token bucket rate limiter using governor
//! - **No retries**: every request is a single attempt, errors propagate

mod client;
mod rate_limit;
mod transport;

pub use client::{ReqwestTransport, TransportConfig, TransportConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::{BodyStream, HttpRequest, HttpResponse, Transport, APP_TOKEN_HEADER};
