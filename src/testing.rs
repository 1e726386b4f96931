//! Request-recording stub transport for unit tests

use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

type Responder = Box<dyn Fn(&HttpRequest) -> Result<HttpResponse> + Send + Sync>;

/// Transport that records every request and answers from a closure
pub(crate) struct StubTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responder: Responder,
}

impl StubTransport {
    pub(crate) fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse> + Send + Sync + 'static,
    {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        })
    }

    /// Always answer with `status` and `body`
    pub(crate) fn respond(status: u16, body: &'static str) -> Arc<Self> {
        Self::new(move |_| Ok(HttpResponse::from_bytes(status, body)))
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = (self.responder)(&request);
        self.requests.lock().unwrap().push(request);
        response
    }
}

/// Query parameter value of a recorded request
pub(crate) fn query_value(request: &HttpRequest, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
