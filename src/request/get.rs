//! GET request container

use super::executor::execute;
use crate::error::{Error, Result};
use crate::http::{HttpRequest, HttpResponse, ReqwestTransport, Transport, APP_TOKEN_HEADER};
use crate::metadata::{Column, Metadata, MetadataLocator};
use crate::query::{QueryParams, SimpleFilters, SoqlQuery};
use crate::types::ResponseFormat;
use std::fmt;
use std::sync::Arc;
use url::Url;

pub(crate) const OFFSET_WITHOUT_ORDER: &str = "cannot use an offset without setting the order";

/// A SODA GET request
///
/// The endpoint is given without format extension, for example
/// `https://data.ct.gov/resource/hma6-9xbg`. The format is appended when the
/// request is sent.
#[derive(Clone)]
pub struct GetRequest {
    app_token: String,
    endpoint: Url,
    /// Response format
    pub format: ResponseFormat,
    /// Exact-match filters
    pub filters: SimpleFilters,
    /// SoQL clauses
    pub query: SoqlQuery,
    metadata: MetadataLocator,
    transport: Arc<dyn Transport>,
}

impl GetRequest {
    /// Create a request using a default [`ReqwestTransport`]
    pub fn new(endpoint: &str, app_token: impl Into<String>) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new()?);
        Self::with_transport(endpoint, app_token, transport)
    }

    /// Create a request sending through `transport`
    pub fn with_transport(
        endpoint: &str,
        app_token: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        let metadata = MetadataLocator::from_endpoint(&endpoint);

        Ok(Self {
            app_token: app_token.into(),
            endpoint,
            format: ResponseFormat::default(),
            filters: SimpleFilters::new(),
            query: SoqlQuery::new(),
            metadata,
            transport,
        })
    }

    /// Resource endpoint without format extension
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Application token sent with every request
    pub fn app_token(&self) -> &str {
        &self.app_token
    }

    /// Transport used to send requests
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Endpoint with the format extension, e.g. `.../hma6-9xbg.json`
    pub fn endpoint_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        let path = format!(
            "{}.{}",
            url.path().trim_end_matches('/'),
            self.format.extension()
        );
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    /// Filters and query clauses merged into one parameter set
    pub fn url_params(&self) -> QueryParams {
        QueryParams::merged(&self.filters, &self.query)
    }

    /// Snapshot the request into a ready-to-send form.
    ///
    /// Fails without touching the network if an offset is set without any
    /// sort key.
    pub fn prepare(&self) -> Result<PreparedRequest> {
        if self.query.offset > 0 && !self.query.has_order() {
            return Err(Error::config(OFFSET_WITHOUT_ORDER));
        }

        let mut url = self.endpoint_url();
        let params = self.url_params();
        if !params.is_empty() {
            url.set_query(Some(&params.encode()));
        }

        Ok(PreparedRequest {
            url,
            app_token: self.app_token.clone(),
        })
    }

    /// Execute the GET request
    pub async fn get(&self) -> Result<HttpResponse> {
        self.prepare()?.send(self.transport.as_ref()).await
    }

    /// Fetch the dataset's metadata
    pub async fn metadata(&self) -> Result<Metadata> {
        self.metadata
            .fetch(self.transport.as_ref(), &self.app_token)
            .await
    }

    /// Fetch only the column descriptions from the metadata
    pub async fn columns(&self) -> Result<Vec<Column>> {
        Ok(self.metadata().await?.columns)
    }
}

impl fmt::Debug for GetRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetRequest")
            .field("endpoint", &self.endpoint.as_str())
            .field("format", &self.format)
            .field("filters", &self.filters)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

/// A fully serialized GET request, independent of the [`GetRequest`] it was
/// prepared from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    url: Url,
    app_token: String,
}

impl PreparedRequest {
    /// Full request URL including the query string
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Convert into a transport request carrying the app token header
    pub fn into_http(self) -> HttpRequest {
        HttpRequest::get(self.url).header(APP_TOKEN_HEADER, self.app_token)
    }

    /// Send through `transport`
    pub async fn send(self, transport: &dyn Transport) -> Result<HttpResponse> {
        execute(transport, self.into_http()).await
    }
}
