//! Metadata URL derivation and fetching

use super::types::Metadata;
use crate::error::{Error, Result};
use crate::http::{HttpRequest, Transport, APP_TOKEN_HEADER};
use crate::request::execute;
use url::Url;

/// Length of a resource identifier such as `hma6-9xbg`
const RESOURCE_ID_LEN: usize = 9;

/// Where a dataset's metadata lives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataLocator {
    base_url: String,
    identifier: String,
}

impl MetadataLocator {
    /// Split a resource endpoint such as `https://data.ct.gov/resource/hma6-9xbg`
    /// into `https://data.ct.gov` and `hma6-9xbg`
    pub fn from_endpoint(endpoint: &Url) -> Self {
        let base_url = match (endpoint.host_str(), endpoint.port()) {
            (Some(host), Some(port)) => format!("{}://{host}:{port}", endpoint.scheme()),
            (Some(host), None) => format!("{}://{host}", endpoint.scheme()),
            (None, _) => String::new(),
        };
        let identifier = endpoint
            .path()
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();

        Self {
            base_url,
            identifier,
        }
    }

    /// Scheme and host of the portal
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resource identifier
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Metadata URL, `<base>/views/<identifier>`
    pub fn url(&self) -> Result<Url> {
        let id = self.identifier.as_bytes();
        if self.base_url.is_empty() || id.len() != RESOURCE_ID_LEN || id[4] != b'-' {
            return Err(Error::InvalidResourceId {
                identifier: self.identifier.clone(),
            });
        }
        Ok(Url::parse(&format!(
            "{}/views/{}",
            self.base_url, self.identifier
        ))?)
    }

    /// Fetch and decode the metadata
    pub async fn fetch(&self, transport: &dyn Transport, app_token: &str) -> Result<Metadata> {
        let request = HttpRequest::get(self.url()?).header(APP_TOKEN_HEADER, app_token);
        execute(transport, request).await?.json().await
    }
}
