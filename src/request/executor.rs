//! Single request execution and status classification

use crate::error::{Error, Result};
use crate::http::{HttpRequest, HttpResponse, Transport};
use tracing::{debug, warn};

/// Send one GET request and classify the response.
///
/// Statuses >= 400 become [`Error::Remote`] with the full body text; the
/// body is read to the end so the connection is released. Lower statuses
/// hand the live body to the caller. Transport failures pass through as-is.
pub(crate) async fn execute(
    transport: &dyn Transport,
    request: HttpRequest,
) -> Result<HttpResponse> {
    let url = request.url.to_string();
    debug!("GET {}", url);

    let response = transport.execute(request).await?;
    if response.is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await?;
    warn!("SODA error {} for GET {}", status, url);
    Err(Error::remote(status, url, body))
}
