//! Decoder trait and format dispatch

use super::decoders::{CsvDecoder, JsonDecoder};
use crate::error::{Error, Result};
use crate::http::HttpResponse;
use crate::types::{JsonValue, ResponseFormat};

/// Trait for decoding response bodies into records
pub trait RecordDecoder: Send + Sync {
    /// Decode the response body into a list of records
    fn decode(&self, body: &str) -> Result<Vec<JsonValue>>;
}

/// Decoder for a response format, if one exists
pub fn decoder_for(format: ResponseFormat) -> Option<Box<dyn RecordDecoder>> {
    match format {
        ResponseFormat::Json => Some(Box::new(JsonDecoder::new())),
        ResponseFormat::GeoJson => Some(Box::new(JsonDecoder::with_path("features"))),
        ResponseFormat::Csv => Some(Box::new(CsvDecoder::new())),
        ResponseFormat::Xml => None,
    }
}

/// Read a whole response and decode it as `format`
pub async fn decode_response(response: HttpResponse, format: ResponseFormat) -> Result<Vec<JsonValue>> {
    let decoder = decoder_for(format)
        .ok_or_else(|| Error::config(format!("no record decoder for format '{format}'")))?;
    let body = response.text().await?;
    decoder.decode(&body)
}
