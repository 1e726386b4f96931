//! Dataset probes: record count, field names, last modification
//!
//! Each probe reshapes the request through a [`ScopedOverride`], so the
//! caller's select, order, limit, offset and format survive the call.

use super::get::GetRequest;
use super::scoped::ScopedOverride;
use crate::decode::CsvDecoder;
use crate::error::{Error, Result};
use crate::types::ResponseFormat;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Aggregate pseudo-column returning the number of matching rows
pub const COUNT_COLUMN: &str = "count(*)";

/// Header carrying the dataset's true last modification time
pub const TRUTH_LAST_MODIFIED_HEADER: &str = "X-Soda2-Truth-Last-Modified";

const LAST_MODIFIED_HEADER: &str = "Last-Modified";

impl GetRequest {
    /// Number of records matching the filters and `$where` predicate
    pub async fn count(&mut self) -> Result<u64> {
        let mut scoped = ScopedOverride::new(self);
        scoped.format = ResponseFormat::Json;
        scoped.query.select = vec![COUNT_COLUMN.to_string()];
        scoped.query.clear_order();
        scoped.query.limit = 0;
        scoped.query.offset = 0;

        let body = scoped.get().await?.text().await?;
        parse_count(&body)
    }

    /// Names of all fields in the dataset, ignoring the selected columns.
    /// Spaces in field names are replaced by underscores.
    pub async fn fields(&mut self) -> Result<Vec<String>> {
        let mut scoped = ScopedOverride::new(self);
        scoped.format = ResponseFormat::Csv;
        scoped.query.select.clear();
        scoped.query.clear_order();
        scoped.query.limit = 1;
        scoped.query.offset = 0;

        let body = scoped.get().await?.text().await?;
        let fields = CsvDecoder::new()
            .header(&body)?
            .into_iter()
            .map(|field| field.replace(' ', "_"))
            .collect();
        Ok(fields)
    }

    /// When the dataset was last updated
    pub async fn modified(&mut self) -> Result<DateTime<Utc>> {
        let mut scoped = ScopedOverride::new(self);
        scoped.format = ResponseFormat::Json;
        scoped.query.select.clear();
        scoped.query.clear_order();
        scoped.query.limit = 1;
        scoped.query.offset = 0;

        let response = scoped.get().await?;
        let raw = response
            .header(TRUTH_LAST_MODIFIED_HEADER)
            .filter(|v| !v.is_empty())
            .or_else(|| response.header(LAST_MODIFIED_HEADER))
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                Error::decode("cannot get last modified date, field not present in HTTP header")
            })?;

        DateTime::parse_from_rfc2822(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::decode(format!("invalid last modified date '{raw}': {e}")))
    }
}

/// Parse `[{"count": "123"}]` into 123
pub(crate) fn parse_count(body: &str) -> Result<u64> {
    let rows: Vec<Map<String, Value>> = serde_json::from_str(body)
        .map_err(|e| Error::decode(format!("Failed to parse count response: {e}")))?;

    let row = rows
        .into_iter()
        .next()
        .ok_or_else(|| Error::decode("empty count response"))?;

    let value = row
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("count"))
        .map(|(_, value)| value)
        .or_else(|| if row.len() == 1 { row.values().next() } else { None })
        .ok_or_else(|| Error::decode("count field missing from response"))?;

    match value {
        Value::String(s) => s
            .parse::<u64>()
            .map_err(|e| Error::decode(format!("invalid count '{s}': {e}"))),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| Error::decode(format!("invalid count {n}"))),
        other => Err(Error::decode(format!("invalid count {other}"))),
    }
}
