//! Decoder implementations

use super::types::RecordDecoder;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde_json::{Map, Value};

// ============================================================================
// JSON Decoder
// ============================================================================

/// JSON decoder with optional record path extraction
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    /// Dot-separated path to the records array
    record_path: Option<String>,
}

impl JsonDecoder {
    /// Create a decoder for a top-level array of records
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder reading records from `path`, e.g. `features`
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            record_path: Some(path.into()),
        }
    }
}

impl RecordDecoder for JsonDecoder {
    fn decode(&self, body: &str) -> Result<Vec<JsonValue>> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))?;

        let records = match &self.record_path {
            Some(path) => path
                .split('.')
                .filter(|part| !part.is_empty())
                .try_fold(&value, |current, part| current.get(part)),
            None => Some(&value),
        };

        match records {
            Some(Value::Array(arr)) => Ok(arr.clone()),
            Some(Value::Null) | None => Ok(vec![]),
            Some(v) => Ok(vec![v.clone()]),
        }
    }
}

// ============================================================================
// CSV Decoder
// ============================================================================

/// CSV decoder. The first row is the header.
#[derive(Debug, Clone)]
pub struct CsvDecoder {
    delimiter: char,
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CsvDecoder {
    /// Create a comma-separated decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with a custom delimiter
    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Header row of `body`. An empty body has no header.
    pub fn header(&self, body: &str) -> Result<Vec<String>> {
        Ok(self.rows(body)?.into_iter().next().unwrap_or_default())
    }

    /// Split `body` into rows of fields. Quoted fields may contain the
    /// delimiter, doubled quotes and line breaks. Blank lines are skipped.
    pub fn rows(&self, body: &str) -> Result<Vec<Vec<String>>> {
        let mut rows = Vec::new();
        let mut row = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut row_started = false;
        let mut chars = body.chars().peekable();

        while let Some(c) = chars.next() {
            if in_quotes {
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        field.push('"');
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    field.push(c);
                }
                continue;
            }

            match c {
                '"' => {
                    in_quotes = true;
                    row_started = true;
                }
                '\r' => {}
                '\n' => {
                    if row_started {
                        row.push(std::mem::take(&mut field));
                        rows.push(std::mem::take(&mut row));
                    }
                    row_started = false;
                }
                c if c == self.delimiter => {
                    row.push(std::mem::take(&mut field));
                    row_started = true;
                }
                c => {
                    field.push(c);
                    row_started = true;
                }
            }
        }

        if in_quotes {
            return Err(Error::decode("CSV body ends inside a quoted field"));
        }
        if row_started {
            row.push(field);
            rows.push(row);
        }
        Ok(rows)
    }
}

impl RecordDecoder for CsvDecoder {
    fn decode(&self, body: &str) -> Result<Vec<JsonValue>> {
        let mut rows = self.rows(body)?.into_iter();
        let Some(header) = rows.next() else {
            return Ok(vec![]);
        };

        let records = rows
            .map(|fields| {
                let mut obj = Map::new();
                for (i, name) in header.iter().enumerate() {
                    let value = match fields.get(i) {
                        Some(cell) if !cell.is_empty() => Value::String(cell.clone()),
                        _ => Value::Null,
                    };
                    obj.insert(name.clone(), value);
                }
                Value::Object(obj)
            })
            .collect();
        Ok(records)
    }
}
