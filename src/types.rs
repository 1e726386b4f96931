//! Common types used throughout the SODA client
//!
//! Shared type aliases and the response format tag.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Response Format
// ============================================================================

/// Format of the response body, used as the endpoint's file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Record-oriented JSON array (default)
    #[default]
    Json,
    /// Tabular CSV with a header row
    Csv,
    /// GeoJSON feature collection
    GeoJson,
    /// XML rows
    Xml,
}

impl ResponseFormat {
    /// File extension appended to the resource endpoint
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::GeoJson => "geojson",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
