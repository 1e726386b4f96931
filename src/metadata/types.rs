//! Metadata document types
//!
//! Only the commonly used parts of the view document are typed; unknown
//! keys are ignored. Missing keys and explicit `null`s take their defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Deserialize `null` as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Dataset metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    /// Resource identifier, e.g. `y6p2-px98`
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub attribution: String,
    /// How the portal renders the view (`table`, `map`, ...)
    #[serde(deserialize_with = "null_as_default")]
    pub display_type: String,
    /// Backing kind of the view (`tabular`, `blobby`, `href`)
    #[serde(deserialize_with = "null_as_default")]
    pub view_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub license_id: String,
    pub license: Option<License>,
    #[serde(deserialize_with = "null_as_default")]
    pub columns: Vec<Column>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub flags: Vec<String>,
    /// Rights of the requesting user on this view
    #[serde(deserialize_with = "null_as_default")]
    pub rights: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub grants: Vec<Grant>,
    #[serde(deserialize_with = "null_as_default")]
    pub average_rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_times_rated: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub download_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub view_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub number_of_comments: i64,
    /// Internal object id of this version of the view
    #[serde(deserialize_with = "null_as_default")]
    pub oid: i64,
    /// Internal id of the table shared by all versions of the view
    #[serde(deserialize_with = "null_as_default")]
    pub table_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub new_backend: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub publication_append_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub publication_group: i64,
    /// `published` or `unpublished` (working copy)
    #[serde(deserialize_with = "null_as_default")]
    pub publication_stage: String,
    /// User id of the last row update
    #[serde(deserialize_with = "null_as_default")]
    pub rows_updated_by: String,
    pub owner: Option<User>,
    pub table_author: Option<User>,
    /// Free-form portal metadata (custom fields, render config, ...)
    pub metadata: Value,
    /// Creation time, epoch seconds on the wire
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last search index refresh
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub index_updated_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub publication_date: Option<DateTime<Utc>>,
    /// Last change to the data rows
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub rows_updated_at: Option<DateTime<Utc>>,
    /// Last change to the view definition (name, columns, ...)
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub view_last_modified: Option<DateTime<Utc>>,
}

/// One data column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Column {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Human readable name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// API field name, usable in SoQL clauses
    #[serde(deserialize_with = "null_as_default")]
    pub field_name: String,
    /// SoQL type (`text`, `number`, `calendar_date`, ...)
    #[serde(deserialize_with = "null_as_default")]
    pub data_type_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub render_type_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub table_column_id: i64,
    /// Display width in pixels
    #[serde(deserialize_with = "null_as_default")]
    pub width: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub format: ColumnFormat,
}

/// Column display format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnFormat {
    #[serde(deserialize_with = "null_as_default")]
    pub precision_style: String,
    #[serde(deserialize_with = "null_as_default")]
    pub align: String,
    /// `"true"` when thousands separators are hidden
    #[serde(deserialize_with = "null_as_default")]
    pub no_commas: String,
}

/// Dataset license
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Access grant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grant {
    #[serde(deserialize_with = "null_as_default")]
    pub inherited: bool,
    /// Grant kind (`viewer`, `contributor`, ...)
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub flags: Vec<String>,
}

/// Portal user (owner or table author)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub screen_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rights: Vec<String>,
}
