//! Response decoder module
//!
//! Supports: JSON, GeoJSON, CSV
//!
//! # Overview
//!
//! Decoding response bodies is left to the caller; these decoders are a
//! convenience for the common formats. Each one turns a body into a list of
//! JSON records. CSV cells are kept as strings, the way the JSON format
//! returns them.

mod decoders;
mod types;

pub use decoders::{CsvDecoder, JsonDecoder};
pub use types::{decode_response, decoder_for, RecordDecoder};

#[cfg(test)]
mod tests;
