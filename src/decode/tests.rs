//! Tests for decode module

use super::*;
use crate::http::HttpResponse;
use crate::types::ResponseFormat;
use serde_json::json;

// ============================================================================
// JSON Decoder Tests
// ============================================================================

#[test]
fn test_json_decoder_array() {
    let decoder = JsonDecoder::new();
    let records = decoder
        .decode(r#"[{"farm_name": "Bell Nurseries"}, {"farm_name": "Other"}]"#)
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["farm_name"], "Bell Nurseries");
}

#[test]
fn test_json_decoder_single_object() {
    let records = JsonDecoder::new().decode(r#"{"id": 1}"#).unwrap();
    assert_eq!(records, vec![json!({"id": 1})]);
}

#[test]
fn test_json_decoder_with_path() {
    let body = r#"{"type": "FeatureCollection", "features": [{"id": 1}, {"id": 2}]}"#;
    let records = JsonDecoder::with_path("features").decode(body).unwrap();
    assert_eq!(records.len(), 2);

    let records = JsonDecoder::with_path("missing.path").decode(body).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_json_decoder_invalid() {
    let err = JsonDecoder::new().decode("not json").unwrap_err();
    assert!(err.is_decode());
}

// ============================================================================
// CSV Decoder Tests
// ============================================================================

#[test]
fn test_csv_decoder_basic() {
    let body = "farm_name,item\nBell Nurseries,Radishes\nOther Farm,Lettuce\n";
    let records = CsvDecoder::new().decode(body).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["farm_name"], "Bell Nurseries");
    assert_eq!(records[1]["item"], "Lettuce");
}

#[test]
fn test_csv_decoder_quoted_fields() {
    let body = "name,notes\r\n\"Smith, John\",\"said \"\"hi\"\"\nthen left\"\r\n";
    let records = CsvDecoder::new().decode(body).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Smith, John");
    assert_eq!(records[0]["notes"], "said \"hi\"\nthen left");
}

#[test]
fn test_csv_decoder_empty_cells_are_null() {
    let records = CsvDecoder::new().decode("a,b,c\n1,,\n").unwrap();
    assert_eq!(records[0], json!({"a": "1", "b": null, "c": null}));
}

#[test]
fn test_csv_decoder_skips_blank_lines_and_missing_newline() {
    let records = CsvDecoder::new().decode("a\n\n1\n\n2").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["a"], "2");
}

#[test]
fn test_csv_decoder_custom_delimiter() {
    let records = CsvDecoder::with_delimiter(';').decode("a;b\n1;2\n").unwrap();
    assert_eq!(records[0], json!({"a": "1", "b": "2"}));
}

#[test]
fn test_csv_header() {
    let decoder = CsvDecoder::new();
    assert_eq!(
        decoder.header("\"farm name\",category\nx,y\n").unwrap(),
        vec!["farm name".to_string(), "category".to_string()]
    );
    assert!(decoder.header("").unwrap().is_empty());
}

#[test]
fn test_csv_unterminated_quote() {
    let err = CsvDecoder::new().rows("a,\"b\n1,2").unwrap_err();
    assert!(err.is_decode());
}

// ============================================================================
// Dispatch Tests
// ============================================================================

#[test]
fn test_decoder_for_formats() {
    assert!(decoder_for(ResponseFormat::Json).is_some());
    assert!(decoder_for(ResponseFormat::GeoJson).is_some());
    assert!(decoder_for(ResponseFormat::Csv).is_some());
    assert!(decoder_for(ResponseFormat::Xml).is_none());
}

#[tokio::test]
async fn test_decode_response_csv() {
    let response = HttpResponse::from_bytes(200, "a,b\n1,2\n");
    let records = decode_response(response, ResponseFormat::Csv).await.unwrap();
    assert_eq!(records, vec![json!({"a": "1", "b": "2"})]);
}

#[tokio::test]
async fn test_decode_response_xml_unsupported() {
    let response = HttpResponse::from_bytes(200, "<rows/>");
    let err = decode_response(response, ResponseFormat::Xml).await.unwrap_err();
    assert!(err.is_configuration());
}
