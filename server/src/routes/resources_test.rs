use super::*;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use records::{Grn, Vendor};

const BOUNDARY: &str = "procura-boundary";

fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> String {
    let mut body = String::new();
    for (name, filename, content) in parts {
        body.push_str(&format!("--{BOUNDARY}\r\n"));
        match filename {
            Some(f) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\nContent-Type: application/pdf\r\n\r\n"
            )),
            None => body.push_str(&format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")),
        }
        body.push_str(content);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

async fn multipart_from(body: String) -> Multipart {
    let request = Request::builder()
        .method("POST")
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap();
    Multipart::from_request(request, &()).await.unwrap()
}

const GRN_JSON: &str = r#"{"grnNumber":"GRN-1","grnDate":"2024-05-02","purchaseOrderId":1,"locationId":2,"receivedQuantity":10,"acceptedQuantity":9}"#;

// =============================================================================
// is_multipart
// =============================================================================

#[test]
fn is_multipart_detects_form_data_with_boundary() {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, "multipart/form-data; boundary=x".parse().unwrap());
    assert!(is_multipart(&headers));
}

#[test]
fn is_multipart_is_case_insensitive() {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, "Multipart/Form-Data; boundary=x".parse().unwrap());
    assert!(is_multipart(&headers));
}

#[test]
fn is_multipart_rejects_json_and_missing_header() {
    let mut headers = HeaderMap::new();
    assert!(!is_multipart(&headers));
    headers.insert(CONTENT_TYPE, "application/json".parse().unwrap());
    assert!(!is_multipart(&headers));
}

// =============================================================================
// parse_payload
// =============================================================================

#[test]
fn parse_payload_decodes_camel_case_record() {
    let vendor: Vendor = parse_payload(r#"{"name":"Acme","gstNumber":"29ABC"}"#).unwrap();
    assert_eq!(vendor.name, "Acme");
    assert_eq!(vendor.gst_number.as_deref(), Some("29ABC"));
    assert_eq!(vendor.id, 0);
}

#[test]
fn parse_payload_reports_unprocessable_on_bad_json() {
    let err = parse_payload::<Vendor>("{not json").unwrap_err();
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(err.to_string().contains("Vendor"));
}

#[test]
fn parse_payload_reports_unprocessable_on_missing_field() {
    let err = parse_payload::<Vendor>(r#"{"phone":"123"}"#).unwrap_err();
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// read_multipart
// =============================================================================

#[tokio::test]
async fn read_multipart_collects_payload_and_file() {
    let body = multipart_body(&[("payload", None, GRN_JSON), ("file", Some("challan.pdf"), "%PDF-1.4")]);
    let submission = read_multipart::<Grn>(multipart_from(body).await).await.unwrap();

    assert_eq!(submission.record.grn_number, "GRN-1");
    let file = submission.file.unwrap();
    assert_eq!(file.name, "challan.pdf");
    assert_eq!(&file.bytes[..], b"%PDF-1.4");
}

#[tokio::test]
async fn read_multipart_without_file_part_has_no_upload() {
    let body = multipart_body(&[("payload", None, GRN_JSON)]);
    let submission = read_multipart::<Grn>(multipart_from(body).await).await.unwrap();
    assert!(submission.file.is_none());
}

#[tokio::test]
async fn read_multipart_ignores_empty_file_part() {
    let body = multipart_body(&[("payload", None, GRN_JSON), ("file", Some("empty.pdf"), "")]);
    let submission = read_multipart::<Grn>(multipart_from(body).await).await.unwrap();
    assert!(submission.file.is_none());
}

#[tokio::test]
async fn read_multipart_ignores_unknown_parts() {
    let body = multipart_body(&[("note", None, "hello"), ("payload", None, GRN_JSON)]);
    let submission = read_multipart::<Grn>(multipart_from(body).await).await.unwrap();
    assert!((submission.record.accepted_quantity - 9.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn read_multipart_without_payload_is_unprocessable() {
    let body = multipart_body(&[("file", Some("challan.pdf"), "%PDF")]);
    let err = read_multipart::<Grn>(multipart_from(body).await).await.err().unwrap();
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
