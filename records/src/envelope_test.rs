use super::*;
use crate::master::Vendor;
use crate::transaction::PurchaseOrder;

const VENDOR: &str = r#"{"id":1,"name":"Acme"}"#;

#[test]
fn decode_one_accepts_data_envelope() {
    let v: Vendor = decode_one(&format!(r#"{{"data":{VENDOR}}}"#)).unwrap();
    assert_eq!(v.name, "Acme");
}

#[test]
fn decode_one_accepts_resource_key() {
    let v: Vendor = decode_one(&format!(r#"{{"vendor":{VENDOR}}}"#)).unwrap();
    assert_eq!(v.id, 1);
}

#[test]
fn decode_one_accepts_bare_record() {
    let v: Vendor = decode_one(VENDOR).unwrap();
    assert_eq!(v.name, "Acme");
}

#[test]
fn decode_list_accepts_plural_and_path_keys() {
    let list: Vec<Vendor> = decode_list(&format!(r#"{{"vendors":[{VENDOR}]}}"#)).unwrap();
    assert_eq!(list.len(), 1);

    let pos: Vec<PurchaseOrder> = decode_list(r#"{"purchase-orders":[]}"#).unwrap();
    assert!(pos.is_empty());
}

#[test]
fn decode_list_accepts_bare_array() {
    let list: Vec<Vendor> = decode_list(&format!("[{VENDOR},{VENDOR}]")).unwrap();
    assert_eq!(list.len(), 2);
}

#[test]
fn data_key_wins_over_resource_key() {
    let raw = format!(r#"{{"vendor":{{"id":2,"name":"Other"}},"data":{VENDOR}}}"#);
    let v: Vendor = decode_one(&raw).unwrap();
    assert_eq!(v.id, 1);
}

#[test]
fn decode_reports_shape_errors_with_key() {
    let err = decode_list::<Vendor>(r#"{"data":{"not":"a list"}}"#).unwrap_err();
    assert!(matches!(err, RecordError::Shape { ref key, .. } if key == "data"));
}

#[test]
fn decode_rejects_invalid_json() {
    assert!(matches!(decode_one::<Vendor>("not json"), Err(RecordError::Json(_))));
}

#[test]
fn envelope_keys_dedup_plural_and_path() {
    assert_eq!(envelope_keys::<Vendor>(), vec!["data", "vendor", "vendors"]);
    assert_eq!(envelope_keys::<PurchaseOrder>(), vec!["data", "purchaseOrder", "purchaseOrders", "purchase-orders"]);
}

#[test]
fn error_message_prefers_error_body() {
    assert_eq!(error_message(r#"{"error":"duplicate"}"#).as_deref(), Some("duplicate"));
    assert_eq!(error_message("  gateway timeout \n").as_deref(), Some("gateway timeout"));
    assert_eq!(error_message("   "), None);
}
