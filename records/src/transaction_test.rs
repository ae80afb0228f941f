use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn purchase_order_totals_follow_priced_formula() {
    let po = PurchaseOrder {
        quantity: 10.0,
        rate: 12.0,
        discount: Some(20.0),
        tax_percentage: Some(5.0),
        ..PurchaseOrder::default()
    };
    let t = po.totals();
    assert!((t.tax - 5.0).abs() < 1e-9);
    assert!((t.total - 105.0).abs() < 1e-9);
}

#[test]
fn purchase_order_attachment_maps_to_document() {
    let mut po = PurchaseOrder::default();
    assert!(po.attachment().is_none());
    po.set_attachment(Some("purchase-orders/a.pdf".into()));
    assert_eq!(po.document.as_deref(), Some("purchase-orders/a.pdf"));
    assert!(PurchaseOrder::ATTACHMENT);
}

#[test]
fn records_without_documents_ignore_set_attachment() {
    let mut inv = Invoice::default();
    inv.set_attachment(Some("x".into()));
    assert!(inv.attachment().is_none());
    assert!(!Invoice::ATTACHMENT);
}

#[test]
fn grn_rejected_quantity_never_negative() {
    let grn = Grn { received_quantity: 10.0, accepted_quantity: 8.0, ..Grn::default() };
    assert!((grn.rejected_quantity() - 2.0).abs() < 1e-9);
    let over = Grn { received_quantity: 5.0, accepted_quantity: 6.0, ..Grn::default() };
    assert!(over.rejected_quantity().abs() < 1e-9);
}

#[test]
fn grn_round_trips_wire_names() {
    let grn: Grn = serde_json::from_str(
        r#"{"id":3,"grnNumber":"G-1","grnDate":"2024-05-02","purchaseOrderId":7,"locationId":2,
            "receivedQuantity":4,"acceptedQuantity":4}"#,
    )
    .unwrap();
    assert_eq!(grn.purchase_order_id, 7);
    assert_eq!(grn.grn_date, date(2024, 5, 2));
    assert!(grn.attachment.is_none());
}

#[test]
fn quick_grn_value_is_quantity_times_rate() {
    let q = QuickGrn { quantity: 3.0, rate: 7.5, ..QuickGrn::default() };
    assert!((q.value() - 22.5).abs() < 1e-9);
}

#[test]
fn set_id_overwrites_identifier() {
    let mut ret = Return { id: 1, ..Return::default() };
    ret.set_id(42);
    assert_eq!(ret.id(), 42);
}

#[test]
fn unlabelled_records_fall_back_to_hash_id() {
    let entry = StockEntry { id: 12, ..StockEntry::default() };
    assert_eq!(entry.label(), "#12");
}

#[test]
fn quick_invoice_key_is_camel_case() {
    assert_eq!(QuickInvoice::KEY, "quickInvoice");
    assert_eq!(QuickInvoice::PATH, "quick-invoices");
}
