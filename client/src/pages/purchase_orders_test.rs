use super::*;
use chrono::NaiveDate;
use records::{Grn, Vendor};

use crate::util::form::validate;

fn order() -> PurchaseOrder {
    PurchaseOrder {
        id: 7,
        po_number: "PO-001".to_owned(),
        po_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        financial_year_id: 1,
        institute_id: 2,
        vendor_id: 3,
        item_id: 4,
        quantity: 10.0,
        rate: 5.0,
        discount: Some(5.0),
        tax_percentage: Some(10.0),
        remarks: None,
        document: Some("purchase-orders/quote.pdf".to_owned()),
    }
}

fn grn(accepted: f64) -> Grn {
    Grn { id: 1, purchase_order_id: 7, received_quantity: accepted, accepted_quantity: accepted, ..Grn::default() }
}

fn value<'a>(rows: &'a [(&'static str, String)], label: &str) -> &'a str {
    rows.iter().find(|(l, _)| *l == label).map_or("", |(_, v)| v.as_str())
}

// =============================================================
// draft conversion
// =============================================================

#[test]
fn draft_round_trip_keeps_every_field() {
    let original = order();
    let draft = PurchaseOrderForm::to_draft(&original);
    assert!(validate(PurchaseOrderForm::FIELDS, &draft).is_empty());
    assert_eq!(PurchaseOrderForm::from_draft(&draft), PurchaseOrder { id: 0, ..original });
}

#[test]
fn blank_optional_numbers_become_none() {
    let draft = PurchaseOrderForm::to_draft(&order()).with("discount", "  ").with("tax_percentage", "");
    let po = PurchaseOrderForm::from_draft(&draft);
    assert_eq!(po.discount, None);
    assert_eq!(po.tax_percentage, None);
}

#[test]
fn negative_rate_is_rejected() {
    let draft = PurchaseOrderForm::to_draft(&order()).with("rate", "-1");
    let errors = validate(PurchaseOrderForm::FIELDS, &draft);
    assert_eq!(errors.get("rate").map(String::as_str), Some("Rate cannot be negative"));
}

#[test]
fn missing_vendor_is_rejected() {
    let draft = PurchaseOrderForm::to_draft(&order()).with("vendor_id", "");
    assert!(validate(PurchaseOrderForm::FIELDS, &draft).contains_key("vendor_id"));
}

// =============================================================
// detail
// =============================================================

#[test]
fn detail_shows_totals_and_partial_receipt() {
    let mut refs = RefData::default();
    refs.insert(RefKind::Vendors, &[Vendor { id: 3, name: "Acme".to_owned(), ..Vendor::default() }]);
    refs.grns = vec![grn(4.0)];

    let rows = PurchaseOrderForm::detail(&order(), &refs);
    assert_eq!(value(&rows, "Vendor"), "Acme");
    assert_eq!(value(&rows, "Item"), "#4");
    assert_eq!(value(&rows, "Total"), "49.50");
    assert_eq!(value(&rows, "Received"), "4");
    assert_eq!(value(&rows, "Pending"), "6");
    assert_eq!(value(&rows, "Status"), "Open");
    assert_eq!(value(&rows, "Document"), "quote.pdf");
}

#[test]
fn detail_marks_fully_received_orders() {
    let mut refs = RefData::default();
    refs.grns = vec![grn(6.0), grn(4.0)];
    let rows = PurchaseOrderForm::detail(&order(), &refs);
    assert_eq!(value(&rows, "Pending"), "0");
    assert_eq!(value(&rows, "Status"), "Received");
}

#[test]
fn total_column_uses_line_totals() {
    let columns = PurchaseOrderForm::columns();
    let total = columns.iter().find(|c| c.header == "Total").unwrap();
    assert!(total.numeric);
    assert_eq!((total.render)(&order(), &RefData::default()), "49.50");
}
