use super::*;
use chrono::NaiveDate;

use crate::util::form::validate;

fn invoice() -> Invoice {
    Invoice {
        id: 2,
        invoice_number: "INV-1".to_owned(),
        invoice_date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
        grn_id: 4,
        vendor_id: 1,
        quantity: 3.0,
        rate: 100.0,
        discount: None,
        tax_percentage: Some(18.0),
        remarks: None,
    }
}

#[test]
fn detail_lists_tax_and_total() {
    let rows = InvoiceForm::detail(&invoice(), &RefData::default());
    let get = |label: &str| rows.iter().find(|(l, _)| *l == label).map(|(_, v)| v.clone());
    assert_eq!(get("Tax %").as_deref(), Some("18%"));
    assert_eq!(get("Discount").as_deref(), Some("0.00"));
    assert_eq!(get("Tax").as_deref(), Some("54.00"));
    assert_eq!(get("Total").as_deref(), Some("354.00"));
    assert_eq!(get("GRN").as_deref(), Some("#4"));
}

#[test]
fn blank_required_fields_are_reported() {
    let draft = Draft::blank(InvoiceForm::FIELDS, None);
    let errors = validate(InvoiceForm::FIELDS, &draft);
    for key in ["invoice_number", "invoice_date", "grn_id", "vendor_id", "quantity", "rate"] {
        assert!(errors.contains_key(key), "{key} should be required");
    }
    assert!(!errors.contains_key("discount"));
    assert!(!errors.contains_key("remarks"));
}

#[test]
fn draft_round_trip_keeps_every_field() {
    let original = invoice();
    assert_eq!(InvoiceForm::from_draft(&InvoiceForm::to_draft(&original)), Invoice { id: 0, ..original });
}
