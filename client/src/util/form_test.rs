use super::*;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name").required(),
    FieldSpec::text("phone", "Phone"),
    FieldSpec::number("quantity", "Quantity").required().non_negative(),
    FieldSpec::number("discount", "Discount").non_negative(),
    FieldSpec::number("adjustment", "Adjustment"),
    FieldSpec::date("po_date", "PO Date").required(),
    FieldSpec::select("vendor_id", "Vendor", RefKind::Vendors).required(),
    FieldSpec::checkbox("is_active", "Active"),
    FieldSpec::file("document", "Document"),
];

fn valid_draft() -> Draft {
    Draft::default()
        .with("name", "Acme")
        .with("quantity", "10")
        .with("po_date", "2024-04-01")
        .with("vendor_id", "3")
}

// =============================================================
// validate
// =============================================================

#[test]
fn valid_draft_has_no_errors() {
    assert!(validate(FIELDS, &valid_draft()).is_empty());
}

#[test]
fn blank_required_field_is_reported() {
    let draft = valid_draft().with("name", "   ");
    let errors = validate(FIELDS, &draft);
    assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn every_missing_required_field_is_reported() {
    let errors = validate(FIELDS, &Draft::default());
    let keys: Vec<_> = errors.keys().copied().collect();
    assert_eq!(keys, vec!["name", "po_date", "quantity", "vendor_id"]);
}

#[test]
fn optional_blank_fields_pass() {
    let draft = valid_draft().with("phone", "").with("discount", "");
    assert!(validate(FIELDS, &draft).is_empty());
}

#[test]
fn non_numeric_number_is_reported() {
    let errors = validate(FIELDS, &valid_draft().with("quantity", "ten"));
    assert_eq!(errors["quantity"], "Quantity must be a number");
}

#[test]
fn infinite_number_is_rejected() {
    let errors = validate(FIELDS, &valid_draft().with("quantity", "inf"));
    assert_eq!(errors["quantity"], "Quantity must be a number");
}

#[test]
fn negative_non_negative_number_is_reported() {
    let errors = validate(FIELDS, &valid_draft().with("discount", "-5"));
    assert_eq!(errors["discount"], "Discount cannot be negative");
}

#[test]
fn signed_number_allows_negative() {
    assert!(validate(FIELDS, &valid_draft().with("adjustment", "-2.5")).is_empty());
}

#[test]
fn malformed_date_is_reported() {
    let errors = validate(FIELDS, &valid_draft().with("po_date", "01/04/2024"));
    assert_eq!(errors["po_date"], "PO Date must be a valid date");
}

#[test]
fn impossible_date_is_reported() {
    let errors = validate(FIELDS, &valid_draft().with("po_date", "2024-02-30"));
    assert!(errors.contains_key("po_date"));
}

#[test]
fn select_requires_positive_id() {
    let errors = validate(FIELDS, &valid_draft().with("vendor_id", "0"));
    assert_eq!(errors["vendor_id"], "Vendor is required");
    let errors = validate(FIELDS, &valid_draft().with("vendor_id", "abc"));
    assert!(errors.contains_key("vendor_id"));
}

// =============================================================
// Draft
// =============================================================

#[test]
fn blank_draft_prefills_dates_and_checkboxes() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let draft = Draft::blank(FIELDS, Some(today));
    assert_eq!(draft.get("po_date"), "2024-06-30");
    assert_eq!(draft.get("is_active"), "false");
    assert_eq!(draft.get("name"), "");
}

#[test]
fn blank_draft_without_today_leaves_dates_empty() {
    let draft = Draft::blank(FIELDS, None);
    assert_eq!(draft.get("po_date"), "");
}

#[test]
fn getters_convert_validated_values() {
    let draft = valid_draft().with("discount", " 2.5 ").with("is_active", "true");
    assert_eq!(draft.text("name"), "Acme");
    assert_eq!(draft.id("vendor_id"), 3);
    assert!((draft.number("quantity") - 10.0).abs() < f64::EPSILON);
    assert_eq!(draft.opt_number("discount"), Some(2.5));
    assert_eq!(draft.date("po_date"), NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    assert!(draft.flag("is_active"));
}

#[test]
fn opt_text_treats_whitespace_as_absent() {
    let draft = Draft::default().with("phone", "  ");
    assert_eq!(draft.opt_text("phone"), None);
    assert_eq!(draft.opt_number("missing"), None);
}

#[test]
fn builders_round_numbers_without_trailing_zeros() {
    let draft = Draft::default()
        .with_number("quantity", 10.0)
        .with_opt_number("discount", None)
        .with_opt("phone", None)
        .with_flag("is_active", true);
    assert_eq!(draft.get("quantity"), "10");
    assert_eq!(draft.get("discount"), "");
    assert_eq!(draft.get("phone"), "");
    assert_eq!(draft.get("is_active"), "true");
}

#[test]
fn parse_helpers_trim_input() {
    assert_eq!(parse_number(" 4.5 "), Some(4.5));
    assert_eq!(parse_id(" 7 "), Some(7));
    assert_eq!(parse_date(" 2024-01-31 "), NaiveDate::from_ymd_opt(2024, 1, 31));
}
