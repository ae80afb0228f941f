//! Quick GRNs: receipts booked without a prior purchase order.

use leptos::prelude::*;
use records::QuickGrn;

use crate::components::data_table::Column;
use crate::components::resource_page::resource_page;
use crate::pages::detail::attachment_cell;
use crate::state::resource::ResourceForm;
use crate::util::form::{Draft, FieldSpec};
use crate::util::format::{date, money, opt_text, quantity};
use crate::util::lookup::{RefData, RefKind};

pub struct QuickGrnForm;

impl ResourceForm for QuickGrnForm {
    type Record = QuickGrn;

    const REFS: &'static [RefKind] = &[RefKind::Vendors, RefKind::Institutes, RefKind::Locations, RefKind::Items];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("grn_number", "GRN Number").required(),
        FieldSpec::date("grn_date", "GRN Date").required(),
        FieldSpec::select("vendor_id", "Vendor", RefKind::Vendors).required(),
        FieldSpec::select("institute_id", "Institute", RefKind::Institutes).required(),
        FieldSpec::select("location_id", "Location", RefKind::Locations).required(),
        FieldSpec::select("item_id", "Item", RefKind::Items).required(),
        FieldSpec::number("quantity", "Quantity").required().non_negative(),
        FieldSpec::number("rate", "Rate").required().non_negative(),
        FieldSpec::textarea("remarks", "Remarks"),
        FieldSpec::file("attachment", "Attachment"),
    ];

    fn columns() -> Vec<Column<QuickGrn>> {
        vec![
            Column::new("GRN No.", |q: &QuickGrn, _| q.grn_number.clone()),
            Column::new("Date", |q: &QuickGrn, _| date(q.grn_date)),
            Column::new("Vendor", |q: &QuickGrn, refs| refs.label(RefKind::Vendors, q.vendor_id)),
            Column::new("Item", |q: &QuickGrn, refs| refs.label(RefKind::Items, q.item_id)),
            Column::new("Qty", |q: &QuickGrn, _| quantity(q.quantity)).numeric(),
            Column::new("Value", |q: &QuickGrn, _| money(q.value())).numeric(),
        ]
    }

    fn to_draft(q: &QuickGrn) -> Draft {
        Draft::default()
            .with("grn_number", q.grn_number.clone())
            .with_date("grn_date", q.grn_date)
            .with_id("vendor_id", q.vendor_id)
            .with_id("institute_id", q.institute_id)
            .with_id("location_id", q.location_id)
            .with_id("item_id", q.item_id)
            .with_number("quantity", q.quantity)
            .with_number("rate", q.rate)
            .with_opt("remarks", q.remarks.as_deref())
            .with_opt("attachment", q.attachment.as_deref())
    }

    fn from_draft(d: &Draft) -> QuickGrn {
        QuickGrn {
            id: 0,
            grn_number: d.text("grn_number"),
            grn_date: d.date("grn_date"),
            vendor_id: d.id("vendor_id"),
            institute_id: d.id("institute_id"),
            location_id: d.id("location_id"),
            item_id: d.id("item_id"),
            quantity: d.number("quantity"),
            rate: d.number("rate"),
            remarks: d.opt_text("remarks"),
            attachment: d.opt_text("attachment"),
        }
    }

    fn detail(q: &QuickGrn, refs: &RefData) -> Vec<(&'static str, String)> {
        vec![
            ("GRN Number", q.grn_number.clone()),
            ("GRN Date", date(q.grn_date)),
            ("Vendor", refs.label(RefKind::Vendors, q.vendor_id)),
            ("Institute", refs.label(RefKind::Institutes, q.institute_id)),
            ("Location", refs.label(RefKind::Locations, q.location_id)),
            ("Item", refs.label(RefKind::Items, q.item_id)),
            ("Quantity", quantity(q.quantity)),
            ("Rate", money(q.rate)),
            ("Value", money(q.value())),
            ("Remarks", opt_text(q.remarks.as_deref())),
            ("Attachment", attachment_cell(q.attachment.as_deref())),
        ]
    }
}

#[component]
pub fn QuickGrnsPage() -> impl IntoView {
    resource_page::<QuickGrnForm>()
}
