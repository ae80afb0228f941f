//! Goods received notes.
//!
//! Each GRN points at a purchase order; the expanded row summarises that
//! order (vendor, item, ordered quantity) next to what this note received.

#[cfg(test)]
#[path = "grns_test.rs"]
mod grns_test;

use leptos::prelude::*;
use records::Grn;

use crate::components::data_table::Column;
use crate::components::resource_page::resource_page;
use crate::pages::detail::attachment_cell;
use crate::state::resource::ResourceForm;
use crate::util::form::{Draft, FieldErrors, FieldSpec};
use crate::util::format::{EMPTY, date, money, opt_text, quantity};
use crate::util::lookup::{RefData, RefKind};

pub struct GrnForm;

impl ResourceForm for GrnForm {
    type Record = Grn;

    const REFS: &'static [RefKind] = &[RefKind::PurchaseOrders, RefKind::Locations, RefKind::Vendors, RefKind::Items];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("grn_number", "GRN Number").required(),
        FieldSpec::date("grn_date", "GRN Date").required(),
        FieldSpec::select("purchase_order_id", "Purchase Order", RefKind::PurchaseOrders).required(),
        FieldSpec::select("location_id", "Location", RefKind::Locations).required(),
        FieldSpec::number("received_quantity", "Received Quantity").required().non_negative(),
        FieldSpec::number("accepted_quantity", "Accepted Quantity").required().non_negative(),
        FieldSpec::textarea("remarks", "Remarks"),
        FieldSpec::file("attachment", "Attachment"),
    ];

    fn columns() -> Vec<Column<Grn>> {
        vec![
            Column::new("GRN No.", |g: &Grn, _| g.grn_number.clone()),
            Column::new("Date", |g: &Grn, _| date(g.grn_date)),
            Column::new("PO", |g: &Grn, refs| refs.label(RefKind::PurchaseOrders, g.purchase_order_id)),
            Column::new("Location", |g: &Grn, refs| refs.label(RefKind::Locations, g.location_id)),
            Column::new("Received", |g: &Grn, _| quantity(g.received_quantity)).numeric(),
            Column::new("Accepted", |g: &Grn, _| quantity(g.accepted_quantity)).numeric(),
        ]
    }

    fn to_draft(g: &Grn) -> Draft {
        Draft::default()
            .with("grn_number", g.grn_number.clone())
            .with_date("grn_date", g.grn_date)
            .with_id("purchase_order_id", g.purchase_order_id)
            .with_id("location_id", g.location_id)
            .with_number("received_quantity", g.received_quantity)
            .with_number("accepted_quantity", g.accepted_quantity)
            .with_opt("remarks", g.remarks.as_deref())
            .with_opt("attachment", g.attachment.as_deref())
    }

    fn from_draft(d: &Draft) -> Grn {
        Grn {
            id: 0,
            grn_number: d.text("grn_number"),
            grn_date: d.date("grn_date"),
            purchase_order_id: d.id("purchase_order_id"),
            location_id: d.id("location_id"),
            received_quantity: d.number("received_quantity"),
            accepted_quantity: d.number("accepted_quantity"),
            remarks: d.opt_text("remarks"),
            attachment: d.opt_text("attachment"),
        }
    }

    fn check(g: &Grn) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if g.accepted_quantity > g.received_quantity {
            errors.insert("accepted_quantity", "Accepted Quantity cannot exceed Received Quantity".to_owned());
        }
        errors
    }

    fn detail(g: &Grn, refs: &RefData) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("GRN Number", g.grn_number.clone()),
            ("GRN Date", date(g.grn_date)),
            ("Location", refs.label(RefKind::Locations, g.location_id)),
            ("Received", quantity(g.received_quantity)),
            ("Accepted", quantity(g.accepted_quantity)),
            ("Rejected", quantity(g.rejected_quantity())),
        ];
        match refs.purchase_order(g.purchase_order_id) {
            Some(po) => rows.extend([
                ("PO Number", po.po_number.clone()),
                ("Vendor", refs.label(RefKind::Vendors, po.vendor_id)),
                ("Item", refs.label(RefKind::Items, po.item_id)),
                ("Ordered", quantity(po.quantity)),
                ("PO Rate", money(po.rate)),
            ]),
            None => rows.push(("Purchase Order", EMPTY.to_owned())),
        }
        rows.extend([
            ("Remarks", opt_text(g.remarks.as_deref())),
            ("Attachment", attachment_cell(g.attachment.as_deref())),
        ]);
        rows
    }
}

#[component]
pub fn GrnsPage() -> impl IntoView {
    resource_page::<GrnForm>()
}
