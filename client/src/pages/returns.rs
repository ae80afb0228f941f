//! Goods returned to vendors.

use leptos::prelude::*;
use records::Return;

use crate::components::data_table::Column;
use crate::components::resource_page::resource_page;
use crate::state::resource::ResourceForm;
use crate::util::form::{Draft, FieldSpec};
use crate::util::format::{date, quantity};
use crate::util::lookup::RefKind;

pub struct ReturnForm;

impl ResourceForm for ReturnForm {
    type Record = Return;

    const REFS: &'static [RefKind] = &[RefKind::Grns, RefKind::Vendors, RefKind::Items, RefKind::Locations];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::date("return_date", "Return Date").required(),
        FieldSpec::select("grn_id", "GRN", RefKind::Grns).required(),
        FieldSpec::select("vendor_id", "Vendor", RefKind::Vendors).required(),
        FieldSpec::select("item_id", "Item", RefKind::Items).required(),
        FieldSpec::select("location_id", "Location", RefKind::Locations).required(),
        FieldSpec::number("quantity", "Quantity").required().non_negative(),
        FieldSpec::textarea("reason", "Reason").required(),
    ];

    fn columns() -> Vec<Column<Return>> {
        vec![
            Column::new("Date", |r: &Return, _| date(r.return_date)),
            Column::new("GRN", |r: &Return, refs| refs.label(RefKind::Grns, r.grn_id)),
            Column::new("Vendor", |r: &Return, refs| refs.label(RefKind::Vendors, r.vendor_id)),
            Column::new("Item", |r: &Return, refs| refs.label(RefKind::Items, r.item_id)),
            Column::new("Location", |r: &Return, refs| refs.label(RefKind::Locations, r.location_id)),
            Column::new("Qty", |r: &Return, _| quantity(r.quantity)).numeric(),
            Column::new("Reason", |r: &Return, _| r.reason.clone()),
        ]
    }

    fn to_draft(r: &Return) -> Draft {
        Draft::default()
            .with_date("return_date", r.return_date)
            .with_id("grn_id", r.grn_id)
            .with_id("vendor_id", r.vendor_id)
            .with_id("item_id", r.item_id)
            .with_id("location_id", r.location_id)
            .with_number("quantity", r.quantity)
            .with("reason", r.reason.clone())
    }

    fn from_draft(d: &Draft) -> Return {
        Return {
            id: 0,
            return_date: d.date("return_date"),
            grn_id: d.id("grn_id"),
            vendor_id: d.id("vendor_id"),
            item_id: d.id("item_id"),
            location_id: d.id("location_id"),
            quantity: d.number("quantity"),
            reason: d.text("reason"),
        }
    }
}

#[component]
pub fn ReturnsPage() -> impl IntoView {
    resource_page::<ReturnForm>()
}
