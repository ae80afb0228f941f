//! Manual stock adjustments.
//!
//! Quantities are signed: positive entries add stock (opening balances,
//! count corrections up), negative ones write it off.

use leptos::prelude::*;
use records::StockEntry;

use crate::components::data_table::Column;
use crate::components::resource_page::resource_page;
use crate::state::resource::ResourceForm;
use crate::util::form::{Draft, FieldSpec};
use crate::util::format::{date, opt_text, quantity};
use crate::util::lookup::RefKind;

pub struct StockEntryForm;

impl ResourceForm for StockEntryForm {
    type Record = StockEntry;

    const REFS: &'static [RefKind] = &[RefKind::Items, RefKind::Locations];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::date("entry_date", "Entry Date").required(),
        FieldSpec::select("item_id", "Item", RefKind::Items).required(),
        FieldSpec::select("location_id", "Location", RefKind::Locations).required(),
        FieldSpec::number("quantity", "Quantity").required(),
        FieldSpec::textarea("remarks", "Remarks"),
    ];

    fn columns() -> Vec<Column<StockEntry>> {
        vec![
            Column::new("Date", |e: &StockEntry, _| date(e.entry_date)),
            Column::new("Item", |e: &StockEntry, refs| refs.label(RefKind::Items, e.item_id)),
            Column::new("Location", |e: &StockEntry, refs| refs.label(RefKind::Locations, e.location_id)),
            Column::new("Qty", |e: &StockEntry, _| quantity(e.quantity)).numeric(),
            Column::new("Remarks", |e: &StockEntry, _| opt_text(e.remarks.as_deref())),
        ]
    }

    fn to_draft(e: &StockEntry) -> Draft {
        Draft::default()
            .with_date("entry_date", e.entry_date)
            .with_id("item_id", e.item_id)
            .with_id("location_id", e.location_id)
            .with_number("quantity", e.quantity)
            .with_opt("remarks", e.remarks.as_deref())
    }

    fn from_draft(d: &Draft) -> StockEntry {
        StockEntry {
            id: 0,
            entry_date: d.date("entry_date"),
            item_id: d.id("item_id"),
            location_id: d.id("location_id"),
            quantity: d.number("quantity"),
            remarks: d.opt_text("remarks"),
        }
    }
}

#[component]
pub fn StockEntriesPage() -> impl IntoView {
    resource_page::<StockEntryForm>()
}
